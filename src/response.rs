//! Response bodies returned by the API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field values keyed by field name, shaped by the schema and field filter
pub type Fields = Map<String, Value>;

/// A single row from a sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub row_id: u32,
    /// Subrow ID, for sheets that have subrows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subrow_id: Option<u16>,
    pub fields: Fields,
    /// Fields from the transient sheet, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transient: Option<Fields>,
}

/// `GET /sheet/{sheet}/{row}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowResponse {
    #[serde(flatten)]
    pub row: Row,
    /// Canonical specifier of the schema used
    pub schema: String,
    /// Canonical specifier of the game version used
    pub version: String,
}

/// `GET /sheet/{sheet}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetResponse {
    pub rows: Vec<Row>,
    pub schema: String,
    pub version: String,
}

/// One entry of the sheet index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetInfo {
    pub name: String,
}

/// `GET /sheet`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetListResponse {
    pub sheets: Vec<SheetInfo>,
}

impl SheetListResponse {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|s| s.name.as_str())
    }
}

/// A row matched by a search, with its relevance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub score: f64,
    /// Sheet the row belongs to
    pub sheet: String,
    #[serde(flatten)]
    pub row: Row,
}

/// `GET /search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub schema: String,
    pub version: String,
    /// Cursor for the next page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl SearchResponse {
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }
}

/// A game version known to the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    /// Canonical key
    pub key: String,
    /// Names for this version, e.g. `7.0`, `latest`
    pub names: Vec<String>,
}

/// `GET /version`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionsResponse {
    pub versions: Vec<Version>,
}

/// Error body sent with non-200 responses
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    pub code: Option<u16>,
    pub message: Option<String>,
}
