use super::XivApi;
use super::params::{data_setters, limit_setter, version_setter, DataParams, QueryParams};
use crate::error::Result;
use crate::response::{RowResponse, SheetListResponse, SheetResponse};
use reqwest::Url;

/// `GET /sheet`: names of every sheet
#[derive(Debug, Clone)]
#[must_use]
pub struct SheetIndexRequest<'a> {
    api: &'a XivApi,
    params: DataParams,
}

impl<'a> SheetIndexRequest<'a> {
    pub(super) fn new(api: &'a XivApi) -> Self {
        Self {
            api,
            params: DataParams::from_config(api.config()),
        }
    }

    version_setter!();

    pub fn url(&self) -> Result<Url> {
        let params = QueryParams::new().push("version", self.params.version.as_ref());
        self.api.endpoint_url(&["sheet"], &params)
    }

    pub fn list(&self) -> Result<SheetListResponse> {
        self.api.get_json(self.url()?)
    }
}

/// `GET /sheet/{sheet}`: rows of one sheet, paginated with `after`
#[derive(Debug, Clone)]
#[must_use]
pub struct SheetRowsRequest<'a> {
    api: &'a XivApi,
    sheet: String,
    params: DataParams,
    after: Option<String>,
    rows: Option<Vec<u32>>,
}

impl<'a> SheetRowsRequest<'a> {
    pub(super) fn new(api: &'a XivApi, sheet: String) -> Self {
        Self {
            api,
            sheet,
            params: DataParams::from_config(api.config()),
            after: None,
            rows: None,
        }
    }

    /// Return rows after this row ID (`123` or `123:1` for subrows)
    pub fn after(mut self, after: impl ToString) -> Self {
        self.after = Some(after.to_string());
        self
    }

    /// Fetch only these row IDs
    pub fn rows(mut self, rows: &[u32]) -> Self {
        self.rows = Some(rows.to_vec());
        self
    }

    /// Single row of this sheet, carrying over the settings made so far
    pub fn row(self, row: impl ToString) -> SheetRowRequest<'a> {
        SheetRowRequest {
            api: self.api,
            sheet: self.sheet,
            row: row.to_string(),
            params: self.params,
        }
    }

    version_setter!();
    data_setters!();
    limit_setter!();

    pub fn url(&self) -> Result<Url> {
        let rows = self.rows.as_ref().map(|rows| {
            rows.iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(",")
        });

        let params = QueryParams::new()
            .push("version", self.params.version.as_ref())
            .push("language", self.params.language)
            .push("schema", self.params.schema.as_ref())
            .push("fields", self.params.fields_param())
            .push("transient", self.params.transient_param())
            .push("limit", self.params.limit)
            .push("after", self.after.as_ref())
            .push("rows", rows);

        self.api.endpoint_url(&["sheet", &self.sheet], &params)
    }

    pub fn get(&self) -> Result<SheetResponse> {
        self.api.get_json(self.url()?)
    }
}

/// `GET /sheet/{sheet}/{row}`
#[derive(Debug, Clone)]
#[must_use]
pub struct SheetRowRequest<'a> {
    api: &'a XivApi,
    sheet: String,
    row: String,
    params: DataParams,
}

impl SheetRowRequest<'_> {
    version_setter!();
    data_setters!();

    pub fn url(&self) -> Result<Url> {
        let params = QueryParams::new()
            .push("version", self.params.version.as_ref())
            .push("language", self.params.language)
            .push("schema", self.params.schema.as_ref())
            .push("fields", self.params.fields_param())
            .push("transient", self.params.transient_param());

        self.api
            .endpoint_url(&["sheet", &self.sheet, &self.row], &params)
    }

    pub fn get(&self) -> Result<RowResponse> {
        self.api.get_json(self.url()?)
    }
}
