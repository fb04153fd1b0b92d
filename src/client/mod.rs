//! Blocking client for the XIVAPI v2 REST API.
//!
//! [`XivApi`] holds the transport and client-wide defaults. Each endpoint
//! method returns a request builder that borrows the client:
//!
//! ```no_run
//! use xivapi::{Field, Language, SearchQuery, XivApi};
//!
//! let api = XivApi::new()?.language(Language::German);
//! let query = SearchQuery::new()
//!     .and_where("Name").contains("Potion")
//!     .and_where("LevelItem").greater_or_equal(50);
//!
//! let response = api
//!     .search()
//!     .sheets(["Item"])
//!     .query(query)
//!     .fields(Field::list("Name, LevelItem"))
//!     .limit(10)
//!     .get()?;
//! println!("{} results", response.results.len());
//! # Ok::<(), xivapi::Error>(())
//! ```

mod asset;
mod params;
mod search;
mod sheet;
mod transport;
mod version;

pub use asset::{AssetRequest, MapRequest};
pub use search::SearchRequest;
pub use sheet::{SheetIndexRequest, SheetRowRequest, SheetRowsRequest};
pub use transport::{
    DEFAULT_TIMEOUT, HttpRequest, HttpResponse, ReqwestTransport, Transport,
};
pub use version::VersionRequest;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::response::ErrorBody;
use crate::types::{AssetFormat, Language};
use params::QueryParams;
use reqwest::Url;
use serde::de::DeserializeOwned;

const ACCEPT_JSON: &str = "application/json";

/// Entry point for all endpoints
pub struct XivApi {
    transport: Box<dyn Transport>,
    config: ClientConfig,
}

impl std::fmt::Debug for XivApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XivApi")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl XivApi {
    /// Client for the public API with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Client using `config`, sending through `reqwest`
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::with_timeout(config.timeout())?;
        Ok(Self::with_transport(config, transport))
    }

    /// Client sending through a custom transport
    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
            config,
        }
    }

    /// Default language for field data
    pub fn language(mut self, language: Language) -> Self {
        self.config.language = Some(language);
        self
    }

    /// Default game version
    pub fn game_version(mut self, version: impl Into<String>) -> Self {
        self.config.game_version = Some(version.into());
        self
    }

    /// Default schema specifier
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.config.schema = Some(schema.into());
        self
    }

    /// Languages used by fields marked `localized(&[])`
    pub fn localizations(mut self, languages: &[Language]) -> Self {
        self.config.localizations = languages.to_vec();
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET /version`
    pub fn version(&self) -> VersionRequest<'_> {
        VersionRequest::new(self)
    }

    /// `GET /sheet`
    pub fn sheet_index(&self) -> SheetIndexRequest<'_> {
        SheetIndexRequest::new(self)
    }

    /// `GET /sheet/{name}`, or a single row through [`SheetRowsRequest::row`].
    ///
    /// `name` is sent as one path segment, so `/`, `?` and `#` are escaped.
    pub fn sheet(&self, name: impl Into<String>) -> SheetRowsRequest<'_> {
        SheetRowsRequest::new(self, name.into())
    }

    /// `GET /search`
    pub fn search(&self) -> SearchRequest<'_> {
        SearchRequest::new(self)
    }

    /// `GET /asset?path=...&format=...`
    pub fn asset(&self, path: impl Into<String>, format: AssetFormat) -> AssetRequest<'_> {
        AssetRequest::new(self, path.into(), format)
    }

    /// `GET /asset/map/{territory}/{index}`
    pub fn map(&self, territory: impl Into<String>, index: impl Into<String>) -> MapRequest<'_> {
        MapRequest::new(self, territory.into(), index.into())
    }

    /// Full URL for an endpoint path relative to the base URL
    /// Base URL plus `segments`, each percent-encoded as a single path segment
    pub(crate) fn endpoint_url(&self, segments: &[&str], params: &QueryParams) -> Result<Url> {
        let base = &self.config.base_url;
        let mut url = Url::parse(base).map_err(|e| Error::InvalidUrl(format!("{}: {}", base, e)))?;
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(format!("{}: not a base URL", base)))?
            .pop_if_empty()
            .extend(segments);

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.iter());
        }
        Ok(url)
    }

    /// Send with `Accept: application/json` and decode a 200 body
    pub(crate) fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let request = HttpRequest::get(url).header("Accept", ACCEPT_JSON);
        let response = self.send(&request)?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Send without an Accept header and return the 200 response as-is
    pub(crate) fn get_raw(&self, url: Url) -> Result<HttpResponse> {
        self.send(&HttpRequest::get(url))
    }

    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        tracing::debug!(url = %request.url, "sending request");
        let response = self.transport.send(request)?;
        tracing::debug!(
            status = response.status,
            bytes = response.body.len(),
            "received response"
        );

        if !response.is_success() {
            let err = api_error(&response);
            tracing::warn!(url = %request.url, error = %err, "request failed");
            return Err(err);
        }
        Ok(response)
    }
}

/// Decode `{"code": ..., "message": ...}`, falling back to the HTTP status
fn api_error(response: &HttpResponse) -> Error {
    let body: ErrorBody = serde_json::from_slice(&response.body).unwrap_or_default();
    Error::Api {
        status: body.code.unwrap_or(response.status),
        message: body.message.unwrap_or_else(|| "Unknown error".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str) -> XivApi {
        let config = ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        };
        XivApi::with_transport(config, |_: &HttpRequest| Ok(HttpResponse::new(200, "{}")))
    }

    #[test]
    fn test_endpoint_url_joins_base() {
        let api = api("https://v2.xivapi.com/api/");
        let url = api.endpoint_url(&["sheet", "Item"], &QueryParams::new()).unwrap();
        assert_eq!(url.as_str(), "https://v2.xivapi.com/api/sheet/Item");
    }

    #[test]
    fn test_endpoint_url_adds_missing_slash() {
        let api = api("http://127.0.0.1:1234/api");
        let params = QueryParams::new().push("limit", Some(5));
        let url = api.endpoint_url(&["search"], &params).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:1234/api/search?limit=5");
    }

    #[test]
    fn test_invalid_base_url() {
        let bad = api("not a url");
        assert!(matches!(
            bad.endpoint_url(&["version"], &QueryParams::new()),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(
            api("mailto:someone@example.com").endpoint_url(&["version"], &QueryParams::new()),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_endpoint_url_escapes_segments() {
        let api = api("https://v2.xivapi.com/api/");
        let url = api
            .endpoint_url(&["sheet", "Odd?Name#1", "a/b"], &QueryParams::new())
            .unwrap();
        assert_eq!(url.as_str(), "https://v2.xivapi.com/api/sheet/Odd%3FName%231/a%2Fb");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_api_error_fallbacks() {
        let err = api_error(&HttpResponse::new(502, "<html>bad gateway</html>"));
        assert!(matches!(err, Error::Api { status: 502, ref message } if message == "Unknown error"));

        let err = api_error(&HttpResponse::new(400, r#"{"code": 400, "message": "bad query"}"#));
        assert!(matches!(err, Error::Api { status: 400, ref message } if message == "bad query"));
    }

    #[test]
    fn test_builder_defaults() {
        let api = api("https://v2.xivapi.com/api/")
            .language(Language::Japanese)
            .game_version("7.0")
            .schema("exdschema@2")
            .localizations(&[Language::German]);
        assert_eq!(api.config().language, Some(Language::Japanese));
        assert_eq!(api.config().game_version.as_deref(), Some("7.0"));
        assert_eq!(api.config().schema.as_deref(), Some("exdschema@2"));
        assert_eq!(api.config().localizations, vec![Language::German]);
    }
}
