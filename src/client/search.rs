use super::XivApi;
use super::params::{data_setters, limit_setter, version_setter, DataParams, QueryParams};
use crate::error::{Error, Result};
use crate::response::SearchResponse;
use reqwest::Url;

/// `GET /search`
///
/// Needs either a cursor from a previous page, or both a query and the
/// sheets to search.
#[derive(Debug, Clone)]
#[must_use]
pub struct SearchRequest<'a> {
    api: &'a XivApi,
    params: DataParams,
    query: Option<String>,
    sheets: Option<Vec<String>>,
    cursor: Option<String>,
}

impl<'a> SearchRequest<'a> {
    pub(super) fn new(api: &'a XivApi) -> Self {
        Self {
            api,
            params: DataParams::from_config(api.config()),
            query: None,
            sheets: None,
            cursor: None,
        }
    }

    /// Query text, usually a built [`SearchQuery`](crate::query::SearchQuery)
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Sheets to search, e.g. `["Item", "Action"]`
    pub fn sheets<I, S>(mut self, sheets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sheets = Some(sheets.into_iter().map(Into::into).collect());
        self
    }

    /// Continue from the `next` cursor of a previous response.
    ///
    /// When set, query and sheets are not sent.
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    version_setter!();
    data_setters!();
    limit_setter!();

    fn query_params(&self) -> QueryParams {
        let params = match &self.cursor {
            Some(cursor) => QueryParams::new().push("cursor", Some(cursor)),
            None => QueryParams::new()
                .push("query", self.query.as_ref())
                .push("sheets", self.sheets.as_ref().map(|s| s.join(","))),
        };

        params
            .push("language", self.params.language)
            .push("schema", self.params.schema.as_ref())
            .push("fields", self.params.fields_param())
            .push("transient", self.params.transient_param())
            .push("limit", self.params.limit)
            .push("version", self.params.version.as_ref())
    }

    /// URL this request would fetch
    pub fn url(&self) -> Result<Url> {
        self.api.endpoint_url(&["search"], &self.query_params())
    }

    pub fn get(&self) -> Result<SearchResponse> {
        if self.cursor.is_none() && (self.query.is_none() || self.sheets.is_none()) {
            return Err(Error::InvalidRequest(
                "search requires either a cursor or both query and sheets",
            ));
        }
        self.api.get_json(self.url()?)
    }
}
