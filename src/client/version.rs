use super::XivApi;
use super::params::QueryParams;
use crate::error::Result;
use crate::response::VersionsResponse;
use reqwest::Url;

/// `GET /version`: every game version the API knows
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct VersionRequest<'a> {
    api: &'a XivApi,
}

impl<'a> VersionRequest<'a> {
    pub(super) fn new(api: &'a XivApi) -> Self {
        Self { api }
    }

    pub fn url(&self) -> Result<Url> {
        self.api.endpoint_url(&["version"], &QueryParams::new())
    }

    pub fn list(&self) -> Result<VersionsResponse> {
        self.api.get_json(self.url()?)
    }
}
