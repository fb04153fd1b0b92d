//! Binary asset endpoints. Responses are returned raw, without an Accept header.

use super::XivApi;
use super::params::{version_setter, DataParams, QueryParams};
use super::transport::HttpResponse;
use crate::error::Result;
use crate::types::AssetFormat;
use reqwest::Url;

/// `GET /asset`: a game file converted to an image format
#[derive(Debug, Clone)]
#[must_use]
pub struct AssetRequest<'a> {
    api: &'a XivApi,
    path: String,
    format: AssetFormat,
    params: DataParams,
}

impl<'a> AssetRequest<'a> {
    pub(super) fn new(api: &'a XivApi, path: String, format: AssetFormat) -> Self {
        Self {
            api,
            path,
            format,
            params: DataParams::from_config(api.config()),
        }
    }

    version_setter!();

    pub fn url(&self) -> Result<Url> {
        let params = QueryParams::new()
            .push("version", self.params.version.as_ref())
            .push("path", Some(&self.path))
            .push("format", Some(self.format));
        self.api.endpoint_url(&["asset"], &params)
    }

    /// Image bytes
    pub fn get(&self) -> Result<Vec<u8>> {
        Ok(self.fetch()?.body)
    }

    /// Full response, for access to `Content-Type` and `ETag`
    pub fn fetch(&self) -> Result<HttpResponse> {
        self.api.get_raw(self.url()?)
    }
}

/// `GET /asset/map/{territory}/{index}`: a composed map image (JPEG)
#[derive(Debug, Clone)]
#[must_use]
pub struct MapRequest<'a> {
    api: &'a XivApi,
    territory: String,
    index: String,
    params: DataParams,
}

impl<'a> MapRequest<'a> {
    pub(super) fn new(api: &'a XivApi, territory: String, index: String) -> Self {
        Self {
            api,
            territory,
            index,
            params: DataParams::from_config(api.config()),
        }
    }

    version_setter!();

    pub fn url(&self) -> Result<Url> {
        let params = QueryParams::new().push("version", self.params.version.as_ref());
        self.api
            .endpoint_url(&["asset", "map", &self.territory, &self.index], &params)
    }

    pub fn get(&self) -> Result<Vec<u8>> {
        Ok(self.fetch()?.body)
    }

    pub fn fetch(&self) -> Result<HttpResponse> {
        self.api.get_raw(self.url()?)
    }
}
