//! Query parameters shared by the endpoint builders

use crate::config::ClientConfig;
use crate::query::field::{join_fields, Field};
use crate::types::Language;
use std::fmt::Display;

/// Ordered query string pairs; absent or empty values never make it in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, name: &'static str, value: Option<impl Display>) -> Self {
        if let Some(value) = value {
            let value = value.to_string();
            if !value.is_empty() {
                self.0.push((name, value));
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Settings every data endpoint accepts, seeded from the client defaults
#[derive(Debug, Clone, Default)]
pub(crate) struct DataParams {
    pub language: Option<Language>,
    pub schema: Option<String>,
    pub version: Option<String>,
    pub fields: Vec<Field>,
    pub transient: Vec<Field>,
    pub limit: Option<u32>,
    /// Languages for fields marked `localized(&[])`
    pub localizations: Vec<Language>,
}

impl DataParams {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            language: config.language,
            schema: config.schema.clone(),
            version: config.game_version.clone(),
            localizations: config.localizations.clone(),
            ..Self::default()
        }
    }

    pub fn fields_param(&self) -> Option<String> {
        join_fields(&self.fields, &self.localizations)
    }

    pub fn transient_param(&self) -> Option<String> {
        join_fields(&self.transient, &self.localizations)
    }
}

/// `version(...)` setter for builders holding `params: DataParams`
macro_rules! version_setter {
    () => {
        /// Game version for this request (a version key or name such as `latest`)
        pub fn version(mut self, version: impl Into<String>) -> Self {
            self.params.version = Some(version.into());
            self
        }
    };
}

/// Language, schema and field filter setters
macro_rules! data_setters {
    () => {
        /// Language for field data
        pub fn language(mut self, language: $crate::types::Language) -> Self {
            self.params.language = Some(language);
            self
        }

        /// Schema specifier, e.g. `exdschema@2`
        pub fn schema(mut self, schema: impl Into<String>) -> Self {
            self.params.schema = Some(schema.into());
            self
        }

        /// Restrict the returned fields.
        ///
        /// Accepts anything convertible to [`Field`](crate::query::Field);
        /// use [`Field::list`](crate::query::Field::list) for comma-separated text.
        pub fn fields<I, F>(mut self, fields: I) -> Self
        where
            I: IntoIterator<Item = F>,
            F: Into<$crate::query::Field>,
        {
            self.params.fields = fields.into_iter().map(Into::into).collect();
            self
        }

        /// Fields to read from the transient sheet
        pub fn transient<I, F>(mut self, fields: I) -> Self
        where
            I: IntoIterator<Item = F>,
            F: Into<$crate::query::Field>,
        {
            self.params.transient = fields.into_iter().map(Into::into).collect();
            self
        }
    };
}

macro_rules! limit_setter {
    () => {
        /// Maximum number of rows to return
        pub fn limit(mut self, limit: u32) -> Self {
            self.params.limit = Some(limit);
            self
        }
    };
}

pub(crate) use {data_setters, limit_setter, version_setter};
