//! # xivapi - XIVAPI v2 client and search query builder
//!
//! A blocking client for the [XIVAPI](https://v2.xivapi.com) game data API,
//! built around a fluent builder for its search query language.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`query`] - Search query builder, condition parsing, field filters
//! - [`client`] - Endpoint request builders over a pluggable [`Transport`]
//! - [`response`] - Typed response bodies
//! - [`config`] - Client defaults persisted in the app data directory
//! - [`output`] - Terminal formatting used by the `xivapi` binary
//!
//! ## Quick Start
//!
//! ```
//! use xivapi::SearchQuery;
//!
//! let query = SearchQuery::new()
//!     .and_where("Name").contains("Potion")
//!     .where_has("BaseParam", |q| q.and_where_eq("Name", "Strength"))
//!     .or_where_group(|g| g.or_where_eq("IsUnique", true).or_where_eq("IsUntradable", true));
//!
//! assert_eq!(
//!     query.build(),
//!     r#"+Name~"Potion" +BaseParam[].Name="Strength" (IsUnique=true IsUntradable=true)"#
//! );
//! ```
//!
//! The same query in path-first style:
//!
//! ```
//! use xivapi::SearchQuery;
//!
//! let query = SearchQuery::must().on("Name").contains("Potion")
//!     .and_must().any("BaseParam").on("Name").equals("Strength");
//!
//! assert_eq!(query.build(), r#"+Name~"Potion" +BaseParam[].Name="Strength""#);
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod progress;
pub mod query;
pub mod response;
pub mod types;

pub use client::{Transport, XivApi};
pub use config::ClientConfig;
pub use error::{Error, QueryError, Result};
pub use query::{Field, Operator, Prefix, SearchQuery, Value};
pub use response::{
    Row, RowResponse, SearchResponse, SearchResult, SheetListResponse, SheetResponse,
    VersionsResponse,
};
pub use types::{AssetFormat, Language, Transform};
