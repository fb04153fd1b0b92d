//! Enumerations shared by the query builder and the endpoint clients.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages supported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "fr")]
    French,
}

impl Language {
    /// Two-letter code used on the wire
    pub fn code(self) -> &'static str {
        match self {
            Language::Japanese => "ja",
            Language::English => "en",
            Language::German => "de",
            Language::French => "fr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ja" | "japanese" => Ok(Language::Japanese),
            "en" | "english" => Ok(Language::English),
            "de" | "german" => Ok(Language::German),
            "fr" | "french" => Ok(Language::French),
            other => Err(format!("unknown language '{}' (expected ja, en, de or fr)", other)),
        }
    }
}

/// Output format for asset conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetFormat {
    Jpg,
    #[default]
    Png,
    Webp,
}

impl AssetFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            AssetFormat::Jpg => "jpg",
            AssetFormat::Png => "png",
            AssetFormat::Webp => "webp",
        }
    }
}

impl fmt::Display for AssetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(AssetFormat::Jpg),
            "png" => Ok(AssetFormat::Png),
            "webp" => Ok(AssetFormat::Webp),
            other => Err(format!("unknown asset format '{}' (expected png, jpg or webp)", other)),
        }
    }
}

/// Field transformations for the `@as()` decorator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Skips relationship and icon processing
    Raw,
    /// Formats string values as HTML fragments
    Html,
}

impl Transform {
    pub fn as_str(self) -> &'static str {
        match self {
            Transform::Raw => "raw",
            Transform::Html => "html",
        }
    }
}
