//! Application settings model.

use crate::utils::de::{null_as_default, setting_or_default};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Text size preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl std::fmt::Display for FontSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontSize::Small => write!(f, "Small"),
            FontSize::Medium => write!(f, "Medium"),
            FontSize::Large => write!(f, "Large"),
        }
    }
}

impl FromStr for FontSize {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "small" => Ok(FontSize::Small),
            "medium" => Ok(FontSize::Medium),
            "large" => Ok(FontSize::Large),
            _ => Err(crate::Error::InvalidSetting(format!(
                "font size must be Small, Medium or Large, got '{}'",
                s
            ))),
        }
    }
}

/// Preferred catalog ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    #[default]
    Title,
    Year,
    Rating,
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortBy::Title => write!(f, "Title"),
            SortBy::Year => write!(f, "Year"),
            SortBy::Rating => write!(f, "Rating"),
        }
    }
}

impl FromStr for SortBy {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "title" => Ok(SortBy::Title),
            "year" => Ok(SortBy::Year),
            "rating" => Ok(SortBy::Rating),
            _ => Err(crate::Error::InvalidSetting(format!(
                "sort order must be Title, Year or Rating, got '{}'",
                s
            ))),
        }
    }
}

/// User preferences.
///
/// An unrecognised `fontSize` or `sortBy` value resets only that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    #[serde(deserialize_with = "null_as_default")]
    pub is_dark_mode: bool,
    #[serde(deserialize_with = "setting_or_default")]
    pub font_size: FontSize,
    #[serde(deserialize_with = "setting_or_default")]
    pub sort_by: SortBy,
}
