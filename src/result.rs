//! Result types for card title extraction.

use serde::{Deserialize, Serialize};

/// Content type hint carried by some platforms' card markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaType {
    /// A feature film. Serialized as `"movie"`.
    Movie,
    /// A series. Serialized as `"tvSeries"`.
    TvSeries,
}

impl MediaType {
    /// Map a free-text type hint to a media type.
    ///
    /// `"movie"` and `"show"` are recognized case-insensitively after
    /// trimming; anything else yields `None`.
    #[must_use]
    pub fn from_hint(hint: &str) -> Option<Self> {
        match hint.trim().to_lowercase().as_str() {
            "movie" => Some(Self::Movie),
            "show" => Some(Self::TvSeries),
            _ => None,
        }
    }
}

/// Title extracted from one media card.
///
/// `title` is never empty. `media_type` is `None` whenever the markup does
/// not encode the type unambiguously.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Normalized title.
    pub title: String,

    /// Content type hint, serialized as `type`.
    #[serde(rename = "type")]
    pub media_type: Option<MediaType>,
}

impl ExtractionResult {
    /// Build a result with an optional type hint.
    #[must_use]
    pub fn new(title: impl Into<String>, media_type: Option<MediaType>) -> Self {
        Self {
            title: title.into(),
            media_type,
        }
    }

    /// Build a result for markup that carries no type information.
    #[must_use]
    pub fn untyped(title: impl Into<String>) -> Self {
        Self::new(title, None)
    }
}
