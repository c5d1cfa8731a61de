//! Card title extraction.
//!
//! Each platform encodes a card's title differently: a structured
//! `aria-label` with a type suffix, a delimited compound label, or plain
//! text. One [`TitleExtractor`] implementation exists per encoding, and a
//! profile selects one through the serializable [`Extractor`] value.
//!
//! # Module Structure
//!
//! - `attribute_scan`: multi-attribute scan with deduplication and `"Title, Type"` parsing
//! - `separator_label`: link `aria-label` first, `"Title • Year"` splitting
//! - `text_or_title`: visible text, falling back to an attribute
//!
//! Every extractor returns `None` when the card carries no usable title.
//! Missing elements, attributes or text only move the scan to the next
//! candidate.

use dom_query::Selection;
use serde::{Deserialize, Serialize};

use crate::result::ExtractionResult;

pub mod attribute_scan;
pub mod separator_label;
pub mod text_or_title;

pub use attribute_scan::AttributeScan;
pub use separator_label::SeparatorLabel;
pub use text_or_title::TextOrTitle;

/// Extract a normalized title from one card element.
///
/// `selectors` is the profile's ordered title selector list. Implementations
/// may ignore it in favor of an internal candidate list.
pub trait TitleExtractor {
    /// Returns the first acceptable title, or `None`.
    fn extract_title(&self, card: &Selection, selectors: &[String]) -> Option<ExtractionResult>;
}

/// Extraction strategy attached to a platform profile.
///
/// Serialized with a `strategy` tag:
///
/// ```json
/// { "strategy": "separator_label", "primary": "a[aria-label]", "separator": "•" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum Extractor {
    /// See [`AttributeScan`].
    AttributeScan(AttributeScan),
    /// See [`SeparatorLabel`].
    SeparatorLabel(SeparatorLabel),
    /// See [`TextOrTitle`].
    TextOrTitle(TextOrTitle),
}

impl Default for Extractor {
    fn default() -> Self {
        Self::TextOrTitle(TextOrTitle::default())
    }
}

impl Extractor {
    /// Selectors this strategy queries on its own, outside the profile's
    /// title selector list.
    #[must_use]
    pub fn internal_selectors(&self) -> Vec<&str> {
        match self {
            Self::AttributeScan(scan) => scan.candidates.iter().map(String::as_str).collect(),
            Self::SeparatorLabel(label) => vec![label.primary.as_str()],
            Self::TextOrTitle(_) => Vec::new(),
        }
    }
}

impl TitleExtractor for Extractor {
    fn extract_title(&self, card: &Selection, selectors: &[String]) -> Option<ExtractionResult> {
        match self {
            Self::AttributeScan(scan) => scan.extract_title(card, selectors),
            Self::SeparatorLabel(label) => label.extract_title(card, selectors),
            Self::TextOrTitle(text) => text.extract_title(card, selectors),
        }
    }
}
