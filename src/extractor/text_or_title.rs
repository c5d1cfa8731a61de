//! Plain text title with an attribute fallback.

use dom_query::Selection;
use serde::{Deserialize, Serialize};

use super::TitleExtractor;
use crate::dom;
use crate::result::ExtractionResult;

/// For the first element matched by each title selector in turn, takes its
/// trimmed text, or the trimmed `fallback_attribute` when the text is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextOrTitle {
    /// Attribute read when an element has no text.
    ///
    /// Default: `"title"`
    pub fallback_attribute: String,
}

impl Default for TextOrTitle {
    fn default() -> Self {
        Self {
            fallback_attribute: "title".to_string(),
        }
    }
}

impl TitleExtractor for TextOrTitle {
    fn extract_title(&self, card: &Selection, selectors: &[String]) -> Option<ExtractionResult> {
        selectors.iter().find_map(|selector| {
            let el = dom::query_selector(card, selector)?;
            let text = dom::trimmed_text(&el);
            let title = if text.is_empty() {
                dom::trimmed_attribute(&el, &self.fallback_attribute)?
            } else {
                text
            };
            Some(ExtractionResult::untyped(title))
        })
    }
}
