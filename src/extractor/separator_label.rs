//! Link label with a separator, e.g. `"Stranger Things • 2016"`.

use dom_query::Selection;
use serde::{Deserialize, Serialize};

use super::TitleExtractor;
use crate::dom;
use crate::result::ExtractionResult;

/// Reads the `aria-label` of a primary link first, then falls back to the
/// profile's title selectors. The title is everything before `separator`.
///
/// These labels never carry a type hint, so results are always untyped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeparatorLabel {
    /// Selector for the element whose `aria-label` is tried first.
    ///
    /// Default: `"a[aria-label]"`
    pub primary: String,

    /// Character separating the title from trailing details.
    ///
    /// Default: `'•'`
    pub separator: char,
}

impl Default for SeparatorLabel {
    fn default() -> Self {
        Self {
            primary: "a[aria-label]".to_string(),
            separator: '•',
        }
    }
}

impl SeparatorLabel {
    fn leading_segment(&self, label: &str) -> Option<ExtractionResult> {
        let title = label.split(self.separator).next().unwrap_or_default().trim();
        (!title.is_empty()).then(|| ExtractionResult::untyped(title))
    }
}

impl TitleExtractor for SeparatorLabel {
    fn extract_title(&self, card: &Selection, selectors: &[String]) -> Option<ExtractionResult> {
        let primary = dom::query_selector(card, &self.primary)
            .and_then(|link| dom::trimmed_attribute(&link, "aria-label"))
            .and_then(|label| self.leading_segment(&label));
        if primary.is_some() {
            return primary;
        }

        for selector in selectors {
            let Some(el) = dom::query_selector(card, selector) else {
                continue;
            };

            let text = dom::trimmed_text(&el);
            let label = if text.is_empty() {
                dom::trimmed_attribute(&el, "aria-label")
            } else {
                Some(text)
            };

            if let Some(result) = label.and_then(|label| self.leading_segment(&label)) {
                return Some(result);
            }
        }

        None
    }
}
