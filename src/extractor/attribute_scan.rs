//! Multi-attribute scan with deduplication.
//!
//! Used for platforms whose cards label every tile with an `aria-label` or
//! image `alt` of the form `"Title, Type"` (for example `"Loki, Show"`).
//! Decorative images on the same card carry labels such as `"Logo"` that
//! must be skipped.

use std::collections::HashSet;

use dom_query::Selection;
use serde::{Deserialize, Serialize};

use super::TitleExtractor;
use crate::dom;
use crate::result::{ExtractionResult, MediaType};

/// Attributes consulted per element, in priority order. The first one
/// present wins even if its value is empty.
const LABEL_ATTRIBUTES: [&str; 3] = ["aria-label", "alt", "title"];

/// Scans a fixed candidate selector list and parses `"Title, Type"` labels.
///
/// The profile's title selectors are ignored; `candidates` is used instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeScan {
    /// Selectors scanned in order; every match of each is a candidate.
    pub candidates: Vec<String>,

    /// Candidates shorter than this, in UTF-16 code units, are rejected.
    ///
    /// Default: `2`
    pub min_len: usize,

    /// Candidates containing any of these (case-insensitive) are rejected.
    ///
    /// Default: `["image", "logo", "icon"]`
    pub rejected_terms: Vec<String>,
}

impl Default for AttributeScan {
    fn default() -> Self {
        Self {
            candidates: vec!["[aria-label]".to_string(), "img[alt]".to_string()],
            min_len: 2,
            rejected_terms: vec!["image".to_string(), "logo".to_string(), "icon".to_string()],
        }
    }
}

impl AttributeScan {
    fn is_rejected(&self, candidate: &str) -> bool {
        if candidate.encode_utf16().count() < self.min_len {
            return true;
        }
        let lower = candidate.to_lowercase();
        self.rejected_terms
            .iter()
            .any(|term| lower.contains(&term.to_lowercase()))
    }
}

/// Raw label of one element: the first present label attribute, else the
/// trimmed text. Empty values yield `None`.
fn candidate_label(el: &Selection) -> Option<String> {
    let label = match LABEL_ATTRIBUTES
        .iter()
        .find(|name| dom::has_attribute(el, name))
    {
        Some(name) => dom::get_attribute(el, name).unwrap_or_default(),
        None => dom::trimmed_text(el),
    };
    (!label.is_empty()).then_some(label)
}

/// Split `"Title, Type, ..."` into a result. `None` if the title part is blank.
fn parse_compound(label: &str) -> Option<ExtractionResult> {
    let mut parts = label.split(',').map(str::trim);
    let title = parts.next().unwrap_or_default();
    if title.is_empty() {
        return None;
    }
    Some(ExtractionResult::new(
        title,
        parts.next().and_then(MediaType::from_hint),
    ))
}

impl TitleExtractor for AttributeScan {
    fn extract_title(&self, card: &Selection, _selectors: &[String]) -> Option<ExtractionResult> {
        let mut seen: HashSet<String> = HashSet::new();

        for selector in &self.candidates {
            let Some(matches) = dom::query_selector_all(card, selector) else {
                continue;
            };

            for el in matches.iter() {
                let Some(label) = candidate_label(&el) else {
                    continue;
                };

                if self.is_rejected(&label) {
                    tracing::trace!(%label, "Skipping non-title label");
                    continue;
                }

                if !seen.insert(label.trim().to_lowercase()) {
                    tracing::trace!(%label, "Skipping duplicate label");
                    continue;
                }

                if let Some(result) = parse_compound(&label) {
                    return Some(result);
                }
            }
        }

        None
    }
}
