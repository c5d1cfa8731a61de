//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate used by the extractors and the page
//! scanner. Every query here is read-only and tolerant: an invalid selector or
//! an absent attribute is reported as `None`, never as a panic.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML string (full page or fragment) into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Check whether a string parses as a CSS selector.
#[must_use]
pub fn is_valid_selector(selector: &str) -> bool {
    dom_query::Matcher::new(selector).is_ok()
}

// === Querying ===

/// First descendant matching `selector`, in document order.
///
/// Returns `None` when nothing matches or the selector is invalid.
#[inline]
#[must_use]
pub fn query_selector<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    sel.try_select(selector).map(|found| found.first())
}

/// All descendants matching `selector`, in document order.
///
/// Returns `None` when nothing matches or the selector is invalid.
#[inline]
#[must_use]
pub fn query_selector_all<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    sel.try_select(selector)
}

// === Attribute Operations ===

/// Check if attribute exists (even with an empty value).
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

/// Get any attribute value, untrimmed.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get an attribute value trimmed, or `None` if absent or blank.
#[must_use]
pub fn trimmed_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text content with surrounding whitespace removed.
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    text_content(sel).trim().to_string()
}
