//! Card discovery on a listing page.
//!
//! Finds every media card of a profile on one parsed page, locates its
//! poster region and runs the profile's title extractor on it. Nothing is
//! aggregated across pages.

use dom_query::{Document, Selection};

use crate::dom;
use crate::registry::PlatformProfile;
use crate::result::ExtractionResult;

/// One card found on a page.
#[derive(Debug, Clone)]
pub struct ScannedCard<'a> {
    /// The card root element.
    pub card: Selection<'a>,

    /// Poster image region, if any image container selector matched.
    pub image_container: Option<Selection<'a>>,

    /// Extracted title, or `None` when the card carries no usable title.
    pub title: Option<ExtractionResult>,
}

/// Find and extract every card under `root`.
///
/// Valid card selectors are applied as one selector group, so an element
/// matching several of them is reported once, in document order. Selectors
/// that do not parse are skipped and never match.
#[must_use]
pub fn scan_cards<'a>(root: &Selection<'a>, profile: &PlatformProfile) -> Vec<ScannedCard<'a>> {
    let valid: Vec<&str> = profile
        .card_selectors
        .iter()
        .map(String::as_str)
        .filter(|selector| dom::is_valid_selector(selector))
        .collect();
    if valid.is_empty() {
        return Vec::new();
    }

    let group = valid.join(", ");
    let Some(cards) = dom::query_selector_all(root, &group) else {
        tracing::debug!(platform = %profile.key, "No cards on page");
        return Vec::new();
    };

    let scanned: Vec<ScannedCard<'a>> = cards
        .iter()
        .map(|card| ScannedCard {
            image_container: image_container(&card, profile),
            title: profile.extract_card_title(&card),
            card,
        })
        .collect();

    tracing::debug!(
        platform = %profile.key,
        cards = scanned.len(),
        titled = scanned.iter().filter(|c| c.title.is_some()).count(),
        "Scanned page"
    );
    scanned
}

/// Scan a whole parsed document.
#[must_use]
pub fn scan_document<'a>(doc: &'a Document, profile: &PlatformProfile) -> Vec<ScannedCard<'a>> {
    scan_cards(&doc.select("html"), profile)
}

/// First element inside `card` (or `card` itself) matching the profile's
/// image container selectors, tried in order.
#[must_use]
pub fn image_container<'a>(card: &Selection<'a>, profile: &PlatformProfile) -> Option<Selection<'a>> {
    profile.image_container_selectors.iter().find_map(|selector| {
        dom::query_selector(card, selector).or_else(|| {
            (dom::is_valid_selector(selector) && card.is(selector)).then(|| card.clone())
        })
    })
}
