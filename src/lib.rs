//! # stream-cards
//!
//! Streaming platform detection and media card title extraction.
//!
//! Given the hostname of a browser tab, this library finds the matching
//! streaming platform profile. Given a media "card" element from that
//! platform's listing page, the profile extracts a normalized title and,
//! where the markup encodes it, whether the card is a movie or a series.
//!
//! ## Quick Start
//!
//! ```rust
//! use stream_cards::{dom, MediaType, PlatformResolver, Registry};
//!
//! let registry = Registry::builtin();
//! let resolver = PlatformResolver::new(&registry);
//!
//! let Some(netflix) = resolver.resolve("www.netflix.com") else {
//!     return;
//! };
//!
//! let doc = dom::parse(r#"<div class="title-card"><a aria-label="The Crown • 2016"></a></div>"#);
//! let card = doc.select(".title-card");
//!
//! let result = netflix.profile.extract_title(&card, &netflix.profile.title_selectors);
//! assert_eq!(result.as_ref().map(|r| r.title.as_str()), Some("The Crown"));
//! assert_eq!(result.and_then(|r| r.media_type), None::<MediaType>);
//! ```
//!
//! ## Features
//!
//! - **Registry**: built-in Hotstar, Netflix and Prime Video profiles, plus
//!   user profiles loaded from JSON
//! - **Resolution**: first-match hostname lookup, substring or domain-suffix
//! - **Extraction**: one strategy per markup convention, never failing,
//!   `None` when a card has no usable title
//! - **Page scanning**: find every card of a profile on a parsed page

mod error;
mod options;
mod result;

/// DOM query helpers over `dom_query`.
pub mod dom;

/// Title extraction strategies.
pub mod extractor;

/// Platform profiles and the registry.
pub mod registry;

/// Hostname and URL resolution.
pub mod resolver;

/// Card discovery on a listing page.
pub mod scan;

// Public API - re-exports
pub use error::{Error, Result};
pub use extractor::{Extractor, TitleExtractor};
pub use options::{HostnameMatch, Options};
pub use registry::{PlatformProfile, Registry};
pub use resolver::{resolve, PlatformResolver, Resolved};
pub use result::{ExtractionResult, MediaType};
pub use scan::{scan_cards, scan_document, ScannedCard};
