//! Platform profile registry.
//!
//! A [`Registry`] is an ordered, immutable table of [`PlatformProfile`]s.
//! Order matters: resolution returns the first profile whose hostname
//! patterns match, so earlier profiles win ties.
//!
//! The built-in table covers Hotstar, Netflix and Prime Video. Further
//! platforms are pure data and can be loaded from JSON:
//!
//! ```json
//! {
//!   "platforms": [
//!     {
//!       "key": "crunchyroll",
//!       "name": "Crunchyroll",
//!       "hostnames": ["crunchyroll.com"],
//!       "card_selectors": [".browse-card"],
//!       "title_selectors": ["h4"],
//!       "badge_id": "platform-badge-crunchyroll",
//!       "extractor": { "strategy": "text_or_title" }
//!     }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use dom_query::Selection;
use serde::{Deserialize, Serialize};

use crate::dom;
use crate::error::{Error, Result};
use crate::extractor::{AttributeScan, Extractor, SeparatorLabel, TextOrTitle, TitleExtractor};
use crate::result::ExtractionResult;

/// One supported streaming site and how to read its cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformProfile {
    /// Unique short identifier (e.g. `"netflix"`).
    pub key: String,

    /// Human-readable label (e.g. `"Netflix"`).
    pub name: String,

    /// Hostname patterns; a tab matches if its hostname contains any of them.
    pub hostnames: Vec<String>,

    /// Selectors for media card root elements on a listing page.
    #[serde(default)]
    pub card_selectors: Vec<String>,

    /// Selectors tried in order to locate the title inside a card.
    #[serde(default)]
    pub title_selectors: Vec<String>,

    /// Selectors for the poster image region of a card.
    #[serde(default)]
    pub image_container_selectors: Vec<String>,

    /// Identifier of the UI badge element for this platform.
    #[serde(default)]
    pub badge_id: String,

    /// Title extraction strategy.
    #[serde(default)]
    pub extractor: Extractor,
}

impl PlatformProfile {
    /// Extract a title from `card` using the given title selectors.
    #[must_use]
    pub fn extract_title(&self, card: &Selection, selectors: &[String]) -> Option<ExtractionResult> {
        self.extractor.extract_title(card, selectors)
    }

    /// Extract a title from `card` using this profile's own title selectors.
    #[must_use]
    pub fn extract_card_title(&self, card: &Selection) -> Option<ExtractionResult> {
        self.extract_title(card, &self.title_selectors)
    }

    fn selectors(&self) -> impl Iterator<Item = &str> {
        self.card_selectors
            .iter()
            .chain(&self.title_selectors)
            .chain(&self.image_container_selectors)
            .map(String::as_str)
            .chain(self.extractor.internal_selectors())
    }

    fn validate(&self) -> Result<()> {
        if self.key.trim().is_empty() {
            return Err(Error::EmptyKey);
        }
        if self.hostnames.is_empty() || self.hostnames.iter().any(|host| host.trim().is_empty()) {
            return Err(Error::MissingHostnames(self.key.clone()));
        }
        if let Some(selector) = self.selectors().find(|s| !dom::is_valid_selector(s)) {
            return Err(Error::InvalidSelector {
                key: self.key.clone(),
                selector: selector.to_string(),
            });
        }
        Ok(())
    }
}

/// On-disk registry layout.
#[derive(Debug, Deserialize)]
struct RegistryFile {
    platforms: Vec<PlatformProfile>,
}

/// Ordered table of platform profiles, addressable by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    profiles: Vec<PlatformProfile>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Registry {
    /// The built-in platform table: Hotstar, Netflix, Prime Video, in that order.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            profiles: vec![
                PlatformProfile {
                    key: "hotstar".to_string(),
                    name: "Hotstar".to_string(),
                    hostnames: strings(&["hotstar.com", "disneyplus.com"]),
                    card_selectors: strings(&[
                        ".swiper-slide",
                        ".tray-vertical-card",
                        "[data-horizontal-card-container-width]",
                    ]),
                    title_selectors: strings(&["[aria-label]", "img[alt]", "[title]", "a[aria-label]"]),
                    image_container_selectors: strings(&[
                        r#"[data-testid="hs-image"]"#,
                        ".rQ_gfJEdoJGvLVb_rKLtL",
                        "img",
                        ".image-container",
                    ]),
                    badge_id: "platform-badge-hotstar".to_string(),
                    extractor: Extractor::AttributeScan(AttributeScan::default()),
                },
                PlatformProfile {
                    key: "netflix".to_string(),
                    name: "Netflix".to_string(),
                    hostnames: strings(&["netflix.com"]),
                    card_selectors: strings(&[
                        ".slider-item",
                        ".title-card",
                        ".gallery-item",
                        ".title-card-container",
                    ]),
                    title_selectors: strings(&["a[aria-label]", ".fallback-text", "[aria-label]"]),
                    image_container_selectors: strings(&[".boxart-container", ".title-card-container"]),
                    badge_id: "platform-badge-netflix".to_string(),
                    extractor: Extractor::SeparatorLabel(SeparatorLabel::default()),
                },
                PlatformProfile {
                    key: "prime".to_string(),
                    name: "Prime Video".to_string(),
                    hostnames: strings(&["primevideo.com"]),
                    card_selectors: strings(&[".tst-hover-container", ".av-card-container"]),
                    title_selectors: strings(&[r#"[data-automation-id="title"]"#, ".av-card-title"]),
                    image_container_selectors: strings(&[".av-card-image", ".tst-packshot-image"]),
                    badge_id: "platform-badge-primevideo".to_string(),
                    extractor: Extractor::TextOrTitle(TextOrTitle::default()),
                },
            ],
        }
    }

    /// Build a registry from profiles, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an error if a key is empty or duplicated, a profile has no
    /// hostnames, or any selector fails to parse.
    pub fn from_profiles(profiles: Vec<PlatformProfile>) -> Result<Self> {
        let mut keys = HashSet::new();
        for profile in &profiles {
            profile.validate()?;
            if !keys.insert(profile.key.as_str()) {
                return Err(Error::DuplicateKey(profile.key.clone()));
            }
        }
        Ok(Self { profiles })
    }

    /// Parse and validate a `{"platforms": [...]}` JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for malformed input, or a validation error
    /// as described in [`Registry::from_profiles`].
    pub fn from_json(json: &str) -> Result<Self> {
        let file: RegistryFile = serde_json::from_str(json)?;
        Self::from_profiles(file.platforms)
    }

    /// Read a registry JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise as
    /// [`Registry::from_json`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Merge user profiles into this registry.
    ///
    /// A user profile with an existing key replaces it in place; new keys are
    /// appended after the existing profiles.
    pub fn merge_user(&mut self, user: Registry) {
        for profile in user.profiles {
            if let Some(pos) = self.profiles.iter().position(|p| p.key == profile.key) {
                tracing::debug!(key = %profile.key, "Replacing platform profile");
                self.profiles[pos] = profile;
            } else {
                tracing::debug!(key = %profile.key, "Adding platform profile");
                self.profiles.push(profile);
            }
        }
    }

    /// Look up a profile by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PlatformProfile> {
        self.profiles.iter().find(|p| p.key == key)
    }

    /// Profiles in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, PlatformProfile> {
        self.profiles.iter()
    }

    /// Profile keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.key.as_str())
    }

    /// Number of profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the registry has no profiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a PlatformProfile;
    type IntoIter = std::slice::Iter<'a, PlatformProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
