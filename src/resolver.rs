//! Hostname to platform resolution.
//!
//! An unsupported site is an ordinary outcome: every lookup returns
//! `Option`, and `None` means "no profile applies to this tab".

use url::Url;

use crate::options::Options;
use crate::registry::{PlatformProfile, Registry};

/// A resolved platform, borrowed from the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'r> {
    /// Key of the matching profile.
    pub key: &'r str,
    /// The matching profile.
    pub profile: &'r PlatformProfile,
}

/// Finds the profile for a browser tab.
///
/// # Example
///
/// ```rust
/// use stream_cards::{PlatformResolver, Registry};
///
/// let registry = Registry::builtin();
/// let resolver = PlatformResolver::new(&registry);
///
/// let resolved = resolver.resolve("www.netflix.com");
/// assert_eq!(resolved.map(|r| r.profile.name.as_str()), Some("Netflix"));
/// assert!(resolver.resolve("example.org").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PlatformResolver<'r> {
    registry: &'r Registry,
    options: Options,
}

impl<'r> PlatformResolver<'r> {
    /// Resolver with default options (substring hostname matching).
    #[must_use]
    pub fn new(registry: &'r Registry) -> Self {
        Self::with_options(registry, Options::default())
    }

    /// Resolver with custom options.
    #[must_use]
    pub fn with_options(registry: &'r Registry, options: Options) -> Self {
        Self { registry, options }
    }

    /// Return the first profile, in registration order, with a hostname
    /// pattern matching `hostname`.
    #[must_use]
    pub fn resolve(&self, hostname: &str) -> Option<Resolved<'r>> {
        let mode = self.options.hostname_match;
        let found = self.registry.iter().find(|profile| {
            profile
                .hostnames
                .iter()
                .any(|pattern| mode.matches(hostname, pattern))
        });

        match found {
            Some(profile) => {
                tracing::debug!(hostname, platform = %profile.key, "Resolved platform");
                Some(Resolved {
                    key: &profile.key,
                    profile,
                })
            }
            None => {
                tracing::debug!(hostname, "No supported platform");
                None
            }
        }
    }

    /// Resolve the platform of a full tab URL.
    ///
    /// Returns `None` if the URL does not parse or has no host.
    #[must_use]
    pub fn resolve_url(&self, url: &str) -> Option<Resolved<'r>> {
        let Some(hostname) = extract_hostname(url) else {
            tracing::debug!(url, "URL has no hostname");
            return None;
        };
        self.resolve(&hostname)
    }
}

/// Hostname of an absolute URL, as normalized by the `url` crate.
#[must_use]
pub fn extract_hostname(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()?
        .host_str()
        .map(str::to_string)
}

/// Resolve `hostname` against `registry` with default options.
#[must_use]
pub fn resolve<'r>(registry: &'r Registry, hostname: &str) -> Option<Resolved<'r>> {
    PlatformResolver::new(registry).resolve(hostname)
}
