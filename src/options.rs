//! Configuration options for platform resolution.
//!
//! The `Options` struct controls how a tab hostname is compared against the
//! hostname patterns of each profile.

/// How a profile hostname pattern is compared with a tab hostname.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HostnameMatch {
    /// The tab hostname contains the pattern anywhere (case-sensitive).
    ///
    /// `"hotstar.com.evil.net"` matches `"hotstar.com"` under this mode.
    #[default]
    Substring,

    /// The tab hostname equals the pattern or ends with `"." + pattern`.
    DomainSuffix,
}

impl HostnameMatch {
    /// Test a single hostname against a single pattern.
    #[must_use]
    pub fn matches(self, hostname: &str, pattern: &str) -> bool {
        match self {
            Self::Substring => hostname.contains(pattern),
            Self::DomainSuffix => hostname
                .strip_suffix(pattern)
                .is_some_and(|rest| rest.is_empty() || rest.ends_with('.')),
        }
    }
}

/// Configuration options for platform resolution.
///
/// # Example
///
/// ```rust
/// use stream_cards::{HostnameMatch, Options};
///
/// let options = Options {
///     hostname_match: HostnameMatch::DomainSuffix,
///     ..Options::default()
/// };
/// assert_eq!(options.hostname_match, HostnameMatch::DomainSuffix);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Hostname comparison mode.
    ///
    /// Default: `HostnameMatch::Substring`
    pub hostname_match: HostnameMatch,
}
