//! Error types for stream-cards.
//!
//! Only registry configuration can fail. Resolution and title extraction
//! report "nothing found" through `Option`, never through this type.

/// Error type for registry loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading a registry file or page input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Registry JSON could not be parsed.
    #[error("Invalid registry JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two profiles share the same key.
    #[error("Duplicate platform key: {0}")]
    DuplicateKey(String),

    /// A profile has an empty key.
    #[error("Platform key must not be empty")]
    EmptyKey,

    /// A profile lists no hostnames, or a blank one that would match every site.
    #[error("Platform {0} has no hostnames or a blank hostname")]
    MissingHostnames(String),

    /// A selector string does not parse as CSS.
    #[error("Platform {key}: invalid selector {selector:?}")]
    InvalidSelector {
        /// Key of the offending profile.
        key: String,
        /// The selector as written.
        selector: String,
    },
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, Error>;
