//! Error types for clip-filter.
//!
//! Errors only travel across internal seams (URL resolution, layout reads,
//! JSON configuration). Every filter turns them into its conservative default,
//! so the pipeline entry point itself never fails.

/// Error type for fallible lookups inside the filters.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration overrides could not be parsed.
    #[error("invalid filter configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A link or image URL could not be resolved.
    #[error("invalid URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A resolved URL carries no host to match against.
    #[error("URL has no host: {0}")]
    NoHost(String),

    /// The node is no longer part of a document, so layout state is unavailable.
    #[error("node is detached from the document")]
    Detached,
}

/// Result type alias for clip-filter operations.
pub type Result<T> = std::result::Result<T, Error>;
