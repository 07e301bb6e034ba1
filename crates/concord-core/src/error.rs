use thiserror::Error;

/// Top-level error type for the Concord pipeline.
///
/// Subsystem crates return `ConcordError` directly so the `?` operator works
/// across crate boundaries. All failures are terminal for the current run:
/// nothing retries, and no partial output is assembled.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConcordError {
    #[error("segmentation error: {0}")]
    Segmentation(String),

    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("tagging error: {0}")]
    Tagging(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for ConcordError {
    fn from(err: toml::de::Error) -> Self {
        ConcordError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ConcordError {
    fn from(err: toml::ser::Error) -> Self {
        ConcordError::Config(err.to_string())
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ConcordError>;
