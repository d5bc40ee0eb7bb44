//! Error types for packaging operations.
//!
//! Every public function in this crate returns [`crate::Result<T>`], which
//! uses [`PackError`]. Variants map one-to-one onto the stages of the
//! packaging pipeline, so callers can tell a bad manifest from bad key
//! material without string matching.

use thiserror::Error;

/// Error type for packaging operations.
#[derive(Debug, Error)]
pub enum PackError {
    /// Missing or ambiguous project input (no files, zero or multiple
    /// manifests, unparsable manifest). Detected before the pipeline
    /// starts; nothing has been written when this is returned.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An existing private key could not be parsed, or its modulus is
    /// below the supported minimum.
    #[error("Invalid private key: {0}")]
    KeyParse(String),

    /// Building the content archive failed.
    #[error("Archive error: {0}")]
    Archive(String),

    /// Producing the signature over the archive failed.
    #[error("Signing failed: {0}")]
    Signing(String),

    /// A required input (e.g. the public key for identity derivation)
    /// was absent.
    #[error("Missing input: {0}")]
    Input(String),

    /// A required descriptor field was empty or invalid.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<zip::result::ZipError> for PackError {
    fn from(err: zip::result::ZipError) -> Self {
        PackError::Archive(err.to_string())
    }
}

/// Convenience result type used throughout the crate.
pub type Result<T> = std::result::Result<T, PackError>;
