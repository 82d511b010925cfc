//! Error types for certseal-core.
//!
//! Verification failure is not an error: the verifier returns `false` for
//! every condition that is not "definitively valid". Errors are reserved for
//! operations that could not run at all.

use thiserror::Error;

/// Crate-wide result alias.
pub type CertsealResult<T> = Result<T, CertsealError>;

#[derive(Error, Debug)]
pub enum CertsealError {
    /// A required argument was missing, empty, or out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The RSA backend could not produce or encode a key pair.
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    /// Signature computation failed. Never silently swallowed.
    #[error("signing failed: {0}")]
    Signing(String),

    /// A payload field contains the reserved delimiter.
    #[error("field format: {0}")]
    FieldFormat(String),
}

impl CertsealError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn key_generation(msg: impl Into<String>) -> Self {
        Self::KeyGeneration(msg.into())
    }

    pub fn signing(msg: impl Into<String>) -> Self {
        Self::Signing(msg.into())
    }

    pub fn field_format(msg: impl Into<String>) -> Self {
        Self::FieldFormat(msg.into())
    }
}
