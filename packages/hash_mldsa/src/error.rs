//! Error types for the pre-hash signer

use std::fmt;
use thiserror::Error;

use crate::algorithm::ParameterSet;

/// Result type alias for pre-hash signer operations
pub type Result<T> = std::result::Result<T, SignerError>;

/// Errors raised by the pre-hash signer and its collaborators
///
/// A signature that fails to verify is not an error: verification
/// returns `Ok(false)` in that case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignerError {
    /// The parameter set (or the engine resolved from it) is a "pure" variant
    #[error("pre-hash ML-DSA must use non \"pure\" parameters, got {parameter_set}")]
    ModeConfiguration {
        /// Parameter set that was rejected
        parameter_set: ParameterSet,
    },

    /// The context string does not fit in the single length byte
    #[error("Context too long: maximum {maximum} bytes, got {actual}")]
    ContextTooLong {
        /// Largest permitted context length
        maximum: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// No identifier encoding is known for the digest
    #[error("Unsupported digest: {0}")]
    UnsupportedDigest(String),

    /// Operation invoked outside the state in which it is valid
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Caller-supplied randomness has the wrong length
    #[error("Invalid randomness length: expected {expected}, got {actual}")]
    InvalidRandomness {
        /// Length the engine requires
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// The signature engine failed to produce a signature
    #[error("Signature engine failure: {0}")]
    Engine(String),

    /// Signer configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SignerError {
    /// Create an `InvalidState` error with a formatted message
    pub fn invalid_state(msg: impl fmt::Display) -> Self {
        Self::InvalidState(msg.to_string())
    }

    /// Create an `UnsupportedDigest` error with a formatted message
    pub fn unsupported_digest(msg: impl fmt::Display) -> Self {
        Self::UnsupportedDigest(msg.to_string())
    }

    /// Create an `Engine` error with a formatted message
    pub fn engine(msg: impl fmt::Display) -> Self {
        Self::Engine(msg.to_string())
    }
}

impl From<serde_json::Error> for SignerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<hex::FromHexError> for SignerError {
    fn from(err: hex::FromHexError) -> Self {
        Self::Config(format!("Hex decode error: {err}"))
    }
}
