//! Seams to the lattice signature engine
//!
//! The polynomial arithmetic lives behind these traits. The signer only
//! prepares the message and hands over key components.

use crate::{ParameterSet, Result, SigningKeyMaterial, VerificationKeyMaterial};

/// Length of the per-signature randomness `rnd`
pub const RND_BYTES: usize = 32;

/// Internal ML-DSA signing and verification over a prepared message
pub trait SignatureEngine {
    /// Whether this engine instance runs a pre-hash parameter set
    fn is_pre_hash(&self) -> bool;

    /// Number of randomness bytes consumed by one signature
    fn randomness_len(&self) -> usize {
        RND_BYTES
    }

    /// Sign an already domain-separated message
    ///
    /// # Errors
    ///
    /// Returns an error if the key components are malformed for the
    /// engine's parameter set.
    fn sign_internal(
        &self,
        message: &[u8],
        key: &SigningKeyMaterial,
        randomness: &[u8],
    ) -> Result<Vec<u8>>;

    /// Check a signature over an already domain-separated message
    ///
    /// A mismatch, including a malformed signature, is `false`.
    fn verify_internal(
        &self,
        signature: &[u8],
        message: &[u8],
        key: &VerificationKeyMaterial,
    ) -> bool;
}

/// Resolves the engine for a parameter set
///
/// Resolution happens when an operation needs the engine, never at
/// configuration time.
pub trait EngineProvider {
    /// Engine type produced by this provider
    type Engine: SignatureEngine;

    /// Resolve the engine for `parameter_set`
    ///
    /// # Errors
    ///
    /// Returns an error if the provider has no engine for the parameter set.
    fn engine(&self, parameter_set: ParameterSet) -> Result<Self::Engine>;
}
