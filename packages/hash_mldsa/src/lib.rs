//! Pre-hash ML-DSA (HashML-DSA) signing
//!
//! This crate builds the domain-separated message that a HashML-DSA
//! signature covers and drives a lattice signature engine over it:
//!
//! ```text
//! 0x01 || len(ctx) || ctx || DER(OID of hash) || hash(message)
//! ```
//!
//! The lattice arithmetic itself is supplied through [`EngineProvider`] and
//! [`SignatureEngine`].
//!
//! # Supported Digests
//! - SHA-224, SHA-256, SHA-384, SHA-512, SHA-512/224, SHA-512/256
//! - SHA3-224, SHA3-256, SHA3-384, SHA3-512
//! - SHAKE128 (256-bit output), SHAKE256 (512-bit output)
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut signer = HashMlDsaSigner::new(provider, HashAlgorithm::Sha512);
//! signer.configure_for_signing_with_rng(signing_key, rand::rngs::OsRng)?;
//! signer.absorb(b"chunk one")?;
//! signer.absorb(b"chunk two")?;
//! let signature = signer.produce_signature()?;
//!
//! let mut verifier = HashMlDsaSigner::new(provider, HashAlgorithm::Sha512);
//! verifier.configure_for_verifying(verification_key)?;
//! verifier.absorb(b"chunk onechunk two")?;
//! assert!(verifier.verify_signature(&signature)?);
//! ```

#![forbid(unsafe_code)]

mod accumulator;
mod algorithm;
mod config;
pub mod encoding;
pub mod engine;
mod error;
mod identifier;
mod keys;
mod signer;

// Re-export error types
pub use self::error::{Result, SignerError};

// Re-export main types
pub use self::accumulator::DigestAccumulator;
pub use self::algorithm::{HashAlgorithm, ParameterSet};
pub use self::config::SignerConfig;
pub use self::encoding::{encode_pre_hash_message, DomainSeparatedBuffer, MAX_CONTEXT_LEN};
pub use self::engine::{EngineProvider, SignatureEngine, RND_BYTES};
pub use self::identifier::{lookup_identifier_encoding, DigestIdentifier};
pub use self::keys::{SigningKeyMaterial, VerificationKeyMaterial};
pub use self::signer::{HashMlDsaSigner, SignerMode};

/// Prelude for pre-hash signing
pub mod prelude {
    pub use super::{
        EngineProvider, HashAlgorithm, HashMlDsaSigner, ParameterSet, SignatureEngine,
        SigningKeyMaterial, VerificationKeyMaterial,
    };
}
