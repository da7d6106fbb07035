//! Pre-hash signer and verifier
//!
//! [`HashMlDsaSigner`] owns the key material for exactly one direction
//! (signing or verifying), streams the message into a digest accumulator
//! and, on request, wraps the digest in the domain-separated message that
//! the signature engine signs or verifies.
//!
//! Every path that finalizes the digest also resets it, so a signer can be
//! reused for any number of messages without digests leaking across calls.

use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use std::fmt;
use tracing::{debug, trace, warn};
use zeroize::Zeroizing;

use crate::encoding::{encode_pre_hash_message, MAX_CONTEXT_LEN};
use crate::engine::{EngineProvider, SignatureEngine};
use crate::{
    DigestAccumulator, DigestIdentifier, HashAlgorithm, ParameterSet, Result, SignerConfig,
    SignerError, SigningKeyMaterial, VerificationKeyMaterial,
};

/// Direction a signer is configured for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignerMode {
    /// No key material installed yet
    Unconfigured,
    /// Holding signing key material
    Signing,
    /// Holding verification key material
    Verifying,
}

/// Installed key material; signing and verifying are mutually exclusive
enum KeyState<'r> {
    Unconfigured,
    Signing {
        key: SigningKeyMaterial,
        rng: Option<Box<dyn CryptoRng + Send + 'r>>,
    },
    Verifying {
        key: VerificationKeyMaterial,
    },
}

/// HashML-DSA signer over a pluggable lattice signature engine
///
/// `'r` bounds a randomness source lent to the signer with
/// [`configure_for_signing_with_rng`](Self::configure_for_signing_with_rng).
pub struct HashMlDsaSigner<'r, P: EngineProvider> {
    provider: P,
    identifier: DigestIdentifier,
    accumulator: DigestAccumulator,
    keys: KeyState<'r>,
}

impl<'r, P: EngineProvider> HashMlDsaSigner<'r, P> {
    /// Create a signer that pre-hashes with `algorithm`
    #[must_use]
    pub fn new(provider: P, algorithm: HashAlgorithm) -> Self {
        Self::with_identifier(provider, algorithm, DigestIdentifier::for_algorithm(algorithm))
    }

    /// Create a signer with an explicitly supplied digest identifier
    ///
    /// The identifier is bound as given; it is the caller's job to make it
    /// name `algorithm`.
    #[must_use]
    pub fn with_identifier(
        provider: P,
        algorithm: HashAlgorithm,
        identifier: DigestIdentifier,
    ) -> Self {
        Self {
            provider,
            identifier,
            accumulator: DigestAccumulator::new(algorithm),
            keys: KeyState::Unconfigured,
        }
    }

    /// Create a signer from a digest algorithm name such as `"SHA-512"`
    ///
    /// # Errors
    ///
    /// Returns `SignerError::UnsupportedDigest` if the name has no known
    /// identifier encoding.
    pub fn from_digest_name(provider: P, name: &str) -> Result<Self> {
        let algorithm = HashAlgorithm::from_name(name)?;
        Ok(Self::new(provider, algorithm))
    }

    /// Create a signer from a [`SignerConfig`]
    ///
    /// # Errors
    ///
    /// Returns an error if the configured digest is unknown or the
    /// identifier override is malformed.
    pub fn from_config(provider: P, config: &SignerConfig) -> Result<Self> {
        let algorithm = config.algorithm()?;
        let identifier = config.resolve_identifier()?;
        Ok(Self::with_identifier(provider, algorithm, identifier))
    }

    /// Install signing key material with deterministic (all-zero) randomness
    ///
    /// # Errors
    ///
    /// Returns `SignerError::ModeConfiguration` if the key's parameter set
    /// is a pure variant; the previous configuration is kept in that case.
    pub fn configure_for_signing(&mut self, key: SigningKeyMaterial) -> Result<()> {
        self.install_signing(key, None)
    }

    /// Install signing key material with a randomness source
    ///
    /// Each signature draws fresh bytes from `rng`. Pass `&mut rng` to lend
    /// a generator for as long as the signer lives.
    ///
    /// # Errors
    ///
    /// Returns `SignerError::ModeConfiguration` if the key's parameter set
    /// is a pure variant; the previous configuration is kept in that case.
    pub fn configure_for_signing_with_rng<R>(
        &mut self,
        key: SigningKeyMaterial,
        rng: R,
    ) -> Result<()>
    where
        R: CryptoRng + Send + 'r,
    {
        self.install_signing(key, Some(Box::new(rng)))
    }

    fn install_signing(
        &mut self,
        key: SigningKeyMaterial,
        rng: Option<Box<dyn CryptoRng + Send + 'r>>,
    ) -> Result<()> {
        ensure_pre_hash_parameters(key.parameter_set())?;
        debug!(
            parameter_set = %key.parameter_set(),
            digest = %self.accumulator.algorithm(),
            randomized = rng.is_some(),
            context_len = key.context().len(),
            "Configured pre-hash signer for signing"
        );
        self.keys = KeyState::Signing { key, rng };
        self.reset();
        Ok(())
    }

    /// Install verification key material
    ///
    /// # Errors
    ///
    /// Returns `SignerError::ModeConfiguration` if the key's parameter set
    /// is a pure variant; the previous configuration is kept in that case.
    pub fn configure_for_verifying(&mut self, key: VerificationKeyMaterial) -> Result<()> {
        ensure_pre_hash_parameters(key.parameter_set())?;
        debug!(
            parameter_set = %key.parameter_set(),
            digest = %self.accumulator.algorithm(),
            context_len = key.context().len(),
            "Configured pre-hash signer for verifying"
        );
        self.keys = KeyState::Verifying { key };
        self.reset();
        Ok(())
    }

    /// Direction the signer is configured for
    #[must_use]
    pub fn mode(&self) -> SignerMode {
        match self.keys {
            KeyState::Unconfigured => SignerMode::Unconfigured,
            KeyState::Signing { .. } => SignerMode::Signing,
            KeyState::Verifying { .. } => SignerMode::Verifying,
        }
    }

    /// Digest algorithm used for pre-hashing
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.accumulator.algorithm()
    }

    /// Identifier bound into every message
    #[must_use]
    pub fn identifier(&self) -> &DigestIdentifier {
        &self.identifier
    }

    /// Feed message bytes into the digest
    ///
    /// # Errors
    ///
    /// Returns `SignerError::InvalidState` before any key material is installed.
    pub fn absorb(&mut self, data: &[u8]) -> Result<()> {
        if matches!(self.keys, KeyState::Unconfigured) {
            return Err(SignerError::invalid_state("absorb called before configuration"));
        }
        trace!(len = data.len(), "Absorbing message bytes");
        self.accumulator.update(data)
    }

    /// Feed a single message byte into the digest
    ///
    /// # Errors
    ///
    /// Returns `SignerError::InvalidState` before any key material is installed.
    pub fn absorb_byte(&mut self, byte: u8) -> Result<()> {
        self.absorb(&[byte])
    }

    /// Sign everything absorbed since the last reset
    ///
    /// The digest is reset afterwards whether or not the engine succeeds.
    ///
    /// # Errors
    ///
    /// - `SignerError::InvalidState` unless configured for signing
    /// - `SignerError::ModeConfiguration` if the resolved engine is not pre-hash
    /// - `SignerError::ContextTooLong` if the context exceeds 255 bytes
    /// - any error reported by the engine provider or engine
    pub fn produce_signature(&mut self) -> Result<Vec<u8>> {
        let KeyState::Signing { key, rng } = &mut self.keys else {
            return Err(SignerError::invalid_state(
                "produce_signature requires a signer configured for signing",
            ));
        };

        let engine = resolve_pre_hash_engine(&self.provider, key.parameter_set())?;
        ensure_context_len(key.context())?;

        let mut rnd = Zeroizing::new(vec![0u8; engine.randomness_len()]);
        if let Some(rng) = rng.as_mut() {
            rng.fill_bytes(rnd.as_mut_slice());
        }

        let digest = self.accumulator.finalize();
        self.accumulator.reset();
        let digest = digest?;

        let message = encode_pre_hash_message(key.context(), &self.identifier, &digest)?;
        let signature = engine.sign_internal(message.as_bytes(), key, &rnd)?;

        debug!(
            parameter_set = %key.parameter_set(),
            digest = %self.accumulator.algorithm(),
            context = %context_fingerprint(key.context()),
            message_len = message.len(),
            signature_len = signature.len(),
            "Produced pre-hash signature"
        );
        Ok(signature)
    }

    /// Verify `signature` over everything absorbed since the last reset
    ///
    /// A signature that does not match is `Ok(false)`. The digest is reset
    /// afterwards.
    ///
    /// # Errors
    ///
    /// - `SignerError::InvalidState` unless configured for verifying
    /// - `SignerError::ModeConfiguration` if the resolved engine is not pre-hash
    /// - `SignerError::ContextTooLong` if the context exceeds 255 bytes
    /// - any error reported by the engine provider
    pub fn verify_signature(&mut self, signature: &[u8]) -> Result<bool> {
        let KeyState::Verifying { key } = &self.keys else {
            return Err(SignerError::invalid_state(
                "verify_signature requires a signer configured for verifying",
            ));
        };

        let engine = resolve_pre_hash_engine(&self.provider, key.parameter_set())?;
        ensure_context_len(key.context())?;

        let digest = self.accumulator.finalize();
        self.accumulator.reset();
        let digest = digest?;

        let message = encode_pre_hash_message(key.context(), &self.identifier, &digest)?;
        let valid = engine.verify_internal(signature, message.as_bytes(), key);

        debug!(
            parameter_set = %key.parameter_set(),
            digest = %self.accumulator.algorithm(),
            context = %context_fingerprint(key.context()),
            message_len = message.len(),
            valid,
            "Verified pre-hash signature"
        );
        Ok(valid)
    }

    /// Discard any absorbed message bytes; key material is kept
    pub fn reset(&mut self) {
        self.accumulator.reset();
    }

    /// Sign a caller-built message, bypassing digest and encoding
    ///
    /// Intended for conformance testing against known-answer vectors.
    ///
    /// # Errors
    ///
    /// - `SignerError::InvalidState` unless configured for signing
    /// - `SignerError::ModeConfiguration` if the resolved engine is not pre-hash
    /// - `SignerError::InvalidRandomness` if `randomness` has the wrong length
    /// - any error reported by the engine provider or engine
    pub fn sign_prepared(&self, message: &[u8], randomness: &[u8]) -> Result<Vec<u8>> {
        let KeyState::Signing { key, .. } = &self.keys else {
            return Err(SignerError::invalid_state(
                "sign_prepared requires a signer configured for signing",
            ));
        };

        let engine = resolve_pre_hash_engine(&self.provider, key.parameter_set())?;
        if randomness.len() != engine.randomness_len() {
            return Err(SignerError::InvalidRandomness {
                expected: engine.randomness_len(),
                actual: randomness.len(),
            });
        }
        engine.sign_internal(message, key, randomness)
    }

    /// Verify a signature over a caller-built message
    ///
    /// Intended for conformance testing against known-answer vectors.
    ///
    /// # Errors
    ///
    /// - `SignerError::InvalidState` unless configured for verifying
    /// - `SignerError::ModeConfiguration` if the resolved engine is not pre-hash
    /// - any error reported by the engine provider
    pub fn verify_prepared(&self, message: &[u8], signature: &[u8]) -> Result<bool> {
        let KeyState::Verifying { key } = &self.keys else {
            return Err(SignerError::invalid_state(
                "verify_prepared requires a signer configured for verifying",
            ));
        };

        let engine = resolve_pre_hash_engine(&self.provider, key.parameter_set())?;
        Ok(engine.verify_internal(signature, message, key))
    }
}

impl<P: EngineProvider> fmt::Debug for HashMlDsaSigner<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashMlDsaSigner")
            .field("mode", &self.mode())
            .field("identifier", &self.identifier)
            .field("accumulator", &self.accumulator)
            .finish_non_exhaustive()
    }
}

fn ensure_pre_hash_parameters(parameter_set: ParameterSet) -> Result<()> {
    if parameter_set.is_pre_hash() {
        return Ok(());
    }
    warn!(%parameter_set, "Rejected pure parameter set for pre-hash signer");
    Err(SignerError::ModeConfiguration { parameter_set })
}

fn resolve_pre_hash_engine<P: EngineProvider>(
    provider: &P,
    parameter_set: ParameterSet,
) -> Result<P::Engine> {
    let engine = provider.engine(parameter_set)?;
    if !engine.is_pre_hash() {
        warn!(%parameter_set, "Resolved engine does not run in pre-hash mode");
        return Err(SignerError::ModeConfiguration { parameter_set });
    }
    Ok(engine)
}

fn ensure_context_len(context: &[u8]) -> Result<()> {
    if context.len() > MAX_CONTEXT_LEN {
        return Err(SignerError::ContextTooLong {
            maximum: MAX_CONTEXT_LEN,
            actual: context.len(),
        });
    }
    Ok(())
}

/// Short SHA-256 fingerprint so contexts can be correlated in logs
fn context_fingerprint(context: &[u8]) -> String {
    let digest = Sha256::digest(context);
    hex::encode(&digest[..8])
}
