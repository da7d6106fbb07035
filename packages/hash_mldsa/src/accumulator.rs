//! Streaming digest accumulator
//!
//! Absorbs message bytes incrementally. A finalized accumulator refuses
//! further input until it is explicitly reset, so one message digest can
//! never silently chain into the next.

use digest::{Digest, ExtendableOutputReset, Reset, Update};
use sha2::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128, Shake256};

use crate::{HashAlgorithm, Result, SignerError};

/// Internal hasher state for the supported algorithms
#[derive(Clone)]
enum HasherState {
    Sha224(Sha224),
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
    Sha512_224(Sha512_224),
    Sha512_256(Sha512_256),
    Sha3_224(Sha3_224),
    Sha3_256(Sha3_256),
    Sha3_384(Sha3_384),
    Sha3_512(Sha3_512),
    Shake128(Shake128),
    Shake256(Shake256),
}

impl HasherState {
    fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Sha224 => Self::Sha224(Sha224::new()),
            HashAlgorithm::Sha256 => Self::Sha256(Sha256::new()),
            HashAlgorithm::Sha384 => Self::Sha384(Sha384::new()),
            HashAlgorithm::Sha512 => Self::Sha512(Sha512::new()),
            HashAlgorithm::Sha512_224 => Self::Sha512_224(Sha512_224::new()),
            HashAlgorithm::Sha512_256 => Self::Sha512_256(Sha512_256::new()),
            HashAlgorithm::Sha3_224 => Self::Sha3_224(Sha3_224::new()),
            HashAlgorithm::Sha3_256 => Self::Sha3_256(Sha3_256::new()),
            HashAlgorithm::Sha3_384 => Self::Sha3_384(Sha3_384::new()),
            HashAlgorithm::Sha3_512 => Self::Sha3_512(Sha3_512::new()),
            HashAlgorithm::Shake128 => Self::Shake128(Shake128::default()),
            HashAlgorithm::Shake256 => Self::Shake256(Shake256::default()),
        }
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            Self::Sha224(h) => Digest::update(h, data),
            Self::Sha256(h) => Digest::update(h, data),
            Self::Sha384(h) => Digest::update(h, data),
            Self::Sha512(h) => Digest::update(h, data),
            Self::Sha512_224(h) => Digest::update(h, data),
            Self::Sha512_256(h) => Digest::update(h, data),
            Self::Sha3_224(h) => Digest::update(h, data),
            Self::Sha3_256(h) => Digest::update(h, data),
            Self::Sha3_384(h) => Digest::update(h, data),
            Self::Sha3_512(h) => Digest::update(h, data),
            Self::Shake128(h) => Update::update(h, data),
            Self::Shake256(h) => Update::update(h, data),
        }
    }

    /// Produce the digest; the hasher is left cleared
    fn finalize(&mut self, size: usize) -> Vec<u8> {
        match self {
            Self::Sha224(h) => Digest::finalize_reset(h).to_vec(),
            Self::Sha256(h) => Digest::finalize_reset(h).to_vec(),
            Self::Sha384(h) => Digest::finalize_reset(h).to_vec(),
            Self::Sha512(h) => Digest::finalize_reset(h).to_vec(),
            Self::Sha512_224(h) => Digest::finalize_reset(h).to_vec(),
            Self::Sha512_256(h) => Digest::finalize_reset(h).to_vec(),
            Self::Sha3_224(h) => Digest::finalize_reset(h).to_vec(),
            Self::Sha3_256(h) => Digest::finalize_reset(h).to_vec(),
            Self::Sha3_384(h) => Digest::finalize_reset(h).to_vec(),
            Self::Sha3_512(h) => Digest::finalize_reset(h).to_vec(),
            Self::Shake128(h) => {
                let mut out = vec![0u8; size];
                ExtendableOutputReset::finalize_xof_reset_into(h, &mut out);
                out
            }
            Self::Shake256(h) => {
                let mut out = vec![0u8; size];
                ExtendableOutputReset::finalize_xof_reset_into(h, &mut out);
                out
            }
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Sha224(h) => Digest::reset(h),
            Self::Sha256(h) => Digest::reset(h),
            Self::Sha384(h) => Digest::reset(h),
            Self::Sha512(h) => Digest::reset(h),
            Self::Sha512_224(h) => Digest::reset(h),
            Self::Sha512_256(h) => Digest::reset(h),
            Self::Sha3_224(h) => Digest::reset(h),
            Self::Sha3_256(h) => Digest::reset(h),
            Self::Sha3_384(h) => Digest::reset(h),
            Self::Sha3_512(h) => Digest::reset(h),
            Self::Shake128(h) => Reset::reset(h),
            Self::Shake256(h) => Reset::reset(h),
        }
    }
}

/// Running hash over the message being signed or verified
#[derive(Clone)]
pub struct DigestAccumulator {
    algorithm: HashAlgorithm,
    state: HasherState,
    bytes_absorbed: u64,
    finalized: bool,
}

impl DigestAccumulator {
    /// Create an empty accumulator for the given algorithm
    #[must_use]
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            state: HasherState::new(algorithm),
            bytes_absorbed: 0,
            finalized: false,
        }
    }

    /// Algorithm this accumulator computes
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Size of the digest returned by [`finalize`](Self::finalize)
    #[must_use]
    pub fn digest_size(&self) -> usize {
        self.algorithm.digest_size()
    }

    /// Bytes absorbed since the last reset
    #[must_use]
    pub fn bytes_absorbed(&self) -> u64 {
        self.bytes_absorbed
    }

    /// Whether a digest has been taken and no reset has happened since
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Absorb more message bytes
    ///
    /// # Errors
    ///
    /// Returns `SignerError::InvalidState` if the accumulator was finalized
    /// and not reset.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        self.ensure_open("update")?;
        self.state.update(data);
        self.bytes_absorbed += data.len() as u64;
        Ok(())
    }

    /// Absorb a single byte
    ///
    /// # Errors
    ///
    /// Returns `SignerError::InvalidState` if the accumulator was finalized
    /// and not reset.
    pub fn update_byte(&mut self, byte: u8) -> Result<()> {
        self.update(&[byte])
    }

    /// Digest of every byte absorbed since the last reset
    ///
    /// # Errors
    ///
    /// Returns `SignerError::InvalidState` if the accumulator was already
    /// finalized and not reset.
    pub fn finalize(&mut self) -> Result<Vec<u8>> {
        self.ensure_open("finalize")?;
        let digest = self.state.finalize(self.digest_size());
        self.finalized = true;
        Ok(digest)
    }

    /// Clear all accumulated state
    pub fn reset(&mut self) {
        self.state.reset();
        self.bytes_absorbed = 0;
        self.finalized = false;
    }

    fn ensure_open(&self, operation: &str) -> Result<()> {
        if self.finalized {
            return Err(SignerError::invalid_state(format!(
                "digest accumulator {operation} after finalize; reset required"
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for DigestAccumulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DigestAccumulator")
            .field("algorithm", &self.algorithm)
            .field("bytes_absorbed", &self.bytes_absorbed)
            .field("finalized", &self.finalized)
            .finish()
    }
}
