//! Domain-separated message encoding for pre-hash signing
//!
//! Layout, with no padding between fields:
//!
//! ```text
//! 0x01 || len(ctx) as 1 byte || ctx || DER(OID of hash) || digest(message)
//! ```

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{DigestIdentifier, Result, SignerError};

/// Domain byte marking a pre-hashed message
pub const PRE_HASH_DOMAIN: u8 = 0x01;

/// Domain byte used by pure-mode signing; never emitted by this crate
pub const PURE_DOMAIN: u8 = 0x00;

/// Largest context that fits in the length byte
pub const MAX_CONTEXT_LEN: usize = 255;

/// The exact byte string handed to the signature engine
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct DomainSeparatedBuffer {
    bytes: Vec<u8>,
}

impl DomainSeparatedBuffer {
    /// The encoded bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Total encoded length
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Never true: the mode and length bytes are always present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Take the bytes out of the buffer
    #[must_use]
    pub fn into_vec(mut self) -> Vec<u8> {
        std::mem::take(&mut self.bytes)
    }
}

impl AsRef<[u8]> for DomainSeparatedBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for DomainSeparatedBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainSeparatedBuffer")
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Build the pre-hash message for a context, identifier and digest
///
/// # Errors
///
/// Returns `SignerError::ContextTooLong` if the context does not fit in
/// the length byte. The signer checks this before finalizing its digest,
/// so the error only reaches direct callers.
pub fn encode_pre_hash_message(
    context: &[u8],
    identifier: &DigestIdentifier,
    digest: &[u8],
) -> Result<DomainSeparatedBuffer> {
    let context_len = u8::try_from(context.len()).map_err(|_| SignerError::ContextTooLong {
        maximum: MAX_CONTEXT_LEN,
        actual: context.len(),
    })?;

    let mut bytes = Vec::with_capacity(2 + context.len() + identifier.len() + digest.len());
    bytes.push(PRE_HASH_DOMAIN);
    bytes.push(context_len);
    bytes.extend_from_slice(context);
    bytes.extend_from_slice(identifier.as_bytes());
    bytes.extend_from_slice(digest);
    Ok(DomainSeparatedBuffer { bytes })
}
