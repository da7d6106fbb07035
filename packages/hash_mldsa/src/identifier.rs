//! Identifier binding for the pre-hash digest
//!
//! The DER encoding of the digest's object identifier is computed once and
//! carried unchanged into every domain-separated message.

use std::fmt;

use crate::{HashAlgorithm, Result, SignerError};

/// ASN.1 tag of an OBJECT IDENTIFIER
const DER_OID_TAG: u8 = 0x06;

/// Immutable DER encoding of a hash algorithm's object identifier
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DigestIdentifier {
    der: Box<[u8]>,
}

impl DigestIdentifier {
    /// Identifier for one of the supported hash algorithms
    #[must_use]
    pub fn for_algorithm(algorithm: HashAlgorithm) -> Self {
        Self {
            der: Box::new(algorithm.oid_encoding()),
        }
    }

    /// Wrap a ready-made DER encoding
    ///
    /// Only the outer TLV is checked: a single OBJECT IDENTIFIER whose
    /// length byte matches the content.
    ///
    /// # Errors
    ///
    /// Returns `SignerError::UnsupportedDigest` if the bytes are not a
    /// short-form DER OBJECT IDENTIFIER.
    pub fn from_der(der: impl Into<Vec<u8>>) -> Result<Self> {
        let der = der.into();
        let well_formed = matches!(
            der.as_slice(),
            [DER_OID_TAG, len, content @ ..]
                if *len < 0x80 && !content.is_empty() && content.len() == usize::from(*len)
        );
        if !well_formed {
            return Err(SignerError::unsupported_digest(format!(
                "not a DER object identifier: {}",
                hex::encode(&der)
            )));
        }
        Ok(Self {
            der: der.into_boxed_slice(),
        })
    }

    /// The DER bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.der
    }

    /// Length of the encoding in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.der.len()
    }

    /// Always false for a constructed identifier
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.der.is_empty()
    }

    /// Hex rendering of the encoding
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.der)
    }
}

impl fmt::Debug for DigestIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DigestIdentifier").field(&self.to_hex()).finish()
    }
}

impl AsRef<[u8]> for DigestIdentifier {
    fn as_ref(&self) -> &[u8] {
        &self.der
    }
}

/// Look up the identifier encoding for a hash algorithm name
///
/// # Errors
///
/// Returns `SignerError::UnsupportedDigest` if the name has no known identifier.
pub fn lookup_identifier_encoding(name: &str) -> Result<DigestIdentifier> {
    HashAlgorithm::from_name(name).map(DigestIdentifier::for_algorithm)
}
