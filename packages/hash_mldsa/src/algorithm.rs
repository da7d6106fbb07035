//! Algorithm enums for pre-hash ML-DSA

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::SignerError;

/// DER prefix shared by every NIST hash algorithm OID (2.16.840.1.101.3.4.2)
const NIST_HASH_OID_PREFIX: [u8; 10] = [0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02];

/// Hash functions approved for pre-hashing a message before signing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HashAlgorithm {
    /// SHA-224
    #[serde(rename = "sha-224")]
    Sha224,

    /// SHA-256
    #[serde(rename = "sha-256")]
    Sha256,

    /// SHA-384
    #[serde(rename = "sha-384")]
    Sha384,

    /// SHA-512, the digest paired with the standard HashML-DSA parameter sets
    #[serde(rename = "sha-512")]
    #[default]
    Sha512,

    /// SHA-512/224
    #[serde(rename = "sha-512/224")]
    Sha512_224,

    /// SHA-512/256
    #[serde(rename = "sha-512/256")]
    Sha512_256,

    /// SHA3-224
    #[serde(rename = "sha3-224")]
    Sha3_224,

    /// SHA3-256
    #[serde(rename = "sha3-256")]
    Sha3_256,

    /// SHA3-384
    #[serde(rename = "sha3-384")]
    Sha3_384,

    /// SHA3-512
    #[serde(rename = "sha3-512")]
    Sha3_512,

    /// SHAKE128 with 256 bits of output
    #[serde(rename = "shake128")]
    Shake128,

    /// SHAKE256 with 512 bits of output
    #[serde(rename = "shake256")]
    Shake256,
}

impl HashAlgorithm {
    /// Every supported algorithm, in OID arc order
    pub const ALL: [Self; 12] = [
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Sha224,
        Self::Sha512_224,
        Self::Sha512_256,
        Self::Sha3_224,
        Self::Sha3_256,
        Self::Sha3_384,
        Self::Sha3_512,
        Self::Shake128,
        Self::Shake256,
    ];

    /// Canonical algorithm name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sha224 => "SHA-224",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
            Self::Sha512_224 => "SHA-512/224",
            Self::Sha512_256 => "SHA-512/256",
            Self::Sha3_224 => "SHA3-224",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_384 => "SHA3-384",
            Self::Sha3_512 => "SHA3-512",
            Self::Shake128 => "SHAKE128",
            Self::Shake256 => "SHAKE256",
        }
    }

    /// Size in bytes of the digest that gets bound into the signed message
    #[must_use]
    pub const fn digest_size(&self) -> usize {
        match self {
            Self::Sha224 | Self::Sha512_224 | Self::Sha3_224 => 28,
            Self::Sha256 | Self::Sha512_256 | Self::Sha3_256 | Self::Shake128 => 32,
            Self::Sha384 | Self::Sha3_384 => 48,
            Self::Sha512 | Self::Sha3_512 | Self::Shake256 => 64,
        }
    }

    /// Last arc of the algorithm's OID under 2.16.840.1.101.3.4.2
    const fn oid_arc(&self) -> u8 {
        match self {
            Self::Sha256 => 0x01,
            Self::Sha384 => 0x02,
            Self::Sha512 => 0x03,
            Self::Sha224 => 0x04,
            Self::Sha512_224 => 0x05,
            Self::Sha512_256 => 0x06,
            Self::Sha3_224 => 0x07,
            Self::Sha3_256 => 0x08,
            Self::Sha3_384 => 0x09,
            Self::Sha3_512 => 0x0a,
            Self::Shake128 => 0x0b,
            Self::Shake256 => 0x0c,
        }
    }

    /// DER encoding of the algorithm's object identifier
    #[must_use]
    pub fn oid_encoding(&self) -> [u8; 11] {
        let mut der = [0u8; 11];
        der[..10].copy_from_slice(&NIST_HASH_OID_PREFIX);
        der[10] = self.oid_arc();
        der
    }

    /// Resolve an algorithm from its name, ignoring ASCII case
    ///
    /// # Errors
    ///
    /// Returns `SignerError::UnsupportedDigest` if the name is not recognised.
    pub fn from_name(name: &str) -> crate::Result<Self> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| SignerError::unsupported_digest(name))
    }
}

impl FromStr for HashAlgorithm {
    type Err = SignerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// ML-DSA parameter sets, in their pure and pre-hash flavours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterSet {
    /// ML-DSA-44 (NIST security level 2), pure mode
    #[serde(rename = "ml-dsa-44")]
    MlDsa44,

    /// ML-DSA-65 (NIST security level 3), pure mode
    #[serde(rename = "ml-dsa-65")]
    MlDsa65,

    /// ML-DSA-87 (NIST security level 5), pure mode
    #[serde(rename = "ml-dsa-87")]
    MlDsa87,

    /// HashML-DSA-44 with SHA-512 pre-hashing
    #[serde(rename = "ml-dsa-44-with-sha512")]
    MlDsa44WithSha512,

    /// HashML-DSA-65 with SHA-512 pre-hashing
    #[serde(rename = "ml-dsa-65-with-sha512")]
    MlDsa65WithSha512,

    /// HashML-DSA-87 with SHA-512 pre-hashing
    #[serde(rename = "ml-dsa-87-with-sha512")]
    MlDsa87WithSha512,
}

impl ParameterSet {
    /// Name of the parameter set
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MlDsa44 => "ML-DSA-44",
            Self::MlDsa65 => "ML-DSA-65",
            Self::MlDsa87 => "ML-DSA-87",
            Self::MlDsa44WithSha512 => "ML-DSA-44-WITH-SHA512",
            Self::MlDsa65WithSha512 => "ML-DSA-65-WITH-SHA512",
            Self::MlDsa87WithSha512 => "ML-DSA-87-WITH-SHA512",
        }
    }

    /// Whether the parameter set signs a digest rather than the raw message
    #[must_use]
    pub const fn is_pre_hash(&self) -> bool {
        matches!(
            self,
            Self::MlDsa44WithSha512 | Self::MlDsa65WithSha512 | Self::MlDsa87WithSha512
        )
    }

    /// NIST security level
    #[must_use]
    pub const fn security_level(&self) -> u8 {
        match self {
            Self::MlDsa44 | Self::MlDsa44WithSha512 => 2,
            Self::MlDsa65 | Self::MlDsa65WithSha512 => 3,
            Self::MlDsa87 | Self::MlDsa87WithSha512 => 5,
        }
    }

    /// Encoded public key size in bytes
    #[must_use]
    pub const fn public_key_size(&self) -> usize {
        match self {
            Self::MlDsa44 | Self::MlDsa44WithSha512 => 1312,
            Self::MlDsa65 | Self::MlDsa65WithSha512 => 1952,
            Self::MlDsa87 | Self::MlDsa87WithSha512 => 2592,
        }
    }

    /// Encoded signature size in bytes
    #[must_use]
    pub const fn signature_size(&self) -> usize {
        match self {
            Self::MlDsa44 | Self::MlDsa44WithSha512 => 2420,
            Self::MlDsa65 | Self::MlDsa65WithSha512 => 3309,
            Self::MlDsa87 | Self::MlDsa87WithSha512 => 4627,
        }
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
