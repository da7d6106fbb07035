//! Serializable signer configuration

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{DigestIdentifier, HashAlgorithm, Result};

/// Digest selection for a [`HashMlDsaSigner`](crate::HashMlDsaSigner)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerConfig {
    /// Name of the pre-hash digest, e.g. `"SHA-512"` or `"SHAKE256"`
    #[serde(default = "default_digest")]
    pub digest: String,
    /// Hex-encoded DER identifier to bind instead of the digest's own OID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

fn default_digest() -> String {
    HashAlgorithm::default().name().to_string()
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            digest: default_digest(),
            identifier: None,
        }
    }
}

impl SignerConfig {
    /// Configuration for a known digest algorithm
    #[must_use]
    pub fn for_algorithm(algorithm: HashAlgorithm) -> Self {
        Self {
            digest: algorithm.name().to_string(),
            identifier: None,
        }
    }

    /// Parse configuration from JSON
    ///
    /// # Errors
    ///
    /// Returns `SignerError::Config` if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        debug!(
            digest = %config.digest,
            overridden = config.identifier.is_some(),
            "Loaded signer config"
        );
        Ok(config)
    }

    /// Resolve the configured digest algorithm
    ///
    /// # Errors
    ///
    /// Returns `SignerError::UnsupportedDigest` for an unknown name.
    pub fn algorithm(&self) -> Result<HashAlgorithm> {
        HashAlgorithm::from_name(&self.digest)
    }

    /// Identifier to bind: the override if present, otherwise the digest's OID
    ///
    /// # Errors
    ///
    /// Returns `SignerError::Config` for invalid hex, or
    /// `SignerError::UnsupportedDigest` for an unknown digest or a
    /// malformed DER override.
    pub fn resolve_identifier(&self) -> Result<DigestIdentifier> {
        match &self.identifier {
            Some(encoded) => DigestIdentifier::from_der(hex::decode(encoded.trim())?),
            None => self.algorithm().map(DigestIdentifier::for_algorithm),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SignerError;

    #[test]
    fn test_default_is_sha512() -> Result<()> {
        let config = SignerConfig::from_json("{}")?;
        assert_eq!(config, SignerConfig::default());
        assert_eq!(config.algorithm()?, HashAlgorithm::Sha512);
        Ok(())
    }

    #[test]
    fn test_identifier_override() -> Result<()> {
        let config = SignerConfig::from_json(
            r#"{"digest": "sha3-256", "identifier": "0609608648016503040208"}"#,
        )?;
        assert_eq!(config.algorithm()?, HashAlgorithm::Sha3_256);
        assert_eq!(
            config.resolve_identifier()?,
            DigestIdentifier::for_algorithm(HashAlgorithm::Sha3_256)
        );
        Ok(())
    }

    #[test]
    fn test_bad_inputs() {
        assert!(matches!(
            SignerConfig::from_json("{\"digest\": 5}"),
            Err(SignerError::Config(_))
        ));

        let bad_hex = SignerConfig {
            identifier: Some("zz".to_string()),
            ..SignerConfig::default()
        };
        assert!(matches!(bad_hex.resolve_identifier(), Err(SignerError::Config(_))));

        let unknown = SignerConfig {
            digest: "WHIRLPOOL".to_string(),
            identifier: None,
        };
        assert!(matches!(
            unknown.resolve_identifier(),
            Err(SignerError::UnsupportedDigest(_))
        ));
    }

    #[test]
    fn test_serializes_without_empty_override() -> std::result::Result<(), serde_json::Error> {
        let json = serde_json::to_string(&SignerConfig::for_algorithm(HashAlgorithm::Shake128))?;
        assert_eq!(json, r#"{"digest":"SHAKE128"}"#);
        Ok(())
    }
}
