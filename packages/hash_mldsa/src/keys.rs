//! Key material installed into the signer
//!
//! Both bundles are opaque to this crate: components are handed to the
//! signature engine untouched. Secret components are zeroized on drop.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::ParameterSet;

/// Expanded ML-DSA signing key plus the application context
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SigningKeyMaterial {
    #[zeroize(skip)]
    parameter_set: ParameterSet,
    rho: Vec<u8>,
    k: Vec<u8>,
    tr: Vec<u8>,
    t0: Vec<u8>,
    s1: Vec<u8>,
    s2: Vec<u8>,
    context: Vec<u8>,
}

impl SigningKeyMaterial {
    /// Assemble signing key material from its components
    ///
    /// The context starts empty; use [`with_context`](Self::with_context)
    /// to bind one.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        parameter_set: ParameterSet,
        rho: impl Into<Vec<u8>>,
        k: impl Into<Vec<u8>>,
        tr: impl Into<Vec<u8>>,
        t0: impl Into<Vec<u8>>,
        s1: impl Into<Vec<u8>>,
        s2: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            parameter_set,
            rho: rho.into(),
            k: k.into(),
            tr: tr.into(),
            t0: t0.into(),
            s1: s1.into(),
            s2: s2.into(),
            context: Vec::new(),
        }
    }

    /// Bind an application context string
    #[must_use]
    pub fn with_context(mut self, context: impl Into<Vec<u8>>) -> Self {
        self.context = context.into();
        self
    }

    /// Parameter set the key belongs to
    #[must_use]
    pub fn parameter_set(&self) -> ParameterSet {
        self.parameter_set
    }

    /// Public seed
    #[must_use]
    pub fn rho(&self) -> &[u8] {
        &self.rho
    }

    /// Private signing seed K
    #[must_use]
    pub fn k(&self) -> &[u8] {
        &self.k
    }

    /// Hash of the public key
    #[must_use]
    pub fn tr(&self) -> &[u8] {
        &self.tr
    }

    /// Low-order bits of t
    #[must_use]
    pub fn t0(&self) -> &[u8] {
        &self.t0
    }

    /// Secret vector s1
    #[must_use]
    pub fn s1(&self) -> &[u8] {
        &self.s1
    }

    /// Secret vector s2
    #[must_use]
    pub fn s2(&self) -> &[u8] {
        &self.s2
    }

    /// Application context bound into every signature
    #[must_use]
    pub fn context(&self) -> &[u8] {
        &self.context
    }
}

impl fmt::Debug for SigningKeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKeyMaterial")
            .field("parameter_set", &self.parameter_set)
            .field("context_len", &self.context.len())
            .finish_non_exhaustive()
    }
}

/// ML-DSA public key plus the application context
#[derive(Clone, PartialEq, Eq)]
pub struct VerificationKeyMaterial {
    parameter_set: ParameterSet,
    rho: Vec<u8>,
    t1: Vec<u8>,
    context: Vec<u8>,
}

impl VerificationKeyMaterial {
    /// Assemble verification key material from its components
    #[must_use]
    pub fn new(
        parameter_set: ParameterSet,
        rho: impl Into<Vec<u8>>,
        t1: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            parameter_set,
            rho: rho.into(),
            t1: t1.into(),
            context: Vec::new(),
        }
    }

    /// Bind an application context string
    #[must_use]
    pub fn with_context(mut self, context: impl Into<Vec<u8>>) -> Self {
        self.context = context.into();
        self
    }

    /// Parameter set the key belongs to
    #[must_use]
    pub fn parameter_set(&self) -> ParameterSet {
        self.parameter_set
    }

    /// Public seed
    #[must_use]
    pub fn rho(&self) -> &[u8] {
        &self.rho
    }

    /// High-order bits of t
    #[must_use]
    pub fn t1(&self) -> &[u8] {
        &self.t1
    }

    /// Application context the signature must have been bound to
    #[must_use]
    pub fn context(&self) -> &[u8] {
        &self.context
    }
}

impl fmt::Debug for VerificationKeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationKeyMaterial")
            .field("parameter_set", &self.parameter_set)
            .field("rho", &hex::encode(&self.rho))
            .field("t1_len", &self.t1.len())
            .field("context_len", &self.context.len())
            .finish()
    }
}
