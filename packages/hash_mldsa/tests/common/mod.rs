//! Shared fixtures for the pre-hash signer integration tests
//!
//! `KeyedHashEngine` stands in for the lattice engine: a signature is
//! `rnd || HMAC-SHA-512(rho || tr, rnd || message)`. The fixtures give the
//! verification key `t1 == tr`, so the public side can recompute the tag.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use cryypt_hash_mldsa::engine::RND_BYTES;
use cryypt_hash_mldsa::{
    EngineProvider, ParameterSet, Result, SignatureEngine, SignerError, SigningKeyMaterial,
    VerificationKeyMaterial,
};
use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// What the engine saw on its most recent call
#[derive(Debug, Default)]
pub struct EngineLog {
    pub last_message: RefCell<Vec<u8>>,
    pub last_randomness: RefCell<Vec<u8>>,
    pub sign_calls: Cell<usize>,
    pub verify_calls: Cell<usize>,
}

#[derive(Clone)]
pub struct KeyedHashEngine {
    pre_hash: bool,
    log: Rc<EngineLog>,
}

impl KeyedHashEngine {
    fn mac(key_parts: &[&[u8]]) -> Option<HmacSha512> {
        HmacSha512::new_from_slice(&key_parts.concat()).ok()
    }
}

impl SignatureEngine for KeyedHashEngine {
    fn is_pre_hash(&self) -> bool {
        self.pre_hash
    }

    fn sign_internal(
        &self,
        message: &[u8],
        key: &SigningKeyMaterial,
        randomness: &[u8],
    ) -> Result<Vec<u8>> {
        self.log.sign_calls.set(self.log.sign_calls.get() + 1);
        *self.log.last_message.borrow_mut() = message.to_vec();
        *self.log.last_randomness.borrow_mut() = randomness.to_vec();

        if key.s1().is_empty() {
            return Err(SignerError::engine("s1 must not be empty"));
        }
        let mut mac = Self::mac(&[key.rho(), key.tr()])
            .ok_or_else(|| SignerError::engine("unusable MAC key"))?;
        mac.update(randomness);
        mac.update(message);

        let mut signature = randomness.to_vec();
        signature.extend_from_slice(&mac.finalize().into_bytes());
        Ok(signature)
    }

    fn verify_internal(
        &self,
        signature: &[u8],
        message: &[u8],
        key: &VerificationKeyMaterial,
    ) -> bool {
        self.log.verify_calls.set(self.log.verify_calls.get() + 1);
        *self.log.last_message.borrow_mut() = message.to_vec();

        if signature.len() < RND_BYTES {
            return false;
        }
        let (randomness, tag) = signature.split_at(RND_BYTES);
        let Some(mut mac) = Self::mac(&[key.rho(), key.t1()]) else {
            return false;
        };
        mac.update(randomness);
        mac.update(message);
        mac.verify_slice(tag).is_ok()
    }
}

/// Provider that counts resolutions and can be told to hand out pure engines
#[derive(Clone, Default)]
pub struct TestProvider {
    pub force_pure: bool,
    pub resolutions: Rc<Cell<usize>>,
    pub log: Rc<EngineLog>,
}

impl TestProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pure_engines() -> Self {
        Self {
            force_pure: true,
            ..Self::default()
        }
    }
}

impl EngineProvider for TestProvider {
    type Engine = KeyedHashEngine;

    fn engine(&self, parameter_set: ParameterSet) -> Result<Self::Engine> {
        self.resolutions.set(self.resolutions.get() + 1);
        Ok(KeyedHashEngine {
            pre_hash: parameter_set.is_pre_hash() && !self.force_pure,
            log: Rc::clone(&self.log),
        })
    }
}

/// Matching signing and verification keys derived from `seed`
pub fn key_pair(
    parameter_set: ParameterSet,
    seed: u8,
    context: &[u8],
) -> (SigningKeyMaterial, VerificationKeyMaterial) {
    let rho = vec![seed; 32];
    let tr = vec![seed.wrapping_add(1); 64];
    let signing = SigningKeyMaterial::new(
        parameter_set,
        rho.clone(),
        vec![seed.wrapping_add(2); 32],
        tr.clone(),
        vec![seed.wrapping_add(3); 16],
        vec![seed.wrapping_add(4); 16],
        vec![seed.wrapping_add(5); 16],
    )
    .with_context(context.to_vec());
    let verifying =
        VerificationKeyMaterial::new(parameter_set, rho, tr).with_context(context.to_vec());
    (signing, verifying)
}

pub fn default_key_pair(context: &[u8]) -> (SigningKeyMaterial, VerificationKeyMaterial) {
    key_pair(ParameterSet::MlDsa65WithSha512, 0x42, context)
}
