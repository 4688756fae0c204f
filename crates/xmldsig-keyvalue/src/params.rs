//! Public-key parameter sets carried by KeyValue elements.
//!
//! These records are shape-only: nothing here checks that the numbers form a
//! usable key. That is left to whatever imports them into a key object.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::bigint::serde_base64;

/// DSA domain parameters and public value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DsaParameters {
    #[serde(with = "serde_base64")]
    pub p: BigUint,
    #[serde(with = "serde_base64")]
    pub q: BigUint,
    #[serde(with = "serde_base64")]
    pub g: BigUint,
    #[serde(with = "serde_base64")]
    pub y: BigUint,
    #[serde(
        default,
        with = "serde_base64::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub j: Option<BigUint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<DsaGeneration>,
}

/// FIPS 186 generation record. `Seed` and `PgenCounter` are only meaningful
/// together, so they live in one optional value.
///
/// The seed is a bit string whose length is part of its value, so it is kept
/// as raw bytes rather than an integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DsaGeneration {
    #[serde(with = "serde_base64::bytes")]
    pub seed: Vec<u8>,
    #[serde(with = "serde_base64")]
    pub pgen_counter: BigUint,
}

impl DsaParameters {
    pub fn new(p: BigUint, q: BigUint, g: BigUint, y: BigUint) -> Self {
        Self {
            p,
            q,
            g,
            y,
            j: None,
            generation: None,
        }
    }

    pub fn with_j(mut self, j: BigUint) -> Self {
        self.j = Some(j);
        self
    }

    pub fn with_generation(mut self, seed: impl Into<Vec<u8>>, pgen_counter: BigUint) -> Self {
        self.generation = Some(DsaGeneration {
            seed: seed.into(),
            pgen_counter,
        });
        self
    }

    pub fn seed(&self) -> Option<&[u8]> {
        self.generation.as_ref().map(|g| g.seed.as_slice())
    }

    pub fn pgen_counter(&self) -> Option<&BigUint> {
        self.generation.as_ref().map(|g| &g.pgen_counter)
    }
}

/// RSA public key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaParameters {
    #[serde(with = "serde_base64")]
    pub modulus: BigUint,
    #[serde(with = "serde_base64")]
    pub exponent: BigUint,
}

impl RsaParameters {
    pub fn new(modulus: BigUint, exponent: BigUint) -> Self {
        Self { modulus, exponent }
    }

    /// Modulus length in bytes.
    pub fn key_size(&self) -> usize {
        self.modulus.bits().div_ceil(8) as usize
    }
}
