//!
//! FIPS suite: SHA3-256.

use super::Hasher;
use crate::types::AlgSuite;
use sha3::{Digest, Sha3_256};

/// SHA3-256 digest provider.
#[derive(Debug, Default, Clone, Copy)]
pub struct FipsHasher;

impl Hasher for FipsHasher {
    fn suite(&self) -> AlgSuite {
        AlgSuite::FIPS
    }

    fn digest(&self, data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha3_256::new();
        hasher.update(data);
        hasher.finalize().into() // GenericArray<u8, U32> -> [u8; 32]
    }
}
