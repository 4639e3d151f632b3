//!
//! CLASSIC suite: BLAKE3-256.

use super::Hasher;
use crate::types::AlgSuite;

/// BLAKE3-256 digest provider.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClassicHasher;

impl Hasher for ClassicHasher {
    fn suite(&self) -> AlgSuite {
        AlgSuite::CLASSIC
    }

    fn digest(&self, data: &[u8]) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new();
        hasher.update(data);
        *hasher.finalize().as_bytes()
    }
}
