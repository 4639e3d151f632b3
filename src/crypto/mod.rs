//!
//! Digest abstraction for execution identifiers.
//!
//! The keeper never hashes directly; key derivation goes through a `Hasher`
//! so the digest suite can be swapped without touching the canonical
//! encoding in `keygen`.

use crate::types::AlgSuite;

/// A 256-bit content digest provider.
///
/// Implementations MUST be deterministic: the same input always yields the
/// same output, across processes and platforms.
pub trait Hasher: Send + Sync + std::fmt::Debug {
    /// The suite this provider implements.
    fn suite(&self) -> AlgSuite;

    /// Digests `data` into 32 bytes. Never fails.
    fn digest(&self, data: &[u8]) -> [u8; 32];
}

// Module for the CLASSIC suite (BLAKE3-256)
pub mod classic;

pub use classic::ClassicHasher;

// Module for the FIPS suite (SHA3-256)
pub mod fips;

pub use fips::FipsHasher;

/// Runtime-selected hasher, for callers that pick the suite from a tag.
pub type DynHasher = Box<dyn Hasher>;

impl Hasher for DynHasher {
    fn suite(&self) -> AlgSuite {
        self.as_ref().suite()
    }

    fn digest(&self, data: &[u8]) -> [u8; 32] {
        self.as_ref().digest(data)
    }
}

/// Returns the provider for `suite`.
pub fn hasher_for(suite: AlgSuite) -> DynHasher {
    match suite {
        AlgSuite::CLASSIC => Box::new(ClassicHasher),
        AlgSuite::FIPS => Box::new(FipsHasher),
    }
}
