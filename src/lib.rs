#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! Execution keeper: keyed storage for scheduled recipe executions.
//!
//! An `Execution` consumes coins and items, produces others, and becomes
//! eligible to complete at a target block height. Its id is derived once from
//! its content (`keygen`) and used as the storage key by the `Keeper`, which
//! offers `set_execution`, `get_execution` and `update_execution` over any
//! `KvStore` lent to it through a per-call `Context`.

// Shared enums and aliases (AlgSuite, BlockHeight).
pub mod types;

// Record types: Execution, Coin, Item, ExecutionId, Fingerprint.
pub mod primitives;

// Re-export the records for easier access at the crate root.
pub use primitives::*;

// Digest providers behind id derivation.
pub mod crypto;

// Canonical encoding and id derivation.
pub mod keygen;

// Key/value substrate.
pub mod store;

pub mod error;

// Set/Get/Update over executions.
pub mod keeper;

pub use error::KeeperError;
pub use keeper::{Context, Keeper};
pub use keygen::IdGenerator;
pub use store::{KvStore, MemoryStore, StoreError};

#[cfg(feature = "logging")]
pub mod logging;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
