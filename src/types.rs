// Shared enums and aliases used across the keeper. Record structures live in
// `primitives.rs`; this file only holds the small types that several modules
// (crypto, keygen, primitives) refer to.

/// Digest suite used to derive execution ids.
/// The `u8` tag is stable and may be carried in configuration.
#[repr(u8)]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum AlgSuite {
    /// BLAKE3-256. The default for `Execution::key_gen`.
    #[default]
    CLASSIC = 0,
    /// SHA3-256, for deployments that require a FIPS-approved digest.
    FIPS = 1,
}

impl TryFrom<u8> for AlgSuite {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AlgSuite::CLASSIC),
            1 => Ok(AlgSuite::FIPS),
            _ => Err(format!("Invalid AlgSuite tag: {}", value)),
        }
    }
}

/// Logical time of the surrounding chain. Opaque to the keeper.
pub type BlockHeight = u64;

/// Fungible amount. Never negative.
pub type Amount = u128;
