pub mod context;
pub mod core;

// Re-export the primary types so `crate::keeper::*` paths stay short.
pub use self::context::Context;
pub use self::core::Keeper;
