// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod error;
pub mod hal_traits;
pub mod transfer;

#[cfg(test)]
pub(crate) mod testutil;

// --- Re-export key types/traits/functions for easier access ---

// From error.rs
pub use error::EnvError;

// From hal_traits.rs
pub use hal_traits::RegisterBus;

// From transfer.rs
pub use transfer::{poll_block, read_block};

// --- Feature-gated re-exports ---

// Generic embedded-hal bus adapter (from hal_traits.rs)
#[cfg(feature = "impl-hal")]
pub use hal_traits::HalRegisterBus;
