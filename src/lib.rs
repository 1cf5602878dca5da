// src/lib.rs

#![no_std] // Specify no_std at the crate root

pub mod common;
pub mod si7005;
pub mod tsl2561;

// Re-export key types for convenience
pub use common::EnvError;
pub use common::RegisterBus;
pub use si7005::{HumidityReading, Si7005, TemperatureReading};
pub use tsl2561::{Gain, IntegrationTime, LightReading, Tsl2561};
