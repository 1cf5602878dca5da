// src/si7005/registers.rs

use core::time::Duration;

/// Factory-default 7-bit bus address.
pub const DEFAULT_ADDRESS: u8 = 0x40;

// === Register Map (datasheet Table 9) ===

/// Status register. Bit 0 reads 1 while a conversion is in progress.
pub const REG_STATUS: u8 = 0x00;
/// Relative humidity or temperature, high byte.
pub const REG_DATA_HIGH: u8 = 0x01;
/// Relative humidity or temperature, low byte.
pub const REG_DATA_LOW: u8 = 0x02;
/// Configuration register.
pub const REG_CONFIG: u8 = 0x03;
/// Device ID register. Not part of the acquisition path.
pub const REG_ID: u8 = 0x11;

// === Status Register ===

/// Conversion in progress.
pub const STATUS_NOT_READY: u8 = 0x01;

// === Configuration Register ===

/// Start a conversion.
pub const CONFIG_START: u8 = 0x01;
/// On-chip heater enable.
pub const CONFIG_HEATER: u8 = 0x02;
/// Select temperature conversion; cleared selects relative humidity.
pub const CONFIG_TEMPERATURE: u8 = 0x10;
/// Fast conversion mode, 2.6 ms at reduced resolution.
pub const CONFIG_FAST: u8 = 0x20;

// === Conversion Timing (datasheet Table 2) ===

/// Typical normal-mode conversion time for one channel.
pub const CONVERSION_TIME_TYPICAL: Duration = Duration::from_millis(35);
/// Fast-mode conversion time.
pub const CONVERSION_TIME_FAST: Duration = Duration::from_micros(2600);
