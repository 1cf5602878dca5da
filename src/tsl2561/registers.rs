// src/tsl2561/registers.rs

/// Factory-default 7-bit bus address (ADDR SEL floating).
pub const DEFAULT_ADDRESS: u8 = 0x39;

/// Command bit the device requires OR'd into every register address.
pub const COMMAND_BIT: u8 = 0x80;

// === Register Map (datasheet Table 2) ===

/// Control register.
pub const REG_CONTROL: u8 = 0x00;
/// Timing register.
pub const REG_TIMING: u8 = 0x01;
/// Interrupt threshold registers, low/high bytes of both bounds. Threshold
/// interrupts are outside this driver's scope.
pub const REG_THRESHLOW_LOW: u8 = 0x02;
pub const REG_THRESHLOW_HIGH: u8 = 0x03;
pub const REG_THRESHHIGH_LOW: u8 = 0x04;
pub const REG_THRESHHIGH_HIGH: u8 = 0x05;
/// Interrupt control register.
pub const REG_INTERRUPT: u8 = 0x06;
/// ADC channel 0 (full spectrum), low then high byte.
pub const REG_DATA0_LOW: u8 = 0x0C;
pub const REG_DATA0_HIGH: u8 = 0x0D;
/// ADC channel 1 (infrared), low then high byte.
pub const REG_DATA1_LOW: u8 = 0x0E;
pub const REG_DATA1_HIGH: u8 = 0x0F;

// === Control Register ===

pub const CONTROL_POWER_UP: u8 = 0x03;
pub const CONTROL_POWER_DOWN: u8 = 0x00;

// === Timing Register ===

/// Analog gain select, bit 4. Clear = 1x, set = 16x.
pub const TIMING_GAIN_16X: u8 = 0x10;
/// Begin a manually-timed integration cycle, bit 3.
pub const TIMING_MANUAL_START: u8 = 0x08;
/// End a manually-timed integration cycle.
pub const TIMING_MANUAL_STOP: u8 = 0x00;
/// Integration time select, bits 0-1.
pub const TIMING_INTEG_13_7MS: u8 = 0x00;
pub const TIMING_INTEG_101MS: u8 = 0x01;
pub const TIMING_INTEG_402MS: u8 = 0x02;
