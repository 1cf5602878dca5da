// src/si7005/convert.rs
//
// Raw-code scaling and the manufacturer compensation curves. The coefficients
// and their order of operations come from the SI7005 datasheet (sections 4.1
// and 4.2) and must be reproduced exactly to match reference readings.

/// Lower bound of the valid 14-bit temperature code window.
pub const TEMP_CODE_MIN: f32 = 0x0140 as f32;
/// Upper bound of the valid 14-bit temperature code window.
pub const TEMP_CODE_MAX: f32 = 0x12C0 as f32;

/// Lower bound of the valid 12-bit humidity code window (scales to 0 %RH).
pub const HUMIDITY_CODE_MIN: f32 = 0x180 as f32;
/// Upper bound of the valid 12-bit humidity code window (scales to 100 %RH).
pub const HUMIDITY_CODE_MAX: f32 = 0x7C0 as f32;

/// Assembles the 14-bit temperature code from the two data register bytes.
/// The 16-bit read is scaled down by four because its two low bits are shared
/// with status.
pub fn temperature_code(high: u8, low: u8) -> f32 {
    (high as f32 * 256.0 + low as f32) / 4.0
}

/// Scales a temperature code to degrees Celsius, clamping codes outside the
/// documented window to its boundaries first. Out-of-window codes indicate
/// noise or edge conditions and clamp rather than fail, per the datasheet.
pub fn temperature_celsius(code: f32) -> f32 {
    let code = code.clamp(TEMP_CODE_MIN, TEMP_CODE_MAX);
    code / 32.0 - 50.0
}

pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 1.8 + 32.0
}

/// Assembles the 12-bit humidity code from the two data register bytes. Only
/// the high nibble of the low byte carries data.
pub fn humidity_code(high: u8, low: u8) -> f32 {
    (high as f32 * 256.0 + (low & 0xF0) as f32) / 16.0
}

/// Scales a humidity code to %RH, clamping into the documented window first.
/// The window endpoints scale to exactly 0 and 100 %RH.
pub fn humidity_percent(code: f32) -> f32 {
    let code = code.clamp(HUMIDITY_CODE_MIN, HUMIDITY_CODE_MAX);
    code / 16.0 - 24.0
}

/// Second-order correction for the sensing element's non-linear response
/// (datasheet a0/a1/a2 coefficients).
pub fn linearize(humidity: f32) -> f32 {
    humidity - ((humidity * humidity) * (-0.00393) + humidity * 0.4008 - 4.7844)
}

/// Adjusts a linearized humidity reading for ambient temperature, which the
/// sensing element is itself sensitive to. `reference_celsius` comes from a
/// preceding temperature conversion; at exactly 30 °C the adjustment is zero.
pub fn compensate(linearized: f32, reference_celsius: f32) -> f32 {
    linearized + (reference_celsius - 30.0) * (linearized * 0.00237 + 0.1973)
}
