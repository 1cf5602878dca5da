// src/tsl2561/mod.rs

pub mod registers;

use crate::common::{error::EnvError, hal_traits::RegisterBus, transfer::read_block};
use core::time::Duration;
use registers::{
    COMMAND_BIT, CONTROL_POWER_DOWN, CONTROL_POWER_UP, DEFAULT_ADDRESS, REG_CONTROL,
    REG_DATA0_LOW, REG_TIMING, TIMING_GAIN_16X, TIMING_INTEG_101MS, TIMING_INTEG_13_7MS,
    TIMING_INTEG_402MS,
};

/// Analog gain applied ahead of both ADC channels.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Gain {
    X1,
    X16,
}

impl Gain {
    const fn bits(self) -> u8 {
        match self {
            Gain::X1 => 0x00,
            Gain::X16 => TIMING_GAIN_16X,
        }
    }
}

/// Integration window for one conversion cycle. Longer windows trade
/// conversion latency for resolution.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum IntegrationTime {
    /// 13.7 ms
    Ms13,
    /// 101 ms
    Ms101,
    /// 402 ms
    Ms402,
}

impl IntegrationTime {
    const fn bits(self) -> u8 {
        match self {
            IntegrationTime::Ms13 => TIMING_INTEG_13_7MS,
            IntegrationTime::Ms101 => TIMING_INTEG_101MS,
            IntegrationTime::Ms402 => TIMING_INTEG_402MS,
        }
    }

    /// Nominal duration of the window. The device exposes no ready bit on this
    /// register set, so callers must wait at least this long between
    /// configuring (or powering up) and reading.
    pub const fn duration(self) -> Duration {
        match self {
            IntegrationTime::Ms13 => Duration::from_micros(13_700),
            IntegrationTime::Ms101 => Duration::from_millis(101),
            IntegrationTime::Ms402 => Duration::from_millis(402),
        }
    }
}

/// One dual-channel light sample.
///
/// Channel 0 sees the full spectrum, channel 1 only infrared; their difference
/// approximates the visible band. `visible` is signed and NOT clamped at zero:
/// under saturation or noise channel 1 can exceed channel 0, and the raw
/// difference is reported as-is for the caller to interpret.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LightReading {
    pub full_spectrum: u16,
    pub infrared: u16,
    pub visible: i32,
}

/// Driver for the TSL2561 dual-channel ambient light sensor.
///
/// Both photodiode channels sample during one integration cycle, which runs
/// continuously while the device is powered up. Unlike the SI7005 there is no
/// completion poll in this flow: after `power_up`/`configure_timing` the
/// caller delays for the integration window ([`IntegrationTime::duration`])
/// and then reads both channels in one transaction.
#[derive(Debug)]
pub struct Tsl2561<B> {
    bus: B,
    address: u8,
}

impl<B> Tsl2561<B>
where
    B: RegisterBus,
{
    /// Creates a driver for a device at the factory-default address (0x39).
    pub fn new(bus: B) -> Self {
        Self::with_address(bus, DEFAULT_ADDRESS)
    }

    /// Creates a driver for a device at a non-default address (ADDR SEL
    /// strapped low = 0x29, high = 0x49).
    pub fn with_address(bus: B, address: u8) -> Self {
        Tsl2561 { bus, address }
    }

    /// Consumes the driver and returns the bus handle.
    pub fn release(self) -> B {
        self.bus
    }

    /// Powers the device up. Must precede timing configuration and reads, and
    /// must be reissued after a `power_down`.
    pub fn power_up(&mut self) -> Result<(), EnvError<B::Error>> {
        self.write(REG_CONTROL, CONTROL_POWER_UP)
    }

    /// Powers the device down. Register contents are retained.
    pub fn power_down(&mut self) -> Result<(), EnvError<B::Error>> {
        self.write(REG_CONTROL, CONTROL_POWER_DOWN)
    }

    /// Selects gain and integration window for subsequent conversion cycles.
    /// 1x gain with the 402 ms window is the device default.
    pub fn configure_timing(
        &mut self,
        gain: Gain,
        integration: IntegrationTime,
    ) -> Result<(), EnvError<B::Error>> {
        self.write(REG_TIMING, gain.bits() | integration.bits())
    }

    /// Reads both ADC channels from the most recent conversion cycle.
    ///
    /// The four data registers are read in one transaction as little-endian
    /// 16-bit pairs: channel 0 low/high, then channel 1 low/high.
    pub fn read_light(&mut self) -> Result<LightReading, EnvError<B::Error>> {
        let data: [u8; 4] =
            read_block(&mut self.bus, self.address, REG_DATA0_LOW | COMMAND_BIT)?;

        let channel0 = u16::from_le_bytes([data[0], data[1]]);
        let channel1 = u16::from_le_bytes([data[2], data[3]]);

        Ok(LightReading {
            full_spectrum: channel0,
            infrared: channel1,
            visible: channel0 as i32 - channel1 as i32,
        })
    }

    // Every transaction carries the command bit in its register address.
    fn write(&mut self, register: u8, value: u8) -> Result<(), EnvError<B::Error>> {
        self.bus
            .write_register(self.address, register | COMMAND_BIT, value)?;
        Ok(())
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testutil::{MockBus, MockBusError};

    #[test]
    fn power_sequencing_writes_control_register() {
        let mut sensor = Tsl2561::new(MockBus::new());
        sensor.power_up().unwrap();
        sensor.power_down().unwrap();
        assert_eq!(
            sensor.release().writes[..],
            [(0x39, 0x80, 0x03), (0x39, 0x80, 0x00)]
        );
    }

    #[test]
    fn timing_configuration_combines_gain_and_integration() {
        let mut sensor = Tsl2561::new(MockBus::new());
        sensor
            .configure_timing(Gain::X1, IntegrationTime::Ms402)
            .unwrap();
        sensor
            .configure_timing(Gain::X16, IntegrationTime::Ms13)
            .unwrap();
        assert_eq!(
            sensor.release().writes[..],
            [(0x39, 0x81, 0x02), (0x39, 0x81, 0x10)]
        );
    }

    #[test]
    fn light_read_assembles_little_endian_channels() {
        let mut bus = MockBus::new();
        bus.queue_read(&[0x10, 0x00, 0x05, 0x00]);

        let reading = Tsl2561::new(bus).read_light().unwrap();
        assert_eq!(reading.full_spectrum, 16);
        assert_eq!(reading.infrared, 5);
        assert_eq!(reading.visible, 11);
    }

    #[test]
    fn visible_channel_may_go_negative() {
        let mut bus = MockBus::new();
        // channel 1 above channel 0, as seen under IR-heavy saturation
        bus.queue_read(&[0x05, 0x00, 0x10, 0x00]);

        let reading = Tsl2561::new(bus).read_light().unwrap();
        assert_eq!(reading.visible, -11);
    }

    #[test]
    fn full_scale_channels_do_not_overflow() {
        let mut bus = MockBus::new();
        bus.queue_read(&[0xFF, 0xFF, 0xFF, 0xFF]);

        let reading = Tsl2561::new(bus).read_light().unwrap();
        assert_eq!(reading.full_spectrum, 0xFFFF);
        assert_eq!(reading.infrared, 0xFFFF);
        assert_eq!(reading.visible, 0);
    }

    #[test]
    fn bus_error_propagates_from_read() {
        let mut bus = MockBus::new();
        bus.queue_read_error();

        let result = Tsl2561::new(bus).read_light();
        assert!(matches!(result, Err(EnvError::Bus(MockBusError::Nack))));
    }

    #[test]
    fn integration_windows_expose_their_durations() {
        assert_eq!(IntegrationTime::Ms13.duration().as_micros(), 13_700);
        assert_eq!(IntegrationTime::Ms101.duration().as_millis(), 101);
        assert_eq!(IntegrationTime::Ms402.duration().as_millis(), 402);
    }
}
