// src/si7005/mod.rs

pub mod convert;
pub mod registers;

use crate::common::{
    error::EnvError,
    hal_traits::RegisterBus,
    transfer::{poll_block, read_block},
};
use registers::{
    CONFIG_FAST, CONFIG_HEATER, CONFIG_START, CONFIG_TEMPERATURE, DEFAULT_ADDRESS, REG_CONFIG,
    REG_ID, REG_STATUS, STATUS_NOT_READY,
};

/// Default bound on status polls before a read fails with
/// [`EnvError::StuckDevice`]. A normal-mode conversion finishes in roughly
/// 35 ms while one 3-byte poll costs ~0.3 ms at 100 kHz, so this leaves a wide
/// margin over any healthy device.
pub const DEFAULT_POLL_LIMIT: u32 = 1024;

/// A temperature sample in both output scales.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TemperatureReading {
    pub celsius: f32,
    pub fahrenheit: f32,
}

/// A relative-humidity sample at each stage of compensation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HumidityReading {
    /// Direct register scaling, %RH.
    pub relative: f32,
    /// After the second-order linearity correction.
    pub linearized: f32,
    /// After temperature compensation against the caller's reference reading.
    pub compensated: f32,
}

/// Driver for the SI7005 digital humidity and temperature sensor.
///
/// The device has a single conversion engine shared by both measurements: a
/// configuration write selects the channel and starts a conversion, then the
/// result is read back once the status register reports ready. Starting a
/// conversion and reading it back are separate calls because the conversion
/// itself takes tens of milliseconds; a read issued without a matching start
/// returns whatever the data registers last held.
#[derive(Debug)]
pub struct Si7005<B> {
    bus: B,
    address: u8,
    poll_limit: u32,
    heater: bool,
    fast: bool,
}

impl<B> Si7005<B>
where
    B: RegisterBus,
{
    /// Creates a driver for a device at the factory-default address (0x40).
    pub fn new(bus: B) -> Self {
        Self::with_address(bus, DEFAULT_ADDRESS)
    }

    /// Creates a driver for a device at a non-default address.
    pub fn with_address(bus: B, address: u8) -> Self {
        Si7005 {
            bus,
            address,
            poll_limit: DEFAULT_POLL_LIMIT,
            heater: false,
            fast: false,
        }
    }

    /// Overrides the bound on status polls per read.
    pub fn with_poll_limit(mut self, poll_limit: u32) -> Self {
        self.poll_limit = poll_limit;
        self
    }

    /// Enables or disables the on-chip heater on subsequent conversions. The
    /// heater drives condensation off the sensing element at the cost of a
    /// raised temperature reading.
    pub fn enable_heater(&mut self, on: bool) {
        self.heater = on;
    }

    /// Enables or disables fast mode (2.6 ms conversions at reduced
    /// resolution) on subsequent conversions.
    pub fn enable_fast_mode(&mut self, on: bool) {
        self.fast = on;
    }

    /// Consumes the driver and returns the bus handle.
    pub fn release(self) -> B {
        self.bus
    }

    /// Starts a temperature conversion. Must precede [`read_temperature`].
    ///
    /// [`read_temperature`]: Si7005::read_temperature
    pub fn start_temperature_conversion(&mut self) -> Result<(), EnvError<B::Error>> {
        let config = CONFIG_START | CONFIG_TEMPERATURE | self.flag_bits();
        self.bus.write_register(self.address, REG_CONFIG, config)?;
        Ok(())
    }

    /// Starts a relative-humidity conversion. Must precede [`read_humidity`].
    ///
    /// [`read_humidity`]: Si7005::read_humidity
    pub fn start_humidity_conversion(&mut self) -> Result<(), EnvError<B::Error>> {
        let config = CONFIG_START | self.flag_bits();
        self.bus.write_register(self.address, REG_CONFIG, config)?;
        Ok(())
    }

    /// Reads back a temperature conversion, blocking until the device reports
    /// the conversion complete.
    pub fn read_temperature(&mut self) -> Result<TemperatureReading, EnvError<B::Error>> {
        let [_, high, low] = self.read_when_ready()?;
        let celsius = convert::temperature_celsius(convert::temperature_code(high, low));
        Ok(TemperatureReading {
            celsius,
            fahrenheit: convert::celsius_to_fahrenheit(celsius),
        })
    }

    /// Reads back a humidity conversion, blocking until the device reports the
    /// conversion complete.
    ///
    /// `reference_celsius` is the ambient temperature used for compensation,
    /// normally taken from a [`read_temperature`] call on the same device
    /// moments earlier.
    ///
    /// [`read_temperature`]: Si7005::read_temperature
    pub fn read_humidity(
        &mut self,
        reference_celsius: f32,
    ) -> Result<HumidityReading, EnvError<B::Error>> {
        let [_, high, low] = self.read_when_ready()?;
        let relative = convert::humidity_percent(convert::humidity_code(high, low));
        let linearized = convert::linearize(relative);
        Ok(HumidityReading {
            relative,
            linearized,
            compensated: convert::compensate(linearized, reference_celsius),
        })
    }

    /// Reads the device ID register. Not part of the acquisition path; useful
    /// as a probe that the expected part is present on the bus.
    pub fn device_id(&mut self) -> Result<u8, EnvError<B::Error>> {
        let [id] = read_block(&mut self.bus, self.address, REG_ID)?;
        Ok(id)
    }

    /// Polls the [status, data-high, data-low] block until status bit 0
    /// clears. Status and data share one block read, so the poll that observes
    /// ready also carries the sample.
    fn read_when_ready(&mut self) -> Result<[u8; 3], EnvError<B::Error>> {
        poll_block(
            &mut self.bus,
            self.address,
            REG_STATUS,
            self.poll_limit,
            |frame| frame[0] & STATUS_NOT_READY == 0,
        )
    }

    fn flag_bits(&self) -> u8 {
        let mut bits = 0;
        if self.heater {
            bits |= CONFIG_HEATER;
        }
        if self.fast {
            bits |= CONFIG_FAST;
        }
        bits
    }
}
