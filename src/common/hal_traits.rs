// src/common/hal_traits.rs

use core::fmt::Debug;

/// Abstraction for register-oriented I2C transactions, as used by both sensor
/// drivers in this crate.
///
/// Implementations address a peripheral by its 7-bit bus address and a register
/// offset within it. I2C is a shared, non-reentrant bus: every call is one
/// exclusive transaction, and implementations must serialize transactions if
/// drivers run from more than one context. The usual single-threaded setup is
/// to keep one bus value and lend it to each driver as `&mut` (see the blanket
/// impl below).
pub trait RegisterBus {
    /// Associated error type for transport errors (NACK, bus timeout,
    /// arbitration loss).
    type Error: Debug;

    /// Writes a single byte to `register` on the device at `device`.
    fn write_register(&mut self, device: u8, register: u8, value: u8) -> Result<(), Self::Error>;

    /// Reads `buf.len()` consecutive register bytes starting at `start` from
    /// the device at `device`.
    fn read_registers(&mut self, device: u8, start: u8, buf: &mut [u8]) -> Result<(), Self::Error>;
}

// A `&mut` borrow of a bus is itself a bus, so one physical bus can be lent to
// several drivers in turn without giving up ownership.
impl<T: RegisterBus + ?Sized> RegisterBus for &mut T {
    type Error = T::Error;

    fn write_register(&mut self, device: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        T::write_register(self, device, register, value)
    }

    fn read_registers(&mut self, device: u8, start: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        T::read_registers(self, device, start, buf)
    }
}

/// Adapter implementing [`RegisterBus`] on top of any `embedded-hal` 1.0 I2C
/// peripheral (requires the `impl-hal` feature).
///
/// Register reads use a write-read (repeated start) transaction, which is what
/// both supported devices expect for register-pointer addressing.
#[cfg(feature = "impl-hal")]
#[derive(Debug)]
pub struct HalRegisterBus<I> {
    i2c: I,
}

#[cfg(feature = "impl-hal")]
impl<I: embedded_hal::i2c::I2c> HalRegisterBus<I> {
    pub fn new(i2c: I) -> Self {
        HalRegisterBus { i2c }
    }

    /// Consumes the adapter and returns the wrapped peripheral.
    pub fn release(self) -> I {
        self.i2c
    }
}

#[cfg(feature = "impl-hal")]
impl<I: embedded_hal::i2c::I2c> RegisterBus for HalRegisterBus<I> {
    type Error = I::Error;

    fn write_register(&mut self, device: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(device, &[register, value])
    }

    fn read_registers(&mut self, device: u8, start: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(device, &[start], buf)
    }
}
