// src/common/error.rs

// No cfg_attr needed here, thiserror is always available
#[derive(Debug, thiserror::Error)]
pub enum EnvError<E = ()>
where
    E: core::fmt::Debug, // Still need Debug for the generic Bus error
{
    /// Underlying bus transaction error (NACK, bus timeout, arbitration loss)
    /// from the transport implementation.
    #[error("bus transaction error: {0:?}")] // Format string requires Debug on E
    Bus(E),

    /// The device's ready bit never cleared within the configured poll limit.
    ///
    /// The original acquisition flow spins on the status register forever;
    /// this variant replaces that unbounded busy-wait with a bounded retry.
    #[error("device still busy after {attempts} status polls")]
    StuckDevice { attempts: u32 },
}

// No manual Display impl needed - thiserror handles it.

// Allow mapping from underlying transport error so `?` works on bus results
impl<E: core::fmt::Debug> From<E> for EnvError<E> {
    fn from(e: E) -> Self {
        EnvError::Bus(e)
    }
}

// Note: For the Bus(E) variant's #[error("...")] message to work correctly even
// in no_std, the underlying error type `E` must implement `core::fmt::Debug`.
// If the `std` feature is enabled, `E` would ideally also implement
// `std::error::Error` for better chaining, but `Debug` is the minimum
// requirement for the format string used here.
