// src/common/transfer.rs

use super::error::EnvError;
use super::hal_traits::RegisterBus;

/// Reads a fixed-size block of `N` consecutive registers starting at `start`.
///
/// Thin wrapper over [`RegisterBus::read_registers`] returning the bytes by
/// value, since every acquisition path in this crate reads a small fixed-size
/// frame (3 bytes for the SI7005, 4 for the TSL2561).
pub fn read_block<B, const N: usize>(
    bus: &mut B,
    device: u8,
    start: u8,
) -> Result<[u8; N], EnvError<B::Error>>
where
    B: RegisterBus,
{
    let mut buf = [0u8; N];
    bus.read_registers(device, start, &mut buf)?;
    Ok(buf)
}

/// Repeatedly reads an `N`-byte register block until `ready` accepts the frame,
/// up to `max_attempts` reads.
///
/// This is the shared poll-and-read sequence behind both SI7005 acquisition
/// modes: the device exposes a conversion-in-progress bit in the same block as
/// the data bytes, so the poll and the data read are one transaction. The
/// device's own ready signal is ground truth for completion; the attempt bound
/// exists only so a wedged device surfaces as [`EnvError::StuckDevice`] instead
/// of hanging the caller forever.
///
/// Exactly one bus read is issued per attempt, so a device that reports busy
/// `n` times costs `n + 1` reads in total.
pub fn poll_block<B, F, const N: usize>(
    bus: &mut B,
    device: u8,
    start: u8,
    max_attempts: u32,
    ready: F,
) -> Result<[u8; N], EnvError<B::Error>>
where
    B: RegisterBus,
    F: Fn(&[u8; N]) -> bool,
{
    for _ in 0..max_attempts {
        let frame = read_block(bus, device, start)?;
        if ready(&frame) {
            return Ok(frame);
        }
    }
    Err(EnvError::StuckDevice {
        attempts: max_attempts,
    })
}
