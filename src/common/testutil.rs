// src/common/testutil.rs
//
// Scripted bus double shared by the driver unit tests. Writes are logged for
// later assertion; reads are served from a queue of pre-scripted frames. Once
// the queue is exhausted the last frame repeats, which is how tests model a
// device stuck reporting busy.

use super::hal_traits::RegisterBus;
use heapless::Vec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBusError {
    /// Addressed device did not acknowledge.
    Nack,
}

#[derive(Debug, Clone)]
enum Frame {
    Bytes(Vec<u8, 8>),
    Fail(MockBusError),
}

#[derive(Debug)]
pub struct MockBus {
    /// Every write_register call as (device, register, value), in order.
    pub writes: Vec<(u8, u8, u8), 16>,
    /// Total read_registers calls issued, including failed ones.
    pub reads_issued: usize,
    frames: Vec<Frame, 32>,
    cursor: usize,
}

impl MockBus {
    pub fn new() -> Self {
        MockBus {
            writes: Vec::new(),
            reads_issued: 0,
            frames: Vec::new(),
            cursor: 0,
        }
    }

    /// Queues the bytes the next read transaction should return.
    pub fn queue_read(&mut self, bytes: &[u8]) {
        let mut frame = Vec::new();
        frame.extend_from_slice(bytes).unwrap();
        self.frames.push(Frame::Bytes(frame)).unwrap();
    }

    /// Queues a NACK for the next read transaction.
    pub fn queue_read_error(&mut self) {
        self.frames.push(Frame::Fail(MockBusError::Nack)).unwrap();
    }
}

impl RegisterBus for MockBus {
    type Error = MockBusError;

    fn write_register(&mut self, device: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        self.writes.push((device, register, value)).unwrap();
        Ok(())
    }

    fn read_registers(&mut self, _device: u8, _start: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.reads_issued += 1;
        assert!(!self.frames.is_empty(), "mock bus read with no scripted frames");

        let frame = &self.frames[self.cursor];
        // Advance until the last frame, then keep replaying it.
        if self.cursor + 1 < self.frames.len() {
            self.cursor += 1;
        }

        match frame {
            Frame::Bytes(bytes) => {
                assert_eq!(
                    bytes.len(),
                    buf.len(),
                    "scripted frame length does not match requested read"
                );
                buf.copy_from_slice(bytes);
                Ok(())
            }
            Frame::Fail(e) => Err(*e),
        }
    }
}
