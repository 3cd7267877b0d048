//! Bus doubles for host tests.

use std::collections::VecDeque;
use std::pin::pin;
use std::task::{Context, Poll, Waker};

use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};

/// I2C bus that records writes and answers reads from a queue.
///
/// Implements both the blocking and the async trait. Reads with nothing
/// queued return zeros.
#[derive(Default)]
pub struct MockI2c {
    pub writes: Vec<(u8, Vec<u8>)>,
    reads: VecDeque<Vec<u8>>,
    /// Fail every transaction to this address.
    pub fail_address: Option<u8>,
}

impl MockI2c {
    pub fn new() -> Self { Self::default() }

    pub fn failing(address: u8) -> Self {
        Self {
            fail_address: Some(address),
            ..Self::default()
        }
    }

    pub fn queue_read(
        &mut self,
        bytes: &[u8],
    ) {
        self.reads.push_back(bytes.to_vec());
    }

    fn apply(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), ErrorKind> {
        if self.fail_address == Some(address) {
            return Err(ErrorKind::Other);
        }
        for operation in operations {
            match operation {
                Operation::Write(bytes) => self.writes.push((address, bytes.to_vec())),
                Operation::Read(buffer) => {
                    let data = self.reads.pop_front().unwrap_or_default();
                    for (slot, byte) in buffer.iter_mut().zip(data.iter().chain(std::iter::repeat(&0))) {
                        *slot = *byte;
                    }
                }
            }
        }
        Ok(())
    }
}

impl ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl embedded_hal::i2c::I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.apply(address, operations)
    }
}

impl embedded_hal_async::i2c::I2c for MockI2c {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.apply(address, operations)
    }
}

/// Delay that returns immediately and remembers how long it was asked for.
#[derive(Default)]
pub struct NoDelay {
    pub total_ns: u64,
}

impl embedded_hal_async::delay::DelayNs for NoDelay {
    async fn delay_ns(
        &mut self,
        ns: u32,
    ) {
        self.total_ns += u64::from(ns);
    }
}

/// Drive a future that never actually waits.
pub fn block_on<F: Future>(future: F) -> F::Output {
    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
            return output;
        }
    }
}
