//! `std::io` adapters, available with the `std` feature.
//!
//! Writes never short-count: every byte is stored and older bytes are
//! overwritten as needed. Reads return `Ok(0)` when the buffer is empty,
//! which `std::io` consumers treat as end of stream.
//!
//! The module, and its tests, only exist with the feature on: run
//! `cargo test -p ringbuffer --features std` (what `cargo xtask test` does).

use std::io;

use crate::ring::RingBuffer;

impl io::Write for RingBuffer<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let _ = self.put_many(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Read for RingBuffer<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.get_many(buf))
    }
}
