// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Error, ErrorKind, Write};

/// Accepts up to `capacity` bytes in total, then fails every write with
/// [`ErrorKind::BrokenPipe`]. What it accepted stays in `accepted`.
#[derive(Debug, Default)]
pub struct CappedSink {
    pub capacity: usize,
    pub accepted: Vec<u8>,
}

impl CappedSink {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            accepted: Vec::new(),
        }
    }
}

impl Write for CappedSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let room = self.capacity - self.accepted.len();
        if room == 0 && !buf.is_empty() {
            return Err(Error::new(ErrorKind::BrokenPipe, "sink is full"));
        }
        let count = room.min(buf.len());
        self.accepted.extend_from_slice(&buf[..count]);
        Ok(count)
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}
