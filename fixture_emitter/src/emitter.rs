// SPDX-License-Identifier: BSD-3-Clause
// Copyright 2025. Triad National Security, LLC.

use std::io::Write;

use log::*;

use crate::sink::{BinarySink, TextSink};
use crate::value::{ByteOrder, TypedValue};

/// What an emission pass wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Number of values, which is also the number of lines in the text sink.
    pub entries: usize,
    /// Length of the binary sink.
    pub bytes: usize,
}

/// Writes typed values to a pair of sinks: the raw bytes of each value to `binary`, and a line
/// describing it to `text`.
pub struct FixtureEmitter<B: Write, T: Write> {
    binary: BinarySink<B>,
    text: TextSink<T>,
    order: ByteOrder,
}

impl<B: Write, T: Write> FixtureEmitter<B, T> {
    pub fn new(binary: B, text: T) -> Self {
        Self {
            binary: BinarySink::new(binary),
            text: TextSink::new(text),
            order: ByteOrder::Native,
        }
    }

    pub fn with_byte_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }

    /// Appends `value` to both sinks. The line reads `<value> (<type>, <width>)`, where the width
    /// is the number of bytes appended to the binary sink.
    pub fn emit(&mut self, value: &TypedValue) -> crate::Result<()> {
        let label = value.tag().label();
        let bytes = value.encode(self.order);
        debug!("{value} ({label}): {bytes:02x?}");

        self.text
            .append_line(&format!("{value} ({label}, {})", bytes.len()))?;
        self.binary.append(&bytes)?;
        Ok(())
    }

    pub fn emit_all(&mut self, values: &[TypedValue]) -> crate::Result<Summary> {
        for value in values.iter() {
            self.emit(value)?;
        }
        Ok(self.summary())
    }

    pub fn summary(&self) -> Summary {
        debug_assert_eq!(self.binary.entries(), self.text.lines());
        Summary {
            entries: self.binary.entries(),
            bytes: self.binary.bytes_written(),
        }
    }

    /// Flushes both sinks and hands back the underlying writers.
    pub fn finish(mut self) -> crate::Result<(B, T, Summary)> {
        self.binary.flush()?;
        self.text.flush()?;
        let summary = self.summary();
        Ok((self.binary.into_inner(), self.text.into_inner(), summary))
    }
}
