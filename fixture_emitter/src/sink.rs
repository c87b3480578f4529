// SPDX-License-Identifier: BSD-3-Clause
// Copyright 2025. Triad National Security, LLC.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::Error;

/// Opens `path` for writing, truncating anything already there.
pub fn create_file(path: &Path) -> crate::Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| Error::SinkOpen {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

/// Append-only byte stream receiving the raw value encodings, with no framing between them.
pub struct BinarySink<W: Write> {
    inner: W,
    entries: usize,
    bytes: usize,
}

impl<W: Write> BinarySink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            entries: 0,
            bytes: 0,
        }
    }

    pub fn append(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.inner.write_all(bytes)?;
        self.entries += 1;
        self.bytes += bytes.len();
        Ok(())
    }

    /// Number of `append` calls so far.
    pub fn entries(&self) -> usize {
        self.entries
    }

    pub fn bytes_written(&self) -> usize {
        self.bytes
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Append-only line stream, one line per value written to the matching `BinarySink`.
pub struct TextSink<W: Write> {
    inner: W,
    lines: usize,
}

impl<W: Write> TextSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, lines: 0 }
    }

    /// Writes `line` followed by a newline.
    pub fn append_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.inner, "{line}")?;
        self.lines += 1;
        Ok(())
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
