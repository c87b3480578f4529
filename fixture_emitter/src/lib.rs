// SPDX-License-Identifier: BSD-3-Clause
// Copyright 2025. Triad National Security, LLC.

pub mod emitter;
pub mod sequence;
pub mod sink;
pub mod value;
pub mod verify;

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use log::*;

pub use emitter::{FixtureEmitter, Summary};
pub use sequence::REFERENCE_SEQUENCE;
pub use value::{ByteOrder, TypeTag, TypedValue};
pub use verify::{Report, VerifyError};

pub type Result<T> = std::result::Result<T, Error>;

/// Default name of the file receiving the raw bytes.
pub const DEFAULT_BINARY_FILE: &str = "result.bin";

/// Default name of the file receiving one descriptive line per value.
pub const DEFAULT_TEXT_FILE: &str = "result.txt";

/// The possible errors that can arise from writing or checking a fixture.
#[derive(Debug)]
pub enum Error {
    /// A sink (or the directory meant to hold it) couldn't be created.
    SinkOpen { path: PathBuf, source: io::Error },
    Io(io::Error),
    Verify(VerifyError),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SinkOpen { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            Self::Verify(e) => Some(e),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::SinkOpen { path, source } => {
                write!(f, "Cannot open {} for writing: {source}", path.display())
            }
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Verify(e) => write!(f, "Fixture mismatch: {e}"),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<VerifyError> for Error {
    fn from(e: VerifyError) -> Self {
        Self::Verify(e)
    }
}

/// Writes a fixture pair to disk.
///
/// By default this writes the reference sequence to `result.bin` and `result.txt` in the current
/// directory, in native byte order:
///
/// ```no_run
/// fixture_emitter::Emitter::new().run().unwrap();
/// ```
pub struct Emitter {
    out_dir: Option<PathBuf>,
    binary_path: PathBuf,
    text_path: PathBuf,
    order: ByteOrder,
    values: Vec<TypedValue>,
}

impl Default for Emitter {
    fn default() -> Self {
        Self {
            out_dir: None,
            binary_path: PathBuf::from(DEFAULT_BINARY_FILE),
            text_path: PathBuf::from(DEFAULT_TEXT_FILE),
            order: ByteOrder::Native,
            values: REFERENCE_SEQUENCE.to_vec(),
        }
    }
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory the fixture files are placed in. Created on `run` if it doesn't exist.
    pub fn out_dir<P>(&mut self, dir: P) -> &mut Self
    where
        P: AsRef<Path>,
    {
        self.out_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn binary_path<P>(&mut self, path: P) -> &mut Self
    where
        P: AsRef<Path>,
    {
        self.binary_path = path.as_ref().to_path_buf();
        self
    }

    pub fn text_path<P>(&mut self, path: P) -> &mut Self
    where
        P: AsRef<Path>,
    {
        self.text_path = path.as_ref().to_path_buf();
        self
    }

    pub fn byte_order(&mut self, order: ByteOrder) -> &mut Self {
        self.order = order;
        self
    }

    /// Replaces the reference sequence with `values`.
    pub fn values(&mut self, values: &[TypedValue]) -> &mut Self {
        self.values = values.to_vec();
        self
    }

    /// Where the binary file ends up, after applying `out_dir`.
    pub fn binary_file(&self) -> PathBuf {
        self.resolve(&self.binary_path)
    }

    /// Where the text file ends up, after applying `out_dir`.
    pub fn text_file(&self) -> PathBuf {
        self.resolve(&self.text_path)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.out_dir {
            Some(dir) => dir.join(path),
            None => path.to_path_buf(),
        }
    }

    /// Opens both sinks, writes every value, and closes them again.
    pub fn run(&self) -> Result<Summary> {
        if let Some(dir) = &self.out_dir {
            std::fs::create_dir_all(dir).map_err(|source| Error::SinkOpen {
                path: dir.clone(),
                source,
            })?;
        }

        let text_file = self.text_file();
        let binary_file = self.binary_file();
        let text = sink::create_file(&text_file)?;
        let binary = sink::create_file(&binary_file)?;
        info!(
            "Writing {} values to {} and {}",
            self.values.len(),
            binary_file.display(),
            text_file.display()
        );

        let mut emitter = FixtureEmitter::new(binary, text).with_byte_order(self.order);
        emitter.emit_all(&self.values)?;
        let (_, _, summary) = emitter.finish()?;

        info!(
            "Wrote {} values, {} bytes ({:?} byte order)",
            summary.entries, summary.bytes, self.order
        );
        Ok(summary)
    }

    /// Checks the fixture pair this emitter writes, as it currently is on disk.
    pub fn verify(&self) -> Result<Report> {
        let binary_file = self.binary_file();
        let text_file = self.text_file();
        verify::verify_files(&binary_file, &text_file, self.order).inspect_err(|e| {
            warn!(
                "Verifying {} against {} failed: {e}",
                binary_file.display(),
                text_file.display()
            )
        })
    }
}
