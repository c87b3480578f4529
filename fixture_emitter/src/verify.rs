// SPDX-License-Identifier: BSD-3-Clause
// Copyright 2025. Triad National Security, LLC.

// Reads a fixture pair back and checks that the log and the binary agree with each other.

use std::fmt;
use std::path::Path;

use crate::value::{ByteOrder, TypeTag, TypedValue};

/// Ways in which a fixture pair can disagree with itself. Line numbers start at 1.
#[derive(Debug, PartialEq, Eq)]
pub enum VerifyError {
    /// The line isn't of the form `<value> (<type>, <width>)`.
    MalformedLine { line: usize },

    UnknownType { line: usize, label: String },

    /// The width on the line differs from the type's width on this platform.
    WidthMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The binary file ended before the value on this line.
    Truncated { line: usize },

    /// The bytes decode to something other than what the line says.
    ValueMismatch {
        line: usize,
        expected: String,
        found: String,
    },

    /// The binary file has bytes left over after the last line.
    TrailingBytes { count: usize },
}

impl std::error::Error for VerifyError {}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MalformedLine { line } => write!(f, "line {line}: malformed entry"),
            Self::UnknownType { line, label } => write!(f, "line {line}: unknown type {label:?}"),
            Self::WidthMismatch {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {line}: width {found} doesn't match the platform width {expected}"
            ),
            Self::Truncated { line } => write!(f, "line {line}: binary file ends early"),
            Self::ValueMismatch {
                line,
                expected,
                found,
            } => write!(f, "line {line}: expected {expected}, binary holds {found}"),
            Self::TrailingBytes { count } => {
                write!(f, "{count} bytes left over after the last entry")
            }
        }
    }
}

/// Totals for a fixture pair that verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub entries: usize,
    pub bytes: usize,
}

/// One parsed line of the text log.
#[derive(Debug, PartialEq)]
struct Entry<'a> {
    rendering: &'a str,
    label: &'a str,
    width: usize,
}

fn parse_line(line: &str) -> Option<Entry<'_>> {
    let body = line.strip_suffix(')')?;
    let (rendering, rest) = body.rsplit_once(" (")?;
    let (label, width) = rest.rsplit_once(", ")?;
    Some(Entry {
        rendering,
        label,
        width: width.parse().ok()?,
    })
}

/// Walks `text` line by line, decoding the matching bytes of `binary` for each line and checking
/// they render to the same value.
pub fn verify(binary: &[u8], text: &str, order: ByteOrder) -> Result<Report, VerifyError> {
    let mut rest = binary;
    let mut entries = 0;

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let entry = parse_line(line).ok_or(VerifyError::MalformedLine { line: line_no })?;

        let tag = TypeTag::from_label(entry.label).ok_or_else(|| VerifyError::UnknownType {
            line: line_no,
            label: entry.label.to_string(),
        })?;

        if entry.width != tag.width() {
            return Err(VerifyError::WidthMismatch {
                line: line_no,
                expected: tag.width(),
                found: entry.width,
            });
        }

        if rest.len() < entry.width {
            return Err(VerifyError::Truncated { line: line_no });
        }
        let (bytes, tail) = rest.split_at(entry.width);
        rest = tail;

        let found = match TypedValue::decode(tag, bytes, order) {
            Some(value) => value.to_string(),
            None => format!("{bytes:02x?}"),
        };
        if found != entry.rendering {
            return Err(VerifyError::ValueMismatch {
                line: line_no,
                expected: entry.rendering.to_string(),
                found,
            });
        }

        entries += 1;
    }

    if !rest.is_empty() {
        return Err(VerifyError::TrailingBytes { count: rest.len() });
    }

    Ok(Report {
        entries,
        bytes: binary.len(),
    })
}

/// Reads both files of a fixture pair and verifies them.
pub fn verify_files(binary: &Path, text: &Path, order: ByteOrder) -> crate::Result<Report> {
    let binary = std::fs::read(binary)?;
    let text = std::fs::read_to_string(text)?;
    Ok(verify(&binary, &text, order)?)
}
