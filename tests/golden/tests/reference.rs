// SPDX-License-Identifier: BSD-3-Clause
// Copyright 2025. Triad National Security, LLC.

// Checks the fixture pair that build.rs generated, reading it back the way a binary reader under
// test would.

use std::ffi::{c_long, c_ulong};
use std::mem::size_of;

use fixture_emitter::*;

const BINARY: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/result.bin"));
const TEXT: &str = include_str!(concat!(env!("OUT_DIR"), "/result.txt"));

/// Minimal native-endian cursor over the binary fixture.
struct Reader<'a> {
    input: &'a [u8],
}

impl<'a> Reader<'a> {
    fn take<const N: usize>(&mut self) -> [u8; N] {
        let (bytes, rest) = self.input.split_at(N);
        self.input = rest;
        bytes.try_into().unwrap()
    }

    fn bool(&mut self) -> bool {
        self.take::<1>()[0] != 0
    }

    fn u8(&mut self) -> u8 {
        self.take::<1>()[0]
    }

    fn i16(&mut self) -> i16 {
        i16::from_ne_bytes(self.take())
    }

    fn u16(&mut self) -> u16 {
        u16::from_ne_bytes(self.take())
    }

    fn i32(&mut self) -> i32 {
        i32::from_ne_bytes(self.take())
    }

    fn u32(&mut self) -> u32 {
        u32::from_ne_bytes(self.take())
    }

    fn long(&mut self) -> c_long {
        c_long::from_ne_bytes(self.take())
    }

    fn ulong(&mut self) -> c_ulong {
        c_ulong::from_ne_bytes(self.take())
    }

    fn f32(&mut self) -> f32 {
        f32::from_ne_bytes(self.take())
    }

    fn f64(&mut self) -> f64 {
        f64::from_ne_bytes(self.take())
    }
}

#[test]
fn sizes() {
    assert_eq!(TEXT.lines().count(), REFERENCE_SEQUENCE.len());
    assert_eq!(BINARY.len(), 118 + 12 * size_of::<c_long>());
}

#[test]
fn read_back() {
    let mut r = Reader { input: BINARY };

    assert!(r.bool());
    assert!(!r.bool());

    assert_eq!(r.u8(), b'a');
    assert_eq!(r.u8(), b'A');
    assert_eq!(r.u8(), b'a');
    assert_eq!(r.u8(), b'A');

    assert_eq!(r.i16(), 42);
    assert_eq!(r.i16(), -42);
    assert_eq!(r.i16(), 32000);
    assert_eq!(r.i16(), -32000);
    assert_eq!(r.u16(), 42);
    assert_eq!(r.u16(), 65494);
    assert_eq!(r.u16(), 32000);
    assert_eq!(r.u16(), 33536);

    assert_eq!(r.i32(), 42);
    assert_eq!(r.i32(), -42);
    assert_eq!(r.i32(), 32000);
    assert_eq!(r.i32(), -32000);
    assert_eq!(r.i32(), 2000000000);
    assert_eq!(r.i32(), -2000000000);
    assert_eq!(r.u32(), 42);
    assert_eq!(r.u32(), 4294967254);
    assert_eq!(r.u32(), 32000);
    assert_eq!(r.u32(), 4294935296);
    assert_eq!(r.u32(), 2000000000);
    assert_eq!(r.u32(), 2294967296);

    assert_eq!(r.long(), 42);
    assert_eq!(r.long(), -42);
    assert_eq!(r.long(), 32000);
    assert_eq!(r.long(), -32000);
    assert_eq!(r.long(), 2000000000);
    assert_eq!(r.long(), -2000000000);
    assert_eq!(r.ulong(), 42);
    assert_eq!(r.ulong(), c_ulong::MAX - 41);
    assert_eq!(r.ulong(), 32000);
    assert_eq!(r.ulong(), c_ulong::MAX - 31999);
    assert_eq!(r.ulong(), 2000000000);
    assert_eq!(r.ulong(), c_ulong::MAX - 1999999999);

    assert_eq!(r.f32(), 42.0);
    assert_eq!(r.f32(), -42.0);
    assert_eq!(r.f32(), 12345.6789);
    assert_eq!(r.f32(), -12345.6789);

    assert_eq!(r.f64(), 42.0);
    assert_eq!(r.f64(), -42.0);
    assert_eq!(r.f64(), 12345.6789);
    assert_eq!(r.f64(), -12345.6789);

    assert!(r.input.is_empty());
}

#[test]
fn log_lines() {
    let long = size_of::<c_long>();
    let lines: Vec<&str> = TEXT.lines().collect();

    assert_eq!(lines[0], "true (bool, 1)");
    assert_eq!(lines[1], "false (bool, 1)");
    assert_eq!(lines[2], "a (char, 1)");
    assert_eq!(lines[4], "a (unsigned char, 1)");
    assert_eq!(lines[11], "65494 (unsigned short, 2)");
    assert_eq!(lines[14], "42 (int, 4)");
    assert_eq!(lines[15], "-42 (int, 4)");
    assert_eq!(lines[27], format!("-42 (long, {long})"));
    assert_eq!(lines[38], "42 (float, 4)");
    assert_eq!(lines[40], "12345.679 (float, 4)");
    assert_eq!(lines[45], "-12345.6789 (double, 8)");
}

#[test]
fn matches_in_memory_emission() {
    let mut emitter = FixtureEmitter::new(Vec::new(), Vec::new());
    emitter.emit_all(REFERENCE_SEQUENCE).unwrap();
    let (binary, text, _) = emitter.finish().unwrap();

    assert_eq!(binary, BINARY);
    assert_eq!(text, TEXT.as_bytes());
}

#[test]
fn consistent() {
    let report = verify::verify(BINARY, TEXT, ByteOrder::Native).unwrap();
    assert_eq!(report.entries, REFERENCE_SEQUENCE.len());
    assert_eq!(report.bytes, BINARY.len());
}
