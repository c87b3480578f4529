// SPDX-License-Identifier: BSD-3-Clause
// Copyright 2025. Triad National Security, LLC.

use std::ffi::{c_char, c_int, c_long, c_short, c_uint, c_ulong, c_ushort};

use crate::value::TypedValue;

/// The values making up the reference fixture, in the order a reader under test consumes them.
///
/// Negative literals stored in unsigned types wrap the way a C cast does, e.g. `-42` as an
/// `unsigned short` is 65494.
pub const REFERENCE_SEQUENCE: &[TypedValue] = &[
    TypedValue::Bool(true),
    TypedValue::Bool(false),
    TypedValue::Char(b'a' as c_char),
    TypedValue::Char(b'A' as c_char),
    TypedValue::UnsignedChar(b'a'),
    TypedValue::UnsignedChar(b'A'),
    TypedValue::Short(42),
    TypedValue::Short(-42),
    TypedValue::Short(32000),
    TypedValue::Short(-32000),
    TypedValue::UnsignedShort(42),
    TypedValue::UnsignedShort(-42 as c_short as c_ushort),
    TypedValue::UnsignedShort(32000),
    TypedValue::UnsignedShort(-32000 as c_short as c_ushort),
    TypedValue::Int(42),
    TypedValue::Int(-42),
    TypedValue::Int(32000),
    TypedValue::Int(-32000),
    TypedValue::Int(2000000000),
    TypedValue::Int(-2000000000),
    TypedValue::UnsignedInt(42),
    TypedValue::UnsignedInt(-42 as c_int as c_uint),
    TypedValue::UnsignedInt(32000),
    TypedValue::UnsignedInt(-32000 as c_int as c_uint),
    TypedValue::UnsignedInt(2000000000),
    TypedValue::UnsignedInt(-2000000000 as c_int as c_uint),
    TypedValue::Long(42),
    TypedValue::Long(-42),
    TypedValue::Long(32000),
    TypedValue::Long(-32000),
    TypedValue::Long(2000000000),
    TypedValue::Long(-2000000000),
    TypedValue::UnsignedLong(42),
    TypedValue::UnsignedLong(-42 as c_long as c_ulong),
    TypedValue::UnsignedLong(32000),
    TypedValue::UnsignedLong(-32000 as c_long as c_ulong),
    TypedValue::UnsignedLong(2000000000),
    TypedValue::UnsignedLong(-2000000000 as c_long as c_ulong),
    TypedValue::Float(42.0),
    TypedValue::Float(-42.0),
    // Rounded through double first, as the literal would be in C:
    TypedValue::Float(12345.6789_f64 as f32),
    TypedValue::Float(-12345.6789_f64 as f32),
    TypedValue::Double(42.0),
    TypedValue::Double(-42.0),
    TypedValue::Double(12345.6789),
    TypedValue::Double(-12345.6789),
];
