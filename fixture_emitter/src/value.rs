// SPDX-License-Identifier: BSD-3-Clause
// Copyright 2025. Triad National Security, LLC.

// The primitive values a fixture can hold, their labels, native widths and byte encodings.

use std::ffi::{c_char, c_int, c_long, c_short, c_uchar, c_uint, c_ulong, c_ushort};
use std::fmt;
use std::mem::size_of;

/// Byte order used when encoding a value into the binary sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Whatever the executing platform uses in memory.
    #[default]
    Native,
    Little,
    Big,
}

/// The primitive types a fixture can contain. Integer types follow the platform's C ABI, so the
/// width of `long` depends on the build target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Bool,
    Char,
    UnsignedChar,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    Float,
    Double,
}

impl TypeTag {
    pub const ALL: [TypeTag; 11] = [
        TypeTag::Bool,
        TypeTag::Char,
        TypeTag::UnsignedChar,
        TypeTag::Short,
        TypeTag::UnsignedShort,
        TypeTag::Int,
        TypeTag::UnsignedInt,
        TypeTag::Long,
        TypeTag::UnsignedLong,
        TypeTag::Float,
        TypeTag::Double,
    ];

    /// The label written to the text sink for values of this type.
    pub fn label(self) -> &'static str {
        match self {
            TypeTag::Bool => "bool",
            TypeTag::Char => "char",
            TypeTag::UnsignedChar => "unsigned char",
            TypeTag::Short => "short",
            TypeTag::UnsignedShort => "unsigned short",
            TypeTag::Int => "int",
            TypeTag::UnsignedInt => "unsigned int",
            TypeTag::Long => "long",
            TypeTag::UnsignedLong => "unsigned long",
            TypeTag::Float => "float",
            TypeTag::Double => "double",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.label() == label)
    }

    /// Size in bytes of the type's in-memory representation on this platform.
    pub fn width(self) -> usize {
        match self {
            TypeTag::Bool => size_of::<bool>(),
            TypeTag::Char => size_of::<c_char>(),
            TypeTag::UnsignedChar => size_of::<c_uchar>(),
            TypeTag::Short => size_of::<c_short>(),
            TypeTag::UnsignedShort => size_of::<c_ushort>(),
            TypeTag::Int => size_of::<c_int>(),
            TypeTag::UnsignedInt => size_of::<c_uint>(),
            TypeTag::Long => size_of::<c_long>(),
            TypeTag::UnsignedLong => size_of::<c_ulong>(),
            TypeTag::Float => size_of::<f32>(),
            TypeTag::Double => size_of::<f64>(),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single value to be written to a fixture, tagged with its type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypedValue {
    Bool(bool),
    Char(c_char),
    UnsignedChar(c_uchar),
    Short(c_short),
    UnsignedShort(c_ushort),
    Int(c_int),
    UnsignedInt(c_uint),
    Long(c_long),
    UnsignedLong(c_ulong),
    Float(f32),
    Double(f64),
}

macro_rules! encode_as {
    ($value:expr, $order:expr) => {
        match $order {
            ByteOrder::Native => $value.to_ne_bytes().to_vec(),
            ByteOrder::Little => $value.to_le_bytes().to_vec(),
            ByteOrder::Big => $value.to_be_bytes().to_vec(),
        }
    };
}

macro_rules! decode_as {
    ($ty:ty, $bytes:expr, $order:expr) => {{
        let raw: [u8; size_of::<$ty>()] = $bytes.try_into().ok()?;
        match $order {
            ByteOrder::Native => <$ty>::from_ne_bytes(raw),
            ByteOrder::Little => <$ty>::from_le_bytes(raw),
            ByteOrder::Big => <$ty>::from_be_bytes(raw),
        }
    }};
}

impl TypedValue {
    pub fn tag(&self) -> TypeTag {
        match self {
            TypedValue::Bool(_) => TypeTag::Bool,
            TypedValue::Char(_) => TypeTag::Char,
            TypedValue::UnsignedChar(_) => TypeTag::UnsignedChar,
            TypedValue::Short(_) => TypeTag::Short,
            TypedValue::UnsignedShort(_) => TypeTag::UnsignedShort,
            TypedValue::Int(_) => TypeTag::Int,
            TypedValue::UnsignedInt(_) => TypeTag::UnsignedInt,
            TypedValue::Long(_) => TypeTag::Long,
            TypedValue::UnsignedLong(_) => TypeTag::UnsignedLong,
            TypedValue::Float(_) => TypeTag::Float,
            TypedValue::Double(_) => TypeTag::Double,
        }
    }

    /// Returns the bytes of the value as laid out in memory. With `ByteOrder::Native` this is
    /// exactly the platform's representation; the other orders only swap bytes, the width is
    /// always the native one.
    pub fn encode(&self, order: ByteOrder) -> Vec<u8> {
        match self {
            TypedValue::Bool(b) => vec![u8::from(*b)],
            TypedValue::Char(c) => encode_as!(c, order),
            TypedValue::UnsignedChar(c) => encode_as!(c, order),
            TypedValue::Short(n) => encode_as!(n, order),
            TypedValue::UnsignedShort(n) => encode_as!(n, order),
            TypedValue::Int(n) => encode_as!(n, order),
            TypedValue::UnsignedInt(n) => encode_as!(n, order),
            TypedValue::Long(n) => encode_as!(n, order),
            TypedValue::UnsignedLong(n) => encode_as!(n, order),
            TypedValue::Float(x) => encode_as!(x, order),
            TypedValue::Double(x) => encode_as!(x, order),
        }
    }

    /// Reads a value of type `tag` back out of `bytes`.
    ///
    /// Returns `None` if `bytes` is not exactly `tag.width()` long, or if it does not hold a valid
    /// value of the type (a `bool` byte other than 0 or 1).
    pub fn decode(tag: TypeTag, bytes: &[u8], order: ByteOrder) -> Option<Self> {
        if bytes.len() != tag.width() {
            return None;
        }

        let value = match tag {
            TypeTag::Bool => match bytes[0] {
                0 => TypedValue::Bool(false),
                1 => TypedValue::Bool(true),
                _ => return None,
            },
            TypeTag::Char => TypedValue::Char(decode_as!(c_char, bytes, order)),
            TypeTag::UnsignedChar => TypedValue::UnsignedChar(decode_as!(c_uchar, bytes, order)),
            TypeTag::Short => TypedValue::Short(decode_as!(c_short, bytes, order)),
            TypeTag::UnsignedShort => TypedValue::UnsignedShort(decode_as!(c_ushort, bytes, order)),
            TypeTag::Int => TypedValue::Int(decode_as!(c_int, bytes, order)),
            TypeTag::UnsignedInt => TypedValue::UnsignedInt(decode_as!(c_uint, bytes, order)),
            TypeTag::Long => TypedValue::Long(decode_as!(c_long, bytes, order)),
            TypeTag::UnsignedLong => TypedValue::UnsignedLong(decode_as!(c_ulong, bytes, order)),
            TypeTag::Float => TypedValue::Float(decode_as!(f32, bytes, order)),
            TypeTag::Double => TypedValue::Double(decode_as!(f64, bytes, order)),
        };

        Some(value)
    }
}

/// Renders a character byte so that it always fits on one line of the text log: printable ASCII
/// as itself, anything else (control characters, bytes 0x80 and above) escaped as `\n`, `\x80`
/// etc. Backslashes and quotes are escaped too, so every byte has exactly one rendering.
fn fmt_char_byte(f: &mut fmt::Formatter, byte: u8) -> fmt::Result {
    write!(f, "{}", std::ascii::escape_default(byte))
}

/// Floats use Rust's shortest round-trip form, e.g. `12345.679` for the f32 nearest 12345.6789,
/// rather than a fixed number of significant digits.
impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TypedValue::Bool(b) => write!(f, "{b}"),
            // c_char is signed on some targets and unsigned on others:
            TypedValue::Char(c) => fmt_char_byte(f, *c as u8),
            TypedValue::UnsignedChar(c) => fmt_char_byte(f, *c),
            TypedValue::Short(n) => write!(f, "{n}"),
            TypedValue::UnsignedShort(n) => write!(f, "{n}"),
            TypedValue::Int(n) => write!(f, "{n}"),
            TypedValue::UnsignedInt(n) => write!(f, "{n}"),
            TypedValue::Long(n) => write!(f, "{n}"),
            TypedValue::UnsignedLong(n) => write!(f, "{n}"),
            TypedValue::Float(x) => write!(f, "{x}"),
            TypedValue::Double(x) => write!(f, "{x}"),
        }
    }
}
