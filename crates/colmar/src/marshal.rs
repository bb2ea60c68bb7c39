// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 colmar developers

//! Marshal dispatcher: (value kind, type tag) -> canonical bytes.
//!
//! Dispatch is two-level: first on the runtime kind of the source
//! value, then on the target [`TypeTag`]. Every supported pair has a
//! fixed, deterministic byte layout; every unsupported pair is a typed
//! error. Integers are big-endian two's-complement throughout.

use crate::tag::TypeTag;
use std::fmt;

/// Errors for marshal/unmarshal operations.
#[derive(Debug)]
pub enum MarshalError {
    /// No encoding rule for this (value kind, tag) pair.
    UnsupportedMarshaling { kind: &'static str, tag: TypeTag },
    /// No decode rule, or malformed input bytes for the target type.
    UnsupportedUnmarshaling { tag: TypeTag, reason: String },
    /// Text could not be interpreted as a number; original cause kept.
    ParseFailed(std::num::ParseIntError),
}

impl fmt::Display for MarshalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedMarshaling { kind, tag } => {
                write!(f, "Cannot marshal {} value as {}", kind, tag)
            }
            Self::UnsupportedUnmarshaling { tag, reason } => {
                write!(f, "Cannot unmarshal {} value: {}", tag, reason)
            }
            Self::ParseFailed(e) => write!(f, "Parse failed: {}", e),
        }
    }
}

impl std::error::Error for MarshalError {}

impl From<std::num::ParseIntError> for MarshalError {
    fn from(e: std::num::ParseIntError) -> Self {
        Self::ParseFailed(e)
    }
}

/// A source value accepted by the marshal dispatcher.
///
/// Closed set of input kinds. Kinds without an encoding rule (floats)
/// are representable so the dispatcher can reject them with a typed
/// error instead of coercing.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceValue {
    /// Raw byte sequence, passed through unchanged under any tag
    Bytes(Vec<u8>),
    /// Boolean
    Bool(bool),
    /// Signed integer, sign-extended to 64 bits, carrying its declared
    /// source width in bytes (1, 2, 4 or 8)
    Int { value: i64, width: usize },
    /// UTF-8 text
    Text(String),
    /// 32-bit float (no encoding rule)
    Float(f32),
    /// 64-bit float (no encoding rule)
    Double(f64),
}

impl SourceValue {
    /// Kind name for error context.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bytes(_) => "bytes",
            Self::Bool(_) => "bool",
            Self::Int { .. } => "integer",
            Self::Text(_) => "text",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
        }
    }
}

impl From<Vec<u8>> for SourceValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<&[u8]> for SourceValue {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

impl From<bool> for SourceValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i8> for SourceValue {
    fn from(v: i8) -> Self {
        Self::Int {
            value: i64::from(v),
            width: 1,
        }
    }
}

impl From<i16> for SourceValue {
    fn from(v: i16) -> Self {
        Self::Int {
            value: i64::from(v),
            width: 2,
        }
    }
}

impl From<i32> for SourceValue {
    fn from(v: i32) -> Self {
        Self::Int {
            value: i64::from(v),
            width: 4,
        }
    }
}

impl From<i64> for SourceValue {
    fn from(v: i64) -> Self {
        Self::Int { value: v, width: 8 }
    }
}

impl From<String> for SourceValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for SourceValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<f32> for SourceValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for SourceValue {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

/// Marshal a value into the canonical bytes for the given tag.
///
/// On failure no bytes are produced; output and error are mutually
/// exclusive. Failures are unrecoverable for the call: either the
/// (kind, tag) pair has no rule, or text failed to parse as a number.
pub fn marshal(value: &SourceValue, tag: &TypeTag) -> Result<Vec<u8>, MarshalError> {
    match value {
        // Passthrough: the tag is not validated against raw bytes here
        SourceValue::Bytes(b) => Ok(b.clone()),
        SourceValue::Bool(v) => marshal_bool(*v, tag),
        SourceValue::Int { value, width } => marshal_int(*value, *width, tag),
        SourceValue::Text(s) => marshal_text(s, tag),
        SourceValue::Float(_) | SourceValue::Double(_) => Err(unsupported(value, tag)),
    }
}

fn unsupported(value: &SourceValue, tag: &TypeTag) -> MarshalError {
    MarshalError::UnsupportedMarshaling {
        kind: value.kind_name(),
        tag: tag.clone(),
    }
}

fn marshal_bool(value: bool, tag: &TypeTag) -> Result<Vec<u8>, MarshalError> {
    match tag {
        TypeTag::Bytes | TypeTag::Boolean => Ok(vec![u8::from(value)]),
        TypeTag::Ascii | TypeTag::Utf8 => Ok(vec![if value { b'1' } else { b'0' }]),
        TypeTag::Long => {
            let mut b = vec![0u8; 8];
            b[7] = u8::from(value);
            Ok(b)
        }
        _ => Err(unsupported(&SourceValue::Bool(value), tag)),
    }
}

fn marshal_int(value: i64, width: usize, tag: &TypeTag) -> Result<Vec<u8>, MarshalError> {
    match tag {
        TypeTag::Long => Ok(value.to_be_bytes().to_vec()),

        TypeTag::Bytes => {
            // Widths outside the declared set have no defined layout
            if !matches!(width, 1 | 2 | 4 | 8) {
                return Err(unsupported(&SourceValue::Int { value, width }, tag));
            }
            // Width-preserving truncation: trailing `width` bytes of
            // the full big-endian encoding. The declared width is
            // trusted; values outside the width lose high-order bytes.
            let full = value.to_be_bytes();
            Ok(full[full.len() - width..].to_vec())
        }

        TypeTag::Date => {
            if width != 8 {
                return Err(unsupported(&SourceValue::Int { value, width }, tag));
            }
            Ok(value.to_be_bytes().to_vec())
        }

        TypeTag::Ascii | TypeTag::Utf8 => Ok(value.to_string().into_bytes()),

        _ => Err(unsupported(&SourceValue::Int { value, width }, tag)),
    }
}

fn marshal_text(value: &str, tag: &TypeTag) -> Result<Vec<u8>, MarshalError> {
    // Ascii-ness of the bytes is the store's problem, not ours
    match tag {
        TypeTag::Bytes | TypeTag::Ascii | TypeTag::Utf8 => Ok(value.as_bytes().to_vec()),

        TypeTag::Long => {
            let parsed: i64 = value.parse()?;
            marshal_int(parsed, 8, &TypeTag::Long)
        }

        TypeTag::Uuid => marshal_uuid(value, tag),

        _ => Err(MarshalError::UnsupportedMarshaling {
            kind: "text",
            tag: tag.clone(),
        }),
    }
}

/// Byte widths of the five hyphen-separated UUID groups.
const UUID_GROUP_WIDTHS: [usize; 5] = [4, 2, 2, 2, 6];

/// Hex digit counts of the five groups (8-4-4-4-12 canonical form).
const UUID_GROUP_DIGITS: [usize; 5] = [8, 4, 4, 4, 12];

fn marshal_uuid(value: &str, tag: &TypeTag) -> Result<Vec<u8>, MarshalError> {
    let malformed = || MarshalError::UnsupportedMarshaling {
        kind: "text",
        tag: tag.clone(),
    };

    if value.len() != 36 {
        return Err(malformed());
    }
    let groups: Vec<&str> = value.split('-').collect();
    if groups.len() != 5 {
        return Err(malformed());
    }

    let mut out = Vec::with_capacity(16);
    for (i, group) in groups.iter().enumerate() {
        if group.len() != UUID_GROUP_DIGITS[i] {
            return Err(malformed());
        }
        // from_str_radix tolerates a leading sign; the canonical
        // hyphenated form is hex digits only
        if group.starts_with(['+', '-']) {
            return Err(malformed());
        }
        // Other non-hex content surfaces as a parse failure, cause intact
        let parsed = u64::from_str_radix(group, 16)?;
        let full = parsed.to_be_bytes();
        out.extend_from_slice(&full[full.len() - UUID_GROUP_WIDTHS[i]..]);
    }
    Ok(out)
}
