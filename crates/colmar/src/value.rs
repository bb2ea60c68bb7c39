// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 colmar developers

//! Statically-typed value wrappers.
//!
//! Where a column's type is known at compile time, a wrapper bound to
//! that type replaces dynamic dispatch: [`Value::emit`] produces the
//! canonical bytes, [`Value::absorb`] overwrites the wrapper's state
//! from bytes read back from the store. Absorb consumes its input
//! exactly; a length mismatch is a hard failure, never a truncation
//! or zero-pad.

use crate::marshal::MarshalError;
use crate::tag::TypeTag;

/// Emit/absorb capability for a value bound to one storage type.
pub trait Value {
    /// Canonical bytes for the current state.
    fn emit(&self) -> Vec<u8>;

    /// Overwrite state from canonical bytes. The input must be
    /// consumed exactly; partial or over-long input is an error.
    fn absorb(&mut self, bytes: &[u8]) -> Result<(), MarshalError>;
}

/// Raw byte-sequence wrapper (BytesType columns).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BytesValue(pub Vec<u8>);

impl Value for BytesValue {
    fn emit(&self) -> Vec<u8> {
        self.0.clone()
    }

    fn absorb(&mut self, bytes: &[u8]) -> Result<(), MarshalError> {
        // Any length is well-formed for opaque bytes
        self.0 = bytes.to_vec();
        Ok(())
    }
}

impl From<Vec<u8>> for BytesValue {
    fn from(v: Vec<u8>) -> Self {
        Self(v)
    }
}

impl From<&[u8]> for BytesValue {
    fn from(v: &[u8]) -> Self {
        Self(v.to_vec())
    }
}

/// 64-bit signed integer wrapper (LongType columns), fixed 8-byte
/// big-endian two's-complement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LongValue(pub i64);

impl Value for LongValue {
    fn emit(&self) -> Vec<u8> {
        self.0.to_be_bytes().to_vec()
    }

    fn absorb(&mut self, bytes: &[u8]) -> Result<(), MarshalError> {
        let raw: [u8; 8] =
            bytes
                .try_into()
                .map_err(|_| MarshalError::UnsupportedUnmarshaling {
                    tag: TypeTag::Long,
                    reason: format!("need exactly 8 bytes, got {}", bytes.len()),
                })?;
        self.0 = i64::from_be_bytes(raw);
        Ok(())
    }
}

impl From<i64> for LongValue {
    fn from(v: i64) -> Self {
        Self(v)
    }
}
