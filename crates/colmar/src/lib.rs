// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 colmar developers

//! # colmar - typed value marshaling for column stores
//!
//! Converts application-level values (bytes, booleans, sized integers,
//! text) into the canonical byte representation a Cassandra-style
//! column store expects on disk and on the wire, and resolves the
//! store's fully-qualified type descriptors into the [`TypeTag`] that
//! drives the encoding. Fixed widths, big-endian two's-complement,
//! bit-for-bit.
//!
//! This is a pure transformation layer: no I/O, no sessions, no query
//! construction. Transport of the resulting bytes belongs to the
//! layers above.
//!
//! # Example
//!
//! ```rust
//! use colmar::{marshal, resolve_type_tag, SourceValue, TypeTag};
//!
//! // Resolve a column type from schema metadata
//! let tag = resolve_type_tag("org.apache.cassandra.db.marshal.LongType");
//! assert_eq!(tag, TypeTag::Long);
//!
//! // Marshal a value for that column
//! let bytes = marshal(&SourceValue::from(42i64), &tag).unwrap();
//! assert_eq!(bytes, vec![0, 0, 0, 0, 0, 0, 0, 42]);
//!
//! // Text parses when the column wants a Long
//! let same = marshal(&SourceValue::from("42"), &tag).unwrap();
//! assert_eq!(same, bytes);
//! ```
//!
//! # Modules Overview
//!
//! - [`tag`] - `TypeTag` and the descriptor resolver
//! - [`marshal`] - `SourceValue`, the marshal dispatcher, errors
//! - [`value`] - statically-typed wrappers with emit/absorb

pub mod marshal;
pub mod tag;
pub mod value;

pub use marshal::{marshal, MarshalError, SourceValue};
pub use tag::{resolve_type_tag, TypeTag};
pub use value::{BytesValue, LongValue, Value};
