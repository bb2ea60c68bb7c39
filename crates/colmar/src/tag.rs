// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2026 colmar developers

//! Canonical storage type tags and the descriptor resolver.
//!
//! The store's schema metadata names column types with fully-qualified
//! descriptors like `org.apache.cassandra.db.marshal.LongType`.
//! [`resolve_type_tag`] maps those to a [`TypeTag`], which is what the
//! marshal dispatcher actually switches on.

use std::fmt;

/// Canonical storage type categories.
///
/// One tag is active per encode call. Tags are plain values, cheap to
/// clone and compare; they carry no identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Opaque byte sequence (also the fallback for unknown descriptors)
    Bytes,

    /// ASCII text (ascii-ness is validated by the store, not here)
    Ascii,

    /// UTF-8 text
    Utf8,

    /// 64-bit signed integer, 8-byte big-endian
    Long,

    /// Arbitrary-precision integer (no encoding rule yet)
    Integer,

    /// Arbitrary-precision decimal (no encoding rule yet)
    Decimal,

    /// UUID, 16 bytes from the canonical hyphenated text form
    Uuid,

    /// Boolean, single byte
    Boolean,

    /// 32-bit IEEE float (no encoding rule yet)
    Float,

    /// 64-bit IEEE float (no encoding rule yet)
    Double,

    /// Timestamp as 64-bit big-endian integer
    Date,

    /// Distributed counter column (resolves, no encoding rule)
    CounterColumn,

    /// Ordered component types of a composite column
    #[cfg(feature = "composite-types")]
    Composite(Vec<TypeTag>),
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes => write!(f, "Bytes"),
            Self::Ascii => write!(f, "Ascii"),
            Self::Utf8 => write!(f, "Utf8"),
            Self::Long => write!(f, "Long"),
            Self::Integer => write!(f, "Integer"),
            Self::Decimal => write!(f, "Decimal"),
            Self::Uuid => write!(f, "Uuid"),
            Self::Boolean => write!(f, "Boolean"),
            Self::Float => write!(f, "Float"),
            Self::Double => write!(f, "Double"),
            Self::Date => write!(f, "Date"),
            Self::CounterColumn => write!(f, "CounterColumn"),
            #[cfg(feature = "composite-types")]
            Self::Composite(components) => {
                write!(f, "Composite(")?;
                for (i, c) in components.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", c)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Descriptor namespace used by the store's schema metadata.
const MARSHAL_PACKAGE: &str = "org.apache.cassandra.db.marshal.";

#[cfg(feature = "composite-types")]
const COMPOSITE_PREFIX: &str = "org.apache.cassandra.db.marshal.CompositeType(";

/// Resolve a fully-qualified type descriptor to a [`TypeTag`].
///
/// Exact match against the known descriptor table. Unrecognized
/// descriptors resolve to [`TypeTag::Bytes`]: any column type can be
/// handled as opaque bytes, so unknown types are permissively passed
/// through rather than rejected. This fallback is deliberate.
pub fn resolve_type_tag(descriptor: &str) -> TypeTag {
    #[cfg(feature = "composite-types")]
    if let Some(tag) = resolve_composite(descriptor) {
        return tag;
    }

    let Some(name) = descriptor.strip_prefix(MARSHAL_PACKAGE) else {
        log::debug!(
            "[resolve_type_tag] unknown descriptor '{}', treating as bytes",
            descriptor
        );
        return TypeTag::Bytes;
    };

    match name {
        "BytesType" => TypeTag::Bytes,
        "AsciiType" => TypeTag::Ascii,
        "UTF8Type" => TypeTag::Utf8,
        "LongType" => TypeTag::Long,
        "IntegerType" => TypeTag::Integer,
        "DecimalType" => TypeTag::Decimal,
        "UUIDType" => TypeTag::Uuid,
        "BooleanType" => TypeTag::Boolean,
        "FloatType" => TypeTag::Float,
        "DoubleType" => TypeTag::Double,
        "DateType" => TypeTag::Date,
        "CounterColumnType" => TypeTag::CounterColumn,
        _ => {
            log::debug!(
                "[resolve_type_tag] unknown descriptor '{}', treating as bytes",
                descriptor
            );
            TypeTag::Bytes
        }
    }
}

/// Parse a `CompositeType(a,b,...)` descriptor recursively.
///
/// Components are split at top-level commas only, so nested composite
/// components keep their own parenthesized lists intact.
#[cfg(feature = "composite-types")]
fn resolve_composite(descriptor: &str) -> Option<TypeTag> {
    let inner = descriptor
        .strip_prefix(COMPOSITE_PREFIX)?
        .strip_suffix(')')?;

    let mut components = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, ch) in inner.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                components.push(resolve_type_tag(inner[start..i].trim()));
                start = i + 1;
            }
            _ => {}
        }
    }
    components.push(resolve_type_tag(inner[start..].trim()));
    Some(TypeTag::Composite(components))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_descriptors() {
        let table = [
            ("BytesType", TypeTag::Bytes),
            ("AsciiType", TypeTag::Ascii),
            ("UTF8Type", TypeTag::Utf8),
            ("LongType", TypeTag::Long),
            ("IntegerType", TypeTag::Integer),
            ("DecimalType", TypeTag::Decimal),
            ("UUIDType", TypeTag::Uuid),
            ("BooleanType", TypeTag::Boolean),
            ("FloatType", TypeTag::Float),
            ("DoubleType", TypeTag::Double),
            ("DateType", TypeTag::Date),
            ("CounterColumnType", TypeTag::CounterColumn),
        ];
        for (name, expected) in table {
            let descriptor = format!("org.apache.cassandra.db.marshal.{}", name);
            assert_eq!(resolve_type_tag(&descriptor), expected, "{}", name);
        }
    }

    #[test]
    fn test_unknown_descriptor_falls_back_to_bytes() {
        // Permissive fallback: unknown column types are opaque bytes,
        // never an error.
        assert_eq!(
            resolve_type_tag("org.apache.cassandra.db.marshal.FancyNewType"),
            TypeTag::Bytes
        );
        assert_eq!(resolve_type_tag("not.even.a.marshal.type"), TypeTag::Bytes);
        assert_eq!(resolve_type_tag(""), TypeTag::Bytes);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(TypeTag::Long.to_string(), "Long");
        assert_eq!(TypeTag::CounterColumn.to_string(), "CounterColumn");
    }

    #[cfg(feature = "composite-types")]
    #[test]
    fn test_resolve_composite_descriptor() {
        let tag = resolve_type_tag(
            "org.apache.cassandra.db.marshal.CompositeType(\
             org.apache.cassandra.db.marshal.LongType,\
             org.apache.cassandra.db.marshal.UTF8Type)",
        );
        assert_eq!(
            tag,
            TypeTag::Composite(vec![TypeTag::Long, TypeTag::Utf8])
        );
    }

    #[cfg(feature = "composite-types")]
    #[test]
    fn test_resolve_nested_composite_descriptor() {
        let tag = resolve_type_tag(
            "org.apache.cassandra.db.marshal.CompositeType(\
             org.apache.cassandra.db.marshal.CompositeType(\
             org.apache.cassandra.db.marshal.AsciiType,\
             org.apache.cassandra.db.marshal.BooleanType),\
             org.apache.cassandra.db.marshal.LongType)",
        );
        assert_eq!(
            tag,
            TypeTag::Composite(vec![
                TypeTag::Composite(vec![TypeTag::Ascii, TypeTag::Boolean]),
                TypeTag::Long,
            ])
        );
    }

    #[cfg(feature = "composite-types")]
    #[test]
    fn test_unterminated_composite_falls_back_to_bytes() {
        assert_eq!(
            resolve_type_tag("org.apache.cassandra.db.marshal.CompositeType("),
            TypeTag::Bytes
        );
    }
}
