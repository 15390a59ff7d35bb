//! # Canonical Values
//!
//! [`CanonicalValue`] is the strongly typed product of successful validation.
//! Where [`RawValue`](crate::RawValue) accepts anything, a canonical value is
//! narrowed to the exact domain of its leaf's declared type — an `Int8` holds
//! an `i8`, a `Uint64` holds a `u64` — and is the only value form eligible
//! for transmission to the remote store.
//!
//! `render()` produces the wire-canonical string form: the representation the
//! management protocol carries for the value.

use serde::Serialize;

use crate::decimal::Decimal64;

/// A validated, canonically typed scalar value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CanonicalValue {
    /// 8-bit signed integer.
    Int8(i8),
    /// 16-bit signed integer.
    Int16(i16),
    /// 32-bit signed integer.
    Int32(i32),
    /// 64-bit signed integer.
    Int64(i64),
    /// 8-bit unsigned integer.
    Uint8(u8),
    /// 16-bit unsigned integer.
    Uint16(u16),
    /// 32-bit unsigned integer.
    Uint32(u32),
    /// 64-bit unsigned integer.
    Uint64(u64),
    /// Fixed-point decimal at the leaf's declared fraction digits.
    Decimal64(Decimal64),
    /// Boolean.
    Bool(bool),
    /// Presence marker of the `empty` type.
    Empty,
    /// A declared enumeration symbol.
    Enum(String),
    /// Bit flags in declaration order, duplicates collapsed.
    Bits(Vec<String>),
    /// A declared identity name.
    IdentityRef(String),
    /// A constrained string.
    Str(String),
}

impl CanonicalValue {
    /// The kind name of the value, matching the schema type vocabulary.
    pub fn kind_name(&self) -> &'static str {
        match self {
            CanonicalValue::Int8(_) => "int8",
            CanonicalValue::Int16(_) => "int16",
            CanonicalValue::Int32(_) => "int32",
            CanonicalValue::Int64(_) => "int64",
            CanonicalValue::Uint8(_) => "uint8",
            CanonicalValue::Uint16(_) => "uint16",
            CanonicalValue::Uint32(_) => "uint32",
            CanonicalValue::Uint64(_) => "uint64",
            CanonicalValue::Decimal64(_) => "decimal64",
            CanonicalValue::Bool(_) => "boolean",
            CanonicalValue::Empty => "empty",
            CanonicalValue::Enum(_) => "enumeration",
            CanonicalValue::Bits(_) => "bits",
            CanonicalValue::IdentityRef(_) => "identityref",
            CanonicalValue::Str(_) => "string",
        }
    }

    /// The wire-canonical string form of the value.
    pub fn render(&self) -> String {
        match self {
            CanonicalValue::Int8(v) => v.to_string(),
            CanonicalValue::Int16(v) => v.to_string(),
            CanonicalValue::Int32(v) => v.to_string(),
            CanonicalValue::Int64(v) => v.to_string(),
            CanonicalValue::Uint8(v) => v.to_string(),
            CanonicalValue::Uint16(v) => v.to_string(),
            CanonicalValue::Uint32(v) => v.to_string(),
            CanonicalValue::Uint64(v) => v.to_string(),
            CanonicalValue::Decimal64(d) => d.to_string(),
            CanonicalValue::Bool(b) => b.to_string(),
            CanonicalValue::Empty => String::new(),
            CanonicalValue::Enum(s) => s.clone(),
            CanonicalValue::Bits(flags) => flags.join(" "),
            CanonicalValue::IdentityRef(s) => s.clone(),
            CanonicalValue::Str(s) => s.clone(),
        }
    }
}

impl std::fmt::Display for CanonicalValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_integers() {
        assert_eq!(CanonicalValue::Int8(-128).render(), "-128");
        assert_eq!(CanonicalValue::Uint8(255).render(), "255");
        assert_eq!(CanonicalValue::Uint64(u64::MAX).render(), "18446744073709551615");
    }

    #[test]
    fn test_render_decimal() {
        let d = Decimal64::parse("8.5", 2).unwrap();
        assert_eq!(CanonicalValue::Decimal64(d).render(), "8.5");
    }

    #[test]
    fn test_render_bool_and_empty() {
        assert_eq!(CanonicalValue::Bool(true).render(), "true");
        assert_eq!(CanonicalValue::Empty.render(), "");
    }

    #[test]
    fn test_render_bits_space_joined() {
        let v = CanonicalValue::Bits(vec!["ssh".to_string(), "telnet".to_string()]);
        assert_eq!(v.render(), "ssh telnet");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(CanonicalValue::Int8(0).kind_name(), "int8");
        assert_eq!(CanonicalValue::Enum("gold".to_string()).kind_name(), "enumeration");
        assert_eq!(CanonicalValue::Str(String::new()).kind_name(), "string");
    }
}
