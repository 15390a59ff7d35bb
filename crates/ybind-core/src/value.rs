//! # Raw Candidate Values
//!
//! [`RawValue`] is the shape-unconstrained value a caller may assign to a
//! scalar leaf. Assignment never validates — a raw value is held verbatim
//! until a boundary operation canonicalizes the whole tree — so this type
//! must be able to carry anything the caller produces, including values that
//! can never be valid (out-of-range integers, sequences assigned to scalar
//! slots, mappings).
//!
//! Integral candidates are stored as `i128` so that out-of-domain values up
//! to and beyond 2^64 survive verbatim and are rejected by exact comparison,
//! never by lossy narrowing.

use crate::decimal::Decimal64;

/// A raw, not-yet-validated candidate value.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// An exact integral quantity of any magnitude a caller can produce.
    Int(i128),
    /// A binary floating-point quantity.
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// A text value.
    Str(String),
    /// The presence marker of the `empty` type.
    Empty,
    /// A fixed-point decimal.
    Decimal(Decimal64),
    /// A set of bit-flag names.
    Bits(Vec<String>),
    /// An identity reference by name.
    Identity(String),
    /// An ordered sequence — never valid for a scalar slot.
    Sequence(Vec<RawValue>),
    /// A keyed mapping — never valid for a scalar slot.
    Mapping(Vec<(String, RawValue)>),
}

impl RawValue {
    /// Whether this value has a scalar shape. Sequences and mappings are
    /// structural and always fail scalar acceptors.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, RawValue::Sequence(_) | RawValue::Mapping(_))
    }

    /// A short name for the value's shape, used in diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            RawValue::Int(_) => "integer",
            RawValue::Float(_) => "float",
            RawValue::Bool(_) => "boolean",
            RawValue::Str(_) => "string",
            RawValue::Empty => "empty",
            RawValue::Decimal(_) => "decimal64",
            RawValue::Bits(_) => "bits",
            RawValue::Identity(_) => "identityref",
            RawValue::Sequence(_) => "sequence",
            RawValue::Mapping(_) => "mapping",
        }
    }

    /// Render for inclusion inside a sequence or mapping: strings are
    /// single-quoted, everything else renders bare.
    fn fmt_element(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawValue::Str(s) => write!(f, "'{s}'"),
            other => write!(f, "{other}"),
        }
    }
}

impl std::fmt::Display for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawValue::Int(i) => write!(f, "{i}"),
            RawValue::Float(x) => write!(f, "{x}"),
            RawValue::Bool(b) => write!(f, "{b}"),
            RawValue::Str(s) => f.write_str(s),
            RawValue::Empty => Ok(()),
            RawValue::Decimal(d) => write!(f, "{d}"),
            RawValue::Bits(flags) => f.write_str(&flags.join(" ")),
            RawValue::Identity(name) => f.write_str(name),
            RawValue::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_element(f)?;
                }
                f.write_str("]")
            }
            RawValue::Mapping(pairs) => {
                f.write_str("{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{key}': ")?;
                    value.fmt_element(f)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<i8> for RawValue {
    fn from(v: i8) -> Self {
        RawValue::Int(i128::from(v))
    }
}

impl From<i16> for RawValue {
    fn from(v: i16) -> Self {
        RawValue::Int(i128::from(v))
    }
}

impl From<i32> for RawValue {
    fn from(v: i32) -> Self {
        RawValue::Int(i128::from(v))
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        RawValue::Int(i128::from(v))
    }
}

impl From<i128> for RawValue {
    fn from(v: i128) -> Self {
        RawValue::Int(v)
    }
}

impl From<u8> for RawValue {
    fn from(v: u8) -> Self {
        RawValue::Int(i128::from(v))
    }
}

impl From<u16> for RawValue {
    fn from(v: u16) -> Self {
        RawValue::Int(i128::from(v))
    }
}

impl From<u32> for RawValue {
    fn from(v: u32) -> Self {
        RawValue::Int(i128::from(v))
    }
}

impl From<u64> for RawValue {
    fn from(v: u64) -> Self {
        RawValue::Int(i128::from(v))
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Float(v)
    }
}

impl From<bool> for RawValue {
    fn from(v: bool) -> Self {
        RawValue::Bool(v)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        RawValue::Str(v.to_string())
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        RawValue::Str(v)
    }
}

impl From<Decimal64> for RawValue {
    fn from(v: Decimal64) -> Self {
        RawValue::Decimal(v)
    }
}

impl From<Vec<RawValue>> for RawValue {
    fn from(v: Vec<RawValue>) -> Self {
        RawValue::Sequence(v)
    }
}
