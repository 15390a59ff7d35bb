//! # Type Constraint Acceptors
//!
//! One acceptor per type kind, dispatched by an exhaustive match in
//! [`canonicalize`]: a pure function from a raw candidate value to either a
//! canonical typed value or a [`TypeViolation`].
//!
//! ## Exactness Invariant
//!
//! Out-of-domain detection is by exact comparison, never lossy conversion.
//! Integral candidates live in `i128`, so 2^63 against `int64` and 2^64
//! against `uint64` are both caught as plain range failures. Decimal
//! candidates are parsed digit-exactly; a candidate that cannot be scaled by
//! the declared fraction digits without residue is rejected.
//!
//! Non-scalar raw shapes (sequences, mappings) fail every acceptor — there
//! is no implicit flattening.

use ybind_core::{CanonicalValue, Decimal64, RawValue};

use crate::types::{LeafType, StringType};

/// A type-domain violation: the rendered offending value plus a description
/// of the expected domain. The schema instance path is stamped by the
/// caller, which knows where in the tree the value sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeViolation {
    /// Rendered offending raw value.
    pub rendered: String,
    /// Human-readable expected-domain description.
    pub expected: String,
}

impl TypeViolation {
    fn new(ty: &LeafType, raw: &RawValue) -> Self {
        Self {
            rendered: raw.to_string(),
            expected: ty.domain_description(),
        }
    }
}

/// Validate `raw` against `ty`, producing the canonical value or the
/// violation. Pure; stateless; the caller chooses the enforcement timing.
pub fn canonicalize(ty: &LeafType, raw: &RawValue) -> Result<CanonicalValue, TypeViolation> {
    // Structural shapes never reach a scalar domain.
    if !raw.is_scalar() {
        return Err(TypeViolation::new(ty, raw));
    }

    let fail = || TypeViolation::new(ty, raw);

    if let Some((min, max)) = ty.int_domain() {
        let candidate = integral_of(raw).ok_or_else(fail)?;
        if candidate < min || candidate > max {
            return Err(fail());
        }
        // In-domain by the check above, so the narrowing casts are exact.
        return Ok(match ty {
            LeafType::Int8 => CanonicalValue::Int8(candidate as i8),
            LeafType::Int16 => CanonicalValue::Int16(candidate as i16),
            LeafType::Int32 => CanonicalValue::Int32(candidate as i32),
            LeafType::Int64 => CanonicalValue::Int64(candidate as i64),
            LeafType::Uint8 => CanonicalValue::Uint8(candidate as u8),
            LeafType::Uint16 => CanonicalValue::Uint16(candidate as u16),
            LeafType::Uint32 => CanonicalValue::Uint32(candidate as u32),
            // int_domain() is Some only for the eight integer widths.
            _ => CanonicalValue::Uint64(candidate as u64),
        });
    }

    match ty {
        LeafType::Decimal64 { fraction_digits } => decimal_of(raw, *fraction_digits)
            .map(CanonicalValue::Decimal64)
            .ok_or_else(fail),

        LeafType::Boolean => match raw {
            RawValue::Bool(b) => Ok(CanonicalValue::Bool(*b)),
            RawValue::Str(s) if s == "true" => Ok(CanonicalValue::Bool(true)),
            RawValue::Str(s) if s == "false" => Ok(CanonicalValue::Bool(false)),
            _ => Err(fail()),
        },

        LeafType::Empty => match raw {
            RawValue::Empty => Ok(CanonicalValue::Empty),
            _ => Err(fail()),
        },

        LeafType::Enumeration(spec) => match raw {
            RawValue::Str(s) if spec.contains(s) => Ok(CanonicalValue::Enum(s.clone())),
            _ => Err(fail()),
        },

        LeafType::IdentityRef(spec) => match raw {
            RawValue::Identity(name) | RawValue::Str(name) if spec.contains(name) => {
                Ok(CanonicalValue::IdentityRef(name.clone()))
            }
            _ => Err(fail()),
        },

        LeafType::Bits(spec) => {
            let requested: Vec<String> = match raw {
                RawValue::Bits(flags) => flags.clone(),
                RawValue::Str(s) => s.split_whitespace().map(str::to_string).collect(),
                _ => return Err(fail()),
            };
            if requested.iter().any(|flag| !spec.contains(flag)) {
                return Err(fail());
            }
            // Canonical order is declaration order; duplicates collapse.
            let canonical: Vec<String> = spec
                .flags()
                .iter()
                .filter(|flag| requested.iter().any(|r| r == *flag))
                .cloned()
                .collect();
            Ok(CanonicalValue::Bits(canonical))
        }

        LeafType::Str(spec) => {
            let text = raw.to_string();
            check_string(spec, &text).then(|| CanonicalValue::Str(text)).ok_or_else(fail)
        }

        // Integer kinds handled via int_domain() above.
        _ => Err(fail()),
    }
}

/// The exact integral quantity a raw value represents, if any.
fn integral_of(raw: &RawValue) -> Option<i128> {
    match raw {
        RawValue::Int(i) => Some(*i),
        RawValue::Float(f) if f.is_finite() && f.fract() == 0.0 => {
            // Integral f64 values inside the i128 domain convert exactly.
            if *f >= -(2f64.powi(126)) && *f <= 2f64.powi(126) {
                Some(*f as i128)
            } else {
                None
            }
        }
        RawValue::Str(s) => parse_int_literal(s),
        _ => None,
    }
}

/// Parse an exact integer literal: optional sign, decimal digits, nothing
/// else. No whitespace, no radix prefixes, no exponent.
fn parse_int_literal(s: &str) -> Option<i128> {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// The decimal a raw value resolves to at the declared fraction digits,
/// with no residual error, if any.
fn decimal_of(raw: &RawValue, fraction_digits: u8) -> Option<Decimal64> {
    match raw {
        RawValue::Decimal(d) => d.rescale(fraction_digits),
        RawValue::Int(i) => Decimal64::parse(&i.to_string(), fraction_digits).ok(),
        // Display of f64 is the shortest round-trip decimal form, so the
        // digit-exact parser decides representability.
        RawValue::Float(f) if f.is_finite() => {
            Decimal64::parse(&format!("{f}"), fraction_digits).ok()
        }
        RawValue::Str(s) => Decimal64::parse(s, fraction_digits).ok(),
        _ => None,
    }
}

/// Whether `text` satisfies the declared length bounds and every pattern.
fn check_string(spec: &StringType, text: &str) -> bool {
    if let Some((min, max)) = spec.length() {
        let chars = text.chars().count() as u64;
        if chars < min || chars > max {
            return false;
        }
    }
    spec.patterns().iter().all(|p| p.matches(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BitsType, EnumType, IdentityType};

    fn ok(ty: &LeafType, raw: impl Into<RawValue>) -> CanonicalValue {
        canonicalize(ty, &raw.into()).unwrap()
    }

    fn fails(ty: &LeafType, raw: impl Into<RawValue>) -> TypeViolation {
        canonicalize(ty, &raw.into()).unwrap_err()
    }

    // ---- integer domains ----

    #[test]
    fn test_uint8_domain_edges() {
        assert_eq!(ok(&LeafType::Uint8, 0u8), CanonicalValue::Uint8(0));
        assert_eq!(ok(&LeafType::Uint8, 255i64), CanonicalValue::Uint8(255));
        fails(&LeafType::Uint8, -1i64);
        fails(&LeafType::Uint8, 256i64);
    }

    #[test]
    fn test_int8_fractional_float_rejected() {
        let violation = fails(&LeafType::Int8, 8.5);
        assert_eq!(violation.rendered, "8.5");
        assert_eq!(violation.expected, "int8 in [-128, 127]");
    }

    #[test]
    fn test_integral_float_accepted() {
        assert_eq!(ok(&LeafType::Int8, 8.0), CanonicalValue::Int8(8));
    }

    #[test]
    fn test_int64_power_of_two_boundary() {
        // 2^63 is one past int64::MAX; detected by exact comparison.
        fails(&LeafType::Int64, 9_223_372_036_854_775_808i128);
        assert_eq!(
            ok(&LeafType::Int64, 9_223_372_036_854_775_807i64),
            CanonicalValue::Int64(i64::MAX)
        );
    }

    #[test]
    fn test_uint64_power_of_two_boundary() {
        // 2^64 survives verbatim in the raw i128 and fails the domain check.
        fails(&LeafType::Uint64, 18_446_744_073_709_551_616i128);
        assert_eq!(
            ok(&LeafType::Uint64, u64::MAX),
            CanonicalValue::Uint64(u64::MAX)
        );
    }

    #[test]
    fn test_integer_string_literals() {
        assert_eq!(ok(&LeafType::Uint16, "1500"), CanonicalValue::Uint16(1500));
        assert_eq!(ok(&LeafType::Int16, "-42"), CanonicalValue::Int16(-42));
        assert_eq!(ok(&LeafType::Int16, "+42"), CanonicalValue::Int16(42));
        fails(&LeafType::Uint16, "not an uint");
        fails(&LeafType::Uint16, "1 500");
        fails(&LeafType::Uint16, "0x10");
        fails(&LeafType::Uint16, "");
    }

    #[test]
    fn test_integer_rejects_other_scalars() {
        fails(&LeafType::Int32, true);
        fails(&LeafType::Int32, RawValue::Empty);
    }

    // ---- decimal64 ----

    #[test]
    fn test_decimal_accepts_exactly_scalable() {
        let ty = LeafType::decimal64(2).unwrap();
        assert_eq!(
            ok(&ty, 8.5),
            CanonicalValue::Decimal64(Decimal64::parse("8.5", 2).unwrap())
        );
        assert_eq!(
            ok(&ty, "3.25"),
            CanonicalValue::Decimal64(Decimal64::parse("3.25", 2).unwrap())
        );
        assert_eq!(
            ok(&ty, 25i64),
            CanonicalValue::Decimal64(Decimal64::parse("25", 2).unwrap())
        );
    }

    #[test]
    fn test_decimal_residual_rejected() {
        let ty = LeafType::decimal64(1).unwrap();
        fails(&ty, 8.55);
        fails(&ty, "8.55");
    }

    #[test]
    fn test_decimal_rescales_wider_input() {
        let ty = LeafType::decimal64(4).unwrap();
        let d = Decimal64::parse("8.5", 1).unwrap();
        assert_eq!(
            ok(&ty, d),
            CanonicalValue::Decimal64(Decimal64::parse("8.5", 4).unwrap())
        );
    }

    #[test]
    fn test_decimal_non_finite_rejected() {
        let ty = LeafType::decimal64(2).unwrap();
        fails(&ty, f64::NAN);
        fails(&ty, f64::INFINITY);
    }

    // ---- boolean / empty singletons ----

    #[test]
    fn test_boolean_singletons() {
        assert_eq!(ok(&LeafType::Boolean, true), CanonicalValue::Bool(true));
        assert_eq!(ok(&LeafType::Boolean, "false"), CanonicalValue::Bool(false));
        let violation = fails(&LeafType::Boolean, "");
        assert_eq!(violation.rendered, "");
        fails(&LeafType::Boolean, 1i64);
    }

    #[test]
    fn test_empty_singleton() {
        assert_eq!(ok(&LeafType::Empty, RawValue::Empty), CanonicalValue::Empty);
        fails(&LeafType::Empty, "0");
        fails(&LeafType::Empty, "");
        fails(&LeafType::Empty, false);
    }

    // ---- enumeration / identityref ----

    #[test]
    fn test_enumeration_vocabulary() {
        let ty = LeafType::Enumeration(EnumType::new(["none", "local", "remote"]).unwrap());
        assert_eq!(
            ok(&ty, "local"),
            CanonicalValue::Enum("local".to_string())
        );
        let violation = fails(&ty, "not an enum");
        assert_eq!(violation.rendered, "not an enum");
        assert_eq!(violation.expected, "enumeration of [none, local, remote]");
    }

    #[test]
    fn test_identityref_members() {
        let ty = LeafType::IdentityRef(IdentityType::new(["ethernet", "loopback"]).unwrap());
        assert_eq!(
            ok(&ty, RawValue::Identity("loopback".to_string())),
            CanonicalValue::IdentityRef("loopback".to_string())
        );
        assert_eq!(
            ok(&ty, "ethernet"),
            CanonicalValue::IdentityRef("ethernet".to_string())
        );
        fails(&ty, "tunnel");
    }

    // ---- bits ----

    #[test]
    fn test_bits_canonical_declaration_order() {
        let ty = LeafType::Bits(BitsType::new(["ssh", "telnet", "https"]).unwrap());
        let raw = RawValue::Bits(vec![
            "https".to_string(),
            "ssh".to_string(),
            "ssh".to_string(),
        ]);
        assert_eq!(
            canonicalize(&ty, &raw).unwrap(),
            CanonicalValue::Bits(vec!["ssh".to_string(), "https".to_string()])
        );
    }

    #[test]
    fn test_bits_from_string_form() {
        let ty = LeafType::Bits(BitsType::new(["ssh", "telnet"]).unwrap());
        assert_eq!(
            ok(&ty, "telnet ssh"),
            CanonicalValue::Bits(vec!["ssh".to_string(), "telnet".to_string()])
        );
    }

    #[test]
    fn test_bits_undeclared_flag_rejected() {
        let ty = LeafType::Bits(BitsType::new(["ssh", "telnet"]).unwrap());
        let violation = fails(&ty, "ssh ftp");
        assert_eq!(violation.expected, "bits set of [ssh, telnet]");
    }

    // ---- strings ----

    #[test]
    fn test_string_constraints() {
        let ty = LeafType::Str(
            StringType::any()
                .with_length(1, 8)
                .unwrap()
                .with_pattern("[a-z-]+")
                .unwrap(),
        );
        assert_eq!(
            ok(&ty, "eth-zero"),
            CanonicalValue::Str("eth-zero".to_string())
        );
        fails(&ty, "");
        fails(&ty, "much-too-long-name");
        fails(&ty, "Eth0");
    }

    #[test]
    fn test_string_coerces_scalar_rendering() {
        let ty = LeafType::string();
        assert_eq!(ok(&ty, 1500i64), CanonicalValue::Str("1500".to_string()));
        assert_eq!(ok(&ty, true), CanonicalValue::Str("true".to_string()));
    }

    #[test]
    fn test_string_length_counts_characters() {
        let ty = LeafType::Str(StringType::any().with_length(2, 2).unwrap());
        assert_eq!(ok(&ty, "éé"), CanonicalValue::Str("éé".to_string()));
    }

    // ---- non-scalar shapes ----

    #[test]
    fn test_sequence_fails_every_kind() {
        let seq = RawValue::Sequence(vec![RawValue::from("name_str")]);
        for ty in [
            LeafType::Int8,
            LeafType::Uint64,
            LeafType::Boolean,
            LeafType::Empty,
            LeafType::string(),
            LeafType::decimal64(2).unwrap(),
        ] {
            let violation = canonicalize(&ty, &seq).unwrap_err();
            assert_eq!(violation.rendered, "['name_str']");
        }
    }

    #[test]
    fn test_mapping_fails_every_kind() {
        let map = RawValue::Mapping(vec![]);
        for ty in [LeafType::Int16, LeafType::Int32, LeafType::string()] {
            assert!(canonicalize(&ty, &map).is_err());
        }
    }
}
