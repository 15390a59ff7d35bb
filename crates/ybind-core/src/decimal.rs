//! # Decimal64 — Fixed-Point Decimal Scalar
//!
//! A YANG-style `decimal64` value: a 64-bit signed integer of scaled units
//! together with a declared fraction-digit count between 1 and 18. The real
//! value is `units / 10^fraction_digits`.
//!
//! ## Exactness Invariant
//!
//! `Decimal64` never passes through binary floating point. Parsing is
//! digit-exact and rescaling refuses to drop non-zero fraction digits, so a
//! value either round-trips losslessly or construction fails. This is what
//! lets the validation layer promise "no residual error" for decimal leaves.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest legal fraction-digit count.
pub const MIN_FRACTION_DIGITS: u8 = 1;
/// Largest legal fraction-digit count.
pub const MAX_FRACTION_DIGITS: u8 = 18;

/// Error constructing or parsing a [`Decimal64`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecimalError {
    /// The fraction-digit count is outside 1..=18.
    #[error("fraction-digits must be between 1 and 18, got {0}")]
    FractionDigits(u8),

    /// The input is not a well-formed decimal literal.
    #[error("invalid decimal literal {input:?}: {reason}")]
    Parse {
        /// The offending input text.
        input: String,
        /// Why it failed to parse.
        reason: String,
    },

    /// The value cannot be represented with the declared fraction digits
    /// without losing precision or overflowing the scaled 64-bit range.
    #[error("decimal value {input:?} is not representable with {fraction_digits} fraction digits")]
    Unrepresentable {
        /// The offending input text.
        input: String,
        /// The declared fraction-digit count.
        fraction_digits: u8,
    },
}

/// A fixed-point decimal: `units / 10^fraction_digits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decimal64 {
    units: i64,
    fraction_digits: u8,
}

/// `10^fd` as `i128`. Callers guarantee `fd <= 38`, which every legal
/// fraction-digit count satisfies.
pub(crate) fn pow10(fd: u8) -> i128 {
    10i128.pow(u32::from(fd))
}

impl Decimal64 {
    /// Construct from scaled units and a fraction-digit count.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::FractionDigits`] when the count is outside
    /// 1..=18.
    pub fn from_units(units: i64, fraction_digits: u8) -> Result<Self, DecimalError> {
        check_fraction_digits(fraction_digits)?;
        Ok(Self { units, fraction_digits })
    }

    /// Parse a decimal literal (`-?digits[.digits]`) digit-exactly.
    ///
    /// The literal may carry fewer fraction digits than declared (they are
    /// zero-extended) but never more.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::Parse`] for malformed literals and
    /// [`DecimalError::Unrepresentable`] when the value carries more
    /// fraction digits than declared or overflows the scaled i64 range.
    pub fn parse(input: &str, fraction_digits: u8) -> Result<Self, DecimalError> {
        check_fraction_digits(fraction_digits)?;

        let unrepresentable = || DecimalError::Unrepresentable {
            input: input.to_string(),
            fraction_digits,
        };
        let malformed = |reason: &str| DecimalError::Parse {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let (negative, body) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input.strip_prefix('+').unwrap_or(input)),
        };

        let (int_part, frac_part) = match body.split_once('.') {
            Some((i, f)) => (i, f),
            None => (body, ""),
        };

        if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed("expected decimal digits before the point"));
        }
        if body.contains('.')
            && (frac_part.is_empty() || !frac_part.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(malformed("expected decimal digits after the point"));
        }
        if frac_part.len() > usize::from(fraction_digits) {
            return Err(unrepresentable());
        }

        let int_value: i128 = int_part.parse().map_err(|_| unrepresentable())?;
        let frac_value: i128 = if frac_part.is_empty() {
            0
        } else {
            frac_part.parse().map_err(|_| unrepresentable())?
        };

        let pad = fraction_digits - frac_part.len() as u8;
        let scaled = int_value
            .checked_mul(pow10(fraction_digits))
            .and_then(|v| v.checked_add(frac_value.checked_mul(pow10(pad))?))
            .ok_or_else(unrepresentable)?;
        let scaled = if negative { -scaled } else { scaled };

        let units = i64::try_from(scaled).map_err(|_| unrepresentable())?;
        Ok(Self { units, fraction_digits })
    }

    /// Re-express this value with a different fraction-digit count.
    ///
    /// Returns `None` when scaling down would drop non-zero fraction digits
    /// or scaling up would overflow the 64-bit scaled range.
    pub fn rescale(&self, fraction_digits: u8) -> Option<Self> {
        if fraction_digits < MIN_FRACTION_DIGITS || fraction_digits > MAX_FRACTION_DIGITS {
            return None;
        }
        if fraction_digits == self.fraction_digits {
            return Some(*self);
        }
        if fraction_digits > self.fraction_digits {
            let factor = pow10(fraction_digits - self.fraction_digits);
            let scaled = i128::from(self.units).checked_mul(factor)?;
            let units = i64::try_from(scaled).ok()?;
            Some(Self { units, fraction_digits })
        } else {
            let factor = pow10(self.fraction_digits - fraction_digits);
            let value = i128::from(self.units);
            if value % factor != 0 {
                return None;
            }
            Some(Self {
                units: (value / factor) as i64,
                fraction_digits,
            })
        }
    }

    /// The scaled integer units.
    pub fn units(&self) -> i64 {
        self.units
    }

    /// The declared fraction-digit count.
    pub fn fraction_digits(&self) -> u8 {
        self.fraction_digits
    }
}

fn check_fraction_digits(fraction_digits: u8) -> Result<(), DecimalError> {
    if !(MIN_FRACTION_DIGITS..=MAX_FRACTION_DIGITS).contains(&fraction_digits) {
        return Err(DecimalError::FractionDigits(fraction_digits));
    }
    Ok(())
}

impl std::fmt::Display for Decimal64 {
    /// Canonical rendering: minus sign when negative, at least one digit on
    /// each side of the point, trailing fraction zeros trimmed to one digit.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let scale = pow10(self.fraction_digits);
        let value = i128::from(self.units);
        let int_part = (value / scale).abs();
        let frac_part = (value % scale).abs();

        let mut frac = format!(
            "{frac_part:0width$}",
            width = usize::from(self.fraction_digits)
        );
        while frac.len() > 1 && frac.ends_with('0') {
            frac.pop();
        }

        let sign = if value < 0 { "-" } else { "" };
        write!(f, "{sign}{int_part}.{frac}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let d = Decimal64::parse("8.5", 2).unwrap();
        assert_eq!(d.units(), 850);
        assert_eq!(d.to_string(), "8.5");
    }

    #[test]
    fn test_parse_integer_literal() {
        let d = Decimal64::parse("25", 3).unwrap();
        assert_eq!(d.units(), 25_000);
        assert_eq!(d.to_string(), "25.0");
    }

    #[test]
    fn test_parse_negative() {
        let d = Decimal64::parse("-0.75", 2).unwrap();
        assert_eq!(d.units(), -75);
        assert_eq!(d.to_string(), "-0.75");
    }

    #[test]
    fn test_parse_explicit_plus_sign() {
        let d = Decimal64::parse("+1.5", 1).unwrap();
        assert_eq!(d.units(), 15);
    }

    #[test]
    fn test_parse_too_many_fraction_digits() {
        let err = Decimal64::parse("1.234", 2).unwrap_err();
        assert!(matches!(err, DecimalError::Unrepresentable { .. }));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(Decimal64::parse("", 2).is_err());
        assert!(Decimal64::parse(".", 2).is_err());
        assert!(Decimal64::parse(".5", 2).is_err());
        assert!(Decimal64::parse("5.", 2).is_err());
        assert!(Decimal64::parse("1.2.3", 2).is_err());
        assert!(Decimal64::parse("1e3", 2).is_err());
        assert!(Decimal64::parse("abc", 2).is_err());
    }

    #[test]
    fn test_parse_overflow() {
        // i64::MAX scaled by 10^2 does not fit.
        let err = Decimal64::parse("92233720368547758.08", 3).unwrap_err();
        assert!(matches!(err, DecimalError::Unrepresentable { .. }));
    }

    #[test]
    fn test_fraction_digits_bounds() {
        assert!(matches!(
            Decimal64::from_units(1, 0),
            Err(DecimalError::FractionDigits(0))
        ));
        assert!(matches!(
            Decimal64::from_units(1, 19),
            Err(DecimalError::FractionDigits(19))
        ));
        assert!(Decimal64::from_units(1, 1).is_ok());
        assert!(Decimal64::from_units(1, 18).is_ok());
    }

    #[test]
    fn test_rescale_up() {
        let d = Decimal64::parse("8.5", 1).unwrap();
        let wider = d.rescale(4).unwrap();
        assert_eq!(wider.units(), 85_000);
        assert_eq!(wider.to_string(), "8.5");
    }

    #[test]
    fn test_rescale_down_exact() {
        let d = Decimal64::parse("8.500", 3).unwrap();
        let narrower = d.rescale(1).unwrap();
        assert_eq!(narrower.units(), 85);
    }

    #[test]
    fn test_rescale_down_lossy_refused() {
        let d = Decimal64::parse("8.55", 2).unwrap();
        assert!(d.rescale(1).is_none());
    }

    #[test]
    fn test_display_trims_trailing_zeros() {
        let d = Decimal64::from_units(850_000, 5).unwrap();
        assert_eq!(d.to_string(), "8.5");
    }

    #[test]
    fn test_display_keeps_one_fraction_digit() {
        let d = Decimal64::from_units(3_000, 3).unwrap();
        assert_eq!(d.to_string(), "3.0");
    }

    #[test]
    fn test_display_negative_below_one() {
        let d = Decimal64::from_units(-5, 2).unwrap();
        assert_eq!(d.to_string(), "-0.05");
    }

    #[test]
    fn test_serde_roundtrip() {
        let d = Decimal64::parse("8.5", 2).unwrap();
        let json = serde_json::to_string(&d).unwrap();
        let parsed: Decimal64 = serde_json::from_str(&json).unwrap();
        assert_eq!(d, parsed);
    }

    #[test]
    fn test_parse_display_roundtrip() {
        for text in ["0.0", "1.5", "-3.25", "100.001"] {
            let d = Decimal64::parse(text, 3).unwrap();
            let again = Decimal64::parse(&d.to_string(), 3).unwrap();
            assert_eq!(d, again);
        }
    }
}
