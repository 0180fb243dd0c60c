//! `N(m,k)` number-format validation.
//!
//! A number in format `N(m,k)` has at most `m` characters counting the sign
//! (when present) and every digit of the integer and fractional parts, and at
//! most `k` fractional digits. The decimal separator may be `.` or `,` and is
//! not counted. `N(m)` is shorthand for `N(m,0)`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ValidatorError, ValidatorResult};

/// Optional sign, integer digits, optional separator plus fractional digits.
static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([+-]?)(\d+)(?:[.,](\d+))?$").expect("valid regex"));

/// Validates strings against an `N(precision, scale)` number format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberValidator {
    precision: usize,
    scale: usize,
    only_positive: bool,
}

impl NumberValidator {
    /// Create a validator for `N(precision, scale)`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::InvalidPrecision`] when `precision` is zero
    /// and [`ValidatorError::InvalidScale`] when `scale >= precision`.
    pub const fn new(precision: usize, scale: usize, only_positive: bool) -> ValidatorResult<Self> {
        if precision == 0 {
            return Err(ValidatorError::InvalidPrecision(precision));
        }
        if scale >= precision {
            return Err(ValidatorError::InvalidScale { scale, precision });
        }
        Ok(Self {
            precision,
            scale,
            only_positive,
        })
    }

    /// Maximum total characters (sign plus digits).
    pub const fn precision(&self) -> usize {
        self.precision
    }

    /// Maximum fractional digits.
    pub const fn scale(&self) -> usize {
        self.scale
    }

    /// Whether a leading `-` is rejected.
    pub const fn only_positive(&self) -> bool {
        self.only_positive
    }

    /// Check whether `value` is a number in this validator's format.
    ///
    /// Absent, empty and malformed values are simply invalid.
    pub fn is_valid(&self, value: Option<&str>) -> bool {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            return false;
        };
        let Some(caps) = NUMBER_PATTERN.captures(value) else {
            return false;
        };

        let sign = caps.get(1).map_or("", |m| m.as_str());
        let int_digits = caps.get(2).map_or(0, |m| m.as_str().chars().count());
        let frac_digits = caps.get(3).map_or(0, |m| m.as_str().chars().count());

        if sign.len() + int_digits + frac_digits > self.precision || frac_digits > self.scale {
            return false;
        }
        !(self.only_positive && sign == "-")
    }
}

impl std::fmt::Display for NumberValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.scale == 0 {
            write!(f, "N({})", self.precision)
        } else {
            write!(f, "N({},{})", self.precision, self.scale)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(precision: usize, scale: usize, only_positive: bool, value: Option<&str>) -> bool {
        NumberValidator::new(precision, scale, only_positive)
            .unwrap()
            .is_valid(value)
    }

    #[test]
    fn accepts_minimal_format() {
        assert!(NumberValidator::new(1, 0, true).is_ok());
    }

    #[test]
    fn rejects_zero_precision() {
        assert_eq!(
            NumberValidator::new(0, 2, false),
            Err(ValidatorError::InvalidPrecision(0))
        );
    }

    #[test]
    fn rejects_scale_not_below_precision() {
        assert_eq!(
            NumberValidator::new(2, 4, false),
            Err(ValidatorError::InvalidScale {
                scale: 4,
                precision: 2
            })
        );
        assert!(NumberValidator::new(3, 3, true).is_err());
    }

    #[test]
    fn absent_and_empty_are_invalid() {
        assert!(!valid(3, 2, true, None));
        assert!(!valid(3, 2, false, None));
        assert!(!valid(1, 0, true, Some("")));
    }

    #[test]
    fn malformed_values_are_invalid() {
        for (p, s, pos, v) in [
            (1, 0, true, "-"),
            (3, 2, true, "a.sd"),
            (4, 2, false, "-v.nt"),
            (3, 2, true, "3.k"),
            (4, 2, true, "2a.85"),
            (5, 2, false, "-2a.85"),
            (3, 2, false, ".05"),
            (4, 3, true, ".-05"),
            (4, 1, true, "-05."),
            (3, 1, false, "05."),
            (5, 3, false, "0.5.4"),
            (6, 1, true, "-0 7.1"),
        ] {
            assert!(!valid(p, s, pos, Some(v)), "{v:?} should be malformed");
        }
    }

    #[test]
    fn accepts_values_within_precision() {
        for (p, s, pos, v) in [
            (17, 2, false, "0.0"),
            (17, 2, false, "0"),
            (12, 2, true, "+1.23"),
            (7, 3, false, "-000.000"),
            (2, 0, false, "-0"),
            (4, 2, true, "+1.23"),
            (2, 0, false, "-1"),
            (3, 0, true, "+12"),
            (5, 2, false, "-00.00"),
            (3, 1, true, "+0.0"),
            (4, 2, false, "1,25"),
        ] {
            assert!(valid(p, s, pos, Some(v)), "{v:?} should fit N({p},{s})");
        }
    }

    #[test]
    fn sign_counts_toward_precision() {
        for (p, s, pos, v) in [
            (3, 2, true, "00.00"),
            (3, 2, false, "-0.00"),
            (3, 2, true, "+0.00"),
            (3, 2, true, "+1.23"),
            (4, 0, true, "00000"),
            (4, 0, false, "-0000"),
            (3, 2, false, "-1.23"),
        ] {
            assert!(!valid(p, s, pos, Some(v)), "{v:?} should exceed N({p},{s})");
        }
    }

    #[test]
    fn fraction_longer_than_scale_is_invalid() {
        assert!(!valid(4, 1, true, Some("+0.00")));
        assert!(!valid(5, 2, false, Some("-0.999")));
        assert!(!valid(4, 0, false, Some("-00.00")));
    }

    #[test]
    fn positive_only_rejects_minus() {
        assert!(!valid(5, 2, true, Some("-00.00")));
        assert!(!valid(3, 1, true, Some("-0.0")));
        assert!(!valid(6, 3, true, Some("-12.345")));
    }

    #[test]
    fn display_uses_short_form_for_integers() {
        assert_eq!(NumberValidator::new(4, 0, false).unwrap().to_string(), "N(4)");
        assert_eq!(NumberValidator::new(5, 2, false).unwrap().to_string(), "N(5,2)");
    }
}
