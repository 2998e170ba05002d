//! Common building blocks for productivity calculations.
//!
//! Every ratio in this crate goes through [`checked_ratio`], which makes the
//! zero-denominator case explicit as [`Ratio::Undefined`] instead of quietly
//! producing a number.

use serde::{Deserialize, Serialize};

/// The value of a calculation whose denominator may be zero.
///
/// `Undefined` means the denominator was exactly zero. Front ends that keep
/// the classic behaviour display it as `0` through [`Ratio::value_or_zero`].
///
/// # Examples
///
/// ```
/// use productivity_core::calculations::Ratio;
///
/// assert_eq!(Ratio::Value(1.25).value_or_zero(), 1.25);
/// assert_eq!(Ratio::Undefined.value_or_zero(), 0.0);
/// assert_eq!(Ratio::Undefined.value(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Ratio {
    Value(f64),
    Undefined,
}

impl Ratio {
    /// Returns the value, or `0.0` when undefined.
    pub fn value_or_zero(self) -> f64 {
        match self {
            Self::Value(v) => v,
            Self::Undefined => 0.0,
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Undefined => None,
        }
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Applies `f` to a defined value, leaving `Undefined` untouched.
    pub fn map<F>(
        self,
        f: F,
    ) -> Self
    where
        F: FnOnce(f64) -> f64,
    {
        match self {
            Self::Value(v) => Self::Value(f(v)),
            Self::Undefined => Self::Undefined,
        }
    }
}

/// Divides `numerator` by `denominator`, tagging a zero denominator.
///
/// Only an exact zero (including `-0.0`) is treated as undefined. Signs,
/// NaN and infinities pass straight through the division.
///
/// # Arguments
///
/// * `numerator` - The output measure
/// * `denominator` - The input measure (or sum of inputs)
///
/// # Examples
///
/// ```
/// use productivity_core::calculations::{Ratio, checked_ratio};
///
/// assert_eq!(checked_ratio(1000.0, 800.0), Ratio::Value(1.25));
/// assert_eq!(checked_ratio(1000.0, 0.0), Ratio::Undefined);
/// ```
pub fn checked_ratio(
    numerator: f64,
    denominator: f64,
) -> Ratio {
    if denominator == 0.0 {
        Ratio::Undefined
    } else {
        Ratio::Value(numerator / denominator)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // checked_ratio tests
    // =========================================================================

    #[test]
    fn checked_ratio_divides_when_denominator_positive() {
        let result = checked_ratio(1000.0, 200.0);

        assert_eq!(result, Ratio::Value(5.0));
    }

    #[test]
    fn checked_ratio_is_undefined_for_zero_denominator() {
        let result = checked_ratio(1000.0, 0.0);

        assert_eq!(result, Ratio::Undefined);
    }

    #[test]
    fn checked_ratio_treats_negative_zero_as_zero() {
        let result = checked_ratio(1000.0, -0.0);

        assert_eq!(result, Ratio::Undefined);
    }

    #[test]
    fn checked_ratio_zero_numerator_is_a_real_zero() {
        let result = checked_ratio(0.0, 50.0);

        assert_eq!(result, Ratio::Value(0.0));
        assert!(!result.is_undefined());
    }

    #[test]
    fn checked_ratio_passes_nan_through() {
        let result = checked_ratio(f64::NAN, 2.0);

        assert!(result.value_or_zero().is_nan());
    }

    // =========================================================================
    // Ratio tests
    // =========================================================================

    #[test]
    fn map_skips_undefined() {
        assert_eq!(Ratio::Value(4.0).map(f64::sqrt), Ratio::Value(2.0));
        assert_eq!(Ratio::Undefined.map(f64::sqrt), Ratio::Undefined);
    }

    #[test]
    fn ratio_serializes_with_status_tag() {
        let defined = serde_json::to_string(&Ratio::Value(1.5)).unwrap();
        let undefined = serde_json::to_string(&Ratio::Undefined).unwrap();

        assert_eq!(defined, r#"{"status":"value","value":1.5}"#);
        assert_eq!(undefined, r#"{"status":"undefined"}"#);
    }
}
