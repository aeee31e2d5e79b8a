//! Decimal amount type backed by rust_decimal.
//!
//! Handles the 10^18 fixed-point conversion from raw on-chain integers and
//! serializes to a JSON number (not a string).

use rust_decimal::Decimal as RustDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const FIXED_POINT_SCALE: u128 = 10u128.pow(18);

/// Decimal amount of whole token units.
///
/// Backed by rust_decimal to avoid floating-point drift during unit
/// conversion.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Decimal(#[serde(with = "rust_decimal::serde::float")] RustDecimal);

impl Decimal {
    pub fn new(value: RustDecimal) -> Self {
        Decimal(value)
    }

    /// Parse a Decimal from a string losslessly.
    pub fn from_str_canonical(s: &str) -> Result<Self, rust_decimal::Error> {
        RustDecimal::from_str(s).map(Decimal)
    }

    /// Convert a raw on-chain amount scaled by 10^18 into whole units.
    ///
    /// Total over the full u128 range: the quotient and remainder each fit
    /// rust_decimal's mantissa.
    pub fn from_fixed_point(raw: u128) -> Self {
        let units = RustDecimal::from_i128_with_scale((raw / FIXED_POINT_SCALE) as i128, 0);
        let frac = RustDecimal::from_i128_with_scale((raw % FIXED_POINT_SCALE) as i128, 18);
        Decimal((units + frac).normalize())
    }

    /// Format as a canonical string (no exponent, no trailing zeros).
    pub fn to_canonical_string(&self) -> String {
        format!("{}", self.0.normalize())
    }

    pub fn inner(&self) -> RustDecimal {
        self.0
    }

    /// The additive identity (0).
    pub fn zero() -> Self {
        Decimal(RustDecimal::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}

impl FromStr for Decimal {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_canonical(s)
    }
}

impl From<RustDecimal> for Decimal {
    fn from(value: RustDecimal) -> Self {
        Decimal(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fixed_point_whole_units() {
        let one = Decimal::from_fixed_point(FIXED_POINT_SCALE);
        assert_eq!(one.to_canonical_string(), "1");

        let hundred = Decimal::from_fixed_point(100 * FIXED_POINT_SCALE);
        assert_eq!(hundred.to_canonical_string(), "100");
    }

    #[test]
    fn test_from_fixed_point_fractional() {
        let half = Decimal::from_fixed_point(FIXED_POINT_SCALE / 2);
        assert_eq!(half.to_canonical_string(), "0.5");

        let mixed = Decimal::from_fixed_point(FIXED_POINT_SCALE + FIXED_POINT_SCALE / 2);
        assert_eq!(mixed.to_canonical_string(), "1.5");
    }

    #[test]
    fn test_from_fixed_point_zero() {
        assert!(Decimal::from_fixed_point(0).is_zero());
    }

    #[test]
    fn test_from_fixed_point_smallest_unit() {
        let wei = Decimal::from_fixed_point(1);
        assert_eq!(wei.to_canonical_string(), "0.000000000000000001");
    }

    #[test]
    fn test_from_fixed_point_large_amount() {
        // 340_282_366 full units with a full 18-digit fractional tail
        let raw = 340_282_366u128 * FIXED_POINT_SCALE + 123_456_789_012_345_678;
        let amount = Decimal::from_fixed_point(raw);
        assert_eq!(amount.to_canonical_string(), "340282366.123456789012345678");
    }

    #[test]
    fn test_decimal_parse_roundtrip() {
        let test_cases = vec!["123.456", "0.0001", "1000000", "0"];

        for s in test_cases {
            let decimal = Decimal::from_str_canonical(s).expect("parse failed");
            let formatted = decimal.to_canonical_string();
            let reparsed = Decimal::from_str_canonical(&formatted).expect("reparse failed");
            assert_eq!(decimal, reparsed, "roundtrip failed for {}", s);
        }
    }

    #[test]
    fn test_decimal_json_serialization() {
        let decimal = Decimal::from_str_canonical("123.456").unwrap();
        let json = serde_json::to_value(decimal).unwrap();
        // Must be a JSON number, not a string
        assert!(json.is_number());
        assert_eq!(json.as_f64(), Some(123.456));
    }

    #[test]
    fn test_decimal_display() {
        let decimal = Decimal::from_str_canonical("99.99").unwrap();
        assert_eq!(decimal.to_string(), "99.99");
    }

    #[test]
    fn test_zero_is_zero() {
        assert!(Decimal::zero().is_zero());
        assert!(!Decimal::from_str_canonical("1").unwrap().is_zero());
    }
}
