// src/number.rs

use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use rust_decimal::Decimal;

use crate::error::{FixtureError, Result};

/// Exact coordinate type used throughout the crate.
pub type Scalar = BigRational;

/// Significant digits used when rendering fixture coordinates.
pub const FIXTURE_DIGITS: usize = 8;

pub fn integer(value: i64) -> Scalar {
    Scalar::from_integer(BigInt::from(value))
}

pub fn pow10(exponent: i64) -> Scalar {
    let magnitude = num_traits::pow(BigInt::from(10), exponent.unsigned_abs() as usize);
    if exponent >= 0 {
        Scalar::from_integer(magnitude)
    } else {
        Scalar::new(BigInt::one(), magnitude)
    }
}

/// Parses an integer, a decimal literal (`-2.5`, `1e-3`, `3.125E-1`) or a rational (`5/2`)
/// into an exact value. Decimal literals are limited to the 28 significant digits a
/// `Decimal` can hold.
pub fn parse_scalar(text: &str) -> Result<Scalar> {
    let trimmed = text.trim();
    let invalid = || FixtureError::InvalidNumber(text.to_string());

    if trimmed.contains('/') {
        return Scalar::from_str(trimmed).map_err(|_| invalid());
    }

    let decimal = if trimmed.contains(['e', 'E']) {
        Decimal::from_scientific(trimmed)
    } else {
        Decimal::from_str(trimmed)
    }
    .map_err(|_| invalid())?;

    Ok(Scalar::from_integer(BigInt::from(decimal.mantissa())) * pow10(-i64::from(decimal.scale())))
}

/// Power of ten of the leading digit of a strictly positive value.
fn decimal_exponent(magnitude: &Scalar) -> i64 {
    let whole = magnitude.to_integer();
    if !whole.is_zero() {
        return whole.to_string().len() as i64 - 1;
    }

    let ten = integer(10);
    let mut scaled = magnitude.clone();
    let mut exponent = 0;
    while scaled < Scalar::one() {
        scaled *= &ten;
        exponent -= 1;
    }
    exponent
}

/// Renders `value` with exactly `digits` significant digits, rounding half away from
/// zero. Leading-digit exponents from -4 up to `digits - 1` use fixed notation
/// (`0.50000000`, `12345678.0`); anything further out switches to scientific notation
/// (`1.0000000e-6`, `1.2345679e+8`), following mpmath's `to_str`. Zero renders as `0`.
pub fn format_significant(value: &Scalar, digits: usize) -> String {
    if value.is_zero() {
        return "0".to_string();
    }

    let digits = digits.max(1) as i64;
    let min_fixed = (-(digits / 3)).min(-5);
    let magnitude = value.abs();
    let mut exponent = decimal_exponent(&magnitude);
    let mut mantissa = (&magnitude * pow10(digits - 1 - exponent)).round().to_integer();

    // 9.99999999 rounds up into the next decade
    if mantissa == pow10(digits).to_integer() {
        mantissa /= BigInt::from(10);
        exponent += 1;
    }

    let text = mantissa.to_string();
    let body = if exponent <= min_fixed || exponent >= digits {
        let (lead, rest) = text.split_at(1);
        let rest = if rest.is_empty() { "0" } else { rest };
        let sign = if exponent > 0 { "+" } else { "" };
        format!("{}.{}e{}{}", lead, rest, sign, exponent)
    } else if exponent < 0 {
        format!("0.{}{}", "0".repeat((-exponent - 1) as usize), text)
    } else {
        let (whole, fraction) = text.split_at(exponent as usize + 1);
        let fraction = if fraction.is_empty() { "0" } else { fraction };
        format!("{}.{}", whole, fraction)
    };

    if value.is_negative() {
        format!("-{}", body)
    } else {
        body
    }
}

pub fn format_fixture(value: &Scalar) -> String {
    format_significant(value, FIXTURE_DIGITS)
}
