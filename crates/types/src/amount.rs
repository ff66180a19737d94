//! Arbitrary-precision decimal amounts
//!
//! Every number in the swap pipeline is decimal: display-unit strings typed by
//! the user, raw base-unit integers returned by providers, and derived values
//! such as rates and fees. An [`Amount`] may be undefined, which is what
//! arithmetic on missing input or a division by zero produces instead of
//! panicking or yielding `NaN`.

use bigdecimal::BigDecimal;
use num::{BigInt, Num, Signed, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised by strict amount parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
	#[error("Invalid decimal amount: '{value}'")]
	InvalidDecimal { value: String },

	#[error("Invalid base-unit integer: '{value}'")]
	InvalidInteger { value: String },
}

/// Decimal amount that may be undefined
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Amount(Option<BigDecimal>);

impl Amount {
	/// The undefined amount
	pub fn undefined() -> Self {
		Self(None)
	}

	/// Exact zero
	pub fn zero() -> Self {
		Self(Some(BigDecimal::zero()))
	}

	/// Lenient constructor: empty or malformed input is undefined.
	pub fn new(value: &str) -> Self {
		Self::parse(value).unwrap_or_default()
	}

	/// Strict parse of an unsigned display-unit decimal such as `12.5`.
	///
	/// Only digits and at most one `.` are accepted; signs and exponents are
	/// rejected. The empty string parses as undefined.
	pub fn parse(value: &str) -> Result<Self, AmountError> {
		parse_plain(value, false)
	}

	/// Like [`Amount::parse`] but allows a leading `-`, for provider-declared
	/// values such as price impact.
	pub fn parse_signed(value: &str) -> Result<Self, AmountError> {
		parse_plain(value, true)
	}

	/// Build a display-unit amount from a raw base-unit integer (decimal or `0x` hex).
	///
	/// Malformed input yields an undefined amount.
	pub fn from_base_units(raw: &str, decimals: u8) -> Self {
		match parse_integer(raw) {
			Ok(integer) => Self(Some(BigDecimal::new(integer, i64::from(decimals)))),
			Err(_) => Self::undefined(),
		}
	}

	/// Raw base-unit integer amount without descaling
	pub fn from_integer_str(raw: &str) -> Self {
		Self::from_base_units(raw, 0)
	}

	pub fn is_undefined(&self) -> bool {
		self.0.is_none()
	}

	/// Defined and exactly zero
	pub fn is_zero(&self) -> bool {
		self.0.as_ref().map(|value| value.is_zero()).unwrap_or(false)
	}

	pub fn is_zero_or_undefined(&self) -> bool {
		self.0.as_ref().map(|value| value.is_zero()).unwrap_or(true)
	}

	pub fn is_positive(&self) -> bool {
		self.0
			.as_ref()
			.map(|value| value.is_positive())
			.unwrap_or(false)
	}

	pub fn abs(&self) -> Self {
		self.map(|value| value.abs())
	}

	/// Borrow the underlying decimal
	pub fn as_decimal(&self) -> Option<&BigDecimal> {
		self.0.as_ref()
	}

	/// Divide by `10^decimals`
	pub fn descale(&self, decimals: u8) -> Self {
		self.map(|value| value * &pow10(-i64::from(decimals)))
	}

	/// Multiply by `10^decimals`
	pub fn scale_up(&self, decimals: u8) -> Self {
		self.map(|value| value * &pow10(i64::from(decimals)))
	}

	/// Convert a display amount into a base-unit integer string.
	///
	/// Digits beyond the token precision are truncated; callers that must
	/// reject such input check [`Amount::exceeds_decimals`] first.
	pub fn to_base_units(&self, decimals: u8) -> Option<String> {
		let scaled = self.scale_up(decimals).0?;
		let (integer, _) = scaled.with_scale(0).as_bigint_and_exponent();
		Some(integer.to_string())
	}

	/// Base-unit integer rendered as `0x`-prefixed hex
	pub fn to_hex_base_units(&self, decimals: u8) -> Option<String> {
		let scaled = self.scale_up(decimals).0?;
		let (integer, _) = scaled.with_scale(0).as_bigint_and_exponent();
		Some(format!("0x{}", integer.to_str_radix(16)))
	}

	/// Number of significant fractional digits (trailing zeros ignored)
	pub fn fractional_digits(&self) -> u32 {
		match &self.0 {
			Some(value) => {
				let (_, scale) = value.normalized().as_bigint_and_exponent();
				scale.max(0) as u32
			},
			None => 0,
		}
	}

	/// Whether the amount carries more fractional digits than a token supports
	pub fn exceeds_decimals(&self, decimals: u8) -> bool {
		self.fractional_digits() > u32::from(decimals)
	}

	/// Truncate toward zero at the given number of fractional digits
	pub fn round_down(&self, digits: u8) -> Self {
		self.map(|value| value.with_scale(i64::from(digits)))
	}

	/// Division guarded against zero: a zero or undefined divisor yields undefined.
	pub fn checked_div(&self, divisor: &Amount) -> Self {
		match (&self.0, &divisor.0) {
			(Some(lhs), Some(rhs)) if !rhs.is_zero() => Self(Some(lhs / rhs)),
			_ => Self::undefined(),
		}
	}

	/// Use `fallback` when this amount is undefined
	pub fn or(self, fallback: Amount) -> Self {
		if self.is_undefined() {
			fallback
		} else {
			self
		}
	}

	/// Lazily computed `fallback` when this amount is undefined
	pub fn or_else(self, fallback: impl FnOnce() -> Amount) -> Self {
		if self.is_undefined() {
			fallback()
		} else {
			self
		}
	}

	fn map(&self, f: impl FnOnce(&BigDecimal) -> BigDecimal) -> Self {
		Self(self.0.as_ref().map(f))
	}

	fn zip(&self, other: &Amount, f: impl FnOnce(&BigDecimal, &BigDecimal) -> BigDecimal) -> Self {
		match (&self.0, &other.0) {
			(Some(lhs), Some(rhs)) => Self(Some(f(lhs, rhs))),
			_ => Self::undefined(),
		}
	}
}

/// `10^exponent` as an exact decimal
fn pow10(exponent: i64) -> BigDecimal {
	BigDecimal::new(BigInt::from(1), -exponent)
}

fn parse_integer(raw: &str) -> Result<BigInt, AmountError> {
	let trimmed = raw.trim();
	let parsed = match trimmed
		.strip_prefix("0x")
		.or_else(|| trimmed.strip_prefix("0X"))
	{
		Some("") => Ok(BigInt::zero()),
		Some(hex) => BigInt::from_str_radix(hex, 16),
		None => BigInt::from_str_radix(trimmed, 10),
	};
	parsed.map_err(|_| AmountError::InvalidInteger {
		value: raw.to_string(),
	})
}

fn parse_plain(value: &str, allow_negative: bool) -> Result<Amount, AmountError> {
	let invalid = || AmountError::InvalidDecimal {
		value: value.to_string(),
	};
	let trimmed = value.trim();
	if trimmed.is_empty() {
		return Ok(Amount::undefined());
	}

	let (negative, unsigned) = match trimmed.strip_prefix('-') {
		Some(rest) if allow_negative => (true, rest),
		Some(_) => return Err(invalid()),
		None => (false, trimmed),
	};
	// Partially typed input such as ".5" and "1." is accepted
	let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
	let is_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
	if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
		return Err(invalid());
	}

	let whole = if whole.is_empty() { "0" } else { whole };
	let digits = format!("{}{}{}", if negative { "-" } else { "" }, whole, fraction);
	let integer = BigInt::from_str_radix(&digits, 10).map_err(|_| invalid())?;
	Ok(Amount(Some(BigDecimal::new(integer, fraction.len() as i64))))
}

/// Plain positional rendering without exponent or trailing zeros
fn render_plain(value: &BigDecimal) -> String {
	value.normalized().to_plain_string()
}

impl fmt::Display for Amount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.0 {
			Some(value) => f.write_str(&render_plain(value)),
			None => Ok(()),
		}
	}
}

impl fmt::Debug for Amount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.0 {
			Some(value) => write!(f, "Amount({})", render_plain(value)),
			None => write!(f, "Amount(undefined)"),
		}
	}
}

impl PartialOrd for Amount {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		match (&self.0, &other.0) {
			(Some(lhs), Some(rhs)) => Some(lhs.cmp(rhs)),
			(None, None) => Some(Ordering::Equal),
			_ => None,
		}
	}
}

impl From<BigDecimal> for Amount {
	fn from(value: BigDecimal) -> Self {
		Self(Some(value))
	}
}

impl From<u64> for Amount {
	fn from(value: u64) -> Self {
		Self(Some(BigDecimal::from(value)))
	}
}

impl FromStr for Amount {
	type Err = AmountError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl Add for &Amount {
	type Output = Amount;

	fn add(self, rhs: &Amount) -> Amount {
		self.zip(rhs, |lhs, rhs| lhs + rhs)
	}
}

impl Sub for &Amount {
	type Output = Amount;

	fn sub(self, rhs: &Amount) -> Amount {
		self.zip(rhs, |lhs, rhs| lhs - rhs)
	}
}

impl Mul for &Amount {
	type Output = Amount;

	fn mul(self, rhs: &Amount) -> Amount {
		self.zip(rhs, |lhs, rhs| lhs * rhs)
	}
}

impl Div for &Amount {
	type Output = Amount;

	fn div(self, rhs: &Amount) -> Amount {
		self.checked_div(rhs)
	}
}

impl std::iter::Sum for Amount {
	fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
		iter.fold(Amount::zero(), |acc, item| &acc + &item)
	}
}

impl Serialize for Amount {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match &self.0 {
			Some(value) => serializer.serialize_str(&render_plain(value)),
			None => serializer.serialize_none(),
		}
	}
}

impl<'de> Deserialize<'de> for Amount {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = Option::<String>::deserialize(deserializer)?;
		match raw {
			Some(value) => Amount::parse_signed(&value).map_err(serde::de::Error::custom),
			None => Ok(Amount::undefined()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_partial_input() {
		assert_eq!(Amount::new(".5").to_string(), "0.5");
		assert_eq!(Amount::new("1.").to_string(), "1");
		assert!(Amount::new("").is_undefined());
		assert!(Amount::new("abc").is_undefined());
		assert!(Amount::parse("abc").is_err());
	}

	#[test]
	fn test_parse_rejects_sign_and_exponent() {
		for invalid in ["1e3", "1E3", "1e2000000", "1e-7", "+2", "-1", ".", "1.2.3", "0x10", " 1 2"] {
			assert!(Amount::parse(invalid).is_err(), "{} accepted", invalid);
			assert!(Amount::new(invalid).is_undefined());
		}
		assert_eq!(Amount::parse("007.50").unwrap().to_string(), "7.5");
		assert_eq!(Amount::parse(" 12 ").unwrap().to_string(), "12");
		assert!(Amount::parse_signed("+2").is_err());
		assert!(Amount::parse_signed("-1e3").is_err());
		assert_eq!(Amount::parse_signed("-.5").unwrap().to_string(), "-0.5");
	}

	#[test]
	fn test_base_unit_round_trip_keeps_precision() {
		let amount = Amount::from_base_units("1234567890123456789012", 18);
		assert_eq!(amount.to_string(), "1234.567890123456789012");
		assert_eq!(
			amount.to_base_units(18).unwrap(),
			"1234567890123456789012".to_string()
		);
	}

	#[test]
	fn test_base_units_from_hex() {
		let amount = Amount::from_base_units("0xde0b6b3a7640000", 18);
		assert_eq!(amount.to_string(), "1");
		assert_eq!(Amount::new("1").to_hex_base_units(18).unwrap(), "0xde0b6b3a7640000");
	}

	#[test]
	fn test_to_base_units_truncates_excess_digits() {
		assert_eq!(Amount::new("1.2345").to_base_units(2).unwrap(), "123");
		assert_eq!(Amount::new("10").to_base_units(6).unwrap(), "10000000");
		assert!(Amount::undefined().to_base_units(6).is_none());
	}

	#[test]
	fn test_fractional_digits_ignore_trailing_zeros() {
		assert_eq!(Amount::new("1.50").fractional_digits(), 1);
		assert_eq!(Amount::new("100").fractional_digits(), 0);
		assert!(Amount::new("0.1234567").exceeds_decimals(6));
		assert!(!Amount::new("0.123456").exceeds_decimals(6));
	}

	#[test]
	fn test_division_by_zero_is_undefined() {
		let one = Amount::new("1");
		assert!(one.checked_div(&Amount::zero()).is_undefined());
		assert!(one.checked_div(&Amount::undefined()).is_undefined());
		assert_eq!((&Amount::new("10") / &Amount::new("4")).to_string(), "2.5");
	}

	#[test]
	fn test_arithmetic_propagates_undefined() {
		let defined = Amount::new("2");
		assert!((&defined + &Amount::undefined()).is_undefined());
		assert_eq!((&defined * &Amount::new("0.6")).to_string(), "1.2");
		assert_eq!((&defined - &Amount::new("0.5")).to_string(), "1.5");
	}

	#[test]
	fn test_ordering() {
		assert!(Amount::new("0.6") > Amount::new("0.5"));
		assert!(Amount::new("1.0") == Amount::new("1"));
		assert_eq!(Amount::new("1").partial_cmp(&Amount::undefined()), None);
	}

	#[test]
	fn test_plain_rendering_has_no_exponent() {
		assert_eq!(Amount::from_base_units("5000", 9).to_string(), "0.000005");
		assert_eq!(Amount::from_base_units("1000", 0).to_string(), "1000");
		assert_eq!(Amount::parse_signed("-0.25").unwrap().to_string(), "-0.25");
		assert_eq!(Amount::zero().to_string(), "0");
	}

	#[test]
	fn test_round_down() {
		assert_eq!(Amount::new("1.23456789").round_down(6).to_string(), "1.234567");
		assert_eq!(Amount::new("2.5000001").round_down(6).to_string(), "2.5");
	}

	#[test]
	fn test_serde_as_string() {
		let json = serde_json::to_string(&Amount::new("0.5")).unwrap();
		assert_eq!(json, "\"0.5\"");
		let parsed: Amount = serde_json::from_str("null").unwrap();
		assert!(parsed.is_undefined());
		let negative: Amount = serde_json::from_str("\"-1.5\"").unwrap();
		assert_eq!(negative.to_string(), "-1.5");
	}
}
