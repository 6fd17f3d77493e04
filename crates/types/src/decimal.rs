// Path: crates/types/src/decimal.rs
//! Arbitrary-precision decimal values for monetary amounts.
//!
//! Monetary fields are arbitrary-precision decimals serialized as canonical
//! strings. `Decimal` wraps `bigdecimal::BigDecimal` and always round-trips
//! through its canonical string form for both the SCALE wire encoding and
//! `serde`, so two nodes that agree on the string agree on the encoding
//! bit-for-bit.

use bigdecimal::BigDecimal;
use parity_scale_codec::{Decode, Encode, Error as CodecError, Input, Output};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An arbitrary-precision, non-negative-by-convention decimal amount.
///
/// Nothing in this type enforces non-negativity; callers that need a
/// spendable-balance check use [`Decimal::checked_sub`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Decimal(BigDecimal);

impl Decimal {
    /// The additive identity.
    pub fn zero() -> Self {
        Decimal(BigDecimal::from(0))
    }

    /// Parses a canonical decimal string.
    pub fn parse(s: &str) -> Result<Self, DecimalParseError> {
        BigDecimal::from_str(s)
            .map(Decimal)
            .map_err(|e| DecimalParseError(e.to_string()))
    }

    /// Returns `true` if this amount is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0 == BigDecimal::from(0)
    }

    /// Adds two amounts.
    pub fn checked_add(&self, other: &Decimal) -> Self {
        Decimal(&self.0 + &other.0)
    }

    /// Subtracts `other` from `self`, returning `None` if the result would be
    /// negative. Used for every spendable-balance debit in the executors.
    pub fn checked_sub(&self, other: &Decimal) -> Option<Self> {
        let result = &self.0 - &other.0;
        if result < BigDecimal::from(0) {
            None
        } else {
            Some(Decimal(result))
        }
    }
}

impl From<u64> for Decimal {
    fn from(v: u64) -> Self {
        Decimal(BigDecimal::from(v))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Decimal {
    type Err = DecimalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::parse(s)
    }
}

/// Raised when a decimal string is not parseable.
#[derive(Debug, thiserror::Error)]
#[error("invalid decimal literal: {0}")]
pub struct DecimalParseError(String);

impl Encode for Decimal {
    fn encode_to<T: Output + ?Sized>(&self, dest: &mut T) {
        self.0.to_string().encode_to(dest)
    }
}

impl Decode for Decimal {
    fn decode<I: Input>(input: &mut I) -> Result<Self, CodecError> {
        let raw = String::decode(input)?;
        BigDecimal::from_str(&raw)
            .map(Decimal)
            .map_err(|_| CodecError::from("invalid decimal literal"))
    }
}

impl Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Decimal::parse(&raw).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_through_scale() {
        let d = Decimal::parse("1234.56789").unwrap();
        let bytes = d.encode();
        let back = Decimal::decode(&mut &bytes[..]).unwrap();
        assert_eq!(d, back);
    }

    #[test]
    fn checked_sub_rejects_negative_result() {
        let balance = Decimal::parse("100").unwrap();
        let too_much = Decimal::parse("101").unwrap();
        assert!(balance.checked_sub(&too_much).is_none());
    }

    #[test]
    fn checked_sub_allows_exact_balance() {
        let balance = Decimal::parse("100").unwrap();
        let all = Decimal::parse("100").unwrap();
        let remaining = balance.checked_sub(&all).unwrap();
        assert!(remaining.is_zero());
    }
}
