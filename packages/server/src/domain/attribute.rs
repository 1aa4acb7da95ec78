//! Attribute model for stored records.
//!
//! Records are open-ended maps of named attributes. Numbers with a fractional
//! part never live in the domain as binary floating point: they enter through
//! [`AttributeValue::from_json`] and are held as [`Decimal`], so they are
//! written to and read back from storage without drift.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::error::ValueObjectError;

/// One stored record: attribute name → value, ordered by name.
pub type Item = BTreeMap<String, AttributeValue>;

/// Exact decimal number held in its canonical text form (`-?digits[.digits]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal(String);

impl Decimal {
    /// Convert a finite float using its shortest round-trip representation.
    ///
    /// Returns `None` for NaN and infinities, which have no decimal form.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        // f64's Display never uses exponent notation
        Some(Self(value.to_string()))
    }

    /// Hold an unsigned integer that does not fit in `i64`.
    pub fn from_u64(value: u64) -> Self {
        Self(value.to_string())
    }

    /// Parse a decimal literal.
    pub fn parse(literal: &str) -> Result<Self, ValueObjectError> {
        if is_decimal_literal(literal) {
            Ok(Self(literal.to_string()))
        } else {
            Err(ValueObjectError::DecimalInvalid(literal.to_string()))
        }
    }

    /// Get the canonical text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Truncate toward zero. `None` if the integral part overflows `i64`.
    pub fn trunc(&self) -> Option<i64> {
        let integral = self.0.split_once('.').map_or(self.0.as_str(), |(i, _)| i);
        integral.parse::<i64>().ok()
    }

    /// JSON number with the same value.
    pub fn to_json(&self) -> Value {
        if let Ok(v) = self.0.parse::<i64>() {
            return Value::from(v);
        }
        if let Ok(v) = self.0.parse::<u64>() {
            return Value::from(v);
        }
        self.0
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map_or(Value::Null, Value::Number)
    }
}

fn is_decimal_literal(literal: &str) -> bool {
    let unsigned = literal.strip_prefix('-').unwrap_or(literal);
    let (integral, fraction) = match unsigned.split_once('.') {
        Some((integral, fraction)) => (integral, Some(fraction)),
        None => (unsigned, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    all_digits(integral) && fraction.is_none_or(all_digits)
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Tagged value of a single attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Null,
    Bool(bool),
    Integer(i64),
    Decimal(Decimal),
    String(String),
    List(Vec<AttributeValue>),
    Map(Item),
}

impl AttributeValue {
    /// Convert a JSON value, turning every float (at any depth) into a [`Decimal`].
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Self::Decimal(Decimal::from_u64(u))
                } else {
                    n.as_f64()
                        .and_then(Decimal::from_f64)
                        .map_or(Self::Null, Self::Decimal)
                }
            }
            Value::String(s) => Self::String(s),
            Value::Array(values) => Self::List(values.into_iter().map(Self::from_json).collect()),
            Value::Object(map) => Self::Map(
                map.into_iter()
                    .map(|(name, value)| (name, Self::from_json(value)))
                    .collect(),
            ),
        }
    }

    /// Convert back to JSON.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Integer(i) => Value::from(*i),
            Self::Decimal(d) => d.to_json(),
            Self::String(s) => Value::String(s.clone()),
            Self::List(values) => Value::Array(values.iter().map(Self::to_json).collect()),
            Self::Map(map) => Value::Object(
                map.iter()
                    .map(|(name, value)| (name.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }

    /// Borrow the string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integer view used for numeric aggregation.
    ///
    /// Integers are taken as-is, decimals are truncated toward zero, booleans
    /// count as 0/1 and strings must hold an integer literal.
    pub fn as_truncated_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::Decimal(d) => d.trunc(),
            Self::Bool(b) => Some(i64::from(*b)),
            Self::String(s) => s.trim().parse::<i64>().ok(),
            Self::Null | Self::List(_) | Self::Map(_) => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Decimal(d) => d.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::List(values) => serializer.collect_seq(values),
            Self::Map(map) => serializer.collect_map(map),
        }
    }
}

impl<'de> Deserialize<'de> for AttributeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_json)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Decimal> for AttributeValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<Item> for AttributeValue {
    fn from(value: Item) -> Self {
        Self::Map(value)
    }
}
