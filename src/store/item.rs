//! Item record and price representation

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Price of an item
///
/// Kept in the exact form it was submitted: a JSON number stays a number,
/// a numeric string stays a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    /// JSON number, e.g. `12.99`
    Number(Number),
    /// Numeric string, e.g. `"2.59"`
    Text(String),
}

impl Price {
    /// Numeric value of the price, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Price::Number(n) => n.as_f64(),
            Price::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }
}

impl From<&str> for Price {
    fn from(value: &str) -> Self {
        Price::Text(value.to_string())
    }
}

impl From<String> for Price {
    fn from(value: String) -> Self {
        Price::Text(value)
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        // NaN and infinities have no JSON number form
        match Number::from_f64(value) {
            Some(n) => Price::Number(n),
            None => Price::Text(value.to_string()),
        }
    }
}

impl From<Number> for Price {
    fn from(value: Number) -> Self {
        Price::Number(value)
    }
}

/// A single grocery item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique name, used as the key
    pub name: String,

    /// Price as submitted
    pub price: Price,
}

impl Item {
    /// Create a new item
    pub fn new(name: impl Into<String>, price: impl Into<Price>) -> Self {
        Item {
            name: name.into(),
            price: price.into(),
        }
    }
}
