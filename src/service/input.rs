//! Request body schema for create and update

use serde::Deserialize;
use serde_json::Value;

use super::error::{ItemError, ItemResult};
use crate::store::{Item, Price};

/// Raw create/update body
///
/// Fields are kept as loose JSON so that missing, null and ill-typed
/// values all end up as the same validation error.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemPayload {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
}

impl ItemPayload {
    /// Build a payload from already-typed fields
    pub fn new(name: impl Into<String>, price: impl Into<Price>) -> Self {
        let price = match price.into() {
            Price::Number(n) => Value::Number(n),
            Price::Text(s) => Value::String(s),
        };
        ItemPayload {
            name: Some(Value::String(name.into())),
            price: Some(price),
        }
    }

    /// Read a payload from a JSON body
    ///
    /// Only objects are accepted. A sequence would otherwise be mapped onto
    /// the fields positionally.
    pub fn from_json(body: Value) -> ItemResult<Self> {
        if !body.is_object() {
            return Err(ItemError::Validation);
        }
        serde_json::from_value(body).map_err(|_| ItemError::Validation)
    }

    /// Validate the body and turn it into an item
    ///
    /// `name` must be a non-empty string. `price` must be a non-zero number
    /// or a non-empty string holding a finite number.
    pub fn into_item(self) -> ItemResult<Item> {
        let name = match self.name {
            Some(Value::String(s)) if !s.is_empty() => s,
            _ => return Err(ItemError::Validation),
        };

        let price = match self.price {
            Some(Value::Number(n)) if n.as_f64().is_some_and(|v| v != 0.0) => Price::Number(n),
            Some(Value::String(s)) if !s.is_empty() => {
                let price = Price::Text(s);
                if price.as_f64().is_none() {
                    return Err(ItemError::Validation);
                }
                price
            }
            _ => return Err(ItemError::Validation),
        };

        Ok(Item { name, price })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> ItemPayload {
        ItemPayload::from_json(value).unwrap()
    }

    #[test]
    fn test_valid_number_price() {
        let item = payload(json!({"name": "Beer", "price": 12.99}))
            .into_item()
            .unwrap();
        assert_eq!(item, Item::new("Beer", 12.99));
    }

    #[test]
    fn test_valid_string_price() {
        let item = payload(json!({"name": "garlic", "price": "2.59"}))
            .into_item()
            .unwrap();
        assert_eq!(item.price, Price::Text("2.59".into()));
    }

    #[test]
    fn test_falsy_values_rejected() {
        let bodies = [
            json!({"name": "Beer", "price": null}),
            json!({"name": "Beer", "price": 0}),
            json!({"name": "Beer", "price": 0.0}),
            json!({"name": "Beer", "price": ""}),
            json!({"name": "Beer", "price": false}),
            json!({"name": "Beer"}),
            json!({"name": "", "price": 1}),
            json!({"name": null, "price": 1}),
            json!({"price": 1}),
            json!({}),
        ];

        for body in bodies {
            assert_eq!(
                payload(body.clone()).into_item(),
                Err(ItemError::Validation),
                "body {body} should be rejected"
            );
        }
    }

    #[test]
    fn test_ill_typed_values_rejected() {
        let bodies = [
            json!({"name": 42, "price": 1}),
            json!({"name": "Beer", "price": "free"}),
            json!({"name": "Beer", "price": [1]}),
            json!({"name": "Beer", "price": {"amount": 1}}),
        ];

        for body in bodies {
            assert_eq!(payload(body).into_item(), Err(ItemError::Validation));
        }
    }

    #[test]
    fn test_non_object_bodies_rejected() {
        let bodies = [
            json!(["Beer", 12.99]),
            json!([]),
            json!("Beer"),
            json!(12.99),
            Value::Null,
        ];

        for body in bodies {
            assert_eq!(
                ItemPayload::from_json(body.clone()).map(|_| ()),
                Err(ItemError::Validation),
                "body {body} should be rejected"
            );
        }
    }

    #[test]
    fn test_zero_string_is_truthy() {
        let item = payload(json!({"name": "water", "price": "0"}))
            .into_item()
            .unwrap();
        assert_eq!(item.price, Price::Text("0".into()));
    }
}
