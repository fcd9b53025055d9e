//! Catalog wire DTOs for the REST collaborator.
//!
//! DESIGN
//! ======
//! The catalog server is an external JSON store, so decoding is lenient:
//! numeric fields accept numbers or numeric strings, and every field but `id`
//! tolerates `null` or absence by falling back to zero or empty. One malformed
//! record must not fail the whole list. Values are taken as stored; negative
//! prices or stock from the server are rendered unchanged. Encoding always
//! emits canonical JSON numbers.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned product identifier.
pub type ProductId = i64;

/// A catalog entry as stored by the REST server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier; assigned client-side on create.
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub id: ProductId,
    /// Display name.
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub name: String,
    /// Unit price in the store currency.
    #[serde(default, deserialize_with = "deserialize_f64_or_null")]
    pub price: f64,
    /// Units on hand.
    #[serde(default, deserialize_with = "deserialize_i64_or_null")]
    pub stock: i64,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub description: String,
}

impl Product {
    /// Attach an identifier to a draft.
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            stock: draft.stock,
            category: draft.category,
            description: draft.description,
        }
    }
}

/// Product payload without an identifier, as read from the form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub category: String,
    pub description: String,
}

/// Next client-side id: one past the highest id present, or 1 for an empty list.
pub fn next_product_id(products: &[Product]) -> ProductId {
    products.iter().map(|p| p.id).max().map_or(1, |max| max.saturating_add(1))
}

fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected integer string, got {text:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}

fn deserialize_f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(float) if float.is_finite() => Ok(float),
        _ => Err(D::Error::custom("expected decimal number")),
    }
}

fn deserialize_i64_or_null<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(0),
        value => deserialize_i64_lenient(value).map_err(D::Error::custom),
    }
}

fn deserialize_f64_or_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(0.0),
        value => deserialize_f64_lenient(value).map_err(D::Error::custom),
    }
}
