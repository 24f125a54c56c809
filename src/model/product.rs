//! The product record and its create/update DTOs.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
//! - Creation parameters ([`ProductCreate`](crate::model::ProductCreate))
//! - Update parameters ([`ProductUpdate`](crate::model::ProductUpdate))

use crate::product_actor::ProductError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product id as it appears in a request path.
///
/// Paths are read the way a browser's `parseInt` reads a string: leading whitespace and
/// a sign are skipped, then the leading run of digits is taken and the rest ignored.
/// A `0x` prefix switches to hexadecimal. A path with no leading digits names no product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathId {
    Id(ProductId),
    /// Matches nothing. Holds the text shown in the not-found message.
    Unmatched(String),
}

impl PathId {
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim_start();
        let (negative, s) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (radix, s) = match s.get(..2) {
            Some("0x") | Some("0X") => (16, &s[2..]),
            _ => (10, s),
        };

        let end = s
            .find(|c: char| !c.is_digit(radix))
            .unwrap_or(s.len());
        let digits = &s[..end];
        if digits.is_empty() {
            return PathId::Unmatched("NaN".to_string());
        }

        match i64::from_str_radix(digits, radix) {
            Ok(n) => PathId::Id(ProductId(if negative { -n } else { n })),
            // Too large to be any stored id.
            Err(_) => PathId::Unmatched(format!("{}{digits}", if negative { "-" } else { "" })),
        }
    }
}

impl Display for PathId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathId::Id(id) => write!(f, "{id}"),
            PathId::Unmatched(text) => f.write_str(text),
        }
    }
}

/// A stored product.
///
/// Only `id`, `name` and `price` are known to the service. Every other field the client
/// sent is kept in `extra` and written back out unchanged, in the order it arrived.
///
/// `name` and `price` are raw JSON so that a hand-edited file still loads when a record
/// lacks one of them or holds a non-string name. A missing one reads as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub price: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the actor)
    /// * `name` - Product name
    /// * `price` - Product price, stored as sent
    /// * `extra` - Any other fields
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Value,
        extra: Map<String, Value>,
    ) -> Self {
        Self {
            id,
            name: Value::String(name.into()),
            price,
            extra,
        }
    }
}

/// DTO for Product creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCreate {
    pub name: String,
    pub price: Value,
    pub extra: Map<String, Value>,
}

impl TryFrom<Value> for ProductCreate {
    type Error = ProductError;

    /// Accepts a JSON object with a non-empty string `name` and a truthy `price`.
    /// A client-supplied `id` is discarded.
    fn try_from(body: Value) -> Result<Self, Self::Error> {
        let Value::Object(mut fields) = body else {
            return Err(ProductError::MissingRequiredFields);
        };
        fields.remove("id");

        let name = match fields.remove("name") {
            Some(Value::String(name)) if !name.is_empty() => name,
            _ => return Err(ProductError::MissingRequiredFields),
        };
        let price = match fields.remove("price") {
            Some(price) if is_truthy(&price) => price,
            _ => return Err(ProductError::MissingRequiredFields),
        };

        Ok(Self {
            name,
            price,
            extra: fields,
        })
    }
}

/// DTO for Product updates. Absent fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<Value>,
    pub extra: Map<String, Value>,
}

impl TryFrom<Value> for ProductUpdate {
    type Error = ProductError;

    /// Accepts any JSON object. `id` is ignored; a `name` that is not a string is rejected.
    fn try_from(body: Value) -> Result<Self, Self::Error> {
        let Value::Object(mut fields) = body else {
            return Err(ProductError::InvalidJson);
        };
        fields.remove("id");

        let name = match fields.remove("name") {
            None => None,
            Some(Value::String(name)) => Some(name),
            Some(_) => return Err(ProductError::InvalidJson),
        };
        let price = fields.remove("price");

        Ok(Self {
            name,
            price,
            extra: fields,
        })
    }
}

/// `false` for the values a JavaScript `if` would skip: null, false, 0 and "".
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
