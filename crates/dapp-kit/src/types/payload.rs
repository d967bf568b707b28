//! Wire payloads sent to contracts.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::error::PayloadError;

/// Parameters handed to a contract function.
pub type Params = Value;

/// A JSON record with exactly one top-level key naming the action variant.
///
/// Serializes as `{ "<variant>": <body> }`, which is the literal structure
/// that crosses the backend boundary.
///
/// # Example
///
/// ```
/// use dapp_kit::WirePayload;
/// use serde_json::json;
///
/// let payload = WirePayload::new("transfer", json!({ "recipient": "addr1", "amount": "10" }));
/// assert_eq!(payload.variant(), "transfer");
/// assert_eq!(
///     payload.to_value(),
///     json!({ "transfer": { "recipient": "addr1", "amount": "10" } })
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WirePayload {
    variant: String,
    body: Value,
}

impl WirePayload {
    /// Create a payload from a variant name and its body.
    pub fn new(variant: impl Into<String>, body: impl Into<Value>) -> Self {
        Self {
            variant: variant.into(),
            body: body.into(),
        }
    }

    /// Create a payload with an empty object body, e.g. `{ "increment": {} }`.
    pub fn empty(variant: impl Into<String>) -> Self {
        Self::new(variant, Value::Object(Map::new()))
    }

    /// Create a payload whose body is the call parameters, or `{}` when absent.
    pub fn from_params(variant: impl Into<String>, params: Option<&Params>) -> Self {
        match params {
            Some(params) => Self::new(variant, params.clone()),
            None => Self::empty(variant),
        }
    }

    /// The action variant (the single top-level key).
    pub fn variant(&self) -> &str {
        &self.variant
    }

    /// The variant body.
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Convert into the `{ variant: body }` JSON value.
    pub fn to_value(&self) -> Value {
        let mut map = Map::with_capacity(1);
        map.insert(self.variant.clone(), self.body.clone());
        Value::Object(map)
    }

    /// Serialize to compact JSON bytes.
    pub fn to_vec(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

impl TryFrom<Value> for WirePayload {
    type Error = PayloadError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let map = match value {
            Value::Object(map) => map,
            Value::Null => return Err(PayloadError::NotAnObject("null")),
            Value::Bool(_) => return Err(PayloadError::NotAnObject("boolean")),
            Value::Number(_) => return Err(PayloadError::NotAnObject("number")),
            Value::String(_) => return Err(PayloadError::NotAnObject("string")),
            Value::Array(_) => return Err(PayloadError::NotAnObject("array")),
        };

        if map.len() != 1 {
            return Err(PayloadError::VariantCount(map.len()));
        }

        let (variant, body) = map
            .into_iter()
            .next()
            .ok_or(PayloadError::VariantCount(0))?;
        Ok(Self { variant, body })
    }
}

impl From<WirePayload> for Value {
    fn from(payload: WirePayload) -> Self {
        let mut map = Map::with_capacity(1);
        map.insert(payload.variant, payload.body);
        Value::Object(map)
    }
}

impl Serialize for WirePayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.variant, &self.body)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for WirePayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        WirePayload::try_from(value).map_err(de::Error::custom)
    }
}

impl fmt::Display for WirePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}
