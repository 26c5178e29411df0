//! `Scalar` — the recognized scalar kinds for property emission.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use uuid::Uuid;

/// A recognized scalar kind with a fixed JSON encoding.
///
/// Dates and unique identifiers encode as strings in their default textual
/// form (RFC 3339 and hyphenated, respectively); everything else encodes as
/// the matching JSON primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// String value.
    Str(String),
    /// Boolean value.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Floating-point number. Non-finite values encode as `null`.
    Float(f64),
    /// Point in time, encoded as an RFC 3339 string.
    DateTime(DateTime<Utc>),
    /// Unique identifier, encoded as a hyphenated string.
    Uuid(Uuid),
}

impl Scalar {
    /// Encodes the scalar as a JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            Scalar::Str(s) => Value::String(s.clone()),
            Scalar::Bool(b) => Value::Bool(*b),
            Scalar::Int(i) => Value::from(*i),
            Scalar::UInt(u) => Value::from(*u),
            Scalar::Float(f) => Value::from(*f),
            Scalar::DateTime(dt) => {
                Value::String(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Scalar::Uuid(id) => Value::String(id.as_hyphenated().to_string()),
        }
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Str(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Str(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(i64::from(v))
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<u32> for Scalar {
    fn from(v: u32) -> Self {
        Scalar::Int(i64::from(v))
    }
}

impl From<u64> for Scalar {
    fn from(v: u64) -> Self {
        Scalar::UInt(v)
    }
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Scalar::Float(f64::from(v))
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(v: DateTime<Utc>) -> Self {
        Scalar::DateTime(v)
    }
}

impl From<Uuid> for Scalar {
    fn from(v: Uuid) -> Self {
        Scalar::Uuid(v)
    }
}

/// A flat record emitted as a nested object of scalar fields.
///
/// Each implementation lists its named fields in emission order. Deeper
/// structure goes through a pre-built value instead.
pub trait Record {
    /// The record's named fields, in emission order.
    fn fields(&self) -> Vec<(String, Scalar)>;
}

impl Record for Vec<(String, Scalar)> {
    fn fields(&self) -> Vec<(String, Scalar)> {
        self.clone()
    }
}

impl Record for BTreeMap<String, Scalar> {
    fn fields(&self) -> Vec<(String, Scalar)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}
