//! Property add/remove entry points.
//!
//! Each function applies one edit through [`rebuild`] and returns the new
//! object value, leaving the source unchanged.

use serde_json::{Map, Value};

use crate::edit::rebuild;
use crate::error::AmendError;
use crate::scalar::{Record, Scalar};

/// Returns a new object with `name: null` added.
pub fn add_null_property(source: &Value, name: impl Into<String>) -> Result<Value, AmendError> {
    rebuild(source, |edit| edit.insert_null(name))
}

/// Returns a new object with a pre-built value added under `name`.
///
/// The value is copied verbatim, nested content included.
pub fn add_property(
    source: &Value,
    name: impl Into<String>,
    value: &Value,
) -> Result<Value, AmendError> {
    rebuild(source, |edit| edit.insert(name, value.clone()))
}

/// Returns a new object with `name: [s1, s2, ...]` added, preserving the
/// slice order.
pub fn add_string_array_property<S: AsRef<str>>(
    source: &Value,
    name: impl Into<String>,
    items: &[S],
) -> Result<Value, AmendError> {
    let arr: Vec<Value> = items
        .iter()
        .map(|s| Value::String(s.as_ref().to_string()))
        .collect();
    rebuild(source, |edit| edit.insert(name, arr))
}

/// Returns a new object with a scalar added under `name`.
///
/// # Example
///
/// ```
/// use json_amend::add_scalar_property;
/// use serde_json::json;
///
/// let out = add_scalar_property(&json!({}), "count", 3i64).unwrap();
/// assert_eq!(out, json!({"count": 3}));
/// ```
pub fn add_scalar_property(
    source: &Value,
    name: impl Into<String>,
    scalar: impl Into<Scalar>,
) -> Result<Value, AmendError> {
    let value = scalar.into().to_value();
    rebuild(source, |edit| edit.insert(name, value))
}

/// Returns a new object with a record added under `name` as a nested object
/// of scalar fields.
pub fn add_record_property(
    source: &Value,
    name: impl Into<String>,
    record: &impl Record,
) -> Result<Value, AmendError> {
    let mut fields = Map::new();
    for (field, scalar) in record.fields() {
        fields.insert(field, scalar.to_value());
    }
    rebuild(source, |edit| edit.insert(name, Value::Object(fields)))
}

/// Returns a new object without the named property.
///
/// Removing an absent name is a no-op.
pub fn remove_property(source: &Value, name: impl Into<String>) -> Result<Value, AmendError> {
    rebuild(source, |edit| edit.remove(name))
}

/// Returns a new object without any of the named properties.
pub fn remove_properties<S: AsRef<str>>(
    source: &Value,
    names: &[S],
) -> Result<Value, AmendError> {
    rebuild(source, |edit| {
        edit.remove_all(names.iter().map(|n| n.as_ref().to_string()));
    })
}
