//! Typed conversion of JSON values.
//!
//! Conversion delegates to `serde_json`; the options only pre-transform a
//! copy of the tree (key naming, null handling) and bound its depth.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ConvertError;

/// Default nesting depth accepted before conversion.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Key naming transform applied recursively to object keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamingConvention {
    /// Keys pass through unchanged.
    #[default]
    Preserve,
    /// Keys become `snake_case`.
    SnakeCase,
    /// Keys become `camelCase`.
    CamelCase,
}

/// Treatment of null-valued object properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullHandling {
    /// Null properties pass through unchanged.
    #[default]
    Preserve,
    /// Null properties are dropped so field defaults apply.
    Strip,
}

/// Options for [`convert_value`] and [`convert_document`].
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Key naming transform.
    pub naming: NamingConvention,
    /// Null property treatment.
    pub nulls: NullHandling,
    /// Maximum accepted nesting depth; a flat object or array has depth 1.
    pub max_depth: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            naming: NamingConvention::Preserve,
            nulls: NullHandling::Preserve,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Converts a JSON value into `T`.
///
/// # Errors
///
/// Returns [`ConvertError::DepthExceeded`] when the value nests deeper than
/// `options.max_depth`. Deserialization failures propagate unchanged as
/// [`ConvertError::Deserialize`].
///
/// # Example
///
/// ```
/// use json_amend::{convert_value, ConvertOptions};
/// use serde_json::json;
///
/// let pair: (String, u32) = convert_value(&json!(["a", 2]), &ConvertOptions::default()).unwrap();
/// assert_eq!(pair, ("a".to_string(), 2));
/// ```
pub fn convert_value<T: DeserializeOwned>(
    node: &Value,
    options: &ConvertOptions,
) -> Result<T, ConvertError> {
    check_depth(node, options.max_depth)?;
    let prepared = apply_options(node, options);
    Ok(serde_json::from_value(prepared)?)
}

/// Converts a parsed document root into `T`.
///
/// The document-boundary variant of [`convert_value`].
///
/// # Errors
///
/// Returns [`ConvertError::NullDocument`] when the root is `null`; otherwise
/// the same errors as [`convert_value`].
pub fn convert_document<T: DeserializeOwned>(
    root: &Value,
    options: &ConvertOptions,
) -> Result<T, ConvertError> {
    if root.is_null() {
        return Err(ConvertError::NullDocument);
    }
    convert_value(root, options)
}

fn check_depth(node: &Value, max_depth: usize) -> Result<(), ConvertError> {
    if depth_ok(node, max_depth) {
        Ok(())
    } else {
        Err(ConvertError::DepthExceeded(max_depth))
    }
}

fn depth_ok(node: &Value, remaining: usize) -> bool {
    match node {
        Value::Array(items) => remaining > 0 && items.iter().all(|v| depth_ok(v, remaining - 1)),
        Value::Object(map) => remaining > 0 && map.values().all(|v| depth_ok(v, remaining - 1)),
        _ => true,
    }
}

fn apply_options(node: &Value, options: &ConvertOptions) -> Value {
    match node {
        Value::Array(items) => {
            Value::Array(items.iter().map(|v| apply_options(v, options)).collect())
        }
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, value) in map {
                if options.nulls == NullHandling::Strip && value.is_null() {
                    continue;
                }
                out.insert(rename_key(key, options.naming), apply_options(value, options));
            }
            Value::Object(out)
        }
        other => other.clone(),
    }
}

fn rename_key(key: &str, naming: NamingConvention) -> String {
    match naming {
        NamingConvention::Preserve => key.to_string(),
        NamingConvention::SnakeCase => to_snake_case(key),
        NamingConvention::CamelCase => to_camel_case(key),
    }
}

fn to_snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_lower = false;
    for ch in key.chars() {
        if ch == '-' || ch == '_' {
            out.push('_');
            prev_lower = false;
        } else if ch.is_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
            prev_lower = false;
        } else {
            prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
            out.push(ch);
        }
    }
    out
}

fn to_camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for ch in key.chars() {
        if ch == '_' || ch == '-' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn snake_case_matrix() {
        let cases = [
            ("firstName", "first_name"),
            ("first_name", "first_name"),
            ("first-name", "first_name"),
            ("HTTPCode", "httpcode"),
            ("a1B", "a1_b"),
            ("", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(to_snake_case(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn camel_case_matrix() {
        let cases = [
            ("first_name", "firstName"),
            ("first-name", "firstName"),
            ("firstName", "firstName"),
            ("_leading", "leading"),
            ("", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(to_camel_case(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn depth_counts_containers_only() {
        assert!(depth_ok(&json!("scalar"), 0));
        assert!(depth_ok(&json!({"a": 1}), 1));
        assert!(!depth_ok(&json!({"a": {"b": 1}}), 1));
        assert!(depth_ok(&json!({"a": {"b": 1}}), 2));
        assert!(!depth_ok(&json!([[[0]]]), 2));
    }

    #[test]
    fn strip_nulls_recurses() {
        let node = json!({"a": null, "b": {"c": null, "d": 1}, "e": [null]});
        let options = ConvertOptions {
            nulls: NullHandling::Strip,
            ..ConvertOptions::default()
        };
        // Array elements are positional; only object properties are dropped.
        assert_eq!(
            apply_options(&node, &options),
            json!({"b": {"d": 1}, "e": [null]})
        );
    }
}
