//! `ObjEdit` — call-scoped edit set applied by [`rebuild`].

use serde_json::{Map, Value};

use crate::error::AmendError;
use crate::kind::ValueKind;

/// Pending additions and removals for one [`rebuild`] call.
///
/// Handed to the rebuild closure, which may queue new properties (an
/// ordered map) and mark source property names for removal. Discarded when
/// the call returns.
#[derive(Debug, Default)]
pub struct ObjEdit {
    additions: Map<String, Value>,
    removals: Vec<String>,
}

impl ObjEdit {
    fn new() -> Self {
        Self::default()
    }

    /// Queues a new property. Nested objects and arrays are allowed.
    ///
    /// An added property shadows a source property with the same name and
    /// is never subject to the removal filter.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.additions.insert(name.into(), value.into());
    }

    /// Queues a new property with a `null` value.
    pub fn insert_null(&mut self, name: impl Into<String>) {
        self.additions.insert(name.into(), Value::Null);
    }

    /// Marks a source property name for removal.
    ///
    /// Marking a name the source does not have is a no-op.
    pub fn remove(&mut self, name: impl Into<String>) {
        self.removals.push(name.into());
    }

    /// Marks many source property names for removal.
    pub fn remove_all<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.removals.push(name.into());
        }
    }
}

/// Produces a new object from `source` with the closure's edits applied.
///
/// Added properties come first, in insertion order, followed by the source
/// properties in their original order, minus removed names and names
/// shadowed by an addition. The source is never altered; with an empty edit
/// the result is structurally equal to the source.
///
/// # Errors
///
/// Returns [`AmendError::NotAnObject`] when `source` is not an object.
///
/// # Example
///
/// ```
/// use json_amend::rebuild;
/// use serde_json::json;
///
/// let source = json!({"a": 1, "b": 2});
/// let out = rebuild(&source, |edit| {
///     edit.insert("z", true);
///     edit.remove("b");
/// }).unwrap();
/// assert_eq!(out, json!({"z": true, "a": 1}));
/// ```
pub fn rebuild(source: &Value, edit: impl FnOnce(&mut ObjEdit)) -> Result<Value, AmendError> {
    let map = source
        .as_object()
        .ok_or(AmendError::NotAnObject(ValueKind::of(source)))?;
    let mut pending = ObjEdit::new();
    edit(&mut pending);
    let ObjEdit {
        additions,
        removals,
    } = pending;
    let mut out = additions;
    for (name, value) in map {
        if removals.iter().any(|r| r == name) || out.contains_key(name) {
            continue;
        }
        out.insert(name.clone(), value.clone());
    }
    Ok(Value::Object(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_edit_is_identity() {
        let source = json!({"a": 1, "b": [true, null], "c": {"d": "x"}});
        let out = rebuild(&source, |_| {}).expect("rebuild ok");
        assert_eq!(out, source);
    }

    #[test]
    fn source_is_untouched() {
        let source = json!({"a": 1});
        let _ = rebuild(&source, |edit| {
            edit.insert("b", 2);
            edit.remove("a");
        })
        .expect("rebuild ok");
        assert_eq!(source, json!({"a": 1}));
    }

    #[test]
    fn non_object_sources_rejected() {
        let cases = [
            (json!(null), ValueKind::Null),
            (json!(false), ValueKind::Bool),
            (json!(3), ValueKind::Number),
            (json!("s"), ValueKind::String),
            (json!([1, 2, 3]), ValueKind::Array),
        ];
        for (source, kind) in cases {
            let err = rebuild(&source, |_| {}).expect_err("must reject");
            assert_eq!(err, AmendError::NotAnObject(kind));
        }
    }

    #[test]
    fn addition_shadows_same_named_original() {
        let source = json!({"a": 1, "b": 2});
        let out = rebuild(&source, |edit| edit.insert("b", "new")).expect("rebuild ok");
        assert_eq!(out, json!({"b": "new", "a": 1}));
    }

    #[test]
    fn addition_survives_removal_of_same_name() {
        let source = json!({"a": 1});
        let out = rebuild(&source, |edit| {
            edit.insert("a", 2);
            edit.remove("a");
        })
        .expect("rebuild ok");
        assert_eq!(out, json!({"a": 2}));
    }

    #[test]
    fn nested_additions_kept_verbatim() {
        let source = json!({});
        let out = rebuild(&source, |edit| {
            edit.insert("meta", json!({"tags": ["x", "y"], "depth": {"n": 1}}));
        })
        .expect("rebuild ok");
        assert_eq!(out, json!({"meta": {"tags": ["x", "y"], "depth": {"n": 1}}}));
    }
}
