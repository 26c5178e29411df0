//! Helpers for amending immutable JSON values.
//!
//! JSON trees are [`serde_json::Value`] with ordered object properties
//! (the `preserve_order` feature). No entry point mutates its input: each
//! produces a new value with one edit applied, or converts a value into a
//! typed struct.
//!
//! # Example
//!
//! ```
//! use json_amend::{add_string_array_property, remove_property};
//! use serde_json::json;
//!
//! let doc = json!({"name": "svc", "internal": true});
//!
//! let doc = add_string_array_property(&doc, "tags", &["a", "b"]).unwrap();
//! let doc = remove_property(&doc, "internal").unwrap();
//! assert_eq!(doc, json!({"tags": ["a", "b"], "name": "svc"}));
//! ```
//!
//! Arbitrary edits go through [`rebuild`], which hands the closure an
//! [`ObjEdit`] collecting additions and removals for one call.

pub mod convert;
pub mod edit;
pub mod error;
pub mod kind;
pub mod ops;
pub mod scalar;

pub use convert::{
    convert_document, convert_value, ConvertOptions, NamingConvention, NullHandling,
    DEFAULT_MAX_DEPTH,
};
pub use edit::{rebuild, ObjEdit};
pub use error::{AmendError, ConvertError};
pub use kind::ValueKind;
pub use ops::{
    add_null_property, add_property, add_record_property, add_scalar_property,
    add_string_array_property, remove_properties, remove_property,
};
pub use scalar::{Record, Scalar};
