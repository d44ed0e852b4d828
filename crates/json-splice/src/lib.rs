//! json-splice: apply RFC 6902 JSON Patch documents to JSON value trees.
//!
//! Pointer navigation and mutation live in the `json-splice-pointer` crate;
//! this crate models the six patch verbs, converts them to and from their
//! untyped record form, and executes them in order against a mutable
//! [`serde_json::Value`], either failing fast or collecting failures.
//!
//! # Operations
//!
//! All standard RFC 6902 operations are supported:
//! `add`, `remove`, `replace`, `copy`, `move`, `test`.
//!
//! # Example
//!
//! ```
//! use json_splice::{Patch, PointerFlags};
//! use serde_json::json;
//!
//! let mut doc = json!({"a": [1, 2, 3]});
//! let patch = Patch::from_json(
//!     &json!([{"op": "add", "path": "/a/-", "value": 4}]),
//!     PointerFlags::NONE,
//! )
//! .unwrap();
//! patch.apply(&mut doc).unwrap();
//! assert_eq!(doc, json!({"a": [1, 2, 3, 4]}));
//! ```
//!
//! The tree is exclusively owned by the caller and mutated in place: a
//! failed apply leaves every mutation made by the operations that completed
//! before the failure. There is no rollback.

pub mod types;
pub mod codec;
pub mod diff;
pub mod validate;

mod apply;

pub use codec::json::{from_json, from_json_patch, to_json, to_json_patch};
pub use diff::diff_count;
pub use types::{
    FailureKind, ImportError, Op, Patch, Path, PathFailure, PathStep, PointerError, PointerField,
    PointerFlags,
};
pub use validate::{validate_operation, validate_operations, ValidationError};
