//! JSON Pointer (RFC 6901) utilities and value-tree mutation primitives.
//!
//! This crate implements helper functions for
//! [JSON Pointer (RFC 6901)](https://tools.ietf.org/html/rfc6901) together
//! with the three primitives a patch layer composes: [`get`], [`add`] and
//! [`remove`]. Traversal error semantics are identical across the read and
//! write paths.
//!
//! # Example
//!
//! ```
//! use json_splice_pointer::{parse_json_pointer, get, add, PointerFlags};
//! use serde_json::json;
//!
//! let mut doc = json!({"foo": {"bar": 42}});
//!
//! let path = parse_json_pointer("/foo/bar");
//! assert_eq!(get(&doc, &path), Ok(&json!(42)));
//!
//! let path = parse_json_pointer("/foo/baz");
//! add(&mut doc, &path, json!(true), PointerFlags::NONE).unwrap();
//! assert_eq!(doc, json!({"foo": {"bar": 42, "baz": true}}));
//! ```

use thiserror::Error;

pub mod types;
pub use types::{Path, PathStep, PointerFlags};

pub mod validate;
pub use validate::{validate_json_pointer, ValidationError};

mod get;
pub use get::get;

mod mutate;
pub use mutate::{add, remove};

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// # Example
///
/// ```
/// use json_splice_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// assert_eq!(unescape_component("no-escapes"), "no-escapes");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~1 must be replaced before ~0
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer path component.
///
/// Per RFC 6901, `/` is replaced with `~1` and `~` is replaced with `~0`.
///
/// # Example
///
/// ```
/// use json_splice_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~ must be escaped before /
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse a JSON Pointer string into path components.
///
/// The empty string denotes the whole document and returns an empty vec;
/// otherwise the leading `/` is stripped, the remainder is split on `/`,
/// and each component is unescaped.
///
/// # Example
///
/// ```
/// use json_splice_pointer::parse_json_pointer;
///
/// assert_eq!(parse_json_pointer(""), Vec::<String>::new());
/// assert_eq!(parse_json_pointer("/"), vec![""]);
/// assert_eq!(parse_json_pointer("/foo/bar"), vec!["foo", "bar"]);
/// assert_eq!(parse_json_pointer("/a~0b/c~1d"), vec!["a~b", "c/d"]);
/// ```
pub fn parse_json_pointer(pointer: &str) -> Path {
    if pointer.is_empty() {
        return Vec::new();
    }
    pointer[1..].split('/').map(unescape_component).collect()
}

/// Format path components into a JSON Pointer string.
///
/// Returns an empty string for the root path (empty components).
///
/// # Example
///
/// ```
/// use json_splice_pointer::format_json_pointer;
///
/// assert_eq!(format_json_pointer(&[]), "");
/// assert_eq!(format_json_pointer(&["a~b".to_string(), "c/d".to_string()]), "/a~0b/c~1d");
/// ```
pub fn format_json_pointer(path: &[PathStep]) -> String {
    if path.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Check if `parent` path contains the `child` path.
pub fn is_child(parent: &[PathStep], child: &[PathStep]) -> bool {
    if parent.len() >= child.len() {
        return false;
    }
    for i in 0..parent.len() {
        if parent[i] != child[i] {
            return false;
        }
    }
    true
}

/// Check if a string represents a valid non-negative integer array index.
///
/// Leading zeros are rejected, so `"0"` is valid but `"01"` is not.
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

// The `-` sentinel and every token `is_valid_index` rejects are out of
// bounds on the read path and for concrete array addressing.
pub(crate) fn parse_index(step: &str) -> Result<usize, PointerError> {
    if !is_valid_index(step) {
        return Err(PointerError::IndexOutOfBounds);
    }
    step.parse().map_err(|_| PointerError::IndexOutOfBounds)
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    #[error("POINTER_NOT_FOUND")]
    NotFound,
    #[error("INDEX_OUT_OF_BOUNDS")]
    IndexOutOfBounds,
    #[error("ILLEGAL_INVOCATION")]
    IllegalInvocation,
    #[error("ILLEGAL_ARGUMENT")]
    IllegalArgument,
}

impl PointerError {
    /// Stable machine-readable code, identical to the display form.
    pub fn code(&self) -> &'static str {
        match self {
            PointerError::NotFound => "POINTER_NOT_FOUND",
            PointerError::IndexOutOfBounds => "INDEX_OUT_OF_BOUNDS",
            PointerError::IllegalInvocation => "ILLEGAL_INVOCATION",
            PointerError::IllegalArgument => "ILLEGAL_ARGUMENT",
        }
    }
}
