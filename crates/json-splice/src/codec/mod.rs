//! Codecs for the untyped operation record form.

pub mod json;
