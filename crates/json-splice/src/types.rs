//! Core types for the patch engine.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

pub use json_splice_pointer::{Path, PathStep, PointerError, PointerFlags};

// ── Operations ────────────────────────────────────────────────────────────

/// A single RFC 6902 edit operation.
///
/// The enum is closed: the apply engine matches it exhaustively, so a new
/// verb cannot be introduced without handling it everywhere.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Add { path: Path, value: Value },
    Remove { path: Path },
    Replace { path: Path, value: Value },
    Copy { path: Path, from: Path },
    Move { path: Path, from: Path },
    Test { path: Path, value: Value },
}

impl Op {
    /// The wire name of the operation.
    pub fn op_name(&self) -> &'static str {
        match self {
            Op::Add { .. } => "add",
            Op::Remove { .. } => "remove",
            Op::Replace { .. } => "replace",
            Op::Copy { .. } => "copy",
            Op::Move { .. } => "move",
            Op::Test { .. } => "test",
        }
    }

    /// Target path of the operation.
    pub fn path(&self) -> &Path {
        match self {
            Op::Add { path, .. } => path,
            Op::Remove { path } => path,
            Op::Replace { path, .. } => path,
            Op::Copy { path, .. } => path,
            Op::Move { path, .. } => path,
            Op::Test { path, .. } => path,
        }
    }

    /// Source pointer, for `copy` and `move` only.
    pub fn from_path(&self) -> Option<&Path> {
        match self {
            Op::Copy { from, .. } | Op::Move { from, .. } => Some(from),
            _ => None,
        }
    }
}

// ── Patch ─────────────────────────────────────────────────────────────────

/// An ordered list of operations plus the mutation flags applied with them.
///
/// A patch is built once, via [`Patch::from_json`] or [`Patch::push`], and
/// may then be applied any number of times against different trees. It
/// holds no reference to any tree it has been applied to. The flags are
/// fixed at construction and govern every operation of one apply call
/// uniformly.
#[derive(Debug, Clone, Default)]
pub struct Patch {
    ops: Vec<Op>,
    flags: PointerFlags,
}

impl Patch {
    /// An empty patch carrying the given mutation flags.
    pub fn new(flags: PointerFlags) -> Self {
        Patch {
            ops: Vec::new(),
            flags,
        }
    }

    /// Import an untyped operation list.
    ///
    /// Aborts on the first malformed record; there is no partial import.
    pub fn from_json(doc: &Value, flags: PointerFlags) -> Result<Self, ImportError> {
        Ok(Patch {
            ops: crate::codec::json::from_json_patch(doc)?,
            flags,
        })
    }

    /// Export back to the untyped record form.
    pub fn to_json(&self) -> Value {
        crate::codec::json::to_json_patch(&self.ops)
    }

    /// Append an operation.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn flags(&self) -> PointerFlags {
        self.flags
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

// ── Import errors ─────────────────────────────────────────────────────────

/// Error converting an untyped record list into typed operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// The patch document is not an array, or an entry is not an object.
    #[error("NOT_AN_OPERATION")]
    NotAnOperation,
    /// A required field is absent. An explicit `null` counts as present.
    #[error("MISSING_FIELD: {0}")]
    MissingField(&'static str),
    /// A required field is present but has the wrong JSON type.
    #[error("INVALID_FIELD: {0}")]
    InvalidField(&'static str),
    /// The `op` string is not one of the six recognized verbs.
    #[error("UNKNOWN_OPERATION: {0}")]
    UnknownOperation(String),
}

// ── Apply failures ────────────────────────────────────────────────────────

/// Which pointer field of an operation a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerField {
    Path,
    From,
}

impl fmt::Display for PointerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PointerField::Path => "path",
            PointerField::From => "from",
        })
    }
}

/// The underlying cause of a failed operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FailureKind {
    #[error(transparent)]
    Pointer(#[from] PointerError),
    #[error("TEST_FAILED")]
    TestFailed,
}

impl FailureKind {
    /// Stable machine-readable code of the failure.
    pub fn code(&self) -> &'static str {
        match self {
            FailureKind::Pointer(err) => err.code(),
            FailureKind::TestFailed => "TEST_FAILED",
        }
    }
}

/// A failed operation, located by its position in the patch and the pointer
/// field that caused the failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("error in operation [index = {index}] ({field}: {source})")]
pub struct PathFailure {
    /// Position of the failing operation within the patch.
    pub index: usize,
    /// Which pointer field of the operation caused the failure.
    pub field: PointerField,
    #[source]
    pub source: FailureKind,
}

impl PathFailure {
    /// Stable machine-readable code of the underlying failure.
    pub fn code(&self) -> &'static str {
        self.source.code()
    }
}
