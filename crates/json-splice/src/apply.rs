//! Patch execution: composes the pointer primitives per operation.

use serde_json::Value;

use json_splice_pointer::{self as pointer, is_child, PointerError, PointerFlags};

use crate::diff::diff_count;
use crate::types::{FailureKind, Op, Patch, PathFailure, PointerField};

type OpError = (PointerField, FailureKind);

fn at_path(err: PointerError) -> OpError {
    (PointerField::Path, FailureKind::Pointer(err))
}

fn at_from(err: PointerError) -> OpError {
    (PointerField::From, FailureKind::Pointer(err))
}

// Execute one operation against the tree.
fn apply_op(doc: &mut Value, op: &Op, flags: PointerFlags) -> Result<(), OpError> {
    match op {
        Op::Add { path, value } => {
            pointer::add(doc, path, value.clone(), flags).map_err(at_path)
        }
        Op::Remove { path } => {
            pointer::remove(doc, path).map_err(at_path)?;
            Ok(())
        }
        Op::Replace { path, value } => {
            // Existence check first: replace never auto-creates.
            pointer::get(doc, path).map_err(at_path)?;
            pointer::remove(doc, path).map_err(at_path)?;
            pointer::add(doc, path, value.clone(), flags).map_err(at_path)
        }
        Op::Copy { path, from } => {
            let value = pointer::get(doc, from).map_err(at_from)?.clone();
            pointer::add(doc, path, value, flags).map_err(at_path)
        }
        Op::Move { path, from } => {
            // A node cannot move into its own descendant: the destination
            // subtree is gone once `from` is removed.
            if is_child(from, path) {
                return Err(at_path(PointerError::IllegalArgument));
            }
            let value = pointer::remove(doc, from).map_err(at_from)?;
            pointer::add(doc, path, value, flags).map_err(at_path)
        }
        Op::Test { path, value } => {
            let actual = pointer::get(doc, path).map_err(at_path)?;
            if diff_count(value, actual, true) != 0 {
                return Err((PointerField::Path, FailureKind::TestFailed));
            }
            Ok(())
        }
    }
}

impl Patch {
    /// Apply every operation in order, aborting on the first failure.
    ///
    /// Mutations performed by operations that completed before the failure
    /// are kept; there is no rollback.
    pub fn apply(&self, doc: &mut Value) -> Result<(), PathFailure> {
        for (index, op) in self.ops().iter().enumerate() {
            apply_op(doc, op, self.flags())
                .map_err(|(field, source)| PathFailure { index, field, source })?;
        }
        Ok(())
    }

    /// Apply every operation in order, capturing failures instead of
    /// aborting.
    ///
    /// Operations after a failed one still run and still mutate the tree.
    /// Failures come back in operation order; an empty vec means the whole
    /// patch applied.
    pub fn apply_collecting(&self, doc: &mut Value) -> Vec<PathFailure> {
        let mut failures = Vec::new();
        for (index, op) in self.ops().iter().enumerate() {
            if let Err((field, source)) = apply_op(doc, op, self.flags()) {
                failures.push(PathFailure { index, field, source });
            }
        }
        failures
    }
}
