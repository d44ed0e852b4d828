//! Type definitions for JSON Pointer paths and mutation flags.

use std::ops::{BitOr, BitOrAssign};

/// A step in a JSON Pointer path.
///
/// Either an object key or a decimal array index; the append sentinel `-`
/// is carried verbatim.
pub type PathStep = String;

/// A parsed JSON Pointer path.
pub type Path = Vec<PathStep>;

/// Bit-set of mutation policy flags for [`add`](crate::add).
///
/// Flags combine with `|` and default to none set.
///
/// # Example
///
/// ```
/// use json_splice_pointer::PointerFlags;
///
/// let flags = PointerFlags::STRICT_MODE | PointerFlags::TOLERATE_ASSOCIATIVE_ARRAYS;
/// assert!(flags.contains(PointerFlags::STRICT_MODE));
/// assert!(!PointerFlags::NONE.contains(PointerFlags::STRICT_MODE));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerFlags(u8);

impl PointerFlags {
    /// No policy bits set.
    pub const NONE: PointerFlags = PointerFlags(0);

    /// Refuse auto-vivification: a missing intermediate object key, or an
    /// empty array standing in for an object, is an error instead of being
    /// created or coerced.
    pub const STRICT_MODE: PointerFlags = PointerFlags(1);

    /// Allow a non-empty array to act as an object surrogate for key
    /// lookups; the array is rekeyed by decimal index and converted to an
    /// object before the key operation.
    pub const TOLERATE_ASSOCIATIVE_ARRAYS: PointerFlags = PointerFlags(1 << 1);

    /// Returns true if every bit of `other` is set in `self`.
    pub fn contains(self, other: PointerFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Raw bit value.
    pub fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for PointerFlags {
    type Output = PointerFlags;

    fn bitor(self, rhs: PointerFlags) -> PointerFlags {
        PointerFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for PointerFlags {
    fn bitor_assign(&mut self, rhs: PointerFlags) {
        self.0 |= rhs.0;
    }
}
