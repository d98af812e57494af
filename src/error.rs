//! Error types shared by both containers.
//!
//! There are only two ways to misuse a fixed-capacity container: ask it to hold more than
//! `N` elements, or address a slot or key that is not occupied. Both are described by
//! [`Violation`]. Checked operations return it inside a `Result`; the reporting operations
//! (`push`, `insert`, `Extend`) hand it to the [`contract`](crate::contract) hook instead.

use thiserror::Error;

/// A broken caller contract.
///
/// `Violation` is `Copy` so it can be passed to the contract hook, logged and returned
/// without any allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Violation {
    /// An insertion was attempted while `len == N`.
    #[error("capacity of {capacity} elements exceeded")]
    CapacityExceeded {
        /// The compile-time capacity of the container.
        capacity: usize,
    },

    /// A position outside `[0, len)` was accessed (or outside `[0, len]` for inserts).
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The offending position.
        index: usize,
        /// The number of occupied slots at the time of the access.
        len: usize,
    },

    /// A checked map lookup did not find the key.
    #[error("key not found")]
    KeyNotFound,
}

/// A failed insertion that hands the refused value back to the caller.
///
/// The container is guaranteed to be unchanged when this is returned.
///
/// ```
/// use fixed_collections::{FixedArray, Violation};
///
/// let mut arr: FixedArray<String, 1> = FixedArray::new();
/// arr.try_push("a".to_string()).unwrap();
///
/// let err = arr.try_push("b".to_string()).unwrap_err();
/// assert_eq!(err.violation(), Violation::CapacityExceeded { capacity: 1 });
/// assert_eq!(err.into_inner(), "b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{violation}")]
pub struct Rejected<T> {
    violation: Violation,
    value: T,
}

impl<T> Rejected<T> {
    pub(crate) fn new(violation: Violation, value: T) -> Self {
        Self { violation, value }
    }

    /// The reason the value was refused.
    pub fn violation(&self) -> Violation {
        self.violation
    }

    /// Borrows the refused value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Takes the refused value back.
    pub fn into_inner(self) -> T {
        self.value
    }

    pub(crate) fn map<U>(self, f: impl FnOnce(T) -> U) -> Rejected<U> {
        Rejected {
            violation: self.violation,
            value: f(self.value),
        }
    }
}
