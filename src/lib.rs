//! # Fixed Collections
//!
//! Containers with a compile-time capacity that never touch the heap.
//!
//! This crate provides [`FixedArray`], a vector whose elements live inline in `N` slots, and
//! [`FixedSortedMap`], a unique-key map kept sorted in a `FixedArray` of pairs. Both are meant
//! for firmware, interrupt handlers and other code where allocation is forbidden and the
//! worst-case size is known up front.
//!
//! ## Key Features
//!
//! * **No Allocation:** Storage is a `[MaybeUninit<T>; N]` block inside the container itself.
//!   Elements are constructed when they are added and dropped when they are removed, never before.
//! * **`no_std`:** The crate only uses `core`.
//! * **Checked or Reported Overflow:** Every insertion has a `try_*` form returning
//!   [`Rejected`] with the value handed back. The plain forms report through the [`contract`] hook.
//! * **Sorted Lookups:** `FixedSortedMap` uses binary search with any [`Compare`] implementation.
//! * **`const` Construction:** `new()` is a `const fn`, so containers of any capacity can live
//!   in a `static` instead of on a thread stack.
//!
//! ## Capacity Constraints (`N`)
//!
//! * `len() <= N` holds at all times. Nothing ever grows.
//! * `N == 0` is allowed; such a container is permanently empty and full.
//! * The whole `N * size_of::<T>()` block is part of the container. Put large ones in a `static`.
//!
//! ## Examples
//!
//! ### FixedArray
//!
//! ```rust
//! use fixed_collections::FixedArray;
//!
//! let mut arr: FixedArray<i32, 4> = FixedArray::new();
//! arr.push(1);
//! arr.push(3);
//! arr.insert(1, 2);
//!
//! assert_eq!(arr.as_slice(), &[1, 2, 3]);
//! assert_eq!(arr.remaining_capacity(), 1);
//!
//! // Full containers refuse, and hand the value back.
//! arr.push(4);
//! assert_eq!(arr.try_push(5).unwrap_err().into_inner(), 5);
//! ```
//!
//! ### FixedSortedMap
//!
//! ```rust
//! use fixed_collections::FixedSortedMap;
//!
//! let mut map: FixedSortedMap<u32, &str, 3> = FixedSortedMap::new();
//! map.insert(30, "c");
//! map.insert(10, "a");
//! map.insert(20, "b");
//!
//! let keys: Vec<_> = map.keys().copied().collect();
//! assert_eq!(keys, [10, 20, 30]);
//! assert_eq!(map.lower_bound(&15), 1);
//! assert!(map.try_insert(40, "d").is_err());
//! ```
//!
//! ### Contract hook
//!
//! ```rust
//! use fixed_collections::{contract, FixedArray};
//!
//! contract::install(&contract::IGNORE);
//!
//! let mut arr: FixedArray<u8, 1> = FixedArray::new();
//! arr.push(1);
//! arr.push(2); // reported, ignored, array unchanged
//! assert_eq!(arr.as_slice(), &[1]);
//!
//! contract::uninstall();
//! ```
//!
//! ## Cargo Features
//!
//! | Feature    | Effect |
//! |------------|--------|
//! | `log`      | Contract violations are also emitted with `log::error!`. |
//! | `heapless` | Conversions between `FixedArray` and `heapless::Vec`. |

#![cfg_attr(not(test), no_std)]

// --- Module Declarations ---

pub mod contract;
mod error;
pub mod maps;
mod utils;
pub mod vecs;

// --- Re-exports ---

pub use error::{Rejected, Violation};
pub use maps::{Compare, FixedSortedMap, FnCompare, Natural, Reversed};
pub use vecs::FixedArray;
