mod compare;
pub mod fixed_sorted_map;

pub use compare::{Compare, FnCompare, Natural, Reversed};
pub use fixed_sorted_map::FixedSortedMap;
