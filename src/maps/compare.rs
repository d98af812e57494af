//! Key comparators for [`FixedSortedMap`](crate::FixedSortedMap).
//!
//! A comparator must be a strict weak ordering. Two keys are *equivalent* (the same map
//! key) when [`Compare::compare`] returns [`Ordering::Equal`], whether or not they are `==`.

use core::cmp::Ordering;
use core::fmt;

/// Orders values of type `T`.
///
/// Implemented for `T: ?Sized` so that a map with `String` keys can be searched with a
/// `&str` as long as the comparator also implements `Compare<str>`.
pub trait Compare<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The `Ord` ordering. This is the default comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts an inner comparator, giving descending iteration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C = Natural>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Adapts a closure or function pointer into a [`Compare`].
///
/// ```
/// use core::cmp::Ordering;
/// use fixed_collections::{FixedSortedMap, FnCompare};
///
/// let by_len = FnCompare(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// let mut map = FixedSortedMap::<&str, u8, 4, _>::with_comparator(by_len);
/// map.try_insert("three", 3).unwrap();
/// map.try_insert("one", 1).unwrap();
///
/// // Same length as "one", so the same key.
/// assert_eq!(map.get(&"two"), Some(&1));
/// ```
#[derive(Clone, Copy, Default)]
pub struct FnCompare<F>(pub F);

impl<T: ?Sized, F> Compare<T> for FnCompare<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for FnCompare<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnCompare(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_natural_and_reversed() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Natural.compare("b", "a"), Ordering::Greater);
        assert_eq!(Reversed(Natural).compare(&1, &2), Ordering::Greater);
        assert_eq!(Reversed(Reversed(Natural)).compare(&1, &2), Ordering::Less);
    }

    #[test]
    fn test_compare_fn_adapter() {
        let modulo = FnCompare(|a: &i32, b: &i32| (a % 10).cmp(&(b % 10)));
        assert_eq!(modulo.compare(&13, &21), Ordering::Greater);
        assert_eq!(modulo.compare(&13, &3), Ordering::Equal);
        assert_eq!(format!("{modulo:?}"), "FnCompare(..)");
    }
}
