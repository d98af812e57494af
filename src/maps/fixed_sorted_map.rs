//! Sorted map with a compile-time capacity and no heap.
//!
//! [`FixedSortedMap`] keeps up to `N` unique keys in a [`FixedArray`] of `(K, V)` pairs,
//! sorted ascending under a [`Compare`] implementation. Lookups are binary searches over the
//! sorted slots; inserts and removals shift the tail by one slot.

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::mem;
use core::ops::{Bound, Index, Range, RangeBounds};
use core::slice;

use crate::contract;
use crate::maps::compare::{Compare, Natural};
use crate::vecs::fixed_array::{self, FixedArray};
use crate::{Rejected, Violation};

/// A **stack-allocated**, sorted, unique-key map backed by a `FixedArray<(K, V), N>`.
///
/// # Overview
/// Entries are kept in ascending key order at all times. Lookups use a halving search for
/// **O(log n)** comparisons. Insertion and removal still take **O(n)** moves because the
/// tail has to shift to keep the slots contiguous and sorted.
///
/// # Positions
/// Functions such as [`find`](Self::find), [`lower_bound`](Self::lower_bound) and
/// [`insert`](Self::insert) return plain `usize` positions into the sorted entries, where
/// `len()` means "past the end". A position stays meaningful only until the next insert or
/// removal; afterwards it names whichever entry has shifted into that slot.
///
/// # Overflow protocol
/// [`try_insert`](Self::try_insert) returns `Err(Rejected)` with the original key and value
/// when the map is full and the key is new. [`insert`](Self::insert) reports the same
/// condition through the [`contract`] hook. Either way the map is unchanged.
///
/// When the hook returns, `insert` yields `(len(), false)`. The position is past the end,
/// which is what separates a refused insertion from an existing key, whose position is
/// always `< len()`:
///
/// | `insert` result      | Meaning |
/// |----------------------|---------|
/// | `(pos, true)`        | Stored at `pos`. |
/// | `(pos, false)`, `pos < len()` | Key already present at `pos`. |
/// | `(len(), false)`     | Full map; reported and nothing stored. |
///
/// # Generic parameters
/// | Parameter | Meaning |
/// |-----------|---------|
/// | `K`       | Key type |
/// | `V`       | Value type |
/// | `N`       | Capacity (number of entries) |
/// | `C`       | Comparator, [`Natural`] by default |
///
/// # Pseudo-code Implementation
/// ```text
/// // 1. Lookup (find)
/// idx = partition_point(entry.key < key)   // O(log n)
/// if idx < len and entries[idx].key ~ key: return idx
///
/// // 2. Insertion (insert)
/// idx = partition_point(entry.key < key)
/// if entries[idx].key ~ key: return (idx, false)
/// if len == N: return Err (CapacityExceeded)
/// shift_right(idx..len)                    // O(n)
/// write (key, value) at idx
///
/// // 3. Removal (remove_at)
/// move entries[idx] out
/// shift_left(idx+1..len)                   // O(n)
/// ```
pub struct FixedSortedMap<K, V, const N: usize, C = Natural> {
    entries: FixedArray<(K, V), N>,
    cmp: C,
}

impl<K, V, const N: usize> FixedSortedMap<K, V, N> {
    /// Creates an empty map ordered by `K: Ord`. No memory is touched.
    pub const fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K, V, const N: usize, C> FixedSortedMap<K, V, N, C> {
    /// Creates an empty map ordered by `cmp`.
    pub const fn with_comparator(cmp: C) -> Self {
        Self {
            entries: FixedArray::new(),
            cmp,
        }
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if inserting a *new* key would be refused.
    #[inline(always)]
    pub const fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// The comparator that orders the keys.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// The entries as a sorted slice.
    pub fn as_slice(&self) -> &[(K, V)] {
        self.entries.as_slice()
    }

    /// Removes all entries, dropping them in ascending key order.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The entry at `pos`, or `None` if `pos >= len`.
    pub fn entry_at(&self, pos: usize) -> Option<(&K, &V)> {
        self.entries.get(pos).map(|(k, v)| (k, v))
    }

    /// The entry at `pos` with a mutable value. Keys are never handed out mutably.
    pub fn entry_at_mut(&mut self, pos: usize) -> Option<(&K, &mut V)> {
        self.entries.get_mut(pos).map(|(k, v)| (&*k, v))
    }

    /// Removes the entry at `pos`, shifting later entries down. `None` if out of range.
    pub fn remove_at(&mut self, pos: usize) -> Option<(K, V)> {
        self.entries.remove(pos)
    }

    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.entry_at(0)
    }

    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.entries.last().map(|(k, v)| (k, v))
    }

    /// Removes the entry with the smallest key.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.entries.remove(0)
    }

    /// Removes the entry with the largest key.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.entries.pop()
    }

    /// Keeps only the entries for which `f` returns `true`. Order is preserved.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.entries.retain_mut(|(k, v)| f(k, v));
    }

    /// Iterates over `(&K, &V)` in ascending key order. Reverse with `.rev()`.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterates over `(&K, &mut V)` in ascending key order.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.entries.iter_mut(),
        }
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn values_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut V> + ExactSizeIterator {
        self.entries.iter_mut().map(|(_, v)| v)
    }

    /// Exchanges the contents (and comparators) of two maps, cell by cell.
    pub fn swap_with(&mut self, other: &mut Self) {
        self.entries.swap_with(&mut other.entries);
        mem::swap(&mut self.cmp, &mut other.cmp);
    }

    /// Position of the first entry whose key is not less than `key`, or `len()`.
    pub fn lower_bound<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.entries
            .partition_point(|(k, _)| self.cmp.compare(k.borrow(), key) == Ordering::Less)
    }

    /// Position of the first entry whose key is greater than `key`, or `len()`.
    pub fn upper_bound<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.entries
            .partition_point(|(k, _)| self.cmp.compare(k.borrow(), key) != Ordering::Greater)
    }

    /// `lower_bound(key)..upper_bound(key)`. Holds at most one position since keys are unique.
    pub fn equal_range<Q>(&self, key: &Q) -> Range<usize>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let start = self.lower_bound(key);
        match self.entries.get(start) {
            Some((k, _)) if self.cmp.compare(k.borrow(), key) == Ordering::Equal => start..start + 1,
            _ => start..start,
        }
    }

    /// `Ok(pos)` of the entry equivalent to `key`, or `Err(pos)` where it would be inserted.
    fn search<Q>(&self, key: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let range = self.equal_range(key);
        if range.is_empty() {
            Err(range.start)
        } else {
            Ok(range.start)
        }
    }

    /// Position of the entry equivalent to `key`.
    pub fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.search(key).ok()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.find(key).is_some()
    }

    /// Number of entries equivalent to `key`: always 0 or 1.
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.equal_range(key).len()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.find(key).map(|pos| &self.entries[pos].1)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let pos = self.find(key)?;
        Some(&mut self.entries[pos].1)
    }

    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.find(key).and_then(|pos| self.entry_at(pos))
    }

    /// Checked lookup: [`Violation::KeyNotFound`] on a miss. Never inserts.
    pub fn at<Q>(&self, key: &Q) -> Result<&V, Violation>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.get(key).ok_or(Violation::KeyNotFound)
    }

    /// Mutable counterpart of [`at`](Self::at).
    pub fn at_mut<Q>(&mut self, key: &Q) -> Result<&mut V, Violation>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.get_mut(key).ok_or(Violation::KeyNotFound)
    }

    /// Iterates over the entries whose keys fall inside `range`, in ascending order.
    ///
    /// A range whose start lies after its end yields nothing.
    pub fn range<Q, R>(&self, range: R) -> Iter<'_, K, V>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
        R: RangeBounds<Q>,
    {
        let start = match range.start_bound() {
            Bound::Included(k) => self.lower_bound(k),
            Bound::Excluded(k) => self.upper_bound(k),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(k) => self.upper_bound(k),
            Bound::Excluded(k) => self.lower_bound(k),
            Bound::Unbounded => self.len(),
        };
        Iter {
            inner: self.entries[start..end.max(start)].iter(),
        }
    }

    /// Removes the entry for `key` and returns it.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        let pos = self.find(key)?;
        self.entries.remove(pos)
    }

    /// Removes the entry for `key` and returns its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes the entry for `key`, returning how many entries were removed (0 or 1).
    pub fn erase<Q>(&mut self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        C: Compare<Q>,
        Q: ?Sized,
    {
        usize::from(self.remove_entry(key).is_some())
    }
}

impl<K, V, const N: usize, C: Compare<K>> FixedSortedMap<K, V, N, C> {
    /// Inserts `(key, value)` in sort position unless the key is already present.
    ///
    /// # Returns
    /// | Variant | Meaning |
    /// |---------|---------|
    /// | `Ok((pos, true))`  | Key was new; entry stored at `pos`. |
    /// | `Ok((pos, false))` | Key already at `pos`; the stored value is kept and `value` is dropped. |
    /// | `Err(rejected)`    | Map is full and the key is new; the pair is handed back untouched. |
    pub fn try_insert(&mut self, key: K, value: V) -> Result<(usize, bool), Rejected<(K, V)>> {
        match self.search(&key) {
            Ok(pos) => Ok((pos, false)),
            Err(pos) => {
                self.entries.try_insert(pos, (key, value))?;
                Ok((pos, true))
            }
        }
    }

    /// Inserts `(key, value)`, reporting a full map through the [`contract`] hook.
    ///
    /// Returns `(pos, inserted)` like [`try_insert`](Self::try_insert). When the map is full
    /// and the key is new, the violation is reported and `(len(), false)` is returned.
    #[track_caller]
    pub fn insert(&mut self, key: K, value: V) -> (usize, bool) {
        match self.try_insert(key, value) {
            Ok(outcome) => outcome,
            Err(rejected) => {
                contract::report(rejected.violation());
                (self.len(), false)
            }
        }
    }

    /// Returns the value for `key`, inserting `V::default()` first if the key is missing.
    ///
    /// On a full map with a missing key nothing is inserted or overwritten; the key comes
    /// back inside the error.
    pub fn get_or_insert_default(&mut self, key: K) -> Result<&mut V, Rejected<K>>
    where
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }

    /// Returns the value for `key`, inserting the result of `f` first if the key is missing.
    ///
    /// `f` only runs when an insertion will actually take place.
    pub fn get_or_insert_with<F>(&mut self, key: K, f: F) -> Result<&mut V, Rejected<K>>
    where
        F: FnOnce() -> V,
    {
        let pos = match self.search(&key) {
            Ok(pos) => pos,
            Err(_) if self.is_full() => {
                return Err(Rejected::new(
                    Violation::CapacityExceeded { capacity: N },
                    key,
                ));
            }
            Err(pos) => {
                self.entries
                    .try_insert(pos, (key, f()))
                    .map_err(|rejected| rejected.map(|(k, _)| k))?;
                pos
            }
        };
        Ok(&mut self.entries[pos].1)
    }
}

impl<K: Clone, V: Clone, const N: usize, C: Clone> Clone for FixedSortedMap<K, V, N, C> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            cmp: self.cmp.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.entries.clone_from(&source.entries);
        self.cmp.clone_from(&source.cmp);
    }
}

impl<K: fmt::Debug, V: fmt::Debug, const N: usize, C> fmt::Debug for FixedSortedMap<K, V, N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, const N: usize, C: Default> Default for FixedSortedMap<K, V, N, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K: PartialEq, V: PartialEq, const N: usize, C> PartialEq for FixedSortedMap<K, V, N, C> {
    /// Elementwise: same length and equal `(key, value)` pairs in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq, const N: usize, C> Eq for FixedSortedMap<K, V, N, C> {}

impl<K: PartialOrd, V: PartialOrd, const N: usize, C> PartialOrd for FixedSortedMap<K, V, N, C> {
    /// Lexicographic over the `(key, value)` sequence.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.entries.partial_cmp(&other.entries)
    }
}

impl<K: Ord, V: Ord, const N: usize, C> Ord for FixedSortedMap<K, V, N, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.entries.cmp(&other.entries)
    }
}

impl<K: Hash, V: Hash, const N: usize, C> Hash for FixedSortedMap<K, V, N, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.hash(state);
    }
}

impl<K, Q, V, const N: usize, C> Index<&Q> for FixedSortedMap<K, V, N, C>
where
    K: Borrow<Q>,
    C: Compare<Q>,
    Q: ?Sized,
{
    type Output = V;

    /// Looks up `key`. A miss is reported through the [`contract`] hook and then panics,
    /// since there is no value to return a reference to.
    #[track_caller]
    fn index(&self, key: &Q) -> &V {
        match self.at(key) {
            Ok(value) => value,
            Err(violation) => contract::fatal(violation),
        }
    }
}

impl<K, V, const N: usize, C: Compare<K>> Extend<(K, V)> for FixedSortedMap<K, V, N, C> {
    /// Inserts pairs until a new key no longer fits; that one is reported through the
    /// [`contract`] hook and the rest of the iterator is left unconsumed. Pairs whose key is
    /// already present are skipped.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            if let Err(rejected) = self.try_insert(key, value) {
                contract::report(rejected.violation());
                break;
            }
        }
    }
}

impl<K, V, const N: usize, C: Compare<K> + Default> FromIterator<(K, V)> for FixedSortedMap<K, V, N, C> {
    /// The first occurrence of each key wins. New keys beyond the capacity are dropped.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        for (key, value) in iter {
            let _ = map.try_insert(key, value);
        }
        map
    }
}

impl<'a, K, V, const N: usize, C> IntoIterator for &'a FixedSortedMap<K, V, N, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, const N: usize, C> IntoIterator for &'a mut FixedSortedMap<K, V, N, C> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, const N: usize, C> IntoIterator for FixedSortedMap<K, V, N, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, N>;

    /// Consumes the map, yielding `(K, V)` in ascending key order.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

/// Borrowing iterator over a [`FixedSortedMap`], ascending by key.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    inner: slice::Iter<'a, (K, V)>,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k, v))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Iterator over a [`FixedSortedMap`] with mutable values.
#[derive(Debug)]
pub struct IterMut<'a, K, V> {
    inner: slice::IterMut<'a, (K, V)>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (&*k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (&*k, v))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// Owning iterator over a [`FixedSortedMap`], ascending by key.
#[derive(Debug)]
pub struct IntoIter<K, V, const N: usize> {
    inner: fixed_array::IntoIter<(K, V), N>,
}

impl<K, V, const N: usize> Iterator for IntoIter<K, V, N> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, const N: usize> DoubleEndedIterator for IntoIter<K, V, N> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.inner.next_back()
    }
}

impl<K, V, const N: usize> ExactSizeIterator for IntoIter<K, V, N> {}

impl<K, V, const N: usize> FusedIterator for IntoIter<K, V, N> {}


#[cfg(test)]
mod sorted_map_coverage_tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Tracked(Rc<Cell<isize>>);

    impl Tracked {
        fn new(live: &Rc<Cell<isize>>) -> Self {
            live.set(live.get() + 1);
            Tracked(live.clone())
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    #[test]
    fn test_drop_balance_across_operations() {
        let live = Rc::new(Cell::new(0));
        {
            let mut map: FixedSortedMap<i32, Tracked, 3> = FixedSortedMap::new();
            for k in [3, 1, 2] {
                assert!(map.try_insert(k, Tracked::new(&live)).is_ok());
            }
            // Duplicate key: the new value is dropped.
            assert!(map.try_insert(2, Tracked::new(&live)).is_ok());
            // Full: the rejected value is dropped with the error.
            assert!(map.try_insert(4, Tracked::new(&live)).is_err());
            assert_eq!(live.get(), 3);

            map.remove(&1);
            assert_eq!(live.get(), 2);

            let mut other: FixedSortedMap<i32, Tracked, 3> = FixedSortedMap::new();
            other.try_insert(7, Tracked::new(&live)).ok();
            map.swap_with(&mut other);
            assert_eq!(live.get(), 3);
            assert_eq!(map.len(), 1);
            assert_eq!(other.len(), 2);
        }
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn test_empty_map_queries() {
        let map: FixedSortedMap<i32, i32, 4> = FixedSortedMap::new();
        assert_eq!(map.find(&1), None);
        assert_eq!(map.lower_bound(&1), 0);
        assert_eq!(map.upper_bound(&1), 0);
        assert_eq!(map.equal_range(&1), 0..0);
        assert_eq!(map.iter().next(), None);
        assert_eq!(map.range::<i32, _>(..).count(), 0);
    }

    #[test]
    fn test_large_capacity_map() {
        static EMPTY: FixedSortedMap<u32, u32, 10_000> = FixedSortedMap::new();
        assert_eq!(EMPTY.capacity(), 10_000);

        let mut map: FixedSortedMap<u32, u32, 10_000> = FixedSortedMap::new();
        for k in (0..10_000).rev() {
            assert!(map.try_insert(k, k * 2).is_ok());
        }
        assert!(map.is_full());
        assert_eq!(map.get(&9_999), Some(&19_998));
        assert_eq!(map.lower_bound(&5_000), 5_000);
        assert!(map.try_insert(10_000, 0).is_err());
    }

    #[test]
    fn test_zero_capacity_map() {
        let mut map: FixedSortedMap<i32, i32, 0> = FixedSortedMap::new();
        assert!(map.is_full());
        assert!(map.try_insert(1, 1).is_err());
        assert!(map.get_or_insert_default(1).is_err());
    }

    #[test]
    fn test_hash_matches_for_equal_maps() {
        use std::collections::hash_map::DefaultHasher;

        let a: FixedSortedMap<i32, i32, 4> = [(2, 2), (1, 1)].into_iter().collect();
        let b: FixedSortedMap<i32, i32, 4> = [(1, 1), (2, 2)].into_iter().collect();
        let hash = |m: &FixedSortedMap<i32, i32, 4>| {
            let mut h = DefaultHasher::new();
            m.hash(&mut h);
            h.finish()
        };
        assert_eq!(hash(&a), hash(&b));
    }
}
