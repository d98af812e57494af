//! Contiguous array with a compile-time capacity and no heap.
//!
//! Provides [`FixedArray`], which stores up to `N` elements inline in a block of
//! uninitialized slots. It never allocates and never grows: an insertion into a full array
//! is refused and the array is left exactly as it was. Because it `Deref`s to `[T]`, all
//! standard slice methods (indexing, `first`, `last`, `iter`, `sort`, `binary_search`, ...)
//! are available without conversion.

use core::borrow::{Borrow, BorrowMut};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::mem::{self, ManuallyDrop};
use core::ops::{Deref, DerefMut};
use core::ptr;
use core::slice;

use crate::contract;
use crate::utils::slots::Slots;
use crate::{Rejected, Violation};

/// A **stack-allocated**, capacity-bounded vector.
///
/// # Layout
/// - `slots`: `N` inline cells. Cells `[0, len)` are occupied, the rest are empty.
/// - `len`: number of occupied cells, always `<= N`.
///
/// # Failure model
/// Every insertion comes in two flavours:
///
/// | Operation                | On a full array                                           |
/// |--------------------------|-----------------------------------------------------------|
/// | [`try_push`], [`try_insert`] | `Err(Rejected)` carrying the value back               |
/// | [`push`], [`insert`]     | reports [`Violation::CapacityExceeded`] to the [`contract`] hook, drops the value |
///
/// In both cases nothing is written. See the [`contract`] module for what the hook does.
///
/// Indexing (`arr[i]`) goes through the slice and panics when out of range;
/// [`at`](Self::at) returns a `Result` instead, and `get_unchecked` is the unchecked path.
///
/// # Invalidation
/// Positions (`usize`) obtained before an `insert` or `remove` refer to whatever element
/// has shifted into that slot afterwards. References cannot outlive a mutation.
///
/// [`try_push`]: Self::try_push
/// [`try_insert`]: Self::try_insert
/// [`push`]: Self::push
/// [`insert`]: Self::insert
pub struct FixedArray<T, const N: usize> {
    len: usize,
    slots: Slots<T, N>,
}

impl<T, const N: usize> FixedArray<T, N> {
    /// Creates an empty array. No memory is touched.
    ///
    /// Usable in `static` and `const` items; large capacities belong there rather than on
    /// a thread stack.
    pub const fn new() -> Self {
        Self {
            len: 0,
            slots: Slots::new(),
        }
    }

    /// Creates an array holding `min(n, N)` clones of `value`.
    pub fn from_elem(n: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut arr = Self::new();
        arr.assign(n, value);
        arr
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if another insertion would be refused.
    #[inline(always)]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// The compile-time capacity `N`.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline(always)]
    pub const fn remaining_capacity(&self) -> usize {
        N - self.len
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: cells [0, len) are occupied.
        unsafe { self.slots.prefix(self.len) }
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: cells [0, len) are occupied.
        unsafe { self.slots.prefix_mut(self.len) }
    }

    /// Bounds-checked access.
    ///
    /// Returns [`Violation::OutOfRange`] when `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, Violation> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(Violation::OutOfRange { index, len })
    }

    /// Mutable counterpart of [`at`](Self::at).
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Violation> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Violation::OutOfRange { index, len })
    }

    /// # Safety
    /// `len < N`.
    #[inline(always)]
    unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < N);
        unsafe { self.slots.write(self.len, value) };
        self.len += 1;
    }

    /// Appends `value`, or hands it back if the array is full.
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), Rejected<T>> {
        if self.len == N {
            return Err(Rejected::new(
                Violation::CapacityExceeded { capacity: N },
                value,
            ));
        }
        // SAFETY: len < N.
        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    /// Appends `value`.
    ///
    /// On a full array this reports [`Violation::CapacityExceeded`] through the
    /// [`contract`] hook, drops `value` and leaves the array unchanged.
    #[inline]
    #[track_caller]
    pub fn push(&mut self, value: T) {
        if let Err(rejected) = self.try_push(value) {
            contract::report(rejected.violation());
        }
    }

    /// Removes and returns the last element. Does nothing on an empty array.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: cell `len` was the last occupied one; it is now outside the live prefix.
        Some(unsafe { self.slots.read(self.len) })
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot towards the end.
    ///
    /// Fails with [`Violation::CapacityExceeded`] on a full array and
    /// [`Violation::OutOfRange`] when `index > len`. Nothing moves on failure.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), Rejected<T>> {
        if self.len == N {
            return Err(Rejected::new(
                Violation::CapacityExceeded { capacity: N },
                value,
            ));
        }
        if index > self.len {
            let len = self.len;
            return Err(Rejected::new(Violation::OutOfRange { index, len }, value));
        }
        // SAFETY: index <= len < N, so the gap stays inside the buffer and cell `len` is empty.
        unsafe {
            self.slots.open_gap(index, self.len);
            self.slots.write(index, value);
        }
        self.len += 1;
        Ok(())
    }

    /// Inserts `value` at `index`, reporting violations through the [`contract`] hook.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        if let Err(rejected) = self.try_insert(index, value) {
            contract::report(rejected.violation());
        }
    }

    /// Removes the element at `index`, shifting the tail down. `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        // SAFETY: index < len; after the read cell `index` is empty and the tail closes it.
        unsafe {
            let value = self.slots.read(index);
            self.slots.close_gap(index, self.len);
            self.len -= 1;
            Some(value)
        }
    }

    /// Removes the element at `index` by moving the last element into its slot.
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let last = self.len - 1;
        self.as_mut_slice().swap(index, last);
        self.pop()
    }

    /// Drops every element at or past `len`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let old_len = self.len;
        // Shrink first so a panicking destructor cannot lead to a double drop.
        self.len = len;
        // SAFETY: cells [len, old_len) were occupied and are no longer reachable.
        unsafe { self.slots.drop_range(len..old_len) };
    }

    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Keeps only the elements for which `f` returns `true`, preserving order.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain_mut(|item| f(item));
    }

    /// Like [`retain`](Self::retain) but hands out mutable references.
    pub fn retain_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T) -> bool,
    {
        let original = self.len;
        // Hidden from `f` and from unwinding until the guard has compacted the survivors.
        self.len = 0;
        let mut guard = RetainGuard {
            arr: self,
            processed: 0,
            deleted: 0,
            original,
        };

        while guard.processed < original {
            let i = guard.processed;
            // SAFETY: cell i has not been processed yet, so it is still occupied.
            let keep = f(unsafe { guard.arr.slots.slot_mut(i) });
            if keep {
                if guard.deleted > 0 {
                    // SAFETY: cell i is occupied, cell i - deleted was vacated earlier.
                    unsafe { guard.arr.slots.move_down(i, i - guard.deleted, 1) };
                }
                guard.processed += 1;
            } else {
                guard.processed += 1;
                guard.deleted += 1;
                // SAFETY: cell i is occupied and is now counted as a hole.
                unsafe { guard.arr.slots.drop_range(i..i + 1) };
            }
        }
    }

    /// Resizes to `min(new_len, N)`, filling new slots with values produced by `f`.
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        let new_len = new_len.min(N);
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        while self.len < new_len {
            // SAFETY: len < new_len <= N.
            unsafe { self.push_unchecked(f()) };
        }
    }

    /// Resizes to `min(new_len, N)`, filling new slots with clones of `value`.
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        self.resize_with(new_len, || value.clone());
    }

    /// Resizes to `min(new_len, N)`, filling new slots with `T::default()`.
    pub fn resize_default(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Replaces the contents with `min(n, N)` clones of `value`.
    ///
    /// Requests beyond the capacity are truncated silently.
    pub fn assign(&mut self, n: usize, value: T)
    where
        T: Clone,
    {
        self.clear();
        self.resize(n, value);
    }

    /// Replaces the contents with the first `N` items of `iter`.
    ///
    /// Items beyond the capacity are not pulled from the iterator.
    pub fn assign_iter<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.clear();
        for item in iter.into_iter().take(N) {
            // SAFETY: the array was cleared and at most N items are taken.
            unsafe { self.push_unchecked(item) };
        }
    }

    /// Clones every element of `other` onto the end, or nothing if they do not all fit.
    pub fn try_extend_from_slice(&mut self, other: &[T]) -> Result<(), Violation>
    where
        T: Clone,
    {
        if other.len() > self.remaining_capacity() {
            return Err(Violation::CapacityExceeded { capacity: N });
        }
        for item in other {
            // SAFETY: checked above that all of `other` fits.
            unsafe { self.push_unchecked(item.clone()) };
        }
        Ok(())
    }

    /// Like [`try_extend_from_slice`](Self::try_extend_from_slice) but reports an overflow
    /// through the [`contract`] hook.
    #[track_caller]
    pub fn extend_from_slice(&mut self, other: &[T])
    where
        T: Clone,
    {
        if let Err(violation) = self.try_extend_from_slice(other) {
            contract::report(violation);
        }
    }

    /// Exchanges the contents of two arrays.
    ///
    /// The storage is inline, so there is no buffer pointer to swap. The first
    /// `min(len, other.len)` elements are swapped pairwise, then the surplus of the longer
    /// array is moved cell by cell into the shorter one.
    pub fn swap_with(&mut self, other: &mut Self) {
        let common = self.len.min(other.len);
        self.as_mut_slice()[..common].swap_with_slice(&mut other.as_mut_slice()[..common]);

        if self.len > common {
            Self::move_tail(self, other, common);
        } else if other.len > common {
            Self::move_tail(other, self, common);
        }
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves cells `[start, from.len)` of `from` into the same cells of `to`.
    /// Lengths are left for the caller to fix up.
    fn move_tail(from: &mut Self, to: &mut Self, start: usize) {
        for i in start..from.len {
            // SAFETY: the cell is occupied in `from`; in `to` it lies past `to.len == start`.
            unsafe { to.slots.write(i, from.slots.read(i)) };
        }
    }

    /// Moves the contents into a `heapless::Vec` of the same capacity.
    #[cfg(feature = "heapless")]
    pub fn into_heapless(self) -> heapless::Vec<T, N> {
        let mut out = heapless::Vec::new();
        // Same capacity on both sides, so `extend` never overflows.
        out.extend(self);
        out
    }
}

struct RetainGuard<'a, T, const N: usize> {
    arr: &'a mut FixedArray<T, N>,
    processed: usize,
    deleted: usize,
    original: usize,
}

impl<T, const N: usize> Drop for RetainGuard<'_, T, N> {
    fn drop(&mut self) {
        if self.deleted > 0 && self.processed < self.original {
            // SAFETY: [processed, original) is untouched; the holes before it are empty.
            unsafe {
                self.arr.slots.move_down(
                    self.processed,
                    self.processed - self.deleted,
                    self.original - self.processed,
                )
            };
        }
        self.arr.len = self.original - self.deleted;
    }
}

impl<T, const N: usize> Drop for FixedArray<T, N> {
    fn drop(&mut self) {
        // SAFETY: cells [0, len) are occupied and never read again.
        unsafe { self.slots.drop_range(0..self.len) };
    }
}

impl<T: Clone, const N: usize> Clone for FixedArray<T, N> {
    fn clone(&self) -> Self {
        let mut out = Self::new();
        for item in self.iter() {
            // SAFETY: `out` never holds more than `self.len <= N` elements.
            unsafe { out.push_unchecked(item.clone()) };
        }
        out
    }

    fn clone_from(&mut self, source: &Self) {
        self.truncate(source.len);
        let (init, tail) = source.split_at(self.len);
        self.as_mut_slice().clone_from_slice(init);
        for item in tail {
            // SAFETY: ends at source.len <= N.
            unsafe { self.push_unchecked(item.clone()) };
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Deref for FixedArray<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, const N: usize> DerefMut for FixedArray<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for FixedArray<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for FixedArray<T, N> {}

impl<T: PartialOrd, const N: usize> PartialOrd for FixedArray<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, const N: usize> Ord for FixedArray<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash, const N: usize> Hash for FixedArray<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedArray<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> AsMut<[T]> for FixedArray<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> Borrow<[T]> for FixedArray<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> BorrowMut<[T]> for FixedArray<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> Extend<T> for FixedArray<T, N> {
    /// Pushes items until the array is full. The first item that does not fit is reported
    /// through the [`contract`] hook and the rest of the iterator is left unconsumed.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            if let Err(rejected) = self.try_push(item) {
                contract::report(rejected.violation());
                break;
            }
        }
    }
}

impl<'a, T: Copy + 'a, const N: usize> Extend<&'a T> for FixedArray<T, N> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        <Self as Extend<T>>::extend(self, iter.into_iter().copied());
    }
}

impl<T, const N: usize> FromIterator<T> for FixedArray<T, N> {
    /// Collects at most `N` items; the rest are ignored, as with
    /// [`assign_iter`](FixedArray::assign_iter).
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        arr.assign_iter(iter);
        arr
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for FixedArray<T, N> {
    type Error = Violation;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        let mut arr = Self::new();
        arr.try_extend_from_slice(slice)?;
        Ok(arr)
    }
}

#[cfg(feature = "heapless")]
impl<T, const N: usize> From<heapless::Vec<T, N>> for FixedArray<T, N> {
    fn from(vec: heapless::Vec<T, N>) -> Self {
        vec.into_iter().collect()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedArray<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Owning iterator over the elements of a [`FixedArray`].
///
/// Elements not yielded are dropped with the iterator.
pub struct IntoIter<T, const N: usize> {
    slots: Slots<T, N>,
    front: usize,
    back: usize,
}

impl<T, const N: usize> IntoIter<T, N> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: cells [front, back) are still occupied.
        unsafe { self.slots.window(self.front..self.back) }
    }
}

impl<T, const N: usize> IntoIterator for FixedArray<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        let this = ManuallyDrop::new(self);
        IntoIter {
            // SAFETY: `this` is never dropped, so ownership of the cells moves to the iterator.
            slots: unsafe { ptr::read(&this.slots) },
            front: 0,
            back: this.len,
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: front < back, so the cell is occupied; it leaves the live range.
        let value = unsafe { self.slots.read(self.front) };
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: the cell was the last one of the live range.
        Some(unsafe { self.slots.read(self.back) })
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        // SAFETY: cells [front, back) were never yielded.
        unsafe { self.slots.drop_range(self.front..self.back) };
    }
}
