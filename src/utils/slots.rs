//! Inline slot storage shared by the fixed-capacity collections.
//!
//! [`Slots`] is a block of `N` uninitialized cells. It has no idea which cells are occupied;
//! the owning container tracks that with its length, and every primitive here is `unsafe`
//! with the occupancy requirement spelled out in its `# Safety` section.
//!
//! Rust moves are bitwise, so "construct in the new slot, destroy the old one" collapses to
//! a single `ptr::copy`. After a copy the source cell is treated as empty without running
//! its destructor.

use core::mem::MaybeUninit;
use core::ops::Range;
use core::ptr;
use core::slice;

/// `N` cells, each able to hold one `T`.
///
/// `Slots` never drops anything. Dropping a `Slots` with occupied cells leaks them.
pub(crate) struct Slots<T, const N: usize> {
    cells: [MaybeUninit<T>; N],
}

impl<T, const N: usize> Slots<T, N> {
    /// Creates `N` empty cells without touching memory.
    #[inline(always)]
    pub(crate) const fn new() -> Self {
        Self {
            cells: [const { MaybeUninit::uninit() }; N],
        }
    }

    #[inline(always)]
    fn as_ptr(&self) -> *const T {
        self.cells.as_ptr() as *const T
    }

    #[inline(always)]
    fn as_mut_ptr(&mut self) -> *mut T {
        self.cells.as_mut_ptr() as *mut T
    }

    /// Moves `value` into cell `index`.
    ///
    /// # Safety
    /// `index < N` and the cell is empty. An occupied cell would be overwritten without
    /// being dropped.
    #[inline(always)]
    pub(crate) unsafe fn write(&mut self, index: usize, value: T) {
        debug_assert!(index < N);
        unsafe { ptr::write(self.as_mut_ptr().add(index), value) }
    }

    /// Moves the value out of cell `index`. The cell is empty afterwards.
    ///
    /// # Safety
    /// `index < N` and the cell is occupied.
    #[inline(always)]
    pub(crate) unsafe fn read(&mut self, index: usize) -> T {
        debug_assert!(index < N);
        unsafe { ptr::read(self.as_ptr().add(index)) }
    }

    /// Views the first `len` cells as initialized elements.
    ///
    /// # Safety
    /// `len <= N` and cells `[0, len)` are occupied.
    #[inline(always)]
    pub(crate) unsafe fn prefix(&self, len: usize) -> &[T] {
        debug_assert!(len <= N);
        unsafe { slice::from_raw_parts(self.as_ptr(), len) }
    }

    /// Views the cells in `range` as initialized elements.
    ///
    /// # Safety
    /// `range.end <= N` and every cell in `range` is occupied.
    #[inline(always)]
    pub(crate) unsafe fn window(&self, range: Range<usize>) -> &[T] {
        debug_assert!(range.start <= range.end && range.end <= N);
        unsafe { slice::from_raw_parts(self.as_ptr().add(range.start), range.len()) }
    }

    /// Borrows the element in cell `index`.
    ///
    /// # Safety
    /// `index < N` and the cell is occupied.
    #[inline(always)]
    pub(crate) unsafe fn slot_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < N);
        unsafe { &mut *self.as_mut_ptr().add(index) }
    }

    /// Mutable counterpart of [`prefix`](Self::prefix).
    ///
    /// # Safety
    /// `len <= N` and cells `[0, len)` are occupied.
    #[inline(always)]
    pub(crate) unsafe fn prefix_mut(&mut self, len: usize) -> &mut [T] {
        debug_assert!(len <= N);
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), len) }
    }

    /// Drops every element in `range`. The cells are empty afterwards.
    ///
    /// If a destructor panics the remaining elements of the range are still dropped.
    ///
    /// # Safety
    /// `range.end <= N`, every cell in `range` is occupied and nothing reads those cells
    /// again before they are rewritten.
    #[inline]
    pub(crate) unsafe fn drop_range(&mut self, range: Range<usize>) {
        debug_assert!(range.start <= range.end && range.end <= N);
        unsafe {
            let first = self.as_mut_ptr().add(range.start);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, range.len()));
        }
    }

    /// Moves cells `[index, len)` one slot towards the end, leaving cell `index` empty.
    ///
    /// # Safety
    /// `index <= len < N` and cells `[index, len)` are occupied. Cell `len` must be empty.
    #[inline]
    pub(crate) unsafe fn open_gap(&mut self, index: usize, len: usize) {
        debug_assert!(index <= len && len < N);
        unsafe {
            let at = self.as_mut_ptr().add(index);
            ptr::copy(at, at.add(1), len - index);
        }
    }

    /// Moves cells `[index + 1, len)` one slot towards the start, filling cell `index` and
    /// leaving cell `len - 1` empty.
    ///
    /// # Safety
    /// `index < len <= N`, cell `index` is empty and cells `[index + 1, len)` are occupied.
    #[inline]
    pub(crate) unsafe fn close_gap(&mut self, index: usize, len: usize) {
        debug_assert!(index < len && len <= N);
        unsafe {
            let at = self.as_mut_ptr().add(index);
            ptr::copy(at.add(1), at, len - index - 1);
        }
    }

    /// Moves `count` elements starting at `from` down to `to` (`to <= from`).
    ///
    /// # Safety
    /// Source cells are occupied, destination cells not overlapping the source are empty.
    #[inline]
    pub(crate) unsafe fn move_down(&mut self, from: usize, to: usize, count: usize) {
        debug_assert!(to <= from && from + count <= N);
        unsafe {
            let base = self.as_mut_ptr();
            ptr::copy(base.add(from), base.add(to), count);
        }
    }
}
