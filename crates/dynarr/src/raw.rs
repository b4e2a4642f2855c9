//! Low-level owned storage for the dynamic array.
//!
//! [`RawBuffer`] owns one allocation from the global allocator and tracks how
//! many leading slots hold initialised values. It is the only module in the
//! crate that contains `unsafe`; each block carries a `// SAFETY:` comment.
//!
//! The methods exposed to the rest of the crate are safe. Their
//! preconditions (index within length, room within capacity) are checked
//! with `assert!`: a violation is a bug in the caller, not a recoverable
//! error, so the array layer validates arguments and reports
//! [`ArrayError`]s before it gets here.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};
use std::slice;

use crate::error::ArrayError;

/// Owned, contiguous storage for up to `cap` values of `T`, of which the
/// first `len` are initialised.
///
/// The capacity is never zero. Zero-sized `T` never touches the allocator:
/// the pointer stays dangling and the capacity is purely logical.
pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    cap: usize,
    len: usize,
    _marker: PhantomData<T>,
}

// SAFETY: RawBuffer uniquely owns its values, exactly like Box<[T]>, so
// moving it to another thread moves the values.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

fn layout_for<T>(cap: usize) -> Result<Layout, ArrayError> {
    Layout::array::<T>(cap).map_err(|_| ArrayError::AllocationFailed { requested: cap })
}

impl<T> RawBuffer<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Allocate storage for `cap` values.
    ///
    /// # Panics
    ///
    /// Panics if `cap` is zero.
    pub(crate) fn with_capacity(cap: usize) -> Result<Self, ArrayError> {
        assert!(cap >= 1, "raw buffer capacity must be non-zero");
        let ptr = if Self::IS_ZST {
            NonNull::dangling()
        } else {
            let layout = layout_for::<T>(cap)?;
            // SAFETY: `T` is not zero-sized and `cap >= 1`, so the layout has
            // a non-zero size.
            let raw = unsafe { alloc::alloc(layout) };
            NonNull::new(raw.cast::<T>()).ok_or(ArrayError::AllocationFailed { requested: cap })?
        };
        Ok(Self {
            ptr,
            cap,
            len: 0,
            _marker: PhantomData,
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialised, the pointer is
        // non-null and aligned (dangling is fine for len 0 or zero-sized T).
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for `as_slice`; `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Move the initialised values into an allocation of exactly `new_cap`
    /// slots.
    ///
    /// On failure the old allocation is untouched and still owned by `self`.
    ///
    /// # Panics
    ///
    /// Panics if `new_cap` is zero or smaller than the current length.
    pub(crate) fn reallocate(&mut self, new_cap: usize) -> Result<(), ArrayError> {
        assert!(
            new_cap >= 1 && new_cap >= self.len,
            "reallocation to {new_cap} would drop live values (len {})",
            self.len
        );
        if new_cap == self.cap {
            return Ok(());
        }
        if !Self::IS_ZST {
            let old_layout = layout_for::<T>(self.cap)?;
            let new_layout = layout_for::<T>(new_cap)?;
            // SAFETY: `ptr` was returned by the global allocator for
            // `old_layout` (same `T`, same `cap`). `new_layout.size()` is
            // non-zero and `Layout::array` already checked it does not
            // overflow `isize` once rounded to the alignment.
            let raw = unsafe {
                alloc::realloc(
                    self.ptr.as_ptr().cast::<u8>(),
                    old_layout,
                    new_layout.size(),
                )
            };
            // A null return leaves the old block valid; keep pointing at it.
            self.ptr = NonNull::new(raw.cast::<T>())
                .ok_or(ArrayError::AllocationFailed { requested: new_cap })?;
        }
        self.cap = new_cap;
        Ok(())
    }

    /// Write `value` into the first free slot.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is full.
    pub(crate) fn push(&mut self, value: T) {
        assert!(self.len < self.cap, "push into a full raw buffer");
        // SAFETY: `len < cap`, so the slot is inside the allocation and
        // holds no live value.
        unsafe { ptr::write(self.ptr.as_ptr().add(self.len), value) };
        self.len += 1;
    }

    /// Open a one-slot gap at `index` and write `value` into it.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or the buffer is full.
    pub(crate) fn insert(&mut self, index: usize, value: T) {
        assert!(index <= self.len, "insert index {index} past length {}", self.len);
        assert!(self.len < self.cap, "insert into a full raw buffer");
        // SAFETY: `index <= len` and `len + 1 <= cap`. The gap left at
        // `index` is filled before anything can observe it.
        unsafe {
            self.shift_right(index, 1);
            ptr::write(self.ptr.as_ptr().add(index), value);
        }
        self.len += 1;
    }

    /// Clone every value of `src` onto the end.
    ///
    /// If a `clone` panics, the values cloned so far stay in the buffer and
    /// the length counts them.
    ///
    /// # Panics
    ///
    /// Panics if `src` does not fit in the remaining capacity.
    pub(crate) fn extend_from_slice(&mut self, src: &[T])
    where
        T: Clone,
    {
        assert!(
            src.len() <= self.cap - self.len,
            "{} values do not fit in {} free slots",
            src.len(),
            self.cap - self.len
        );
        for value in src {
            let value = value.clone();
            // SAFETY: checked above that `len < cap` for every iteration.
            unsafe { ptr::write(self.ptr.as_ptr().add(self.len), value) };
            self.len += 1;
        }
    }

    /// Remove and return the last value.
    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was initialised and is now outside the live
        // range, so ownership moves to the caller exactly once.
        Some(unsafe { ptr::read(self.ptr.as_ptr().add(self.len)) })
    }

    /// Remove and return the value at `index`, closing the gap.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub(crate) fn take(&mut self, index: usize) -> T {
        assert!(index < self.len, "take index {index} past length {}", self.len);
        // SAFETY: `index < len`, so the slot is live. It is read out once
        // and immediately overwritten by the shift.
        let value = unsafe {
            let value = ptr::read(self.ptr.as_ptr().add(index));
            self.shift_left(index, 1);
            value
        };
        self.len -= 1;
        value
    }

    /// Drop `count` values starting at `start` and close the gap.
    ///
    /// If a destructor panics, the values after the range are leaked rather
    /// than dropped twice.
    ///
    /// # Panics
    ///
    /// Panics if `start + count > len`.
    pub(crate) fn remove_range(&mut self, start: usize, count: usize) {
        assert!(
            start <= self.len && count <= self.len - start,
            "range {start}+{count} past length {}",
            self.len
        );
        if count == 0 {
            return;
        }
        let old_len = self.len;
        self.len = start;
        // SAFETY: `[start, start + count)` is live and, with `len` lowered
        // to `start`, no longer reachable from `self`.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.ptr.as_ptr().add(start),
                count,
            ));
        }
        self.len = old_len;
        // SAFETY: `start + count <= len`; the dropped slots are overwritten.
        unsafe { self.shift_left(start, count) };
        self.len = old_len - count;
    }

    /// Drop every value at or past `new_len`.
    pub(crate) fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail = self.len - new_len;
        self.len = new_len;
        // SAFETY: `[new_len, new_len + tail)` was live and is no longer
        // covered by `len`.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.ptr.as_ptr().add(new_len),
                tail,
            ));
        }
    }

    /// Move `[start, len)` up by `amount` slots, leaving
    /// `[start, start + amount)` logically uninitialised.
    ///
    /// # Safety
    ///
    /// `start <= len` and `len + amount <= cap`. The caller must refill the
    /// gap before `len` is next raised over it.
    unsafe fn shift_right(&mut self, start: usize, amount: usize) {
        let base = self.ptr.as_ptr();
        // SAFETY: both ranges lie inside the allocation per the contract;
        // `ptr::copy` handles the overlap.
        unsafe { ptr::copy(base.add(start), base.add(start + amount), self.len - start) };
    }

    /// Move `[start + amount, len)` down to begin at `start`.
    ///
    /// # Safety
    ///
    /// `start + amount <= len`, and the values in `[start, start + amount)`
    /// must already have been moved out or dropped.
    unsafe fn shift_left(&mut self, start: usize, amount: usize) {
        let base = self.ptr.as_ptr();
        // SAFETY: both ranges lie inside the live prefix per the contract;
        // `ptr::copy` handles the overlap.
        unsafe {
            ptr::copy(
                base.add(start + amount),
                base.add(start),
                self.len - start - amount,
            )
        };
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        self.truncate(0);
        if Self::IS_ZST {
            return;
        }
        if let Ok(layout) = layout_for::<T>(self.cap) {
            // SAFETY: `ptr` was allocated by the global allocator with this
            // layout and is not used again.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}
