//! The growable, bounds-checked array.
//!
//! [`DynamicArray`] layers the capacity policy (when to grow, how far, when
//! to give memory back) and argument validation over the crate-private
//! `RawBuffer`. Arguments are checked and reallocations attempted before the
//! first element moves, so an `Err` always leaves the array as it was.

use std::fmt;

use tracing::{trace, warn};

use crate::config::ArrayConfig;
use crate::error::ArrayError;
use crate::policy::ShrinkPolicy;
use crate::raw::RawBuffer;

/// A contiguous, growable sequence of `T` with explicit capacity control.
///
/// Invariants, for every reachable state:
///
/// - `1 <= capacity()`
/// - `length() <= capacity()`
/// - slots `[0, length())` hold the live elements, in order.
///
/// Borrowed views (`get`, `first`, `as_slice`, ...) cannot outlive the next
/// `&mut self` call, which is what keeps them valid across reallocation.
pub struct DynamicArray<T> {
    buf: RawBuffer<T>,
    config: ArrayConfig,
}

impl<T> DynamicArray<T> {
    /// Create an empty array with room for `initial_capacity` elements.
    ///
    /// A request for 0 is normalised to 1.
    pub fn new(initial_capacity: usize) -> Result<Self, ArrayError> {
        Self::with_config(ArrayConfig::new(initial_capacity))
    }

    /// Create an empty array with capacity 1.
    pub fn new_default() -> Result<Self, ArrayError> {
        Self::with_config(ArrayConfig::default())
    }

    /// Create an empty array from an explicit configuration.
    ///
    /// Returns `Err(ArrayError::InvalidArgument)` if the configuration does
    /// not validate, or `Err(ArrayError::AllocationFailed)` if the initial
    /// buffer cannot be allocated.
    pub fn with_config(config: ArrayConfig) -> Result<Self, ArrayError> {
        config.validate()?;
        let buf = RawBuffer::with_capacity(config.effective_initial_capacity())?;
        Ok(Self { buf, config })
    }

    /// Consume the array, dropping its elements and releasing the buffer.
    ///
    /// Equivalent to letting it go out of scope.
    pub fn destroy(self) {
        drop(self);
    }

    /// The configuration this array was built with.
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// Total number of allocated element slots.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Number of live elements.
    pub fn length(&self) -> usize {
        self.buf.len()
    }

    /// Alias for [`length`](Self::length).
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// `true` if there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.buf.len() == 0
    }

    /// Slots that can be filled before the next growth.
    pub fn remaining_capacity(&self) -> usize {
        self.buf.capacity() - self.buf.len()
    }

    /// Size of the backing allocation in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.buf.capacity() * std::mem::size_of::<T>()
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }

    // ── Read accessors ──────────────────────────────────────────

    /// The element at index 0.
    pub fn first(&self) -> Result<&T, ArrayError> {
        self.as_slice()
            .first()
            .ok_or(ArrayError::Empty { operation: "first" })
    }

    /// The element at index `length - 1`.
    pub fn last(&self) -> Result<&T, ArrayError> {
        self.as_slice()
            .last()
            .ok_or(ArrayError::Empty { operation: "last" })
    }

    /// The element at `index`.
    ///
    /// Returns `Err(ArrayError::IndexOutOfBounds)` if `index >= length`.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        let length = self.length();
        self.as_slice()
            .get(index)
            .ok_or(ArrayError::IndexOutOfBounds { index, length })
    }

    /// Mutable access to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let length = self.length();
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfBounds { index, length })
    }

    /// Overwrite the element at `index`, returning the previous value.
    ///
    /// Returns `Err(ArrayError::IndexOutOfBounds)` if `index >= length`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ArrayError> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    // ── Growth ──────────────────────────────────────────────────

    /// Append `value` after the last element, doubling the capacity first
    /// if the buffer is full.
    pub fn push_back(&mut self, value: T) -> Result<(), ArrayError> {
        self.grow_for_one()?;
        self.buf.push(value);
        Ok(())
    }

    /// Alias for [`push_back`](Self::push_back).
    pub fn enqueue(&mut self, value: T) -> Result<(), ArrayError> {
        self.push_back(value)
    }

    /// Insert `value` at index 0, shifting every element one slot right.
    pub fn push_front(&mut self, value: T) -> Result<(), ArrayError> {
        self.grow_for_one()?;
        self.buf.insert(0, value);
        Ok(())
    }

    /// Insert `value` at `index`, shifting `[index, length)` one slot right.
    ///
    /// `index == length` appends. Returns
    /// `Err(ArrayError::IndexOutOfBounds)` if `index > length`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        let length = self.length();
        if index > length {
            return Err(ArrayError::IndexOutOfBounds { index, length });
        }
        self.grow_for_one()?;
        self.buf.insert(index, value);
        Ok(())
    }

    /// Make room for at least `additional` more elements with a single
    /// exact reallocation.
    pub fn reserve(&mut self, additional: usize) -> Result<(), ArrayError> {
        let required = self.required_capacity(additional)?;
        if required > self.capacity() {
            self.resize_buffer(required, "reserve")?;
        }
        Ok(())
    }

    /// Make the buffer at least `length + additional` slots, reallocating at
    /// most once.
    fn grow_for_bulk(&mut self, additional: usize) -> Result<(), ArrayError> {
        let required = self.required_capacity(additional)?;
        if required <= self.capacity() {
            return Ok(());
        }
        let target = required.checked_next_power_of_two().unwrap_or(required);
        self.resize_buffer(target, "append")
    }

    fn grow_for_one(&mut self) -> Result<(), ArrayError> {
        let capacity = self.capacity();
        if self.length() < capacity {
            return Ok(());
        }
        let target = capacity
            .checked_mul(self.config.growth_factor)
            .ok_or(ArrayError::AllocationFailed {
                requested: usize::MAX,
            })?;
        self.resize_buffer(target, "grow")
    }

    fn required_capacity(&self, additional: usize) -> Result<usize, ArrayError> {
        self.length()
            .checked_add(additional)
            .ok_or(ArrayError::AllocationFailed {
                requested: usize::MAX,
            })
    }

    fn resize_buffer(&mut self, target: usize, reason: &'static str) -> Result<(), ArrayError> {
        let old_capacity = self.capacity();
        self.buf.reallocate(target)?;
        trace!(
            old_capacity,
            new_capacity = target,
            length = self.length(),
            reason,
            "dynamic array reallocated"
        );
        Ok(())
    }

    // ── Shrink ──────────────────────────────────────────────────

    /// Remove and return the last element. Never shrinks the capacity.
    pub fn pop_back(&mut self) -> Result<T, ArrayError> {
        self.buf.pop().ok_or(ArrayError::Empty {
            operation: "pop_back",
        })
    }

    /// Remove and return the element at index 0, shifting the rest one slot
    /// left. Never shrinks the capacity.
    pub fn pop_front(&mut self) -> Result<T, ArrayError> {
        if self.is_empty() {
            return Err(ArrayError::Empty {
                operation: "pop_front",
            });
        }
        Ok(self.buf.take(0))
    }

    /// Alias for [`pop_front`](Self::pop_front).
    pub fn dequeue(&mut self) -> Result<T, ArrayError> {
        self.pop_front()
    }

    /// Remove `count` elements starting at `index`, then shrink to fit if
    /// `capacity >= growth_factor * length`.
    pub fn remove_n(&mut self, index: usize, count: usize) -> Result<(), ArrayError> {
        self.remove_n_with(index, count, ShrinkPolicy::Lazy)
    }

    /// Remove `count` elements starting at `index`, then always shrink to
    /// fit (capacity 1 if the array ends up empty).
    pub fn remove_n_and_trim(&mut self, index: usize, count: usize) -> Result<(), ArrayError> {
        self.remove_n_with(index, count, ShrinkPolicy::Eager)
    }

    /// Remove and return the element at `index` under the lazy shrink
    /// policy.
    pub fn remove(&mut self, index: usize) -> Result<T, ArrayError> {
        self.take_with(index, ShrinkPolicy::Lazy)
    }

    /// Remove and return the element at `index`, then shrink to fit.
    pub fn remove_and_trim(&mut self, index: usize) -> Result<T, ArrayError> {
        self.take_with(index, ShrinkPolicy::Eager)
    }

    /// Remove `count` contiguous elements starting at `index`, shifting the
    /// tail left, then apply `policy` to the capacity.
    ///
    /// - `count == 0` is a no-op for any `index`.
    /// - `index >= length` returns `Err(ArrayError::IndexOutOfBounds)`.
    /// - `index + count > length` returns `Err(ArrayError::InvalidArgument)`.
    ///
    /// The removal itself cannot fail once validated. If the follow-up
    /// shrink cannot be allocated, the removal stands, the larger buffer is
    /// kept, and a warning is logged.
    pub fn remove_n_with(
        &mut self,
        index: usize,
        count: usize,
        policy: ShrinkPolicy,
    ) -> Result<(), ArrayError> {
        if count == 0 {
            return Ok(());
        }
        self.check_range(index, count)?;
        self.buf.remove_range(index, count);
        self.apply_shrink(policy);
        Ok(())
    }

    fn take_with(&mut self, index: usize, policy: ShrinkPolicy) -> Result<T, ArrayError> {
        self.check_range(index, 1)?;
        let value = self.buf.take(index);
        self.apply_shrink(policy);
        Ok(value)
    }

    fn check_range(&self, index: usize, count: usize) -> Result<(), ArrayError> {
        let length = self.length();
        if index >= length {
            return Err(ArrayError::IndexOutOfBounds { index, length });
        }
        if count > length - index {
            return Err(ArrayError::InvalidArgument {
                reason: format!(
                    "range of {count} elements at index {index} runs past length {length}"
                ),
            });
        }
        Ok(())
    }

    fn apply_shrink(&mut self, policy: ShrinkPolicy) {
        let Some(target) =
            policy.target_capacity(self.capacity(), self.length(), self.config.growth_factor)
        else {
            return;
        };
        if let Err(err) = self.resize_buffer(target, "shrink") {
            warn!(
                error = %err,
                capacity = self.capacity(),
                length = self.length(),
                "shrink after removal failed; keeping the larger buffer"
            );
        }
    }

    /// Reallocate the buffer to exactly `max(length, 1)` slots.
    ///
    /// A no-op when the capacity already fits. On failure the array is
    /// unchanged.
    pub fn trim(&mut self) -> Result<(), ArrayError> {
        let fitted = self.length().max(1);
        if fitted == self.capacity() {
            return Ok(());
        }
        self.resize_buffer(fitted, "trim")
    }

    /// Drop every element. The capacity is untouched.
    pub fn clear(&mut self) {
        self.buf.truncate(0);
    }

    /// Drop every element at or past `length`. The capacity is untouched.
    pub fn truncate(&mut self, length: usize) {
        self.buf.truncate(length);
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Build an array holding a copy of `src`, with capacity exactly
    /// `max(src.len(), 1)`.
    pub fn from_slice(src: &[T]) -> Result<Self, ArrayError> {
        let mut array = Self::new(src.len())?;
        array.buf.extend_from_slice(src);
        Ok(array)
    }

    /// Append a copy of every element of `src`.
    ///
    /// If the free slots do not suffice, the buffer is reallocated once, to
    /// the smallest power of two that holds `length + src.len()` elements.
    pub fn append(&mut self, src: &[T]) -> Result<(), ArrayError> {
        if src.is_empty() {
            return Ok(());
        }
        self.grow_for_bulk(src.len())?;
        self.buf.extend_from_slice(src);
        Ok(())
    }

    /// Append the first `count` elements of `src`.
    ///
    /// Returns `Err(ArrayError::InvalidArgument)` if `count > src.len()`.
    pub fn append_n(&mut self, src: &[T], count: usize) -> Result<(), ArrayError> {
        let head = src.get(..count).ok_or_else(|| ArrayError::InvalidArgument {
            reason: format!("cannot append {count} elements from a source of {}", src.len()),
        })?;
        self.append(head)
    }

    /// Copy the array into a new allocation of the same capacity.
    pub fn try_clone(&self) -> Result<Self, ArrayError> {
        let mut buf = RawBuffer::with_capacity(self.capacity())?;
        buf.extend_from_slice(self.as_slice());
        Ok(Self {
            buf,
            config: self.config,
        })
    }
}

/// Drop the array held in `slot`, if any, leaving `None` behind.
///
/// Calling it on an already-released slot is a no-op.
pub fn release<T>(slot: &mut Option<DynamicArray<T>>) {
    if let Some(array) = slot.take() {
        array.destroy();
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Default for DynamicArray<T> {
    /// An empty array with capacity 1.
    ///
    /// # Panics
    ///
    /// Panics if the single-slot buffer cannot be allocated. Use
    /// [`DynamicArray::new_default`] to handle that case.
    fn default() -> Self {
        match Self::new_default() {
            Ok(array) => array,
            Err(err) => panic!("{err}"),
        }
    }
}
