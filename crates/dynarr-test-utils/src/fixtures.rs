//! Reusable array fixtures.
//!
//! Builders for the starting states the scenario tests and benches share:
//!
//! - [`letters`] : `'a'`, `'b'`, ... pushed one at a time from capacity 1.
//! - [`sparse`] : a given length inside a much larger capacity.
//! - [`assert_contents`] : compare an array against an expected slice.

use dynarr::DynamicArray;

/// Push the first `count` lowercase letters (wrapping after `'z'`) one at
/// a time onto an array that starts at capacity 1.
pub fn letters(count: usize) -> DynamicArray<u8> {
    let mut array = DynamicArray::new_default().expect("capacity-1 array");
    for i in 0..count {
        array
            .push_back(b'a' + (i % 26) as u8)
            .expect("push within test memory");
    }
    array
}

/// An array of `0..length` inside exactly `capacity` slots.
///
/// # Panics
///
/// Panics if `length > capacity`.
pub fn sparse(length: usize, capacity: usize) -> DynamicArray<u32> {
    assert!(length <= capacity, "sparse fixture needs length <= capacity");
    let mut array = DynamicArray::new(capacity).expect("fixture allocation");
    for i in 0..length {
        array.push_back(i as u32).expect("push within capacity");
    }
    assert_eq!(array.capacity(), capacity.max(1));
    array
}

/// Assert that `array` holds exactly `expected` and respects
/// `length <= capacity`.
pub fn assert_contents<T: PartialEq + std::fmt::Debug>(array: &DynamicArray<T>, expected: &[T]) {
    assert_eq!(array.as_slice(), expected);
    assert_eq!(array.length(), expected.len());
    assert!(
        array.length() <= array.capacity(),
        "length {} exceeds capacity {}",
        array.length(),
        array.capacity()
    );
}
