//! Scenario and boundary integration tests.
//!
//! Each scenario starts from a fixture state, applies one or two public
//! operations, and checks both contents and the capacity that results.

use dynarr::{ArrayError, DynamicArray, ShrinkPolicy};
use dynarr_test_utils::fixtures::{assert_contents, letters, sparse};

// ── Scenarios ───────────────────────────────────────────────────

#[test]
fn seventeen_pushes_from_capacity_one_reach_32() {
    let d = letters(17);
    assert_eq!(d.length(), 17);
    assert_eq!(d.capacity(), 32);
    assert_contents(&d, b"abcdefghijklmnopq");
}

#[test]
fn append_after_pushes_lands_at_old_length() {
    let mut d = letters(17);
    d.append(b"xyz").unwrap();
    assert_eq!(d.length(), 20);
    assert_eq!(d.get(17), Ok(&b'x'));
    assert_eq!(d.get(18), Ok(&b'y'));
    assert_eq!(d.get(19), Ok(&b'z'));
}

#[test]
fn eager_remove_of_everything_trims_to_one() {
    let mut d = letters(17);
    d.append(b"xyz").unwrap();
    d.remove_n_and_trim(0, 20).unwrap();
    assert_eq!(d.length(), 0);
    assert_eq!(d.capacity(), 1);
}

#[test]
fn repeated_front_inserts_reverse_order() {
    let mut d = DynamicArray::new(4).unwrap();
    d.insert(0, b'1').unwrap();
    d.insert(0, b'2').unwrap();
    d.insert(0, b'3').unwrap();
    assert_contents(&d, b"321");
    assert_eq!(d.capacity(), 4);
}

#[test]
fn lazy_remove_from_sparse_array_shrinks_to_length() {
    let mut d = sparse(10, 40);
    d.remove_n(0, 1).unwrap();
    assert_eq!(d.length(), 9);
    assert_eq!(d.capacity(), 9);
    assert_contents(&d, &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

// ── Boundaries ──────────────────────────────────────────────────

#[test]
fn index_equal_to_length_is_rejected_except_by_insert() {
    let mut d = letters(3);
    let oob = ArrayError::IndexOutOfBounds {
        index: 3,
        length: 3,
    };
    assert_eq!(d.get(3).unwrap_err(), oob);
    assert_eq!(d.set(3, b'x').unwrap_err(), oob);
    assert_eq!(d.remove(3).unwrap_err(), oob);
    assert!(d.insert(3, b'd').is_ok());
    assert_contents(&d, b"abcd");
}

#[test]
fn wrapped_negative_index_is_rejected_everywhere() {
    let minus_one = -1isize as usize;
    let mut d = letters(3);
    assert!(matches!(
        d.get(minus_one),
        Err(ArrayError::IndexOutOfBounds { .. })
    ));
    assert!(matches!(
        d.set(minus_one, b'x'),
        Err(ArrayError::IndexOutOfBounds { .. })
    ));
    assert!(matches!(
        d.insert(minus_one, b'x'),
        Err(ArrayError::IndexOutOfBounds { .. })
    ));
    assert!(matches!(
        d.remove(minus_one),
        Err(ArrayError::IndexOutOfBounds { .. })
    ));
    assert!(matches!(
        d.remove_n(minus_one, 1),
        Err(ArrayError::IndexOutOfBounds { .. })
    ));
    assert_contents(&d, b"abc");
}

#[test]
fn empty_array_refuses_element_reads_and_pops() {
    let mut d: DynamicArray<u8> = DynamicArray::new_default().unwrap();
    assert!(matches!(d.first(), Err(ArrayError::Empty { .. })));
    assert!(matches!(d.last(), Err(ArrayError::Empty { .. })));
    assert!(matches!(d.pop_back(), Err(ArrayError::Empty { .. })));
    assert!(matches!(d.pop_front(), Err(ArrayError::Empty { .. })));
    assert_eq!(d.capacity(), 1);
}

#[test]
fn failed_operations_leave_capacity_and_contents_alone() {
    let mut d = letters(5);
    let capacity = d.capacity();
    let _ = d.insert(9, b'x');
    let _ = d.remove_n(2, 10);
    let _ = d.append_n(b"xy", 5);
    let _ = d.reserve(usize::MAX);
    assert_eq!(d.capacity(), capacity);
    assert_contents(&d, b"abcde");
}

// ── Round trips ─────────────────────────────────────────────────

#[test]
fn push_front_then_pop_front_restores_sequence() {
    let mut d = letters(6);
    d.push_front(b'!').unwrap();
    assert_eq!(d.pop_front(), Ok(b'!'));
    assert_contents(&d, b"abcdef");
}

#[test]
fn insert_then_remove_restores_sequence_at_every_position() {
    for at in 0..=6 {
        let mut d = letters(6);
        d.insert(at, b'#').unwrap();
        assert_eq!(d.remove(at), Ok(b'#'));
        assert_contents(&d, b"abcdef");
    }
}

#[test]
fn trim_twice_is_trim_once() {
    let mut d = letters(9);
    d.trim().unwrap();
    let once = d.capacity();
    d.trim().unwrap();
    assert_eq!(d.capacity(), once);
    assert_eq!(once, 9);
}

#[test]
fn alternating_push_pop_reallocates_once() {
    let mut d = letters(16);
    assert_eq!(d.capacity(), 16);
    for _ in 0..100 {
        d.push_back(b'+').unwrap();
        d.pop_back().unwrap();
    }
    assert_eq!(d.capacity(), 32);
    assert_eq!(d.length(), 16);
}

#[test]
fn lazy_policy_holds_capacity_until_half_empty() {
    let mut d = sparse(16, 16);
    d.remove_n_with(0, 1, ShrinkPolicy::Lazy).unwrap();
    assert_eq!(d.capacity(), 16);
    d.remove_n_with(0, 7, ShrinkPolicy::Lazy).unwrap();
    assert_eq!(d.length(), 8);
    assert_eq!(d.capacity(), 8);
}

#[test]
fn arrays_move_across_threads() {
    let d = letters(4);
    let handle = std::thread::spawn(move || {
        let mut d = d;
        d.push_back(b'e').unwrap();
        d
    });
    let d = handle.join().unwrap();
    assert_contents(&d, b"abcde");
}
