//! Benchmark workloads for the dynarr container.
//!
//! Provides deterministic operation streams for the criterion benches:
//!
//! - [`filled`]: an array of `0..len` built by repeated `push_back`
//! - [`mixed_workload`]: seeded stream of inserts and removals
//! - [`apply`]: run a workload against an array

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarr::{ArrayError, DynamicArray, ShrinkPolicy};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One step of a mixed workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Append a value at the end.
    Push(u64),
    /// Insert a value at `position % (len + 1)`.
    Insert {
        /// Raw position, reduced against the live length when applied.
        position: usize,
        /// Value to insert.
        value: u64,
    },
    /// Remove a run starting at `position % len`, clamped to the end.
    Remove {
        /// Raw position, reduced against the live length when applied.
        position: usize,
        /// Number of elements to remove.
        count: usize,
        /// Capacity policy applied afterwards.
        policy: ShrinkPolicy,
    },
}

/// Build an array holding `0..len`, grown one push at a time from
/// capacity 1.
pub fn filled(len: usize) -> Result<DynamicArray<u64>, ArrayError> {
    let mut array = DynamicArray::new_default()?;
    for i in 0..len as u64 {
        array.push_back(i)?;
    }
    Ok(array)
}

/// A seeded stream of `steps` operations: roughly half pushes, a quarter
/// inserts and a quarter removals.
pub fn mixed_workload(seed: u64, steps: usize) -> Vec<Op> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..steps)
        .map(|_| {
            let roll = rng.next_u64();
            let position = (rng.next_u64() >> 16) as usize;
            match roll % 4 {
                0 | 1 => Op::Push(roll),
                2 => Op::Insert {
                    position,
                    value: roll,
                },
                _ => Op::Remove {
                    position,
                    count: 1 + (roll as usize >> 8) % 4,
                    policy: if roll & 0x10 == 0 {
                        ShrinkPolicy::Lazy
                    } else {
                        ShrinkPolicy::Eager
                    },
                },
            }
        })
        .collect()
}

/// Apply `ops` to `array`, reducing positions against the live length so
/// every step is valid.
pub fn apply(array: &mut DynamicArray<u64>, ops: &[Op]) -> Result<(), ArrayError> {
    for op in ops {
        match *op {
            Op::Push(value) => array.push_back(value)?,
            Op::Insert { position, value } => {
                let at = position % (array.length() + 1);
                array.insert(at, value)?;
            }
            Op::Remove {
                position,
                count,
                policy,
            } => {
                if array.is_empty() {
                    continue;
                }
                let at = position % array.length();
                let count = count.min(array.length() - at);
                array.remove_n_with(at, count, policy)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workload_is_deterministic() {
        assert_eq!(mixed_workload(7, 100), mixed_workload(7, 100));
        assert_ne!(mixed_workload(7, 100), mixed_workload(8, 100));
    }

    #[test]
    fn workload_applies_cleanly() {
        let mut array = filled(64).unwrap();
        apply(&mut array, &mixed_workload(42, 1_000)).unwrap();
        assert!(array.length() <= array.capacity());
        assert!(array.capacity() >= 1);
    }

    #[test]
    fn filled_has_expected_shape() {
        let array = filled(17).unwrap();
        assert_eq!(array.length(), 17);
        assert_eq!(array.capacity(), 32);
    }
}
