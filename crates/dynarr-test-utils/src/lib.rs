//! Test utilities and fixture types for dynarr development.
//!
//! Provides element types that observe how the container treats them
//! ([`DropCounter`] / [`Tracked`] for drop accounting, [`FailingClone`] for
//! panic-safety checks) and, in [`fixtures`], builders for arrays in the
//! states the scenario tests start from.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared counter of how many [`Tracked`] values have been dropped.
///
/// Clone the counter freely; all clones observe the same count.
#[derive(Clone, Debug, Default)]
pub struct DropCounter {
    drops: Arc<AtomicUsize>,
}

impl DropCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` so that dropping it bumps this counter.
    pub fn track<V>(&self, value: V) -> Tracked<V> {
        Tracked {
            value,
            drops: Arc::clone(&self.drops),
        }
    }

    /// Number of tracked values dropped so far.
    pub fn drops(&self) -> usize {
        self.drops.load(Ordering::SeqCst)
    }
}

/// A value that reports its own drop to a [`DropCounter`].
///
/// Cloning produces a second tracked value sharing the same counter, so a
/// clone and its original are counted separately.
pub struct Tracked<V> {
    value: V,
    drops: Arc<AtomicUsize>,
}

impl<V> Tracked<V> {
    pub fn value(&self) -> &V {
        &self.value
    }
}

impl<V: Clone> Clone for Tracked<V> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            drops: Arc::clone(&self.drops),
        }
    }
}

impl<V: PartialEq> PartialEq for Tracked<V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: fmt::Debug> fmt::Debug for Tracked<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}

impl<V> Drop for Tracked<V> {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

/// An element whose `clone` panics once a shared budget is spent.
///
/// Useful for checking that bulk operations leave the container consistent
/// when an element's `Clone` impl unwinds part-way through.
#[derive(Debug)]
pub struct FailingClone {
    pub id: usize,
    budget: Arc<AtomicUsize>,
}

impl FailingClone {
    /// Build `count` elements that together allow `succeed_count` clones
    /// before the next one panics.
    pub fn batch(count: usize, succeed_count: usize) -> Vec<Self> {
        let budget = Arc::new(AtomicUsize::new(succeed_count));
        (0..count)
            .map(|id| Self {
                id,
                budget: Arc::clone(&budget),
            })
            .collect()
    }
}

impl Clone for FailingClone {
    fn clone(&self) -> Self {
        let left = self.budget.load(Ordering::SeqCst);
        if left == 0 {
            panic!("clone budget exhausted at element {}", self.id);
        }
        self.budget.store(left - 1, Ordering::SeqCst);
        Self {
            id: self.id,
            budget: Arc::clone(&self.budget),
        }
    }
}
