//! Array configuration parameters.

use crate::error::ArrayError;

/// Configuration for a [`DynamicArray`](crate::DynamicArray).
///
/// Controls the starting capacity and how aggressively the buffer grows.
/// Validated at construction; immutable for the lifetime of the array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of element slots allocated up front.
    ///
    /// Default: 1. A value of 0 is normalised to 1 so that multiplicative
    /// growth always makes progress.
    pub initial_capacity: usize,

    /// Multiplier applied to the capacity when a single-element insertion
    /// finds the buffer full.
    ///
    /// Default: 2. Must be at least 2. The same factor is the lazy-shrink
    /// threshold: a removal reallocates down once
    /// `capacity >= growth_factor * length`.
    pub growth_factor: usize,
}

impl ArrayConfig {
    /// Default initial capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 1;

    /// Default growth factor ("doubling").
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Create a config with the given initial capacity and default growth.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Replace the growth factor.
    pub fn with_growth_factor(mut self, growth_factor: usize) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    /// Check the configuration.
    ///
    /// Returns `Err(ArrayError::InvalidArgument)` if `growth_factor < 2`.
    pub fn validate(&self) -> Result<(), ArrayError> {
        if self.growth_factor < 2 {
            return Err(ArrayError::InvalidArgument {
                reason: format!("growth factor must be at least 2, got {}", self.growth_factor),
            });
        }
        Ok(())
    }

    /// The initial capacity actually allocated (never zero).
    pub fn effective_initial_capacity(&self) -> usize {
        self.initial_capacity.max(1)
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
