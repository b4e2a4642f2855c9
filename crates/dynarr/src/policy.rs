//! Shrink policies applied after element removal.

/// What a removal does to the capacity once the elements are gone.
///
/// All removal operations share one shifting primitive
/// ([`DynamicArray::remove_n_with`](crate::DynamicArray::remove_n_with));
/// the policy is the only thing that differs between them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShrinkPolicy {
    /// Never reallocate. Used by `pop_back` / `pop_front`.
    Retain,
    /// Reallocate to exactly the new length only when
    /// `capacity >= growth_factor * length`. The gap between the grow and
    /// shrink thresholds keeps alternating push/pop from reallocating on
    /// every call.
    #[default]
    Lazy,
    /// Always reallocate to exactly the new length (minimum 1).
    Eager,
}

impl ShrinkPolicy {
    /// The capacity the buffer should be reallocated to after a removal,
    /// or `None` if it should stay as it is.
    pub fn target_capacity(
        self,
        capacity: usize,
        length: usize,
        growth_factor: usize,
    ) -> Option<usize> {
        let fitted = length.max(1);
        if fitted == capacity {
            return None;
        }
        match self {
            Self::Retain => None,
            Self::Lazy => {
                // Saturate: a threshold past usize::MAX can never be reached.
                let threshold = length.saturating_mul(growth_factor);
                (capacity >= threshold).then_some(fitted)
            }
            Self::Eager => Some(fitted),
        }
    }
}
