//! Container error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during dynamic array operations.
///
/// Every variant is reported before the array is mutated, so the array is
/// left exactly as it was when the error is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The allocator could not satisfy a growth or trim request, or the
    /// requested byte size does not fit in `isize`.
    AllocationFailed {
        /// Number of element slots requested.
        requested: usize,
    },
    /// An index argument is outside the bound documented for the operation.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the array at the time of the call.
        length: usize,
    },
    /// An operation that needs at least one element was called on an
    /// empty array.
    Empty {
        /// Name of the operation that was refused.
        operation: &'static str,
    },
    /// An argument is malformed in a way other than a plain bad index
    /// (e.g. a removal range that runs past the end).
    InvalidArgument {
        /// Human-readable description of the problem.
        reason: String,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed: requested {requested} slots")
            }
            Self::IndexOutOfBounds { index, length } => {
                write!(f, "index {index} out of bounds for length {length}")
            }
            Self::Empty { operation } => {
                write!(f, "{operation} called on an empty array")
            }
            Self::InvalidArgument { reason } => {
                write!(f, "invalid argument: {reason}")
            }
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_bad_index() {
        let err = ArrayError::IndexOutOfBounds {
            index: 7,
            length: 3,
        };
        assert_eq!(err.to_string(), "index 7 out of bounds for length 3");
    }

    #[test]
    fn display_names_the_operation() {
        let err = ArrayError::Empty {
            operation: "pop_front",
        };
        assert_eq!(err.to_string(), "pop_front called on an empty array");
    }

    #[test]
    fn errors_are_comparable() {
        let a = ArrayError::AllocationFailed { requested: 4 };
        assert_eq!(a.clone(), a);
        assert_ne!(a, ArrayError::AllocationFailed { requested: 8 });
    }
}
