//! A growable, contiguous, random-access array with explicit capacity
//! management.
//!
//! [`DynamicArray`] supports amortised O(1) append, O(1) indexed access,
//! insertion and removal at arbitrary positions, bulk append, and explicit
//! growth, trimming and clearing. Every fallible operation returns an
//! [`ArrayError`] instead of aborting, and leaves the array unchanged when it
//! does.
//!
//! # Architecture
//!
//! ```text
//! DynamicArray<T>            (bounds checks, growth/shrink policy)
//! ├── ArrayConfig            (initial capacity, growth factor)
//! ├── ShrinkPolicy           (Retain / Lazy / Eager after removal)
//! └── RawBuffer<T>           (allocation, overlap-safe shifting)
//! ```
//!
//! # Capacity policy
//!
//! - **Single-element growth** (`push_back`, `push_front`, `insert`):
//!   multiply the capacity by the growth factor (default 2) when full.
//! - **Bulk growth** (`append`): one reallocation to the next power of two
//!   that holds the combined length.
//! - **Lazy shrink** (`remove_n`, `remove`): reallocate to the length once
//!   `capacity >= growth_factor * length`.
//! - **Eager shrink** (`remove_n_and_trim`, `remove_and_trim`, `trim`):
//!   always reallocate to the length. Capacity never drops below 1.
//!
//! # Safety
//!
//! `unsafe` is confined to the private `raw` module. Reallocation keeps
//! the old buffer until the new one is confirmed, so a failed allocation
//! never leaves a dangling buffer or `capacity < length`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;
pub mod policy;
mod raw;

// Public re-exports for the primary API surface.
pub use array::{release, DynamicArray};
pub use config::ArrayConfig;
pub use error::ArrayError;
pub use policy::ShrinkPolicy;
