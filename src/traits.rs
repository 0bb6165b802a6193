//! Common traits for the containers in this crate
//!
//! Every container exposes the same small surface through [`Container`]:
//! `size`, `copy`, `clear`, positional structural equality, and string
//! rendering. Failures are reported through a single error type,
//! [`ContainerError`].
//!
//! Note the deliberate asymmetry carried by the heap containers: reading or
//! removing from an empty container yields `None`, while copying an empty
//! container is an error.

use std::fmt;

use crate::orderable::Category;

/// Error type for container operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// The operation needs at least one element (e.g. `copy` of an empty container)
    EmptyCollection,
    /// An element's category does not match the locked category, or the
    /// element has no natural ordering and no comparator was supplied
    TypeMismatch {
        /// Category locked by the first insert, if any
        expected: Option<Category>,
        /// Category of the rejected element
        found: Category,
    },
    /// A mode string other than `min` or `max`
    InvalidMode(String),
    /// A positional access past the end of the backing array
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Number of elements at the time of the access
        len: usize,
    },
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerError::EmptyCollection => {
                write!(f, "operation requires a non-empty collection")
            }
            ContainerError::TypeMismatch {
                expected: Some(expected),
                found,
            } => {
                write!(f, "type mismatch: expected {expected}, found {found}")
            }
            ContainerError::TypeMismatch {
                expected: None,
                found,
            } => {
                write!(f, "type mismatch: {found} values are not comparable without a comparator")
            }
            ContainerError::InvalidMode(mode) => {
                write!(f, "invalid heap mode {mode:?}: expected \"min\" or \"max\"")
            }
            ContainerError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
        }
    }
}

impl std::error::Error for ContainerError {}

/// Uniform surface shared by every container
///
/// Equality through [`Container::equals`] is *positional*: two containers are
/// equal when their backing storage holds equal elements in the same slots.
/// For heaps this is a physical-layout comparison, so two heaps holding the
/// same multiset of elements may compare unequal if they were built by
/// different insertion orders.
///
/// # Example
///
/// ```rust
/// use rust_heap_containers::{BinaryHeap, Container, ContainerError};
///
/// let mut heap: BinaryHeap<i32> = BinaryHeap::new();
/// assert_eq!(heap.copy().unwrap_err(), ContainerError::EmptyCollection);
///
/// heap.insert(2).unwrap();
/// heap.insert(1).unwrap();
/// let snapshot = heap.copy().unwrap();
/// heap.clear();
///
/// assert_eq!(heap.size(), 0);
/// assert_eq!(snapshot.size(), 2);
/// assert_eq!(snapshot.render(), "[1, 2]");
/// ```
pub trait Container {
    /// Returns the number of elements
    fn size(&self) -> usize;

    /// Returns true if the container holds no elements
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Produces an independent duplicate of the container
    ///
    /// # Errors
    /// Returns [`ContainerError::EmptyCollection`] if the container is empty.
    fn copy(&self) -> Result<Self, ContainerError>
    where
        Self: Sized;

    /// Removes every element
    fn clear(&mut self);

    /// Positional structural equality
    fn equals(&self, other: &Self) -> bool;

    /// Renders the backing storage left to right
    fn render(&self) -> String;
}
