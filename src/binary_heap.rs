//! Binary heap over bare values
//!
//! [`BinaryHeap`] stores values directly and uses each value as its own
//! ordering key. It can be a min-heap (the default), a max-heap, or ordered
//! by a [`Comparator`].
//!
//! # Example
//!
//! ```rust
//! use rust_heap_containers::{BinaryHeap, Container, HeapMode};
//!
//! let mut heap = BinaryHeap::with_mode(HeapMode::Max);
//! heap.insert(10).unwrap();
//! heap.insert(20).unwrap();
//! heap.insert(5).unwrap();
//!
//! assert_eq!(heap.size(), 3);
//! assert_eq!(heap.peek(), Some(&20));
//! assert_eq!(heap.remove(), Some(20));
//! assert_eq!(heap.remove(), Some(10));
//! assert_eq!(heap.remove(), Some(5));
//! assert_eq!(heap.remove(), None);
//! ```

use std::fmt;

use tracing::debug;

use crate::config::{HeapMode, HeapOptions};
use crate::engine::{Comparator, HeapEngine};
use crate::orderable::{Category, Orderable};
use crate::traits::{Container, ContainerError};

fn identity<T>(value: &T) -> &T {
    value
}

/// A binary heap of bare values
///
/// Without a comparator the element type must be [`Orderable`], and the
/// heap applies the type lock described in [`orderable`](crate::orderable).
#[derive(Debug)]
pub struct BinaryHeap<T> {
    engine: HeapEngine<T, T>,
}

impl<T: Orderable> BinaryHeap<T> {
    /// Creates an empty min-heap
    pub fn new() -> Self {
        Self::with_options(HeapOptions::new())
    }

    /// Creates an empty heap with the given mode
    pub fn with_mode(mode: HeapMode) -> Self {
        Self::with_options(HeapOptions::new().mode(mode))
    }

    /// Creates an empty heap from a mode name
    ///
    /// # Errors
    /// Returns [`ContainerError::InvalidMode`] unless `mode` is `"min"` or `"max"`.
    pub fn with_mode_str(mode: &str) -> Result<Self, ContainerError> {
        Ok(Self::with_mode(mode.parse()?))
    }

    /// Creates an empty heap from construction options
    pub fn with_options(options: HeapOptions<T>) -> Self {
        Self {
            engine: HeapEngine::new(options, identity::<T>, T::category),
        }
    }
}

impl<T> BinaryHeap<T> {
    /// Creates an empty heap ordered by `comparator`
    ///
    /// The element type needs no natural ordering and no type lock applies.
    pub fn with_comparator(comparator: Comparator<T>) -> Self {
        Self::with_mode_and_comparator(HeapMode::default(), comparator)
    }

    /// Creates an empty heap ordered by `comparator`, recording `mode`
    ///
    /// The mode has no effect on ordering; it is reported by [`mode`](Self::mode)
    /// and carried by copies.
    pub fn with_mode_and_comparator(mode: HeapMode, comparator: Comparator<T>) -> Self {
        Self {
            engine: HeapEngine::with_comparator(mode, comparator, identity::<T>),
        }
    }

    /// Inserts a value
    ///
    /// # Errors
    /// Returns [`ContainerError::TypeMismatch`] if the heap has no comparator
    /// and the value's category differs from the locked one or is composite.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn insert(&mut self, value: T) -> Result<(), ContainerError> {
        self.engine.push(value)
    }

    /// Returns the top value without removing it, or `None` if empty
    pub fn peek(&self) -> Option<&T> {
        self.engine.peek()
    }

    /// Removes and returns the top value, or `None` if empty
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn remove(&mut self) -> Option<T> {
        self.engine.pop()
    }

    /// Returns the number of values in the heap
    pub fn len(&self) -> usize {
        self.engine.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.engine.is_empty()
    }

    /// Mode recorded at construction; ignored when a comparator is set
    pub fn mode(&self) -> HeapMode {
        self.engine.mode()
    }

    /// Returns true if a comparator ranks the values
    pub fn has_comparator(&self) -> bool {
        self.engine.has_comparator()
    }

    /// Category locked by the first insert; `None` before it, after
    /// [`clear`](Container::clear), or when a comparator is set
    pub fn locked_category(&self) -> Option<Category> {
        self.engine.locked_category()
    }

    /// Returns the value stored in slot `index` of the backing array
    ///
    /// # Errors
    /// Returns [`ContainerError::IndexOutOfBounds`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, ContainerError> {
        self.engine.get(index)
    }

    /// The backing array in tree layout order (not sorted)
    pub fn as_slice(&self) -> &[T] {
        self.engine.as_slice()
    }

    /// Independent snapshot of the backing array
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.engine.as_slice().to_vec()
    }

    /// Iterates the backing array in tree layout order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.engine.as_slice().iter()
    }

    /// Consumes the heap, returning its values in removal order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(value) = self.remove() {
            sorted.push(value);
        }
        sorted
    }

    /// Inserts every value from `values`, stopping at the first rejection
    ///
    /// # Errors
    /// Returns the first [`ContainerError::TypeMismatch`]; values inserted
    /// before it stay in the heap.
    pub fn try_extend<I>(&mut self, values: I) -> Result<(), ContainerError>
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().try_for_each(|value| self.insert(value))
    }

    /// Checks the heap property over the backing array
    pub fn is_heap(&self) -> bool {
        self.engine.is_heap()
    }
}

impl<T: Orderable> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for BinaryHeap<T> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.duplicate(),
        }
    }
}

impl<T: Clone + PartialEq + fmt::Debug> Container for BinaryHeap<T> {
    fn size(&self) -> usize {
        self.len()
    }

    fn copy(&self) -> Result<Self, ContainerError> {
        if self.is_empty() {
            debug!("copy of empty heap refused");
            return Err(ContainerError::EmptyCollection);
        }
        Ok(self.clone())
    }

    fn clear(&mut self) {
        self.engine.clear();
    }

    fn equals(&self, other: &Self) -> bool {
        self == other
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

/// Positional equality: same length and equal values slot by slot
impl<T: PartialEq> PartialEq for BinaryHeap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Display for BinaryHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a BinaryHeap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for BinaryHeap<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Yields values in tree layout order; see [`BinaryHeap::into_sorted_vec`]
    /// for removal order
    fn into_iter(self) -> Self::IntoIter {
        self.engine.into_vec().into_iter()
    }
}
