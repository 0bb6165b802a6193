//! Priority queue over (value, priority) pairs
//!
//! [`PriorityQueue`] stores [`Prioritized`] entries and orders them by
//! priority alone; the value is never compared. Priorities default to `f64`
//! but any [`PartialOrd`] type works.
//!
//! Without a comparator the *value* type is still subject to the type lock
//! (see [`orderable`](crate::orderable)); the priority is exempt.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `enqueue` | O(log n)   |
//! | `dequeue` | O(log n)   |
//! | `peek`    | O(1)       |
//! | `copy`    | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use rust_heap_containers::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.enqueue("five", 5.0).unwrap();
//! queue.enqueue("three", 3.0).unwrap();
//! queue.enqueue("eight", 8.0).unwrap();
//!
//! assert_eq!(queue.dequeue(), Some("three"));
//! assert_eq!(queue.peek_priority(), Some(&5.0));
//! ```

use std::fmt;

use tracing::debug;

use crate::config::{HeapMode, HeapOptions};
use crate::engine::{Comparator, HeapEngine};
use crate::orderable::{Category, Orderable};
use crate::traits::{Container, ContainerError};

/// A value paired with its priority
#[derive(Debug, Clone, PartialEq)]
pub struct Prioritized<T, P = f64> {
    /// The stored value; never compared
    pub value: T,
    /// The ordering key
    pub priority: P,
}

impl<T, P> Prioritized<T, P> {
    /// Pairs `value` with `priority`
    pub fn new(value: T, priority: P) -> Self {
        Self { value, priority }
    }

    /// Splits the entry into its value and priority
    pub fn into_parts(self) -> (T, P) {
        (self.value, self.priority)
    }
}

fn priority_of<T, P>(entry: &Prioritized<T, P>) -> &P {
    &entry.priority
}

fn value_category<T: Orderable, P>(entry: &Prioritized<T, P>) -> Category {
    entry.value.category()
}

/// A priority queue built on the binary heap engine
#[derive(Debug)]
pub struct PriorityQueue<T, P = f64> {
    engine: HeapEngine<Prioritized<T, P>, P>,
}

impl<T: Orderable, P: PartialOrd> PriorityQueue<T, P> {
    /// Creates an empty queue; the lowest priority is dequeued first
    pub fn new() -> Self {
        Self::with_options(HeapOptions::new())
    }

    /// Creates an empty queue with the given mode
    pub fn with_mode(mode: HeapMode) -> Self {
        Self::with_options(HeapOptions::new().mode(mode))
    }

    /// Creates an empty queue from a mode name
    ///
    /// # Errors
    /// Returns [`ContainerError::InvalidMode`] unless `mode` is `"min"` or `"max"`.
    pub fn with_mode_str(mode: &str) -> Result<Self, ContainerError> {
        Ok(Self::with_mode(mode.parse()?))
    }

    /// Creates an empty queue from construction options
    ///
    /// A comparator in `options` ranks priorities and disables the type lock.
    pub fn with_options(options: HeapOptions<P>) -> Self {
        Self {
            engine: HeapEngine::new(
                options,
                priority_of::<T, P>,
                value_category::<T, P>,
            ),
        }
    }
}

impl<T, P> PriorityQueue<T, P> {
    /// Creates an empty queue whose priorities are ranked by `comparator`
    ///
    /// Values may be of any type; no type lock applies.
    pub fn with_comparator(comparator: Comparator<P>) -> Self {
        Self::with_mode_and_comparator(HeapMode::default(), comparator)
    }

    /// Creates an empty queue ranked by `comparator`, recording `mode`
    pub fn with_mode_and_comparator(mode: HeapMode, comparator: Comparator<P>) -> Self {
        Self {
            engine: HeapEngine::with_comparator(mode, comparator, priority_of::<T, P>),
        }
    }

    /// Adds `value` with the given priority
    ///
    /// # Errors
    /// Returns [`ContainerError::TypeMismatch`] if the queue has no
    /// comparator and `value`'s category is composite or differs from the
    /// locked one.
    pub fn enqueue(&mut self, value: T, priority: P) -> Result<(), ContainerError> {
        self.engine.push(Prioritized { value, priority })
    }

    /// Removes the top entry and returns its value, or `None` if empty
    pub fn dequeue(&mut self) -> Option<T> {
        self.dequeue_entry().map(|entry| entry.value)
    }

    /// Removes and returns the top entry, or `None` if empty
    pub fn dequeue_entry(&mut self) -> Option<Prioritized<T, P>> {
        self.engine.pop()
    }

    /// Returns the top value without removing it, or `None` if empty
    pub fn peek(&self) -> Option<&T> {
        self.peek_entry().map(|entry| &entry.value)
    }

    /// Returns the top entry without removing it, or `None` if empty
    pub fn peek_entry(&self) -> Option<&Prioritized<T, P>> {
        self.engine.peek()
    }

    /// Returns the top priority without removing it, or `None` if empty
    pub fn peek_priority(&self) -> Option<&P> {
        self.peek_entry().map(|entry| &entry.priority)
    }

    /// Returns the number of entries in the queue
    pub fn len(&self) -> usize {
        self.engine.len()
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.engine.is_empty()
    }

    /// Mode recorded at construction; ignored when a comparator is set
    pub fn mode(&self) -> HeapMode {
        self.engine.mode()
    }

    /// Returns true if a comparator ranks the priorities
    pub fn has_comparator(&self) -> bool {
        self.engine.has_comparator()
    }

    /// Category of values locked by the first enqueue, if any
    pub fn locked_category(&self) -> Option<Category> {
        self.engine.locked_category()
    }

    /// Returns the entry stored in slot `index` of the backing array
    ///
    /// # Errors
    /// Returns [`ContainerError::IndexOutOfBounds`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&Prioritized<T, P>, ContainerError> {
        self.engine.get(index)
    }

    /// The backing array in tree layout order
    pub fn as_slice(&self) -> &[Prioritized<T, P>] {
        self.engine.as_slice()
    }

    /// Independent snapshot of the backing array
    pub fn to_vec(&self) -> Vec<Prioritized<T, P>>
    where
        T: Clone,
        P: Clone,
    {
        self.engine.as_slice().to_vec()
    }

    /// Iterates entries in tree layout order
    pub fn iter(&self) -> std::slice::Iter<'_, Prioritized<T, P>> {
        self.engine.as_slice().iter()
    }

    /// Consumes the queue, returning its entries in dequeue order
    pub fn into_sorted_vec(mut self) -> Vec<Prioritized<T, P>> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(entry) = self.dequeue_entry() {
            sorted.push(entry);
        }
        sorted
    }

    /// Checks the heap property over the backing array
    pub fn is_heap(&self) -> bool {
        self.engine.is_heap()
    }
}

impl<T: Orderable, P: PartialOrd> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, P: Clone> Clone for PriorityQueue<T, P> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.duplicate(),
        }
    }
}

impl<T, P> Container for PriorityQueue<T, P>
where
    T: Clone + PartialEq + fmt::Debug,
    P: Clone + PartialEq + fmt::Debug,
{
    fn size(&self) -> usize {
        self.len()
    }

    fn copy(&self) -> Result<Self, ContainerError> {
        if self.is_empty() {
            debug!("copy of empty priority queue refused");
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

/// Positional equality of both value and priority, slot by slot
impl<T: PartialEq, P: PartialEq> PartialEq for PriorityQueue<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: fmt::Debug, P: fmt::Debug> fmt::Display for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|entry| (&entry.value, &entry.priority)))
            .finish()
    }
}

impl<'a, T, P> IntoIterator for &'a PriorityQueue<T, P> {
    type Item = &'a Prioritized<T, P>;
    type IntoIter = std::slice::Iter<'a, Prioritized<T, P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
