//! Binary heap engine shared by [`BinaryHeap`](crate::BinaryHeap) and
//! [`PriorityQueue`](crate::PriorityQueue)
//!
//! The engine owns an array-backed complete binary tree and an ordering rule.
//! Adapters decide what an element looks like and which part of it is the
//! ordering key; the engine only sees elements `E` and a projection
//! `fn(&E) -> &K` to their keys.
//!
//! # Layout
//!
//! The tree is stored 0-indexed: the root is slot 0, the parent of slot `i`
//! is `(i - 1) / 2` and its children are `2i + 1` and `2i + 2`.
//!
//! # Ordering rule
//!
//! `compare(a, b)` is true when `a` must rank at or above `b`. With a
//! [`Comparator`] the comparator decides and the mode is ignored. Otherwise
//! the natural ordering is used strictly: `a < b` in [`HeapMode::Min`] and
//! `a > b` in [`HeapMode::Max`].
//!
//! Comparators may be strict or may also return true for equal keys; the
//! sifts are correct either way. The heap property holds when every parent
//! ranks at or above its children, or when a child does not rank above its
//! parent, which covers ties under both kinds of comparator.
//!
//! # Type lock
//!
//! Engines built without a comparator check every incoming element's
//! [`Category`]. The first accepted element locks the category; later
//! elements must match it, and composite values are always rejected. The
//! check runs before the element is stored, so a rejected insert leaves the
//! heap untouched.
//!
//! # Time Complexity
//!
//! | Operation   | Complexity |
//! |-------------|------------|
//! | `push`      | O(log n)   |
//! | `pop`       | O(log n)   |
//! | `peek`      | O(1)       |
//! | `duplicate` | O(n)       |

use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::config::{HeapMode, HeapOptions};
use crate::orderable::Category;
use crate::traits::ContainerError;

/// Caller-supplied ordering over keys
///
/// The function returns true when its first argument must rank at or above
/// its second. It may be strict (false on equal keys, like `a < b`) or not
/// (true on equal keys, like `a <= b`). Supplying a comparator makes the
/// heap's mode irrelevant and disables the type lock, so any key shape can be
/// ordered.
///
/// Comparators are reference counted; copies of a heap share the same
/// function.
///
/// # Example
///
/// ```rust
/// use rust_heap_containers::{BinaryHeap, Comparator};
///
/// // Order by string length, longest first.
/// let by_len = Comparator::new(|a: &String, b: &String| a.len() > b.len());
/// let mut heap = BinaryHeap::with_comparator(by_len);
/// heap.insert("ab".to_string()).unwrap();
/// heap.insert("abcd".to_string()).unwrap();
/// heap.insert("a".to_string()).unwrap();
/// assert_eq!(heap.peek().map(String::as_str), Some("abcd"));
/// ```
pub struct Comparator<K: ?Sized> {
    rank: Rc<dyn Fn(&K, &K) -> bool>,
}

impl<K: ?Sized> Comparator<K> {
    /// Wraps a ranking function
    pub fn new<F>(rank: F) -> Self
    where
        F: Fn(&K, &K) -> bool + 'static,
    {
        Self {
            rank: Rc::new(rank),
        }
    }

    /// Builds a strict comparator from a three-way ordering; keys that
    /// compare [`Less`](std::cmp::Ordering::Less) rank first
    pub fn by_ordering<F>(cmp: F) -> Self
    where
        F: Fn(&K, &K) -> std::cmp::Ordering + 'static,
    {
        Self::new(move |a, b| cmp(a, b).is_lt())
    }

    /// Applies the comparator
    #[inline]
    pub fn ranks_above(&self, a: &K, b: &K) -> bool {
        (self.rank)(a, b)
    }
}

impl<K: ?Sized> Clone for Comparator<K> {
    fn clone(&self) -> Self {
        Self {
            rank: Rc::clone(&self.rank),
        }
    }
}

impl<K: ?Sized> fmt::Debug for Comparator<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Comparator(..)")
    }
}

/// How two keys are ranked
enum Rule<K: ?Sized> {
    /// The keys' natural ordering in the heap's mode
    Natural(fn(HeapMode, &K, &K) -> bool),
    /// A caller-supplied comparator
    Custom(Comparator<K>),
}

impl<K: ?Sized> Clone for Rule<K> {
    fn clone(&self) -> Self {
        match self {
            Rule::Natural(rank) => Rule::Natural(*rank),
            Rule::Custom(comparator) => Rule::Custom(comparator.clone()),
        }
    }
}

fn natural_rank<K: PartialOrd + ?Sized>(mode: HeapMode, a: &K, b: &K) -> bool {
    mode.ranks_above(a, b)
}

/// Runtime half of the type lock
enum TypeLock<E> {
    /// A comparator is present; any element is accepted
    Disabled,
    /// Elements must share the category of the first accepted element
    Enabled {
        category_of: fn(&E) -> Category,
        locked: Option<Category>,
    },
}

impl<E> Clone for TypeLock<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for TypeLock<E> {}

impl<E> TypeLock<E> {
    fn check(&mut self, element: &E) -> Result<(), ContainerError> {
        let TypeLock::Enabled {
            category_of,
            locked,
        } = self
        else {
            return Ok(());
        };

        let found = (*category_of)(element);
        if !found.is_orderable() {
            debug!(category = %found, "rejected insert: value has no natural ordering");
            return Err(ContainerError::TypeMismatch {
                expected: *locked,
                found,
            });
        }
        match *locked {
            Some(expected) if expected != found => {
                debug!(
                    expected = %expected,
                    found = %found,
                    "rejected insert: category differs from locked category"
                );
                Err(ContainerError::TypeMismatch {
                    expected: Some(expected),
                    found,
                })
            }
            Some(_) => Ok(()),
            None => {
                trace!(category = %found, "type lock acquired");
                *locked = Some(found);
                Ok(())
            }
        }
    }

    fn reset(&mut self) {
        if let TypeLock::Enabled { locked, .. } = self {
            *locked = None;
        }
    }

    fn locked(&self) -> Option<Category> {
        match self {
            TypeLock::Disabled => None,
            TypeLock::Enabled { locked, .. } => *locked,
        }
    }
}

/// Array-backed binary heap over elements `E` keyed by `K`
pub(crate) struct HeapEngine<E, K: ?Sized> {
    data: Vec<E>,
    mode: HeapMode,
    rule: Rule<K>,
    key: fn(&E) -> &K,
    lock: TypeLock<E>,
}

impl<E, K: ?Sized> HeapEngine<E, K> {
    /// Creates an empty engine from construction options
    ///
    /// Without a comparator, keys are ranked by their natural ordering and
    /// elements are checked with `category_of`. With a comparator, both are
    /// ignored.
    pub(crate) fn new(
        options: HeapOptions<K>,
        key: fn(&E) -> &K,
        category_of: fn(&E) -> Category,
    ) -> Self
    where
        K: PartialOrd,
    {
        let HeapOptions { mode, comparator } = options;
        match comparator {
            Some(comparator) => Self::with_comparator(mode, comparator, key),
            None => Self {
                data: Vec::new(),
                mode,
                rule: Rule::Natural(natural_rank::<K>),
                key,
                lock: TypeLock::Enabled {
                    category_of,
                    locked: None,
                },
            },
        }
    }

    /// Creates an empty engine ordered by `comparator`
    pub(crate) fn with_comparator(
        mode: HeapMode,
        comparator: Comparator<K>,
        key: fn(&E) -> &K,
    ) -> Self {
        Self {
            data: Vec::new(),
            mode,
            rule: Rule::Custom(comparator),
            key,
            lock: TypeLock::Disabled,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub(crate) fn mode(&self) -> HeapMode {
        self.mode
    }

    pub(crate) fn has_comparator(&self) -> bool {
        matches!(self.rule, Rule::Custom(_))
    }

    /// Category locked by the first accepted insert, if any
    pub(crate) fn locked_category(&self) -> Option<Category> {
        self.lock.locked()
    }

    /// The backing array in tree layout order
    pub(crate) fn as_slice(&self) -> &[E] {
        &self.data
    }

    pub(crate) fn into_vec(self) -> Vec<E> {
        self.data
    }

    /// Positional access into the backing array
    pub(crate) fn get(&self, index: usize) -> Result<&E, ContainerError> {
        self.data.get(index).ok_or(ContainerError::IndexOutOfBounds {
            index,
            len: self.data.len(),
        })
    }

    pub(crate) fn peek(&self) -> Option<&E> {
        self.data.first()
    }

    /// Returns true if the element in slot `i` must rank at or above the
    /// element in slot `j`
    #[inline]
    pub(crate) fn compare(&self, i: usize, j: usize) -> bool {
        let a = (self.key)(&self.data[i]);
        let b = (self.key)(&self.data[j]);
        match &self.rule {
            Rule::Natural(rank) => rank(self.mode, a, b),
            Rule::Custom(comparator) => comparator.ranks_above(a, b),
        }
    }

    /// Type-checks and appends an element, then restores the heap property
    ///
    /// # Errors
    /// Returns [`ContainerError::TypeMismatch`] if the type lock rejects the
    /// element; the heap is left unchanged.
    pub(crate) fn push(&mut self, element: E) -> Result<(), ContainerError> {
        self.lock.check(&element)?;
        self.data.push(element);
        self.sift_up(self.data.len() - 1);
        Ok(())
    }

    /// Removes the root, moving the last element into its slot
    pub(crate) fn pop(&mut self) -> Option<E> {
        if self.data.is_empty() {
            return None;
        }

        let root = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Some(root)
    }

    /// Empties the array and releases the type lock; mode and comparator stay
    pub(crate) fn clear(&mut self) {
        self.data.clear();
        self.lock.reset();
    }

    /// Move element at index up to maintain heap property
    pub(crate) fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.compare(index, parent) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    ///
    /// A child displaces the current best only when `compare` says so, so
    /// under a strict ordering the left child wins ties.
    pub(crate) fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut best = index;

            if left < len && self.compare(left, best) {
                best = left;
            }
            if right < len && self.compare(right, best) {
                best = right;
            }

            if best != index {
                self.data.swap(index, best);
                index = best;
            } else {
                break;
            }
        }
    }

    /// Checks the heap property over the whole array
    ///
    /// A slot is in order when its parent ranks at or above it, or when it
    /// does not rank above its parent; ties pass for strict and non-strict
    /// comparators alike.
    pub(crate) fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|i| {
            let parent = (i - 1) / 2;
            self.compare(parent, i) || !self.compare(i, parent)
        })
    }

    /// Independent copy of the engine: same mode, comparator, and lock
    pub(crate) fn duplicate(&self) -> Self
    where
        E: Clone,
    {
        Self {
            data: self.data.clone(),
            mode: self.mode,
            rule: self.rule.clone(),
            key: self.key,
            lock: self.lock,
        }
    }
}

impl<E: fmt::Debug, K: ?Sized> fmt::Debug for HeapEngine<E, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapEngine")
            .field("data", &self.data)
            .field("mode", &self.mode)
            .field("has_comparator", &self.has_comparator())
            .field("locked", &self.lock.locked())
            .finish()
    }
}
