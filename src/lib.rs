//! Binary heap containers for Rust
//!
//! This crate provides a binary-heap engine and two containers built on it:
//!
//! - [`BinaryHeap`]: stores bare values, each value is its own ordering key
//! - [`PriorityQueue`]: stores (value, priority) pairs ordered by priority only
//!
//! Both are min-heaps by default, can be switched to max-heaps with a
//! [`HeapMode`], or can be ordered by a caller-supplied [`Comparator`] that
//! overrides the mode.
//!
//! # Features
//!
//! - **Type lock**: comparator-less containers require [`Orderable`] values
//!   and reject values whose [`Category`] differs from the first insert, or
//!   which have no natural ordering at all
//! - **Uniform surface**: every container implements [`Container`]
//!   (`size`, `copy`, `clear`, positional `equals`, `render`)
//! - **Absent vs error**: `peek`, `remove`, and `dequeue` return `None` on an
//!   empty container, while `copy` of an empty container is an error
//!
//! # Example
//!
//! ```rust
//! use rust_heap_containers::{BinaryHeap, Container, HeapMode, PriorityQueue};
//!
//! let mut heap = BinaryHeap::with_mode(HeapMode::Max);
//! heap.insert(10).unwrap();
//! heap.insert(20).unwrap();
//! assert_eq!(heap.remove(), Some(20));
//!
//! let mut queue = PriorityQueue::new();
//! queue.enqueue("later", 5.0).unwrap();
//! queue.enqueue("sooner", 3.0).unwrap();
//! assert_eq!(queue.dequeue(), Some("sooner"));
//! assert_eq!(queue.size(), 1);
//! ```

pub mod binary_heap;
pub mod config;
pub mod engine;
pub mod orderable;
pub mod priority_queue;
pub mod traits;

// Re-export the main types for convenience
pub use binary_heap::BinaryHeap;
pub use config::{HeapMode, HeapOptions};
pub use engine::Comparator;
pub use orderable::{Category, Orderable, Value};
pub use priority_queue::{Prioritized, PriorityQueue};
pub use traits::{Container, ContainerError};
