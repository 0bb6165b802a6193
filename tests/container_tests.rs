//! Scenario tests for the heap containers
//!
//! These tests exercise the public surface end to end: the documented
//! scenarios, the uniform `Container` contract shared by both containers, and
//! the empty-container asymmetry between `peek`/`remove` and `copy`.

use std::collections::BTreeMap;

use rust_heap_containers::{
    BinaryHeap, Category, Comparator, Container, ContainerError, HeapMode, HeapOptions,
    Prioritized, PriorityQueue, Value,
};

// Helpers that work with any Container implementation

/// Copy of an empty container fails, but clearing it is fine
fn test_empty_contract<C: Container>(mut container: C) {
    assert!(container.is_empty());
    assert_eq!(container.size(), 0);
    assert!(matches!(container.copy(), Err(ContainerError::EmptyCollection)));
    container.clear();
    assert_eq!(container.size(), 0);
    assert_eq!(container.render(), "[]");
}

/// A copy equals its source until the source is mutated
fn test_copy_contract<C: Container>(mut container: C, mutate: impl FnOnce(&mut C)) {
    let copy = container.copy().unwrap();
    assert!(copy.equals(&container));
    assert_eq!(copy.render(), container.render());

    let size = copy.size();
    mutate(&mut container);
    assert!(!copy.equals(&container));
    assert_eq!(copy.size(), size);

    container.clear();
    assert_eq!(container.size(), 0);
    assert_eq!(copy.size(), size);
}

#[test]
fn test_empty_contract_binary_heap() {
    test_empty_contract(BinaryHeap::<i32>::new());
    test_empty_contract(BinaryHeap::<String>::with_mode(HeapMode::Max));
}

#[test]
fn test_empty_contract_priority_queue() {
    test_empty_contract(PriorityQueue::<&str>::new());
    test_empty_contract(PriorityQueue::<char, u64>::with_mode(HeapMode::Max));
}

#[test]
fn test_copy_contract_binary_heap() {
    let mut heap = BinaryHeap::new();
    heap.try_extend([4, 8, 15, 16, 23, 42]).unwrap();
    test_copy_contract(heap, |heap| {
        heap.remove();
    });
}

#[test]
fn test_copy_contract_priority_queue() {
    let mut queue = PriorityQueue::with_mode(HeapMode::Max);
    queue.enqueue("a", 1.0).unwrap();
    queue.enqueue("b", 2.0).unwrap();
    test_copy_contract(queue, |queue| {
        queue.enqueue("c", 3.0).unwrap();
    });
}

/// Scenario 1: min queue with priorities 5, 3, 8
#[test]
fn test_scenario_min_priority_queue() {
    let mut queue = PriorityQueue::new();
    queue.enqueue("p5", 5.0).unwrap();
    queue.enqueue("p3", 3.0).unwrap();
    queue.enqueue("p8", 8.0).unwrap();

    assert_eq!(queue.dequeue(), Some("p3"));
    assert_eq!(queue.peek_priority(), Some(&5.0));
    assert_eq!(queue.peek(), Some(&"p5"));
}

/// Scenario 2: max heap with values 10, 20, 5
#[test]
fn test_scenario_max_heap_removal_order() {
    let mut heap = BinaryHeap::with_mode_str("max").unwrap();
    heap.insert(10).unwrap();
    heap.insert(20).unwrap();
    heap.insert(5).unwrap();

    assert_eq!(heap.remove(), Some(20));
    assert_eq!(heap.remove(), Some(10));
    assert_eq!(heap.remove(), Some(5));
    assert_eq!(heap.remove(), None);
}

/// Scenario 3: mixed categories without a comparator
#[test]
fn test_scenario_type_mismatch() {
    let mut heap = BinaryHeap::new();
    heap.insert(Value::from(5)).unwrap();

    let err = heap.insert(Value::from("a")).unwrap_err();
    assert_eq!(
        err,
        ContainerError::TypeMismatch {
            expected: Some(Category::Number),
            found: Category::Text,
        }
    );
    assert_eq!(err.to_string(), "type mismatch: expected number, found text");
    assert_eq!(heap.size(), 1);
}

/// Scenario 4: copy of a freshly constructed heap
#[test]
fn test_scenario_copy_empty() {
    let heap: BinaryHeap<i32> = BinaryHeap::new();
    let err = heap.copy().unwrap_err();
    assert_eq!(err, ContainerError::EmptyCollection);
    assert_eq!(err.to_string(), "operation requires a non-empty collection");
}

/// Scenario 5: peek on an empty max heap is absent, not an error
#[test]
fn test_scenario_peek_empty() {
    let mut heap: BinaryHeap<i32> = BinaryHeap::with_mode_str("max").unwrap();
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.remove(), None);

    let mut queue: PriorityQueue<i32> = PriorityQueue::with_mode_str("max").unwrap();
    assert_eq!(queue.peek(), None);
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn test_invalid_mode() {
    let err = BinaryHeap::<i32>::with_mode_str("ascending").unwrap_err();
    assert_eq!(err, ContainerError::InvalidMode("ascending".to_owned()));
    assert_eq!(
        err.to_string(),
        "invalid heap mode \"ascending\": expected \"min\" or \"max\""
    );
    assert!(PriorityQueue::<i32>::with_mode_str("").is_err());
    assert!(HeapOptions::<f64>::new().mode_str("Min").is_err());
}

#[test]
fn test_composite_values_need_comparator() {
    let mut record = BTreeMap::new();
    record.insert("id".to_owned(), Value::from(1));
    let record = Value::from(record);

    let mut heap = BinaryHeap::new();
    let err = heap.insert(record.clone()).unwrap_err();
    assert_eq!(
        err,
        ContainerError::TypeMismatch {
            expected: None,
            found: Category::Composite,
        }
    );
    assert!(heap.is_empty());

    let by_rendering =
        Comparator::new(|a: &Value, b: &Value| a.to_string() < b.to_string());
    let mut heap = BinaryHeap::with_comparator(by_rendering);
    heap.insert(record.clone()).unwrap();
    heap.insert(Value::from(vec![Value::from(2)])).unwrap();
    heap.insert(Value::from(3)).unwrap();
    assert_eq!(heap.size(), 3);
    assert_eq!(heap.locked_category(), None);
    assert_eq!(heap.peek(), Some(&Value::from(3)));
}

#[test]
fn test_clear_resets_type_lock_but_keeps_mode() {
    let mut heap = BinaryHeap::with_mode(HeapMode::Max);
    heap.insert(Value::from(true)).unwrap();
    assert!(heap.insert(Value::from(1)).is_err());

    heap.clear();
    heap.insert(Value::from(1)).unwrap();
    heap.insert(Value::from(2.5)).unwrap();
    assert_eq!(heap.mode(), HeapMode::Max);
    assert_eq!(heap.peek(), Some(&Value::from(2.5)));
}

#[test]
fn test_comparator_mode_is_recorded_but_ignored() {
    let shortest_first = Comparator::new(|a: &&str, b: &&str| a.len() < b.len());
    let mut heap = BinaryHeap::with_mode_and_comparator(HeapMode::Max, shortest_first);
    heap.try_extend(["three", "a", "four"]).unwrap();

    assert!(heap.has_comparator());
    assert_eq!(heap.mode(), HeapMode::Max);
    assert_eq!(heap.remove(), Some("a"));

    let copy = heap.copy().unwrap();
    assert!(copy.has_comparator());
    assert_eq!(copy.mode(), HeapMode::Max);
    assert_eq!(copy.peek(), Some(&"four"));
}

#[test]
fn test_priority_comparator_orders_by_priority_only() {
    let by_ordering = Comparator::by_ordering(|a: &(u8, u8), b: &(u8, u8)| a.cmp(b));
    let mut queue = PriorityQueue::with_comparator(by_ordering);
    queue.enqueue("second", (1, 2)).unwrap();
    queue.enqueue("first", (1, 1)).unwrap();
    queue.enqueue("third", (2, 0)).unwrap();

    assert_eq!(queue.dequeue(), Some("first"));
    assert_eq!(queue.dequeue(), Some("second"));
    assert_eq!(queue.dequeue(), Some("third"));
}

#[test]
fn test_positional_equality_is_layout_sensitive() {
    let mut a = PriorityQueue::new();
    let mut b = PriorityQueue::new();
    for (value, priority) in [("x", 1.0), ("y", 2.0), ("z", 3.0)] {
        a.enqueue(value, priority).unwrap();
    }
    for (value, priority) in [("x", 1.0), ("z", 3.0), ("y", 2.0)] {
        b.enqueue(value, priority).unwrap();
    }

    // Same entries, different slots.
    assert!(!a.equals(&b));
    assert_eq!(a.render(), "[(\"x\", 1.0), (\"y\", 2.0), (\"z\", 3.0)]");
    assert_eq!(b.render(), "[(\"x\", 1.0), (\"z\", 3.0), (\"y\", 2.0)]");

    // Draining both yields the same sequence.
    assert_eq!(a.into_sorted_vec(), b.into_sorted_vec());
}

#[test]
fn test_snapshots_are_independent() {
    let mut queue = PriorityQueue::new();
    queue.enqueue('q', 2.0).unwrap();
    queue.enqueue('p', 1.0).unwrap();

    let snapshot = queue.to_vec();
    queue.dequeue();
    queue.enqueue('r', 0.5).unwrap();

    assert_eq!(
        snapshot,
        vec![Prioritized::new('p', 1.0), Prioritized::new('q', 2.0)]
    );
    assert_eq!(
        queue.get(5),
        Err(ContainerError::IndexOutOfBounds { index: 5, len: 2 })
    );
}

#[test]
fn test_size_law_with_interleaving() {
    let mut heap = BinaryHeap::new();
    let mut expected = 0usize;

    for round in 0..200i64 {
        heap.insert(round * 7919 % 1000).unwrap();
        expected += 1;
        if round % 3 == 0 {
            assert!(heap.remove().is_some());
            expected -= 1;
        }
        assert_eq!(heap.size(), expected);
        assert!(heap.is_heap());
    }
}

#[test]
fn test_equal_keys_under_non_strict_comparator() {
    let mut heap = BinaryHeap::with_comparator(Comparator::new(|a: &i32, b: &i32| a <= b));
    heap.insert(1).unwrap();
    heap.insert(1).unwrap();
    assert_eq!(heap.as_slice(), &[1, 1]);
    assert!(heap.is_heap());

    let mut queue = PriorityQueue::with_comparator(Comparator::new(|a: &f64, b: &f64| a <= b));
    queue.enqueue("a", 2.0).unwrap();
    queue.enqueue("b", 2.0).unwrap();
    queue.enqueue("c", 1.0).unwrap();
    assert!(queue.is_heap());
    assert_eq!(queue.dequeue(), Some("c"));
    assert!(queue.is_heap());
}
