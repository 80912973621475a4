use keelson::{FnComparator, MaxBinaryHeap, MaxOrder, Reversed};
use std::cmp::Ordering;

fn assert_heap_order<T: Ord>(slots: &[T]) {
    for i in 1..slots.len() {
        assert!(
            slots[(i - 1) / 2] >= slots[i],
            "parent at {} is smaller than child at {i}",
            (i - 1) / 2
        );
    }
}

#[test]
fn test_invariant_holds_after_every_insert() {
    let mut heap = MaxBinaryHeap::new();
    for x in [41, 39, 33, 18, 27, 12, 55, 1, 45, 199, 33, 0] {
        heap.insert(x);
        assert_heap_order(heap.as_slice());
        assert!(heap.is_valid());
    }
    assert_eq!(heap.len(), 12);
}

#[test]
fn test_extraction_is_non_increasing() {
    // Deterministic permutation of 0..97 (97 is prime, 35 is a generator step).
    let values: Vec<u32> = (0..97).map(|i| (i * 35) % 97).collect();
    let mut heap: MaxBinaryHeap<u32> = values.iter().copied().collect();

    let mut previous = u32::MAX;
    let mut count = 0;
    while let Some(x) = heap.extract_max() {
        assert!(x <= previous);
        assert_heap_order(heap.as_slice());
        previous = x;
        count += 1;
    }
    assert_eq!(count, 97);
}

#[test]
fn test_duplicates_come_out_together() {
    let heap: MaxBinaryHeap<_> = [5, 1, 5, 3, 5, 1].into_iter().collect();
    assert_eq!(heap.into_sorted_vec(), vec![5, 5, 5, 3, 1, 1]);
}

#[test]
fn test_extract_on_empty_is_none() {
    let mut heap: MaxBinaryHeap<String> = MaxBinaryHeap::default();
    assert_eq!(heap.extract_max(), None);
    assert_eq!(heap.pop(), None);
    assert!(heap.peek().is_none());
}

#[test]
fn test_closure_comparator_orders_by_field() {
    #[derive(Debug, PartialEq)]
    struct Job {
        name: &'static str,
        weight: u8,
    }

    let by_weight = FnComparator(|a: &Job, b: &Job| a.weight.cmp(&b.weight));
    let mut heap = MaxBinaryHeap::with_comparator(by_weight);
    heap.insert(Job { name: "light", weight: 1 });
    heap.insert(Job { name: "heavy", weight: 9 });
    heap.insert(Job { name: "medium", weight: 5 });

    let names: Vec<_> = std::iter::from_fn(|| heap.extract_max()).map(|j| j.name).collect();
    assert_eq!(names, vec!["heavy", "medium", "light"]);
}

#[test]
fn test_reversed_comparator_gives_min_heap() {
    let mut heap = MaxBinaryHeap::with_capacity_and_comparator(8, Reversed(MaxOrder));
    heap.extend([7, 2, 9, 4, 4]);
    assert_eq!(heap.peek(), Some(&2));
    assert_eq!(heap.into_sorted_vec(), vec![2, 4, 4, 7, 9]);
}

#[test]
fn test_float_heap_with_total_cmp() {
    let mut heap = MaxBinaryHeap::with_comparator(FnComparator(|a: &f64, b: &f64| a.total_cmp(b)));
    heap.extend([0.5, -1.25, 3.75, 2.0]);
    assert_eq!(heap.extract_max(), Some(3.75));
    assert_eq!((heap.comparator().0)(&1.0, &2.0), Ordering::Less);
}

#[test]
fn test_matches_std_binary_heap() {
    let values = [13, 8, 21, 3, 34, 1, 55, 2, 89, 5];
    let mut ours: MaxBinaryHeap<_> = values.into_iter().collect();
    let mut theirs: std::collections::BinaryHeap<_> = values.into_iter().collect();

    while let Some(expected) = theirs.pop() {
        assert_eq!(ours.extract_max(), Some(expected));
    }
    assert!(ours.is_empty());
}

#[test]
fn test_into_vec_is_heap_ordered() {
    let heap: MaxBinaryHeap<_> = (1..=7).collect();
    let raw = heap.clone().into_vec();
    assert_eq!(raw.len(), 7);
    assert_eq!(raw[0], 7);
    assert_heap_order(&raw);
    assert_eq!(heap.iter().count(), 7);
}
