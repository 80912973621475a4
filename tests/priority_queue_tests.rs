use keelson::PriorityQueue;

#[test]
fn test_dequeues_lowest_priority_first() {
    let mut q = PriorityQueue::new();
    q.enqueue("a", 3);
    q.enqueue("b", 1);
    q.enqueue("c", 2);
    assert_eq!(q.dequeue(), Some("b"));
    assert_eq!(q.dequeue(), Some("c"));
    assert_eq!(q.dequeue(), Some("a"));
}

#[test]
fn test_dequeue_empty_is_none() {
    let mut q: PriorityQueue<u8> = PriorityQueue::default();
    assert_eq!(q.dequeue(), None);
    assert_eq!(q.dequeue_with_priority(), None);
    assert_eq!(q.peek_priority(), None);
}

#[test]
fn test_emergency_room_triage() {
    let mut er = PriorityQueue::with_capacity(5);
    er.enqueue("common cold", 5);
    er.enqueue("gunshot wound", 1);
    er.enqueue("high fever", 4);
    er.enqueue("broken arm", 2);
    er.enqueue("glass in foot", 3);
    assert!(er.is_valid());

    let order: Vec<_> = std::iter::from_fn(|| er.dequeue()).collect();
    assert_eq!(
        order,
        vec!["gunshot wound", "broken arm", "glass in foot", "high fever", "common cold"]
    );
}

#[test]
fn test_priorities_come_out_sorted() {
    let priorities: Vec<i32> = (0..64).map(|i| (i * 37 + 11) % 64 - 32).collect();
    let mut q = PriorityQueue::new();
    for (i, &p) in priorities.iter().enumerate() {
        q.enqueue(i, p);
        assert!(q.is_valid());
    }

    let mut out = Vec::new();
    while let Some((value, priority)) = q.dequeue_with_priority() {
        assert_eq!(priorities[value], priority);
        out.push(priority);
    }
    let mut expected = priorities;
    expected.sort_unstable();
    assert_eq!(out, expected);
}

#[test]
fn test_equal_priorities_all_drain() {
    // Ties are not FIFO; only the set of values is guaranteed.
    let mut q: PriorityQueue<char> = "abcdef".chars().map(|c| (c, 0)).collect();
    let mut seen: Vec<char> = std::iter::from_fn(|| q.dequeue()).collect();
    seen.sort_unstable();
    assert_eq!(seen, vec!['a', 'b', 'c', 'd', 'e', 'f']);
}

#[test]
fn test_interleaved_enqueue_dequeue() {
    let mut q = PriorityQueue::new();
    q.enqueue(10, 10);
    q.enqueue(5, 5);
    assert_eq!(q.dequeue(), Some(5));
    q.enqueue(1, 1);
    q.enqueue(7, 7);
    assert_eq!(q.peek(), Some(&1));
    assert_eq!(q.dequeue(), Some(1));
    assert_eq!(q.dequeue(), Some(7));
    assert_eq!(q.len(), 1);
    assert_eq!(q.iter().next(), Some((&10, &10)));
}
