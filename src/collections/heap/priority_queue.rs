//! `PriorityQueue`: values dequeued by ascending explicit priority.
//!
//! Uses the same implicit-tree layout as [`MaxBinaryHeap`](super::MaxBinaryHeap)
//! but orders by a separate priority field rather than by the value, and with
//! the opposite polarity: the smallest priority sits at the root.
//!
//! Equal priorities are **not** dequeued in insertion order. Ties are resolved
//! by wherever the sifts happen to leave the entries.

use crate::collections::vec::DenseVec;
use core::fmt;

/// One queued value together with its priority.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Entry<T, P> {
    value: T,
    priority: P,
}

/// A min-priority queue: lower priority values come out first.
///
/// `P` is any totally ordered priority type; it defaults to `i32`.
///
/// ```rust
/// use keelson::PriorityQueue;
///
/// let mut er = PriorityQueue::new();
/// er.enqueue("sprained wrist", 3);
/// er.enqueue("gunshot wound", 1);
/// er.enqueue("high fever", 2);
///
/// assert_eq!(er.dequeue(), Some("gunshot wound"));
/// assert_eq!(er.dequeue(), Some("high fever"));
/// assert_eq!(er.dequeue(), Some("sprained wrist"));
/// assert_eq!(er.dequeue(), None);
/// ```
#[derive(Clone)]
pub struct PriorityQueue<T, P = i32> {
    data: DenseVec<Entry<T, P>>,
}

impl<T, P: Ord> PriorityQueue<T, P> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            data: DenseVec::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: DenseVec::with_capacity(capacity),
        }
    }

    /// Returns the number of queued values.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Queues `value` with `priority`.
    pub fn enqueue(&mut self, value: T, priority: P) {
        let idx = self.data.push(Entry { value, priority });
        self.sift_up(idx);
    }

    /// Removes and returns the value with the lowest priority.
    ///
    /// Returns `None` on an empty queue.
    pub fn dequeue(&mut self) -> Option<T> {
        self.dequeue_with_priority().map(|(value, _)| value)
    }

    /// Like [`dequeue`](Self::dequeue) but also hands back the priority.
    pub fn dequeue_with_priority(&mut self) -> Option<(T, P)> {
        let end = self.data.pop()?;
        let min = if self.data.is_empty() {
            end
        } else {
            let min = self.data.set(0, end);
            self.sift_down(0);
            min
        };
        Some((min.value, min.priority))
    }

    /// Returns the value that would be dequeued next.
    pub fn peek(&self) -> Option<&T> {
        self.data.first().map(|e| &e.value)
    }

    /// Returns the lowest queued priority.
    pub fn peek_priority(&self) -> Option<&P> {
        self.data.first().map(|e| &e.priority)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Checks that no entry has a lower priority than its parent.
    pub fn is_valid(&self) -> bool {
        let slots = self.data.as_slice();
        (1..slots.len()).all(|i| slots[(i - 1) / 2].priority <= slots[i].priority)
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.data[node].priority < self.data[parent].priority {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
        trace_event!(position = node, "priority queue sift up");
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.data[right].priority < self.data[left].priority {
                smaller = right;
            }

            if self.data[smaller].priority < self.data[node].priority {
                self.data.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
        trace_event!(position = node, "priority queue sift down");
    }
}

impl<T, P> PriorityQueue<T, P> {
    /// Iterates over `(value, priority)` pairs in heap (array) order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &P)> + '_ {
        self.data.iter().map(|e| (&e.value, &e.priority))
    }
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> FromIterator<(T, P)> for PriorityQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T, P: Ord> Extend<(T, P)> for PriorityQueue<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.enqueue(value, priority);
        }
    }
}

impl<T, P: fmt::Debug> fmt::Debug for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.data.len())
            .field("next_priority", &self.data.first().map(|e| &e.priority))
            .finish()
    }
}
