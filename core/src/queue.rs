use std::{cmp::Ordering, collections::BinaryHeap};

struct QueueEntry<T, K> {
    key: K,
    sequence: u64,
    item: T,
}

impl<T, K: Ord> PartialEq for QueueEntry<T, K> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.sequence == other.sequence
    }
}

impl<T, K: Ord> Eq for QueueEntry<T, K> {}

impl<T, K: Ord> PartialOrd for QueueEntry<T, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, K: Ord> Ord for QueueEntry<T, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default)
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-priority queue ordered by a key extracted once, at push time.
/// Equal keys pop in insertion order.
pub struct KeyedMinQueue<T, K, F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    heap: BinaryHeap<QueueEntry<T, K>>,
    key_of: F,
    next_sequence: u64,
}

impl<T, K, F> KeyedMinQueue<T, K, F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    pub fn new(key_of: F) -> Self {
        Self {
            heap: BinaryHeap::new(),
            key_of,
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, item: T) {
        let key = (self.key_of)(&item);
        self.heap.push(QueueEntry {
            key,
            sequence: self.next_sequence,
            item,
        });
        self.next_sequence += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }

    /// Key of the item `pop` would return next.
    pub fn peek_key(&self) -> Option<&K> {
        self.heap.peek().map(|entry| &entry.key)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_sequence = 0;
    }
}
