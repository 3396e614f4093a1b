//! Binary min-heap with an explicit item index, supporting decrease-key.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Clone, Debug)]
struct Entry<T> {
    item: T,
    priority: f64,
    seq: u64,
}

impl<T> Entry<T> {
    /// Heap order: lower priority first, then lower sequence number
    fn precedes(&self, other: &Entry<T>) -> bool {
        match self.priority.total_cmp(&other.priority) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => self.seq < other.seq,
        }
    }
}

/// Min-priority queue holding each item at most once.
///
/// An index map from item to heap slot makes [`update`](Self::update) a true
/// decrease-key instead of a lazy duplicate insert. Items with equal priority
/// pop in the order they were inserted, or last improved, earliest first.
///
/// ```
/// use valiter::priority_queue::IndexedPriorityQueue;
///
/// let mut queue = IndexedPriorityQueue::new();
/// queue.push("a", -1.0);
/// queue.push("b", -3.0);
/// queue.update("a", -5.0);
/// queue.update("b", -2.0); // worse than -3.0, ignored
///
/// assert_eq!(queue.pop(), Some(("a", -5.0)));
/// assert_eq!(queue.pop(), Some(("b", -3.0)));
/// assert!(queue.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct IndexedPriorityQueue<T: Eq + Hash + Clone> {
    heap: Vec<Entry<T>>,
    positions: HashMap<T, usize>,
    next_seq: u64,
}

impl<T: Eq + Hash + Clone> IndexedPriorityQueue<T> {
    pub fn new() -> Self {
        IndexedPriorityQueue {
            heap: Vec::new(),
            positions: HashMap::new(),
            next_seq: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        IndexedPriorityQueue {
            heap: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    /// Current priority of `item`, if queued
    pub fn priority(&self, item: &T) -> Option<f64> {
        self.positions.get(item).map(|&i| self.heap[i].priority)
    }

    /// Smallest entry without removing it
    pub fn peek(&self) -> Option<(&T, f64)> {
        self.heap.first().map(|e| (&e.item, e.priority))
    }

    /// Insert `item`, or overwrite its priority unconditionally if queued
    pub fn push(&mut self, item: T, priority: f64) {
        let seq = self.bump_seq();
        match self.positions.get(&item).copied() {
            Some(i) => {
                self.heap[i].priority = priority;
                self.heap[i].seq = seq;
                self.sift_up(i);
                let i = self.positions[&item];
                self.sift_down(i);
            }
            None => {
                let i = self.heap.len();
                self.positions.insert(item.clone(), i);
                self.heap.push(Entry { item, priority, seq });
                self.sift_up(i);
            }
        }
    }

    /// Decrease-key-or-insert.
    ///
    /// Inserts `item` if absent. If queued with a strictly larger priority,
    /// lowers it to `priority`. Otherwise leaves the entry untouched. Returns
    /// whether the queue changed.
    pub fn update(&mut self, item: T, priority: f64) -> bool {
        match self.positions.get(&item).copied() {
            Some(i) => {
                if self.heap[i].priority.total_cmp(&priority) != Ordering::Greater {
                    return false;
                }
                let seq = self.bump_seq();
                self.heap[i].priority = priority;
                self.heap[i].seq = seq;
                self.sift_up(i);
                true
            }
            None => {
                self.push(item, priority);
                true
            }
        }
    }

    /// Remove and return the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(T, f64)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.positions.remove(&entry.item);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((entry.item, entry.priority))
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.positions.clear();
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.positions.insert(self.heap[a].item.clone(), a);
        self.positions.insert(self.heap[b].item.clone(), b);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.heap[i].precedes(&self.heap[parent]) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < len && self.heap[left].precedes(&self.heap[smallest]) {
                smallest = left;
            }
            if right < len && self.heap[right].precedes(&self.heap[smallest]) {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<T: Eq + Hash + Clone> Default for IndexedPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
