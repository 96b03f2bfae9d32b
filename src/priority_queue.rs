//! Priority queue backed by a binary heap.

use crate::comparer::{self, Comparer, NaturalOrder};
use crate::error::InvariantError;
use log::trace;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::slice;

/// A priority queue implemented using a binary max-heap stored in a `Vec`.
///
/// The comparer decides priority: a value that compares `Greater` than another is dequeued
/// first. The order in which values of equal priority are dequeued is unspecified.
///
/// # Examples
///
/// ```
/// use balanced_collections::priority_queue::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.enqueue(1);
/// queue.enqueue(3);
/// queue.enqueue(2);
///
/// assert_eq!(queue.len(), 3);
/// assert_eq!(queue.peek(), Some(&3));
///
/// assert_eq!(queue.dequeue(), Some(3));
/// assert_eq!(queue.dequeue(), Some(2));
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), None);
/// ```
pub struct PriorityQueue<T, C = NaturalOrder<T>> {
    heap: Vec<T>,
    comparer: C,
}

impl<T> PriorityQueue<T>
where
    T: Ord,
{
    /// Constructs a new, empty `PriorityQueue<T>` where greater values have higher priority.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::priority_queue::PriorityQueue;
    ///
    /// let queue: PriorityQueue<u32> = PriorityQueue::new();
    /// ```
    pub fn new() -> Self {
        PriorityQueue::with_comparer(comparer::natural())
    }

    /// Constructs a new, empty `PriorityQueue<T>` with room for `capacity` values before
    /// reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::priority_queue::PriorityQueue;
    ///
    /// let queue: PriorityQueue<u32> = PriorityQueue::with_capacity(16);
    /// assert!(queue.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            heap: Vec::with_capacity(capacity),
            comparer: comparer::natural(),
        }
    }
}

impl<T, C> PriorityQueue<T, C>
where
    C: Comparer<T>,
{
    /// Constructs a new, empty `PriorityQueue<T, C>` where priority is decided by `comparer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::priority_queue::PriorityQueue;
    ///
    /// // smallest value first
    /// let mut queue = PriorityQueue::with_comparer(|a: &u32, b: &u32| b.cmp(a));
    /// queue.enqueue(2);
    /// queue.enqueue(1);
    /// assert_eq!(queue.dequeue(), Some(1));
    /// ```
    pub fn with_comparer(comparer: C) -> Self {
        PriorityQueue {
            heap: Vec::new(),
            comparer,
        }
    }

    fn has_priority(&self, a: usize, b: usize) -> bool {
        self.comparer.compare(&self.heap[a], &self.heap[b]) == Ordering::Greater
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.has_priority(index, parent) {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
        trace!("sifted up to index {}", index);
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = index * 2 + 1;
            if left >= self.heap.len() {
                break;
            }

            let right = left + 1;
            let mut child = left;
            if right < self.heap.len() && self.has_priority(right, left) {
                child = right;
            }

            if !self.has_priority(child, index) {
                break;
            }
            self.heap.swap(index, child);
            index = child;
        }
        trace!("sifted down to index {}", index);
    }

    /// Places a value on the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::priority_queue::PriorityQueue;
    ///
    /// let mut queue = PriorityQueue::new();
    /// queue.enqueue(1);
    /// assert_eq!(queue.len(), 1);
    /// ```
    pub fn enqueue(&mut self, value: T) {
        self.heap.push(value);
        let index = self.heap.len() - 1;
        self.sift_up(index);
    }

    /// Removes and returns the value with the highest priority. Returns `None` if the queue is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::priority_queue::PriorityQueue;
    ///
    /// let mut queue = PriorityQueue::new();
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    /// assert_eq!(queue.dequeue(), Some(2));
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let ret = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(ret)
    }

    /// Verifies that no value has a higher priority than its parent in the heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::priority_queue::PriorityQueue;
    ///
    /// let queue: PriorityQueue<u32> = (0..100).collect();
    /// assert_eq!(queue.check_invariants(), Ok(()));
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        for child in 1..self.heap.len() {
            let parent = (child - 1) / 2;
            if self.has_priority(child, parent) {
                return Err(InvariantError::HeapOrder { parent, child });
            }
        }
        Ok(())
    }
}

impl<T, C> PriorityQueue<T, C> {
    /// Returns the value with the highest priority without removing it. Returns `None` if the
    /// queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::priority_queue::PriorityQueue;
    ///
    /// let mut queue = PriorityQueue::new();
    /// assert_eq!(queue.peek(), None);
    /// queue.enqueue(1);
    /// assert_eq!(queue.peek(), Some(&1));
    /// ```
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Returns the number of values in the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::priority_queue::PriorityQueue;
    ///
    /// let mut queue = PriorityQueue::new();
    /// queue.enqueue(1);
    /// assert_eq!(queue.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::priority_queue::PriorityQueue;
    ///
    /// let queue: PriorityQueue<u32> = PriorityQueue::new();
    /// assert!(queue.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Clears the queue, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::priority_queue::PriorityQueue;
    ///
    /// let mut queue = PriorityQueue::new();
    /// queue.enqueue(1);
    /// queue.clear();
    /// assert!(queue.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Returns an iterator over the queue. Values are yielded in heap order, which is not the
    /// order they would be dequeued in.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::priority_queue::PriorityQueue;
    ///
    /// let mut queue = PriorityQueue::new();
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    ///
    /// let mut values = queue.iter().cloned().collect::<Vec<u32>>();
    /// values.sort();
    /// assert_eq!(values, vec![1, 2]);
    /// ```
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.heap.iter()
    }
}

impl<T> Default for PriorityQueue<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> fmt::Debug for PriorityQueue<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.heap.iter()).finish()
    }
}

impl<T, C> Extend<T> for PriorityQueue<T, C>
where
    C: Comparer<T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for PriorityQueue<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut queue = PriorityQueue::new();
        queue.extend(iter);
        queue
    }
}
