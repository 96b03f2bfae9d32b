use crate::error::InvariantError;
use crate::linked_list::arena::{Handle, TypedArena};
use std::fmt;
use std::iter::FromIterator;

struct ListNode<T> {
    value: T,
    prev: Option<Handle>,
    next: Option<Handle>,
}

/// A doubly-linked list.
///
/// Nodes are stored in slots owned by the list and are linked to their neighbours by handle.
/// Adding and removing at either end take `O(1)` time.
///
/// # Examples
///
/// ```
/// use balanced_collections::linked_list::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.add_last(1);
/// list.add_last(2);
/// list.add_first(0);
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.first(), Some(&0));
/// assert_eq!(list.last(), Some(&2));
///
/// assert_eq!(list.remove_first(), Some(0));
/// assert_eq!(list.remove_last(), Some(2));
/// ```
pub struct LinkedList<T> {
    nodes: TypedArena<ListNode<T>>,
    head: Option<Handle>,
    tail: Option<Handle>,
}

impl<T> LinkedList<T> {
    /// Constructs a new, empty `LinkedList<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::linked_list::LinkedList;
    ///
    /// let list: LinkedList<u32> = LinkedList::new();
    /// ```
    pub fn new() -> Self {
        LinkedList {
            nodes: TypedArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Inserts a value at the front of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.add_first(1);
    /// list.add_first(2);
    /// assert_eq!(list.first(), Some(&2));
    /// ```
    pub fn add_first(&mut self, value: T) {
        let handle = self.nodes.allocate(ListNode {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.nodes[head].prev = Some(handle),
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);
    }

    /// Inserts a value at the back of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.add_last(1);
    /// list.add_last(2);
    /// assert_eq!(list.last(), Some(&2));
    /// ```
    pub fn add_last(&mut self, value: T) {
        let handle = self.nodes.allocate(ListNode {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
    }

    /// Removes a value from the front of the list. Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.add_last(1);
    /// assert_eq!(list.remove_first(), Some(1));
    /// assert_eq!(list.remove_first(), None);
    /// ```
    pub fn remove_first(&mut self) -> Option<T> {
        let ListNode { value, next, .. } = self.nodes.free(self.head?);
        match next {
            Some(next) => self.nodes[next].prev = None,
            None => self.tail = None,
        }
        self.head = next;
        Some(value)
    }

    /// Removes a value from the back of the list. Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.add_last(1);
    /// list.add_last(2);
    /// assert_eq!(list.remove_last(), Some(2));
    /// ```
    pub fn remove_last(&mut self) -> Option<T> {
        let ListNode { value, prev, .. } = self.nodes.free(self.tail?);
        match prev {
            Some(prev) => self.nodes[prev].next = None,
            None => self.head = None,
        }
        self.tail = prev;
        Some(value)
    }

    /// Returns a reference to the first value of the list. Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.first(), None);
    /// list.add_last(1);
    /// assert_eq!(list.first(), Some(&1));
    /// ```
    pub fn first(&self) -> Option<&T> {
        self.head.map(|head| &self.nodes[head].value)
    }

    /// Returns a reference to the last value of the list. Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.last(), None);
    /// list.add_last(1);
    /// assert_eq!(list.last(), Some(&1));
    /// ```
    pub fn last(&self) -> Option<&T> {
        self.tail.map(|tail| &self.nodes[tail].value)
    }

    /// Returns the number of values in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.add_last(1);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::linked_list::LinkedList;
    ///
    /// let list: LinkedList<u32> = LinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the list, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.add_last(1);
    /// list.clear();
    /// assert!(list.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Calls `visitor` on every value of the list from front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::linked_list::LinkedList;
    ///
    /// let list: LinkedList<u32> = (0..3).collect();
    /// let mut sum = 0;
    /// list.for_each(|value| sum += *value);
    /// assert_eq!(sum, 3);
    /// ```
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&T),
    {
        for value in self.iter() {
            visitor(value);
        }
    }

    /// Returns an iterator over the list from front to back. The iterator is double-ended, so
    /// `rev` walks the list from back to front.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::linked_list::LinkedList;
    ///
    /// let list: LinkedList<u32> = (0..3).collect();
    /// assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&0, &1, &2]);
    /// assert_eq!(list.iter().rev().collect::<Vec<&u32>>(), vec![&2, &1, &0]);
    /// ```
    pub fn iter(&self) -> LinkedListIter<'_, T> {
        LinkedListIter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    /// Verifies that every forward link is mirrored by a backward link, that the list ends where
    /// `last` says it does, and that the number of linked values matches `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::linked_list::LinkedList;
    ///
    /// let list: LinkedList<u32> = (0..10).collect();
    /// assert_eq!(list.check_invariants(), Ok(()));
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let mut count = 0;
        let mut prev = None;
        let mut curr = self.head;
        while let Some(handle) = curr {
            let node = match self.nodes.get(handle) {
                Some(node) => node,
                None => return Err(InvariantError::BrokenLink(count)),
            };
            if node.prev != prev {
                return Err(InvariantError::BrokenLink(count));
            }
            prev = curr;
            curr = node.next;
            count += 1;
            if count > self.len() {
                break;
            }
        }

        if count != self.len() {
            return Err(InvariantError::LengthMismatch {
                expected: self.len(),
                actual: count,
            });
        }
        if prev != self.tail {
            return Err(InvariantError::BrokenLink(count));
        }
        Ok(())
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = LinkedListIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = LinkedListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `LinkedList<T>`.
///
/// This iterator yields owned values from front to back.
pub struct LinkedListIntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for LinkedListIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.remove_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for LinkedListIntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.remove_last()
    }
}

/// An iterator for `LinkedList<T>`.
///
/// This iterator yields immutable references from front to back.
pub struct LinkedListIter<'a, T>
where
    T: 'a,
{
    nodes: &'a TypedArena<ListNode<T>>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

impl<'a, T> Iterator for LinkedListIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for LinkedListIter<'a, T>
where
    T: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for LinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.add_last(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}
