use crate::avl_tree::node::Node;
use crate::avl_tree::tree::{self, Side, Tree};
use crate::comparer::{self, Comparer, NaturalOrder};
use crate::error::InvariantError;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Values are ordered by a
/// comparer fixed at construction. `new` uses the natural order of `T`, and `with_comparer`
/// accepts any total order.
///
/// # Examples
///
/// ```
/// use balanced_collections::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&3));
///
/// assert_eq!(set.min(), Some(&0));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct AvlSet<T, C = NaturalOrder<T>> {
    tree: Tree<T>,
    comparer: C,
    len: usize,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlSet<T>` ordered by the natural order of `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        AvlSet::with_comparer(comparer::natural())
    }
}

impl<T, C> AvlSet<T, C>
where
    C: Comparer<T>,
{
    /// Constructs a new, empty `AvlSet<T, C>` ordered by `comparer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::with_comparer(|a: &String, b: &String| a.len().cmp(&b.len()));
    /// assert!(set.insert(String::from("abc")));
    /// assert!(!set.insert(String::from("xyz")));
    /// ```
    pub fn with_comparer(comparer: C) -> Self {
        AvlSet {
            tree: None,
            comparer,
            len: 0,
        }
    }

    /// Inserts a value into the set. Returns `true` if the value was added, and `false` if an
    /// equal value already exists, in which case the set is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let AvlSet {
            ref mut tree,
            ref comparer,
            ref mut len,
        } = self;
        let inserted = tree::insert(tree, comparer, value);
        if inserted {
            *len += 1;
        }
        inserted
    }

    /// Removes a value from the set. If an equal value exists in the set, it will return the
    /// stored value. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let AvlSet {
            ref mut tree,
            ref comparer,
            ref mut len,
        } = self;
        let removed = tree::remove(tree, comparer, value);
        if removed.is_some() {
            *len -= 1;
        }
        removed
    }

    /// Checks if a value exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        tree::contains(&self.tree, &self.comparer, value)
    }

    /// Verifies the structure of the set. Checks that every cached height is accurate, that
    /// every node is balanced, that values are strictly ascending under the comparer, and that
    /// the number of nodes matches `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = (0..100).collect();
    /// assert_eq!(set.check_invariants(), Ok(()));
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        tree::check_heights(&self.tree)?;

        let mut count = 0;
        let mut prev: Option<&T> = None;
        for value in self.iter() {
            if let Some(prev) = prev {
                if self.comparer.compare(prev, value) != Ordering::Less {
                    return Err(InvariantError::OutOfOrder(count));
                }
            }
            prev = Some(value);
            count += 1;
        }

        if count != self.len {
            return Err(InvariantError::LengthMismatch {
                expected: self.len,
                actual: count,
            });
        }
        Ok(())
    }
}

impl<T, C> AvlSet<T, C> {
    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the minimum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Calls `visitor` on every value of the set in ascending order.
    ///
    /// The set is borrowed for the duration of the traversal, so it cannot be modified by the
    /// visitor.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(2);
    /// set.insert(1);
    ///
    /// let mut values = Vec::new();
    /// set.for_each(|value| values.push(*value));
    /// assert_eq!(values, vec![1, 2]);
    /// ```
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&T),
    {
        for value in self.iter() {
            visitor(value);
        }
    }

    /// Returns an iterator over the set. The iterator will yield values using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<'_, T> {
        AvlSetIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<T, C> IntoIterator for AvlSet<T, C> {
    type Item = T;
    type IntoIter = AvlSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a AvlSet<T, C>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = AvlSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlSet<T, C>`.
///
/// This iterator traverses the elements of the set in-order and yields owned values.
pub struct AvlSetIntoIter<T> {
    current: Tree<T>,
    stack: Vec<Box<Node<T>>>,
}

impl<T> Iterator for AvlSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.take_child(Side::Left);
            self.stack.push(node);
        }
        self.stack.pop().map(|mut node| {
            self.current = node.take_child(Side::Right);
            node.value
        })
    }
}

/// An iterator for `AvlSet<T, C>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct AvlSetIter<'a, T>
where
    T: 'a,
{
    current: &'a Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.current = node.left();
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = node.right();
            &node.value
        })
    }
}

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> fmt::Debug for AvlSet<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> Extend<T> for AvlSet<T, C>
where
    C: Comparer<T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for AvlSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = AvlSet::new();
        set.extend(iter);
        set
    }
}
