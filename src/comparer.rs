//! Total orderings supplied to collections at construction time.

use std::cmp::Ordering;

/// A total order over values of type `T`.
///
/// Every closure or function of the form `Fn(&T, &T) -> Ordering` is a `Comparer<T>`. The
/// ordering must stay consistent for the lifetime of the collection it is given to. An
/// inconsistent comparer will not cause memory unsafety, but it can leave a collection with
/// values in an unspecified order.
///
/// # Examples
///
/// ```
/// use balanced_collections::comparer::Comparer;
/// use std::cmp::Ordering;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.compare(&"ab", &"c"), Ordering::Greater);
/// ```
pub trait Comparer<T> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The comparer type used by collections constructed with `new()`.
pub type NaturalOrder<T> = fn(&T, &T) -> Ordering;

/// Returns the natural ordering of `T`.
pub fn natural<T>() -> NaturalOrder<T>
where
    T: Ord,
{
    T::cmp
}

/// Adapts a comparison function that returns a negative number, zero, or a positive number when
/// `a` is less than, equal to, or greater than `b` respectively.
///
/// # Examples
///
/// ```
/// use balanced_collections::avl_tree::AvlSet;
/// use balanced_collections::comparer;
///
/// let mut set = AvlSet::with_comparer(comparer::from_sign(|a: &i32, b: &i32| a - b));
/// set.insert(3);
/// set.insert(1);
/// assert_eq!(set.iter().collect::<Vec<&i32>>(), vec![&1, &3]);
/// ```
pub fn from_sign<T, F>(f: F) -> impl Fn(&T, &T) -> Ordering
where
    F: Fn(&T, &T) -> i32,
{
    move |a, b| f(a, b).cmp(&0)
}

/// Reverses the order imposed by `comparer`.
///
/// # Examples
///
/// ```
/// use balanced_collections::avl_tree::AvlSet;
/// use balanced_collections::comparer;
///
/// let mut set = AvlSet::with_comparer(comparer::reverse(comparer::natural::<u32>()));
/// set.insert(1);
/// set.insert(2);
/// assert_eq!(set.min(), Some(&2));
/// ```
pub fn reverse<T, C>(comparer: C) -> impl Fn(&T, &T) -> Ordering
where
    C: Comparer<T>,
{
    move |a, b| comparer.compare(b, a)
}
