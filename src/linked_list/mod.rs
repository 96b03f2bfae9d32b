//! Doubly-linked list with constant time insertion and removal at both ends.

mod arena;
mod list;

pub use self::list::{LinkedList, LinkedListIntoIter, LinkedListIter};
