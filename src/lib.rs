//! Ordered and sequential collections: an avl tree set with caller-supplied comparers, a binary
//! heap priority queue, and a doubly-linked list.

mod error;
pub mod avl_tree;
pub mod comparer;
pub mod linked_list;
pub mod priority_queue;

pub use crate::error::InvariantError;
