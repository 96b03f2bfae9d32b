use crate::avl_tree::tree::{self, Side, Tree};
use std::cmp;

/// A struct representing an internal node of an avl tree.
pub struct Node<T> {
    pub value: T,
    pub height: usize,
    left: Tree<T>,
    right: Tree<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub fn left(&self) -> &Tree<T> {
        &self.left
    }

    pub fn right(&self) -> &Tree<T> {
        &self.right
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn update(&mut self) {
        let Node { ref mut height, ref left, ref right, .. } = self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    // right height minus left height
    pub fn balance(&self) -> isize {
        (tree::height(&self.right) as isize) - (tree::height(&self.left) as isize)
    }

    /// Replaces the left child and returns the previous one. The cached height is recomputed
    /// before returning.
    pub fn set_left(&mut self, child: Tree<T>) -> Tree<T> {
        let prev = std::mem::replace(&mut self.left, child);
        self.update();
        prev
    }

    /// Replaces the right child and returns the previous one. The cached height is recomputed
    /// before returning.
    pub fn set_right(&mut self, child: Tree<T>) -> Tree<T> {
        let prev = std::mem::replace(&mut self.right, child);
        self.update();
        prev
    }

    pub fn set_child(&mut self, side: Side, child: Tree<T>) -> Tree<T> {
        match side {
            Side::Left => self.set_left(child),
            Side::Right => self.set_right(child),
        }
    }

    pub fn take_child(&mut self, side: Side) -> Tree<T> {
        self.set_child(side, None)
    }
}
