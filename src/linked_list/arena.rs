use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A struct representing a slot of `TypedArena<T>`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Handle {
    index: usize,
}

enum Block<T> {
    Occupied(T),
    Vacant(Option<Handle>),
}

/// Slot storage for the nodes of a linked list.
///
/// Nodes refer to each other by `Handle` rather than by pointer. Freed slots are threaded onto
/// a free list and reused by later allocations, so a handle stays valid until its slot is freed.
pub struct TypedArena<T> {
    head: Option<Handle>,
    blocks: Vec<Block<T>>,
    len: usize,
}

impl<T> TypedArena<T> {
    pub fn new() -> Self {
        TypedArena {
            head: None,
            blocks: Vec::new(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn allocate(&mut self, value: T) -> Handle {
        self.len += 1;
        match self.head.take() {
            None => {
                self.blocks.push(Block::Occupied(value));
                Handle {
                    index: self.blocks.len() - 1,
                }
            },
            Some(handle) => {
                let vacant_block = mem::replace(&mut self.blocks[handle.index], Block::Occupied(value));
                match vacant_block {
                    Block::Vacant(next) => self.head = next,
                    Block::Occupied(_) => panic!("Expected a vacant block."),
                }
                handle
            },
        }
    }

    /// Frees the slot behind `handle` and returns its value.
    ///
    /// # Panics
    ///
    /// Panics if `handle` refers to an out of bounds or vacant slot.
    pub fn free(&mut self, handle: Handle) -> T {
        if handle.index >= self.blocks.len() {
            panic!("Error: attempting to free invalid block.");
        }
        let old_block = mem::replace(&mut self.blocks[handle.index], Block::Vacant(self.head.take()));
        match old_block {
            Block::Vacant(_) => panic!("Error: attempting to free vacant block."),
            Block::Occupied(value) => {
                self.len -= 1;
                self.head = Some(handle);
                value
            },
        }
    }

    pub fn get(&self, handle: Handle) -> Option<&T> {
        match self.blocks.get(handle.index) {
            Some(Block::Occupied(ref value)) => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        match self.blocks.get_mut(handle.index) {
            Some(Block::Occupied(ref mut value)) => Some(value),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
        self.head = None;
        self.len = 0;
    }
}

impl<T> Index<Handle> for TypedArena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(handle).expect("Error: handle out of bounds.")
    }
}

impl<T> IndexMut<Handle> for TypedArena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(handle).expect("Error: handle out of bounds.")
    }
}
