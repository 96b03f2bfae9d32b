use crate::avl_tree::node::Node;
use crate::comparer::Comparer;
use crate::error::InvariantError;
use log::{debug, trace};
use std::cmp::{self, Ordering};
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

/// Which child slot of a node a link occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    // precondition: ordering is not `Equal`
    fn toward(ordering: Ordering) -> Side {
        match ordering {
            Ordering::Less => Side::Left,
            _ => Side::Right,
        }
    }
}

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    trace!("rotating left at node of height {}", node.height);
    let mut child = match node.take_child(Side::Right) {
        Some(child) => child,
        None => unreachable!(),
    };
    node.set_right(child.take_child(Side::Left));
    child.set_left(Some(node));
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    trace!("rotating right at node of height {}", node.height);
    let mut child = match node.take_child(Side::Left) {
        Some(child) => child,
        None => unreachable!(),
    };
    node.set_left(child.take_child(Side::Right));
    child.set_right(Some(node));
    child
}

// Restores the balance of a single node whose subtrees are already balanced and returns the
// node that takes its place.
fn balance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.take_child(Side::Right) {
            if child.balance() < 0 {
                node.set_right(Some(rotate_right(child)));
            } else {
                node.set_right(Some(child));
            }
        }
        rotate_left(node)
    } else if node.balance() < -1 {
        if let Some(child) = node.take_child(Side::Left) {
            if child.balance() > 0 {
                node.set_left(Some(rotate_left(child)));
            } else {
                node.set_left(Some(child));
            }
        }
        rotate_right(node)
    } else {
        node
    }
}

/// The nodes visited on a walk down from the root.
///
/// Walking detaches each visited node from its parent and moves it onto the stack of
/// ancestors, so every node is owned either by a child slot or by the path itself. Consuming
/// the path with `rebalance` or `restore` re-attaches the nodes deepest first and yields the
/// root of the reassembled tree.
pub struct Path<T> {
    ancestors: Vec<(Box<Node<T>>, Side)>,
    current: Box<Node<T>>,
}

impl<T> Path<T> {
    pub fn new(root: Box<Node<T>>) -> Self {
        Path {
            ancestors: Vec::new(),
            current: root,
        }
    }

    pub fn current(&self) -> &Node<T> {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut Node<T> {
        &mut self.current
    }

    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// Moves to the child of the current node on `side`. Returns `false` without moving if the
    /// child does not exist.
    pub fn descend(&mut self, side: Side) -> bool {
        match self.current.take_child(side) {
            Some(child) => {
                let parent = mem::replace(&mut self.current, child);
                self.ancestors.push((parent, side));
                true
            },
            None => false,
        }
    }

    /// Swaps the value of the current node with the value of the ancestor at `depth`.
    pub fn swap_value(&mut self, depth: usize) {
        let Path { ref mut ancestors, ref mut current } = self;
        if let Some((ancestor, _)) = ancestors.get_mut(depth) {
            mem::swap(&mut ancestor.value, &mut current.value);
        }
    }

    /// Re-attaches every node on the path without rotating and returns the root.
    pub fn restore(self) -> Box<Node<T>> {
        let Path { mut ancestors, mut current } = self;
        while let Some((mut parent, side)) = ancestors.pop() {
            parent.set_child(side, Some(current));
            current = parent;
        }
        current
    }

    /// Re-attaches every node on the path, recomputing heights and rotating where a node is out
    /// of balance, and returns the new root.
    ///
    /// Every ancestor is visited. A rotation changes the height of the subtree that takes the
    /// rotated node's place, which can unbalance any node further up.
    pub fn rebalance(self) -> Box<Node<T>> {
        let Path { mut ancestors, current } = self;
        let mut node = balance(current);
        while let Some((mut parent, side)) = ancestors.pop() {
            parent.set_child(side, Some(node));
            node = balance(parent);
        }
        node
    }

    /// Detaches the current node, which must be a leaf, rebalances the remaining path, and
    /// returns the detached value together with the new root.
    pub fn remove_leaf(self) -> (T, Tree<T>) {
        let Path { mut ancestors, current } = self;
        debug_assert!(current.is_leaf());
        let value = current.value;
        match ancestors.pop() {
            None => (value, None),
            Some((mut parent, side)) => {
                parent.set_child(side, None);
                let path = Path {
                    ancestors,
                    current: parent,
                };
                (value, Some(path.rebalance()))
            },
        }
    }
}

pub fn contains<T, C>(tree: &Tree<T>, comparer: &C, value: &T) -> bool
where
    C: Comparer<T>,
{
    let mut curr = tree;
    while let Some(node) = curr {
        match comparer.compare(value, &node.value) {
            Ordering::Less => curr = node.left(),
            Ordering::Greater => curr = node.right(),
            Ordering::Equal => return true,
        }
    }
    false
}

pub fn insert<T, C>(tree: &mut Tree<T>, comparer: &C, value: T) -> bool
where
    C: Comparer<T>,
{
    let root = match tree.take() {
        Some(root) => root,
        None => {
            *tree = Some(Box::new(Node::new(value)));
            return true;
        },
    };

    let mut path = Path::new(root);
    loop {
        let side = match comparer.compare(&value, &path.current().value) {
            Ordering::Equal => {
                debug!("rejecting duplicate value at depth {}", path.depth());
                *tree = Some(path.restore());
                return false;
            },
            ordering => Side::toward(ordering),
        };

        if !path.descend(side) {
            path.current_mut().set_child(side, Some(Box::new(Node::new(value))));
            break;
        }
    }

    *tree = Some(path.rebalance());
    true
}

pub fn remove<T, C>(tree: &mut Tree<T>, comparer: &C, value: &T) -> Option<T>
where
    C: Comparer<T>,
{
    let mut path = Path::new(tree.take()?);
    loop {
        let side = match comparer.compare(value, &path.current().value) {
            Ordering::Equal => break,
            ordering => Side::toward(ordering),
        };

        if !path.descend(side) {
            debug!("value to remove not found after depth {}", path.depth());
            *tree = Some(path.restore());
            return None;
        }
    }

    // Push the matched value down to a leaf by swapping it with its structural successor, or
    // its predecessor when there is no right subtree.
    while !path.current().is_leaf() {
        let hole = path.depth();
        let side = if path.current().right().is_some() {
            Side::Right
        } else {
            Side::Left
        };
        path.descend(side);
        while path.descend(side.opposite()) {}
        path.swap_value(hole);
    }

    let (removed, root) = path.remove_leaf();
    *tree = root;
    Some(removed)
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(left_node) = curr.left() {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(right_node) = curr.right() {
            curr = right_node;
        }
        &curr.value
    })
}

/// Verifies the cached height and balance of every node. Returns the height of the tree.
pub fn check_heights<T>(tree: &Tree<T>) -> Result<usize, InvariantError> {
    match tree {
        None => Ok(0),
        Some(node) => {
            let left = check_heights(node.left())?;
            let right = check_heights(node.right())?;
            let computed = cmp::max(left, right) + 1;
            if node.height != computed {
                return Err(InvariantError::StaleHeight {
                    cached: node.height,
                    computed,
                });
            }
            if cmp::max(left, right) - cmp::min(left, right) > 1 {
                return Err(InvariantError::Unbalanced { left, right });
            }
            Ok(computed)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{check_heights, height, insert, remove, Node, Tree};
    use crate::comparer::natural;

    fn leaf(value: u32) -> Tree<u32> {
        Some(Box::new(Node::new(value)))
    }

    fn root_value(tree: &Tree<u32>) -> Option<u32> {
        tree.as_ref().map(|node| node.value)
    }

    #[test]
    fn test_right_right_rotation() {
        let mut tree: Tree<u32> = None;
        for value in 1..4 {
            assert!(insert(&mut tree, &natural::<u32>(), value));
        }
        assert_eq!(root_value(&tree), Some(2));
        assert_eq!(height(&tree), 2);
    }

    #[test]
    fn test_left_left_rotation() {
        let mut tree: Tree<u32> = None;
        for value in (1..4).rev() {
            insert(&mut tree, &natural::<u32>(), value);
        }
        assert_eq!(root_value(&tree), Some(2));
        assert_eq!(height(&tree), 2);
    }

    #[test]
    fn test_right_left_rotation() {
        let mut tree: Tree<u32> = None;
        for value in &[1, 3, 2] {
            insert(&mut tree, &natural::<u32>(), *value);
        }
        assert_eq!(root_value(&tree), Some(2));
        assert_eq!(check_heights(&tree), Ok(2));
    }

    #[test]
    fn test_left_right_rotation() {
        let mut tree: Tree<u32> = None;
        for value in &[3, 1, 2] {
            insert(&mut tree, &natural::<u32>(), *value);
        }
        assert_eq!(root_value(&tree), Some(2));
        assert_eq!(check_heights(&tree), Ok(2));
    }

    #[test]
    fn test_insert_duplicate_restores_heights() {
        let mut tree: Tree<u32> = None;
        for value in 0..16 {
            insert(&mut tree, &natural::<u32>(), value);
        }
        let before = height(&tree);
        assert!(!insert(&mut tree, &natural::<u32>(), 7));
        assert_eq!(height(&tree), before);
        assert_eq!(check_heights(&tree), Ok(before));
    }

    #[test]
    fn test_remove_missing_restores_heights() {
        let mut tree: Tree<u32> = None;
        for value in 0..16 {
            insert(&mut tree, &natural::<u32>(), value * 2);
        }
        let before = height(&tree);
        assert_eq!(remove(&mut tree, &natural::<u32>(), &7), None);
        assert_eq!(check_heights(&tree), Ok(before));
    }

    #[test]
    fn test_remove_root_leaf() {
        let mut tree = leaf(1);
        assert_eq!(remove(&mut tree, &natural::<u32>(), &1), Some(1));
        assert!(tree.is_none());
    }

    #[test]
    fn test_remove_internal_uses_successor() {
        let mut tree: Tree<u32> = None;
        for value in &[2, 1, 3] {
            insert(&mut tree, &natural::<u32>(), *value);
        }
        assert_eq!(remove(&mut tree, &natural::<u32>(), &2), Some(2));
        assert_eq!(root_value(&tree), Some(3));
        assert_eq!(check_heights(&tree), Ok(2));
    }

    #[test]
    fn test_remove_internal_uses_predecessor() {
        let mut tree: Tree<u32> = None;
        for value in &[2, 1] {
            insert(&mut tree, &natural::<u32>(), *value);
        }
        assert_eq!(remove(&mut tree, &natural::<u32>(), &2), Some(2));
        assert_eq!(root_value(&tree), Some(1));
        assert_eq!(check_heights(&tree), Ok(1));
    }

    #[test]
    fn test_remove_rebalances_every_ancestor() {
        let mut tree: Tree<u32> = None;
        for value in 0..64 {
            insert(&mut tree, &natural::<u32>(), value);
        }
        for value in 0..48 {
            assert_eq!(remove(&mut tree, &natural::<u32>(), &value), Some(value));
            assert!(check_heights(&tree).is_ok());
        }
    }
}
