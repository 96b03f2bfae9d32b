use thiserror::Error;

/// A broken structural invariant found by a collection's `check_invariants` method.
///
/// Collections never return this from ordinary operations. It exists so that tests and callers
/// can verify a structure, for example after using a comparer that may not be a total order.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvariantError {
    #[error("cached height {cached} does not match computed height {computed}")]
    StaleHeight { cached: usize, computed: usize },
    #[error("subtree heights {left} and {right} differ by more than one")]
    Unbalanced { left: usize, right: usize },
    #[error("values are not strictly ascending at in-order position {0}")]
    OutOfOrder(usize),
    #[error("expected {expected} elements, but found {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("element at index {child} has a higher priority than its parent at index {parent}")]
    HeapOrder { parent: usize, child: usize },
    #[error("link at position {0} does not point back to its neighbour")]
    BrokenLink(usize),
}
