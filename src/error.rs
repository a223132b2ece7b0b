use thiserror::Error;

/// Returned by [`Iter::try_next`](crate::iter::Iter::try_next).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TraversalError {
    #[error("traversal exhausted: no occupied slots remain")]
    Exhausted,
}
