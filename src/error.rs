use std::error;
use std::fmt;
use std::result;

/// Failures reported by the trees in this crate.
///
/// Every variant signals a violated precondition rather than a transient fault, so none of them
/// are worth retrying. A failing operation leaves the tree exactly as it was.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// `remove` was called with a value that is not in the tree.
    NotFound,
    /// `min` or `max` was called on an empty tree.
    EmptyTree,
    /// An iterator was advanced past its last element.
    IteratorExhausted,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound => write!(f, "value does not exist in the tree"),
            Error::EmptyTree => write!(f, "tree is empty"),
            Error::IteratorExhausted => write!(f, "iterator has no more elements"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
