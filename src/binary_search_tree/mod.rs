//! Binary search tree without any balancing, kept as the simple counterpart of the red black tree.

mod ordered_tree;
mod tree;

pub use self::ordered_tree::{BinarySearchTree, BinarySearchTreeIntoIter, BinarySearchTreeIter};
