//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.

mod node;
mod ordered_tree;
mod tree;

pub use self::ordered_tree::{RedBlackTree, RedBlackTreeIntoIter, RedBlackTreeIter};
