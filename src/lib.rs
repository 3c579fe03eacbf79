//! Ordered collections built on parent-linked binary trees.
//!
//! `RedBlackTree` keeps its height logarithmic by recoloring and rotating after every insertion
//! and removal. `BinarySearchTree` shares the same node storage and traversal code but never
//! rebalances. Both order their values with a `compare::Compare` comparator, so any ordering can
//! be supplied at construction; `new` uses the natural order of an `Ord` type.

pub mod arena;
pub mod binary_search_tree;
mod error;
mod linked_tree;
mod node;
pub mod red_black_tree;

pub use self::error::{Error, Result};
