use crate::arena::Entry;

/// A node of a parent-linked binary search tree stored in a `TypedArena`.
///
/// `balance` holds whatever per-node metadata the balancing scheme needs: `()` for the plain
/// binary search tree and a `Color` for the red black tree. The parent handle is a back-reference
/// only; a node is owned by the arena and reachable from exactly one child slot or the root.
pub struct Node<T, B> {
    pub value: T,
    pub balance: B,
    pub left: Entry,
    pub right: Entry,
    pub parent: Entry,
}

impl<T, B> Node<T, B> {
    pub fn new(value: T, balance: B, parent: Entry) -> Self {
        Node {
            value,
            balance,
            left: Entry::NIL,
            right: Entry::NIL,
            parent,
        }
    }
}
