use crate::arena::{Entry, TypedArena};
use crate::error::{Error, Result};
use crate::node::Node;
use compare::Compare;
use log::{debug, trace};
use std::cmp::Ordering;
use std::fmt;

const INDENT: &str = "        ";
const EMPTY_TREE: &str = "Empty Tree";

/// Parent-linked binary tree whose nodes live in a `TypedArena`.
///
/// Absent children and the root's parent are represented by `Entry::NIL`, which acts as a shared
/// black sentinel. Reading through the sentinel yields the sentinel again, except for its parent
/// slot, which is writable so that a removal can remember where a spliced-in sentinel now hangs.
/// This module knows nothing about balancing; the red black and plain trees build on it.
pub struct LinkedTree<T, B> {
    nodes: TypedArena<Node<T, B>>,
    root: Entry,
    nil_parent: Entry,
}

impl<T, B> LinkedTree<T, B> {
    pub fn new(chunk_size: usize) -> Self {
        LinkedTree {
            nodes: TypedArena::new(chunk_size),
            root: Entry::NIL,
            nil_parent: Entry::NIL,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn root(&self) -> Entry {
        self.root
    }

    pub fn node(&self, entry: Entry) -> &Node<T, B> {
        &self.nodes[entry]
    }

    pub fn node_mut(&mut self, entry: Entry) -> &mut Node<T, B> {
        &mut self.nodes[entry]
    }

    pub fn left(&self, entry: Entry) -> Entry {
        if entry.is_nil() {
            Entry::NIL
        } else {
            self.nodes[entry].left
        }
    }

    pub fn right(&self, entry: Entry) -> Entry {
        if entry.is_nil() {
            Entry::NIL
        } else {
            self.nodes[entry].right
        }
    }

    pub fn parent(&self, entry: Entry) -> Entry {
        if entry.is_nil() {
            self.nil_parent
        } else {
            self.nodes[entry].parent
        }
    }

    pub fn set_left(&mut self, entry: Entry, child: Entry) {
        self.nodes[entry].left = child;
    }

    pub fn set_right(&mut self, entry: Entry, child: Entry) {
        self.nodes[entry].right = child;
    }

    pub fn set_parent(&mut self, entry: Entry, parent: Entry) {
        if entry.is_nil() {
            self.nil_parent = parent;
        } else {
            self.nodes[entry].parent = parent;
        }
    }

    /// Returns the leftmost node of the subtree rooted at `entry`.
    pub fn min_node(&self, mut entry: Entry) -> Entry {
        while !self.left(entry).is_nil() {
            entry = self.left(entry);
        }
        entry
    }

    /// Returns the rightmost node of the subtree rooted at `entry`.
    pub fn max_node(&self, mut entry: Entry) -> Entry {
        while !self.right(entry).is_nil() {
            entry = self.right(entry);
        }
        entry
    }

    /// Returns the node that follows `entry` in order, or `Entry::NIL` if `entry` is the maximum.
    pub fn successor(&self, entry: Entry) -> Entry {
        let right = self.right(entry);
        if !right.is_nil() {
            return self.min_node(right);
        }

        let mut curr = entry;
        let mut parent = self.parent(curr);
        while !parent.is_nil() && curr == self.right(parent) {
            curr = parent;
            parent = self.parent(curr);
        }
        parent
    }

    /// Puts `child` in the place `node` occupies under its parent. `node` keeps its own links.
    pub fn transplant(&mut self, node: Entry, child: Entry) {
        let parent = self.parent(node);
        if parent.is_nil() {
            self.root = child;
        } else if node == self.left(parent) {
            self.set_left(parent, child);
        } else {
            self.set_right(parent, child);
        }
        self.set_parent(child, parent);
    }

    //     node             pivot
    //    /    \           /     \
    //   a    pivot  =>  node     c
    //       /     \    /    \
    //     inner    c  a    inner
    pub fn rotate_left(&mut self, node: Entry) {
        trace!("rotating left at {:?}", node);
        let pivot = self.right(node);
        debug_assert!(!pivot.is_nil());

        let inner = self.left(pivot);
        self.set_right(node, inner);
        if !inner.is_nil() {
            self.set_parent(inner, node);
        }
        self.transplant(node, pivot);
        self.set_left(pivot, node);
        self.set_parent(node, pivot);
    }

    pub fn rotate_right(&mut self, node: Entry) {
        trace!("rotating right at {:?}", node);
        let pivot = self.left(node);
        debug_assert!(!pivot.is_nil());

        let inner = self.right(pivot);
        self.set_left(node, inner);
        if !inner.is_nil() {
            self.set_parent(inner, node);
        }
        self.transplant(node, pivot);
        self.set_right(pivot, node);
        self.set_parent(node, pivot);
    }

    /// Returns a node whose value compares equal to `value`, or `Entry::NIL`.
    pub fn find<C>(&self, cmp: &C, value: &T) -> Entry
    where
        C: Compare<T>,
    {
        let mut curr = self.root;
        while !curr.is_nil() {
            let node = &self.nodes[curr];
            curr = match cmp.compare(value, &node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return curr,
            };
        }
        Entry::NIL
    }

    /// Links a new leaf holding `value` below the node the search for `value` ends at. Values
    /// that are not less than a node go to its right.
    pub fn attach_leaf<C>(&mut self, cmp: &C, value: T, balance: B) -> Entry
    where
        C: Compare<T>,
    {
        let mut parent = Entry::NIL;
        let mut curr = self.root;
        let mut goes_left = false;
        while !curr.is_nil() {
            parent = curr;
            let node = &self.nodes[curr];
            goes_left = cmp.compare(&value, &node.value) == Ordering::Less;
            curr = if goes_left { node.left } else { node.right };
        }

        let entry = self.nodes.allocate(Node::new(value, balance, parent));
        if parent.is_nil() {
            self.root = entry;
        } else if goes_left {
            self.set_left(parent, entry);
        } else {
            self.set_right(parent, entry);
        }
        entry
    }

    /// Frees a node that has already been unlinked from the tree and returns its value.
    pub fn release(&mut self, entry: Entry) -> T {
        self.nodes.free(entry).value
    }

    /// Releases every node, children before their parent.
    pub fn clear(&mut self) {
        debug!("clearing tree of {} nodes", self.len());
        let mut pending = Vec::new();
        let mut order = Vec::with_capacity(self.len());
        if !self.root.is_nil() {
            pending.push(self.root);
        }
        while let Some(entry) = pending.pop() {
            order.push(entry);
            let node = &self.nodes[entry];
            if !node.left.is_nil() {
                pending.push(node.left);
            }
            if !node.right.is_nil() {
                pending.push(node.right);
            }
        }
        for entry in order.into_iter().rev() {
            self.nodes.free(entry);
        }
        debug_assert!(self.nodes.is_empty());

        self.nodes.clear();
        self.root = Entry::NIL;
        self.nil_parent = Entry::NIL;
    }

    /// Writes one line per node in pre-order, indented by depth. `label` supplies an optional
    /// tag printed after each value.
    pub fn render<F>(&self, f: &mut fmt::Formatter<'_>, label: F) -> fmt::Result
    where
        T: fmt::Display,
        F: Fn(&B) -> Option<&'static str>,
    {
        if self.root.is_nil() {
            return f.write_str(EMPTY_TREE);
        }

        let mut stack = vec![(self.root, 0)];
        let mut first = true;
        while let Some((entry, depth)) = stack.pop() {
            if !first {
                writeln!(f)?;
            }
            first = false;

            let node = &self.nodes[entry];
            for _ in 0..depth {
                f.write_str(INDENT)?;
            }
            write!(f, "|--> {}", node.value)?;
            if let Some(tag) = label(&node.balance) {
                write!(f, " [{}]", tag)?;
            }

            if !node.right.is_nil() {
                stack.push((node.right, depth + 1));
            }
            if !node.left.is_nil() {
                stack.push((node.left, depth + 1));
            }
        }
        Ok(())
    }
}

/// In-order iterator that borrows a `LinkedTree`.
pub struct Iter<'a, T, B> {
    tree: &'a LinkedTree<T, B>,
    stack: Vec<Entry>,
    remaining: usize,
}

impl<'a, T, B> Iter<'a, T, B> {
    pub fn new(tree: &'a LinkedTree<T, B>) -> Self {
        let mut iter = Iter {
            tree,
            stack: Vec::new(),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut curr: Entry) {
        while !curr.is_nil() {
            self.stack.push(curr);
            curr = self.tree.left(curr);
        }
    }

    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    pub fn try_next(&mut self) -> Result<&'a T> {
        let entry = self.stack.pop().ok_or(Error::IteratorExhausted)?;
        let tree = self.tree;
        self.push_left_spine(tree.right(entry));
        self.remaining -= 1;
        Ok(&tree.node(entry).value)
    }
}

impl<'a, T, B> Iterator for Iter<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// In-order iterator that consumes a `LinkedTree`, releasing each node as it is yielded.
pub struct IntoIter<T, B> {
    tree: LinkedTree<T, B>,
    stack: Vec<Entry>,
}

impl<T, B> IntoIter<T, B> {
    pub fn new(tree: LinkedTree<T, B>) -> Self {
        let root = tree.root;
        let mut iter = IntoIter {
            tree,
            stack: Vec::new(),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut curr: Entry) {
        while !curr.is_nil() {
            self.stack.push(curr);
            curr = self.tree.left(curr);
        }
    }
}

impl<T, B> Iterator for IntoIter<T, B> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.stack.pop()?;
        let right = self.tree.right(entry);
        self.push_left_spine(right);
        Some(self.tree.release(entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tree.len(), Some(self.tree.len()))
    }
}
