use crate::arena::DEFAULT_CHUNK_SIZE;
use crate::error::{Error, Result};
use crate::linked_tree::{IntoIter, Iter};
use crate::red_black_tree::node::{Color, Tree};
use crate::red_black_tree::tree;
use compare::{self, Compare, Natural};
use std::fmt;
use std::iter::FromIterator;

/// An ordered collection implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black
/// and maintains two invariants: a red node never has a red child, and every path from a node
/// down to an empty position passes through the same number of black nodes. Together these
/// bound the height of the tree by `2 * log2(n + 1)`, so insertion, removal, and lookup take
/// `O(log n)` time in the worst case.
///
/// Elements are ordered by a comparator chosen at construction. `new` uses the natural order of
/// `T`; `with_cmp` accepts any `Compare<T>`, including closures.
///
/// # Examples
///
/// ```
/// use ordered_trees::red_black_tree::RedBlackTree;
/// use ordered_trees::Error;
///
/// let mut tree = RedBlackTree::new();
/// tree.insert(0);
/// tree.insert(3);
///
/// assert_eq!(tree.len(), 2);
/// assert!(tree.is_valid());
///
/// assert_eq!(tree.min(), Ok(&0));
/// assert_eq!(tree.max(), Ok(&3));
///
/// assert_eq!(tree.remove(&0), Ok(0));
/// assert_eq!(tree.remove(&1), Err(Error::NotFound));
/// ```
pub struct RedBlackTree<T, C = Natural<T>> {
    tree: Tree<T>,
    cmp: C,
}

impl<T> RedBlackTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `RedBlackTree<T>` ordered by the natural order of `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32> = RedBlackTree::new();
    /// ```
    pub fn new() -> Self {
        RedBlackTree::with_cmp(compare::natural())
    }
}

impl<T, C> RedBlackTree<T, C>
where
    C: Compare<T>,
{
    /// Constructs a new, empty `RedBlackTree<T, C>` ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::with_cmp(|l: &f64, r: &f64| l.partial_cmp(r).unwrap());
    /// tree.insert(2.5);
    /// tree.insert(-1.0);
    /// assert_eq!(tree.min(), Ok(&-1.0));
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        RedBlackTree::with_cmp_and_chunk_size(cmp, DEFAULT_CHUNK_SIZE)
    }

    /// Constructs a new, empty `RedBlackTree<T, C>` ordered by `cmp` whose nodes are allocated
    /// `chunk_size` at a time.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32, _> =
    ///     RedBlackTree::with_cmp_and_chunk_size(|l: &u32, r: &u32| r.cmp(l), 16);
    /// ```
    pub fn with_cmp_and_chunk_size(cmp: C, chunk_size: usize) -> Self {
        RedBlackTree {
            tree: Tree::new(chunk_size),
            cmp,
        }
    }

    /// Inserts a value into the tree. A value equal to one already present is stored as well and
    /// placed after it in iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// assert!(tree.contains(&1));
    /// ```
    pub fn insert(&mut self, value: T) {
        tree::insert(&mut self.tree, &self.cmp, value);
    }

    /// Removes a value from the tree and returns it. Returns `Error::NotFound` and leaves the
    /// tree untouched if no equal value exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackTree;
    /// use ordered_trees::Error;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.remove(&1), Ok(1));
    /// assert_eq!(tree.remove(&1), Err(Error::NotFound));
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<T> {
        tree::remove(&mut self.tree, &self.cmp, value)
    }

    /// Checks if a value equal to `value` exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// assert!(!tree.contains(&0));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        !self.tree.find(&self.cmp, value).is_nil()
    }

    /// Returns a reference to the stored value equal to `value`, or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::with_cmp(|l: &(u32, char), r: &(u32, char)| l.0.cmp(&r.0));
    /// tree.insert((1, 'a'));
    /// assert_eq!(tree.get(&(1, 'z')), Some(&(1, 'a')));
    /// assert_eq!(tree.get(&(2, 'a')), None);
    /// ```
    pub fn get(&self, value: &T) -> Option<&T> {
        let entry = self.tree.find(&self.cmp, value);
        if entry.is_nil() {
            None
        } else {
            Some(&self.tree.node(entry).value)
        }
    }
}

impl<T, C> RedBlackTree<T, C> {
    /// Returns the number of elements in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the tree, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.clear();
    /// assert_eq!(tree.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the minimum value of the tree. Returns `Error::EmptyTree` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackTree;
    /// use ordered_trees::Error;
    ///
    /// let mut tree = RedBlackTree::new();
    /// assert_eq!(tree.min(), Err(Error::EmptyTree));
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.min(), Ok(&1));
    /// ```
    pub fn min(&self) -> Result<&T> {
        let root = self.tree.root();
        if root.is_nil() {
            return Err(Error::EmptyTree);
        }
        Ok(&self.tree.node(self.tree.min_node(root)).value)
    }

    /// Returns the maximum value of the tree. Returns `Error::EmptyTree` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackTree;
    /// use ordered_trees::Error;
    ///
    /// let mut tree = RedBlackTree::new();
    /// assert_eq!(tree.max(), Err(Error::EmptyTree));
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.max(), Ok(&3));
    /// ```
    pub fn max(&self) -> Result<&T> {
        let root = self.tree.root();
        if root.is_nil() {
            return Err(Error::EmptyTree);
        }
        Ok(&self.tree.node(self.tree.max_node(root)).value)
    }

    /// Returns `true` if the tree satisfies every red black invariant: the root is black, no red
    /// node has a red child, all paths from the root to an empty position contain the same number
    /// of black nodes, and every child links back to its parent. An empty tree is valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// for value in 0..100 {
    ///     tree.insert(value);
    ///     assert!(tree.is_valid());
    /// }
    /// ```
    pub fn is_valid(&self) -> bool {
        tree::is_valid(&self.tree)
    }

    /// Returns a reference to the tree's comparator.
    pub fn cmp(&self) -> &C {
        &self.cmp
    }

    /// Returns an iterator over the tree. The iterator will yield values using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackTreeIter<'_, T> {
        RedBlackTreeIter {
            iter: Iter::new(&self.tree),
        }
    }
}

impl<T, C> IntoIterator for RedBlackTree<T, C> {
    type IntoIter = RedBlackTreeIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            iter: IntoIter::new(self.tree),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a RedBlackTree<T, C>
where
    T: 'a,
{
    type IntoIter = RedBlackTreeIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackTree<T, C>`.
///
/// This iterator traverses the elements of the tree in-order and yields owned values.
pub struct RedBlackTreeIntoIter<T> {
    iter: IntoIter<T, Color>,
}

impl<T> Iterator for RedBlackTreeIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for RedBlackTreeIntoIter<T> {}

/// An iterator for `RedBlackTree<T, C>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
/// Besides `Iterator::next` it offers `has_next` and `try_next`, which reports running past the
/// end as `Error::IteratorExhausted`.
pub struct RedBlackTreeIter<'a, T> {
    iter: Iter<'a, T, Color>,
}

impl<'a, T> RedBlackTreeIter<'a, T> {
    /// Returns `true` if another call to `try_next` will succeed.
    pub fn has_next(&self) -> bool {
        self.iter.has_next()
    }

    /// Returns the next value, or `Error::IteratorExhausted` if every value was already yielded.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackTree;
    /// use ordered_trees::Error;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.try_next(), Ok(&1));
    /// assert!(!iterator.has_next());
    /// assert_eq!(iterator.try_next(), Err(Error::IteratorExhausted));
    /// ```
    pub fn try_next(&mut self) -> Result<&'a T> {
        self.iter.try_next()
    }
}

impl<'a, T> Iterator for RedBlackTreeIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for RedBlackTreeIter<'a, T> where T: 'a {}

impl<T> Default for RedBlackTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Extend<T> for RedBlackTree<T, C>
where
    C: Compare<T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for RedBlackTree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = RedBlackTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T, C> fmt::Debug for RedBlackTree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the tree one node per line in pre-order, indenting each node by its depth and tagging
/// it with its color. An empty tree renders as `Empty Tree`.
///
/// # Examples
///
/// ```
/// use ordered_trees::red_black_tree::RedBlackTree;
///
/// let tree: RedBlackTree<u32> = vec![10, 11, 9].into_iter().collect();
/// assert_eq!(
///     tree.to_string(),
///     "|--> 10 [BLACK]\n        |--> 9 [RED]\n        |--> 11 [RED]",
/// );
/// ```
impl<T, C> fmt::Display for RedBlackTree<T, C>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tree.render(f, |color| Some(color.label()))
    }
}
