use crate::arena::DEFAULT_CHUNK_SIZE;
use crate::binary_search_tree::tree::{self, Tree};
use crate::error::{Error, Result};
use crate::linked_tree::{IntoIter, Iter};
use compare::{self, Compare, Natural};
use std::fmt;
use std::iter::FromIterator;

/// An ordered collection implemented using an unbalanced binary search tree.
///
/// Every left descendant of a node orders before it and every right descendant does not. No
/// rebalancing is done, so the shape of the tree depends on insertion order: random insertions
/// give `O(log n)` expected depth, while sorted insertions degenerate into a linked list with
/// `O(n)` operations. See `RedBlackTree` for a tree that bounds its height.
///
/// # Examples
///
/// ```
/// use ordered_trees::binary_search_tree::BinarySearchTree;
///
/// let tree: BinarySearchTree<u32> = vec![5, 3, 7, 1, 4].into_iter().collect();
/// assert_eq!(tree.len(), 5);
/// assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &3, &4, &5, &7]);
/// ```
pub struct BinarySearchTree<T, C = Natural<T>> {
    tree: Tree<T>,
    cmp: C,
}

impl<T> BinarySearchTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `BinarySearchTree<T>` ordered by the natural order of `T`.
    pub fn new() -> Self {
        BinarySearchTree::with_cmp(compare::natural())
    }
}

impl<T, C> BinarySearchTree<T, C>
where
    C: Compare<T>,
{
    /// Constructs a new, empty `BinarySearchTree<T, C>` ordered by `cmp`.
    pub fn with_cmp(cmp: C) -> Self {
        BinarySearchTree::with_cmp_and_chunk_size(cmp, DEFAULT_CHUNK_SIZE)
    }

    /// Constructs a new, empty `BinarySearchTree<T, C>` ordered by `cmp` whose nodes are
    /// allocated `chunk_size` at a time.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn with_cmp_and_chunk_size(cmp: C, chunk_size: usize) -> Self {
        BinarySearchTree {
            tree: Tree::new(chunk_size),
            cmp,
        }
    }

    /// Inserts a value into the tree. A value equal to one already present is stored as well and
    /// placed after it in iteration order.
    pub fn insert(&mut self, value: T) {
        tree::insert(&mut self.tree, &self.cmp, value);
    }

    /// Removes a value from the tree and returns it. Returns `Error::NotFound` and leaves the
    /// tree untouched if no equal value exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::binary_search_tree::BinarySearchTree;
    /// use ordered_trees::Error;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.remove(&1), Ok(1));
    /// assert_eq!(tree.remove(&1), Err(Error::NotFound));
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<T> {
        tree::remove(&mut self.tree, &self.cmp, value)
    }

    /// Checks if a value equal to `value` exists in the tree.
    pub fn contains(&self, value: &T) -> bool {
        !self.tree.find(&self.cmp, value).is_nil()
    }

    /// Returns a reference to the stored value equal to `value`, or `None` if there is none.
    pub fn get(&self, value: &T) -> Option<&T> {
        let entry = self.tree.find(&self.cmp, value);
        if entry.is_nil() {
            None
        } else {
            Some(&self.tree.node(entry).value)
        }
    }
}

impl<T, C> BinarySearchTree<T, C> {
    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the tree, removing all values.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the minimum value of the tree. Returns `Error::EmptyTree` if the tree is empty.
    pub fn min(&self) -> Result<&T> {
        let root = self.tree.root();
        if root.is_nil() {
            return Err(Error::EmptyTree);
        }
        Ok(&self.tree.node(self.tree.min_node(root)).value)
    }

    /// Returns the maximum value of the tree. Returns `Error::EmptyTree` if the tree is empty.
    pub fn max(&self) -> Result<&T> {
        let root = self.tree.root();
        if root.is_nil() {
            return Err(Error::EmptyTree);
        }
        Ok(&self.tree.node(self.tree.max_node(root)).value)
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
    /// use ordered_trees::binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(5);
    /// tree.insert(3);
    /// tree.insert(7);
    ///
    /// let mut iterator = tree.iter();
    /// assert!(iterator.has_next());
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), Some(&5));
    /// assert_eq!(iterator.next(), Some(&7));
    /// assert!(!iterator.has_next());
    /// ```
    pub fn iter(&self) -> BinarySearchTreeIter<'_, T> {
        BinarySearchTreeIter {
            iter: Iter::new(&self.tree),
        }
    }
}

impl<T, C> IntoIterator for BinarySearchTree<T, C> {
    type IntoIter = BinarySearchTreeIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            iter: IntoIter::new(self.tree),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a BinarySearchTree<T, C>
where
    T: 'a,
{
    type IntoIter = BinarySearchTreeIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `BinarySearchTree<T, C>`.
///
/// This iterator traverses the elements of the tree in-order and yields owned values.
pub struct BinarySearchTreeIntoIter<T> {
    iter: IntoIter<T, ()>,
}

impl<T> Iterator for BinarySearchTreeIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for BinarySearchTreeIntoIter<T> {}

/// An iterator for `BinarySearchTree<T, C>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct BinarySearchTreeIter<'a, T> {
    iter: Iter<'a, T, ()>,
}

impl<'a, T> BinarySearchTreeIter<'a, T> {
    /// Returns `true` if another call to `try_next` will succeed.
    pub fn has_next(&self) -> bool {
        self.iter.has_next()
    }

    /// Returns the next value, or `Error::IteratorExhausted` if every value was already yielded.
    pub fn try_next(&mut self) -> Result<&'a T> {
        self.iter.try_next()
    }
}

impl<'a, T> Iterator for BinarySearchTreeIter<'a, T>
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

impl<'a, T> ExactSizeIterator for BinarySearchTreeIter<'a, T> where T: 'a {}

impl<T> Default for BinarySearchTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Extend<T> for BinarySearchTree<T, C>
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

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T, C> fmt::Debug for BinarySearchTree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, C> fmt::Display for BinarySearchTree<T, C>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tree.render(f, |_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::BinarySearchTree;
    use crate::error::Error;

    #[test]
    fn test_len_empty() {
        let tree: BinarySearchTree<u32> = BinarySearchTree::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_empty_tree_failures() {
        let mut tree: BinarySearchTree<u32> = BinarySearchTree::new();
        assert_eq!(tree.min(), Err(Error::EmptyTree));
        assert_eq!(tree.max(), Err(Error::EmptyTree));
        assert_eq!(tree.remove(&1), Err(Error::NotFound));
        assert!(!tree.contains(&1));
    }

    #[test]
    fn test_insert_and_contains() {
        let mut tree = BinarySearchTree::new();
        tree.insert(4);
        assert!(tree.contains(&4));
        assert_eq!(tree.get(&4), Some(&4));
        assert_eq!(tree.get(&5), None);
    }

    #[test]
    fn test_removal_general() {
        let mut tree = BinarySearchTree::with_cmp(|l: &f64, r: &f64| l.partial_cmp(r).unwrap());
        assert_eq!(tree.remove(&3.0), Err(Error::NotFound));

        tree.insert(4.0);
        assert_eq!(tree.remove(&4.0), Ok(4.0));
        assert!(!tree.contains(&4.0));

        tree.insert(6.0);
        tree.insert(7.0);
        tree.insert(8.0);
        for value in &[8.0, 6.0, 7.0] {
            assert_eq!(tree.remove(value), Ok(*value));
            assert!(!tree.contains(value));
        }
        assert!(tree.is_empty());
    }

    #[test]
    fn test_min_max() {
        let mut tree = BinarySearchTree::new();
        let steps = [(5, 5, 5), (3, 3, 5), (11, 3, 11), (4, 3, 11), (2, 2, 11)];
        for &(value, min, max) in &steps {
            tree.insert(value);
            assert_eq!(tree.min(), Ok(&min));
            assert_eq!(tree.max(), Ok(&max));
        }

        tree.clear();
        assert_eq!(tree.min(), Err(Error::EmptyTree));
        assert_eq!(tree.max(), Err(Error::EmptyTree));
    }

    #[test]
    fn test_remove_root() {
        let mut tree: BinarySearchTree<u32> = vec![5, 3, 7].into_iter().collect();
        assert_eq!(tree.remove(&5), Ok(5));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&3, &7]);
    }

    #[test]
    fn test_sorted_insertions() {
        let mut tree = BinarySearchTree::new();
        tree.extend(0..10_000u32);
        assert_eq!(tree.len(), 10_000);
        assert_eq!(tree.max(), Ok(&9_999));
        assert_eq!(tree.iter().count(), 10_000);
        tree.clear();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_iter_exhausted() {
        let tree: BinarySearchTree<u32> = vec![1].into_iter().collect();
        let mut iter = tree.iter();
        assert_eq!(iter.try_next(), Ok(&1));
        assert_eq!(iter.try_next(), Err(Error::IteratorExhausted));
    }

    #[test]
    fn test_into_iter() {
        let tree: BinarySearchTree<u32> = vec![1, 5, 3].into_iter().collect();
        assert_eq!(tree.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_display() {
        let tree: BinarySearchTree<u32> = vec![5, 3, 7].into_iter().collect();
        assert_eq!(tree.to_string(), "|--> 5\n        |--> 3\n        |--> 7");
        assert_eq!(BinarySearchTree::<u32>::new().to_string(), "Empty Tree");
    }

    #[test]
    fn test_debug() {
        let tree: BinarySearchTree<u32> = vec![2, 1].into_iter().collect();
        assert_eq!(format!("{:?}", tree), "[1, 2]");
    }
}
