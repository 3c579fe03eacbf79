use crate::arena::Entry;
use crate::error::{Error, Result};
use crate::red_black_tree::node::{Color, Tree};
use compare::Compare;
use log::{debug, trace};

pub fn insert<T, C>(tree: &mut Tree<T>, cmp: &C, value: T)
where
    C: Compare<T>,
{
    let node = tree.attach_leaf(cmp, value, Color::Red);
    fix_insert(tree, node);
}

// Restores the red black properties after `node` was attached as a red leaf. The only possible
// violation is a red node with a red parent, which is pushed up the tree until it disappears.
fn fix_insert<T>(tree: &mut Tree<T>, mut node: Entry) {
    while tree.is_red(tree.parent(node)) {
        let parent = tree.parent(node);
        let grandparent = tree.parent(parent);
        if grandparent.is_nil() {
            break;
        }

        if parent == tree.left(grandparent) {
            let uncle = tree.right(grandparent);
            if tree.is_red(uncle) {
                trace!("insert fixup: recoloring below {:?}", grandparent);
                tree.set_color(parent, Color::Black);
                tree.set_color(uncle, Color::Black);
                tree.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            if node == tree.right(parent) {
                node = parent;
                tree.rotate_left(node);
            }
            let parent = tree.parent(node);
            let grandparent = tree.parent(parent);
            tree.set_color(parent, Color::Black);
            tree.set_color(grandparent, Color::Red);
            tree.rotate_right(grandparent);
        } else {
            let uncle = tree.left(grandparent);
            if tree.is_red(uncle) {
                trace!("insert fixup: recoloring below {:?}", grandparent);
                tree.set_color(parent, Color::Black);
                tree.set_color(uncle, Color::Black);
                tree.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            if node == tree.left(parent) {
                node = parent;
                tree.rotate_right(node);
            }
            let parent = tree.parent(node);
            let grandparent = tree.parent(parent);
            tree.set_color(parent, Color::Black);
            tree.set_color(grandparent, Color::Red);
            tree.rotate_left(grandparent);
        }
    }

    let root = tree.root();
    tree.set_color(root, Color::Black);
}

pub fn remove<T, C>(tree: &mut Tree<T>, cmp: &C, value: &T) -> Result<T>
where
    C: Compare<T>,
{
    let target = tree.find(cmp, value);
    if target.is_nil() {
        debug!("remove: value does not exist in the tree");
        return Err(Error::NotFound);
    }

    let left = tree.left(target);
    let right = tree.right(target);
    let (candidate, removed_color) = if left.is_nil() {
        tree.transplant(target, right);
        (right, tree.color(target))
    } else if right.is_nil() {
        tree.transplant(target, left);
        (left, tree.color(target))
    } else {
        let successor = tree.successor(target);
        let successor_color = tree.color(successor);
        let candidate = tree.right(successor);

        if tree.parent(successor) == target {
            tree.set_parent(candidate, successor);
        } else {
            tree.transplant(successor, candidate);
            tree.set_right(successor, right);
            tree.set_parent(right, successor);
        }
        tree.transplant(target, successor);
        tree.set_left(successor, left);
        tree.set_parent(left, successor);
        let target_color = tree.color(target);
        tree.set_color(successor, target_color);

        (candidate, successor_color)
    };

    if removed_color == Color::Black {
        fix_remove(tree, candidate);
    }
    Ok(tree.release(target))
}

// `node` carries an extra black after a black node was spliced out above it. The extra black is
// moved up or absorbed by rotations until every path has the same black height again. `node` may
// be the sentinel, in which case its parent slot tells us where it hangs.
fn fix_remove<T>(tree: &mut Tree<T>, mut node: Entry) {
    while node != tree.root() && !tree.is_red(node) {
        let parent = tree.parent(node);

        if node == tree.left(parent) {
            let mut sibling = tree.right(parent);
            if tree.is_red(sibling) {
                trace!("remove fixup: red sibling {:?}", sibling);
                tree.set_color(sibling, Color::Black);
                tree.set_color(parent, Color::Red);
                tree.rotate_left(parent);
                sibling = tree.right(parent);
            }

            if !tree.is_red(tree.left(sibling)) && !tree.is_red(tree.right(sibling)) {
                tree.set_color(sibling, Color::Red);
                node = parent;
                continue;
            }

            if !tree.is_red(tree.right(sibling)) {
                let near = tree.left(sibling);
                tree.set_color(near, Color::Black);
                tree.set_color(sibling, Color::Red);
                tree.rotate_right(sibling);
                sibling = tree.right(parent);
            }
            let parent_color = tree.color(parent);
            let far = tree.right(sibling);
            tree.set_color(sibling, parent_color);
            tree.set_color(parent, Color::Black);
            tree.set_color(far, Color::Black);
            tree.rotate_left(parent);
            node = tree.root();
        } else {
            let mut sibling = tree.left(parent);
            if tree.is_red(sibling) {
                trace!("remove fixup: red sibling {:?}", sibling);
                tree.set_color(sibling, Color::Black);
                tree.set_color(parent, Color::Red);
                tree.rotate_right(parent);
                sibling = tree.left(parent);
            }

            if !tree.is_red(tree.left(sibling)) && !tree.is_red(tree.right(sibling)) {
                tree.set_color(sibling, Color::Red);
                node = parent;
                continue;
            }

            if !tree.is_red(tree.left(sibling)) {
                let near = tree.right(sibling);
                tree.set_color(near, Color::Black);
                tree.set_color(sibling, Color::Red);
                tree.rotate_left(sibling);
                sibling = tree.left(parent);
            }
            let parent_color = tree.color(parent);
            let far = tree.left(sibling);
            tree.set_color(sibling, parent_color);
            tree.set_color(parent, Color::Black);
            tree.set_color(far, Color::Black);
            tree.rotate_right(parent);
            node = tree.root();
        }
    }

    tree.set_color(node, Color::Black);
}

/// Checks the coloring rules, equal black heights on every root-to-sentinel path, and that every
/// child links back to its parent.
pub fn is_valid<T>(tree: &Tree<T>) -> bool {
    let root = tree.root();
    if root.is_nil() {
        return true;
    }
    if tree.is_red(root) || !tree.parent(root).is_nil() {
        return false;
    }

    let mut black_height = None;
    let mut stack = vec![(root, 0)];
    while let Some((entry, blacks_above)) = stack.pop() {
        let blacks = if tree.is_red(entry) {
            blacks_above
        } else {
            blacks_above + 1
        };

        if entry.is_nil() {
            match black_height {
                None => black_height = Some(blacks),
                Some(expected) if expected != blacks => return false,
                Some(_) => {},
            }
            continue;
        }

        let left = tree.left(entry);
        let right = tree.right(entry);
        if tree.is_red(entry) && (tree.is_red(left) || tree.is_red(right)) {
            return false;
        }
        for &child in &[left, right] {
            if !child.is_nil() && tree.parent(child) != entry {
                return false;
            }
            stack.push((child, blacks));
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::{insert, is_valid, remove};
    use crate::arena::Entry;
    use crate::error::Error;
    use crate::linked_tree::Iter;
    use crate::red_black_tree::node::{Color, Tree};
    use compare::natural;

    fn values(tree: &Tree<u32>) -> Vec<u32> {
        Iter::new(tree).cloned().collect()
    }

    fn color_of(tree: &Tree<u32>, value: u32) -> Color {
        tree.color(tree.find(&natural(), &value))
    }

    #[test]
    fn test_insert_root_is_black() {
        let mut tree = Tree::new(4);
        insert(&mut tree, &natural(), 10);
        assert_eq!(color_of(&tree, 10), Color::Black);
        assert!(is_valid(&tree));
    }

    #[test]
    fn test_insert_red_uncle_recolors() {
        let mut tree = Tree::new(4);
        for value in &[10, 11, 9] {
            insert(&mut tree, &natural(), *value);
            assert!(is_valid(&tree));
        }
        assert_eq!(color_of(&tree, 9), Color::Red);
        assert_eq!(color_of(&tree, 11), Color::Red);

        insert(&mut tree, &natural(), 8);
        assert!(is_valid(&tree));
        assert_eq!(color_of(&tree, 10), Color::Black);
        assert_eq!(color_of(&tree, 9), Color::Black);
        assert_eq!(color_of(&tree, 11), Color::Black);
        assert_eq!(color_of(&tree, 8), Color::Red);
    }

    #[test]
    fn test_insert_line_rotates() {
        let mut tree = Tree::new(4);
        for value in &[1, 2, 3] {
            insert(&mut tree, &natural(), *value);
        }
        assert_eq!(tree.node(tree.root()).value, 2);
        assert!(is_valid(&tree));
    }

    #[test]
    fn test_insert_zig_zag_rotates_twice() {
        let mut tree = Tree::new(4);
        for value in &[3, 1, 2] {
            insert(&mut tree, &natural(), *value);
        }
        assert_eq!(tree.node(tree.root()).value, 2);
        assert_eq!(values(&tree), vec![1, 2, 3]);
        assert!(is_valid(&tree));
    }

    #[test]
    fn test_remove_missing() {
        let mut tree = Tree::new(4);
        assert_eq!(remove(&mut tree, &natural(), &3), Err(Error::NotFound));
        insert(&mut tree, &natural(), 1);
        assert_eq!(remove(&mut tree, &natural(), &3), Err(Error::NotFound));
        assert_eq!(values(&tree), vec![1]);
    }

    #[test]
    fn test_remove_black_leaf_with_red_sibling_child() {
        let mut tree = Tree::new(4);
        for value in &[10, 5, 15, 20] {
            insert(&mut tree, &natural(), *value);
        }
        assert_eq!(remove(&mut tree, &natural(), &5), Ok(5));
        assert!(is_valid(&tree));
        assert_eq!(tree.node(tree.root()).value, 15);
        assert_eq!(values(&tree), vec![10, 15, 20]);
    }

    #[test]
    fn test_remove_root_with_two_children() {
        let mut tree = Tree::new(4);
        for value in &[5, 3, 7] {
            insert(&mut tree, &natural(), *value);
        }
        assert_eq!(remove(&mut tree, &natural(), &5), Ok(5));
        assert!(is_valid(&tree));
        assert_eq!(values(&tree), vec![3, 7]);
    }

    #[test]
    fn test_remove_everything() {
        let mut tree = Tree::new(4);
        for value in 0..64 {
            insert(&mut tree, &natural(), value);
        }
        for value in (0..64).rev().step_by(2).chain((0..64).step_by(2)) {
            assert_eq!(remove(&mut tree, &natural(), &value), Ok(value));
            assert!(is_valid(&tree));
        }
        assert!(tree.root().is_nil());
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn test_is_valid_rejects_red_root() {
        let mut tree = Tree::new(4);
        insert(&mut tree, &natural(), 1);
        let root = tree.root();
        tree.set_color(root, Color::Red);
        assert!(!is_valid(&tree));
    }

    #[test]
    fn test_is_valid_rejects_red_red() {
        let mut tree = Tree::new(4);
        for value in &[2, 1, 3, 4] {
            insert(&mut tree, &natural(), *value);
        }
        let three = tree.find(&natural(), &3);
        tree.set_color(three, Color::Red);
        assert!(!is_valid(&tree));
    }

    #[test]
    fn test_is_valid_rejects_unequal_black_heights() {
        let mut tree = Tree::new(4);
        for value in &[2, 1, 3] {
            insert(&mut tree, &natural(), *value);
        }
        let one = tree.find(&natural(), &1);
        tree.set_color(one, Color::Black);
        assert!(!is_valid(&tree));
    }

    #[test]
    fn test_is_valid_rejects_broken_parent_link() {
        let mut tree = Tree::new(4);
        for value in &[2, 1, 3] {
            insert(&mut tree, &natural(), *value);
        }
        let one = tree.find(&natural(), &1);
        tree.set_parent(one, Entry::NIL);
        assert!(!is_valid(&tree));
    }
}
