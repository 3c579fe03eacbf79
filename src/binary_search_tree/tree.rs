use crate::error::{Error, Result};
use crate::linked_tree::LinkedTree;
use compare::Compare;
use log::debug;

pub type Tree<T> = LinkedTree<T, ()>;

pub fn insert<T, C>(tree: &mut Tree<T>, cmp: &C, value: T)
where
    C: Compare<T>,
{
    tree.attach_leaf(cmp, value, ());
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
    if left.is_nil() {
        tree.transplant(target, right);
    } else if right.is_nil() {
        tree.transplant(target, left);
    } else {
        let successor = tree.successor(target);
        if tree.parent(successor) != target {
            let successor_right = tree.right(successor);
            tree.transplant(successor, successor_right);
            tree.set_right(successor, right);
            tree.set_parent(right, successor);
        }
        tree.transplant(target, successor);
        tree.set_left(successor, left);
        tree.set_parent(left, successor);
    }
    Ok(tree.release(target))
}
