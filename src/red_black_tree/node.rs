use crate::arena::Entry;
use crate::linked_tree::LinkedTree;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn label(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Black => "BLACK",
        }
    }
}

pub type Tree<T> = LinkedTree<T, Color>;

impl<T> LinkedTree<T, Color> {
    // the sentinel is always black
    pub fn color(&self, entry: Entry) -> Color {
        if entry.is_nil() {
            Color::Black
        } else {
            self.node(entry).balance
        }
    }

    pub fn is_red(&self, entry: Entry) -> bool {
        self.color(entry) == Color::Red
    }

    pub fn set_color(&mut self, entry: Entry, color: Color) {
        if entry.is_nil() {
            debug_assert_eq!(color, Color::Black, "Error: the sentinel cannot be red.");
            return;
        }
        self.node_mut(entry).balance = color;
    }
}
