use crate::arena::Handle;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// A struct representing an internal node of a red black tree.
///
/// Children and parent are arena handles; the parent link is navigational only and must agree
/// with the child links of the parent.
pub struct Node<T> {
    pub key: T,
    pub color: Color,
    pub parent: Option<Handle>,
    pub left: Option<Handle>,
    pub right: Option<Handle>,
}

impl<T> Node<T> {
    pub fn new(key: T, parent: Option<Handle>) -> Self {
        Node {
            key,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }
}
