use crate::arena::{Arena, Handle};
use crate::red_black_tree::node::{Color, Node};
use log::trace;
use std::cmp::{self, Ordering};
use std::mem;

const MISSING_SIBLING: &str = "Expected a black-height deficient node to have a sibling.";

pub struct Tree<T> {
    nodes: Arena<Node<T>>,
    root: Option<Handle>,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Tree {
            nodes: Arena::new(),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub fn key(&self, handle: Handle) -> &T {
        &self.nodes[handle].key
    }

    // Absent positions count as black.
    fn color(&self, handle: Option<Handle>) -> Color {
        match handle {
            None => Color::Black,
            Some(handle) => self.nodes[handle].color,
        }
    }

    fn set_color(&mut self, handle: Handle, color: Color) {
        self.nodes[handle].color = color;
    }

    fn parent(&self, handle: Handle) -> Option<Handle> {
        self.nodes[handle].parent
    }

    fn left(&self, handle: Handle) -> Option<Handle> {
        self.nodes[handle].left
    }

    fn right(&self, handle: Handle) -> Option<Handle> {
        self.nodes[handle].right
    }

    // Points the link that referred to `old` at `new`. A missing parent means `old` was the root.
    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let node = &mut self.nodes[parent];
                if node.left == Some(old) {
                    node.left = new;
                } else {
                    node.right = new;
                }
            },
        }
    }

    fn rotate_left(&mut self, handle: Handle) {
        trace!("red black: rotate left");
        let child = self
            .right(handle)
            .expect("Expected right child node to be `Some`.");
        let inner = self.left(child);
        self.nodes[handle].right = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(handle);
        }
        let parent = self.parent(handle);
        self.nodes[child].parent = parent;
        self.replace_child(parent, handle, Some(child));
        self.nodes[child].left = Some(handle);
        self.nodes[handle].parent = Some(child);
    }

    fn rotate_right(&mut self, handle: Handle) {
        trace!("red black: rotate right");
        let child = self
            .left(handle)
            .expect("Expected left child node to be `Some`.");
        let inner = self.right(child);
        self.nodes[handle].left = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(handle);
        }
        let parent = self.parent(handle);
        self.nodes[child].parent = parent;
        self.replace_child(parent, handle, Some(child));
        self.nodes[child].right = Some(handle);
        self.nodes[handle].parent = Some(child);
    }

    fn min_handle(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.left(handle) {
            handle = left;
        }
        handle
    }

    fn max_handle(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.right(handle) {
            handle = right;
        }
        handle
    }

    pub fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.min_handle(root))
    }

    pub fn last(&self) -> Option<Handle> {
        self.root.map(|root| self.max_handle(root))
    }

    // In-order successor, found through the parent links when there is no right subtree.
    pub fn successor(&self, handle: Handle) -> Option<Handle> {
        if let Some(right) = self.right(handle) {
            return Some(self.min_handle(right));
        }
        let mut curr = handle;
        let mut parent = self.parent(curr);
        while let Some(next) = parent {
            if self.right(next) != Some(curr) {
                break;
            }
            curr = next;
            parent = self.parent(next);
        }
        parent
    }

    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    fn subtree_height(&self, handle: Option<Handle>) -> usize {
        match handle {
            None => 0,
            Some(handle) => {
                let left = self.subtree_height(self.left(handle));
                let right = self.subtree_height(self.right(handle));
                cmp::max(left, right) + 1
            },
        }
    }

    pub fn into_keys(mut self) -> Vec<T> {
        let mut handles = Vec::with_capacity(self.len());
        let mut curr = self.first();
        while let Some(handle) = curr {
            handles.push(handle);
            curr = self.successor(handle);
        }
        let nodes = &mut self.nodes;
        handles.into_iter().map(|handle| nodes.free(handle).key).collect()
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    pub fn find(&self, key: &T) -> Option<Handle> {
        let mut curr = self.root;
        while let Some(handle) = curr {
            curr = match key.cmp(&self.nodes[handle].key) {
                Ordering::Less => self.left(handle),
                Ordering::Greater => self.right(handle),
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    pub fn insert(&mut self, key: T) -> bool {
        let mut parent = None;
        let mut ordering = Ordering::Equal;
        let mut curr = self.root;
        while let Some(handle) = curr {
            ordering = key.cmp(&self.nodes[handle].key);
            parent = Some(handle);
            curr = match ordering {
                Ordering::Less => self.left(handle),
                Ordering::Greater => self.right(handle),
                Ordering::Equal => return false,
            };
        }

        let handle = self.nodes.allocate(Node::new(key, parent));
        match parent {
            None => self.root = Some(handle),
            Some(parent) => {
                if ordering == Ordering::Less {
                    self.nodes[parent].left = Some(handle);
                } else {
                    self.nodes[parent].right = Some(handle);
                }
            },
        }

        self.insert_fixup(handle);
        true
    }

    fn insert_fixup(&mut self, mut handle: Handle) {
        while let Some(mut parent) = self.parent(handle) {
            if self.nodes[parent].color == Color::Black {
                break;
            }
            // a red parent is never the root
            let grandparent = self
                .parent(parent)
                .expect("Expected a red node to have a parent.");

            if self.left(grandparent) == Some(parent) {
                match self.right(grandparent) {
                    Some(uncle) if self.nodes[uncle].color == Color::Red => {
                        trace!("red black: insert with red uncle");
                        self.set_color(parent, Color::Black);
                        self.set_color(uncle, Color::Black);
                        self.set_color(grandparent, Color::Red);
                        handle = grandparent;
                    },
                    _ => {
                        if self.right(parent) == Some(handle) {
                            trace!("red black: insert inner grandchild");
                            self.rotate_left(parent);
                            mem::swap(&mut handle, &mut parent);
                        }
                        trace!("red black: insert outer grandchild");
                        self.set_color(parent, Color::Black);
                        self.set_color(grandparent, Color::Red);
                        self.rotate_right(grandparent);
                    },
                }
            } else {
                match self.left(grandparent) {
                    Some(uncle) if self.nodes[uncle].color == Color::Red => {
                        trace!("red black: insert with red uncle");
                        self.set_color(parent, Color::Black);
                        self.set_color(uncle, Color::Black);
                        self.set_color(grandparent, Color::Red);
                        handle = grandparent;
                    },
                    _ => {
                        if self.left(parent) == Some(handle) {
                            trace!("red black: insert inner grandchild");
                            self.rotate_right(parent);
                            mem::swap(&mut handle, &mut parent);
                        }
                        trace!("red black: insert outer grandchild");
                        self.set_color(parent, Color::Black);
                        self.set_color(grandparent, Color::Red);
                        self.rotate_left(grandparent);
                    },
                }
            }
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }

    pub fn remove(&mut self, key: &T) -> Option<T> {
        let target = self.find(key)?;

        // the unlinked node always has at most one child
        let spliced = match (self.left(target), self.right(target)) {
            (Some(_), Some(right)) => self.min_handle(right),
            _ => target,
        };
        let fix = self.left(spliced).or_else(|| self.right(spliced));
        let fix_parent = self.parent(spliced);
        if let Some(fix) = fix {
            self.nodes[fix].parent = fix_parent;
        }
        self.replace_child(fix_parent, spliced, fix);

        let Node { key: spliced_key, color: spliced_color, .. } = self.nodes.free(spliced);
        let ret = if spliced == target {
            spliced_key
        } else {
            mem::replace(&mut self.nodes[target].key, spliced_key)
        };

        if spliced_color == Color::Black {
            self.remove_fixup(fix, fix_parent);
        }
        Some(ret)
    }

    // `fix` carries an extra black. It may be an absent position, so its parent is tracked
    // alongside it instead of being read from the node.
    fn remove_fixup(&mut self, mut fix: Option<Handle>, mut parent: Option<Handle>) {
        while fix != self.root && self.color(fix) == Color::Black {
            let fix_parent = match parent {
                Some(fix_parent) => fix_parent,
                None => break,
            };

            if self.left(fix_parent) == fix {
                let mut sibling = self.right(fix_parent).expect(MISSING_SIBLING);
                if self.nodes[sibling].color == Color::Red {
                    trace!("red black: remove with red sibling");
                    self.set_color(sibling, Color::Black);
                    self.set_color(fix_parent, Color::Red);
                    self.rotate_left(fix_parent);
                    sibling = self.right(fix_parent).expect(MISSING_SIBLING);
                }

                if self.color(self.left(sibling)) == Color::Black
                    && self.color(self.right(sibling)) == Color::Black
                {
                    trace!("red black: remove with black nephews");
                    self.set_color(sibling, Color::Red);
                    fix = Some(fix_parent);
                    parent = self.parent(fix_parent);
                } else {
                    if self.color(self.right(sibling)) == Color::Black {
                        trace!("red black: remove with red near nephew");
                        let near = self
                            .left(sibling)
                            .expect("Expected a red near nephew.");
                        self.set_color(near, Color::Black);
                        self.set_color(sibling, Color::Red);
                        self.rotate_right(sibling);
                        sibling = self.right(fix_parent).expect(MISSING_SIBLING);
                    }
                    trace!("red black: remove with red far nephew");
                    let parent_color = self.nodes[fix_parent].color;
                    self.set_color(sibling, parent_color);
                    self.set_color(fix_parent, Color::Black);
                    if let Some(far) = self.right(sibling) {
                        self.set_color(far, Color::Black);
                    }
                    self.rotate_left(fix_parent);
                    fix = self.root;
                    parent = None;
                }
            } else {
                let mut sibling = self.left(fix_parent).expect(MISSING_SIBLING);
                if self.nodes[sibling].color == Color::Red {
                    trace!("red black: remove with red sibling");
                    self.set_color(sibling, Color::Black);
                    self.set_color(fix_parent, Color::Red);
                    self.rotate_right(fix_parent);
                    sibling = self.left(fix_parent).expect(MISSING_SIBLING);
                }

                if self.color(self.right(sibling)) == Color::Black
                    && self.color(self.left(sibling)) == Color::Black
                {
                    trace!("red black: remove with black nephews");
                    self.set_color(sibling, Color::Red);
                    fix = Some(fix_parent);
                    parent = self.parent(fix_parent);
                } else {
                    if self.color(self.left(sibling)) == Color::Black {
                        trace!("red black: remove with red near nephew");
                        let near = self
                            .right(sibling)
                            .expect("Expected a red near nephew.");
                        self.set_color(near, Color::Black);
                        self.set_color(sibling, Color::Red);
                        self.rotate_left(sibling);
                        sibling = self.left(fix_parent).expect(MISSING_SIBLING);
                    }
                    trace!("red black: remove with red far nephew");
                    let parent_color = self.nodes[fix_parent].color;
                    self.set_color(sibling, parent_color);
                    self.set_color(fix_parent, Color::Black);
                    if let Some(far) = self.left(sibling) {
                        self.set_color(far, Color::Black);
                    }
                    self.rotate_right(fix_parent);
                    fix = self.root;
                    parent = None;
                }
            }
        }

        if let Some(fix) = fix {
            self.set_color(fix, Color::Black);
        }
    }

    pub fn ceil(&self, key: &T) -> Option<&T> {
        let mut curr = self.root;
        let mut best = None;
        while let Some(handle) = curr {
            curr = match key.cmp(&self.nodes[handle].key) {
                Ordering::Greater => self.right(handle),
                Ordering::Less => {
                    best = Some(handle);
                    self.left(handle)
                },
                Ordering::Equal => return Some(self.key(handle)),
            };
        }
        best.map(|handle| self.key(handle))
    }

    pub fn floor(&self, key: &T) -> Option<&T> {
        let mut curr = self.root;
        let mut best = None;
        while let Some(handle) = curr {
            curr = match key.cmp(&self.nodes[handle].key) {
                Ordering::Less => self.left(handle),
                Ordering::Greater => {
                    best = Some(handle);
                    self.right(handle)
                },
                Ordering::Equal => return Some(self.key(handle)),
            };
        }
        best.map(|handle| self.key(handle))
    }
}
