use crate::avl_tree::node::Node;
use log::trace;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn balance_factor<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => 0,
        Some(ref node) => node.balance(),
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!("left rotation requires a right child"),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!("right rotation requires a left child"),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// The rotation case is picked from the balance factors alone so that the same routine repairs
// both insertions and deletions.
fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    let node_balance = node.balance();
    if node_balance > 1 {
        if balance_factor(&node.left) < 0 {
            trace!("avl: left-right rotation");
            if let Some(child) = node.left.take() {
                node.left = Some(rotate_left(child));
            }
        } else {
            trace!("avl: left-left rotation");
        }
        node = rotate_right(node);
    } else if node_balance < -1 {
        if balance_factor(&node.right) > 0 {
            trace!("avl: right-left rotation");
            if let Some(child) = node.right.take() {
                node.right = Some(rotate_right(child));
            }
        } else {
            trace!("avl: right-right rotation");
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// precondition: the tree is non-empty
fn remove_min<T>(tree: &mut Tree<T>) -> T {
    if let Some(ref mut node) = tree {
        if node.left.is_some() {
            let ret = remove_min(&mut node.left);
            balance(tree);
            return ret;
        }
    }

    match tree.take() {
        Some(node) => {
            let Node { key, right, .. } = *node;
            *tree = right;
            key
        },
        None => unreachable!("remove_min called on an empty tree"),
    }
}

pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    let inserted = match tree {
        Some(ref mut node) => match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key),
            Ordering::Greater => insert(&mut node.right, key),
            Ordering::Equal => return false,
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return true;
        },
    };

    if inserted {
        balance(tree);
    }
    inserted
}

pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                if node.left.is_some() && node.right.is_some() {
                    let successor = remove_min(&mut node.right);
                    let ret = mem::replace(&mut node.key, successor);
                    *tree = Some(node);
                    Some(ret)
                } else {
                    let Node { key: removed, left, right, .. } = *node;
                    *tree = left.or(right);
                    Some(removed)
                }
            },
        },
        None => return None,
    };

    if ret.is_some() {
        balance(tree);
    }
    ret
}

pub fn contains<T>(tree: &Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    match tree {
        None => false,
        Some(ref node) => match key.cmp(&node.key) {
            Ordering::Less => contains(&node.left, key),
            Ordering::Greater => contains(&node.right, key),
            Ordering::Equal => true,
        },
    }
}

// Walks down one side of the subtree and returns the last node reached.
fn descend<'a, T>(node: &'a Node<T>, next: fn(&Node<T>) -> &Tree<T>) -> &'a Node<T> {
    let mut curr = node;
    while let Some(child) = next(curr) {
        curr = &**child;
    }
    curr
}

pub fn first<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| &descend(node, |node| &node.left).key)
}

pub fn last<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| &descend(node, |node| &node.right).key)
}

pub fn ceil<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    let mut curr = tree;
    let mut best = None;
    while let Some(node) = curr {
        curr = match key.cmp(&node.key) {
            Ordering::Greater => &node.right,
            Ordering::Less => {
                best = Some(&node.key);
                &node.left
            },
            Ordering::Equal => return Some(&node.key),
        };
    }
    best
}

pub fn floor<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    let mut curr = tree;
    let mut best = None;
    while let Some(node) = curr {
        curr = match key.cmp(&node.key) {
            Ordering::Less => &node.left,
            Ordering::Greater => {
                best = Some(&node.key);
                &node.right
            },
            Ordering::Equal => return Some(&node.key),
        };
    }
    best
}
