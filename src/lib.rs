//! Self-balancing binary search trees.
//!
//! Two independent ordered sets share the `SearchTree` contract of insert, delete and search:
//!
//! - `avl_tree::AvlSet` caches the height of every node and rotates whenever the heights of two
//!   sibling subtrees differ by more than one.
//! - `red_black_tree::RedBlackSet` colors every node red or black and repairs the coloring with
//!   rotations and recoloring. Its nodes live in an `arena::Arena` and refer to their parents
//!   through handles.
//!
//! Tree events are reported through the `log` facade at trace level.

pub mod arena;
pub mod avl_tree;
pub mod red_black_tree;
mod search_tree;
pub mod shell;

pub use self::search_tree::SearchTree;
