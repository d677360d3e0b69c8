//! This crate exposes a textbook, unbalanced Binary Search Tree (BST) mostly
//! for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, search, and remove stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of
//! this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key
//!    less than or equal to its own key (equal keys are inserted to the left).
//! 2. For every `Node`, all the `Node`s in its right subtree have a key
//!    greater than or equal to its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)`. This tree never rebalances so
//! inserting keys in sorted order produces a tree of height `N`. Every
//! operation walks the tree with an explicit loop or stack so even those
//! list-shaped trees won't overflow the call stack.
//!
//! The tree also supports the four standard traversals:
//!
//! ```
//! use binary_search_tree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//! tree.remove(&3);
//! tree.insert(4);
//!
//! assert_eq!(tree.inorder(), [1, 2, 4]);
//! assert_eq!(tree.preorder(), [2, 1, 4]);
//! assert_eq!(tree.postorder(), [1, 4, 2]);
//! assert_eq!(tree.levelorder(), [2, 1, 4]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod op;
pub mod traversal;
pub mod tree;

pub use op::{Op, ParseOpError};
pub use traversal::Iter;
pub use tree::{Node, Tree};
