//! The four standard traversals of a [`Tree`]. Each traversal reads the tree
//! without mutating it and returns every key, so the returned `Vec` always
//! has [`Tree::len`] elements.
//!
//! The walks keep their pending nodes in an explicit stack or queue instead
//! of recursing, so a list-shaped tree is as safe to traverse as a balanced
//! one.
//!
//! # Examples
//!
//! ```
//! use binary_search_tree::Tree;
//!
//! //        5
//! //       / \
//! //      2   9
//! //         / \
//! //        6   10
//! let tree: Tree<_> = [5, 2, 9, 6, 10].into_iter().collect();
//!
//! assert_eq!(tree.inorder(), [2, 5, 6, 9, 10]);
//! assert_eq!(tree.preorder(), [5, 2, 9, 6, 10]);
//! assert_eq!(tree.postorder(), [2, 6, 10, 9, 5]);
//! assert_eq!(tree.levelorder(), [5, 2, 9, 6, 10]);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::tree::{Node, Tree};

impl<K> Tree<K> {
    /// A lazy in-order iterator over the keys of the tree. Keys are yielded
    /// in non-decreasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2].into_iter().collect();
    /// let mut iter = tree.iter();
    ///
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root(), self.len())
    }

    /// Keys in in-order (left subtree, node, right subtree). This is the keys
    /// in sorted order.
    pub fn inorder(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Keys in pre-order (node, left subtree, right subtree).
    pub fn preorder(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::with_capacity(self.len());
        walk_preorder(self.root(), |node| keys.push(node.key().clone()));
        keys
    }

    /// Keys in post-order (left subtree, right subtree, node).
    pub fn postorder(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::with_capacity(self.len());
        walk_postorder(self.root(), |node| keys.push(node.key().clone()));
        keys
    }

    /// Keys in level-order: breadth first, top to bottom and left to right
    /// within each level.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::Tree;
    ///
    /// // Sorted inserts make a tree with one node per level.
    /// let tree: Tree<_> = (1..=4).collect();
    /// assert_eq!(tree.levelorder(), [1, 2, 3, 4]);
    /// ```
    pub fn levelorder(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::with_capacity(self.len());
        let mut queue = VecDeque::from([self.root()]);

        // Empty child slots are queued too and skipped once they reach the front.
        while let Some(slot) = queue.pop_front() {
            let Some(node) = slot else {
                continue;
            };
            queue.push_back(node.left());
            queue.push_back(node.right());
            keys.push(node.key().clone());
        }

        keys
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over the keys of a [`Tree`], created by [`Tree::iter`].
pub struct Iter<'a, K> {
    /// The nodes whose key hasn't been yielded yet but whose left subtree
    /// has been pushed. The top of the stack is the next key.
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// Calls `visit` on every node under `root`, each node before its subtrees.
pub(crate) fn walk_preorder<'a, K>(
    root: Option<&'a Node<K>>,
    mut visit: impl FnMut(&'a Node<K>),
) {
    let mut stack: Vec<&Node<K>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        visit(node);
        // Right first so the left subtree is popped first.
        stack.extend(node.right());
        stack.extend(node.left());
    }
}

/// Calls `visit` on every node under `root`, each node after its subtrees.
pub(crate) fn walk_postorder<'a, K>(
    root: Option<&'a Node<K>>,
    mut visit: impl FnMut(&'a Node<K>),
) {
    // The flag records whether the node's subtrees have already been pushed.
    let mut stack: Vec<(&Node<K>, bool)> = root.map(|n| (n, false)).into_iter().collect();
    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            visit(node);
            continue;
        }
        stack.push((node, true));
        stack.extend(node.right().map(|n| (n, false)));
        stack.extend(node.left().map(|n| (n, false)));
    }
}
