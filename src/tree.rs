//! An unbalanced BST whose nodes own their children through `Box`. Keys
//! that compare equal to an existing key are inserted to its left and the
//! tree never rotates, so its shape is entirely decided by insertion order.
//!
//! # Examples
//!
//! ```
//! use binary_search_tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(&1).is_none());
//!
//! tree.insert(1);
//! assert_eq!(tree.search(&1).map(|n| *n.key()), Some(1));
//!
//! // Duplicates are kept - removing one leaves the other.
//! tree.insert(1);
//! assert!(tree.remove(&1));
//! assert!(tree.contains(&1));
//!
//! assert!(tree.remove(&1));
//! assert!(!tree.contains(&1));
//!
//! // Removing a missing key is a no-op.
//! assert!(!tree.remove(&1));
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use tracing::trace;

use crate::op::Op;
use crate::traversal;

pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree of keys. This can be used for inserting, searching,
/// and removing keys as well as producing the four standard traversals.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

/// A single key in a [`Tree`] along with its (optional) children. `Node`s
/// are handed out by [`Tree::search`] and [`Tree::root`] for read-only
/// inspection.
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of this node's left subtree, if any. Every key in it is less
    /// than or equal to [`Node::key`].
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree, if any. Every key in it is
    /// greater than or equal to [`Node::key`].
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left().map(Node::key))
            .field("right", &self.right().map(Node::key))
            .finish()
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        drop_link(self.root.take());
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    /// Copies the tree node by node so the clone has exactly the same shape.
    fn clone(&self) -> Self {
        // Post-order visits both subtrees of a node before the node itself so
        // by the time we see a node its children are on top of `built`.
        let mut built: Vec<Box<Node<K>>> = Vec::new();
        traversal::walk_postorder(self.root(), |node| {
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                key: node.key.clone(),
                left,
                right,
            }));
        });

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("keys", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of keys in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every key from the tree.
    pub fn clear(&mut self) {
        drop_link(self.root.take());
        self.len = 0;
    }

    /// The root node of the tree, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 4].into_iter().collect();
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.key(), &2);
    /// assert_eq!(root.left().map(|n| *n.key()), Some(1));
    /// assert_eq!(root.right().map(|n| *n.key()), Some(4));
    /// ```
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// The number of levels in the tree. An empty tree has a height of 0 and
    /// a tree with only a root has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut queue = VecDeque::new();
        queue.extend(self.root().map(|n| (n, 1)));

        while let Some((node, depth)) = queue.pop_front() {
            height = height.max(depth);
            queue.extend(node.left().map(|n| (n, depth + 1)));
            queue.extend(node.right().map(|n| (n, depth + 1)));
        }

        height
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.key)
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.key)
    }

    /// Inserts the given key into the tree. Keys greater than a node's key go
    /// to its right and all others, including equal keys, go to its left.
    /// Inserting a key that is already present stores a second copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    ///
    /// // The duplicate went to the left of the original.
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.left().map(|n| *n.key()), Some(2));
    /// assert!(root.right().is_none());
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let mut depth = 0;
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if key > node.key {
                &mut node.right
            } else {
                &mut node.left
            };
            depth += 1;
        }
        *link = Some(Box::new(Node::new(key)));

        self.len += 1;
        trace!(depth, len = self.len, "inserted key");
    }

    /// Finds a node holding the given key. If the key was inserted more than
    /// once, the returned node is the occurrence closest to the root. If no
    /// node has the key, `None` is returned.
    ///
    /// Each comparison picks a single subtree to continue in so this takes
    /// `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1).map(|n| *n.key()), Some(1));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut node = self.root();
        while let Some(n) = node {
            node = match key.cmp(&n.key) {
                Ordering::Less => n.left(),
                Ordering::Equal => return Some(n),
                Ordering::Greater => n.right(),
            };
        }
        None
    }

    /// Whether the tree holds at least one copy of the given key.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key).is_some()
    }

    /// Removes one occurrence of the given key and returns `true`. If the tree
    /// does not contain the key, nothing happens and `false` is returned.
    ///
    /// A node with two children is not unlinked. Instead its key is replaced by
    /// its in-order successor (the smallest key in its right subtree) and the
    /// successor's node is unlinked.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3, 4].into_iter().collect();
    /// assert!(tree.remove(&2));
    ///
    /// // 3 took the root's place.
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(3));
    /// assert_eq!(tree.inorder(), [1, 3, 4]);
    ///
    /// assert!(!tree.remove(&2));
    /// ```
    pub fn remove(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        loop {
            let ordering = match link.as_deref() {
                Some(node) => key.cmp(&node.key),
                None => {
                    trace!("key not found, nothing removed");
                    return false;
                }
            };
            if ordering == Ordering::Equal {
                break;
            }
            let Some(node) = link else {
                return false;
            };
            link = if ordering == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        let Some(mut node) = link.take() else {
            return false;
        };
        *link = match (node.left.take(), node.right.take()) {
            (None, right) => {
                trace!(case = "no left child", "removed key");
                right
            }
            (left, None) => {
                trace!(case = "no right child", "removed key");
                left
            }
            (left, mut right) => {
                trace!(case = "two children", "removed key");
                if let Some(successor) = take_leftmost(&mut right) {
                    node.key = successor;
                }
                node.left = left;
                node.right = right;
                Some(node)
            }
        };

        self.len -= 1;
        true
    }

    /// Replays a mutation against the tree. Returns whether the tree changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::{Op, Tree};
    ///
    /// let mut tree = Tree::new();
    /// for op in ["insert:2", "i:1", "r:2", "remove:7"] {
    ///     tree.apply(op.parse::<Op<i64>>().unwrap());
    /// }
    ///
    /// assert_eq!(tree.inorder(), [1]);
    /// ```
    pub fn apply(&mut self, op: Op<K>) -> bool
    where
        K: Ord,
    {
        match op {
            Op::Insert(key) => {
                self.insert(key);
                true
            }
            Op::Remove(key) => self.remove(&key),
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

/// Unlinks the leftmost node under `link` and returns its key. The node's
/// right subtree takes its place.
fn take_leftmost<K>(mut link: &mut Link<K>) -> Option<K> {
    while link.as_deref().is_some_and(|node| node.left.is_some()) {
        let Some(node) = link else {
            break;
        };
        link = &mut node.left;
    }

    let node = link.take()?;
    let Node { key, right, .. } = *node;
    *link = right;
    Some(key)
}

/// Drops every node under `link` without recursing so that list-shaped trees
/// can't overflow the stack.
fn drop_link<K>(link: Link<K>) {
    let mut stack: Vec<Box<Node<K>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
