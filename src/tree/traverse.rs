//! Breadth-first traversal protocols over a [`Tree`].
//!
//! Keys are rebuilt on the fly: the root's key is empty, a child of the root
//! is keyed by its own name, and every deeper node by `parent_key;name`.
//! The keys produced here are exactly the keys [`Tree::insert`] accepts.
//!
//! Siblings are visited in sorted order and shallower nodes before deeper
//! ones, so structurally equal trees always traverse identically.

use super::{Tree, TreeNode};
use crate::utils::config::SEPARATOR;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

impl Tree {
    /// Visit every node once with its full key and self value
    pub fn iterate(&self, mut cb: impl FnMut(&[u8], u64)) {
        self.iterate_with_child_keys(|key, self_value, _| cb(key, self_value));
    }

    /// Like [`Tree::iterate`], but also hands over the full keys of the
    /// node's immediate children before they are visited.
    pub fn iterate_with_child_keys(&self, mut cb: impl FnMut(&[u8], u64, &[Vec<u8>])) {
        let root = self.root.read();

        let root_child_keys: Vec<Vec<u8>> =
            root.children.iter().map(|child| child.name.clone()).collect();
        cb(&[], root.self_value, &root_child_keys);

        let mut queue: VecDeque<(&TreeNode, Vec<u8>)> =
            root.children.iter().zip(root_child_keys).collect();

        while let Some((node, key)) = queue.pop_front() {
            let child_keys: Vec<Vec<u8>> = node
                .children
                .iter()
                .map(|child| key_with_prefix(&key, &child.name))
                .collect();

            cb(&key, node.self_value, &child_keys);

            queue.extend(node.children.iter().zip(child_keys));
        }
    }

    /// Pruning traversal: visits nodes breadth-first by total and descends
    /// into a node's children only when `cb` returns `true` for it.
    pub fn iterate_with_total(&self, mut cb: impl FnMut(u64) -> bool) {
        let root = self.root.read();

        let mut queue: VecDeque<&TreeNode> = VecDeque::new();
        queue.push_back(&*root);

        while let Some(node) = queue.pop_front() {
            if cb(node.total) {
                queue.extend(node.children.iter());
            }
        }
    }

    /// Smallest total a node needs to be among the `max_nodes` heaviest
    /// nodes of the tree.
    ///
    /// Returns 0 when `max_nodes` is 0 (no limit) or the tree holds fewer
    /// than `max_nodes` nodes. Subtrees whose root already falls below the
    /// running threshold are not explored.
    pub fn min_value(&self, max_nodes: usize) -> u64 {
        if max_nodes == 0 {
            return 0;
        }

        let mut heap: BinaryHeap<Reverse<u64>> = BinaryHeap::with_capacity(max_nodes + 1);
        self.iterate_with_total(|total| {
            if heap.len() < max_nodes {
                heap.push(Reverse(total));
                return true;
            }
            match heap.peek() {
                Some(Reverse(smallest)) if total >= *smallest => {
                    heap.pop();
                    heap.push(Reverse(total));
                    true
                }
                _ => false,
            }
        });

        if heap.len() < max_nodes {
            return 0;
        }
        heap.peek().map(|Reverse(v)| *v).unwrap_or(0)
    }
}

/// `prefix;name` as a freshly owned key
fn key_with_prefix(prefix: &[u8], name: &[u8]) -> Vec<u8> {
    let mut key = Vec::with_capacity(prefix.len() + 1 + name.len());
    key.extend_from_slice(prefix);
    key.push(SEPARATOR);
    key.extend_from_slice(name);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_with_prefix() {
        assert_eq!(key_with_prefix(b"a;b", b"c"), b"a;b;c".to_vec());
        assert_eq!(key_with_prefix(b"", b"c"), b";c".to_vec());
    }

    #[test]
    fn test_min_value_unlimited() {
        let tree = Tree::new();
        tree.insert(b"a", 1);
        assert_eq!(tree.min_value(0), 0);
    }

    #[test]
    fn test_min_value_small_tree() {
        let tree = Tree::new();
        tree.insert(b"a;b", 1);
        // root, a, b: three nodes fit in a budget of ten
        assert_eq!(tree.min_value(10), 0);
    }

    #[test]
    fn test_min_value_threshold() {
        let tree = Tree::new();
        tree.insert(b"a", 10);
        tree.insert(b"b", 5);
        tree.insert(b"c", 1);

        // nodes by total: root 16, a 10, b 5, c 1
        assert_eq!(tree.min_value(3), 5);
        assert_eq!(tree.min_value(2), 10);
    }
}
