//! The call tree: a mergeable, weight-scalable prefix tree of call paths.
//!
//! Keys are byte strings of frame names joined by `;`, outermost frame first.
//! Every node keeps `total == self + sum(child.total)` and its children sorted
//! by name.
//!
//! # Locking
//! Each tree carries its own reader/writer lock and every public operation
//! takes it internally: `insert`, `insert_int` and `merge` take it
//! exclusively, everything else shares it. Callers never need to coordinate
//! writers themselves. Traversal callbacks run while the shared lock is held
//! and must not mutate the tree they are traversing.

pub mod node;
pub mod traverse;

pub use node::TreeNode;

use crate::utils::config::SEPARATOR;
use log::trace;
use num_rational::Ratio;
use parking_lot::RwLock;
use serde::ser::{Serialize, Serializer};
use std::collections::VecDeque;
use std::fmt;

/// Aggregated call tree guarded by a reader/writer lock
#[derive(Debug, Default)]
pub struct Tree {
    root: RwLock<TreeNode>,
}

impl Tree {
    /// Create an empty tree (a root sentinel with an empty name)
    pub fn new() -> Self {
        Self {
            root: RwLock::new(TreeNode::new(Vec::new())),
        }
    }

    /// Add `value` to the call path `key`.
    ///
    /// `total` grows on every node along the path, root included; `self`
    /// grows only on the terminal node. Counters saturate at `u64::MAX`. An empty key inserts under a child
    /// of the root with an empty label.
    pub fn insert(&self, key: &[u8], value: u64) {
        let mut root = self.root.write();
        let mut node = &mut *root;
        for label in key.split(|b| *b == SEPARATOR) {
            node.total = node.total.saturating_add(value);
            node = node.insert(label);
        }
        node.self_value = node.self_value.saturating_add(value);
        node.total = node.total.saturating_add(value);
    }

    /// Signed convenience form of [`Tree::insert`]; negative values count as zero
    pub fn insert_int(&self, key: &[u8], value: i64) {
        self.insert(key, u64::try_from(value).unwrap_or(0));
    }

    /// Absorb all sample weight of `other` into this tree.
    ///
    /// `other` is only read. Both trees are walked breadth-first in lockstep;
    /// every source child is matched (or created) by exact name in the
    /// destination. Merging a tree into itself doubles every counter.
    pub fn merge(&self, other: &Tree) {
        if std::ptr::eq(self, other) {
            let snapshot = self.root.read().scaled_clone(1, 1);
            merge_nodes(&mut self.root.write(), &snapshot);
            return;
        }

        // Fixed lock order keeps concurrent a<-b and b<-a merges deadlock free
        let total = if (self as *const Tree) < (other as *const Tree) {
            let mut dst = self.root.write();
            let src = other.root.read();
            merge_nodes(&mut dst, &src);
            dst.total
        } else {
            let src = other.root.read();
            let mut dst = self.root.write();
            merge_nodes(&mut dst, &src);
            dst.total
        };
        trace!("merged tree, total now {}", total);
    }

    /// Independent copy with every `self` and `total` scaled by `ratio`
    /// (integer division).
    pub fn clone_scaled(&self, ratio: &Ratio<u64>) -> Tree {
        let root = self.root.read();
        Tree {
            root: RwLock::new(root.scaled_clone(*ratio.numer(), *ratio.denom())),
        }
    }

    /// Total sample weight held by the tree
    pub fn samples(&self) -> u64 {
        self.root.read().total
    }

    /// Key of the root node. The root contributes nothing to its
    /// descendants' keys, so this is always empty.
    pub fn root_key(&self) -> Vec<u8> {
        Vec::new()
    }

    /// Run `f` against the root node under the shared lock
    pub fn with_root<R>(&self, f: impl FnOnce(&TreeNode) -> R) -> R {
        f(&self.root.read())
    }
}

impl Clone for Tree {
    fn clone(&self) -> Self {
        self.clone_scaled(&Ratio::from_integer(1))
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        // Same lock order as merge
        let (first, second) = if (self as *const Tree) < (other as *const Tree) {
            (self, other)
        } else {
            (other, self)
        };
        let first = first.root.read();
        let second = second.root.read();
        *first == *second
    }
}

fn merge_nodes(dst_root: &mut TreeNode, src_root: &TreeNode) {
    let mut queue: VecDeque<(&TreeNode, &mut TreeNode)> = VecDeque::new();
    queue.push_back((src_root, dst_root));

    while let Some((src, dst)) = queue.pop_front() {
        dst.self_value = dst.self_value.saturating_add(src.self_value);
        dst.total = dst.total.saturating_add(src.total);

        for child in &src.children {
            dst.insert(&child.name);
        }

        // both child lists are sorted and dst now holds every src name
        let mut dst_children = dst.children.iter_mut();
        for src_child in &src.children {
            if let Some(dst_child) = dst_children.find(|c| c.name == src_child.name) {
                queue.push_back((src_child, dst_child));
            }
        }
    }
}

impl fmt::Display for Tree {
    /// Debug form: one `"key" self` line per node with a non-zero self value
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        self.iterate(|key, self_value| {
            if self_value > 0 && result.is_ok() {
                result = writeln!(f, "{:?} {}", String::from_utf8_lossy(key), self_value);
            }
        });
        result
    }
}

impl Serialize for Tree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.read().serialize(serializer)
    }
}
