//! Encode a [`Tree`] into the flat flamebearer format.

use super::schema::Flamebearer;
use crate::tree::{Tree, TreeNode};
use crate::utils::config::{OTHER_NAME, ROOT_DISPLAY_NAME};
use log::debug;
use std::collections::{HashMap, VecDeque};

/// A node waiting to be laid out at a given depth and absolute offset
struct Pending<'a> {
    name: &'a [u8],
    total: u64,
    self_value: u64,
    children: &'a [TreeNode],
    offset: u64,
    level: usize,
}

impl<'a> Pending<'a> {
    fn from_node(node: &'a TreeNode, offset: u64, level: usize) -> Self {
        Self {
            name: &node.name,
            total: node.total,
            self_value: node.self_value,
            children: &node.children,
            offset,
            level,
        }
    }
}

/// Interns names into the shared table in first-appearance order
#[derive(Default)]
struct NameTable {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl NameTable {
    fn intern(&mut self, name: &str) -> usize {
        if let Some(&i) = self.index.get(name) {
            return i;
        }
        let i = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), i);
        i
    }
}

impl Tree {
    /// Flatten the tree into flamebearer levels.
    ///
    /// At most roughly `max_nodes` nodes are emitted individually (0 means no
    /// limit): children lighter than [`Tree::min_value`] are folded into one
    /// `other` node per parent. The root is emitted as `total`.
    pub fn flamebearer(&self, max_nodes: usize) -> Flamebearer {
        let min_value = self.min_value(max_nodes);
        debug!(
            "Encoding flamebearer (max_nodes={}, min_value={})",
            max_nodes, min_value
        );

        let mut flamebearer = self.with_root(|root| encode_levels(root, min_value));
        delta_encode(&mut flamebearer.levels);
        flamebearer
    }
}

fn encode_levels(root: &TreeNode, min_value: u64) -> Flamebearer {
    let mut names = NameTable::default();
    let mut levels: Vec<Vec<i64>> = Vec::new();
    let mut max_self: u64 = 0;

    let mut queue: VecDeque<Pending<'_>> = VecDeque::new();
    queue.push_back(Pending {
        name: ROOT_DISPLAY_NAME.as_bytes(),
        ..Pending::from_node(root, 0, 0)
    });

    while let Some(node) = queue.pop_front() {
        let name_index = names.intern(&String::from_utf8_lossy(node.name));

        if node.level == levels.len() {
            levels.push(Vec::new());
        }
        max_self = max_self.max(node.self_value);

        // offsets are absolute here and delta encoded afterwards
        levels[node.level].extend_from_slice(&[
            clamp(node.offset),
            clamp(node.total),
            clamp(node.self_value),
            clamp(name_index as u64),
        ]);

        let mut offset = node.offset.saturating_add(node.self_value);
        let mut other_total: u64 = 0;
        for child in node.children {
            if child.total >= min_value {
                queue.push_back(Pending::from_node(child, offset, node.level + 1));
                offset = offset.saturating_add(child.total);
            } else {
                other_total = other_total.saturating_add(child.total);
            }
        }

        if other_total > 0 {
            queue.push_back(Pending {
                name: OTHER_NAME.as_bytes(),
                total: other_total,
                self_value: other_total,
                children: &[],
                offset,
                level: node.level + 1,
            });
        }
    }

    Flamebearer {
        names: names.names,
        levels,
        num_ticks: root.total,
        max_self,
    }
}

/// Weights above `i64::MAX` are pinned to it in the flat format
fn clamp(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Replace every absolute offset with its distance from the end of the
/// previous item in the same row
fn delta_encode(levels: &mut [Vec<i64>]) {
    for row in levels.iter_mut() {
        let mut prev: i64 = 0;
        for item in row.chunks_exact_mut(4) {
            let absolute = item[0];
            item[0] = absolute.saturating_sub(prev);
            prev = absolute.saturating_add(item[1]);
        }
    }
}
