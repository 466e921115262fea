//! A single frame entry of the call tree.
//!
//! Children are kept strictly sorted by name (lexicographic byte order) with
//! no duplicates, so lookups and ordered inserts are a binary search.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::VecDeque;

/// One call-path segment with its accumulated weight
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    /// Frame label, owned by the node
    pub name: Vec<u8>,

    /// Weight of this node plus all of its descendants
    pub total: u64,

    /// Weight attributed to exactly this call path
    pub self_value: u64,

    /// Children sorted by name
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create an empty node with zeroed counters
    pub fn new(name: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            total: 0,
            self_value: 0,
            children: Vec::new(),
        }
    }

    /// Return the child labelled `label`, creating it at its sorted position
    /// if it does not exist yet.
    ///
    /// The label is copied, callers' buffers are never retained.
    pub fn insert(&mut self, label: &[u8]) -> &mut TreeNode {
        let index = match self.find(label) {
            Ok(index) => index,
            Err(index) => {
                self.children.insert(index, TreeNode::new(label));
                index
            }
        };
        &mut self.children[index]
    }

    /// Look up an existing child by label
    pub fn child(&self, label: &[u8]) -> Option<&TreeNode> {
        self.find(label).ok().map(|index| &self.children[index])
    }

    /// Binary search for the first child whose name is >= `label`
    fn find(&self, label: &[u8]) -> Result<usize, usize> {
        self.children
            .binary_search_by(|child| child.name.as_slice().cmp(label))
    }

    /// Frame label as text, lossy for non UTF-8 names
    pub fn name_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    /// Deep copy of this subtree with every counter scaled by `numer / denom`.
    ///
    /// Walks the subtree with a work-list so deep call stacks cannot exhaust
    /// the native stack.
    pub(crate) fn scaled_clone(&self, numer: u64, denom: u64) -> TreeNode {
        let mut root = self.scaled_shallow(numer, denom);

        {
            let mut queue: VecDeque<(&TreeNode, &mut TreeNode)> = VecDeque::new();
            queue.push_back((self, &mut root));

            while let Some((src, dst)) = queue.pop_front() {
                dst.children = src
                    .children
                    .iter()
                    .map(|child| child.scaled_shallow(numer, denom))
                    .collect();

                for pair in src.children.iter().zip(dst.children.iter_mut()) {
                    queue.push_back(pair);
                }
            }
        }

        root
    }

    fn scaled_shallow(&self, numer: u64, denom: u64) -> TreeNode {
        TreeNode {
            name: self.name.clone(),
            total: scale(self.total, numer, denom),
            self_value: scale(self.self_value, numer, denom),
            children: Vec::new(),
        }
    }
}

/// `value * numer / denom` without intermediate overflow, saturating at
/// `u64::MAX`
fn scale(value: u64, numer: u64, denom: u64) -> u64 {
    u64::try_from(u128::from(value) * u128::from(numer) / u128::from(denom)).unwrap_or(u64::MAX)
}

impl Serialize for TreeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TreeNode", 4)?;
        state.serialize_field("name", &self.name_str())?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("self", &self.self_value)?;
        state.serialize_field("children", &self.children)?;
        state.end()
    }
}
