//! Build call trees from symbolized profiles.
//!
//! Every sample becomes one insert: the resolver turns its location list into
//! a key like "main;handle_request;parse" and the selected value column is
//! added along that path.

use crate::convert::Profile;
use crate::tree::Tree;
use log::debug;

/// Build a call tree from one profile
///
/// **Public** - main entry point for ingestion
///
/// # Arguments
/// * `profile` - Symbolized profile with sorted lookup tables
/// * `sample_type` - Name of the value column to aggregate (empty = first)
pub fn build_tree(profile: &Profile, sample_type: &str) -> Tree {
    let tree = Tree::new();
    let mut inserted = 0usize;

    profile.get(sample_type, |key, value| {
        tree.insert_int(key, value);
        inserted += 1;
    });

    debug!(
        "Built tree from {} samples ({} total weight)",
        inserted,
        tree.samples()
    );
    tree
}

/// Merge every tree of `trees` into a fresh tree
pub fn merge_trees<'a>(trees: impl IntoIterator<Item = &'a Tree>) -> Tree {
    let merged = Tree::new();
    for tree in trees {
        merged.merge(tree);
    }
    merged
}
