//! Calculate summary metrics and hot paths from a call tree.
//!
//! Hot paths are the call paths with the most self weight. These are the
//! primary targets for optimization.

use crate::tree::Tree;
use log::debug;
use serde::{Deserialize, Serialize};

/// A hot call path with its self weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotPath {
    /// Collapsed stack representation (e.g., "main;execute;parse")
    pub stack: String,

    /// Self weight of this path
    pub samples: u64,

    /// Percentage of the tree's total weight
    pub percentage: f64,
}

/// Calculate hot paths from a tree
///
/// **Public** - main entry point for metrics calculation
///
/// # Arguments
/// * `tree` - Aggregated call tree
/// * `top_n` - Number of top paths to return (e.g., 10)
///
/// # Returns
/// Vector of hot paths, sorted by self weight (descending, ties by stack)
pub fn calculate_hot_paths(tree: &Tree, top_n: usize) -> Vec<HotPath> {
    let total = tree.samples();
    let mut paths = Vec::new();

    tree.iterate(|key, self_value| {
        if self_value > 0 {
            paths.push((String::from_utf8_lossy(key).into_owned(), self_value));
        }
    });

    debug!(
        "Calculating top {} hot paths from {} weighted paths",
        top_n,
        paths.len()
    );

    paths.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    paths
        .into_iter()
        .take(top_n)
        .map(|(stack, samples)| HotPath {
            stack,
            samples,
            percentage: percentage(samples, total),
        })
        .collect()
}

fn percentage(part: u64, whole: u64) -> f64 {
    if whole > 0 {
        (part as f64 / whole as f64) * 100.0
    } else {
        0.0
    }
}

/// Calculate sample distribution statistics
///
/// **Public** - provides summary statistics
///
/// Only paths with a non-zero self weight are counted.
pub fn calculate_sample_distribution(tree: &Tree) -> SampleDistribution {
    let mut weights: Vec<u64> = Vec::new();
    let mut node_count = 0usize;
    tree.iterate(|_, self_value| {
        node_count += 1;
        if self_value > 0 {
            weights.push(self_value);
        }
    });

    if weights.is_empty() {
        return SampleDistribution {
            node_count,
            ..Default::default()
        };
    }

    let total: u64 = weights.iter().sum();
    let count = weights.len();
    weights.sort_unstable_by(|a, b| b.cmp(a));

    // Top 10% of paths
    let top_count = (count as f64 * 0.1).ceil() as usize;
    let top_weight: u64 = weights.iter().take(top_count).sum();

    SampleDistribution {
        total_samples: total,
        node_count,
        path_count: count,
        mean_per_path: total / count as u64,
        median_per_path: weights[count / 2],
        top_10_percent_percentage: percentage(top_weight, total),
    }
}

/// Sample distribution statistics
///
/// **Public** - returned from calculate_sample_distribution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleDistribution {
    /// Total self weight across all paths
    pub total_samples: u64,

    /// Number of nodes in the tree, root included
    pub node_count: usize,

    /// Number of paths carrying self weight
    pub path_count: usize,

    pub mean_per_path: u64,

    pub median_per_path: u64,

    /// Percentage of total weight in the heaviest 10% of paths
    pub top_10_percent_percentage: f64,
}

impl SampleDistribution {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Total: {} | Nodes: {} | Paths: {} | Mean: {} | Median: {} | Top 10%: {:.1}%",
            self.total_samples,
            self.node_count,
            self.path_count,
            self.mean_per_path,
            self.median_per_path,
            self.top_10_percent_percentage
        )
    }
}
