//! Aggregation of symbolized profiles into call trees and metrics.
//!
//! This module transforms resolved samples into:
//! - Call trees (one per profile, merged across profiles)
//! - Hot path analysis (heaviest call paths by self weight)
//! - Sample distribution statistics

pub mod metrics;
pub mod tree_builder;

// Re-export main types and functions
pub use metrics::{calculate_hot_paths, calculate_sample_distribution, HotPath, SampleDistribution};
pub use tree_builder::{build_tree, merge_trees};
