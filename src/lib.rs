//! Flamestore
//!
//! Aggregation core of a continuous-profiling storage backend: a mergeable,
//! weight-scalable call tree fed from symbolized profiles, and the
//! flamebearer codec that flattens it for flame graph rendering.
//!
//! ```ignore
//! use flamestore::tree::Tree;
//!
//! let tree = Tree::new();
//! tree.insert(b"main;work", 5);
//! let flamebearer = tree.flamebearer(1024);
//! ```

pub mod aggregator;
pub mod commands;
pub mod convert;
pub mod flamebearer;
pub mod output;
pub mod tree;
pub mod utils;
