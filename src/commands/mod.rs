//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod decode;
pub mod ingest;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use decode::execute_decode;
pub use ingest::{execute_ingest, parse_ratio, render_summary, validate_args};
pub use models::{DecodeArgs, IngestArgs, TreeArgs};
pub use utils::{display_version, print_tree};
