use crate::utils::config::{DEFAULT_MAX_NODES, DEFAULT_SAMPLE_RATE, DEFAULT_SPY_NAME};
use num_rational::Ratio;
use std::path::PathBuf;

/// Arguments for the ingest command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct IngestArgs {
    /// Symbolized profile JSON files, merged in order
    pub profiles: Vec<PathBuf>,

    /// Value column to aggregate (empty = first column)
    pub sample_type: String,

    /// Optional scale factor applied to the merged tree
    pub scale: Option<Ratio<u64>>,

    /// Node budget for the flamebearer (0 = unlimited)
    pub max_nodes: usize,

    /// Profiler name reported in the response metadata
    pub spy_name: String,

    /// Sampling rate reported in the response metadata
    pub sample_rate: u32,

    /// Output path for the flamebearer response
    pub output_json: PathBuf,

    /// Output path for the nested tree JSON (optional)
    pub output_tree: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Number of hot paths in the summary
    pub top_paths: usize,
}

impl Default for IngestArgs {
    fn default() -> Self {
        Self {
            profiles: Vec::new(),
            sample_type: String::new(),
            scale: None,
            max_nodes: DEFAULT_MAX_NODES,
            spy_name: DEFAULT_SPY_NAME.to_string(),
            sample_rate: DEFAULT_SAMPLE_RATE,
            output_json: PathBuf::from("flamebearer.json"),
            output_tree: None,
            print_summary: false,
            top_paths: 20,
        }
    }
}

/// Arguments for the decode command
#[derive(Debug, Clone, Default)]
pub struct DecodeArgs {
    /// Flamebearer response JSON to decode
    pub input: PathBuf,

    /// Output path; decoded levels go to stdout when absent
    pub output: Option<PathBuf>,
}

/// Arguments for the tree command
#[derive(Debug, Clone, Default)]
pub struct TreeArgs {
    pub profile: PathBuf,

    pub sample_type: String,

    /// Write the debug form here instead of stdout
    pub output: Option<PathBuf>,
}
