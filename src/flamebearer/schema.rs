//! Flamebearer JSON schema definitions.
//!
//! The flat format stores one integer row per tree depth. Every node takes
//! four consecutive values in its row:
//! `[offset_delta, total, self, name_index]`, where `offset_delta` is the
//! gap between the end of the previous node in the row and the start of this
//! one, and `name_index` points into the shared `names` table.

use crate::utils::config::{DEFAULT_SAMPLE_RATE, DEFAULT_SPY_NAME, DEFAULT_UNITS};
use serde::{Deserialize, Serialize};

/// Flattened, per-level encoding of a call tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flamebearer {
    /// Shared name table
    pub names: Vec<String>,

    /// One row of quadruples per tree depth
    pub levels: Vec<Vec<i64>>,

    /// Total weight of the tree (root total)
    #[serde(default)]
    pub num_ticks: u64,

    /// Largest self value of any emitted node
    #[serde(default)]
    pub max_self: u64,
}

/// Rendering hints sent alongside the flamebearer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlamebearerMetadata {
    pub spy_name: String,
    pub sample_rate: u32,
    pub units: String,
}

impl Default for FlamebearerMetadata {
    fn default() -> Self {
        Self {
            spy_name: DEFAULT_SPY_NAME.to_string(),
            sample_rate: DEFAULT_SAMPLE_RATE,
            units: DEFAULT_UNITS.to_string(),
        }
    }
}

/// Top-level document written by `ingest` and read by `decode`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlamebearerResponse {
    /// Schema version for compatibility checking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    pub flamebearer: Flamebearer,

    #[serde(default)]
    pub metadata: FlamebearerMetadata,

    /// Timeline data from upstream responses, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<serde_json::Value>,

    /// ISO 8601 timestamp of generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
}

/// A decoded node with its absolute horizontal position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedItem {
    pub name: String,
    pub offset: i64,
    pub total: i64,
    #[serde(rename = "self")]
    pub self_value: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedFlamebearer {
    pub levels: Vec<Vec<DecodedItem>>,
}

/// Document written by `decode`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedResponse {
    pub flamebearer: DecodedFlamebearer,
}
