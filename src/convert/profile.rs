//! Symbolized profile model.
//!
//! Mirrors the subset of the pprof profile the resolver consults: the string
//! table, the function and location tables, the declared sample types and
//! the samples themselves. Accepts pprof-style JSON (camelCase field names,
//! singular or plural table names).

use crate::utils::error::ProfileError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A symbolized profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Names of the value columns carried by every sample
    #[serde(default)]
    pub sample_type: Vec<ValueType>,

    #[serde(default, alias = "samples")]
    pub sample: Vec<Sample>,

    /// Location table, sorted by id
    #[serde(default, alias = "locations")]
    pub location: Vec<Location>,

    /// Function table, sorted by id
    #[serde(default, alias = "functions")]
    pub function: Vec<Function>,

    /// Index 0 is conventionally the empty string
    #[serde(default)]
    pub string_table: Vec<String>,
}

/// Declared value column: type and unit as string table indices
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValueType {
    #[serde(default, rename = "type")]
    pub type_index: i64,

    #[serde(default, rename = "unit")]
    pub unit_index: i64,
}

/// One stack sample
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    /// Location ids, innermost frame first
    #[serde(default)]
    pub location_id: Vec<u64>,

    /// One value per declared sample type
    #[serde(default)]
    pub value: Vec<i64>,

    #[serde(default)]
    pub label: Vec<Label>,
}

/// Key/value tag attached to a sample, as string table indices
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Label {
    #[serde(default)]
    pub key: i64,

    #[serde(default)]
    pub str: i64,

    #[serde(default)]
    pub num: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    pub id: u64,

    #[serde(default)]
    pub line: Vec<Line>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    #[serde(default)]
    pub function_id: u64,

    #[serde(default)]
    pub line: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    pub id: u64,

    /// Function name as a string table index
    #[serde(default)]
    pub name: i64,

    #[serde(default)]
    pub system_name: i64,

    #[serde(default)]
    pub filename: i64,
}

impl Profile {
    /// Parse a profile from JSON bytes
    pub fn from_json(data: &[u8]) -> Result<Self, ProfileError> {
        let mut profile: Profile = serde_json::from_slice(data)?;
        profile.sort_tables();
        Ok(profile)
    }

    /// Load a profile from a JSON file
    ///
    /// **Public** - used by the ingest and tree commands
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        debug!("Reading profile from: {}", path.display());

        let file = File::open(path)?;
        let mut profile: Profile = serde_json::from_reader(BufReader::new(file))?;
        profile.sort_tables();

        debug!(
            "Profile loaded: {} samples, {} locations, {} functions",
            profile.sample.len(),
            profile.location.len(),
            profile.function.len()
        );
        Ok(profile)
    }

    /// Sort the location and function tables by id so the resolver's binary
    /// searches hold
    pub fn sort_tables(&mut self) {
        self.location.sort_by_key(|l| l.id);
        self.function.sort_by_key(|f| f.id);
    }

    /// String table entry for a (possibly invalid) index
    pub fn string_at(&self, index: i64) -> Option<&str> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.string_table.get(i))
            .map(String::as_str)
    }
}
