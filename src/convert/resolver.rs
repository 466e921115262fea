//! Symbol resolution: location id -> function id -> name.
//!
//! Both lookup tables are kept sorted by id, so every frame resolves with a
//! binary search for the first entry whose id is >= the target followed by
//! an exact-match check. Frames that do not resolve are left out of the call
//! path; they are never an error.

use super::profile::{Function, Location, Profile, Sample};
use crate::utils::config::SEPARATOR;
use log::{debug, trace};

impl Profile {
    /// Index of the value column named `sample_type`.
    ///
    /// Falls back to column 0 when the name is empty or matches nothing.
    pub fn value_index(&self, sample_type: &str) -> usize {
        if sample_type.is_empty() {
            return 0;
        }
        self.sample_type
            .iter()
            .position(|vt| self.string_at(vt.type_index) == Some(sample_type))
            .unwrap_or(0)
    }

    /// Unit name of the column selected by `sample_type`, if declared
    pub fn unit_for(&self, sample_type: &str) -> Option<&str> {
        self.sample_type
            .get(self.value_index(sample_type))
            .and_then(|vt| self.string_at(vt.unit_index))
            .filter(|unit| !unit.is_empty())
    }

    /// Build one call-path name per sample and hand it to `cb` with the
    /// sample's value in the selected column.
    ///
    /// Frames are emitted outermost first (the sample's location list is
    /// walked from its end) and joined with `;`. Samples whose value vector
    /// lacks the selected column contribute 0.
    pub fn get(&self, sample_type: &str, mut cb: impl FnMut(&[u8], i64)) {
        let value_index = self.value_index(sample_type);
        debug!(
            "Resolving {} samples using value column {}",
            self.sample.len(),
            value_index
        );

        let mut buf: Vec<u8> = Vec::with_capacity(256);
        for sample in &self.sample {
            for &location_id in sample.location_id.iter().rev() {
                let Some(name) = self.find_function_name(location_id) else {
                    trace!("Skipping unresolved location {}", location_id);
                    continue;
                };
                if !buf.is_empty() {
                    buf.push(SEPARATOR);
                }
                buf.extend_from_slice(name.as_bytes());
            }

            let value = sample.value.get(value_index).copied().unwrap_or(0);
            cb(&buf, value);

            for (key, value) in self.sample_labels(sample) {
                trace!(
                    "Sample {} tagged {}={}",
                    String::from_utf8_lossy(&buf),
                    key,
                    value
                );
            }
            buf.clear();
        }
    }

    /// Name of the function behind the first line of location `location_id`
    pub fn find_function_name(&self, location_id: u64) -> Option<&str> {
        let location = self.find_location(location_id)?;
        let line = location.line.first()?;
        let function = self.find_function(line.function_id)?;
        self.string_at(function.name)
    }

    pub fn find_location(&self, id: u64) -> Option<&Location> {
        let index = self.location.partition_point(|l| l.id < id);
        self.location.get(index).filter(|l| l.id == id)
    }

    pub fn find_function(&self, id: u64) -> Option<&Function> {
        let index = self.function.partition_point(|f| f.id < id);
        self.function.get(index).filter(|f| f.id == id)
    }

    /// String labels of a sample as `(key, value)` pairs.
    ///
    /// Tags are resolved but not aggregated on yet.
    pub fn sample_labels<'a>(&'a self, sample: &'a Sample) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        sample
            .label
            .iter()
            .filter(|label| label.str != 0)
            .filter_map(move |label| Some((self.string_at(label.key)?, self.string_at(label.str)?)))
    }
}
