//! Decode flat flamebearer levels into named items with absolute offsets.
//!
//! Purely a format transform: tree semantics are not re-verified.

use super::schema::{DecodedFlamebearer, DecodedItem, DecodedResponse, Flamebearer, FlamebearerResponse};
use crate::utils::error::CodecError;
use log::debug;

/// Decode every level of `flamebearer`
///
/// **Public** - main entry point for decoding
///
/// # Errors
/// * `CodecError::MisalignedLevel` - a row's length is not a multiple of 4
/// * `CodecError::NameOutOfRange` - a name index falls outside the name table
pub fn decode_levels(flamebearer: &Flamebearer) -> Result<Vec<Vec<DecodedItem>>, CodecError> {
    let names = &flamebearer.names;

    flamebearer
        .levels
        .iter()
        .enumerate()
        .map(|(level, row)| decode_row(level, row, names))
        .collect()
}

fn decode_row(level: usize, row: &[i64], names: &[String]) -> Result<Vec<DecodedItem>, CodecError> {
    if row.len() % 4 != 0 {
        return Err(CodecError::MisalignedLevel {
            level,
            len: row.len(),
        });
    }

    let mut prev: i64 = 0;
    let mut items = Vec::with_capacity(row.len() / 4);

    for chunk in row.chunks_exact(4) {
        let (delta, total, self_value, name_index) = (chunk[0], chunk[1], chunk[2], chunk[3]);

        let name = usize::try_from(name_index)
            .ok()
            .and_then(|i| names.get(i))
            .ok_or(CodecError::NameOutOfRange {
                level,
                index: name_index,
                names: names.len(),
            })?;

        items.push(DecodedItem {
            name: name.clone(),
            offset: prev.saturating_add(delta),
            total,
            self_value,
        });
        prev = prev.saturating_add(delta).saturating_add(total);
    }

    Ok(items)
}

/// Decode a full response document
pub fn decode_response(response: &FlamebearerResponse) -> Result<DecodedResponse, CodecError> {
    let levels = decode_levels(&response.flamebearer)?;
    debug!("Decoded {} levels", levels.len());

    Ok(DecodedResponse {
        flamebearer: DecodedFlamebearer { levels },
    })
}
