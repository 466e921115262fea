//! Decode command implementation.
//! Turns a flamebearer response into per-level items with absolute offsets.

use super::models::DecodeArgs;
use crate::flamebearer::{decode_response, DecodedResponse, FlamebearerResponse};
use crate::output::{read_json, write_json};
use anyhow::{Context, Result};
use log::info;

/// Execute the decode command
pub fn execute_decode(args: DecodeArgs) -> Result<DecodedResponse> {
    // Step 1: Load response
    let response: FlamebearerResponse = read_json(&args.input)
        .with_context(|| format!("Failed to read flamebearer {}", args.input.display()))?;

    // Step 2: Decode levels
    let decoded = decode_response(&response).context("Failed to decode flamebearer levels")?;

    // Step 3: Write output
    match &args.output {
        Some(path) => {
            write_json(&decoded, path).context("Failed to write decoded levels")?;
            info!("✓ Decoded levels written to: {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&decoded)?),
    }

    Ok(decoded)
}
