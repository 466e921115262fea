//! Plain text output (the tree's debug form).

use crate::utils::error::OutputError;
use log::info;
use std::path::Path;

/// Write text content to a file, creating parent directories as needed
pub fn write_text(content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    super::prepare_path(output_path)?;
    std::fs::write(output_path, content)?;

    info!(
        "Text written to {} ({} bytes)",
        output_path.display(),
        content.len()
    );
    Ok(())
}
