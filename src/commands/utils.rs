use super::models::TreeArgs;
use crate::aggregator::build_tree;
use crate::convert::Profile;
use crate::output::write_text;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};

/// Print (or write) the debug form of a profile's call tree
pub fn print_tree(args: TreeArgs) -> Result<()> {
    let profile = Profile::read(&args.profile)
        .with_context(|| format!("Failed to load profile {}", args.profile.display()))?;

    let tree = build_tree(&profile, &args.sample_type);
    let text = tree.to_string();

    match &args.output {
        Some(path) => write_text(&text, path).context("Failed to write tree text")?,
        None => print!("{}", text),
    }

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Flamestore v{}", env!("CARGO_PKG_VERSION"));
    println!("Flamebearer Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Call-tree aggregation and flamebearer codec for continuous profiling.");
}
