//! Ingest command implementation.
//!
//! The ingest command:
//! 1. Loads symbolized profiles
//! 2. Builds one call tree per profile
//! 3. Merges the trees
//! 4. Scales the merged tree (if requested)
//! 5. Encodes the flamebearer
//! 6. Writes output files

use super::models::IngestArgs;
use crate::aggregator::{build_tree, calculate_hot_paths, calculate_sample_distribution, merge_trees};
use crate::convert::Profile;
use crate::flamebearer::{FlamebearerMetadata, FlamebearerResponse};
use crate::output::write_json;
use crate::tree::Tree;
use crate::utils::config::{DEFAULT_UNITS, SCHEMA_VERSION};
use anyhow::{Context, Result};
use log::{debug, info};
use num_rational::Ratio;
use std::time::Instant;

/// Execute the ingest command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Ingest command arguments
///
/// # Returns
/// The merged (and possibly scaled) tree
///
/// # Errors
/// * Profile read or parse failures
/// * File write errors
pub fn execute_ingest(args: IngestArgs) -> Result<Tree> {
    let start_time = Instant::now();

    info!("Starting ingest of {} profile(s)", args.profiles.len());

    // Step 1: Load profiles
    info!("Step 1/6: Loading profiles...");
    let profiles = args
        .profiles
        .iter()
        .map(|path| {
            Profile::read(path).with_context(|| format!("Failed to load profile {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    // Step 2: Build trees
    info!("Step 2/6: Building call trees...");
    let trees: Vec<Tree> = profiles
        .iter()
        .map(|profile| build_tree(profile, &args.sample_type))
        .collect();

    // Step 3: Merge
    info!("Step 3/6: Merging {} tree(s)...", trees.len());
    let merged = merge_trees(&trees);
    debug!("Merged tree holds {} samples", merged.samples());

    // Step 4: Scale
    let tree = match &args.scale {
        Some(ratio) => {
            info!("Step 4/6: Scaling tree by {}...", ratio);
            merged.clone_scaled(ratio)
        }
        None => {
            info!("Step 4/6: Skipping scaling (not requested)");
            merged
        }
    };

    let dist = calculate_sample_distribution(&tree);
    info!("Sample distribution: {}", dist.summary());

    // Step 5: Encode
    info!("Step 5/6: Encoding flamebearer (max {} nodes)...", args.max_nodes);
    let units = profiles
        .first()
        .and_then(|profile| profile.unit_for(&args.sample_type))
        .unwrap_or(DEFAULT_UNITS);

    let response = FlamebearerResponse {
        version: Some(SCHEMA_VERSION.to_string()),
        flamebearer: tree.flamebearer(args.max_nodes),
        metadata: FlamebearerMetadata {
            spy_name: args.spy_name.clone(),
            sample_rate: args.sample_rate,
            units: units.to_string(),
        },
        timeline: None,
        generated_at: Some(chrono::Utc::now().to_rfc3339()),
    };

    // Step 6: Write outputs
    info!("Step 6/6: Writing output files...");
    write_json(&response, &args.output_json).context("Failed to write flamebearer JSON")?;
    info!("✓ Flamebearer written to: {}", args.output_json.display());

    if let Some(tree_path) = &args.output_tree {
        write_json(&tree, tree_path).context("Failed to write tree JSON")?;
        info!("✓ Tree written to: {}", tree_path.display());
    }

    if args.print_summary {
        println!("\n{}", render_summary(&tree, args.top_paths));
    }

    let elapsed = start_time.elapsed();
    info!("Ingest completed in {:.2}s", elapsed.as_secs_f64());

    Ok(tree)
}

/// Render a hot-path table for the terminal
pub fn render_summary(tree: &Tree, top_n: usize) -> String {
    let hot_paths = calculate_hot_paths(tree, top_n);
    let mut lines = Vec::new();

    lines.push("=".repeat(80));
    lines.push("PROFILE SUMMARY".to_string());
    lines.push("=".repeat(80));
    lines.push(format!("Total Samples: {}", tree.samples()));
    lines.push(String::new());
    lines.push(format!("  {:<56} {:>12} {:>7}", "Call Path (Hottest First)", "SELF", "%"));

    for path in &hot_paths {
        // Keep the innermost frames visible
        let display_stack = if path.stack.chars().count() > 56 {
            let tail: String = path
                .stack
                .chars()
                .rev()
                .take(53)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("...{}", tail)
        } else {
            path.stack.clone()
        };
        lines.push(format!(
            "  {:<56} {:>12} {:>6.1}%",
            display_stack, path.samples, path.percentage
        ));
    }
    lines.push("=".repeat(80));

    lines.join("\n")
}

/// Parse a scale factor such as `1/2` or `3`
///
/// **Public** - used by main.rs for the `--scale` flag
pub fn parse_ratio(input: &str) -> Result<Ratio<u64>> {
    input
        .trim()
        .parse::<Ratio<u64>>()
        .map_err(|e| anyhow::anyhow!("Invalid scale '{}': {}", input, e))
}

/// Validate ingest arguments
///
/// **Public** - can be called before execute_ingest for early validation
pub fn validate_args(args: &IngestArgs) -> Result<()> {
    if args.profiles.is_empty() {
        anyhow::bail!("At least one profile is required");
    }

    for path in &args.profiles {
        if !path.is_file() {
            anyhow::bail!("Profile not found: {}", path.display());
        }
    }

    if args.sample_rate == 0 {
        anyhow::bail!("sample_rate must be greater than 0");
    }

    if args.top_paths == 0 {
        anyhow::bail!("top_paths must be greater than 0");
    }

    if args.top_paths > 1000 {
        anyhow::bail!("top_paths is too large (max 1000)");
    }

    Ok(())
}
