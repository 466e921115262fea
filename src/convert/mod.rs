//! Conversion of symbolized profiles into call-path samples.
//!
//! This module handles:
//! - The symbolized profile model (string, function and location tables)
//! - Resolving location ids to function names
//! - Building semicolon-joined call paths, outermost frame first

pub mod profile;
pub mod resolver;

// Re-export main types
pub use profile::{Function, Label, Line, Location, Profile, Sample, ValueType};
