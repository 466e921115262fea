//! Flamebearer codec.
//!
//! This module converts call trees into the flat, per-level array format a
//! flame graph renderer consumes, and decodes that format back into named
//! items with absolute offsets.

pub mod decode;
pub mod encode;
pub mod schema;

// Re-export main types and functions
pub use decode::{decode_levels, decode_response};
pub use schema::{
    DecodedFlamebearer, DecodedItem, DecodedResponse, Flamebearer, FlamebearerMetadata,
    FlamebearerResponse,
};
