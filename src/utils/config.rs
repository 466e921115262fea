//! Configuration and constants shared by the library and the CLI.

/// Current flamebearer response schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Separator between frame names in a call-path key
pub const SEPARATOR: u8 = b';';

/// Default node budget for flamebearer encoding
pub const DEFAULT_MAX_NODES: usize = 1024;

/// Display name given to the root in the flamebearer name table
pub const ROOT_DISPLAY_NAME: &str = "total";

/// Name of the synthetic node that absorbs truncated siblings
pub const OTHER_NAME: &str = "other";

// Response metadata defaults
pub const DEFAULT_SPY_NAME: &str = "unknown";
pub const DEFAULT_SAMPLE_RATE: u32 = 100;
pub const DEFAULT_UNITS: &str = "samples";
