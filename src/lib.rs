//! # Filebatch
//!
//! Filebatch enumerates the files of a project directory and emits their
//! contents in index-bounded batches for consumption by an external tool.
//!
//! ## Features
//!
//! * Enumeration - Sorted file listing with fixed directory and file-name exclusions
//! * Emission - Index listing, or delimited file contents for a `[start, end)` window

/// File enumeration with exclusion sets
pub mod enumerate;
/// Listing and delimited content output
pub mod emit;
/// Logging setup
pub mod telemetry;
