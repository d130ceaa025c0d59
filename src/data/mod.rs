//! Input side of the pipeline: decoding, loading and cleaning film tables.

/// Cleaner/projector from raw cells to typed records.
pub mod clean;
/// Text encodings and the first-match-wins decoder.
pub mod encoding;
/// Input discovery and CSV parsing.
pub mod loader;
/// Record, label and raw table types.
pub mod model;
