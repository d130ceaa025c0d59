//! Pure aggregations over the cleaned table.

/// Per-year counts, genre matrix, gross sums and top-N ranking.
pub mod aggregate;
