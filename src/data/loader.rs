use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::data::encoding::{TextEncoding, decode_with_fallback};
use crate::data::model::{RawTable, cell_value};
use crate::foundation::error::{CinetrendError, CinetrendResult};

/// List files in `dir` whose names match `pattern`, sorted lexicographically.
pub fn discover_inputs(dir: &Path, pattern: &str) -> CinetrendResult<Vec<PathBuf>> {
    let dir_str = dir.to_str().ok_or_else(|| {
        CinetrendError::config(format!("non UTF-8 input dir '{}'", dir.display()))
    })?;
    let full = format!("{}/{pattern}", glob::Pattern::escape(dir_str));

    let mut paths = Vec::new();
    for entry in glob::glob(&full)
        .map_err(|e| CinetrendError::config(format!("invalid input pattern '{pattern}': {e}")))?
    {
        let path = entry.with_context(|| format!("scan '{}'", dir.display()))?;
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Read one delimited file, decoding it with the first encoding in `encodings` that accepts it.
///
/// Only decoding failures move on to the next encoding; malformed CSV is fatal.
pub fn read_table(path: &Path, encodings: &[TextEncoding]) -> CinetrendResult<RawTable> {
    let bytes = std::fs::read(path).with_context(|| format!("read '{}'", path.display()))?;
    let (text, encoding) = decode_with_fallback(path, &bytes, encodings)?;
    let table = parse_csv(path, &text)?;
    tracing::debug!(
        file = %path.display(),
        encoding = encoding.name(),
        rows = table.len(),
        "loaded table"
    );
    Ok(table)
}

fn parse_csv(path: &Path, text: &str) -> CinetrendResult<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| CinetrendError::csv(format!("'{}': {e}", path.display())))?;
    let columns: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
    let width = columns.len();
    let mut table = RawTable::new(columns);

    for (i, result) in reader.records().enumerate() {
        let record =
            result.map_err(|e| CinetrendError::csv(format!("'{}': {e}", path.display())))?;
        if record.len() > width {
            return Err(CinetrendError::csv(format!(
                "'{}': row {} has {} fields, header has {width}",
                path.display(),
                i + 2,
                record.len()
            )));
        }
        table.push_row(record.iter().map(cell_value).collect());
    }
    Ok(table)
}

/// Discover, read and concatenate every input table.
///
/// Zero matching files is an error rather than an empty table.
#[tracing::instrument(skip(encodings))]
pub fn load_tables(
    dir: &Path,
    pattern: &str,
    encodings: &[TextEncoding],
) -> CinetrendResult<(RawTable, Vec<PathBuf>)> {
    let paths = discover_inputs(dir, pattern)?;
    if paths.is_empty() {
        return Err(CinetrendError::NoInputs {
            pattern: pattern.to_string(),
            dir: dir.to_path_buf(),
        });
    }

    let mut merged = RawTable::default();
    for path in &paths {
        merged = merged.concat(read_table(path, encodings)?);
    }
    tracing::info!(files = paths.len(), rows = merged.len(), "inputs loaded");
    Ok((merged, paths))
}

#[cfg(test)]
#[path = "../../tests/unit/data/loader.rs"]
mod tests;
