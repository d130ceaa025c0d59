use crate::data::model::{RawTable, Record, Table, YearLabel};
use crate::foundation::config::{ColumnMap, DropPolicy};
use crate::foundation::error::{CinetrendError, CinetrendResult};

/// Drop incomplete rows and project the rest onto the four report fields.
///
/// Column lookup happens first, so a missing column fails even when the table has no rows.
#[tracing::instrument(skip_all, fields(rows = raw.len()))]
pub fn clean(raw: &RawTable, columns: &ColumnMap, policy: DropPolicy) -> CinetrendResult<Table> {
    let idx = |name: &str| {
        raw.column_index(name)
            .ok_or_else(|| CinetrendError::MissingColumn(name.to_string()))
    };
    let year = idx(&columns.year)?;
    let genre = idx(&columns.genre)?;
    let gross = idx(&columns.gross)?;
    let title = idx(&columns.title)?;
    let projected = [year, genre, gross, title];

    let mut out = Table::with_capacity(raw.len());
    for (i, row) in raw.rows().iter().enumerate() {
        let complete = match policy {
            DropPolicy::AnyColumn => row.iter().all(Option::is_some),
            DropPolicy::ProjectedColumns => projected.iter().all(|&c| row[c].is_some()),
        };
        if !complete {
            continue;
        }

        let cell = |c: usize| row[c].as_deref().unwrap_or_default();
        let gross_raw = cell(gross);
        let gross_value = parse_gross(gross_raw).ok_or_else(|| {
            CinetrendError::invalid_value(format!(
                "row {i}: '{}' is not a number: '{gross_raw}'",
                columns.gross
            ))
        })?;

        out.push(Record {
            year: YearLabel::parse(cell(year)),
            genre: cell(genre).to_string(),
            gross: gross_value,
            title: cell(title).to_string(),
        });
    }

    tracing::info!(kept = out.len(), dropped = raw.len() - out.len(), "cleaned");
    Ok(out)
}

fn parse_gross(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "../../tests/unit/data/clean.rs"]
mod tests;
