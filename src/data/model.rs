use std::fmt;

/// Release-period bucket ("widest point of release").
///
/// Numeric labels order by value and sort before free-text labels, which order lexicographically.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum YearLabel {
    Number(i64),
    Text(String),
}

impl YearLabel {
    /// Interpret a trimmed cell. `"2020"` and `"2020.0"` are both `Number(2020)`.
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Self::Number(n);
        }
        if let Ok(f) = s.parse::<f64>()
            && f.is_finite()
            && f.fract() == 0.0
            && f.abs() < i64::MAX as f64
        {
            return Self::Number(f as i64);
        }
        Self::Text(s.to_string())
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for YearLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for YearLabel {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for YearLabel {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// One film entry with every retained field present.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub year: YearLabel,
    pub genre: String,
    /// Box-office gross in millions.
    pub gross: f64,
    pub title: String,
}

impl Record {
    pub fn new(
        year: impl Into<YearLabel>,
        genre: impl Into<String>,
        gross: f64,
        title: impl Into<String>,
    ) -> Self {
        Self {
            year: year.into(),
            genre: genre.into(),
            gross,
            title: title.into(),
        }
    }
}

/// Cleaned, projected records in load order.
pub type Table = Vec<Record>;

/// Untyped cells as loaded from one or more delimited files.
///
/// `None` marks a missing cell: either an NA marker in the source, or a column the source file
/// did not have.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Append a row; short rows are padded with missing cells.
    pub(crate) fn push_row(&mut self, mut row: Vec<Option<String>>) {
        row.resize(self.columns.len(), None);
        self.rows.push(row);
    }

    /// Append `other` below `self`, unioning columns by exact name in first-seen order.
    pub fn concat(mut self, other: RawTable) -> RawTable {
        let mapping: Vec<usize> = other
            .columns
            .iter()
            .map(|name| match self.column_index(name) {
                Some(i) => i,
                None => {
                    self.columns.push(name.clone());
                    self.columns.len() - 1
                }
            })
            .collect();

        let width = self.columns.len();
        for row in &mut self.rows {
            row.resize(width, None);
        }
        for row in other.rows {
            let mut out = vec![None; width];
            for (cell, &dst) in row.into_iter().zip(&mapping) {
                out[dst] = cell;
            }
            self.rows.push(out);
        }
        self
    }
}

/// Common spreadsheet NA markers. Cells equal to one of these (after trimming) are missing.
const NA_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Normalize one CSV cell: trimmed text, or `None` for NA markers.
pub fn cell_value(raw: &str) -> Option<String> {
    let s = raw.trim();
    if NA_MARKERS.contains(&s) {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/model.rs"]
mod tests;
