use std::collections::{BTreeMap, BTreeSet};

use crate::data::model::{Table, YearLabel};

/// Films released per year, ascending by year.
pub type YearCount = Vec<(YearLabel, usize)>;

/// Summed gross per year, ascending by year.
pub type YearGross = Vec<(YearLabel, f64)>;

/// Highest-grossing `(title, gross)` pairs, descending by gross.
pub type TopFilms = Vec<(String, f64)>;

/// Dense year x genre count matrix. Combinations absent from the data are zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct YearGenreMatrix {
    years: Vec<YearLabel>,
    genres: Vec<String>,
    // Row-major: counts[year_idx * genres.len() + genre_idx].
    counts: Vec<usize>,
}

impl YearGenreMatrix {
    pub fn years(&self) -> &[YearLabel] {
        &self.years
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Count for one cell; unknown years or genres read as zero.
    pub fn get(&self, year: &YearLabel, genre: &str) -> usize {
        let (Some(y), Some(g)) = (
            self.years.iter().position(|v| v == year),
            self.genres.iter().position(|v| v == genre),
        ) else {
            return 0;
        };
        self.counts[y * self.genres.len() + g]
    }

    /// All genre counts for the year at `year_idx`, in `genres()` order.
    pub fn row(&self, year_idx: usize) -> &[usize] {
        let w = self.genres.len();
        &self.counts[year_idx * w..(year_idx + 1) * w]
    }

    pub fn row_total(&self, year: &YearLabel) -> usize {
        self.years
            .iter()
            .position(|v| v == year)
            .map(|y| self.row(y).iter().sum())
            .unwrap_or(0)
    }

    /// One genre's count for every year, in `years()` order.
    pub fn column(&self, genre_idx: usize) -> Vec<usize> {
        (0..self.years.len())
            .map(|y| self.counts[y * self.genres.len() + genre_idx])
            .collect()
    }
}

pub fn films_per_year(table: &Table) -> YearCount {
    let mut counts = BTreeMap::<&YearLabel, usize>::new();
    for r in table {
        *counts.entry(&r.year).or_default() += 1;
    }
    counts.into_iter().map(|(y, n)| (y.clone(), n)).collect()
}

pub fn genre_trends(table: &Table) -> YearGenreMatrix {
    let years: Vec<YearLabel> = table
        .iter()
        .map(|r| &r.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .cloned()
        .collect();
    let genres: Vec<String> = table
        .iter()
        .map(|r| r.genre.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect();

    let mut counts = vec![0usize; years.len() * genres.len()];
    for r in table {
        // Both searches hit: every label came from this table.
        let y = years.binary_search(&r.year).unwrap_or_default();
        let g = genres
            .binary_search_by(|v| v.as_str().cmp(&r.genre))
            .unwrap_or_default();
        counts[y * genres.len() + g] += 1;
    }

    YearGenreMatrix {
        years,
        genres,
        counts,
    }
}

/// Left-to-right sum of gross per year.
pub fn gross_per_year(table: &Table) -> YearGross {
    let mut sums = BTreeMap::<&YearLabel, f64>::new();
    for r in table {
        *sums.entry(&r.year).or_default() += r.gross;
    }
    sums.into_iter().map(|(y, v)| (y.clone(), v)).collect()
}

/// First `n` records by gross, descending. Ties keep table order.
pub fn top_grossing(table: &Table, n: usize) -> TopFilms {
    let mut ranked: Vec<&crate::data::model::Record> = table.iter().collect();
    ranked.sort_by(|a, b| b.gross.total_cmp(&a.gross));
    ranked
        .into_iter()
        .take(n)
        .map(|r| (r.title.clone(), r.gross))
        .collect()
}

/// The four derived views the charts are drawn from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    pub films_per_year: YearCount,
    pub genre_trends: YearGenreMatrix,
    pub gross_per_year: YearGross,
    pub top_films: TopFilms,
}

impl Summary {
    #[tracing::instrument(skip(table), fields(rows = table.len()))]
    pub fn compute(table: &Table, top_n: usize) -> Self {
        let summary = Self {
            films_per_year: films_per_year(table),
            genre_trends: genre_trends(table),
            gross_per_year: gross_per_year(table),
            top_films: top_grossing(table, top_n),
        };
        tracing::info!(
            years = summary.films_per_year.len(),
            genres = summary.genre_trends.genres().len(),
            top = summary.top_films.len(),
            "aggregated"
        );
        summary
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stats/aggregate.rs"]
mod tests;
