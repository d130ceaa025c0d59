use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::data::encoding::{DEFAULT_ENCODINGS, TextEncoding};
use crate::foundation::error::{CinetrendError, CinetrendResult};

/// Everything the pipeline needs, lifted out of literals so each stage can be driven directly.
///
/// Defaults reproduce the BFI yearbook report: `bfi_yearbook-*.csv` in the working directory,
/// four 10x6in charts at 300 dpi and a 100px title band.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory the input pattern is resolved against.
    pub input_dir: PathBuf,
    /// File-name glob selecting the input tables.
    pub input_pattern: String,
    /// Encodings tried per file, first success wins.
    pub encodings: Vec<TextEncoding>,
    /// Source column names for the four retained fields.
    pub columns: ColumnMap,
    /// Which missing cells disqualify a row.
    pub drop_policy: DropPolicy,
    /// Length bound of the top-grossing ranking.
    pub top_n: usize,
    /// Chart raster geometry.
    pub chart: ChartConfig,
    /// Directory all artifacts are written into.
    pub output_dir: PathBuf,
    /// Artifact file names.
    pub outputs: OutputNames,
    /// Font file used for every text run. `None` resolves fonts from the system.
    pub font_path: Option<PathBuf>,
    /// Composite title band.
    pub header: HeaderConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            input_pattern: "bfi_yearbook-*.csv".to_string(),
            encodings: DEFAULT_ENCODINGS.to_vec(),
            columns: ColumnMap::default(),
            drop_policy: DropPolicy::default(),
            top_n: 10,
            chart: ChartConfig::default(),
            output_dir: PathBuf::from("."),
            outputs: OutputNames::default(),
            font_path: None,
            header: HeaderConfig::default(),
        }
    }
}

impl ReportConfig {
    /// Parse a config from a JSON reader. Absent fields keep their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> CinetrendResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CinetrendError::config(format!("parse config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CinetrendResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CinetrendError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject values no stage can work with.
    pub fn validate(&self) -> CinetrendResult<()> {
        if self.input_pattern.trim().is_empty() {
            return Err(CinetrendError::config("input_pattern must be non-empty"));
        }
        if self.encodings.is_empty() {
            return Err(CinetrendError::config(
                "encodings must list at least one candidate",
            ));
        }
        if self.top_n == 0 {
            return Err(CinetrendError::config("top_n must be > 0"));
        }
        self.chart.validate()?;
        self.header.validate()
    }

    /// Resolve an artifact name against `output_dir`.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }
}

/// Source column names, matched exactly against the CSV header row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub year: String,
    pub genre: String,
    pub gross: String,
    pub title: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            year: "Widest point of release".to_string(),
            genre: "Genre".to_string(),
            gross: "Box office gross (£ million)".to_string(),
            title: "Title".to_string(),
        }
    }
}

/// Row-dropping rule applied before projection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropPolicy {
    /// Drop a row if any column, retained or not, is missing.
    #[default]
    AnyColumn,
    /// Only the four retained columns must be present.
    ProjectedColumns,
}

/// Chart size in inches and raster density.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width_in: f32,
    pub height_in: f32,
    pub dpi: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width_in: 10.0,
            height_in: 6.0,
            dpi: 300,
        }
    }
}

impl ChartConfig {
    /// Chart markup is laid out in points; this maps points to pixels.
    pub fn scale(&self) -> f32 {
        self.dpi as f32 / 72.0
    }

    /// Raster size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.width_in * self.dpi as f32).round() as u32,
            (self.height_in * self.dpi as f32).round() as u32,
        )
    }

    fn validate(&self) -> CinetrendResult<()> {
        if self.dpi == 0 {
            return Err(CinetrendError::config("chart.dpi must be > 0"));
        }
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if !ok(self.width_in) || !ok(self.height_in) {
            return Err(CinetrendError::config(
                "chart width_in/height_in must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// Artifact file names, relative to `output_dir`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputNames {
    pub films_per_year: String,
    pub genre_trends: String,
    pub box_office: String,
    pub top_films: String,
    pub composite: String,
}

impl Default for OutputNames {
    fn default() -> Self {
        Self {
            films_per_year: "films_per_year.png".to_string(),
            genre_trends: "genre_trends.png".to_string(),
            box_office: "box_office_trends.png".to_string(),
            top_films: "top_grossing_films.png".to_string(),
            composite: "22095071.png".to_string(),
        }
    }
}

/// Title band drawn above the chart grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub height_px: u32,
    pub title: String,
    pub subtitle: String,
    pub title_px: f32,
    pub subtitle_px: f32,
    pub title_top_px: u32,
    pub subtitle_gap_px: u32,
    pub background_rgb: [u8; 3],
    pub text_rgb: [u8; 3],
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            height_px: 100,
            title: "British Film Institute - Cinema Trends".to_string(),
            subtitle: "Student Name: Abeeha Zafar, Student ID: 22095071".to_string(),
            title_px: 60.0,
            subtitle_px: 40.0,
            title_top_px: 20,
            subtitle_gap_px: 10,
            background_rgb: [255, 255, 255],
            text_rgb: [0, 0, 0],
        }
    }
}

impl HeaderConfig {
    fn validate(&self) -> CinetrendResult<()> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if !ok(self.title_px) || !ok(self.subtitle_px) {
            return Err(CinetrendError::config(
                "header font sizes must be finite and > 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
