//! Cinetrend: box-office trend reports from film yearbook CSVs.
//!
//! A run loads every matching CSV (trying several text encodings per file), keeps the year,
//! genre, gross and title columns, aggregates them, renders four PNG charts and composes them
//! into one titled 2x2 summary image. [`run`] drives the whole pipeline from a [`ReportConfig`].

#![forbid(unsafe_code)]

pub mod compose;
pub mod data;
pub mod foundation;
pub mod pipeline;
pub mod render;
pub mod stats;

pub use data::encoding::{DEFAULT_ENCODINGS, TextEncoding};
pub use data::model::{RawTable, Record, Table, YearLabel};
pub use foundation::config::{ChartConfig, ColumnMap, DropPolicy, HeaderConfig, ReportConfig};
pub use foundation::error::{CinetrendError, CinetrendResult};
pub use pipeline::{RunSummary, run};
pub use render::ChartPaths;
pub use render::fonts::FontSet;
pub use stats::aggregate::{Summary, YearGenreMatrix};
