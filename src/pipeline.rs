use std::path::PathBuf;

use crate::{
    compose::compose_report,
    data::{clean::clean, loader::load_tables},
    foundation::{config::ReportConfig, error::CinetrendResult},
    render::{ChartPaths, fonts::FontSet, render_charts},
    stats::aggregate::Summary,
};

/// What a report run read and wrote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub input_files: Vec<PathBuf>,
    pub rows_loaded: usize,
    pub rows_kept: usize,
    pub charts: ChartPaths,
    pub composite: PathBuf,
}

/// Load, clean, aggregate, render and compose, strictly in that order.
///
/// The first failing stage aborts the run; files written by earlier stages stay on disk.
#[tracing::instrument(skip_all, fields(dir = %cfg.input_dir.display(), pattern = %cfg.input_pattern))]
pub fn run(cfg: &ReportConfig) -> CinetrendResult<RunSummary> {
    cfg.validate()?;

    let (raw, input_files) = load_tables(&cfg.input_dir, &cfg.input_pattern, &cfg.encodings)?;
    let table = clean(&raw, &cfg.columns, cfg.drop_policy)?;
    let summary = Summary::compute(&table, cfg.top_n);

    let fonts = FontSet::load(cfg.font_path.as_deref())?;
    let charts = render_charts(&summary, cfg, &fonts)?;
    let composite = compose_report(&charts, cfg, &fonts)?;

    Ok(RunSummary {
        input_files,
        rows_loaded: raw.len(),
        rows_kept: table.len(),
        charts,
        composite,
    })
}
