//! Chart rendering: SVG markup built per chart, rasterized with resvg, written as PNG.

/// Scales, tick generation and year axes.
pub mod axis;
/// The four chart builders.
pub mod charts;
/// Font database and usvg options.
pub mod fonts;
/// Qualitative and sequential color maps.
pub mod palette;
/// SVG rasterization and PNG output.
pub mod raster;
/// Minimal SVG document builder.
pub mod svg;

use std::path::PathBuf;

use crate::foundation::config::ReportConfig;
use crate::foundation::error::CinetrendResult;
use crate::render::fonts::FontSet;
use crate::stats::aggregate::Summary;

/// Where each chart image was written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartPaths {
    pub films_per_year: PathBuf,
    pub genre_trends: PathBuf,
    pub box_office: PathBuf,
    pub top_films: PathBuf,
}

impl ChartPaths {
    pub fn from_config(cfg: &ReportConfig) -> Self {
        Self {
            films_per_year: cfg.output_path(&cfg.outputs.films_per_year),
            genre_trends: cfg.output_path(&cfg.outputs.genre_trends),
            box_office: cfg.output_path(&cfg.outputs.box_office),
            top_films: cfg.output_path(&cfg.outputs.top_films),
        }
    }

    /// Paths in composite order: top-left, top-right, bottom-left, bottom-right.
    pub fn in_grid_order(&self) -> [&PathBuf; 4] {
        [
            &self.films_per_year,
            &self.genre_trends,
            &self.box_office,
            &self.top_films,
        ]
    }
}

/// Render the four charts from `summary` one at a time, writing each PNG before building the
/// next chart.
#[tracing::instrument(skip_all)]
pub fn render_charts(
    summary: &Summary,
    cfg: &ReportConfig,
    fonts: &FontSet,
) -> CinetrendResult<ChartPaths> {
    let paths = ChartPaths::from_config(cfg);
    let chart = &cfg.chart;
    let opts = fonts.options();
    let expected = chart.pixel_size();

    for (idx, path) in paths.in_grid_order().into_iter().enumerate() {
        let markup = match idx {
            0 => charts::films_per_year_chart(chart, &summary.films_per_year)?,
            1 => charts::genre_trends_chart(chart, &summary.genre_trends)?,
            2 => charts::box_office_chart(chart, &summary.gross_per_year)?,
            _ => charts::top_films_chart(chart, &summary.top_films, cfg.top_n)?,
        };
        let img = raster::rasterize_svg(&markup, &opts, chart.scale())?;
        if img.dimensions() != expected {
            tracing::debug!(
                actual = ?img.dimensions(),
                ?expected,
                "chart raster size differs from width x dpi"
            );
        }
        raster::write_png(path, &img, chart.dpi)?;
        tracing::debug!(
            path = %path.display(),
            width = img.width(),
            height = img.height(),
            "chart written"
        );
    }
    Ok(paths)
}

#[cfg(test)]
#[path = "../../tests/unit/render/mod.rs"]
mod tests;
