//! Compositor: four chart images in a 2x2 grid under a titled header band.

/// 2x2 grid placement.
pub mod grid;
/// Title and subtitle drawing.
pub mod header;
/// Cropped single-line text rendering.
pub mod text;

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::foundation::config::ReportConfig;
use crate::foundation::error::{CinetrendError, CinetrendResult};
use crate::render::ChartPaths;
use crate::render::fonts::FontSet;
use crate::render::palette::Rgb;
use crate::render::raster::write_rgb_png;

/// Load the chart images, compose them with the header and write the composite as RGB PNG.
#[tracing::instrument(skip_all)]
pub fn compose_report(
    charts: &ChartPaths,
    cfg: &ReportConfig,
    fonts: &FontSet,
) -> CinetrendResult<PathBuf> {
    let [a, b, c, d] = charts.in_grid_order();
    let images = [load_chart(a)?, load_chart(b)?, load_chart(c)?, load_chart(d)?];

    let band = &cfg.header;
    let mut canvas = grid::compose_grid(&images, band.height_px, Rgb(band.background_rgb))?;
    header::draw_header(&mut canvas, band, fonts)?;

    let out = cfg.output_path(&cfg.outputs.composite);
    let rgb = image::DynamicImage::ImageRgba8(canvas).to_rgb8();
    write_rgb_png(&out, &rgb, cfg.chart.dpi)?;
    tracing::info!(path = %out.display(), "composite written");
    Ok(out)
}

fn load_chart(path: &Path) -> CinetrendResult<RgbaImage> {
    if !path.is_file() {
        return Err(CinetrendError::resource(format!(
            "chart image '{}' does not exist",
            path.display()
        )));
    }
    let img = image::open(path).map_err(|e| {
        CinetrendError::resource(format!("read chart image '{}': {e}", path.display()))
    })?;
    Ok(img.to_rgba8())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/mod.rs"]
mod tests;
