use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{CinetrendError, CinetrendResult};

// Guard against pathological allocations from a bad dpi/size config.
const MAX_DIM: u32 = 16_384;

/// Parse `svg` and rasterize it at `scale` pixels per document unit.
///
/// Text resolves through `opts` (see [`crate::render::fonts::FontSet::options`]). The output is
/// straight (non-premultiplied) RGBA.
pub fn rasterize_svg(
    svg: &str,
    opts: &usvg::Options<'_>,
    scale: f32,
) -> CinetrendResult<image::RgbaImage> {
    let tree = usvg::Tree::from_str(svg, opts)
        .map_err(|e| CinetrendError::render(format!("parse chart svg: {e}")))?;
    rasterize_tree(&tree, scale)
}

/// Rasterize an already parsed tree at `scale` pixels per document unit.
pub fn rasterize_tree(tree: &usvg::Tree, scale: f32) -> CinetrendResult<image::RgbaImage> {
    let size = tree.size();
    let width = to_px(size.width() * scale)?;
    let height = to_px(size.height() * scale)?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| CinetrendError::render("failed to allocate chart pixmap"))?;
    resvg::render(
        tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    pixmap_to_image(pixmap)
}

fn to_px(v: f32) -> CinetrendResult<u32> {
    if !v.is_finite() || v <= 0.0 {
        return Err(CinetrendError::render("svg has invalid width/height"));
    }
    let px = (v.round() as u32).max(1);
    if px > MAX_DIM {
        return Err(CinetrendError::render(format!(
            "raster size {px}px exceeds {MAX_DIM}px"
        )));
    }
    Ok(px)
}

/// Convert a premultiplied pixmap into a straight-alpha image.
fn pixmap_to_image(pixmap: resvg::tiny_skia::Pixmap) -> CinetrendResult<image::RgbaImage> {
    let (width, height) = (pixmap.width(), pixmap.height());
    let mut data = pixmap.take();
    demultiply_rgba8_in_place(&mut data);
    image::RgbaImage::from_raw(width, height, data)
        .ok_or_else(|| CinetrendError::render("pixmap byte len mismatch"))
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

/// Write `img` as an RGBA PNG stamped with `dpi`, creating the parent directory if needed.
pub fn write_png(path: &Path, img: &image::RgbaImage, dpi: u32) -> CinetrendResult<()> {
    encode_png(
        path,
        img.dimensions(),
        png::ColorType::Rgba,
        img.as_raw(),
        dpi,
    )
}

/// Write `img` as an RGB PNG stamped with `dpi`, dropping alpha.
pub fn write_rgb_png(path: &Path, img: &image::RgbImage, dpi: u32) -> CinetrendResult<()> {
    encode_png(
        path,
        img.dimensions(),
        png::ColorType::Rgb,
        img.as_raw(),
        dpi,
    )
}

// pHYs stores pixels per metre.
fn dpi_to_ppm(dpi: u32) -> u32 {
    (f64::from(dpi) / 0.0254).round() as u32
}

fn encode_png(
    path: &Path,
    (width, height): (u32, u32),
    color: png::ColorType,
    data: &[u8],
    dpi: u32,
) -> CinetrendResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let file = std::fs::File::create(path)
        .with_context(|| format!("create png '{}'", path.display()))?;

    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(color);
    encoder.set_depth(png::BitDepth::Eight);
    let ppm = dpi_to_ppm(dpi);
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: ppm,
        yppu: ppm,
        unit: png::Unit::Meter,
    }));

    let mut writer = encoder
        .write_header()
        .with_context(|| format!("write png header '{}'", path.display()))?;
    writer
        .write_image_data(data)
        .with_context(|| format!("write png '{}'", path.display()))?;
    writer
        .finish()
        .with_context(|| format!("finish png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
