use image::{Rgba, RgbaImage};

use crate::foundation::error::{CinetrendError, CinetrendResult};
use crate::render::palette::Rgb;

/// Arrange four equally sized images in a 2x2 grid under a `header_height` band.
///
/// Image 0 goes top-left, 1 top-right, 2 bottom-left and 3 bottom-right. The canvas is
/// `(2W, 2H + header_height)` and starts filled with `background`.
pub fn compose_grid(
    images: &[RgbaImage; 4],
    header_height: u32,
    background: Rgb,
) -> CinetrendResult<RgbaImage> {
    let (w, h) = images[0].dimensions();
    if let Some((idx, img)) = images
        .iter()
        .enumerate()
        .find(|(_, img)| img.dimensions() != (w, h))
    {
        return Err(CinetrendError::validation(format!(
            "chart {idx} is {}x{}, expected {w}x{h} like chart 0",
            img.width(),
            img.height()
        )));
    }

    let (cw, ch) = grid_size(w, h, header_height)?;
    let [r, g, b] = background.0;
    let mut canvas = RgbaImage::from_pixel(cw, ch, Rgba([r, g, b, 255]));

    for (idx, img) in images.iter().enumerate() {
        let (x, y) = cell_origin(idx, w, h, header_height);
        image::imageops::replace(&mut canvas, img, x as i64, y as i64);
    }
    Ok(canvas)
}

/// Top-left corner of grid cell `idx` in row-major order.
pub fn cell_origin(idx: usize, w: u32, h: u32, header_height: u32) -> (u32, u32) {
    let col = (idx % 2) as u32;
    let row = (idx / 2) as u32;
    (col * w, header_height + row * h)
}

fn grid_size(w: u32, h: u32, header_height: u32) -> CinetrendResult<(u32, u32)> {
    let cw = w.checked_mul(2);
    let ch = h.checked_mul(2).and_then(|v| v.checked_add(header_height));
    match (cw, ch) {
        (Some(cw), Some(ch)) if cw > 0 && ch > 0 => Ok((cw, ch)),
        _ => Err(CinetrendError::validation(format!(
            "cannot build a grid from {w}x{h} charts with a {header_height}px header"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/grid.rs"]
mod tests;
