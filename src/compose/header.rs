use image::RgbaImage;

use crate::compose::text::TextBlock;
use crate::foundation::config::HeaderConfig;
use crate::foundation::error::CinetrendResult;
use crate::render::fonts::FontSet;
use crate::render::palette::Rgb;

/// Where a text block landed on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

/// Alpha-blend the centred title and subtitle onto `canvas`.
///
/// The title sits at `title_top_px`; the subtitle starts `subtitle_gap_px` below the title's
/// measured height. Returns `[title, subtitle]` placements.
pub fn draw_header(
    canvas: &mut RgbaImage,
    cfg: &HeaderConfig,
    fonts: &FontSet,
) -> CinetrendResult<[Placement; 2]> {
    let color = Rgb(cfg.text_rgb);
    let title = TextBlock::render(&cfg.title, cfg.title_px, color, fonts)?;
    let subtitle = TextBlock::render(&cfg.subtitle, cfg.subtitle_px, color, fonts)?;

    let title_y = i64::from(cfg.title_top_px);
    let subtitle_y = title_y + i64::from(title.height()) + i64::from(cfg.subtitle_gap_px);

    let placed = [
        place(canvas, &title, title_y),
        place(canvas, &subtitle, subtitle_y),
    ];
    tracing::debug!(title = ?placed[0], subtitle = ?placed[1], "header drawn");
    Ok(placed)
}

fn place(canvas: &mut RgbaImage, block: &TextBlock, y: i64) -> Placement {
    let x = centered_x(canvas.width(), block.width());
    image::imageops::overlay(canvas, block.image(), x, y);
    Placement {
        x,
        y,
        width: block.width(),
        height: block.height(),
    }
}

/// Left edge that centres `inner` within `outer`; negative when the text is wider.
pub fn centered_x(outer: u32, inner: u32) -> i64 {
    (i64::from(outer) - i64::from(inner)) / 2
}

#[cfg(test)]
#[path = "../../tests/unit/compose/header.rs"]
mod tests;
