use image::RgbaImage;

use crate::foundation::error::{CinetrendError, CinetrendResult};
use crate::render::fonts::FontSet;
use crate::render::palette::Rgb;
use crate::render::raster::rasterize_tree;
use crate::render::svg::{SvgDoc, TextStyle};

/// One line of text rasterized and cropped to its ink bounds.
#[derive(Clone, Debug)]
pub struct TextBlock {
    image: RgbaImage,
}

impl TextBlock {
    /// Lay out `text` at `font_px` and crop the result to the glyphs' tight bounding box.
    ///
    /// Blank text yields an empty block. Text that resolves to no glyphs is a `Resource` error.
    pub fn render(text: &str, font_px: f32, color: Rgb, fonts: &FontSet) -> CinetrendResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self {
                image: RgbaImage::new(0, 0),
            });
        }

        // Oversized scratch canvas; the crop below removes the slack.
        let width = (text.chars().count() as f32 + 2.0) * font_px;
        let height = font_px * 3.0;
        let mut doc = SvgDoc::new(width, height);
        doc.text(font_px, font_px * 2.0, text, TextStyle::new(font_px, color));

        let tree = usvg::Tree::from_str(&doc.finish(), &fonts.options())
            .map_err(|e| CinetrendError::render(format!("parse text svg: {e}")))?;
        let Some(bbox) = first_text_bounds(tree.root()) else {
            return Err(CinetrendError::resource(format!(
                "no font could render text '{text}'"
            )));
        };

        let canvas = rasterize_tree(&tree, 1.0)?;
        let x0 = (bbox.left().floor().max(0.0) as u32).min(canvas.width());
        let y0 = (bbox.top().floor().max(0.0) as u32).min(canvas.height());
        let x1 = (bbox.right().ceil().max(0.0) as u32).clamp(x0, canvas.width());
        let y1 = (bbox.bottom().ceil().max(0.0) as u32).clamp(y0, canvas.height());
        let image = image::imageops::crop_imm(&canvas, x0, y0, x1 - x0, y1 - y0).to_image();
        Ok(Self { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

fn first_text_bounds(group: &usvg::Group) -> Option<usvg::Rect> {
    for child in group.children() {
        match child {
            usvg::Node::Group(g) => {
                if let Some(b) = first_text_bounds(g.as_ref()) {
                    return Some(b);
                }
            }
            usvg::Node::Text(t) => {
                let flat = t.flattened();
                if flat.has_children() {
                    return Some(flat.abs_bounding_box());
                }
            }
            usvg::Node::Path(_) | usvg::Node::Image(_) => {}
        }
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/compose/text.rs"]
mod tests;
