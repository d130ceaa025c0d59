use std::fmt::Write as _;

use crate::render::palette::Rgb;

/// Horizontal anchor of a text run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Styling for one text run. `size` is in document units.
#[derive(Clone, Copy, Debug)]
pub struct TextStyle {
    pub size: f32,
    pub fill: Rgb,
    pub anchor: Anchor,
    /// Clockwise rotation in degrees about the anchor point.
    pub rotate: f32,
}

impl TextStyle {
    pub fn new(size: f32, fill: Rgb) -> Self {
        Self {
            size,
            fill,
            anchor: Anchor::Start,
            rotate: 0.0,
        }
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn rotate(mut self, degrees: f32) -> Self {
        self.rotate = degrees;
        self
    }
}

/// Append-only SVG document builder.
///
/// Coordinates are written with two decimals; the rasterizer scales the whole document, so units
/// are whatever the caller lays out in (points for charts, pixels for header text).
#[derive(Clone, Debug)]
pub struct SvgDoc {
    width: f32,
    height: f32,
    body: String,
}

impl SvgDoc {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, fill: Rgb, stroke: Option<(Rgb, f32)>) {
        let _ = write!(
            self.body,
            r#"<rect x="{x:.2}" y="{y:.2}" width="{:.2}" height="{:.2}" fill="{}"{}/>"#,
            w.max(0.0),
            h.max(0.0),
            fill.hex(),
            stroke_attrs(stroke)
        );
    }

    /// Unfilled rectangle outline.
    pub fn frame(&mut self, x: f32, y: f32, w: f32, h: f32, stroke: Rgb, width: f32) {
        let _ = write!(
            self.body,
            r#"<rect x="{x:.2}" y="{y:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="{}" stroke-width="{width:.2}"/>"#,
            w.max(0.0),
            h.max(0.0),
            stroke.hex()
        );
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, stroke: Rgb, width: f32) {
        let _ = write!(
            self.body,
            r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{}" stroke-width="{width:.2}" stroke-linecap="square"/>"#,
            stroke.hex()
        );
    }

    pub fn polyline(&mut self, points: &[(f32, f32)], stroke: Rgb, width: f32) {
        let _ = write!(
            self.body,
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{width:.2}" stroke-linejoin="round" stroke-linecap="round"/>"#,
            points_attr(points),
            stroke.hex()
        );
    }

    pub fn polygon(&mut self, points: &[(f32, f32)], fill: Rgb, opacity: f32) {
        let _ = write!(
            self.body,
            r#"<polygon points="{}" fill="{}" fill-opacity="{opacity:.3}" stroke="none"/>"#,
            points_attr(points),
            fill.hex()
        );
    }

    pub fn circle(&mut self, cx: f32, cy: f32, r: f32, fill: Rgb, stroke: Option<(Rgb, f32)>) {
        let _ = write!(
            self.body,
            r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="{}"{}/>"#,
            fill.hex(),
            stroke_attrs(stroke)
        );
    }

    pub fn text(&mut self, x: f32, y: f32, content: &str, style: TextStyle) {
        let mut attrs = format!(
            r#"x="{x:.2}" y="{y:.2}" font-family="sans-serif" font-size="{:.2}" fill="{}" text-anchor="{}""#,
            style.size,
            style.fill.hex(),
            style.anchor.as_str()
        );
        if style.rotate != 0.0 {
            let _ = write!(attrs, r#" transform="rotate({:.2} {x:.2} {y:.2})""#, style.rotate);
        }
        let _ = write!(self.body, "<text {attrs}>{}</text>", escape(content));
    }

    /// Close the document and return the markup.
    pub fn finish(self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.2}" height="{h:.2}" viewBox="0 0 {w:.2} {h:.2}">{}</svg>"#,
            self.body,
            w = self.width,
            h = self.height
        )
    }
}

fn stroke_attrs(stroke: Option<(Rgb, f32)>) -> String {
    match stroke {
        Some((color, width)) => format!(r#" stroke="{}" stroke-width="{width:.2}""#, color.hex()),
        None => String::new(),
    }
}

fn points_attr(points: &[(f32, f32)]) -> String {
    let mut out = String::with_capacity(points.len() * 16);
    for (i, (x, y)) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{x:.2},{y:.2}");
    }
    out
}

/// Escape text content for inclusion in XML.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
