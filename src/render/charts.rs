//! Chart markup builders.
//!
//! Charts are laid out in points (72 per inch) on a canvas of the configured inch size, styled
//! as a white-grid statistical figure, and returned as SVG markup for [`crate::render::raster`].

use crate::data::model::YearLabel;
use crate::foundation::config::ChartConfig;
use crate::foundation::error::{CinetrendError, CinetrendResult};
use crate::render::axis::{LinearScale, Tick, XAxis, padded_bounds, value_ticks};
use crate::render::palette::{Rgb, tab20, viridis};
use crate::render::svg::{Anchor, SvgDoc, TextStyle};
use crate::stats::aggregate::{TopFilms, YearGenreMatrix};

const TITLE_PT: f32 = 12.0;
const LABEL_PT: f32 = 10.0;
const TICK_PT: f32 = 9.0;
// Average advance of a sans-serif glyph, in ems. Only used to reserve margins.
const CHAR_EM: f32 = 0.56;
const PAD: f32 = 6.0;

const TEXT: Rgb = Rgb([0x26, 0x26, 0x26]);
const GRID: Rgb = Rgb([0xcc, 0xcc, 0xcc]);
const DEEP_BLUE: Rgb = Rgb([0x4c, 0x72, 0xb0]);
const GREEN: Rgb = Rgb([0x00, 0x80, 0x00]);

const MAX_TITLE_CHARS: usize = 40;
const Y_TICKS: usize = 6;
const X_LABELS: usize = 12;

/// Title and axis captions of one chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartLabels {
    pub title: String,
    pub x: String,
    pub y: String,
}

impl ChartLabels {
    pub fn new(title: impl Into<String>, x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn films_per_year() -> Self {
        Self::new("Total Films Produced Per Year", "Year", "Number of Films")
    }

    pub fn genre_trends() -> Self {
        Self::new("Genre Trends Over Time", "Year", "Number of Films")
    }

    pub fn box_office() -> Self {
        Self::new(
            "Box Office Revenue Trends",
            "Year",
            "Box Office Revenue (£)",
        )
    }

    pub fn top_films(n: usize) -> Self {
        Self::new(
            format!("Top {n} Grossing Films"),
            "Box Office Revenue (£)",
            "Film Title",
        )
    }
}

/// Line plus point markers over year labels, e.g. films per year or gross per year.
pub fn line_chart(
    cfg: &ChartConfig,
    series: &[(YearLabel, f64)],
    color: Rgb,
    labels: &ChartLabels,
) -> CinetrendResult<String> {
    if series.is_empty() {
        return Err(no_data(labels));
    }
    let values: Vec<f64> = series.iter().map(|(_, v)| *v).collect();
    let years: Vec<YearLabel> = series.iter().map(|(y, _)| y.clone()).collect();

    let (min, max) = min_max(&values);
    let y_domain = padded_bounds(min, max, 0.05);
    let y_ticks = value_ticks(y_domain, Y_TICKS)?;
    let x_axis = XAxis::for_years(&years, 0.05)?;

    let (w, h) = canvas_pt(cfg);
    let area = PlotArea::fit(w, h, &tick_labels(&y_ticks), 0.0);
    let mut doc = SvgDoc::new(w, h);
    doc.rect(0.0, 0.0, w, h, Rgb::WHITE, None);

    let xs = LinearScale::new(x_axis.domain(), (area.left, area.right));
    let ys = LinearScale::new(y_domain, (area.bottom, area.top));
    draw_x_grid(&mut doc, &area, &xs, &x_axis.ticks(X_LABELS));
    draw_y_grid(&mut doc, &area, &ys, &y_ticks);

    let points: Vec<(f32, f32)> = years
        .iter()
        .zip(&values)
        .enumerate()
        .map(|(i, (year, v))| (xs.map(x_axis.value_of(i, year)), ys.map(*v)))
        .collect();
    doc.polyline(&points, color, 1.5);
    for &(x, y) in &points {
        doc.circle(x, y, 3.0, color, Some((Rgb::WHITE, 0.75)));
    }

    draw_chrome(&mut doc, &area, labels);
    Ok(doc.finish())
}

/// Chart 1: number of films per year.
pub fn films_per_year_chart(
    cfg: &ChartConfig,
    counts: &[(YearLabel, usize)],
) -> CinetrendResult<String> {
    let series: Vec<(YearLabel, f64)> = counts
        .iter()
        .map(|(y, n)| (y.clone(), *n as f64))
        .collect();
    line_chart(cfg, &series, DEEP_BLUE, &ChartLabels::films_per_year())
}

/// Chart 3: summed gross per year, in green.
pub fn box_office_chart(cfg: &ChartConfig, gross: &[(YearLabel, f64)]) -> CinetrendResult<String> {
    line_chart(cfg, gross, GREEN, &ChartLabels::box_office())
}

/// Chart 2: one stacked, half-transparent area per genre with a legend right of the axes.
///
/// Layer `k` spans from the sum of layers `0..k` to the sum of layers `0..=k`, so the top edge of
/// the last layer is the year's total.
pub fn genre_trends_chart(cfg: &ChartConfig, matrix: &YearGenreMatrix) -> CinetrendResult<String> {
    let labels = ChartLabels::genre_trends();
    if matrix.is_empty() {
        return Err(no_data(&labels));
    }
    let years = matrix.years();
    let genres = matrix.genres();
    let colors = tab20(genres.len());

    let totals: Vec<f64> = (0..years.len())
        .map(|y| matrix.row(y).iter().sum::<usize>() as f64)
        .collect();
    let (_, max_total) = min_max(&totals);
    let y_domain = (0.0, if max_total > 0.0 { max_total * 1.05 } else { 1.0 });
    let y_ticks = value_ticks(y_domain, Y_TICKS)?;
    let x_axis = XAxis::for_years(years, 0.0)?;

    let legend = Legend::new(genres);
    let (w, h) = canvas_pt(cfg);
    let area = PlotArea::fit(w, h, &tick_labels(&y_ticks), legend.width + PAD * 2.0);
    let mut doc = SvgDoc::new(w, h);
    doc.rect(0.0, 0.0, w, h, Rgb::WHITE, None);

    let xs = LinearScale::new(x_axis.domain(), (area.left, area.right));
    let ys = LinearScale::new(y_domain, (area.bottom, area.top));
    draw_x_grid(&mut doc, &area, &xs, &x_axis.ticks(X_LABELS));
    draw_y_grid(&mut doc, &area, &ys, &y_ticks);

    let x_px: Vec<f32> = years
        .iter()
        .enumerate()
        .map(|(i, y)| xs.map(x_axis.value_of(i, y)))
        .collect();
    let mut lower = vec![0usize; years.len()];
    for (k, color) in colors.iter().enumerate() {
        let upper: Vec<usize> = lower
            .iter()
            .zip(matrix.column(k))
            .map(|(lo, n)| lo + n)
            .collect();

        let top_edge: Vec<(f32, f32)> = x_px
            .iter()
            .zip(&upper)
            .map(|(&x, &v)| (x, ys.map(v as f64)))
            .collect();
        let mut outline = top_edge.clone();
        outline.extend(
            x_px.iter()
                .zip(&lower)
                .rev()
                .map(|(&x, &v)| (x, ys.map(v as f64))),
        );
        doc.polygon(&outline, *color, 0.5);
        doc.polyline(&top_edge, *color, 1.0);
        lower = upper;
    }

    draw_chrome(&mut doc, &area, &labels);
    legend.draw(&mut doc, area.right + PAD * 2.0, area.top, genres, &colors);
    Ok(doc.finish())
}

/// Chart 4: horizontal bars in ranking order, highest at the top.
pub fn top_films_chart(cfg: &ChartConfig, top: &TopFilms, top_n: usize) -> CinetrendResult<String> {
    let labels = ChartLabels::top_films(top_n);
    if top.is_empty() {
        return Err(no_data(&labels));
    }
    let titles: Vec<String> = top.iter().map(|(t, _)| truncate(t, MAX_TITLE_CHARS)).collect();
    let values: Vec<f64> = top.iter().map(|(_, g)| *g).collect();
    let colors = viridis(top.len());

    let (min, max) = min_max(&values);
    let lo = min.min(0.0);
    let hi = max.max(0.0);
    let x_domain = if hi - lo > 0.0 {
        (lo * 1.05, hi * 1.05)
    } else {
        (0.0, 1.0)
    };
    let x_ticks = value_ticks(x_domain, Y_TICKS)?;

    let (w, h) = canvas_pt(cfg);
    let area = PlotArea::fit(w, h, &titles, 0.0);
    let mut doc = SvgDoc::new(w, h);
    doc.rect(0.0, 0.0, w, h, Rgb::WHITE, None);

    let xs = LinearScale::new(x_domain, (area.left, area.right));
    draw_x_grid(&mut doc, &area, &xs, &x_ticks);

    let band = area.height() / top.len() as f32;
    let zero = xs.map(0.0);
    let tick = TextStyle::new(TICK_PT, TEXT).anchor(Anchor::End);
    for (i, ((title, v), color)) in titles.iter().zip(&values).zip(&colors).enumerate() {
        let y0 = area.top + band * i as f32;
        let x_end = xs.map(*v);
        let (x, bar_w) = if x_end >= zero {
            (zero, x_end - zero)
        } else {
            (x_end, zero - x_end)
        };
        doc.rect(x, y0 + band * 0.1, bar_w, band * 0.8, *color, None);
        let cy = y0 + band * 0.5;
        doc.text(area.left - PAD, cy + TICK_PT * 0.35, title, tick);
    }

    draw_chrome(&mut doc, &area, &labels);
    Ok(doc.finish())
}

fn no_data(labels: &ChartLabels) -> CinetrendError {
    CinetrendError::render(format!("chart '{}' has no data to plot", labels.title))
}

fn canvas_pt(cfg: &ChartConfig) -> (f32, f32) {
    (cfg.width_in * 72.0, cfg.height_in * 72.0)
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

fn text_width(s: &str, size: f32) -> f32 {
    s.chars().count() as f32 * size * CHAR_EM
}

fn tick_labels(ticks: &[Tick]) -> Vec<String> {
    ticks.iter().map(|t| t.label.clone()).collect()
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}

/// Axes rectangle inside the canvas, in points.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PlotArea {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
}

impl PlotArea {
    /// Reserve room for the title, axis captions and the widest y tick label.
    fn fit(w: f32, h: f32, y_labels: &[String], extra_right: f32) -> Self {
        let widest = y_labels
            .iter()
            .map(|l| text_width(l, TICK_PT))
            .fold(0.0f32, f32::max);
        let left = PAD * 2.0 + LABEL_PT * 1.2 + PAD + widest + PAD;
        let top = PAD * 2.0 + TITLE_PT * 1.2 + PAD;
        let bottom = h - (PAD * 2.0 + LABEL_PT * 1.2 + PAD + TICK_PT * 1.2 + PAD);
        let right = w - PAD * 2.0 - extra_right;
        Self {
            left: left.min(w * 0.6),
            top,
            right: right.max(left.min(w * 0.6) + 1.0),
            bottom: bottom.max(top + 1.0),
        }
    }

    fn width(&self) -> f32 {
        self.right - self.left
    }

    fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

fn draw_x_grid(doc: &mut SvgDoc, area: &PlotArea, xs: &LinearScale, ticks: &[Tick]) {
    let style = TextStyle::new(TICK_PT, TEXT).anchor(Anchor::Middle);
    for t in ticks.iter().filter(|t| xs.contains(t.value)) {
        let x = xs.map(t.value);
        doc.line(x, area.top, x, area.bottom, GRID, 0.8);
        doc.text(x, area.bottom + PAD + TICK_PT, &t.label, style);
    }
}

fn draw_y_grid(doc: &mut SvgDoc, area: &PlotArea, ys: &LinearScale, ticks: &[Tick]) {
    let style = TextStyle::new(TICK_PT, TEXT).anchor(Anchor::End);
    for t in ticks.iter().filter(|t| ys.contains(t.value)) {
        let y = ys.map(t.value);
        doc.line(area.left, y, area.right, y, GRID, 0.8);
        doc.text(area.left - PAD, y + TICK_PT * 0.35, &t.label, style);
    }
}

/// Axes outline, title and both axis captions.
fn draw_chrome(doc: &mut SvgDoc, area: &PlotArea, labels: &ChartLabels) {
    doc.frame(
        area.left,
        area.top,
        area.width(),
        area.height(),
        GRID,
        1.0,
    );

    let cx = area.left + area.width() / 2.0;
    doc.text(
        cx,
        PAD * 2.0 + TITLE_PT,
        &labels.title,
        TextStyle::new(TITLE_PT, TEXT).anchor(Anchor::Middle),
    );
    doc.text(
        cx,
        doc.height() - PAD * 2.0,
        &labels.x,
        TextStyle::new(LABEL_PT, TEXT).anchor(Anchor::Middle),
    );
    let cy = area.top + area.height() / 2.0;
    let x = PAD * 2.0 + LABEL_PT;
    doc.text(
        x,
        cy,
        &labels.y,
        TextStyle::new(LABEL_PT, TEXT)
            .anchor(Anchor::Middle)
            .rotate(-90.0),
    );
}

/// Swatch-and-name legend box.
struct Legend {
    width: f32,
}

const SWATCH: f32 = 10.0;
const ROW: f32 = TICK_PT * 1.6;

impl Legend {
    fn new(names: &[String]) -> Self {
        let widest = names
            .iter()
            .map(|n| text_width(n, TICK_PT))
            .fold(0.0f32, f32::max);
        Self {
            width: PAD + SWATCH + PAD + widest + PAD,
        }
    }

    fn draw(&self, doc: &mut SvgDoc, x: f32, y: f32, names: &[String], colors: &[Rgb]) {
        let height = PAD + ROW * names.len() as f32 + PAD / 2.0;
        doc.rect(x, y, self.width, height, Rgb::WHITE, Some((GRID, 0.8)));
        let style = TextStyle::new(TICK_PT, TEXT);
        for (i, (name, color)) in names.iter().zip(colors).enumerate() {
            let row_y = y + PAD + ROW * i as f32;
            doc.rect(x + PAD, row_y, SWATCH, SWATCH * 0.7, *color, None);
            doc.text(
                x + PAD + SWATCH + PAD,
                row_y + SWATCH * 0.7,
                name,
                style,
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/charts.rs"]
mod tests;
