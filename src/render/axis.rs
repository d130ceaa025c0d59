use crate::data::model::YearLabel;
use crate::foundation::error::{CinetrendError, CinetrendResult};

// More ticks than this means the step no longer resolves the data range.
const MAX_TICKS: usize = 1_000;

/// Maps a data interval onto a pixel interval. The pixel interval may be reversed (y axes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, v: f64) -> f32 {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        let t = if span.abs() < f64::EPSILON {
            0.5
        } else {
            (v - d0) / span
        };
        self.range.0 + (t as f32) * (self.range.1 - self.range.0)
    }

    pub fn contains(&self, v: f64) -> bool {
        let (lo, hi) = ordered(self.domain);
        let eps = (hi - lo).abs() * 1e-9;
        v >= lo - eps && v <= hi + eps
    }
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Smallest 1/2/2.5/5 x 10^k step that splits `span` into at most `target` intervals.
pub fn nice_step(span: f64, target: usize) -> f64 {
    if !span.is_finite() || span <= 0.0 {
        return 1.0;
    }
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    for m in [1.0, 2.0, 2.5, 5.0, 10.0] {
        if m * mag >= raw * (1.0 - 1e-9) {
            return m * mag;
        }
    }
    10.0 * mag
}

/// Tick values at multiples of a nice step, inside `[lo, hi]`.
///
/// Fails with a `Render` error when the values are too large for the step to be representable,
/// e.g. a flat series near `1e17`.
pub fn nice_ticks(lo: f64, hi: f64, target: usize) -> CinetrendResult<Vec<f64>> {
    let (lo, hi) = ordered((lo, hi));
    let step = nice_step(hi - lo, target);
    ticks_with_step(lo, hi, step)
}

fn ticks_with_step(lo: f64, hi: f64, step: f64) -> CinetrendResult<Vec<f64>> {
    let eps = step * 1e-9;
    let first = (lo / step).ceil() * step;
    if !first.is_finite() || !hi.is_finite() || first + step == first {
        return Err(CinetrendError::render(format!(
            "axis step {step} cannot resolve values near {first}"
        )));
    }

    let span = hi + eps - first;
    let count = if span < 0.0 {
        0
    } else {
        (span / step).floor() as usize + 1
    };
    if count > MAX_TICKS {
        return Err(CinetrendError::render(format!(
            "axis [{lo}, {hi}] needs {count} ticks at step {step}"
        )));
    }

    Ok((0..count)
        .map(|i| {
            let v = first + i as f64 * step;
            // Rounding can leave the origin at -1e-17, which prints as "-0".
            if v.abs() < eps { 0.0 } else { v }
        })
        .collect())
}

/// Fewest decimals that print every multiple of `step` exactly.
pub fn decimals_for(step: f64) -> usize {
    for d in 0..=6 {
        let scaled = step * 10f64.powi(d as i32);
        if (scaled - scaled.round()).abs() < 1e-6 {
            return d;
        }
    }
    6
}

pub fn format_tick(v: f64, decimals: usize) -> String {
    format!("{v:.decimals$}")
}

/// Data bounds padded by `margin` of their span on each side.
/// A degenerate span widens to +/-1 around the value.
pub fn padded_bounds(min: f64, max: f64, margin: f64) -> (f64, f64) {
    let span = max - min;
    if span.abs() < f64::EPSILON {
        return (min - 1.0, max + 1.0);
    }
    (min - span * margin, max + span * margin)
}

/// A labelled tick on an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Value axis with nice ticks over padded bounds.
pub fn value_ticks(domain: (f64, f64), target: usize) -> CinetrendResult<Vec<Tick>> {
    let (lo, hi) = ordered(domain);
    let decimals = decimals_for(nice_step(hi - lo, target));
    Ok(nice_ticks(lo, hi, target)?
        .into_iter()
        .map(|value| Tick {
            value,
            label: format_tick(value, decimals),
        })
        .collect())
}

/// Horizontal axis over year labels.
///
/// When every label is numeric the axis is continuous in the year value; otherwise labels are
/// evenly spaced categories in table order.
#[derive(Clone, Debug, PartialEq)]
pub enum XAxis {
    Numeric { domain: (f64, f64), ticks: Vec<Tick> },
    Categorical { labels: Vec<String>, domain: (f64, f64) },
}

impl XAxis {
    /// `margin` is the fraction of the span left empty at either end (0 for area charts).
    pub fn for_years(years: &[YearLabel], margin: f64) -> CinetrendResult<Self> {
        let numbers: Option<Vec<i64>> = years.iter().map(YearLabel::as_number).collect();
        match numbers {
            Some(ns) if !ns.is_empty() => {
                let min = ns.iter().copied().min().unwrap_or_default() as f64;
                let max = ns.iter().copied().max().unwrap_or_default() as f64;
                let domain = if margin > 0.0 || min == max {
                    padded_bounds(min, max, margin)
                } else {
                    (min, max)
                };
                // Years are whole numbers; never tick between them.
                let step = nice_step(domain.1 - domain.0, 8).max(1.0).floor();
                let ticks = ticks_with_step(domain.0, domain.1, step)?
                    .into_iter()
                    .map(|value| Tick {
                        value,
                        label: format_tick(value, 0),
                    })
                    .collect();
                Ok(Self::Numeric { domain, ticks })
            }
            _ => {
                let n = years.len().max(1) as f64;
                Ok(Self::Categorical {
                    labels: years.iter().map(ToString::to_string).collect(),
                    domain: (-0.5, n - 0.5),
                })
            }
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        match self {
            Self::Numeric { domain, .. } | Self::Categorical { domain, .. } => *domain,
        }
    }

    /// Data-space position of the `idx`-th year.
    pub fn value_of(&self, idx: usize, year: &YearLabel) -> f64 {
        match (self, year.as_number()) {
            (Self::Numeric { .. }, Some(n)) => n as f64,
            _ => idx as f64,
        }
    }

    /// Ticks to draw; categorical axes thin labels out to at most `max_labels`.
    pub fn ticks(&self, max_labels: usize) -> Vec<Tick> {
        match self {
            Self::Numeric { ticks, .. } => ticks.clone(),
            Self::Categorical { labels, .. } => {
                let every = labels.len().div_ceil(max_labels.max(1)).max(1);
                labels
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| i % every == 0)
                    .map(|(i, l)| Tick {
                        value: i as f64,
                        label: l.clone(),
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/axis.rs"]
mod tests;
