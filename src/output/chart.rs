//! Chart planning.
//!
//! Turning a [`SeriesSet`] into something drawable means deciding the X
//! coordinates of every series and smoothing the Y values. Drawing itself is
//! behind [`ChartSink`].
//!
//! ## X pairing
//!
//! - With an x label, that series is removed and reused as X for every
//!   remaining series. X shorter than a series is an error; X longer is cut to
//!   the series length, for that series only.
//! - Without one, X is `0, 1, 2, …` sized per series.
//!
//! Cells where X or Y is not a number cannot be placed and are dropped.

use super::svg::render_svg;
use super::terminal::render_text_chart;
use crate::{Error, Result, Scalar, Series, SeriesSet, smooth};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// One drawable line.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Everything a chart sink needs to draw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartPlan {
    /// Name of the X axis when a label was used for it.
    pub x_label: Option<String>,
    pub series: Vec<ChartSeries>,
}

impl ChartPlan {
    /// `(min, max)` over all points, or `None` for an empty plan.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let mut points = self.series.iter().flat_map(|s| s.x.iter().copied().zip(s.y.iter().copied()));
        let (x0, y0) = points.next()?;
        let init = ((x0, x0), (y0, y0));
        Some(points.fold(init, |((xl, xh), (yl, yh)), (x, y)| ((xl.min(x), xh.max(x)), (yl.min(y), yh.max(y)))))
    }
}

/// A chart renderer: saves to a file or shows on a display surface.
pub trait ChartSink {
    /// Whether `extension` is a file format [`ChartSink::save`] can write.
    fn supports(&self, extension: &str) -> bool;

    fn save(&self, plan: &ChartPlan, path: &Path) -> Result<()>;

    fn display(&self, plan: &ChartPlan, out: &mut dyn Write) -> Result<()>;
}

/// The chart sink shipped with the crate.
///
/// Saves `svg` files and displays a character-grid chart on the terminal.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinChart {
    pub width: u32,
    pub height: u32,
    pub columns: usize,
    pub rows: usize,
}

impl Default for BuiltinChart {
    fn default() -> Self {
        BuiltinChart { width: 640, height: 480, columns: 72, rows: 20 }
    }
}

impl ChartSink for BuiltinChart {
    fn supports(&self, extension: &str) -> bool {
        extension.eq_ignore_ascii_case("svg")
    }

    fn save(&self, plan: &ChartPlan, path: &Path) -> Result<()> {
        fs::write(path, render_svg(plan, self.width, self.height))?;
        Ok(())
    }

    fn display(&self, plan: &ChartPlan, out: &mut dyn Write) -> Result<()> {
        out.write_all(render_text_chart(plan, self.columns, self.rows).as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Pair every series with its X values and smooth the Y values by `weight`.
pub fn plan_chart(mut series: SeriesSet, x_label: Option<&str>, weight: f64) -> Result<ChartPlan> {
    let x = match x_label {
        Some(label) => Some(series.remove(label).ok_or_else(|| Error::LabelNotFound { label: label.to_string() })?),
        None => None,
    };

    let mut plan = ChartPlan { x_label: x_label.map(str::to_string), series: Vec::new() };

    for s in &series {
        let xs: Vec<Option<f64>> = match &x {
            Some(x) => {
                if x.len() < s.len() {
                    return Err(Error::LengthMismatch { x_len: x.len(), label: s.label.clone(), len: s.len() });
                }
                x.values[..s.len()].iter().map(Scalar::as_number).collect()
            }
            None => (0..s.len()).map(|i| Some(i as f64)).collect(),
        };

        let Some(line) = numeric_points(s, &xs) else {
            continue;
        };
        let y = smooth(&line.y, weight)?;
        plan.series.push(ChartSeries { y, ..line });
    }

    if plan.series.is_empty() {
        warn!("nothing to plot");
    }
    debug!("chart plan: {} series, smoothing weight {}", plan.series.len(), weight);
    Ok(plan)
}

/// Keep the points where both coordinates are numbers. `None` when no point
/// survives.
fn numeric_points(series: &Series, xs: &[Option<f64>]) -> Option<ChartSeries> {
    let (x, y): (Vec<f64>, Vec<f64>) =
        xs.iter().zip(&series.values).filter_map(|(x, y)| Some(((*x)?, y.as_number()?))).unzip();

    let dropped = series.len() - y.len();
    if dropped > 0 {
        warn!("'{}': {} non-numeric point(s) left out of the chart", series.label, dropped);
    }
    if y.is_empty() {
        return None;
    }
    Some(ChartSeries { label: series.label.clone(), x, y })
}
