//! Character-grid chart for the terminal.
//!
//! ```text
//!     1 |*
//!       |  *  +
//!       |     *   +
//!     0 |+--------*
//!       +----------
//!        0        3
//!   * loss  + acc
//! ```
//!
//! Each series gets a marker; consecutive points are joined with the same
//! marker so sparse series still read as lines. Later series draw on top.

use super::ChartPlan;
use super::svg::{padded, tick};

const MARKERS: [char; 8] = ['*', '+', 'o', 'x', '#', '@', '%', '&'];

pub fn render_text_chart(plan: &ChartPlan, columns: usize, rows: usize) -> String {
    let (columns, rows) = (columns.max(2), rows.max(2));
    let Some(((x_lo, x_hi), (y_lo, y_hi))) = plan.bounds() else {
        return "(nothing to plot)\n".to_string();
    };
    let (x_lo, x_hi) = padded(x_lo, x_hi);
    let (y_lo, y_hi) = padded(y_lo, y_hi);

    let col = |x: f64| (((x - x_lo) / (x_hi - x_lo)) * (columns - 1) as f64).round() as usize;
    let row = |y: f64| (((y_hi - y) / (y_hi - y_lo)) * (rows - 1) as f64).round() as usize;

    let mut grid = vec![vec![' '; columns]; rows];
    for (i, series) in plan.series.iter().enumerate() {
        let marker = MARKERS[i % MARKERS.len()];
        let cells: Vec<(usize, usize)> = series.x.iter().zip(&series.y).map(|(&x, &y)| (col(x), row(y))).collect();

        for pair in cells.windows(2) {
            draw_segment(&mut grid, pair[0], pair[1], marker);
        }
        if let Some(&(c, r)) = cells.first() {
            grid[r][c] = marker;
        }
    }

    let top = tick(y_hi);
    let bottom = tick(y_lo);
    let gutter = top.len().max(bottom.len());

    let mut out = String::new();
    for (r, line) in grid.iter().enumerate() {
        let label = match r {
            0 => top.as_str(),
            r if r == rows - 1 => bottom.as_str(),
            _ => "",
        };
        let body: String = line.iter().collect();
        out.push_str(&format!("{label:>gutter$} |{}\n", body.trim_end()));
    }
    out.push_str(&format!("{:>gutter$} +{}\n", "", "-".repeat(columns)));

    let left = tick(x_lo);
    let right = tick(x_hi);
    let pad = columns.saturating_sub(left.len() + right.len());
    out.push_str(&format!("{:>gutter$}  {left}{}{right}\n", "", " ".repeat(pad)));
    if let Some(label) = &plan.x_label {
        out.push_str(&format!("{:>gutter$}  {label:^columns$}\n", ""));
    }

    let legend: Vec<String> =
        plan.series.iter().enumerate().map(|(i, s)| format!("{} {}", MARKERS[i % MARKERS.len()], s.label)).collect();
    out.push_str(&format!("{:>gutter$}  {}\n", "", legend.join("  ")));
    out
}

/// Fill the cells between two grid points (inclusive).
fn draw_segment(grid: &mut [Vec<char>], from: (usize, usize), to: (usize, usize), marker: char) {
    let (c0, r0) = (from.0 as i64, from.1 as i64);
    let (c1, r1) = (to.0 as i64, to.1 as i64);
    let steps = (c1 - c0).abs().max((r1 - r0).abs()).max(1);

    for step in 0..=steps {
        let c = c0 + (c1 - c0) * step / steps;
        let r = r0 + (r1 - r0) * step / steps;
        grid[r as usize][c as usize] = marker;
    }
}
