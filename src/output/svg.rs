//! Minimal SVG line chart: axes with min/max ticks, one polyline per series,
//! a legend in the top-right corner.

use super::ChartPlan;

const PALETTE: [&str; 8] = ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f"];

const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 48.0;

pub fn render_svg(plan: &ChartPlan, width: u32, height: u32) -> String {
    let (w, h) = (f64::from(width), f64::from(height));
    let (left, top) = (MARGIN_LEFT, MARGIN_TOP);
    let (right, bottom) = ((w - MARGIN_RIGHT).max(left + 1.0), (h - MARGIN_BOTTOM).max(top + 1.0));

    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
    ));
    out.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
    out.push_str(&format!(
        "<rect x=\"{left}\" y=\"{top}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"#333\"/>\n",
        right - left,
        bottom - top
    ));

    if let Some(((x_lo, x_hi), (y_lo, y_hi))) = plan.bounds() {
        let (x_lo, x_hi) = padded(x_lo, x_hi);
        let (y_lo, y_hi) = padded(y_lo, y_hi);
        let px = |x: f64| left + (x - x_lo) / (x_hi - x_lo) * (right - left);
        let py = |y: f64| bottom - (y - y_lo) / (y_hi - y_lo) * (bottom - top);

        // Ticks at the ends of each axis.
        out.push_str("<g font-family=\"sans-serif\" font-size=\"11\" fill=\"#333\">\n");
        out.push_str(&format!("<text x=\"{left}\" y=\"{}\" text-anchor=\"start\">{}</text>\n", bottom + 16.0, tick(x_lo)));
        out.push_str(&format!("<text x=\"{right}\" y=\"{}\" text-anchor=\"end\">{}</text>\n", bottom + 16.0, tick(x_hi)));
        out.push_str(&format!("<text x=\"{}\" y=\"{bottom}\" text-anchor=\"end\">{}</text>\n", left - 6.0, tick(y_lo)));
        out.push_str(&format!("<text x=\"{}\" y=\"{}\" text-anchor=\"end\">{}</text>\n", left - 6.0, top + 10.0, tick(y_hi)));
        if let Some(label) = &plan.x_label {
            out.push_str(&format!(
                "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\">{}</text>\n",
                (left + right) / 2.0,
                bottom + 36.0,
                escape(label)
            ));
        }
        out.push_str("</g>\n");

        for (i, series) in plan.series.iter().enumerate() {
            let points: Vec<String> =
                series.x.iter().zip(&series.y).map(|(&x, &y)| format!("{:.2},{:.2}", px(x), py(y))).collect();
            out.push_str(&format!(
                "<polyline fill=\"none\" stroke=\"{}\" stroke-width=\"1.5\" points=\"{}\"/>\n",
                PALETTE[i % PALETTE.len()],
                points.join(" ")
            ));
        }
    }

    // Legend
    out.push_str("<g font-family=\"sans-serif\" font-size=\"12\">\n");
    for (i, series) in plan.series.iter().enumerate() {
        let y = top + 16.0 + 16.0 * i as f64;
        let x = right - 120.0;
        out.push_str(&format!(
            "<line x1=\"{x}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"2\"/>\n",
            y - 4.0,
            x + 20.0,
            y - 4.0,
            PALETTE[i % PALETTE.len()]
        ));
        out.push_str(&format!("<text x=\"{}\" y=\"{y}\">{}</text>\n", x + 26.0, escape(&series.label)));
    }
    out.push_str("</g>\n</svg>\n");
    out
}

/// Widen a degenerate range so single-value axes still have extent.
pub(crate) fn padded(lo: f64, hi: f64) -> (f64, f64) {
    if hi > lo { (lo, hi) } else { (lo - 0.5, hi + 0.5) }
}

pub(crate) fn tick(value: f64) -> String {
    let rounded = format!("{value:.4}");
    rounded.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}
