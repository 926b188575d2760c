//! Output routing and sinks.
//!
//! The engine produces a [`crate::SeriesSet`]; this module decides where it
//! goes. The output hint (usually a file path) is classified into a
//! [`Target`], then exactly one sink runs:
//!
//! ```text
//! hint ── Target::classify ──┬─ Image   -> plan_chart (x pairing + smooth) -> ChartSink::save
//!                            ├─ Csv     -> align -> write_csv
//!                            ├─ Json    -> write_json (raw, unaligned)
//!                            ├─ Text    -> align -> TableRenderer -> file
//!                            ├─ Stdout  -> align -> TableRenderer -> stdout
//!                            └─ Display -> plan_chart -> ChartSink::display
//! ```
//!
//! Sinks are small seams: [`ChartSink`] for charts and [`TableRenderer`] for
//! text tables, so callers can swap in their own renderers.

#[path = "output/chart.rs"]
mod chart;
#[path = "output/csv.rs"]
mod csv;
#[path = "output/json.rs"]
mod json;
#[path = "output/router.rs"]
mod router;
#[path = "output/svg.rs"]
mod svg;
#[path = "output/table.rs"]
mod table;
#[path = "output/target.rs"]
mod target;
#[path = "output/terminal.rs"]
mod terminal;

pub use chart::{BuiltinChart, ChartPlan, ChartSeries, ChartSink, plan_chart};
pub use csv::write_csv;
pub use json::write_json;
pub use router::{RouteConfig, route, route_to};
pub use svg::render_svg;
pub use table::{PlainTable, RichTable, TableRenderer, TableStyle};
pub use target::{Target, extension};
pub use terminal::render_text_chart;
