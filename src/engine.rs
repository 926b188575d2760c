//! Extraction and alignment engine.
//!
//! Everything with algorithmic content lives under `src/engine/`; the output
//! side (`crate::output`) only decides which of these pieces to run and where
//! the result goes.
//!
//! ## How the parts work together
//!
//! ```text
//! pattern text ── Pattern::compile ──┐   (pattern.rs)
//!                                    │
//! line ── normalize ─────────────────┼─> Scanner::feed      (normalize.rs, scanner.rs)
//!                                    │     - first match per pattern
//!                                    │     - coerce each named group   (coerce.rs)
//!                                    │     - bounded append per label
//!                                    v
//!                               SeriesSet
//!                                    │
//!                 ┌──────────────────┴──────────────────┐
//!                 v                                     v
//!           align (align.rs)                     smooth (smooth.rs)
//!           ragged -> Table                      EMA before charting
//! ```
//!
//! ## Responsibilities by module
//!
//! - `pattern.rs`: placeholder expansion and regex compilation.
//! - `normalize.rs`: whitespace folding applied once per line.
//! - `coerce.rs`: token to [`crate::Scalar`].
//! - `scanner.rs`: the single sequential pass over the input.
//! - `metrics.rs`: counters collected by the scanner for verbose runs.
//! - `align.rs`: ragged union of series into a rectangular [`Table`].
//! - `smooth.rs`: causal exponential moving average.

#[path = "engine/align.rs"]
mod align;
#[path = "engine/coerce.rs"]
mod coerce;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/normalize.rs"]
mod normalize;
#[path = "engine/pattern.rs"]
mod pattern;
#[path = "engine/scanner.rs"]
mod scanner;
#[path = "engine/smooth.rs"]
mod smooth;


pub use align::{Cell, Table, align};
pub use coerce::coerce;
pub use metrics::{LabelStats, PatternStats, ScanMetrics};
pub use normalize::normalize;
pub use pattern::{DEFAULT_PLACEHOLDER, Pattern, PatternMode};
pub(crate) use scanner::Scanner;
pub use smooth::smooth;
