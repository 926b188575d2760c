//! # extractnum
//!
//! Pull named number series out of unstructured, line-oriented logs.
//!
//! A run has two halves:
//!
//! ```text
//! patterns ── compile_patterns ──┐
//!                                v
//! lines ───────────────────── extract ──> SeriesSet ── route ──┬─> chart (smooth)
//!                                                              └─> table (align)
//! ```
//!
//! Patterns use a placeholder syntax (`"acc: {accuracy}"`) or raw regexes with
//! named groups. Every named group becomes a label; every match appends one
//! value to that label's series.
//!
//! ```
//! use extractnum::{Options, PatternMode, Scalar, compile_patterns, extract};
//!
//! let patterns = compile_patterns(&["acc: {accuracy}"], PatternMode::Plain, extractnum::DEFAULT_PLACEHOLDER).unwrap();
//! let lines = ["epoch 1 acc: 0.5", "epoch 2 acc: 0.75"];
//! let series = extract(lines, &patterns, &Options::default()).unwrap();
//!
//! assert_eq!(series.get("accuracy").unwrap().values, vec![Scalar::Number(0.5), Scalar::Number(0.75)]);
//! ```

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
pub mod output;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

pub use api::{Options, ScanReport, compile_patterns, extract, extract_reader, extract_verbose};
pub use engine::{
    Cell, DEFAULT_PLACEHOLDER, LabelStats, Pattern, PatternMode, PatternStats, ScanMetrics, Table, align, coerce,
    normalize, smooth,
};
pub use error::{Error, Result};

// --- Core types ----------------------------------------------------------------

/// A single captured value.
///
/// Coercion happens once per token: anything that parses as a float is a
/// `Number`, everything else is kept verbatim as `Text`. One label may mix both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Text(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug keeps the trailing `.0` on integral floats (`10.0`, not `10`).
            Scalar::Number(n) => write!(f, "{n:?}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// One label and the values captured for it, in order of appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub values: Vec<Scalar>,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Series { label: label.into(), values: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Append `value` unless the series already holds `limit` values
    /// (`0` means unbounded). Returns whether the value was kept.
    pub fn push_bounded(&mut self, value: Scalar, limit: usize) -> bool {
        if limit != 0 && self.values.len() >= limit {
            return false;
        }
        self.values.push(value);
        true
    }
}

/// Insertion-ordered mapping from label to [`Series`].
///
/// Labels keep the order in which they were first seen in the input, which is
/// also the column order of aligned tables and the key order of JSON output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSet {
    series: Vec<Series>,
    index: HashMap<String, usize>,
}

impl SeriesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// True when no label holds a value.
    pub fn has_no_values(&self) -> bool {
        self.series.iter().all(Series::is_empty)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.label.as_str())
    }

    pub fn get(&self, label: &str) -> Option<&Series> {
        self.index.get(label).map(|&i| &self.series[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Series> {
        self.series.iter()
    }

    /// Series for `label`, created empty (at the end) when the label is new.
    pub fn entry(&mut self, label: &str) -> &mut Series {
        let idx = match self.index.get(label) {
            Some(&idx) => idx,
            None => {
                self.series.push(Series::new(label));
                let idx = self.series.len() - 1;
                self.index.insert(label.to_string(), idx);
                idx
            }
        };
        &mut self.series[idx]
    }

    /// Take `label` out of the set, keeping the order of the remaining labels.
    pub fn remove(&mut self, label: &str) -> Option<Series> {
        let idx = self.index.remove(label)?;
        let removed = self.series.remove(idx);
        for slot in self.index.values_mut() {
            if *slot > idx {
                *slot -= 1;
            }
        }
        Some(removed)
    }
}

impl<'a> IntoIterator for &'a SeriesSet {
    type Item = &'a Series;
    type IntoIter = std::slice::Iter<'a, Series>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}

impl<L: Into<String>> FromIterator<(L, Vec<Scalar>)> for SeriesSet {
    fn from_iter<I: IntoIterator<Item = (L, Vec<Scalar>)>>(iter: I) -> Self {
        let mut set = SeriesSet::new();
        for (label, values) in iter {
            let label = label.into();
            set.entry(&label).values.extend(values);
        }
        set
    }
}

impl Serialize for SeriesSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.series.len()))?;
        for series in &self.series {
            map.serialize_entry(&series.label, &series.values)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(values: &[f64]) -> Vec<Scalar> {
        values.iter().copied().map(Scalar::Number).collect()
    }

    #[test]
    fn entry_keeps_first_insertion_order() {
        let mut set = SeriesSet::new();
        set.entry("loss").values.push(Scalar::Number(1.0));
        set.entry("acc").values.push(Scalar::Number(0.5));
        set.entry("loss").values.push(Scalar::Number(0.5));

        assert_eq!(set.labels().collect::<Vec<_>>(), vec!["loss", "acc"]);
        assert_eq!(set.get("loss").unwrap().len(), 2);
    }

    #[test]
    fn remove_reindexes_remaining_labels() {
        let mut set: SeriesSet =
            [("a", numbers(&[1.0])), ("b", numbers(&[2.0])), ("c", numbers(&[3.0]))].into_iter().collect();

        let removed = set.remove("a").unwrap();
        assert_eq!(removed.values, numbers(&[1.0]));
        assert_eq!(set.labels().collect::<Vec<_>>(), vec!["b", "c"]);
        assert_eq!(set.get("c").unwrap().values, numbers(&[3.0]));
        assert!(set.remove("a").is_none());
    }

    #[test]
    fn push_bounded_respects_limit() {
        let mut series = Series::new("x");
        assert!(series.push_bounded(Scalar::Number(1.0), 1));
        assert!(!series.push_bounded(Scalar::Number(2.0), 1));
        assert_eq!(series.len(), 1);

        let mut unbounded = Series::new("y");
        for i in 0..10 {
            assert!(unbounded.push_bounded(Scalar::Number(i as f64), 0));
        }
        assert_eq!(unbounded.len(), 10);
    }

    #[test]
    fn display_keeps_float_shape() {
        assert_eq!(Scalar::Number(10.0).to_string(), "10.0");
        assert_eq!(Scalar::Number(-0.25).to_string(), "-0.25");
        assert_eq!(Scalar::Text("n/a".into()).to_string(), "n/a");
    }

    #[test]
    fn serializes_as_ordered_json_object() {
        let set: SeriesSet =
            [("z", numbers(&[1.0, 2.0])), ("a", vec![Scalar::Text("x".into())])].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"z":[1.0,2.0],"a":["x"]}"#);
    }
}
