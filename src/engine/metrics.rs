//! Scan metrics.
//!
//! Counters collected while scanning so verbose runs can explain *why* a
//! series came out the way it did (skipped lines, patterns that never hit,
//! values discarded by the per-label limit).
//!
//! Collection is cheap (a few integer bumps per line) and always on; the
//! binary only prints them with `--verbose`.

use std::time::Duration;

/// Counters for one extraction run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScanMetrics {
    /// Lines pulled from the input, including skipped ones.
    pub lines_read: usize,
    /// Lines skipped because their index was below the offset.
    pub lines_skipped: usize,
    /// Lines where at least one pattern matched.
    pub lines_matched: usize,
    /// One entry per pattern, in declaration order.
    pub patterns: Vec<PatternStats>,
    /// One entry per label, in first-appearance order.
    pub labels: Vec<LabelStats>,
    /// Wall time of the scan.
    pub elapsed: Duration,
}

/// How often a single pattern matched.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PatternStats {
    pub source: String,
    pub expanded: String,
    pub hits: usize,
}

/// Values kept and dropped for one label.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LabelStats {
    pub label: String,
    pub kept: usize,
    /// Captures discarded once the label reached the limit.
    pub dropped: usize,
}

impl ScanMetrics {
    pub(crate) fn label_mut(&mut self, label: &str) -> &mut LabelStats {
        let idx = match self.labels.iter().position(|s| s.label == label) {
            Some(idx) => idx,
            None => {
                self.labels.push(LabelStats { label: label.to_string(), ..LabelStats::default() });
                self.labels.len() - 1
            }
        };
        &mut self.labels[idx]
    }

    /// Total captures discarded by the per-label limit.
    pub fn dropped(&self) -> usize {
        self.labels.iter().map(|l| l.dropped).sum()
    }
}
