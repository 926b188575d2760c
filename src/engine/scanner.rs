//! The single sequential pass over the input.
//!
//! The scanner is fed one raw line at a time and owns the growing
//! [`SeriesSet`] until [`Scanner::finish`] hands it over. Lines are never
//! revisited, so any `Iterator` of lines (or a `BufRead`) can drive it.
//!
//! Per line:
//!
//! ```text
//! index < offset ?  -> skip (not normalized, not matched)
//! normalize(line)
//! for pattern in declaration order:
//!     first match only
//!     for each named group that took part in the match:
//!         coerce -> push_bounded(limit)
//! ```

use super::coerce::coerce;
use super::metrics::{PatternStats, ScanMetrics};
use super::normalize::normalize;
use crate::{Error, Options, Pattern, Result, SeriesSet};
use std::time::Instant;
use tracing::trace;

pub(crate) struct Scanner<'p> {
    patterns: &'p [Pattern],
    offset: usize,
    limit: usize,
    series: SeriesSet,
    metrics: ScanMetrics,
    started: Instant,
}

impl<'p> Scanner<'p> {
    pub fn new(patterns: &'p [Pattern], options: &Options) -> Self {
        let metrics = ScanMetrics {
            patterns: patterns
                .iter()
                .map(|p| PatternStats { source: p.source().to_string(), expanded: p.expanded().to_string(), hits: 0 })
                .collect(),
            ..ScanMetrics::default()
        };

        Scanner {
            patterns,
            offset: options.offset,
            limit: options.limit,
            series: SeriesSet::new(),
            metrics,
            started: Instant::now(),
        }
    }

    pub fn feed(&mut self, raw: &str) {
        let index = self.metrics.lines_read;
        self.metrics.lines_read += 1;

        if index < self.offset {
            self.metrics.lines_skipped += 1;
            return;
        }

        let line = normalize(raw);
        let patterns = self.patterns;
        let mut matched = false;

        for (pattern_idx, pattern) in patterns.iter().enumerate() {
            let Some(caps) = pattern.regex().captures(&line) else {
                continue;
            };
            matched = true;
            self.metrics.patterns[pattern_idx].hits += 1;

            for label in pattern.labels() {
                // Groups on an untaken alternation branch have nothing to record.
                let Some(m) = caps.name(label) else {
                    continue;
                };
                let kept = self.series.entry(label).push_bounded(coerce(m.as_str()), self.limit);
                let stats = self.metrics.label_mut(label);
                if kept {
                    stats.kept += 1;
                } else {
                    stats.dropped += 1;
                }
            }
        }

        if matched {
            self.metrics.lines_matched += 1;
            trace!(index, "matched: {}", line);
        }
    }

    /// End the scan. Fails with [`Error::NoMatch`] when nothing was captured.
    pub fn finish(mut self) -> Result<(SeriesSet, ScanMetrics)> {
        self.metrics.elapsed = self.started.elapsed();
        if self.series.has_no_values() {
            return Err(Error::NoMatch);
        }
        Ok((self.series, self.metrics))
    }
}
