use crate::engine::Scanner;
use crate::{Error, Pattern, PatternMode, Result, ScanMetrics, SeriesSet};
use std::borrow::Cow;
use std::io::BufRead;
use tracing::{debug, warn};

/// Options that affect scanning.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Number of leading lines to skip entirely.
    pub offset: usize,
    /// Maximum number of values kept per label. `0` means no limit.
    pub limit: usize,
    /// Print the [`ScanReport`] and debug logs of the run.
    pub verbose: bool,
}

/// Result of [`extract_verbose`]: the series plus what the scan observed.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub series: SeriesSet,
    pub metrics: ScanMetrics,
}

/// Compile every pattern text with the same `mode` and `placeholder`.
///
/// Fails with [`Error::NoInputPattern`] on an empty list and with the first
/// [`Error::PatternCompile`] otherwise; nothing is scanned in either case.
pub fn compile_patterns<S: AsRef<str>>(texts: &[S], mode: PatternMode, placeholder: &str) -> Result<Vec<Pattern>> {
    if texts.is_empty() {
        return Err(Error::NoInputPattern);
    }

    let patterns: Vec<Pattern> =
        texts.iter().map(|t| Pattern::compile(t.as_ref(), mode, placeholder)).collect::<Result<_>>()?;

    for pattern in patterns.iter().filter(|p| !p.has_labels()) {
        debug!("pattern '{}' has no named group and will not produce values", pattern.source());
    }
    Ok(patterns)
}

/// Scan `lines` once and collect one series per named group.
///
/// # Example
/// ```
/// use extractnum::{Options, PatternMode, compile_patterns, extract};
///
/// let patterns = compile_patterns(&["loss: {loss}"], PatternMode::Plain, extractnum::DEFAULT_PLACEHOLDER).unwrap();
/// let series = extract(["loss: 1.0", "noise", "loss:   0.5"], &patterns, &Options::default()).unwrap();
/// assert_eq!(series.get("loss").unwrap().len(), 2);
/// ```
pub fn extract<I, S>(lines: I, patterns: &[Pattern], options: &Options) -> Result<SeriesSet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extract_verbose(lines, patterns, options).map(|report| report.series)
}

/// Like [`extract`], but also returns the [`ScanMetrics`] of the run.
pub fn extract_verbose<I, S>(lines: I, patterns: &[Pattern], options: &Options) -> Result<ScanReport>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scanner = Scanner::new(patterns, options);
    for line in lines {
        scanner.feed(line.as_ref());
    }
    finish(scanner)
}

/// Scan a buffered reader line by line. I/O failures abort the run.
///
/// Invalid UTF-8 is replaced with `U+FFFD` in the line it occurs in; the rest
/// of the input is unaffected.
pub fn extract_reader<R: BufRead>(mut reader: R, patterns: &[Pattern], options: &Options) -> Result<ScanReport> {
    let mut scanner = Scanner::new(patterns, options);
    let mut buf = Vec::new();
    for number in 1usize.. {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            warn!("invalid UTF-8 in line {number}, replaced");
        }
        let line = line.strip_suffix('\n').unwrap_or(&line);
        scanner.feed(line.strip_suffix('\r').unwrap_or(line));
    }
    finish(scanner)
}

fn finish(scanner: Scanner<'_>) -> Result<ScanReport> {
    let (series, metrics) = scanner.finish()?;
    debug!(
        "scanned {} lines ({} skipped, {} matched), {} labels",
        metrics.lines_read,
        metrics.lines_skipped,
        metrics.lines_matched,
        series.len()
    );
    Ok(ScanReport { series, metrics })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_PLACEHOLDER, Scalar};
    use std::io::Cursor;

    #[test]
    fn empty_pattern_list_is_rejected() {
        let texts: [&str; 0] = [];
        assert!(matches!(compile_patterns(&texts, PatternMode::Plain, DEFAULT_PLACEHOLDER), Err(Error::NoInputPattern)));
    }

    #[test]
    fn first_bad_pattern_aborts_compilation() {
        let err = compile_patterns(&[r"acc (?P<a>\d+)", "(", "[b"], PatternMode::Regex, DEFAULT_PLACEHOLDER).unwrap_err();
        assert!(matches!(err, Error::PatternCompile { ref pattern, .. } if pattern == "("));
    }

    #[test]
    fn reader_variant_matches_iterator_variant() {
        let patterns = compile_patterns(&["step {step}"], PatternMode::Plain, DEFAULT_PLACEHOLDER).unwrap();
        let text = "step 1\nstep 2\r\nother\nstep 3\n";

        let from_reader = extract_reader(Cursor::new(text), &patterns, &Options::default()).unwrap();
        let from_lines = extract(text.lines(), &patterns, &Options::default()).unwrap();

        assert_eq!(from_reader.series, from_lines);
        assert_eq!(from_reader.metrics.lines_read, 4);
        assert_eq!(
            from_lines.get("step").unwrap().values,
            vec![Scalar::Number(1.0), Scalar::Number(2.0), Scalar::Number(3.0)]
        );
    }

    #[test]
    fn invalid_utf8_only_affects_its_own_line() {
        let patterns = compile_patterns(&["acc: {acc}"], PatternMode::Plain, DEFAULT_PLACEHOLDER).unwrap();
        let input: &[u8] = b"acc: 1\n\xffacc: 2\r\nacc: 3";

        let report = extract_reader(input, &patterns, &Options::default()).unwrap();

        assert_eq!(
            report.series.get("acc").unwrap().values,
            vec![Scalar::Number(1.0), Scalar::Number(2.0), Scalar::Number(3.0)]
        );
        assert_eq!(report.metrics.lines_read, 3);
    }

    #[test]
    fn verbose_scan_reports_counts() {
        let patterns = compile_patterns(&["a={a}", "b={b}"], PatternMode::Plain, DEFAULT_PLACEHOLDER).unwrap();
        let lines = ["header a=9", "a=1 b=2", "a=3", "nothing"];
        let options = Options { offset: 1, limit: 1, verbose: true };

        let report = extract_verbose(lines, &patterns, &options).unwrap();
        let m = &report.metrics;

        assert_eq!(m.lines_read, 4);
        assert_eq!(m.lines_skipped, 1);
        assert_eq!(m.lines_matched, 2);
        assert_eq!(m.patterns.iter().map(|p| p.hits).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(m.labels[0].label, "a");
        assert_eq!((m.labels[0].kept, m.labels[0].dropped), (1, 1));
        assert_eq!(m.dropped(), 1);
    }
}
