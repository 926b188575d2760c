use extractnum::{Pattern, ScanMetrics, SeriesSet};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Print what a verbose scan saw to stderr.
pub fn print_scan(source: &str, patterns: &[Pattern], series: &SeriesSet, metrics: &ScanMetrics, color: bool) {
    let palette = ansi::Palette::new(color);
    eprintln!("\n{}", palette.bold(palette.paint(format!("⚙  Scanning: {source}"), ansi::CYAN)));

    eprintln!("\n{}", palette.paint("━━━ Patterns ━━━", ansi::GRAY));
    for (pattern, stats) in patterns.iter().zip(&metrics.patterns) {
        eprintln!(
            "  {} {} {}",
            palette.paint(format!("[{}]", pattern.mode()), ansi::GRAY),
            palette.paint(&stats.source, ansi::BLUE),
            palette.dim(format!("-> {}", stats.expanded)),
        );
        eprintln!(
            "      {}",
            if stats.hits > 0 {
                palette.paint(format!("✓ {} lines", stats.hits), ansi::GREEN)
            } else {
                palette.dim("✗ never matched")
            }
        );
    }

    eprintln!("\n{}", palette.paint("━━━ Lines ━━━", ansi::GRAY));
    eprintln!(
        "  Read: {}  │  Skipped: {}  │  Matched: {}",
        palette.paint(metrics.lines_read.to_string(), ansi::GREEN),
        palette.dim(metrics.lines_skipped.to_string()),
        palette.paint(metrics.lines_matched.to_string(), ansi::CYAN),
    );

    eprintln!("\n{}", palette.paint("━━━ Series ━━━", ansi::GRAY));
    for (stats, s) in metrics.labels.iter().zip(series) {
        let preview: Vec<String> = s.values.iter().take(5).map(ToString::to_string).collect();
        let more = if s.len() > 5 { format!(" … +{}", s.len() - 5) } else { String::new() };
        eprintln!(
            "  {} {} {}",
            palette.bold(palette.paint(&stats.label, ansi::GREEN)),
            palette.dim(format!("({} values)", stats.kept)),
            palette.dim(format!("[{}{}]", preview.join(", "), more)),
        );
        if stats.dropped > 0 {
            eprintln!("      {}", palette.paint(format!("{} dropped by --limit", stats.dropped), ansi::YELLOW));
        }
    }

    eprintln!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    eprintln!("  Scan: {}", palette.paint(format!("{:?}", metrics.elapsed), ansi::GREEN));
    eprintln!();
}
