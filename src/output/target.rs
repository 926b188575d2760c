use super::ChartSink;
use std::path::PathBuf;

/// Where a run's output goes, decided from the output hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Chart saved to a file in a format the chart sink can encode.
    Image(PathBuf),
    Csv(PathBuf),
    Json(PathBuf),
    /// Aligned text table written to a file.
    Text(PathBuf),
    /// Aligned text table printed to standard output.
    Stdout,
    /// Chart shown on the display surface instead of saved.
    Display,
}

impl Target {
    /// Classify `hint` by its extension.
    ///
    /// Precedence: chart formats first, then `csv`, `json`, `txt` and the
    /// `stdout` sentinel. Anything else, including no hint at all, is shown.
    pub fn classify(hint: Option<&str>, chart: &dyn ChartSink) -> Target {
        let Some(hint) = hint else {
            return Target::Display;
        };

        match extension(hint) {
            ext if chart.supports(ext) => Target::Image(PathBuf::from(hint)),
            "csv" => Target::Csv(PathBuf::from(hint)),
            "json" => Target::Json(PathBuf::from(hint)),
            "txt" => Target::Text(PathBuf::from(hint)),
            "stdout" => Target::Stdout,
            _ => Target::Display,
        }
    }
}

/// Text after the last `.`, or the whole hint when it has none.
///
/// `"run/log.csv"` gives `"csv"`, `"stdout"` gives `"stdout"`.
pub fn extension(hint: &str) -> &str {
    hint.rsplit_once('.').map_or(hint, |(_, ext)| ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::BuiltinChart;

    #[test]
    fn extension_cases() {
        assert_eq!(extension("out.csv"), "csv");
        assert_eq!(extension("a.b/c.tar.json"), "json");
        assert_eq!(extension("stdout"), "stdout");
        assert_eq!(extension("trailing."), "");
    }

    #[test]
    fn classify_by_extension() {
        let chart = BuiltinChart::default();
        let cases: Vec<(Option<&str>, Target)> = vec![
            (Some("plot.svg"), Target::Image(PathBuf::from("plot.svg"))),
            (Some("out.csv"), Target::Csv(PathBuf::from("out.csv"))),
            (Some("out.json"), Target::Json(PathBuf::from("out.json"))),
            (Some("table.txt"), Target::Text(PathBuf::from("table.txt"))),
            (Some("stdout"), Target::Stdout),
            (Some("report.stdout"), Target::Stdout),
            (Some("plot.unknown"), Target::Display),
            (Some("show"), Target::Display),
            (None, Target::Display),
        ];
        for (hint, expected) in cases {
            assert_eq!(Target::classify(hint, &chart), expected, "hint {hint:?}");
        }
    }

    #[test]
    fn chart_formats_take_precedence() {
        struct Everything;
        impl ChartSink for Everything {
            fn supports(&self, _extension: &str) -> bool {
                true
            }
            fn save(&self, _plan: &crate::output::ChartPlan, _path: &std::path::Path) -> crate::Result<()> {
                Ok(())
            }
            fn display(&self, _plan: &crate::output::ChartPlan, _out: &mut dyn std::io::Write) -> crate::Result<()> {
                Ok(())
            }
        }

        assert_eq!(Target::classify(Some("x.csv"), &Everything), Target::Image(PathBuf::from("x.csv")));
    }
}
