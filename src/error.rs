use crate::PatternMode;

/// Every way a run can fail.
///
/// All variants are fatal for a run: the binary prints the message and exits
/// with a non-zero status. Per-value coercion never produces an error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot parse the {mode} pattern '{pattern}': {source}")]
    PatternCompile {
        pattern: String,
        mode: PatternMode,
        #[source]
        source: regex::Error,
    },

    #[error("at least one pattern is required")]
    NoInputPattern,

    #[error("no value matched any pattern, please check the patterns against the input")]
    NoMatch,

    #[error("cannot find the label '{label}', check that one of the patterns contains {{{label}}}")]
    LabelNotFound { label: String },

    #[error("x array length ({x_len}) is shorter than the array '{label}' ({len})")]
    LengthMismatch { x_len: usize, label: String, len: usize },

    #[error("cannot smooth an empty series")]
    EmptySeries,

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_not_found_mentions_placeholder_syntax() {
        let err = Error::LabelNotFound { label: "step".to_string() };
        assert_eq!(
            err.to_string(),
            "cannot find the label 'step', check that one of the patterns contains {step}"
        );
    }

    #[test]
    fn compile_error_names_mode_and_pattern() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = Error::PatternCompile { pattern: "(".to_string(), mode: PatternMode::Regex, source };
        assert!(err.to_string().starts_with("cannot parse the regex pattern '('"));
    }
}
