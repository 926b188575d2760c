//! Pattern compilation.
//!
//! Two flavours of user pattern are supported:
//!
//! - **Plain**: literal text with `{label}` placeholders. The text is escaped
//!   and every placeholder becomes a named group around the placeholder regex:
//!
//!   ```text
//!   acc: {accuracy}   ->   acc: (?P<accuracy>[+-]?\d*(\.\d*)?)
//!   ```
//!
//! - **Regex**: compiled verbatim; the caller provides the named groups.
//!
//! Only named groups produce data. A compiled pattern without any named group
//! is accepted but never contributes a value.

use crate::{Error, Result};
use regex::Regex;
use std::fmt;
use tracing::debug;

/// Default placeholder regex: an optionally signed decimal number. The
/// fractional part may be empty (`"3."`).
pub const DEFAULT_PLACEHOLDER: &str = r"[+-]?\d*(\.\d*)?";

/// How pattern text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternMode {
    #[default]
    Plain,
    Regex,
}

impl fmt::Display for PatternMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternMode::Plain => f.write_str("plain"),
            PatternMode::Regex => f.write_str("regex"),
        }
    }
}

/// A compiled matcher plus the text it came from.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    mode: PatternMode,
    regex: Regex,
}

impl Pattern {
    /// Compile `text` according to `mode`.
    ///
    /// `placeholder` is only used in [`PatternMode::Plain`]; it is spliced in
    /// as-is, so it may itself contain (unnamed) groups.
    pub fn compile(text: &str, mode: PatternMode, placeholder: &str) -> Result<Self> {
        let expanded = match mode {
            PatternMode::Plain => expand_placeholders(text, placeholder),
            PatternMode::Regex => text.to_string(),
        };

        let regex = Regex::new(&expanded).map_err(|source| Error::PatternCompile {
            pattern: text.to_string(),
            mode,
            source,
        })?;
        debug!("Compile pattern: '{}' -> '{}'", text, regex.as_str());

        Ok(Pattern { source: text.to_string(), mode, regex })
    }

    /// The pattern text as the user wrote it.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn mode(&self) -> PatternMode {
        self.mode
    }

    /// The regex actually used for matching (after placeholder expansion).
    pub fn expanded(&self) -> &str {
        self.regex.as_str()
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Named groups in the order they appear in the pattern.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.regex.capture_names().flatten()
    }

    pub fn has_labels(&self) -> bool {
        self.labels().next().is_some()
    }
}

/// Escape literal text and turn each `{name}` into `(?P<name>placeholder)`.
///
/// `regex::escape` turns the braces into `\{` / `\}`, which is what gets
/// substituted. Anything inside the braces stays escaped, so a label that is
/// not a valid group name surfaces as a compile error.
fn expand_placeholders(text: &str, placeholder: &str) -> String {
    let closing = format!(">{placeholder})");
    regex::escape(text).replace(r"\{", "(?P<").replace(r"\}", &closing)
}
