/// Compile a literal regex once and hand out a `&'static Regex`.
///
/// Only for patterns known at compile time; user patterns go through
/// [`crate::Pattern::compile`] so their errors can be reported.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}
