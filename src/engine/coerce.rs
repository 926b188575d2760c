use crate::Scalar;

/// Classify a captured token as a number or opaque text.
///
/// Anything `f64::from_str` accepts is a number (`"3"`, `"-0.5"`, `"+1e-3"`,
/// `"2."`, `".5"`); everything else, including the empty capture a permissive
/// placeholder can produce, is kept verbatim.
pub fn coerce(token: &str) -> Scalar {
    match token.parse::<f64>() {
        Ok(value) => Scalar::Number(value),
        Err(_) => Scalar::Text(token.to_string()),
    }
}
