use crate::{Result, SeriesSet};
use std::io::Write;

/// Write the raw, unaligned mapping as one JSON object: label to array, in
/// first-appearance order. Non-finite numbers become `null`.
pub fn write_json<W: Write>(series: &SeriesSet, mut out: W) -> Result<()> {
    serde_json::to_writer(&mut out, series)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scalar;
    use std::collections::BTreeMap;

    #[test]
    fn ragged_series_stay_unaligned() {
        let series: SeriesSet = [
            ("accuracy", vec![Scalar::Number(10.0), Scalar::Number(20.0)]),
            ("phase", vec![Scalar::Text("eval".into())]),
        ]
        .into_iter()
        .collect();

        let mut buf = Vec::new();
        write_json(&series, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "{\"accuracy\":[10.0,20.0],\"phase\":[\"eval\"]}\n");
    }

    #[test]
    fn output_reads_back_as_scalars() {
        let series: SeriesSet =
            [("v", vec![Scalar::Number(-1.5), Scalar::Text("x".into()), Scalar::Number(3.0)])].into_iter().collect();

        let mut buf = Vec::new();
        write_json(&series, &mut buf).unwrap();
        let back: BTreeMap<String, Vec<Scalar>> = serde_json::from_slice(&buf).unwrap();

        assert_eq!(back["v"], series.get("v").unwrap().values);
    }
}
