use crate::{Cell, Result, Table};
use std::io::Write;

/// Write `table` as CSV: a header row of labels, then one record per row.
///
/// Missing cells are empty fields. Quoting is left to the `csv` writer, which
/// only quotes fields that need it.
pub fn write_csv<W: Write>(table: &Table, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(&table.labels)?;

    for row in &table.rows {
        writer.write_record(row.iter().map(field))?;
    }
    writer.flush()?;
    Ok(())
}

fn field(cell: &Cell) -> String {
    match cell {
        Cell::Missing => String::new(),
        Cell::Value(value) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Scalar, SeriesSet, align};

    fn to_string(table: &Table) -> String {
        let mut buf = Vec::new();
        write_csv(table, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn missing_cells_are_empty_fields() {
        let series: SeriesSet = [
            ("a", vec![Scalar::Number(1.0), Scalar::Number(2.0)]),
            ("b", vec![Scalar::Number(3.5)]),
        ]
        .into_iter()
        .collect();

        assert_eq!(to_string(&align(&series)), "a,b\n1.0,3.5\n2.0,\n");
    }

    #[test]
    fn text_fields_are_quoted_when_needed() {
        let series: SeriesSet =
            [("note", vec![Scalar::Text("plain".into()), Scalar::Text("a,b".into()), Scalar::Text("say \"hi\"".into())])]
                .into_iter()
                .collect();

        assert_eq!(to_string(&align(&series)), "note\nplain\n\"a,b\"\n\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn empty_table_writes_header_only() {
        assert_eq!(to_string(&Table { labels: vec!["x".into()], rows: vec![] }), "x\n");
    }
}
