//! Text table renderers.
//!
//! Two renderers sit behind [`TableRenderer`]:
//!
//! - [`RichTable`]: a row-index column plus right-aligned columns, missing
//!   cells shown as `NaN`. Layout is done by `tabled`.
//! - [`PlainTable`]: tab-separated, missing cells shown as `nan`. Useful when
//!   the output is fed to other tools.
//!
//! ```text
//! RichTable                 PlainTable
//!    accuracy  loss         accuracy<TAB>loss
//! 0      10.0   1.0         10.0<TAB>1.0
//! 1      20.0   NaN         20.0<TAB>nan
//! ```

use crate::{Cell, Table};
use std::fmt;
use std::str::FromStr;
use tabled::builder::Builder;
use tabled::settings::object::{Columns, Segment};
use tabled::settings::{Alignment, Modify, Padding, Style};

pub trait TableRenderer {
    /// Render `table` without a trailing newline.
    fn render(&self, table: &Table) -> String;
}

/// Which [`TableRenderer`] text outputs use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    #[default]
    Rich,
    Plain,
}

impl TableStyle {
    pub fn renderer(self) -> Box<dyn TableRenderer> {
        match self {
            TableStyle::Rich => Box::new(RichTable),
            TableStyle::Plain => Box::new(PlainTable),
        }
    }
}

impl FromStr for TableStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rich" => Ok(TableStyle::Rich),
            "plain" => Ok(TableStyle::Plain),
            other => Err(format!("unknown table style '{other}' (expected 'rich' or 'plain')")),
        }
    }
}

impl fmt::Display for TableStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableStyle::Rich => f.write_str("rich"),
            TableStyle::Plain => f.write_str("plain"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RichTable;

impl TableRenderer for RichTable {
    fn render(&self, table: &Table) -> String {
        let mut builder = Builder::default();
        builder.push_record(std::iter::once(String::new()).chain(table.labels.iter().cloned()));
        for (i, row) in table.rows.iter().enumerate() {
            builder.push_record(std::iter::once(i.to_string()).chain(row.iter().map(|c| cell_text(c, "NaN"))));
        }

        // Column widths are terminal cells, not bytes.
        let mut rendered = builder.build();
        rendered
            .with(Style::empty())
            .with(Modify::new(Segment::all()).with(Padding::zero()))
            .with(Modify::new(Segment::all()).with(Alignment::right()))
            .with(Modify::new(Columns::first()).with(Alignment::left()))
            .with(Modify::new(Columns::new(1..)).with(Padding::new(2, 0, 0, 0)));
        rendered.to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTable;

impl TableRenderer for PlainTable {
    fn render(&self, table: &Table) -> String {
        let mut lines = vec![table.labels.join("\t")];
        lines.extend(
            table.rows.iter().map(|row| row.iter().map(|c| cell_text(c, "nan")).collect::<Vec<_>>().join("\t")),
        );
        lines.join("\n")
    }
}

fn cell_text(cell: &Cell, missing: &str) -> String {
    match cell {
        Cell::Value(v) => v.to_string(),
        Cell::Missing => missing.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Scalar, SeriesSet, align};
    use unicode_width::UnicodeWidthStr;

    fn table() -> Table {
        let series: SeriesSet = [
            ("accuracy", vec![Scalar::Number(10.0), Scalar::Number(20.0)]),
            ("loss", vec![Scalar::Number(1.0)]),
        ]
        .into_iter()
        .collect();
        align(&series)
    }

    #[test]
    fn rich_aligns_columns_right() {
        let text = RichTable.render(&table());
        assert_eq!(text, "   accuracy  loss\n0      10.0   1.0\n1      20.0   NaN");
    }

    #[test]
    fn plain_is_tab_separated() {
        let text = PlainTable.render(&table());
        assert_eq!(text, "accuracy\tloss\n10.0\t1.0\n20.0\tnan");
    }

    #[test]
    fn rich_index_column_grows() {
        let series: SeriesSet = [("v", (0..11).map(|i| Scalar::Number(i as f64)).collect::<Vec<_>>())].into_iter().collect();
        let text = RichTable.render(&align(&series));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "       v");
        assert_eq!(lines[1], "0    0.0");
        assert_eq!(lines[11], "10  10.0");
    }

    #[test]
    fn rich_measures_wide_labels_in_terminal_cells() {
        let series: SeriesSet =
            [("准确率", vec![Scalar::Number(0.5)]), ("loss", vec![Scalar::Number(1.0)])].into_iter().collect();
        let text = RichTable.render(&align(&series));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines, vec!["   准确率  loss", "0     0.5   1.0"]);
        assert_eq!(lines[0].width(), lines[1].width());
    }

    #[test]
    fn style_parses_and_selects_renderer() {
        assert_eq!("plain".parse::<TableStyle>().unwrap(), TableStyle::Plain);
        assert_eq!("Rich".parse::<TableStyle>().unwrap(), TableStyle::Rich);
        assert!("fancy".parse::<TableStyle>().is_err());
        assert_eq!(TableStyle::Plain.renderer().render(&table()), PlainTable.render(&table()));
    }
}
