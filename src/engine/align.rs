//! Alignment of ragged series into a rectangular table.
//!
//! ```text
//! a: [1, 2, 3]          a    b
//! b: [1]          ->    1    1
//!                       2    -
//!                       3    -
//! ```
//!
//! Columns follow the label order of the [`SeriesSet`]; shorter series are
//! padded on the right with [`Cell::Missing`]. The row count is the length of
//! the longest series, never more.

use crate::{Scalar, SeriesSet};

/// One table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Value(Scalar),
    Missing,
}

impl Cell {
    pub fn value(&self) -> Option<&Scalar> {
        match self {
            Cell::Value(v) => Some(v),
            Cell::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

/// Aligned rows. Every row has exactly `labels.len()` cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub labels: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn width(&self) -> usize {
        self.labels.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Build the ragged-union table of `series`.
pub fn align(series: &SeriesSet) -> Table {
    let labels: Vec<String> = series.labels().map(str::to_string).collect();
    let mut rows = Vec::new();

    for i in 0.. {
        let mut exhausted = true;
        let row: Vec<Cell> = series
            .iter()
            .map(|s| match s.values.get(i) {
                Some(v) => {
                    exhausted = false;
                    Cell::Value(v.clone())
                }
                None => Cell::Missing,
            })
            .collect();

        if exhausted {
            break;
        }
        rows.push(row);
    }

    Table { labels, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set(columns: &[(&str, &[f64])]) -> SeriesSet {
        columns
            .iter()
            .map(|(label, values)| (*label, values.iter().copied().map(Scalar::Number).collect::<Vec<_>>()))
            .collect()
    }

    #[test]
    fn pads_short_series_with_missing() {
        let table = align(&set(&[("a", &[1.0, 2.0, 3.0]), ("b", &[1.0])]));

        assert_eq!(table.labels, vec!["a", "b"]);
        assert_eq!(table.height(), 3);
        assert_eq!(table.rows[0], vec![Cell::Value(Scalar::Number(1.0)), Cell::Value(Scalar::Number(1.0))]);
        assert_eq!(table.rows[1], vec![Cell::Value(Scalar::Number(2.0)), Cell::Missing]);
        assert_eq!(table.rows[2], vec![Cell::Value(Scalar::Number(3.0)), Cell::Missing]);
    }

    #[test]
    fn shorter_first_column_is_padded_too() {
        let table = align(&set(&[("b", &[5.0]), ("a", &[1.0, 2.0])]));
        assert_eq!(table.labels, vec!["b", "a"]);
        assert_eq!(table.rows[1], vec![Cell::Missing, Cell::Value(Scalar::Number(2.0))]);
    }

    #[test]
    fn empty_set_has_no_rows() {
        let table = align(&SeriesSet::new());
        assert_eq!(table.width(), 0);
        assert_eq!(table.height(), 0);
    }

    #[test]
    fn keeps_mixed_scalars() {
        let series: SeriesSet =
            [("phase", vec![Scalar::Text("warmup".into()), Scalar::Number(1.0)])].into_iter().collect();
        let table = align(&series);
        assert_eq!(table.rows[0][0].value(), Some(&Scalar::Text("warmup".into())));
    }

    proptest! {
        #[test]
        fn shape_follows_longest_series(lens in prop::collection::vec(0usize..12, 1..6)) {
            let series: SeriesSet = lens
                .iter()
                .enumerate()
                .map(|(i, &n)| (format!("s{i}"), (0..n).map(|v| Scalar::Number(v as f64)).collect::<Vec<_>>()))
                .collect();
            let table = align(&series);

            prop_assert_eq!(table.height(), lens.iter().copied().max().unwrap_or(0));
            for row in &table.rows {
                prop_assert_eq!(row.len(), lens.len());
                prop_assert!(row.iter().any(|c| !c.is_missing()));
            }
            for (col, &n) in lens.iter().enumerate() {
                for (i, row) in table.rows.iter().enumerate() {
                    prop_assert_eq!(row[col].is_missing(), i >= n);
                }
            }
        }
    }
}
