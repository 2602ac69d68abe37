//! Sampled tables: one column per exposed node, one row per sample.

use std::io::{self, Write};

use serde::Serialize;

use crate::samples::Samples;

/// Column-major table of floating point samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleTable {
    columns: Vec<String>,
    data: Vec<Samples>,
    n_rows: usize,
}

impl SampleTable {
    /// Build from `(name, values)` columns. Every column has `n_rows` values.
    pub fn from_columns<'a>(
        n_rows: usize,
        columns: impl IntoIterator<Item = (&'a str, &'a Samples)>,
    ) -> Self {
        let (names, data): (Vec<String>, Vec<Samples>) = columns
            .into_iter()
            .map(|(name, values)| {
                debug_assert_eq!(values.len(), n_rows, "column {name} has wrong length");
                (name.to_string(), values.clone())
            })
            .unzip();
        Self {
            columns: names,
            data,
            n_rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|i| self.data[i].as_slice())
    }

    /// Values of sample `index` across all columns.
    pub fn row(&self, index: usize) -> Option<Vec<f64>> {
        (index < self.n_rows).then(|| self.data.iter().map(|c| c.as_slice()[index]).collect())
    }

    /// Write as CSV: a header with a leading empty index cell, then one line
    /// per sample prefixed by its index.
    pub fn to_csv<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for name in &self.columns {
            write!(writer, ",{}", csv_field(name))?;
        }
        writeln!(writer)?;
        for row in 0..self.n_rows {
            write!(writer, "{row}")?;
            for column in &self.data {
                write!(writer, ",{}", column.as_slice()[row])?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}

/// Quote a header cell when it contains CSV metacharacters.
fn csv_field(name: &str) -> String {
    if name.contains(&[',', '"', '\n'][..]) {
        format!("\"{}\"", name.replace('"', "\"\""))
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SampleTable {
        let x = Samples::new(vec![1.0, 2.0]);
        let y = Samples::new(vec![0.5, -1.0]);
        SampleTable::from_columns(2, [("X", &x), ("Y", &y)])
    }

    #[test]
    fn columns_rows_and_shape() {
        let table = table();
        assert_eq!(table.shape(), (2, 2));
        assert_eq!(table.column("Y"), Some(&[0.5, -1.0][..]));
        assert_eq!(table.column("Z"), None);
        assert_eq!(table.row(1), Some(vec![2.0, -1.0]));
        assert_eq!(table.row(2), None);
    }

    #[test]
    fn csv_has_index_column() {
        let mut out = Vec::new();
        table().to_csv(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ",X,Y\n0,1,0.5\n1,2,-1\n");
    }

    #[test]
    fn header_cells_with_commas_are_quoted() {
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("plain"), "plain");
    }
}
