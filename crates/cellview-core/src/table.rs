use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{CellviewError, Result};

/// One named column. Raw text is always kept; `numeric` is present when
/// every cell parses as a finite number.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<String>,
    pub numeric: Option<Vec<f64>>,
}

impl Column {
    /// Build a column from text cells, detecting numeric content.
    pub fn from_text<S: Into<String>>(name: &str, values: Vec<S>) -> Self {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        let numeric = values
            .iter()
            .map(|v| v.trim().parse::<f64>().ok().filter(|x| x.is_finite()))
            .collect::<Option<Vec<f64>>>();
        Self {
            name: name.to_string(),
            values,
            numeric,
        }
    }

    pub fn from_numbers(name: &str, values: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
            numeric: Some(values),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Per-well quantification results, one row per well.
#[derive(Clone, Debug, Default)]
pub struct QuantTable {
    columns: Vec<Column>,
    n_rows: usize,
}

impl QuantTable {
    /// All columns must have the same length.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let n_rows = columns.first().map_or(0, Column::len);
        if let Some(bad) = columns.iter().find(|c| c.len() != n_rows) {
            return Err(CellviewError::RaggedTable {
                column: bad.name.clone(),
                expected: n_rows,
                found: bad.len(),
            });
        }
        Ok(Self { columns, n_rows })
    }

    /// Read a headed CSV table. Cells are trimmed.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

        let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        for record in rdr.records() {
            let record = record?;
            for (col, field) in cells.iter_mut().zip(record.iter()) {
                col.push(field.to_string());
            }
        }

        let columns = headers
            .iter()
            .zip(cells)
            .map(|(name, values)| Column::from_text(name, values))
            .collect();
        let table = Self::new(columns)?;
        debug!(
            rows = table.n_rows(),
            columns = table.columns.len(),
            "Quantification table read"
        );
        Ok(table)
    }

    pub fn from_csv_path(path: &Path) -> Result<Self> {
        Self::from_csv_reader(File::open(path)?)
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| CellviewError::MissingColumn(name.to_string()))
    }

    /// Numeric values of `name`; fails if absent or not numeric.
    pub fn numeric(&self, name: &str) -> Result<&[f64]> {
        self.column(name)?
            .numeric
            .as_deref()
            .ok_or_else(|| CellviewError::NonNumericColumn(name.to_string()))
    }

    /// Fail with `MissingColumn` on the first absent name.
    pub fn require(&self, names: &[&str]) -> Result<()> {
        for name in names {
            self.column(name)?;
        }
        Ok(())
    }
}
