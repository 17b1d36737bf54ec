use std::str::FromStr;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Driver-agnostic result of a statement execution.
///
/// Drivers render every column value to its text form; turning values back
/// into typed data is the job of the schema's decoder, working through
/// [`Row`] accessors.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ResultSet {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of rows in the result.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consume the result into decodable rows. Column names are shared
    /// across the rows rather than copied per row.
    pub fn into_rows(self) -> Vec<Row> {
        let columns: Arc<[String]> = self.columns.into();
        self.rows
            .into_iter()
            .map(|values| Row {
                columns: Arc::clone(&columns),
                values,
            })
            .collect()
    }
}

/// A single row of a result set. Values are stored in column order as
/// strings and looked up by column name.
#[derive(Debug, Clone)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<String>,
}

impl Row {
    /// Get the raw text value of a column.
    pub fn get(&self, name: &str) -> Result<&str> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|i| self.values[i].as_str())
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// Get a column value parsed into `T`. A parse failure surfaces as
    /// [`Error::Decode`] naming the column.
    pub fn parse<T>(&self, name: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.get(name)?.parse().map_err(|e: T::Err| Error::Decode {
            column: name.to_string(),
            message: e.to_string(),
        })
    }

    /// Column names of this row, in result order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}
