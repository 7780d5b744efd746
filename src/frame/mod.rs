//! In-memory tabular data with named, typed columns.
//!
//! A [`DataFrame`] stores columns in insertion order. Every column has the same
//! number of rows. Numeric columns mark missing entries with `NaN`; text and
//! datetime columns use `None`.
//!
//! # Example
//!
//! ```rust
//! use tail_imputer::frame::{Column, DataFrame, DataType};
//!
//! let df = DataFrame::new()
//!     .with_column("age", Column::numeric(vec![20.0, f64::NAN, 23.0]))
//!     .unwrap()
//!     .with_column("city", Column::text(vec![Some("London"), None, Some("Bristol")]))
//!     .unwrap();
//!
//! assert_eq!(df.shape(), (3, 2));
//! assert_eq!(df.column("age").unwrap().data_type(), DataType::Numeric);
//! assert_eq!(df.null_count(), 2);
//! ```

pub mod csv;

use crate::preprocessing::error::PreprocessingError;
use std::fmt;

/// Semantic type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// Floating point values; `NaN` marks a missing entry.
    Numeric,
    /// Free-form strings.
    Text,
    /// Timestamps as seconds since the Unix epoch.
    Datetime,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Numeric => write!(f, "numeric"),
            DataType::Text => write!(f, "text"),
            DataType::Datetime => write!(f, "datetime"),
        }
    }
}

/// A single typed column.
#[derive(Debug, Clone)]
pub enum Column {
    /// Dense `f64` values. Missing entries are `NaN`.
    Numeric(Vec<f64>),
    /// Optional strings.
    Text(Vec<Option<String>>),
    /// Optional epoch seconds.
    Datetime(Vec<Option<i64>>),
}

impl Column {
    /// Creates a numeric column.
    pub fn numeric(values: Vec<f64>) -> Self {
        Column::Numeric(values)
    }

    /// Creates a text column from anything string-like.
    pub fn text<S: Into<String>>(values: Vec<Option<S>>) -> Self {
        Column::Text(values.into_iter().map(|v| v.map(Into::into)).collect())
    }

    /// Creates a datetime column.
    pub fn datetime(values: Vec<Option<i64>>) -> Self {
        Column::Datetime(values)
    }

    /// Returns the semantic type of this column.
    pub fn data_type(&self) -> DataType {
        match self {
            Column::Numeric(_) => DataType::Numeric,
            Column::Text(_) => DataType::Text,
            Column::Datetime(_) => DataType::Datetime,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Text(v) => v.len(),
            Column::Datetime(v) => v.len(),
        }
    }

    /// Returns `true` if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of missing entries.
    pub fn null_count(&self) -> usize {
        match self {
            Column::Numeric(v) => v.iter().filter(|x| x.is_nan()).count(),
            Column::Text(v) => v.iter().filter(|x| x.is_none()).count(),
            Column::Datetime(v) => v.iter().filter(|x| x.is_none()).count(),
        }
    }

    /// Returns the raw numeric values, or `None` for non-numeric columns.
    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            Column::Numeric(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the finite numeric values in row order. `NaN` and `±inf` are skipped.
    pub fn valid_numeric_values(&self) -> Option<Vec<f64>> {
        self.as_numeric()
            .map(|v| v.iter().copied().filter(|x| x.is_finite()).collect())
    }

    /// Returns the text value at `idx`, if this is a text column and the entry is present.
    pub fn text_at(&self, idx: usize) -> Option<&str> {
        match self {
            Column::Text(v) => v.get(idx).and_then(|s| s.as_deref()),
            _ => None,
        }
    }
}

/// Missing-aware equality: two `NaN` entries in the same position compare equal.
impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Column::Numeric(a), Column::Numeric(b)) => {
                a.len() == b.len()
                    && a
                        .iter()
                        .zip(b.iter())
                        .all(|(x, y)| (x.is_nan() && y.is_nan()) || x == y)
            }
            (Column::Text(a), Column::Text(b)) => a == b,
            (Column::Datetime(a), Column::Datetime(b)) => a == b,
            _ => false,
        }
    }
}

/// Column-major table with named columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataFrame {
    names: Vec<String>,
    columns: Vec<Column>,
    n_rows: usize,
}

impl DataFrame {
    /// Creates an empty frame with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a named column.
    ///
    /// # Errors
    /// - [`PreprocessingError::DimensionMismatch`] if the column length differs
    ///   from the existing row count.
    /// - [`PreprocessingError::InvalidParameter`] if the name is already taken.
    pub fn add_column(
        &mut self,
        name: impl Into<String>,
        column: Column,
    ) -> Result<(), PreprocessingError> {
        let name = name.into();
        if self.names.contains(&name) {
            return Err(PreprocessingError::InvalidParameter(format!(
                "duplicate column name '{name}'"
            )));
        }
        if self.columns.is_empty() {
            self.n_rows = column.len();
        } else if column.len() != self.n_rows {
            return Err(PreprocessingError::DimensionMismatch {
                expected: self.n_rows,
                got: column.len(),
            });
        }
        self.names.push(name);
        self.columns.push(column);
        Ok(())
    }

    /// Builder form of [`add_column`](Self::add_column).
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        column: Column,
    ) -> Result<Self, PreprocessingError> {
        self.add_column(name, column)?;
        Ok(self)
    }

    /// Replaces the column called `name`, keeping its position.
    pub fn replace_column(&mut self, name: &str, column: Column) -> Result<(), PreprocessingError> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| PreprocessingError::ColumnNotFound(name.to_string()))?;
        if column.len() != self.n_rows {
            return Err(PreprocessingError::DimensionMismatch {
                expected: self.n_rows,
                got: column.len(),
            });
        }
        self.columns[idx] = column;
        Ok(())
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the frame has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.column_index(name).map(|i| &self.columns[i])
    }

    /// Iterates `(name, column)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.names.iter().map(String::as_str).zip(self.columns.iter())
    }

    /// `(name, type)` for every column.
    pub fn schema(&self) -> Vec<(&str, DataType)> {
        self.iter().map(|(n, c)| (n, c.data_type())).collect()
    }

    /// Total missing entries across all columns.
    pub fn null_count(&self) -> usize {
        self.columns.iter().map(Column::null_count).sum()
    }

    /// Missing entries across the named columns. Unknown names count as zero.
    pub fn null_count_in(&self, names: &[&str]) -> usize {
        names
            .iter()
            .filter_map(|n| self.column(n))
            .map(Column::null_count)
            .sum()
    }

    /// Copies the named numeric columns into a row-major `ndarray` matrix.
    #[cfg(feature = "ndarray")]
    pub fn to_ndarray(&self, names: &[&str]) -> Result<ndarray::Array2<f64>, PreprocessingError> {
        let mut cols = Vec::with_capacity(names.len());
        for name in names {
            let col = self
                .column(name)
                .ok_or_else(|| PreprocessingError::ColumnNotFound(name.to_string()))?;
            let values = col.as_numeric().ok_or_else(|| PreprocessingError::NonNumericColumn {
                column: name.to_string(),
                dtype: col.data_type(),
            })?;
            cols.push(values);
        }
        Ok(ndarray::Array2::from_shape_fn((self.n_rows, names.len()), |(r, c)| cols[c][r]))
    }
}
