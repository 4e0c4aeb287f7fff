//! Named-column table for time-indexed model input.
//!
//! Purpose
//! -------
//! Provide a small, validated tabular container that the model layer reads
//! from: a date column, a response column, and optional regressor columns,
//! addressed by caller-supplied names. This is the dataframe primitive the
//! validation and field-derivation code is written against.
//!
//! Key behaviors
//! -------------
//! - [`TimeSeriesFrame`] stores columns in insertion order and enforces that
//!   every column has the same number of rows and a unique name.
//! - [`Column`] holds either numeric values (`Array1<f64>`), parsed
//!   timestamps, calendar dates, or raw text that may later be parsed as
//!   timestamps.
//!
//! Invariants & assumptions
//! ------------------------
//! - Column names are unique within a frame.
//! - All columns share the frame's row count; the first column added fixes it.
//! - The frame is never mutated by the model layer; validation and metadata
//!   extraction operate on borrowed views and produce new values.
//!
//! Conventions
//! -----------
//! - Row indices are 0-based and follow insertion order; no implicit
//!   re-indexing or sorting ever happens.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction (happy path, duplicate names, length
//!   mismatches) and typed column access.
use crate::models::errors::{DataError, DataResult};
use chrono::{NaiveDate, NaiveDateTime};
use ndarray::Array1;

/// A single named column of a [`TimeSeriesFrame`].
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Floating-point values (response, regressors).
    Numeric(Array1<f64>),
    /// Parsed timestamps.
    Timestamp(Vec<NaiveDateTime>),
    /// Calendar dates; interpreted as midnight when parsed.
    Date(Vec<NaiveDate>),
    /// Raw text, e.g. ISO-8601 date strings read from a file.
    Text(Vec<String>),
}

impl Column {
    /// Number of rows in the column.
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(values) => values.len(),
            Column::Timestamp(values) => values.len(),
            Column::Date(values) => values.len(),
            Column::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Numeric view of the column, if it is numeric.
    pub fn as_numeric(&self) -> Option<&Array1<f64>> {
        match self {
            Column::Numeric(values) => Some(values),
            _ => None,
        }
    }
}

impl From<Array1<f64>> for Column {
    fn from(values: Array1<f64>) -> Self {
        Column::Numeric(values)
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Column::Numeric(Array1::from(values))
    }
}

impl From<Vec<NaiveDateTime>> for Column {
    fn from(values: Vec<NaiveDateTime>) -> Self {
        Column::Timestamp(values)
    }
}

impl From<Vec<NaiveDate>> for Column {
    fn from(values: Vec<NaiveDate>) -> Self {
        Column::Date(values)
    }
}

impl From<Vec<String>> for Column {
    fn from(values: Vec<String>) -> Self {
        Column::Text(values)
    }
}

impl From<Vec<&str>> for Column {
    fn from(values: Vec<&str>) -> Self {
        Column::Text(values.into_iter().map(str::to_owned).collect())
    }
}

/// `TimeSeriesFrame`: ordered collection of equally long, uniquely named columns.
///
/// Fields
/// ------
/// - `columns`: `Vec<(String, Column)>`
///   Columns in insertion order.
/// - `n_rows`: `Option<usize>`
///   Shared row count; `None` until the first column is added.
///
/// Invariants
/// ----------
/// - No two columns share a name.
/// - Every column has exactly `n_rows` rows.
///
/// Performance
/// -----------
/// - Column lookup is a linear scan; frames carry a handful of columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeriesFrame {
    columns: Vec<(String, Column)>,
    n_rows: Option<usize>,
}

impl TimeSeriesFrame {
    /// Empty frame with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from `(name, column)` pairs.
    ///
    /// Errors
    /// ------
    /// - `DataError::DuplicateColumn` if a name repeats.
    /// - `DataError::ColumnLengthMismatch` if a column length differs from
    ///   the first column's.
    pub fn from_columns<I, S, C>(columns: I) -> DataResult<Self>
    where
        I: IntoIterator<Item = (S, C)>,
        S: Into<String>,
        C: Into<Column>,
    {
        columns.into_iter().try_fold(Self::new(), |frame, (name, column)| {
            frame.with_column(name, column)
        })
    }

    /// Add a column, consuming and returning the frame.
    ///
    /// Errors
    /// ------
    /// - `DataError::DuplicateColumn` if `name` already exists.
    /// - `DataError::ColumnLengthMismatch` if the length differs from the
    ///   frame's row count.
    pub fn with_column(
        mut self, name: impl Into<String>, column: impl Into<Column>,
    ) -> DataResult<Self> {
        self.insert(name, column)?;
        Ok(self)
    }

    /// Add a column in place. Same rules as [`TimeSeriesFrame::with_column`].
    pub fn insert(&mut self, name: impl Into<String>, column: impl Into<Column>) -> DataResult<()> {
        let name = name.into();
        let column = column.into();
        if self.has_column(&name) {
            return Err(DataError::DuplicateColumn { column: name });
        }
        match self.n_rows {
            Some(expected) if expected != column.len() => {
                return Err(DataError::ColumnLengthMismatch {
                    column: name,
                    expected,
                    actual: column.len(),
                });
            }
            Some(_) => {}
            None => self.n_rows = Some(column.len()),
        }
        self.columns.push((name, column));
        Ok(())
    }

    /// Number of rows (0 for a frame without columns).
    pub fn n_rows(&self) -> usize {
        self.n_rows.unwrap_or(0)
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Borrow a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|(col_name, _)| col_name == name).map(|(_, column)| column)
    }

    /// Borrow a column by name, failing with `DataError::MissingColumn`.
    pub fn require(&self, name: &str) -> DataResult<&Column> {
        self.column(name).ok_or_else(|| DataError::MissingColumn { column: name.to_string() })
    }

    /// Borrow a numeric column by name.
    ///
    /// Errors
    /// ------
    /// - `DataError::MissingColumn` if absent.
    /// - `DataError::NonNumericColumn` if present but not numeric.
    pub fn numeric(&self, name: &str) -> DataResult<&Array1<f64>> {
        self.require(name)?
            .as_numeric()
            .ok_or_else(|| DataError::NonNumericColumn { column: name.to_string() })
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Columns of equal length with distinct names build a frame.
    //
    // Given
    // -----
    // - A text date column and a numeric response, both of length 3.
    //
    // Expect
    // ------
    // - `n_rows == 3`, `n_columns == 2`, names kept in insertion order.
    fn from_columns_with_matching_lengths_builds_frame() {
        // Arrange
        let dates = Column::from(vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
        let response = Column::from(array![1.0, 2.0, 3.0]);

        // Act
        let frame = TimeSeriesFrame::from_columns([("date", dates), ("y", response)]).unwrap();

        // Assert
        assert_eq!(frame.n_rows(), 3);
        assert_eq!(frame.n_columns(), 2);
        assert_eq!(frame.column_names().collect::<Vec<_>>(), vec!["date", "y"]);
    }

    #[test]
    fn insert_with_duplicate_name_returns_duplicate_column() {
        let mut frame = TimeSeriesFrame::new().with_column("y", vec![1.0, 2.0]).unwrap();

        let result = frame.insert("y", vec![3.0, 4.0]);

        assert_eq!(result, Err(DataError::DuplicateColumn { column: "y".to_string() }));
        assert_eq!(frame.n_columns(), 1);
    }

    #[test]
    // Purpose
    // -------
    // A column whose length differs from the first column is rejected.
    //
    // Expect
    // ------
    // - `ColumnLengthMismatch { expected: 2, actual: 3 }`.
    fn insert_with_length_mismatch_returns_column_length_mismatch() {
        let frame = TimeSeriesFrame::new().with_column("y", vec![1.0, 2.0]).unwrap();

        let result = frame.with_column("x", vec![1.0, 2.0, 3.0]);

        match result {
            Err(DataError::ColumnLengthMismatch { column, expected, actual }) => {
                assert_eq!(column, "x");
                assert_eq!(expected, 2);
                assert_eq!(actual, 3);
            }
            other => panic!("expected ColumnLengthMismatch, got: {other:?}"),
        }
    }

    #[test]
    fn numeric_on_text_column_returns_non_numeric_column() {
        let frame = TimeSeriesFrame::new().with_column("label", vec!["a", "b"]).unwrap();

        assert_eq!(
            frame.numeric("label"),
            Err(DataError::NonNumericColumn { column: "label".to_string() })
        );
        assert_eq!(
            frame.numeric("absent"),
            Err(DataError::MissingColumn { column: "absent".to_string() })
        );
    }

    #[test]
    fn empty_frame_has_zero_rows() {
        let frame = TimeSeriesFrame::new();

        assert_eq!(frame.n_rows(), 0);
        assert!(frame.column("date").is_none());
    }
}
