//! Errors for time-series models (configuration checks, dataset validation,
//! and estimator/backend failures).
//!
//! This module defines three disjoint error types and an umbrella
//! [`ModelError`] returned by the fit orchestrator:
//!
//! - [`ArgumentError`]: the caller supplied an invalid configuration or an
//!   unsupported option combination. Raised before any dataset is inspected.
//! - [`DataError`]: the dataset fails a structural or semantic requirement
//!   (missing column, unordered or repeated timestamps, empty frame, ...).
//! - [`BackendError`]: the estimator failed, or returned a result that breaks
//!   the parameter contract (missing parameter, non-finite draw).
//!
//! ## Conventions
//! - **Indices are 0-based** row positions in the supplied frame.
//! - Every variant carries the offending column / parameter name so that a
//!   failed fit can be diagnosed without inspecting model internals.
//! - Backend errors are normalized to owned strings so that all error types
//!   stay `Clone + PartialEq`, mirroring how optimizer failures are surfaced
//!   as a human-readable status.
use chrono::NaiveDateTime;
use thiserror::Error;

/// Result alias for configuration checks that may produce [`ArgumentError`].
pub type ArgumentResult<T> = Result<T, ArgumentError>;

/// Result alias for dataset validation paths that may produce [`DataError`].
pub type DataResult<T> = Result<T, DataError>;

/// Result alias for estimator-contract checks that may produce [`BackendError`].
pub type BackendResult<T> = Result<T, BackendError>;

/// Crate-wide result alias for model operations that may produce [`ModelError`].
pub type ModelResult<T> = Result<T, ModelError>;

/// Caller misuse: invalid configuration or arguments unrelated to the dataset.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgumentError {
    // ---- Column configuration ----
    /// No date column was configured.
    #[error("A date column must be configured before fitting.")]
    MissingDateColumn,

    /// No response column was configured.
    #[error("A response column must be configured before fitting.")]
    MissingResponseColumn,

    /// The same regressor column was listed more than once.
    #[error("Regressor column '{name}' is listed more than once.")]
    DuplicateRegressor { name: String },

    /// A regressor column collides with the date or response column.
    #[error("Regressor column '{name}' collides with the {role} column.")]
    RegressorColumnConflict { name: String, role: &'static str },

    // ---- Estimator configuration ----
    /// The estimator type is not supported by this model.
    #[error("Estimator '{estimator}' is not supported by model '{model}'.")]
    UnsupportedEstimator { model: &'static str, estimator: String },

    /// An estimator name could not be parsed.
    #[error("Unknown estimator '{name}': {reason}")]
    UnknownEstimator { name: String, reason: &'static str },

    /// A sampling option is out of range.
    #[error("Invalid sampling option {option} = {value}: {reason}")]
    InvalidSamplingOption { option: &'static str, value: usize, reason: &'static str },

    // ---- Key mappings ----
    /// Two entries of a key mapping share a symbolic name.
    #[error("Symbolic name '{name}' appears more than once in the key mapping.")]
    DuplicateSymbolicName { name: &'static str },

    /// Two entries of a key mapping share a backend key.
    #[error("Backend key '{key}' appears more than once in the key mapping.")]
    DuplicateBackendKey { key: &'static str },
}

/// Dataset failure: the frame does not meet the model's requirements.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    // ---- Frame structure ----
    /// A required column is absent from the frame.
    #[error("Column '{column}' is not present in the dataset.")]
    MissingColumn { column: String },

    /// A column was added twice to the same frame.
    #[error("Column '{column}' already exists in the dataset.")]
    DuplicateColumn { column: String },

    /// A column does not have the same number of rows as the frame.
    #[error("Column '{column}' has {actual} rows; expected {expected}.")]
    ColumnLengthMismatch { column: String, expected: usize, actual: usize },

    /// The frame has no rows.
    #[error("Dataset is empty; at least one row is required.")]
    EmptyDataset,

    // ---- Time index ----
    /// The date column does not hold timestamps, dates, or parseable text.
    #[error("Date column '{column}' does not hold temporal values.")]
    NonTemporalColumn { column: String },

    /// A text value of the date column could not be parsed as a timestamp.
    #[error("Date column '{column}' has an unparseable value at index {index}: '{value}'")]
    UnparseableTimestamp { column: String, index: usize, value: String },

    /// A timestamp is earlier than the one before it.
    #[error("Datetime index must be ordered: '{column}'[{index}] = {current} < {previous}.")]
    UnorderedDates {
        column: String,
        index: usize,
        previous: NaiveDateTime,
        current: NaiveDateTime,
    },

    /// A timestamp repeats the one before it.
    #[error("Datetime index must not repeat: column '{column}' repeats {value} at index {index}.")]
    DuplicateDates { column: String, index: usize, value: NaiveDateTime },

    // ---- Numeric columns ----
    /// A column that must be numeric holds non-numeric values.
    #[error("Column '{column}' must be numeric.")]
    NonNumericColumn { column: String },

    /// A numeric value is NaN/±inf.
    #[error("Column '{column}' has a non-finite value at index {index}: {value}")]
    NonFiniteValue { column: String, index: usize, value: f64 },
}

/// Downstream failure: the estimator failed or broke the parameter contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BackendError {
    /// The estimator itself raised (including time-outs reported by it).
    #[error("Estimator '{estimator}' failed: {reason}")]
    EstimatorFailed { estimator: String, reason: String },

    /// A requested posterior parameter is absent from the estimator result.
    #[error("Estimator result is missing posterior parameter '{name}' (backend key '{key}').")]
    MissingParameter { name: &'static str, key: &'static str },

    /// A posterior draw is NaN/±inf.
    #[error("Posterior parameter '{name}' has a non-finite draw {value} at ({draw}, {index}).")]
    NonFinitePosterior { name: &'static str, draw: usize, index: usize, value: f64 },
}

/// Tag identifying which of the three error kinds a [`ModelError`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Argument,
    Data,
    Backend,
}

/// Unified error returned by `Model::fit`.
///
/// Exactly one of the three kinds; the inner error keeps the diagnostic
/// payload (offending column, parameter, or estimator reason).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("Invalid argument: {0}")]
    Argument(#[from] ArgumentError),

    #[error("Invalid data: {0}")]
    Data(#[from] DataError),

    #[error("Backend failure: {0}")]
    Backend(#[from] BackendError),
}

impl ModelError {
    /// Which of the three error kinds this is.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ModelError::Argument(_) => ErrorKind::Argument,
            ModelError::Data(_) => ErrorKind::Data,
            ModelError::Backend(_) => ErrorKind::Backend,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Tests for model error types.
    //!
    //! Purpose
    //! -------
    //! Check that `Display` messages embed their diagnostic payload and that
    //! the umbrella `ModelError` keeps the three kinds apart.
    use super::*;
    use chrono::NaiveDate;

    fn ts(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Data errors name the offending column in their message.
    //
    // Given
    // -----
    // - `MissingColumn { column: "sales" }`.
    //
    // Expect
    // ------
    // - The rendered message contains `'sales'`.
    fn missing_column_display_names_the_column() {
        let err = DataError::MissingColumn { column: "sales".to_string() };

        assert!(err.to_string().contains("'sales'"));
    }

    #[test]
    // Purpose
    // -------
    // Ordering errors report both timestamps and the row index.
    fn unordered_dates_display_reports_both_timestamps() {
        let err = DataError::UnorderedDates {
            column: "week".to_string(),
            index: 3,
            previous: ts(5),
            current: ts(2),
        };

        let msg = err.to_string();
        assert!(msg.contains("2024-01-05"));
        assert!(msg.contains("2024-01-02"));
        assert!(msg.contains("'week'[3]"));
    }

    #[test]
    fn missing_parameter_display_names_symbolic_and_backend_key() {
        let err = BackendError::MissingParameter { name: "RESIDUAL_SIGMA", key: "obs_sigma" };

        let msg = err.to_string();
        assert!(msg.contains("RESIDUAL_SIGMA"));
        assert!(msg.contains("obs_sigma"));
    }

    #[test]
    // Purpose
    // -------
    // `From` conversions route each error into its own `ModelError` kind.
    //
    // Expect
    // ------
    // - `kind()` returns `Argument`, `Data`, `Backend` respectively.
    fn model_error_from_conversions_keep_kinds_disjoint() {
        let arg: ModelError = ArgumentError::MissingDateColumn.into();
        let data: ModelError = DataError::EmptyDataset.into();
        let backend: ModelError = BackendError::EstimatorFailed {
            estimator: "stan-mcmc".into(),
            reason: "divergent chains".into(),
        }
        .into();

        assert_eq!(arg.kind(), ErrorKind::Argument);
        assert_eq!(data.kind(), ErrorKind::Data);
        assert_eq!(backend.kind(), ErrorKind::Backend);
        assert!(matches!(data, ModelError::Data(DataError::EmptyDataset)));
    }
}
