//! Dataset validation helpers: structural checks run before any field is derived.
//!
//! Purpose
//! -------
//! Centralize the checks a training frame must pass before a model derives
//! tensors from it: required columns are present, the time index is strictly
//! increasing and repeat-free once parsed, regressor columns are numeric, and
//! numeric values are finite.
//!
//! Key behaviors
//! -------------
//! - [`validate_training_df`] runs the fixed-order core checks:
//!   date-column existence → time ordering → response-column existence.
//! - [`validate_time_index`] reports the first non-increasing timestamp,
//!   distinguishing going backwards from repeating.
//! - [`validate_regressor_columns`] and [`validate_finite`] back the field
//!   derivation of concrete models.
//!
//! Invariants & assumptions
//! ------------------------
//! - Validators never mutate the frame; timestamps are parsed into a fresh,
//!   row-ordered buffer.
//! - Validation stops at the first failure found in the fixed order; callers
//!   should not assume it is the only violation.
//!
//! Conventions
//! -----------
//! - Indices in errors are 0-based row positions.
//! - This module contains no logging; the fit orchestrator logs failures.
//!
//! Testing notes
//! -------------
//! - Unit tests exercise each check on representative valid and invalid
//!   frames, including a frame that violates both ordering and response
//!   presence to pin the check order.
use crate::{
    data::{frame::TimeSeriesFrame, timestamps::parse_column},
    models::errors::{DataError, DataResult},
};
use chrono::NaiveDateTime;
use ndarray::ArrayView1;

/// Validate a training frame against the model's column configuration.
///
/// Parameters
/// ----------
/// - `frame`: `&TimeSeriesFrame`
///   Candidate training data. Not mutated.
/// - `date_col`: `&str`
///   Name of the time-index column.
/// - `response_col`: `&str`
///   Name of the response column.
///
/// Returns
/// -------
/// `DataResult<()>`
///   `Ok(())` if all checks pass.
///
/// Errors
/// ------
/// Checked in this order, stopping at the first failure:
/// - `DataError::MissingColumn` if `date_col` is absent.
/// - `DataError::NonTemporalColumn` / `DataError::UnparseableTimestamp` if
///   the date column cannot be read as timestamps.
/// - `DataError::UnorderedDates` / `DataError::DuplicateDates` if the parsed
///   timestamps are not strictly increasing.
/// - `DataError::MissingColumn` if `response_col` is absent.
pub fn validate_training_df(
    frame: &TimeSeriesFrame, date_col: &str, response_col: &str,
) -> DataResult<()> {
    let date_column = frame.require(date_col)?;
    let timestamps = parse_column(date_col, date_column)?;
    validate_time_index(date_col, &timestamps)?;
    frame.require(response_col)?;
    Ok(())
}

/// Check that timestamps are strictly increasing.
///
/// Errors
/// ------
/// - `DataError::UnorderedDates` at the first index whose value is earlier
///   than its predecessor.
/// - `DataError::DuplicateDates` at the first index whose value equals its
///   predecessor.
pub fn validate_time_index(column: &str, timestamps: &[NaiveDateTime]) -> DataResult<()> {
    for (offset, pair) in timestamps.windows(2).enumerate() {
        let (previous, current) = (pair[0], pair[1]);
        let index = offset + 1;
        if current < previous {
            return Err(DataError::UnorderedDates {
                column: column.to_string(),
                index,
                previous,
                current,
            });
        }
        if current == previous {
            return Err(DataError::DuplicateDates {
                column: column.to_string(),
                index,
                value: current,
            });
        }
    }
    Ok(())
}

/// Check that every configured regressor column exists and is numeric.
///
/// Errors
/// ------
/// - `DataError::MissingColumn` for the first absent regressor.
/// - `DataError::NonNumericColumn` for the first non-numeric regressor.
pub fn validate_regressor_columns(
    frame: &TimeSeriesFrame, regressor_cols: &[String],
) -> DataResult<()> {
    for name in regressor_cols {
        frame.numeric(name)?;
    }
    Ok(())
}

/// Check that every value of a numeric column is finite.
///
/// Errors
/// ------
/// - `DataError::NonFiniteValue` at the first NaN/±inf entry.
pub fn validate_finite(column: &str, values: ArrayView1<f64>) -> DataResult<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(DataError::NonFiniteValue {
            column: column.to_string(),
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}
