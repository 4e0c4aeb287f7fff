//! Training metadata: summary of a validated frame's time axis.
//!
//! [`extract_training_metadata`] parses the date column into an owned,
//! ordered timestamp sequence and records its length and end points. It
//! assumes `validate_training_df` already passed for the same frame, and it
//! never mutates the frame: parsing always writes into a new buffer.
use crate::{
    data::{frame::TimeSeriesFrame, timestamps::parse_column},
    models::errors::{DataError, DataResult},
};
use chrono::NaiveDateTime;

/// Derived record of a training frame's time axis.
///
/// Created once per successful validation pass and replaced wholesale on
/// re-fit; never modified after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingMetadata {
    /// Name of the date column the sequence was parsed from.
    pub date_col: String,
    /// Parsed timestamps in row order.
    pub date_array: Vec<NaiveDateTime>,
    /// Number of rows in the training frame.
    pub df_length: usize,
    /// First timestamp.
    pub training_start: NaiveDateTime,
    /// Last timestamp.
    pub training_end: NaiveDateTime,
}

impl TrainingMetadata {
    /// Span covered by the training data.
    pub fn span(&self) -> chrono::TimeDelta {
        self.training_end - self.training_start
    }
}

/// Extract [`TrainingMetadata`] from a validated frame.
///
/// Parameters
/// ----------
/// - `frame`: `&TimeSeriesFrame`
///   Training frame that passed `validate_training_df`.
/// - `date_col`: `&str`
///   Name of the time-index column.
///
/// Errors
/// ------
/// - `DataError::EmptyDataset` if the frame has no rows.
/// - Column/parsing errors if called on an unvalidated frame.
pub fn extract_training_metadata(
    frame: &TimeSeriesFrame, date_col: &str,
) -> DataResult<TrainingMetadata> {
    let date_array = parse_column(date_col, frame.require(date_col)?)?;
    let (training_start, training_end) = match (date_array.first(), date_array.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Err(DataError::EmptyDataset),
    };
    Ok(TrainingMetadata {
        date_col: date_col.to_string(),
        df_length: date_array.len(),
        date_array,
        training_start,
        training_end,
    })
}
