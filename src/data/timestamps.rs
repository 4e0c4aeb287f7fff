//! Timestamp parsing for date columns.
//!
//! Converts any temporal [`Column`] into an owned, row-ordered
//! `Vec<NaiveDateTime>`. Parsing is strictly element-wise: row `i` of the
//! output is row `i` of the input, so no ordering problem can be hidden by
//! the conversion.
//!
//! Accepted text formats, tried in order:
//! - RFC 3339 with offset (`2024-01-31T12:00:00+02:00`), converted to UTC;
//! - `%Y-%m-%dT%H:%M:%S%.f` and `%Y-%m-%d %H:%M:%S%.f`;
//! - `%Y-%m-%d` and `%Y/%m/%d` (midnight).
use crate::{
    data::frame::Column,
    models::errors::{DataError, DataResult},
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Parse a single text value using the accepted formats.
///
/// Returns `None` if no format matches; the caller attaches row/column context.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// Parse a date column into row-ordered timestamps.
///
/// Parameters
/// ----------
/// - `name`: `&str`
///   Column name, used only for error context.
/// - `column`: `&Column`
///   Column to convert. Never mutated.
///
/// Errors
/// ------
/// - `DataError::NonTemporalColumn` for numeric columns.
/// - `DataError::UnparseableTimestamp` for the first text value that matches
///   no accepted format.
pub fn parse_column(name: &str, column: &Column) -> DataResult<Vec<NaiveDateTime>> {
    match column {
        Column::Timestamp(values) => Ok(values.clone()),
        Column::Date(values) => Ok(values.iter().map(|d| d.and_time(NaiveTime::MIN)).collect()),
        Column::Text(values) => values
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                parse_timestamp(raw).ok_or_else(|| DataError::UnparseableTimestamp {
                    column: name.to_string(),
                    index,
                    value: raw.clone(),
                })
            })
            .collect(),
        Column::Numeric(_) => Err(DataError::NonTemporalColumn { column: name.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Every accepted text format parses to the expected instant.
    fn parse_timestamp_accepts_documented_formats() {
        assert_eq!(parse_timestamp("2024-03-01"), Some(at(2024, 3, 1, 0)));
        assert_eq!(parse_timestamp("2024/03/01"), Some(at(2024, 3, 1, 0)));
        assert_eq!(parse_timestamp("2024-03-01 06:00:00"), Some(at(2024, 3, 1, 6)));
        assert_eq!(
            parse_timestamp("2024-03-01T06:00:00.250"),
            Some(at(2024, 3, 1, 6) + chrono::Duration::milliseconds(250))
        );
        assert_eq!(parse_timestamp("2024-03-01T08:00:00+02:00"), Some(at(2024, 3, 1, 6)));
        assert_eq!(parse_timestamp("  2024-03-01  "), Some(at(2024, 3, 1, 0)));
    }

    #[test]
    fn parse_timestamp_rejects_garbage() {
        assert_eq!(parse_timestamp("March first"), None);
        assert_eq!(parse_timestamp("2024-13-01"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    // Purpose
    // -------
    // Parsing keeps row order even when the input is out of order.
    //
    // Given
    // -----
    // - Text dates `["2024-01-03", "2024-01-01"]`.
    //
    // Expect
    // ------
    // - Output is `[Jan 3, Jan 1]`, not sorted.
    fn parse_column_preserves_row_order() {
        let column = Column::from(vec!["2024-01-03", "2024-01-01"]);

        let parsed = parse_column("date", &column).unwrap();

        assert_eq!(parsed, vec![at(2024, 1, 3, 0), at(2024, 1, 1, 0)]);
    }

    #[test]
    fn parse_column_reports_first_unparseable_row() {
        let column = Column::from(vec!["2024-01-01", "soon", "never"]);

        let result = parse_column("date", &column);

        assert_eq!(
            result,
            Err(DataError::UnparseableTimestamp {
                column: "date".to_string(),
                index: 1,
                value: "soon".to_string(),
            })
        );
    }

    #[test]
    fn parse_column_on_numeric_returns_non_temporal_column() {
        let column = Column::from(array![1.0, 2.0]);

        assert_eq!(
            parse_column("date", &column),
            Err(DataError::NonTemporalColumn { column: "date".to_string() })
        );
    }

    #[test]
    fn parse_column_converts_dates_to_midnight() {
        let column = Column::from(vec![NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()]);

        assert_eq!(parse_column("date", &column).unwrap(), vec![at(2024, 2, 29, 0)]);
    }
}
