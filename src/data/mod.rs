//! data: tabular input primitives for time-series models.
//!
//! Purpose
//! -------
//! Hold the caller's dataset in a form the model layer can validate: a
//! [`TimeSeriesFrame`] of named, equally long [`Column`]s, plus the
//! timestamp parsing used to interpret date columns.
//!
//! Invariants & assumptions
//! ------------------------
//! - Frames are read-only inputs to the model layer; nothing under
//!   `models` mutates them.
//! - Timestamp parsing is element-wise and order-preserving.
//!
//! Downstream usage
//! ----------------
//! - Build a frame with [`TimeSeriesFrame::from_columns`] or
//!   [`TimeSeriesFrame::with_column`] and pass it to `Model::fit`.
pub mod frame;
pub mod timestamps;

pub use self::frame::{Column, TimeSeriesFrame};
pub use self::timestamps::{parse_column, parse_timestamp};
