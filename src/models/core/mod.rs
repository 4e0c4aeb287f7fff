//! core: shared building blocks for time-series model templates.
//!
//! Purpose
//! -------
//! Collect everything a concrete model needs besides its own keys and
//! derived fields: configuration and estimator options, dataset validation,
//! training-metadata extraction, symbolic/backend key mappings, the payload
//! handed to an estimator, the posterior containers it returns, and the fit
//! lifecycle states.
//!
//! Key behaviors
//! -------------
//! - [`ModelConfig`] / [`SamplingOptions`] / [`EstimatorType`] describe how a
//!   model is set up; [`ModelConfig::validate`] reports configuration
//!   problems as `ArgumentError`s before any data is read.
//! - [`validate_training_df`] and [`extract_training_metadata`] are the
//!   reusable dataset stages every model runs before deriving its own fields.
//! - [`ModelKey`] + [`KeyMapping`] tie symbolic names to backend keys and
//!   reject ambiguous mappings at construction.
//! - [`EstimatorInput`] and [`PosteriorSamples`] translate between the two
//!   key vocabularies on the way to and from the estimator.
//! - [`FitStatus`] enumerates the fit lifecycle and its allowed transitions.
//!
//! Invariants & assumptions
//! ------------------------
//! - Validators and the metadata extractor never mutate the input frame.
//! - Symbolic names and backend keys are unique within each mapping.
//! - A [`PosteriorSamples`] value is either complete for the requested keys
//!   or never constructed.
//!
//! Conventions
//! -----------
//! - Row indices are 0-based throughout.
//! - This module does no logging; the fit orchestrator in `models::fit`
//!   owns tracing spans and events.
//!
//! Downstream usage
//! ----------------
//! - Concrete models (e.g. `models::lm`) implement `ModelKey` for their input
//!   and output key enums and compose the validation and metadata helpers in
//!   their field derivation.
//! - Most callers should import via [`prelude`].
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its own checks; the end-to-end
//!   fit pipeline is covered by integration tests under `tests/`.

pub mod mapping;
pub mod metadata;
pub mod options;
pub mod payload;
pub mod posterior;
pub mod state;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::mapping::{KeyMapping, ModelKey};
pub use self::metadata::{TrainingMetadata, extract_training_metadata};
pub use self::options::{ColumnSpec, EstimatorType, ModelConfig, SamplingOptions};
pub use self::payload::{EstimatorInput, InputValue};
pub use self::posterior::{EstimatorOutput, PosteriorDraws, PosteriorSamples};
pub use self::state::FitStatus;
pub use self::validation::{
    validate_finite, validate_regressor_columns, validate_time_index, validate_training_df,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_orbit::models::core::prelude::*;
//
// to import the main model-core surface in a single line.

pub mod prelude {
    pub use super::mapping::{KeyMapping, ModelKey};
    pub use super::metadata::{TrainingMetadata, extract_training_metadata};
    pub use super::options::{EstimatorType, ModelConfig, SamplingOptions};
    pub use super::payload::{EstimatorInput, InputValue};
    pub use super::posterior::{EstimatorOutput, PosteriorDraws, PosteriorSamples};
    pub use super::state::FitStatus;
}
