//! Model template: the per-model hooks the fit orchestrator drives.
//!
//! Purpose
//! -------
//! Describe what a concrete time-series model contributes to a fit: its
//! input and output key vocabularies, the estimators it supports, how it
//! derives fields from a validated frame, and which derived value goes under
//! each input key.
//!
//! Key behaviors
//! -------------
//! - [`ModelTemplate`] carries base behavior as provided methods; concrete
//!   models override a hook and call the base helper first
//!   ([`derive_base_fields`]) instead of inheriting state.
//! - [`BaseFields`] holds what every model derives: training metadata, the
//!   response vector, its length, and its population standard deviation.
//! - [`ModelTemplate::register_expected_parameters`] appends the model's
//!   output keys in declaration order through [`register_output_keys`].
//!
//! Invariants & assumptions
//! ------------------------
//! - `derive_fields` returns a fresh value; it never writes into the template
//!   or the frame, so a failed derivation leaves nothing half-updated.
//! - `derive_fields` runs dataset validation and metadata extraction itself,
//!   so it is safe to call on an unchecked frame.
//! - `input_value` is total over `Self::Input`: every input key has a value
//!   once fields are derived.
//!
//! Conventions
//! -----------
//! - Argument checks (`check_arguments`) raise `ArgumentError`; field
//!   derivation raises `DataError`. The two never mix.
use crate::{
    data::frame::TimeSeriesFrame,
    models::{
        core::{
            mapping::{KeyMapping, ModelKey},
            metadata::{TrainingMetadata, extract_training_metadata},
            options::{ColumnSpec, EstimatorType, ModelConfig},
            payload::InputValue,
            validation::{validate_finite, validate_training_df},
        },
        errors::{ArgumentError, ArgumentResult, DataResult},
    },
};
use ndarray::Array1;
use statrs::statistics::Statistics;
use std::fmt::Debug;

/// Fields every model derives from its training frame.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseFields {
    /// Time-axis summary of the training frame.
    pub training_meta: TrainingMetadata,
    /// Response values in row order.
    pub response: Array1<f64>,
    /// Number of observations (rows).
    pub num_of_observations: usize,
    /// Population standard deviation of the response (0 for a single row).
    pub response_sd: f64,
}

/// Run the base stages of field derivation.
///
/// Parameters
/// ----------
/// - `frame`: `&TimeSeriesFrame`
///   Training data. Not mutated.
/// - `columns`: `ColumnSpec<'_>`
///   Validated column names of the model's config.
///
/// Returns
/// -------
/// `DataResult<BaseFields>`
///
/// Errors
/// ------
/// - Any error of `validate_training_df`, in its order.
/// - `DataError::EmptyDataset` for a frame without rows.
/// - `DataError::NonNumericColumn` / `DataError::NonFiniteValue` if the
///   response is not a finite numeric column.
pub fn derive_base_fields(
    frame: &TimeSeriesFrame, columns: ColumnSpec<'_>,
) -> DataResult<BaseFields> {
    validate_training_df(frame, columns.date_col, columns.response_col)?;
    let training_meta = extract_training_metadata(frame, columns.date_col)?;

    let response = frame.numeric(columns.response_col)?;
    validate_finite(columns.response_col, response.view())?;
    let response_sd = response.iter().population_std_dev();

    Ok(BaseFields {
        num_of_observations: training_meta.df_length,
        training_meta,
        response: response.clone(),
        response_sd,
    })
}

/// Append every key of `K` to `registry`, in declaration order.
///
/// Base stage of [`ModelTemplate::register_expected_parameters`]. Entries
/// already in `registry` are kept; calling it twice duplicates the keys.
pub fn register_output_keys<K: ModelKey>(registry: &mut Vec<K>) {
    registry.extend_from_slice(K::ALL);
}

/// Per-model hooks used by `Model::fit`.
///
/// - `type Input`: keys of the estimator input payload.
/// - `type Output`: keys of the posterior parameters.
/// - `type Fields`: everything the model derives from a frame. It must wrap
///   [`BaseFields`] so the orchestrator can expose the common accessors.
///
/// Required:
/// - `model_name`, `config`: identity and construction-time configuration.
/// - `input_value(&Fields, Input) -> InputValue`: value for one input key.
///
/// Optional (base behavior):
/// - `supported_estimators`: all three estimator families.
/// - `check_arguments`: config validation plus estimator support.
/// - `register_expected_parameters`: append every `Output` key.
/// - `derive_fields`: [`derive_base_fields`] converted into `Fields`.
pub trait ModelTemplate {
    type Input: ModelKey;
    type Output: ModelKey;
    type Fields: AsRef<BaseFields> + From<BaseFields> + Clone + Debug;

    // Required methods
    fn model_name(&self) -> &'static str;
    fn config(&self) -> &ModelConfig;
    fn input_value(&self, fields: &Self::Fields, key: Self::Input) -> InputValue;

    // Optional methods
    fn supported_estimators(&self) -> &'static [EstimatorType] {
        &[EstimatorType::StanMcmc, EstimatorType::StanMap, EstimatorType::PyroSvi]
    }

    /// Check configuration and estimator choice before touching any data.
    ///
    /// Errors
    /// ------
    /// - Any error of `ModelConfig::validate` or `SamplingOptions::validate`.
    /// - `ArgumentError::UnsupportedEstimator` if `estimator` is not in
    ///   [`ModelTemplate::supported_estimators`].
    fn check_arguments(&self, estimator: EstimatorType) -> ArgumentResult<ColumnSpec<'_>> {
        let columns = self.config().validate()?;
        self.config().sampling.validate()?;
        if !self.supported_estimators().contains(&estimator) {
            return Err(ArgumentError::UnsupportedEstimator {
                model: self.model_name(),
                estimator: estimator.to_string(),
            });
        }
        Ok(columns)
    }

    /// Append this model's output keys to `registry`.
    ///
    /// The base appends every `Self::Output` key in declaration order. A
    /// model that registers extra or conditional parameters overrides this,
    /// calls [`register_output_keys`] first, then edits the tail it appended.
    fn register_expected_parameters(&self, registry: &mut Vec<Self::Output>) {
        register_output_keys(registry);
    }

    fn derive_fields(
        &self, frame: &TimeSeriesFrame, columns: ColumnSpec<'_>,
    ) -> DataResult<Self::Fields> {
        derive_base_fields(frame, columns).map(Self::Fields::from)
    }

    /// Key mapping of this model's inputs.
    fn data_input_mapper(&self) -> ArgumentResult<KeyMapping<Self::Input>> {
        KeyMapping::new()
    }

    /// Key mapping of this model's posterior parameters.
    fn output_mapper(&self) -> ArgumentResult<KeyMapping<Self::Output>> {
        KeyMapping::new()
    }
}
