//! Fit orchestration: drive a model template and an estimator through one fit.
//!
//! Purpose
//! -------
//! [`Model`] pairs a [`ModelTemplate`] with an [`Estimator`] and owns the
//! fitted state. `Model::fit` runs the stages in a fixed order:
//!
//! 1. **Validating**: check configuration and estimator support
//!    (`ArgumentError`), then the dataset (`DataError`).
//! 2. **DerivingFields**: extract metadata, derive model fields, register
//!    the expected posterior parameters, build the estimator payload.
//! 3. **AwaitingBackend**: call the estimator, check its result against
//!    the expected parameters (`BackendError`), re-key it symbolically.
//! 4. **Fitted**: swap in the new fitted state.
//!
//! Any failure moves the model to `Failed` and returns the error.
//!
//! Key behaviors
//! -------------
//! - Fields, expected parameters, and posterior samples are built in locals
//!   and stored together only after the estimator result has been checked.
//!   Readers never observe a mix of two fits.
//! - A failed re-fit keeps the previous fitted state readable; `status()`
//!   reports `Failed` and `is_fitted()` stays `true`.
//! - Estimator failures are wrapped as `BackendError::EstimatorFailed` with
//!   the estimator's message; extra estimator keys are dropped.
//!
//! Invariants & assumptions
//! ------------------------
//! - The input frame is never mutated.
//! - `fit` takes `&mut self`, so concurrent fits on one model are ruled out
//!   by the borrow checker.
//! - Status transitions follow `FitStatus::can_transition_to`.
//!
//! Conventions
//! -----------
//! - Each fit runs in a `fit` tracing span carrying the model name and
//!   estimator type. Start and success are logged at `info`, stage
//!   transitions and the payload keys at `debug`, failures at `warn`.
//! - No subscriber is installed here; that is the application's job.
use crate::{
    data::frame::TimeSeriesFrame,
    models::{
        core::{
            mapping::{KeyMapping, ModelKey},
            metadata::TrainingMetadata,
            options::EstimatorType,
            payload::EstimatorInput,
            posterior::{PosteriorDraws, PosteriorSamples},
            state::FitStatus,
            validation::validate_training_df,
        },
        errors::{ArgumentResult, BackendError, ModelResult},
        estimator::{Estimator, EstimatorRequest},
        lm::LinearModel,
        template::{BaseFields, ModelTemplate},
    },
};
use ndarray::{Array1, Array2};
use tracing::{debug, info, info_span, warn};

/// Everything a successful fit produced.
#[derive(Debug, Clone)]
pub struct FittedState<T: ModelTemplate> {
    /// Fields derived from the training frame.
    pub fields: T::Fields,
    /// Posterior parameters requested from the estimator, in registration order.
    pub expected_params: Vec<T::Output>,
    /// Estimator result keyed by symbolic output key.
    pub posterior: PosteriorSamples<T::Output>,
}

/// A model template bound to an estimator, with its fit lifecycle.
///
/// Construct with [`Model::new`], then call [`Model::fit`]. Accessors return
/// `None` (or an empty slice) until the first successful fit.
pub struct Model<T: ModelTemplate, E: Estimator> {
    template: T,
    estimator: E,
    input_mapping: KeyMapping<T::Input>,
    output_mapping: KeyMapping<T::Output>,
    status: FitStatus,
    fitted: Option<FittedState<T>>,
}

impl<T: ModelTemplate, E: Estimator> Model<T, E> {
    /// Bind a template to an estimator.
    ///
    /// Errors
    /// ------
    /// - `ArgumentError::DuplicateSymbolicName` / `DuplicateBackendKey` if
    ///   either of the template's key mappings is ambiguous.
    pub fn new(template: T, estimator: E) -> ArgumentResult<Self> {
        let input_mapping = template.data_input_mapper()?;
        let output_mapping = template.output_mapper()?;
        Ok(Self {
            template,
            estimator,
            input_mapping,
            output_mapping,
            status: FitStatus::Unfit,
            fitted: None,
        })
    }

    /// Fit the model on `frame`.
    ///
    /// Errors
    /// ------
    /// - `ModelError::Argument` for configuration problems or an estimator
    ///   the template does not support. Raised before the frame is read.
    /// - `ModelError::Data` for dataset problems.
    /// - `ModelError::Backend` if the estimator fails or its result is
    ///   missing a parameter or holds a non-finite draw.
    ///
    /// On error the previous fitted state (if any) is left untouched.
    pub fn fit(&mut self, frame: &TimeSeriesFrame) -> ModelResult<()> {
        let estimator_type = self.estimator.estimator_type();
        let span =
            info_span!("fit", model = self.template.model_name(), estimator = %estimator_type);
        let _entered = span.enter();
        info!(rows = frame.n_rows(), columns = frame.n_columns(), "starting fit");

        advance(&mut self.status, FitStatus::Validating);
        match self.run_stages(frame, estimator_type) {
            Ok(fitted) => {
                info!(
                    observations = fitted.fields.as_ref().num_of_observations,
                    parameters = fitted.posterior.len(),
                    "fit succeeded"
                );
                self.fitted = Some(fitted);
                advance(&mut self.status, FitStatus::Fitted);
                Ok(())
            }
            Err(err) => {
                warn!(stage = %self.status, kind = ?err.kind(), error = %err, "fit failed");
                advance(&mut self.status, FitStatus::Failed);
                Err(err)
            }
        }
    }

    fn run_stages(
        &mut self, frame: &TimeSeriesFrame, estimator_type: EstimatorType,
    ) -> ModelResult<FittedState<T>> {
        let Self { template, estimator, input_mapping, status, .. } = self;

        let columns = template.check_arguments(estimator_type)?;
        validate_training_df(frame, columns.date_col, columns.response_col)?;

        advance(status, FitStatus::DerivingFields);
        let fields = template.derive_fields(frame, columns)?;
        let mut expected_params = Vec::new();
        template.register_expected_parameters(&mut expected_params);
        let input =
            EstimatorInput::from_mapping(input_mapping, |key| template.input_value(&fields, key));
        debug!(keys = ?input.keys().collect::<Vec<_>>(), "estimator payload built");

        advance(status, FitStatus::AwaitingBackend);
        let param_names: Vec<&'static str> =
            expected_params.iter().map(|key| key.backend_key()).collect();
        let request = EstimatorRequest {
            model_name: template.model_name(),
            input: &input,
            param_names: &param_names,
            sampling: &template.config().sampling,
        };
        let output = estimator.fit(&request).map_err(|err| BackendError::EstimatorFailed {
            estimator: estimator_type.to_string(),
            reason: err.to_string(),
        })?;
        let posterior = PosteriorSamples::from_output(output, &expected_params)?;

        Ok(FittedState { fields, expected_params, posterior })
    }

    pub fn status(&self) -> FitStatus {
        self.status
    }

    /// `true` once any fit has succeeded, even if a later one failed.
    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    pub fn fitted_state(&self) -> Option<&FittedState<T>> {
        self.fitted.as_ref()
    }

    pub fn fields(&self) -> Option<&T::Fields> {
        self.fitted.as_ref().map(|fitted| &fitted.fields)
    }

    fn base_fields(&self) -> Option<&BaseFields> {
        self.fields().map(AsRef::as_ref)
    }

    pub fn posterior_samples(&self) -> Option<&PosteriorSamples<T::Output>> {
        self.fitted.as_ref().map(|fitted| &fitted.posterior)
    }

    pub fn posterior(&self, key: T::Output) -> Option<&PosteriorDraws> {
        self.posterior_samples().and_then(|samples| samples.get(key))
    }

    /// Draws by symbolic name, e.g. `"RESIDUAL_SIGMA"`.
    pub fn posterior_by_name(&self, name: &str) -> Option<&PosteriorDraws> {
        self.posterior_samples().and_then(|samples| samples.get_by_name(name))
    }

    /// Parameters requested by the last successful fit; empty before it.
    pub fn expected_parameters(&self) -> &[T::Output] {
        match &self.fitted {
            Some(fitted) => &fitted.expected_params,
            None => &[],
        }
    }

    pub fn training_metadata(&self) -> Option<&TrainingMetadata> {
        self.base_fields().map(|base| &base.training_meta)
    }

    pub fn num_of_observations(&self) -> Option<usize> {
        self.base_fields().map(|base| base.num_of_observations)
    }

    pub fn response(&self) -> Option<&Array1<f64>> {
        self.base_fields().map(|base| &base.response)
    }

    pub fn response_sd(&self) -> Option<f64> {
        self.base_fields().map(|base| base.response_sd)
    }

    pub fn data_input_mapper(&self) -> &KeyMapping<T::Input> {
        &self.input_mapping
    }

    pub fn output_mapper(&self) -> &KeyMapping<T::Output> {
        &self.output_mapping
    }

    pub fn template(&self) -> &T {
        &self.template
    }

    /// Mutable template, e.g. to change its configuration between fits.
    /// The fitted state is not touched until the next `fit` succeeds.
    pub fn template_mut(&mut self) -> &mut T {
        &mut self.template
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    pub fn estimator_mut(&mut self) -> &mut E {
        &mut self.estimator
    }
}

impl<E: Estimator> Model<LinearModel, E> {
    pub fn num_of_regressors(&self) -> Option<usize> {
        self.fields().map(|fields| fields.num_of_regressors)
    }

    pub fn regressor_col(&self) -> Option<&[String]> {
        self.fields().map(|fields| fields.regressor_col.as_slice())
    }

    pub fn regressor_matrix(&self) -> Option<&Array2<f64>> {
        self.fields().map(|fields| &fields.regressor_matrix)
    }
}

fn advance(status: &mut FitStatus, next: FitStatus) {
    debug_assert!(status.can_transition_to(next), "illegal fit transition {status} -> {next}");
    debug!(from = %status, to = %next, "fit status");
    *status = next;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        core::{options::ModelConfig, posterior::EstimatorOutput},
        errors::{ArgumentError, ModelError},
        lm::RegressionSamplingParameters,
    };
    use ndarray::array;
    use std::fmt;

    #[derive(Debug)]
    struct Refused;

    impl fmt::Display for Refused {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("refused")
        }
    }

    impl std::error::Error for Refused {}

    /// Returns constant draws for every requested parameter.
    struct Constant {
        kind: EstimatorType,
        calls: usize,
    }

    impl Estimator for Constant {
        type Error = Refused;

        fn estimator_type(&self) -> EstimatorType {
            self.kind
        }

        fn fit(&mut self, request: &EstimatorRequest<'_>) -> Result<EstimatorOutput, Refused> {
            self.calls += 1;
            let draws = |name: &&str| (name.to_string(), PosteriorDraws::scalar(array![1.0]));
            Ok(request.param_names.iter().map(draws).collect())
        }
    }

    fn frame() -> TimeSeriesFrame {
        TimeSeriesFrame::new()
            .with_column("week", vec!["2024-01-01", "2024-01-08"])
            .unwrap()
            .with_column("sales", vec![3.0, 5.0])
            .unwrap()
    }

    fn model(config: ModelConfig) -> Model<LinearModel, Constant> {
        let estimator = Constant { kind: EstimatorType::StanMap, calls: 0 };
        Model::new(LinearModel::new(config), estimator).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // A fresh model is unfit and exposes nothing.
    fn new_model_starts_unfit() {
        let m = model(ModelConfig::new("sales", "week"));

        assert_eq!(m.status(), FitStatus::Unfit);
        assert!(!m.is_fitted());
        assert!(m.posterior_samples().is_none());
        assert!(m.expected_parameters().is_empty());
        assert_eq!(m.data_input_mapper().len(), 4);
        assert_eq!(m.output_mapper().len(), 3);
    }

    #[test]
    fn fit_on_valid_frame_moves_to_fitted() {
        let mut m = model(ModelConfig::new("sales", "week"));

        m.fit(&frame()).unwrap();

        assert_eq!(m.status(), FitStatus::Fitted);
        assert_eq!(m.num_of_observations(), Some(2));
        assert!(m.response_sd().is_some_and(|sd| (sd - 1.0).abs() < 1e-12));
        assert_eq!(m.num_of_regressors(), Some(0));
        assert!(m.posterior(RegressionSamplingParameters::ResidualSigma).is_some());
        assert_eq!(m.estimator().calls, 1);
    }

    #[test]
    // Purpose
    // -------
    // Configuration errors fail before the estimator is reached.
    fn fit_without_date_column_fails_with_argument_error() {
        let mut m = model(ModelConfig { date_col: None, ..ModelConfig::new("sales", "week") });

        let result = m.fit(&frame());

        assert_eq!(result, Err(ModelError::Argument(ArgumentError::MissingDateColumn)));
        assert_eq!(m.status(), FitStatus::Failed);
        assert!(!m.is_fitted());
        assert_eq!(m.estimator().calls, 0);
    }
}
