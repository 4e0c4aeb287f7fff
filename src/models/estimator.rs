//! Estimator seam: the interface a Bayesian backend implements.
//!
//! - [`Estimator`]: trait a backend (Stan MCMC/MAP, Pyro SVI, or a test stub)
//!   implements to turn an input payload into posterior draws.
//! - [`EstimatorRequest`]: everything the orchestrator hands to the estimator
//!   for a single fit call.
//!
//! Convention: estimators speak backend keys only. The request carries the
//! backend keys of the input payload and of the expected posterior
//! parameters; the result is keyed the same way. Translation to and from
//! symbolic names happens in the orchestrator.
use crate::models::core::{
    options::{EstimatorType, SamplingOptions},
    payload::EstimatorInput,
    posterior::EstimatorOutput,
};

/// Arguments of a single estimator call.
///
/// Fields:
/// - `model_name: &'static str`: name of the model template (e.g. `"lm"`),
///   used by backends to select a compiled program.
/// - `input: &EstimatorInput`: one value per input key, keyed by backend key.
/// - `param_names: &[&'static str]`: backend keys of the posterior
///   parameters to return, in registration order.
/// - `sampling: &SamplingOptions`: draw counts and seed.
#[derive(Debug, Clone, Copy)]
pub struct EstimatorRequest<'a> {
    pub model_name: &'static str,
    pub input: &'a EstimatorInput,
    pub param_names: &'a [&'static str],
    pub sampling: &'a SamplingOptions,
}

/// Backend interface used by `Model::fit`.
///
/// - `type Error`: backend-specific failure. The orchestrator keeps only its
///   `Display` text, wrapped as `BackendError::EstimatorFailed`.
///
/// Required:
/// - `estimator_type(&self) -> EstimatorType`: estimator family, checked
///   against the model's supported list before any data is read.
/// - `fit(&mut self, &EstimatorRequest) -> Result<EstimatorOutput, Self::Error>`:
///   run the backend. Every name in `param_names` should be present in the
///   output; extra keys (sampler diagnostics) are allowed and dropped.
///
/// Notes:
/// - `fit` takes `&mut self` so backends can keep compiled programs or
///   call counters between fits.
pub trait Estimator {
    type Error: std::error::Error;

    fn estimator_type(&self) -> EstimatorType;
    fn fit(&mut self, request: &EstimatorRequest<'_>) -> Result<EstimatorOutput, Self::Error>;
}
