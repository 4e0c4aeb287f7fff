//! models: Bayesian time-series model templates and their fit lifecycle.
//!
//! Purpose
//! -------
//! Turn a validated, time-indexed frame into the payload a Bayesian
//! estimator expects, hand it off, and store the posterior samples it
//! returns under model-internal names.
//!
//! Key behaviors
//! -------------
//! - [`core`]: configuration, dataset validation, metadata extraction, key
//!   mappings, payload and posterior containers, fit states.
//! - [`template`]: the [`ModelTemplate`] hooks a concrete model implements,
//!   with base behavior as provided methods.
//! - [`estimator`]: the [`Estimator`] trait external backends implement.
//! - [`fit`]: the [`Model`] orchestrator.
//! - [`lm`]: Bayesian linear regression, the reference template.
//! - [`errors`]: [`ArgumentError`], [`DataError`], [`BackendError`] and the
//!   umbrella [`ModelError`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Caller frames are never mutated.
//! - A model is either unfit or holds one complete, consistent fitted state.
//!
//! Downstream usage
//! ----------------
//! - `use rust_orbit::models::prelude::*;` imports the everyday surface.

pub mod core;
pub mod errors;
pub mod estimator;
pub mod fit;
pub mod lm;
pub mod template;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{
    EstimatorInput, EstimatorOutput, EstimatorType, FitStatus, InputValue, KeyMapping, ModelConfig,
    ModelKey, PosteriorDraws, PosteriorSamples, SamplingOptions, TrainingMetadata,
};
pub use self::errors::{
    ArgumentError, ArgumentResult, BackendError, BackendResult, DataError, DataResult, ErrorKind,
    ModelError, ModelResult,
};
pub use self::estimator::{Estimator, EstimatorRequest};
pub use self::fit::{FittedState, Model};
pub use self::lm::{DataInputMapper, LinearModel, LmFields, RegressionSamplingParameters};
pub use self::template::{BaseFields, ModelTemplate, derive_base_fields, register_output_keys};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::{
        ArgumentError, BackendError, DataError, DataInputMapper, Estimator, EstimatorOutput,
        EstimatorRequest, EstimatorType, FitStatus, LinearModel, Model, ModelConfig, ModelError,
        ModelKey, ModelResult, ModelTemplate, PosteriorDraws, RegressionSamplingParameters,
        SamplingOptions,
    };
}
