//! rust_orbit: data preparation, parameter contracts, and fit orchestration
//! for Bayesian time-series models.
//!
//! Purpose
//! -------
//! Serve as the crate root. The crate validates a time-indexed dataset,
//! derives model-ready tensors and training metadata from it, declares which
//! posterior parameters a model expects from its estimator, and drives the
//! estimator call through a small fit state machine. The estimator itself
//! (MCMC, MAP, SVI) is an external collaborator behind the
//! [`models::Estimator`] trait.
//!
//! Key behaviors
//! -------------
//! - [`data`]: named-column frames and timestamp parsing.
//! - [`models`]: configuration, validation, key mappings, model templates
//!   (Bayesian linear regression in [`models::lm`]), and the [`models::Model`]
//!   orchestrator.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input frames are read-only; every derived value is a fresh allocation.
//! - Errors fall into three disjoint kinds (argument, data, backend) and are
//!   always returned, never swallowed.
//!
//! Conventions
//! -----------
//! - Logging uses `tracing`; the crate emits events but never installs a
//!   subscriber.
//! - Row indices are 0-based.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each module; `tests/integration_lm_pipeline.rs`
//!   runs the linear model end to end against stub estimators.

pub mod data;
pub mod models;

pub mod prelude {
    pub use crate::data::{Column, TimeSeriesFrame};
    pub use crate::models::prelude::*;
}
