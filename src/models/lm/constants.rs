//! Key vocabularies of the linear regression model.
//!
//! - [`DataInputMapper`]: symbolic input names and the backend variables the
//!   estimator program declares in its `data` block.
//! - [`RegressionSamplingParameters`]: symbolic posterior names and the
//!   backend parameter names sampled by the program.
//!
//! Backend keys are fixed by the estimator program and must not change
//! independently of it.
use crate::models::core::mapping::ModelKey;

/// Inputs of the linear model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DataInputMapper {
    /// Number of rows.
    NumOfObservations,
    /// Response vector.
    Response,
    /// Number of regressor columns.
    NumOfRegressors,
    /// Regressor matrix, `num_of_observations × num_of_regressors`.
    RegressorMatrix,
}

impl ModelKey for DataInputMapper {
    const ALL: &'static [Self] = &[
        DataInputMapper::NumOfObservations,
        DataInputMapper::Response,
        DataInputMapper::NumOfRegressors,
        DataInputMapper::RegressorMatrix,
    ];

    fn symbolic_name(self) -> &'static str {
        match self {
            DataInputMapper::NumOfObservations => "NUM_OF_OBSERVATIONS",
            DataInputMapper::Response => "RESPONSE",
            DataInputMapper::NumOfRegressors => "NUM_OF_REGRESSORS",
            DataInputMapper::RegressorMatrix => "REGRESSOR_MATRIX",
        }
    }

    fn backend_key(self) -> &'static str {
        match self {
            DataInputMapper::NumOfObservations => "NUM_OF_OBS",
            DataInputMapper::Response => "RESPONSE",
            DataInputMapper::NumOfRegressors => "NUM_OF_REGRESSOR",
            DataInputMapper::RegressorMatrix => "REGRESSOR_MAT",
        }
    }
}

/// Posterior parameters of the linear model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegressionSamplingParameters {
    /// Intercept.
    RegressionMean,
    /// Regressor coefficients, one per regressor column.
    RegressionCoefficients,
    /// Observation noise scale.
    ResidualSigma,
}

impl ModelKey for RegressionSamplingParameters {
    const ALL: &'static [Self] = &[
        RegressionSamplingParameters::RegressionMean,
        RegressionSamplingParameters::RegressionCoefficients,
        RegressionSamplingParameters::ResidualSigma,
    ];

    fn symbolic_name(self) -> &'static str {
        match self {
            RegressionSamplingParameters::RegressionMean => "REGRESSION_MEAN",
            RegressionSamplingParameters::RegressionCoefficients => "REGRESSION_COEFFICIENTS",
            RegressionSamplingParameters::ResidualSigma => "RESIDUAL_SIGMA",
        }
    }

    fn backend_key(self) -> &'static str {
        match self {
            RegressionSamplingParameters::RegressionMean => "alpha",
            RegressionSamplingParameters::RegressionCoefficients => "beta",
            RegressionSamplingParameters::ResidualSigma => "obs_sigma",
        }
    }
}
