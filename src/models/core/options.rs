//! Model options: column configuration, estimator choice, and sampling knobs.
//!
//! Purpose
//! -------
//! Collect everything a caller fixes when constructing a model: which
//! columns hold the time index, response, and regressors, and how many draws
//! the estimator should produce. The estimator family is named by
//! [`EstimatorType`] and reported by the estimator itself.
//!
//! Key behaviors
//! -------------
//! - [`ModelConfig`] is a plain data carrier with `with_*` builders. Its
//!   consistency is checked by [`ModelConfig::validate`], which the fit
//!   orchestrator calls before touching the dataset and which hands back a
//!   borrowed [`ColumnSpec`] of the validated names.
//! - [`EstimatorType`] names the estimator family and parses from the usual
//!   string spellings via `FromStr`.
//! - [`SamplingOptions`] carries warm-up / draw / chain counts and a seed,
//!   validated at construction.
//!
//! Invariants & assumptions
//! ------------------------
//! - A config that passed `validate` has non-empty date and response column
//!   names and a duplicate-free regressor list that does not reuse either.
//! - `SamplingOptions` always has `num_sample > 0` and `chains > 0`.
//!
//! Conventions
//! -----------
//! - Configuration is fixed at model construction and never mutated by `fit`.
//! - No file or environment loading happens here; callers build configs in
//!   code.
use crate::models::errors::{ArgumentError, ArgumentResult};
use std::{fmt, str::FromStr};

/// Estimator family used to fit a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EstimatorType {
    /// Full Bayesian sampling with Stan (MCMC/NUTS).
    StanMcmc,
    /// Maximum a posteriori point estimate with Stan.
    StanMap,
    /// Stochastic variational inference with Pyro.
    PyroSvi,
}

impl EstimatorType {
    /// Canonical spelling, also accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            EstimatorType::StanMcmc => "stan-mcmc",
            EstimatorType::StanMap => "stan-map",
            EstimatorType::PyroSvi => "pyro-svi",
        }
    }
}

impl fmt::Display for EstimatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EstimatorType {
    type Err = ArgumentError;

    /// Parse an estimator name (case-insensitive; `-` and `_` are interchangeable).
    ///
    /// Accepts `"stan-mcmc"`, `"stan-map"`, `"pyro-svi"`. Any other value
    /// returns `ArgumentError::UnknownEstimator`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "stan-mcmc" => Ok(EstimatorType::StanMcmc),
            "stan-map" => Ok(EstimatorType::StanMap),
            "pyro-svi" => Ok(EstimatorType::PyroSvi),
            _ => Err(ArgumentError::UnknownEstimator {
                name: s.to_string(),
                reason: "Valid options are 'stan-mcmc', 'stan-map', or 'pyro-svi'.",
            }),
        }
    }
}

/// Draw counts and seed forwarded to the estimator.
///
/// Default
/// -------
/// - `num_warmup = 900`, `num_sample = 100`, `chains = 4`, `seed = 8888`.
///
/// Notes
/// -----
/// - Point-estimate estimators ignore `num_warmup`, `num_sample`, and `chains`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingOptions {
    pub num_warmup: usize,
    pub num_sample: usize,
    pub chains: usize,
    pub seed: u64,
}

impl SamplingOptions {
    /// Construct validated sampling options.
    ///
    /// Errors
    /// ------
    /// - `ArgumentError::InvalidSamplingOption` if `num_sample == 0` or
    ///   `chains == 0`.
    pub fn new(
        num_warmup: usize, num_sample: usize, chains: usize, seed: u64,
    ) -> ArgumentResult<Self> {
        let opts = Self { num_warmup, num_sample, chains, seed };
        opts.validate()?;
        Ok(opts)
    }

    /// Re-check the invariants of [`SamplingOptions::new`]; fields are public
    /// and may have been edited after construction.
    pub fn validate(&self) -> ArgumentResult<()> {
        if self.num_sample == 0 {
            return Err(ArgumentError::InvalidSamplingOption {
                option: "num_sample",
                value: self.num_sample,
                reason: "At least one posterior draw must be requested.",
            });
        }
        if self.chains == 0 {
            return Err(ArgumentError::InvalidSamplingOption {
                option: "chains",
                value: self.chains,
                reason: "At least one chain must be run.",
            });
        }
        Ok(())
    }

    /// Total number of posterior draws across chains.
    pub fn total_draws(&self) -> usize {
        self.num_sample * self.chains
    }
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self { num_warmup: 900, num_sample: 100, chains: 4, seed: 8888 }
    }
}

/// `ModelConfig`: construction-time configuration of a time-series model.
///
/// Fields
/// ------
/// - `response_col`: `Option<String>`
///   Name of the response column. Required for fitting.
/// - `date_col`: `Option<String>`
///   Name of the time-index column. Required for fitting.
/// - `regressor_col`: `Vec<String>`
///   Ordered regressor column names; may be empty.
/// - `sampling`: [`SamplingOptions`]
///   Draw counts forwarded to the estimator.
///
/// Notes
/// -----
/// - Missing or inconsistent columns are reported by [`ModelConfig::validate`]
///   as [`ArgumentError`]s, so a model can be constructed first and rejected
///   at fit time before any data is read.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub response_col: Option<String>,
    pub date_col: Option<String>,
    pub regressor_col: Vec<String>,
    pub sampling: SamplingOptions,
}

/// Validated column names borrowed from a [`ModelConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec<'a> {
    pub date_col: &'a str,
    pub response_col: &'a str,
    pub regressor_col: &'a [String],
}

impl ModelConfig {
    /// Config with the two required columns and default estimator settings.
    pub fn new(response_col: impl Into<String>, date_col: impl Into<String>) -> Self {
        Self {
            response_col: Some(response_col.into()),
            date_col: Some(date_col.into()),
            ..Self::default()
        }
    }

    pub fn with_regressors<I, S>(mut self, regressor_col: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regressor_col = regressor_col.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sampling(mut self, sampling: SamplingOptions) -> Self {
        self.sampling = sampling;
        self
    }

    /// Check column configuration consistency.
    ///
    /// Returns
    /// -------
    /// `ArgumentResult<ColumnSpec<'_>>`
    ///   The validated column names.
    ///
    /// Errors
    /// ------
    /// - `ArgumentError::MissingDateColumn` / `MissingResponseColumn` if a
    ///   required name is absent or empty.
    /// - `ArgumentError::DuplicateRegressor` if a regressor repeats.
    /// - `ArgumentError::RegressorColumnConflict` if a regressor reuses the
    ///   date or response column.
    pub fn validate(&self) -> ArgumentResult<ColumnSpec<'_>> {
        let date_col = match self.date_col.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(ArgumentError::MissingDateColumn),
        };
        let response_col = match self.response_col.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(ArgumentError::MissingResponseColumn),
        };
        for (i, name) in self.regressor_col.iter().enumerate() {
            if self.regressor_col[..i].contains(name) {
                return Err(ArgumentError::DuplicateRegressor { name: name.clone() });
            }
            if name == date_col {
                return Err(ArgumentError::RegressorColumnConflict {
                    name: name.clone(),
                    role: "date",
                });
            }
            if name == response_col {
                return Err(ArgumentError::RegressorColumnConflict {
                    name: name.clone(),
                    role: "response",
                });
            }
        }
        Ok(ColumnSpec { date_col, response_col, regressor_col: &self.regressor_col })
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            response_col: None,
            date_col: None,
            regressor_col: Vec::new(),
            sampling: SamplingOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // `FromStr` accepts the canonical names in any case and with underscores.
    fn estimator_type_from_str_accepts_canonical_and_variant_spellings() {
        assert_eq!("stan-mcmc".parse::<EstimatorType>(), Ok(EstimatorType::StanMcmc));
        assert_eq!("STAN_MAP".parse::<EstimatorType>(), Ok(EstimatorType::StanMap));
        assert_eq!(" Pyro-SVI ".parse::<EstimatorType>(), Ok(EstimatorType::PyroSvi));
        assert_eq!(EstimatorType::StanMap.to_string(), "stan-map");
    }

    #[test]
    fn estimator_type_from_str_rejects_unknown_name() {
        let result = "cmdstan".parse::<EstimatorType>();

        match result {
            Err(ArgumentError::UnknownEstimator { name, .. }) => assert_eq!(name, "cmdstan"),
            other => panic!("expected UnknownEstimator, got: {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Zero draws or zero chains are rejected; zero warm-up is allowed.
    fn sampling_options_new_validates_counts() {
        assert!(SamplingOptions::new(0, 10, 1, 1).is_ok());
        assert_eq!(
            SamplingOptions::new(100, 0, 4, 1),
            Err(ArgumentError::InvalidSamplingOption {
                option: "num_sample",
                value: 0,
                reason: "At least one posterior draw must be requested.",
            })
        );
        assert!(matches!(
            SamplingOptions::new(100, 10, 0, 1),
            Err(ArgumentError::InvalidSamplingOption { option: "chains", .. })
        ));
        assert_eq!(SamplingOptions::default().total_draws(), 400);
    }

    #[test]
    fn validate_with_required_columns_returns_names() {
        let config = ModelConfig::new("sales", "week").with_regressors(["price", "promo"]);

        let columns = config.validate().unwrap();

        assert_eq!(columns.date_col, "week");
        assert_eq!(columns.response_col, "sales");
        assert_eq!(columns.regressor_col, ["price".to_string(), "promo".to_string()]);
    }

    #[test]
    // Purpose
    // -------
    // Missing or blank required columns are argument errors, date first.
    fn validate_with_missing_columns_returns_argument_errors() {
        let nothing = ModelConfig::default();
        let blank_response =
            ModelConfig { response_col: Some("  ".into()), ..ModelConfig::new("y", "d") };

        assert_eq!(nothing.validate().unwrap_err(), ArgumentError::MissingDateColumn);
        assert_eq!(blank_response.validate().unwrap_err(), ArgumentError::MissingResponseColumn);
    }

    #[test]
    fn validate_with_bad_regressors_returns_conflicts() {
        let dup = ModelConfig::new("y", "d").with_regressors(["x", "x"]);
        let on_response = ModelConfig::new("y", "d").with_regressors(["y"]);
        let on_date = ModelConfig::new("y", "d").with_regressors(["x", "d"]);

        assert_eq!(
            dup.validate().unwrap_err(),
            ArgumentError::DuplicateRegressor { name: "x".into() }
        );
        assert_eq!(
            on_response.validate().unwrap_err(),
            ArgumentError::RegressorColumnConflict { name: "y".into(), role: "response" }
        );
        assert_eq!(
            on_date.validate().unwrap_err(),
            ArgumentError::RegressorColumnConflict { name: "d".into(), role: "date" }
        );
    }
}
