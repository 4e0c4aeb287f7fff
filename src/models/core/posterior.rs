//! Posterior containers: raw estimator output and symbolically keyed samples.
//!
//! Purpose
//! -------
//! Represent what an estimator hands back and what a fitted model keeps:
//!
//! - [`PosteriorDraws`]: draws for one parameter as a `(n_draws, dim)` matrix.
//!   Point-estimate estimators return a single row.
//! - [`EstimatorOutput`]: the estimator's result keyed by backend key.
//! - [`PosteriorSamples`]: the stored result keyed by symbolic output key.
//!
//! Key behaviors
//! -------------
//! - [`PosteriorSamples::from_output`] is the translation boundary: it checks
//!   that every expected key is present and finite, then re-keys the draws
//!   by symbolic name. It either returns the complete set or an error; a
//!   partial set is never built.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every key in a `PosteriorSamples<K>` was requested from the estimator.
//! - Every stored draw is finite.
//! - Backend keys the estimator returns but nobody asked for (e.g. sampler
//!   diagnostics such as `lp__`) are dropped.
use crate::models::{
    core::mapping::ModelKey,
    errors::{BackendError, BackendResult},
};
use ndarray::{Array1, Array2, ArrayView1, Axis};
use std::collections::{BTreeMap, HashMap};

/// Draws for a single posterior parameter, shaped `(n_draws, dim)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PosteriorDraws {
    values: Array2<f64>,
}

impl PosteriorDraws {
    /// Wrap a `(n_draws, dim)` matrix.
    pub fn new(values: Array2<f64>) -> Self {
        Self { values }
    }

    /// Draws of a scalar parameter (`dim == 1`).
    pub fn scalar(draws: Array1<f64>) -> Self {
        Self { values: draws.insert_axis(Axis(1)) }
    }

    /// Single point estimate (`n_draws == 1`).
    pub fn point(estimate: Array1<f64>) -> Self {
        Self { values: estimate.insert_axis(Axis(0)) }
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn n_draws(&self) -> usize {
        self.values.nrows()
    }

    pub fn dim(&self) -> usize {
        self.values.ncols()
    }

    /// Draw `i` as a vector of length `dim`.
    pub fn draw(&self, i: usize) -> Option<ArrayView1<'_, f64>> {
        (i < self.n_draws()).then(|| self.values.row(i))
    }

    /// Posterior mean per dimension; `None` when there are no draws.
    pub fn mean(&self) -> Option<Array1<f64>> {
        self.values.mean_axis(Axis(0))
    }

    /// First non-finite entry as `(draw, index, value)`.
    fn first_non_finite(&self) -> Option<(usize, usize, f64)> {
        self.values.indexed_iter().find(|(_, v)| !v.is_finite()).map(|((r, c), &v)| (r, c, v))
    }
}

/// Estimator result keyed by backend key.
pub type EstimatorOutput = HashMap<String, PosteriorDraws>;

/// Posterior samples of a fitted model, keyed by symbolic output key.
#[derive(Debug, Clone, PartialEq)]
pub struct PosteriorSamples<K: ModelKey> {
    samples: BTreeMap<K, PosteriorDraws>,
}

impl<K: ModelKey> PosteriorSamples<K> {
    /// Re-key an estimator result by symbolic name.
    ///
    /// Parameters
    /// ----------
    /// - `output`: [`EstimatorOutput`]
    ///   Raw estimator result; consumed.
    /// - `expected`: `&[K]`
    ///   Keys that were requested; each must be present.
    ///
    /// Errors
    /// ------
    /// - `BackendError::MissingParameter` for the first expected key absent
    ///   from `output`.
    /// - `BackendError::NonFinitePosterior` for the first non-finite draw.
    pub fn from_output(mut output: EstimatorOutput, expected: &[K]) -> BackendResult<Self> {
        let mut samples = BTreeMap::new();
        for &key in expected {
            let draws = output.remove(key.backend_key()).ok_or(BackendError::MissingParameter {
                name: key.symbolic_name(),
                key: key.backend_key(),
            })?;
            if let Some((draw, index, value)) = draws.first_non_finite() {
                return Err(BackendError::NonFinitePosterior {
                    name: key.symbolic_name(),
                    draw,
                    index,
                    value,
                });
            }
            samples.insert(key, draws);
        }
        Ok(Self { samples })
    }

    /// Draws for a symbolic key.
    pub fn get(&self, key: K) -> Option<&PosteriorDraws> {
        self.samples.get(&key)
    }

    /// Draws for a symbolic name such as `"REGRESSION_MEAN"`.
    pub fn get_by_name(&self, name: &str) -> Option<&PosteriorDraws> {
        K::from_symbolic_name(name).and_then(|key| self.get(key))
    }

    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.samples.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &PosteriorDraws)> {
        self.samples.iter().map(|(key, draws)| (*key, draws))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    enum Params {
        Level,
        Scale,
    }

    impl ModelKey for Params {
        const ALL: &'static [Self] = &[Params::Level, Params::Scale];

        fn symbolic_name(self) -> &'static str {
            match self {
                Params::Level => "LEVEL",
                Params::Scale => "SCALE",
            }
        }

        fn backend_key(self) -> &'static str {
            match self {
                Params::Level => "l",
                Params::Scale => "s",
            }
        }
    }

    fn output(pairs: &[(&str, PosteriorDraws)]) -> EstimatorOutput {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    // Purpose
    // -------
    // A complete result is re-keyed by symbolic name; extra backend keys
    // are dropped.
    fn from_output_rekeys_complete_result_and_drops_extras() {
        // Arrange
        let raw = output(&[
            ("l", PosteriorDraws::scalar(array![1.0, 2.0])),
            ("s", PosteriorDraws::scalar(array![0.1, 0.2])),
            ("lp__", PosteriorDraws::scalar(array![-3.0, -2.5])),
        ]);

        // Act
        let samples = PosteriorSamples::from_output(raw, Params::ALL).unwrap();

        // Assert
        assert_eq!(samples.len(), 2);
        assert_eq!(samples.keys().collect::<Vec<_>>(), vec![Params::Level, Params::Scale]);
        assert_eq!(samples.get_by_name("LEVEL").map(PosteriorDraws::n_draws), Some(2));
        assert!(samples.get_by_name("l").is_none());
    }

    #[test]
    fn from_output_with_missing_key_returns_missing_parameter() {
        let raw = output(&[("l", PosteriorDraws::scalar(array![1.0]))]);

        let result = PosteriorSamples::from_output(raw, Params::ALL);

        assert_eq!(result, Err(BackendError::MissingParameter { name: "SCALE", key: "s" }));
    }

    #[test]
    fn from_output_with_nan_draw_returns_non_finite_posterior() {
        let raw = output(&[
            ("l", PosteriorDraws::new(array![[1.0, 2.0], [3.0, f64::NAN]])),
            ("s", PosteriorDraws::scalar(array![1.0, 1.0])),
        ]);

        let result = PosteriorSamples::from_output(raw, Params::ALL);

        match result {
            Err(BackendError::NonFinitePosterior { name, draw, index, value }) => {
                assert_eq!(name, "LEVEL");
                assert_eq!((draw, index), (1, 1));
                assert!(value.is_nan());
            }
            other => panic!("expected NonFinitePosterior, got: {other:?}"),
        }
    }

    #[test]
    fn draws_shapes_and_mean() {
        let scalar = PosteriorDraws::scalar(array![1.0, 3.0]);
        let point = PosteriorDraws::point(array![0.5, -0.5, 2.0]);

        assert_eq!((scalar.n_draws(), scalar.dim()), (2, 1));
        assert_eq!(scalar.mean(), Some(array![2.0]));
        assert_eq!((point.n_draws(), point.dim()), (1, 3));
        assert_eq!(point.draw(0).map(|d| d.to_owned()), Some(array![0.5, -0.5, 2.0]));
        assert!(point.draw(1).is_none());
    }
}
