//! lm: Bayesian linear regression on a time-indexed frame.
//!
//! Purpose
//! -------
//! The reference [`ModelTemplate`]: response `y_t = α + X_t β + ε_t` with
//! `ε_t ~ N(0, σ²)`, fitted by an external estimator. This module owns the
//! model's key vocabularies ([`DataInputMapper`],
//! [`RegressionSamplingParameters`]) and its field derivation.
//!
//! Key behaviors
//! -------------
//! - [`LinearModel::derive_fields`] runs the base derivation first, then
//!   checks every configured regressor column and assembles the
//!   `n × k` regressor matrix.
//! - With no regressors the matrix is `n × 0`, so the estimator payload
//!   always has exactly one entry per input key.
//! - All three posterior parameters are always requested.
//!
//! Invariants & assumptions
//! ------------------------
//! - `LmFields::num_of_regressors == regressor_col.len() == regressor_matrix.ncols()`.
//! - `regressor_matrix.nrows() == base.num_of_observations`.
//! - Regressor values are finite.
//!
//! Downstream usage
//! ----------------
//! - Wrap a [`LinearModel`] and an estimator in `Model::new` and call `fit`.
pub mod constants;

pub use self::constants::{DataInputMapper, RegressionSamplingParameters};

use crate::{
    data::frame::TimeSeriesFrame,
    models::{
        core::{
            options::{ColumnSpec, ModelConfig},
            payload::InputValue,
            validation::{validate_finite, validate_regressor_columns},
        },
        errors::DataResult,
        template::{BaseFields, ModelTemplate, derive_base_fields},
    },
};
use ndarray::Array2;

/// Name the linear model reports to estimators.
pub const MODEL_NAME: &str = "lm";

/// Bayesian linear regression template.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    config: ModelConfig,
}

impl LinearModel {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    /// Mutable configuration; changes apply from the next fit on.
    pub fn config_mut(&mut self) -> &mut ModelConfig {
        &mut self.config
    }
}

/// Fields derived by [`LinearModel`] from a training frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LmFields {
    pub base: BaseFields,
    pub num_of_regressors: usize,
    pub regressor_col: Vec<String>,
    /// `num_of_observations × num_of_regressors`, one column per regressor.
    pub regressor_matrix: Array2<f64>,
}

impl From<BaseFields> for LmFields {
    fn from(base: BaseFields) -> Self {
        let n = base.num_of_observations;
        Self {
            base,
            num_of_regressors: 0,
            regressor_col: Vec::new(),
            regressor_matrix: Array2::zeros((n, 0)),
        }
    }
}

impl AsRef<BaseFields> for LmFields {
    fn as_ref(&self) -> &BaseFields {
        &self.base
    }
}

impl ModelTemplate for LinearModel {
    type Input = DataInputMapper;
    type Output = RegressionSamplingParameters;
    type Fields = LmFields;

    fn model_name(&self) -> &'static str {
        MODEL_NAME
    }

    fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Base derivation, then the regressor matrix.
    ///
    /// Errors
    /// ------
    /// - Any error of [`derive_base_fields`].
    /// - `DataError::MissingColumn` / `DataError::NonNumericColumn` for the
    ///   first bad regressor column.
    /// - `DataError::NonFiniteValue` for the first NaN/±inf regressor value.
    fn derive_fields(
        &self, frame: &TimeSeriesFrame, columns: ColumnSpec<'_>,
    ) -> DataResult<LmFields> {
        let base = derive_base_fields(frame, columns)?;
        validate_regressor_columns(frame, columns.regressor_col)?;

        let n = base.num_of_observations;
        let mut regressor_matrix = Array2::zeros((n, columns.regressor_col.len()));
        for (j, name) in columns.regressor_col.iter().enumerate() {
            let values = frame.numeric(name)?;
            validate_finite(name, values.view())?;
            regressor_matrix.column_mut(j).assign(values);
        }

        Ok(LmFields {
            base,
            num_of_regressors: columns.regressor_col.len(),
            regressor_col: columns.regressor_col.to_vec(),
            regressor_matrix,
        })
    }

    fn input_value(&self, fields: &LmFields, key: DataInputMapper) -> InputValue {
        match key {
            DataInputMapper::NumOfObservations => InputValue::Int(fields.base.num_of_observations),
            DataInputMapper::Response => InputValue::Vector(fields.base.response.clone()),
            DataInputMapper::NumOfRegressors => InputValue::Int(fields.num_of_regressors),
            DataInputMapper::RegressorMatrix => InputValue::Matrix(fields.regressor_matrix.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::DataError;
    use ndarray::array;

    fn frame() -> TimeSeriesFrame {
        TimeSeriesFrame::new()
            .with_column("week", vec!["2024-01-01", "2024-01-08", "2024-01-15"])
            .unwrap()
            .with_column("sales", vec![10.0, 12.0, 11.0])
            .unwrap()
            .with_column("price", vec![1.0, 0.9, 1.1])
            .unwrap()
            .with_column("promo", vec![0.0, 1.0, 0.0])
            .unwrap()
            .with_column("channel", vec!["web", "store", "web"])
            .unwrap()
    }

    fn derive(model: &LinearModel, df: &TimeSeriesFrame) -> DataResult<LmFields> {
        let columns = model.config().validate().unwrap();
        model.derive_fields(df, columns)
    }

    #[test]
    // Purpose
    // -------
    // Regressor columns become matrix columns in configured order.
    //
    // Given
    // -----
    // - Regressors `["promo", "price"]` (reverse of frame order).
    //
    // Expect
    // ------
    // - A 3×2 matrix whose first column is `promo`.
    fn derive_fields_builds_regressor_matrix_in_config_order() {
        // Arrange
        let config = ModelConfig::new("sales", "week").with_regressors(["promo", "price"]);
        let model = LinearModel::new(config);

        // Act
        let fields = derive(&model, &frame()).unwrap();

        // Assert
        assert_eq!(fields.num_of_regressors, 2);
        assert_eq!(fields.regressor_col, vec!["promo".to_string(), "price".to_string()]);
        assert_eq!(fields.regressor_matrix, array![[0.0, 1.0], [1.0, 0.9], [0.0, 1.1]]);
        assert_eq!(fields.base.num_of_observations, 3);
    }

    #[test]
    fn derive_fields_without_regressors_has_empty_matrix() {
        let model = LinearModel::new(ModelConfig::new("sales", "week"));

        let fields = derive(&model, &frame()).unwrap();

        assert_eq!(fields.num_of_regressors, 0);
        assert_eq!(fields.regressor_matrix.dim(), (3, 0));
    }

    #[test]
    fn derive_fields_with_text_regressor_returns_non_numeric_column() {
        let config = ModelConfig::new("sales", "week").with_regressors(["channel"]);
        let model = LinearModel::new(config);

        let result = derive(&model, &frame());

        assert_eq!(result.unwrap_err(), DataError::NonNumericColumn { column: "channel".into() });
    }

    #[test]
    fn derive_fields_with_absent_regressor_returns_missing_column() {
        let config = ModelConfig::new("sales", "week").with_regressors(["price", "temperature"]);
        let model = LinearModel::new(config);

        let result = derive(&model, &frame());

        assert_eq!(result.unwrap_err(), DataError::MissingColumn { column: "temperature".into() });
    }

    #[test]
    // Purpose
    // -------
    // Every input key maps to a value of the expected shape.
    fn input_value_covers_every_key() {
        let model = LinearModel::new(ModelConfig::new("sales", "week").with_regressors(["price"]));
        let fields = derive(&model, &frame()).unwrap();

        let value = |key| model.input_value(&fields, key);

        assert_eq!(value(DataInputMapper::NumOfObservations), InputValue::Int(3));
        assert_eq!(value(DataInputMapper::NumOfRegressors), InputValue::Int(1));
        assert_eq!(value(DataInputMapper::Response).as_vector(), Some(&array![10.0, 12.0, 11.0]));
        assert_eq!(
            value(DataInputMapper::RegressorMatrix).as_matrix().map(|m| m.dim()),
            Some((3, 1))
        );
    }
}
