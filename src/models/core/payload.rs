//! Estimator input payload: derived values keyed by backend key.
//!
//! The orchestrator turns a model's derived fields into an [`EstimatorInput`]:
//! one [`InputValue`] per input key, in key-declaration order, addressed by
//! the key's backend string. Estimators only ever see this backend view.
use crate::models::core::mapping::{KeyMapping, ModelKey};
use ndarray::{Array1, Array2};

/// A single value handed to the estimator.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    /// Count-like scalar (observation count, regressor count).
    Int(usize),
    /// Numeric vector (response).
    Vector(Array1<f64>),
    /// Row-major numeric matrix, one row per observation.
    Matrix(Array2<f64>),
}

impl InputValue {
    pub fn as_int(&self) -> Option<usize> {
        match self {
            InputValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&Array1<f64>> {
        match self {
            InputValue::Vector(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Array2<f64>> {
        match self {
            InputValue::Matrix(values) => Some(values),
            _ => None,
        }
    }
}

/// Ordered `(backend key, value)` payload passed to an estimator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EstimatorInput {
    entries: Vec<(&'static str, InputValue)>,
}

impl EstimatorInput {
    /// Build the payload for every key of `mapping`, asking `value_of` for
    /// each key's derived value.
    ///
    /// The result holds exactly one entry per mapped key; backend-key
    /// uniqueness is guaranteed by the mapping.
    pub fn from_mapping<K, F>(mapping: &KeyMapping<K>, mut value_of: F) -> Self
    where
        K: ModelKey,
        F: FnMut(K) -> InputValue,
    {
        let entries =
            mapping.keys().iter().map(|&key| (key.backend_key(), value_of(key))).collect();
        Self { entries }
    }

    /// Value stored under a backend key.
    pub fn get(&self, backend_key: &str) -> Option<&InputValue> {
        self.entries.iter().find(|(key, _)| *key == backend_key).map(|(_, value)| value)
    }

    /// Backend keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &InputValue)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
