//! Symbolic-name ↔ backend-key mappings for model inputs and posterior outputs.
//!
//! Purpose
//! -------
//! Describe, per model type, the closed set of values fed to an estimator
//! (inputs) and the closed set of posterior quantities expected back from it
//! (outputs). Each set is a Rust enum implementing [`ModelKey`]; the enum is
//! the only place a backend-facing string appears.
//!
//! Key behaviors
//! -------------
//! - [`ModelKey`] ties each variant to a stable symbolic name (used by
//!   callers and tests) and a backend key (used in the estimator's
//!   namespace), and lists all variants in declaration order via `ALL`.
//! - [`KeyMapping`] is the validated, ordered view of one such enum: it
//!   rejects duplicated symbolic names or backend keys once, at construction.
//!
//! Invariants & assumptions
//! ------------------------
//! - Symbolic names are unique within a key enum.
//! - Backend keys are unique within a key enum, so no two inputs (or two
//!   outputs) collide in the estimator's namespace.
//! - `ALL` lists every variant exactly once, in declaration order.
//!
//! Conventions
//! -----------
//! - Symbolic names are `SCREAMING_SNAKE_CASE`; backend keys are whatever the
//!   estimator expects (e.g. Stan data / parameter names).
use crate::models::errors::{ArgumentError, ArgumentResult};
use std::{fmt::Debug, hash::Hash};

/// A closed, ordered set of named keys shared between a model and its estimator.
///
/// Implementors are field-less enums. `ALL` must contain every variant once,
/// in declaration order; [`KeyMapping::new`] checks the uniqueness invariants.
pub trait ModelKey: Copy + Eq + Ord + Hash + Debug + 'static {
    /// Every key, in declaration order.
    const ALL: &'static [Self];

    /// Model-internal identifier.
    fn symbolic_name(self) -> &'static str;

    /// Identifier in the estimator's namespace.
    fn backend_key(self) -> &'static str;

    /// Look up a key by its symbolic name.
    fn from_symbolic_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.symbolic_name() == name)
    }

    /// Look up a key by its backend key.
    fn from_backend_key(backend_key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.backend_key() == backend_key)
    }
}

/// `KeyMapping`: validated, ordered (symbolic name → backend key) pairs.
///
/// Purpose
/// -------
/// Materialize a [`ModelKey`] enum as an immutable ordered mapping whose
/// uniqueness invariants have been checked.
///
/// Fields
/// ------
/// - `keys`: `Vec<K>`
///   Keys in declaration order.
///
/// Invariants
/// ----------
/// - No two keys share a symbolic name or a backend key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMapping<K: ModelKey> {
    keys: Vec<K>,
}

impl<K: ModelKey> KeyMapping<K> {
    /// Build the mapping for `K` and check its uniqueness invariants.
    ///
    /// Errors
    /// ------
    /// - `ArgumentError::DuplicateSymbolicName` if two keys share a symbolic name.
    /// - `ArgumentError::DuplicateBackendKey` if two keys share a backend key.
    pub fn new() -> ArgumentResult<Self> {
        Self::from_keys(K::ALL)
    }

    /// Build a mapping from an explicit key list (a subset or reordering of `K::ALL`).
    ///
    /// Errors are the same as for [`KeyMapping::new`].
    pub fn from_keys(keys: &[K]) -> ArgumentResult<Self> {
        for (i, key) in keys.iter().enumerate() {
            for other in &keys[..i] {
                if other.symbolic_name() == key.symbolic_name() {
                    return Err(ArgumentError::DuplicateSymbolicName { name: key.symbolic_name() });
                }
                if other.backend_key() == key.backend_key() {
                    return Err(ArgumentError::DuplicateBackendKey { key: key.backend_key() });
                }
            }
        }
        Ok(Self { keys: keys.to_vec() })
    }

    /// Keys in order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// `(symbolic name, backend key)` pairs in order.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.keys.iter().map(|key| (key.symbolic_name(), key.backend_key()))
    }

    /// Backend keys in order.
    pub fn backend_keys(&self) -> Vec<&'static str> {
        self.keys.iter().map(|key| key.backend_key()).collect()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: K) -> bool {
        self.keys.contains(&key)
    }
}
