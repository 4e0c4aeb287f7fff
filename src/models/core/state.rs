//! Fit lifecycle states.
//!
//! A model moves through
//! `Unfit → Validating → DerivingFields → AwaitingBackend → Fitted`, with
//! `Failed` reachable from every in-flight state. `Fitted` and `Failed` end a
//! fit call; the next call re-enters `Validating`.
use std::fmt;

/// Where a model is in its fit lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FitStatus {
    /// No fit has been attempted.
    Unfit,
    /// Configuration and dataset checks are running.
    Validating,
    /// Metadata extraction and field derivation are running.
    DerivingFields,
    /// The estimator has been called and has not returned.
    AwaitingBackend,
    /// The last fit stored a complete posterior set.
    Fitted,
    /// The last fit failed; any earlier fitted state is still held.
    Failed,
}

impl FitStatus {
    /// `true` for the states a fit call ends in.
    pub fn is_terminal(self) -> bool {
        matches!(self, FitStatus::Fitted | FitStatus::Failed)
    }

    /// Whether the lifecycle allows moving from `self` to `next`.
    pub fn can_transition_to(self, next: FitStatus) -> bool {
        use FitStatus::*;
        match (self, next) {
            (Unfit | Fitted | Failed, Validating) => true,
            (Validating, DerivingFields) => true,
            (DerivingFields, AwaitingBackend) => true,
            (AwaitingBackend, Fitted) => true,
            (Validating | DerivingFields | AwaitingBackend, Failed) => true,
            _ => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FitStatus::Unfit => "unfit",
            FitStatus::Validating => "validating",
            FitStatus::DerivingFields => "deriving-fields",
            FitStatus::AwaitingBackend => "awaiting-backend",
            FitStatus::Fitted => "fitted",
            FitStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for FitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
