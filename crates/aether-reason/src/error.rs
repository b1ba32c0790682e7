//! Error types for the reasoning layer.

use aether_clifford::CliffordError;

/// Errors produced by concept lookup and rotor derivation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReasonError {
    #[error("unknown concept '{0}'")]
    UnknownConcept(String),

    #[error(transparent)]
    Clifford(#[from] CliffordError),
}
