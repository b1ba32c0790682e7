//! Error types for the geometric algebra core.

/// Errors produced by blade validation, multivector arithmetic, and rotors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CliffordError {
    #[error("blade index {blade} out of range for dimension {dim} (must be < 2^{dim})")]
    InvalidBlade { blade: usize, dim: usize },

    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("rotor contains odd-grade term at blade {blade}")]
    InvalidRotor { blade: usize },

    #[error("rotor has zero magnitude")]
    DegenerateRotor,
}
