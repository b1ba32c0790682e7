//! Rotors and the sandwich product R·M·R̃.

use crate::blade;
use crate::error::CliffordError;
use crate::multivector::{Multivector, CLEAN_TOLERANCE};
use crate::products::geometric;
use crate::Result;

/// Sandwich product: `rotor · mv · reverse(rotor)`.
///
/// Transports `mv` through the transformation the rotor encodes. Pure and
/// deterministic; fails only on dimension mismatch.
pub fn sandwich(rotor: &Multivector, mv: &Multivector) -> Result<Multivector> {
    let temp = geometric(rotor, mv)?;
    geometric(&temp, &rotor.reverse())
}

/// A validated rotor: an even-graded multivector with nonzero magnitude.
///
/// The raw reasoning path works on plain `Multivector`s and never checks
/// grade parity or magnitude; this wrapper is the opt-in hardened surface
/// for callers that want those guarantees before applying a transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Rotor(Multivector);

impl Rotor {
    /// Validate a multivector as a rotor.
    ///
    /// Fails with `InvalidRotor` if any odd-grade term is present, or
    /// `DegenerateRotor` if the magnitude is below the cleaning tolerance.
    pub fn new(mv: Multivector) -> Result<Self> {
        if let Some(&b) = mv.terms().keys().find(|&&b| blade::grade(b) % 2 == 1) {
            return Err(CliffordError::InvalidRotor { blade: b });
        }
        if mv.norm() < CLEAN_TOLERANCE {
            return Err(CliffordError::DegenerateRotor);
        }
        Ok(Self(mv))
    }

    /// Scale to unit magnitude.
    pub fn normalized(&self) -> Rotor {
        // norm is nonzero by construction
        Self(self.0.scale(1.0 / self.0.norm()))
    }

    /// Apply this rotor to a multivector via the sandwich product.
    pub fn apply(&self, mv: &Multivector) -> Result<Multivector> {
        sandwich(&self.0, mv)
    }

    /// The underlying multivector.
    pub fn as_multivector(&self) -> &Multivector {
        &self.0
    }

    pub fn into_inner(self) -> Multivector {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandwich_with_scalar_one_is_identity() {
        let one = Multivector::scalar(3, 1.0);
        let v = Multivector::vector(3, &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(sandwich(&one, &v).unwrap(), v);
    }

    #[test]
    fn test_sandwich_rotates_e1_toward_e2() {
        // R = 1 - e12 (the unnormalized rotor 1 + e2·e1)
        let rotor = Multivector::new(3, [(0, 1.0), (3, -1.0)]).unwrap();
        let e1 = Multivector::basis(3, 0).unwrap();

        let out = sandwich(&rotor, &e1).unwrap();
        // R e1 R̃ = 2·e2 exactly for this rotor
        assert!((out.coeff(0b010) - 2.0).abs() < 1e-12);
        assert_eq!(out.coeff(0b001), 0.0);
    }

    #[test]
    fn test_rotor_rejects_odd_grade() {
        let mv = Multivector::new(3, [(0, 1.0), (1, 0.5)]).unwrap();
        assert_eq!(
            Rotor::new(mv).unwrap_err(),
            CliffordError::InvalidRotor { blade: 1 }
        );
    }

    #[test]
    fn test_rotor_rejects_zero_magnitude() {
        assert_eq!(
            Rotor::new(Multivector::zero(3)).unwrap_err(),
            CliffordError::DegenerateRotor
        );
    }

    #[test]
    fn test_rotor_normalized_has_unit_norm() {
        let mv = Multivector::new(3, [(0, 1.0), (3, -1.0)]).unwrap();
        let r = Rotor::new(mv).unwrap().normalized();
        assert!((r.as_multivector().norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalized_rotor_preserves_norm() {
        let mv = Multivector::new(3, [(0, 1.0), (3, -1.0)]).unwrap();
        let r = Rotor::new(mv).unwrap().normalized();
        let v = Multivector::vector(3, &[3.0, 4.0, 0.0]).unwrap();
        let out = r.apply(&v).unwrap();
        assert!((out.norm() - v.norm()).abs() < 1e-9);
    }
}
