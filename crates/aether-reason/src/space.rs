//! Named-concept store and rotor derivation.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use aether_clifford::multivector::CLEAN_TOLERANCE;
use aether_clifford::products::geometric;
use aether_clifford::rotor::sandwich;
use aether_clifford::{CliffordError, Multivector};

use crate::error::ReasonError;
use crate::Result;

/// A store of named concepts, each a grade-1 multivector in a shared
/// dimension.
///
/// Explicitly constructed and passed by the caller; there is no
/// process-wide default instance. Registration takes the write lock,
/// lookups take read locks, so readers run concurrently and writers are
/// serialized.
pub struct ConceptSpace {
    dim: usize,
    concepts: RwLock<HashMap<String, Multivector>>,
}

impl ConceptSpace {
    /// Create an empty concept space over an n-dimensional basis.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            concepts: RwLock::new(HashMap::new()),
        }
    }

    /// Basis dimension shared by every concept in this space.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Register a concept from its grade-1 components: `coefficients[i]`
    /// becomes the coefficient of basis vector e_{i+1}.
    ///
    /// Re-registering a name overwrites the previous vector.
    pub fn register(&self, name: &str, coefficients: &[f64]) -> Result<()> {
        let vector = Multivector::vector(self.dim, coefficients)?;
        debug!(concept = %name, dim = self.dim, "registered concept");
        self.concepts.write().insert(name.to_string(), vector);
        Ok(())
    }

    /// Look up a registered concept by name.
    pub fn concept(&self, name: &str) -> Result<Multivector> {
        self.concepts
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| ReasonError::UnknownConcept(name.to_string()))
    }

    /// Derive the rotor relating two registered concepts:
    /// `R = 1 + target·source` (geometric product).
    ///
    /// The rotor is left unnormalized, so `infer` is a directional
    /// transform rather than a magnitude-preserving rotation. A rotor of
    /// zero magnitude (e.g. between exactly opposed unit concepts) fails
    /// with `DegenerateRotor`.
    pub fn derive_rotor(&self, source: &str, target: &str) -> Result<Multivector> {
        let src = self.concept(source)?;
        let tgt = self.concept(target)?;

        let ba = geometric(&tgt, &src)?;
        let rotor = Multivector::scalar(self.dim, 1.0).add(&ba)?;

        if rotor.norm() < CLEAN_TOLERANCE {
            return Err(CliffordError::DegenerateRotor.into());
        }

        debug!(source = %source, target = %target, rotor = %rotor, "derived rotor");
        Ok(rotor)
    }

    /// Transport `input` through the transformation a rotor encodes, via
    /// the sandwich product `R · input · R̃`.
    pub fn infer(&self, input: &Multivector, rotor: &Multivector) -> Result<Multivector> {
        Ok(sandwich(rotor, input)?)
    }

    /// Number of registered concepts.
    pub fn len(&self) -> usize {
        self.concepts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.read().is_empty()
    }

    /// Names of all registered concepts, in no particular order.
    pub fn names(&self) -> Vec<String> {
        self.concepts.read().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let space = ConceptSpace::new(3);
        space.register("North", &[1.0, 0.0, 0.0]).unwrap();

        let v = space.concept("North").unwrap();
        assert_eq!(v.coeff(0b001), 1.0);
        assert_eq!(space.len(), 1);
    }

    #[test]
    fn test_reregister_overwrites() {
        let space = ConceptSpace::new(3);
        space.register("X", &[1.0, 0.0, 0.0]).unwrap();
        space.register("X", &[0.0, 2.0, 0.0]).unwrap();

        let v = space.concept("X").unwrap();
        assert_eq!(v.coeff(0b001), 0.0);
        assert_eq!(v.coeff(0b010), 2.0);
        assert_eq!(space.len(), 1);
    }

    #[test]
    fn test_unknown_concept() {
        let space = ConceptSpace::new(3);
        assert_eq!(
            space.concept("missing").unwrap_err(),
            ReasonError::UnknownConcept("missing".to_string())
        );
        assert!(space.derive_rotor("missing", "also-missing").is_err());
    }

    #[test]
    fn test_register_too_many_components() {
        let space = ConceptSpace::new(2);
        assert!(space.register("big", &[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_rotor_between_orthogonal_concepts() {
        let space = ConceptSpace::new(3);
        space.register("Observation", &[1.0, 0.0, 0.0]).unwrap();
        space.register("Goal", &[0.0, 1.0, 0.0]).unwrap();

        // R = 1 + e2·e1 = 1 - e12
        let rotor = space.derive_rotor("Observation", "Goal").unwrap();
        assert_eq!(rotor.coeff(0), 1.0);
        assert_eq!(rotor.coeff(0b011), -1.0);
    }

    #[test]
    fn test_infer_moves_source_toward_target() {
        let space = ConceptSpace::new(3);
        space.register("Observation", &[1.0, 0.0, 0.0]).unwrap();
        space.register("Goal", &[0.0, 1.0, 0.0]).unwrap();

        let rotor = space.derive_rotor("Observation", "Goal").unwrap();
        let obs = space.concept("Observation").unwrap();
        let inferred = space.infer(&obs, &rotor).unwrap();

        // The rotor is unnormalized, so only the direction is exact: the
        // dominant component must lie along e2.
        let along_goal = inferred.coeff(0b010).abs();
        assert!(along_goal > 1.0);
        for (&b, &c) in inferred.terms() {
            if b != 0b010 {
                assert!(c.abs() < along_goal);
            }
        }
    }

    #[test]
    fn test_degenerate_rotor_between_opposed_concepts() {
        let space = ConceptSpace::new(3);
        space.register("Up", &[1.0, 0.0, 0.0]).unwrap();
        space.register("Down", &[-1.0, 0.0, 0.0]).unwrap();

        // R = 1 + (-e1)·e1 = 1 - 1 = 0
        assert_eq!(
            space.derive_rotor("Up", "Down").unwrap_err(),
            ReasonError::Clifford(CliffordError::DegenerateRotor)
        );
    }

    #[test]
    fn test_infer_dimension_mismatch() {
        let space = ConceptSpace::new(3);
        space.register("A", &[1.0, 0.0, 0.0]).unwrap();
        space.register("B", &[0.0, 1.0, 0.0]).unwrap();

        let rotor = space.derive_rotor("A", "B").unwrap();
        let wrong = Multivector::vector(4, &[1.0, 0.0, 0.0, 0.0]).unwrap();
        assert!(matches!(
            space.infer(&wrong, &rotor),
            Err(ReasonError::Clifford(CliffordError::DimensionMismatch { .. }))
        ));
    }
}
