//! Multivector — a sparse weighted sum of basis blades.
//!
//! M = a₀·1 + a₁·e₁ + a₂·e₂ + a₃·e₁₂ + ...
//!
//! Terms are stored in an ordered map from blade index to coefficient.
//! Every operation returns a freshly cleaned value: coefficients below
//! [`CLEAN_TOLERANCE`] in magnitude are dropped, so the zero multivector
//! is always the empty map and exact equality comparison is meaningful.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::blade;
use crate::error::CliffordError;
use crate::Result;

/// Coefficients with absolute value below this are dropped after every
/// operation.
pub const CLEAN_TOLERANCE: f64 = 1e-9;

/// A sparse multivector in Cl(n,0).
///
/// Value semantics: operators never mutate an operand; they produce a new
/// `Multivector`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MultivectorRepr", into = "MultivectorRepr")]
pub struct Multivector {
    dim: usize,
    terms: BTreeMap<usize, f64>,
}

/// Association-list form used for serialization: the engine defines no file
/// or wire format of its own, only this round-trippable surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MultivectorRepr {
    dim: usize,
    terms: Vec<(usize, f64)>,
}

impl From<Multivector> for MultivectorRepr {
    fn from(mv: Multivector) -> Self {
        Self {
            dim: mv.dim,
            terms: mv.terms.into_iter().collect(),
        }
    }
}

impl TryFrom<MultivectorRepr> for Multivector {
    type Error = CliffordError;

    fn try_from(repr: MultivectorRepr) -> Result<Self> {
        Multivector::new(repr.dim, repr.terms)
    }
}

/// A blade is out of range when any bit at position >= dim is set. Written
/// without `1 << dim`, which overflows once dim reaches the machine word;
/// at dim >= usize::BITS every representable index is a valid blade.
fn blade_out_of_range(blade: usize, dim: usize) -> bool {
    dim < usize::BITS as usize && blade >> dim != 0
}

impl Multivector {
    /// Create a multivector from blade/coefficient pairs.
    ///
    /// Every blade index must be below 2^dim; near-zero coefficients are
    /// dropped. Pairs landing on the same blade are summed.
    pub fn new(dim: usize, terms: impl IntoIterator<Item = (usize, f64)>) -> Result<Self> {
        let mut map: BTreeMap<usize, f64> = BTreeMap::new();
        for (blade, coeff) in terms {
            if blade_out_of_range(blade, dim) {
                return Err(CliffordError::InvalidBlade { blade, dim });
            }
            *map.entry(blade).or_insert(0.0) += coeff;
        }
        map.retain(|_, c| c.abs() >= CLEAN_TOLERANCE);
        Ok(Self { dim, terms: map })
    }

    /// Constructor for term maps already validated and cleaned.
    pub(crate) fn from_cleaned(dim: usize, terms: BTreeMap<usize, f64>) -> Self {
        Self { dim, terms }
    }

    /// The zero multivector (empty term map).
    pub fn zero(dim: usize) -> Self {
        Self {
            dim,
            terms: BTreeMap::new(),
        }
    }

    /// A scalar multivector.
    pub fn scalar(dim: usize, value: f64) -> Self {
        let mut terms = BTreeMap::new();
        if value.abs() >= CLEAN_TOLERANCE {
            terms.insert(0, value);
        }
        Self { dim, terms }
    }

    /// A grade-1 multivector: `components[i]` becomes the coefficient of
    /// basis vector e_{i+1} (blade `1 << i`).
    pub fn vector(dim: usize, components: &[f64]) -> Result<Self> {
        if components.len() > dim || components.len() > usize::BITS as usize {
            // the first component with no representable blade; the reported
            // index saturates when the blade exceeds the machine word
            let i = if components.len() > dim {
                dim
            } else {
                usize::BITS as usize
            };
            let blade = 1usize.checked_shl(i as u32).unwrap_or(usize::MAX);
            return Err(CliffordError::InvalidBlade { blade, dim });
        }
        Self::new(
            dim,
            components
                .iter()
                .enumerate()
                .map(|(i, &c)| (1usize << i, c)),
        )
    }

    /// The i-th basis vector e_{i+1} with unit coefficient.
    pub fn basis(dim: usize, i: usize) -> Result<Self> {
        match 1usize.checked_shl(i as u32) {
            Some(blade) => Self::new(dim, [(blade, 1.0)]),
            None => Err(CliffordError::InvalidBlade {
                blade: usize::MAX,
                dim,
            }),
        }
    }

    /// Dimension of the underlying basis (not the blade count 2^dim).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Sparse term map, keyed by blade index.
    pub fn terms(&self) -> &BTreeMap<usize, f64> {
        &self.terms
    }

    /// Association-list form, sufficient for round-tripping through any
    /// storage format a caller chooses.
    pub fn to_terms(&self) -> Vec<(usize, f64)> {
        self.terms.iter().map(|(&b, &c)| (b, c)).collect()
    }

    /// Coefficient of a blade (0.0 when absent).
    pub fn coeff(&self, blade: usize) -> f64 {
        self.terms.get(&blade).copied().unwrap_or(0.0)
    }

    /// The grade-0 (scalar) part.
    pub fn scalar_part(&self) -> f64 {
        self.coeff(0)
    }

    /// True iff no terms survive cleaning.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Retain only the terms of a given grade.
    pub fn grade_project(&self, grade: usize) -> Multivector {
        Self {
            dim: self.dim,
            terms: self
                .terms
                .iter()
                .filter(|(&b, _)| blade::grade(b) == grade)
                .map(|(&b, &c)| (b, c))
                .collect(),
        }
    }

    /// Reverse: flips the order of basis vectors within each blade.
    ///
    /// A grade-g blade picks up sign (-1)^(g(g-1)/2). Involution:
    /// `reverse(reverse(m)) == m`.
    pub fn reverse(&self) -> Multivector {
        Self {
            dim: self.dim,
            terms: self
                .terms
                .iter()
                .map(|(&b, &c)| {
                    let g = blade::grade(b);
                    let sign = if (g * g.wrapping_sub(1) / 2) % 2 == 0 {
                        1.0
                    } else {
                        -1.0
                    };
                    (b, c * sign)
                })
                .collect(),
        }
    }

    /// Scalar multiple.
    pub fn scale(&self, s: f64) -> Multivector {
        let mut terms: BTreeMap<usize, f64> =
            self.terms.iter().map(|(&b, &c)| (b, c * s)).collect();
        terms.retain(|_, c| c.abs() >= CLEAN_TOLERANCE);
        Self {
            dim: self.dim,
            terms,
        }
    }

    /// Squared norm: ⟨M·M̃⟩₀, the scalar part of M times its reverse.
    pub fn norm_squared(&self) -> f64 {
        // dims always match, so the product cannot fail
        crate::products::geometric(self, &self.reverse())
            .map(|p| p.scalar_part())
            .unwrap_or(0.0)
    }

    /// Norm: sqrt(|⟨M·M̃⟩₀|).
    pub fn norm(&self) -> f64 {
        self.norm_squared().abs().sqrt()
    }

    /// Per-blade sum. Fails with `DimensionMismatch` on unequal dims.
    pub fn add(&self, rhs: &Multivector) -> Result<Multivector> {
        self.merge(rhs, |a, b| a + b)
    }

    /// Per-blade difference. Fails with `DimensionMismatch` on unequal dims.
    pub fn sub(&self, rhs: &Multivector) -> Result<Multivector> {
        self.merge(rhs, |a, b| a - b)
    }

    fn merge(&self, rhs: &Multivector, op: impl Fn(f64, f64) -> f64) -> Result<Multivector> {
        if self.dim != rhs.dim {
            return Err(CliffordError::DimensionMismatch {
                left: self.dim,
                right: rhs.dim,
            });
        }
        let mut terms = BTreeMap::new();
        for &blade in self.terms.keys().chain(rhs.terms.keys()) {
            let c = op(self.coeff(blade), rhs.coeff(blade));
            if c.abs() >= CLEAN_TOLERANCE {
                terms.insert(blade, c);
            }
        }
        Ok(Self {
            dim: self.dim,
            terms,
        })
    }
}

impl std::ops::Neg for &Multivector {
    type Output = Multivector;
    fn neg(self) -> Multivector {
        self.scale(-1.0)
    }
}

impl std::fmt::Display for Multivector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (&b, &c) in &self.terms {
            if !first {
                write!(f, "{}", if c >= 0.0 { " + " } else { " - " })?;
            } else if c < 0.0 {
                write!(f, "-")?;
            }
            let mag = c.abs();
            if b == 0 {
                write!(f, "{:.4}", mag)?;
            } else {
                write!(f, "{:.4}·{}", mag, blade::blade_name(b))?;
            }
            first = false;
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
