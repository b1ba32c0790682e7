//! Geometric algebra products: geometric, inner (dot), outer (wedge).
//!
//! The geometric product is the single primitive; wedge and dot are the
//! same per-pair contributions restricted by a blade or grade condition.
//! All three are bilinear; only addition commutes.

use std::collections::BTreeMap;

use crate::blade;
use crate::error::CliffordError;
use crate::multivector::{Multivector, CLEAN_TOLERANCE};
use crate::Result;

fn check_dims(a: &Multivector, b: &Multivector) -> Result<usize> {
    if a.dim() != b.dim() {
        return Err(CliffordError::DimensionMismatch {
            left: a.dim(),
            right: b.dim(),
        });
    }
    Ok(a.dim())
}

/// Accumulate per-pair contributions, keeping only pairs accepted by `keep`.
fn product_filtered(
    a: &Multivector,
    b: &Multivector,
    keep: impl Fn(usize, usize) -> bool,
) -> Result<Multivector> {
    let dim = check_dims(a, b)?;
    let mut terms: BTreeMap<usize, f64> = BTreeMap::new();
    for (&k1, &v1) in a.terms() {
        for (&k2, &v2) in b.terms() {
            if !keep(k1, k2) {
                continue;
            }
            let val = v1 * v2 * blade::reorder_sign(k1, k2);
            *terms.entry(blade::combine(k1, k2)).or_insert(0.0) += val;
        }
    }
    terms.retain(|_, c| c.abs() >= CLEAN_TOLERANCE);
    // keys are XORs of validated keys, so they stay below 2^dim
    Ok(Multivector::from_cleaned(dim, terms))
}

/// Geometric product: the fundamental Clifford product.
///
/// For every term pair (k1,v1)×(k2,v2), contributes
/// `v1·v2·reorder_sign(k1,k2)` at blade `k1 ^ k2`. Noncommutative.
pub fn geometric(a: &Multivector, b: &Multivector) -> Result<Multivector> {
    product_filtered(a, b, |_, _| true)
}

/// Outer (wedge) product: the grade-raising, antisymmetric part.
///
/// Identical per-pair contribution to the geometric product, restricted to
/// pairs whose blades share no basis vector.
pub fn outer(a: &Multivector, b: &Multivector) -> Result<Multivector> {
    product_filtered(a, b, |k1, k2| k1 & k2 == 0)
}

/// Inner (dot) product: the grade-lowering, contraction part.
///
/// Keeps a pair's contribution only when the resulting blade's grade equals
/// |grade(k1) − grade(k2)|. The selection is per contributing pair, not on
/// the summed result.
pub fn inner(a: &Multivector, b: &Multivector) -> Result<Multivector> {
    product_filtered(a, b, |k1, k2| {
        let g1 = blade::grade(k1);
        let g2 = blade::grade(k2);
        blade::grade(blade::combine(k1, k2)) == g1.abs_diff(g2)
    })
}
