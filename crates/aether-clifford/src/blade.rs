//! Basis blade arithmetic.
//!
//! A blade is a product of distinct basis vectors, encoded as a bitmask:
//! bit i set ⇔ basis vector e_{i+1} is a factor. For Cl(3,0):
//! e1=0b001, e2=0b010, e3=0b100, e12=0b011, e123=0b111. Index 0 is the
//! scalar blade.

/// Grade of a blade: the number of basis vectors it contains.
pub fn grade(blade: usize) -> usize {
    blade.count_ones() as usize
}

/// Blade resulting from multiplying `a` and `b`.
///
/// Shared basis vectors square to +1 under the Euclidean metric and
/// annihilate; XOR removes them from the result.
pub fn combine(a: usize, b: usize) -> usize {
    a ^ b
}

/// Sign acquired when multiplying the basis vectors of `a` followed by
/// those of `b`, under a Euclidean signature (e_i² = +1).
///
/// Equivalent to sorting the concatenated index sequence of `a` then `b`
/// with adjacent swaps and counting transpositions: each swap of distinct
/// basis vectors flips the sign. For each bit i set in `b`, every bit of
/// `a` at a position above i is one vector that i must be swapped past.
pub fn reorder_sign(a: usize, b: usize) -> f64 {
    let mut flips = 0u32;
    let mut rest = b;
    let mut i = 0;
    while rest != 0 {
        if rest & 1 == 1 {
            // two shifts: `i + 1` would overflow when bit usize::BITS-1
            // is set in `b`
            flips += (a >> i >> 1).count_ones();
        }
        rest >>= 1;
        i += 1;
    }
    if flips % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Display name of a blade: "1" for the scalar, otherwise "e1e2...".
pub fn blade_name(blade: usize) -> String {
    if blade == 0 {
        return "1".to_string();
    }
    let mut parts = Vec::new();
    let mut rest = blade;
    let mut i = 0;
    while rest != 0 {
        if rest & 1 == 1 {
            parts.push(format!("e{}", i + 1));
        }
        rest >>= 1;
        i += 1;
    }
    parts.join("")
}
