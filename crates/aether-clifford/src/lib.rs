//! # aether-clifford
//!
//! Sparse geometric algebra engine over a Euclidean basis.
//!
//! Provides Cl(n,0) with:
//! - Basis blades encoded as bitmasks (bit i ⇔ basis vector e_{i+1})
//! - Sparse multivector storage with automatic cleaning of near-zero terms
//! - Geometric, inner (dot), outer (wedge) products
//! - Reversion, grade projection, norm
//! - Rotors and the sandwich product R·M·R̃

pub mod blade;
pub mod error;
pub mod multivector;
pub mod prelude;
pub mod products;
pub mod rotor;

pub use error::CliffordError;
pub use multivector::Multivector;
pub use rotor::Rotor;

pub type Result<T> = std::result::Result<T, CliffordError>;
