//! # aether-reason
//!
//! Rotor-based relationship engine on top of `aether-clifford`.
//!
//! A [`ConceptSpace`] maps names to grade-1 multivectors. From a
//! source/target concept pair it derives a rotor `R = 1 + target·source`
//! and applies it to arbitrary multivectors via the sandwich product,
//! transporting them through the same transformation.

pub mod error;
pub mod space;

pub use error::ReasonError;
pub use space::ConceptSpace;

pub type Result<T> = std::result::Result<T, ReasonError>;
