//! Convenience re-exports for common aether-clifford types.
//!
//! ```rust
//! use aether_clifford::prelude::*;
//! ```

pub use crate::blade;
pub use crate::products::{geometric, inner, outer};
pub use crate::rotor::sandwich;
pub use crate::CliffordError;
pub use crate::Multivector;
pub use crate::Result;
pub use crate::Rotor;
