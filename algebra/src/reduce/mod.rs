//! This module defines some traits for modular arithmetic.

mod ops;

pub use ops::*;
