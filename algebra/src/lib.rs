#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Modular arithmetic and random sampling over `Z_q`.

pub mod arith;
pub mod modulus;
pub mod random;
pub mod reduce;

mod error;

pub use error::AlgebraError;
