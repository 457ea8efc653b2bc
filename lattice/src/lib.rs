#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Defines some lattice cryptographic structure.

mod lwe;
mod matrix;

pub use lwe::Lwe;
pub use matrix::Matrix;
