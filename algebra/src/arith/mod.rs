//! Number theory helpers.

mod prime;

pub use prime::is_prime;
