use super::SecurityParameters;

/// Parameters with `n = 256`, `q = 4093` and `σ = 3.2`.
pub const DEFAULT_PARAMETERS: SecurityParameters = SecurityParameters::new(256, 4093, 3.2);

/// Small parameters with `n = 64`, `q = 1009` and `σ = 3.2`.
///
/// Only suitable for tests and demonstrations.
pub const TOY_PARAMETERS: SecurityParameters = SecurityParameters::new(64, 1009, 3.2);
