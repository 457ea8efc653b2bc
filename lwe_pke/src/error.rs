use algebra::AlgebraError;

/// The two classes of failure an operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The engine was constructed with unusable parameters.
    Config,
    /// An operation received a malformed argument.
    InvalidInput,
}

/// Errors that may occur.
///
/// A decryption whose noise exceeded the budget is not an error,
/// it silently yields the wrong bit.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PkeError {
    /// Error that occurs when the given lwe dimension is not valid.
    #[error("LWE dimension {0} is not valid!")]
    LweDimensionUnValid(
        /// The rejected dimension.
        usize,
    ),
    /// Error that occurs when the given lwe modulus is not larger than the dimension.
    #[error("LWE modulus {modulus} should be larger than LWE dimension {dimension}!")]
    ModulusTooSmall {
        /// LWE modulus
        modulus: u64,
        /// LWE dimension
        dimension: usize,
    },
    /// Error that occurs when the given lwe modulus leaves no room to decode a bit.
    #[error("LWE modulus {modulus} should be at least {min} to decode a bit!")]
    ModulusTooSmallToDecode {
        /// LWE modulus
        modulus: u64,
        /// The smallest usable modulus.
        min: u64,
    },
    /// Error that occurs when the given lwe modulus can not be used for the arithmetic.
    #[error("LWE modulus is not valid: {0}")]
    ModulusUnValid(#[from] AlgebraError),
    /// Error that occurs when the noise standard deviation is not finite and positive.
    #[error("Noise standard deviation {0} is not valid!")]
    NoiseStdDevUnValid(
        /// The rejected standard deviation.
        f64,
    ),
    /// Error that occurs when the message to encrypt is not `0` or `1`.
    #[error("Message {0} is not a bit!")]
    InvalidBit(
        /// The rejected message.
        u8,
    ),
    /// Error that occurs when a key or ciphertext does not have the engine's shape.
    #[error("{what} should have length {expected}, but has length {found}!")]
    DimensionMismatch {
        /// Which part of the input was rejected.
        what: &'static str,
        /// Length required by the parameters.
        expected: usize,
        /// Length of the input.
        found: usize,
    },
    /// Error that occurs when a key or ciphertext holds a value outside `[0, q)`.
    #[error("{what} holds value {value} which is not reduced by modulus {modulus}!")]
    ValueOutOfRange {
        /// Which part of the input was rejected.
        what: &'static str,
        /// The offending value.
        value: u64,
        /// LWE modulus
        modulus: u64,
    },
    /// Error that occurs when a byte ciphertext sequence can not be split into bytes.
    #[error("Ciphertext count {0} is not a multiple of 8!")]
    CiphertextCountUnValid(
        /// The rejected count.
        usize,
    ),
}

impl PkeError {
    /// Returns which class of failure this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PkeError::LweDimensionUnValid(_)
            | PkeError::ModulusTooSmall { .. }
            | PkeError::ModulusTooSmallToDecode { .. }
            | PkeError::ModulusUnValid(_)
            | PkeError::NoiseStdDevUnValid(_) => ErrorKind::Config,
            PkeError::InvalidBit(_)
            | PkeError::DimensionMismatch { .. }
            | PkeError::ValueOutOfRange { .. }
            | PkeError::CiphertextCountUnValid(_) => ErrorKind::InvalidInput,
        }
    }
}
