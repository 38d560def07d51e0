use thiserror::Error;

#[derive(Error, Debug)]
pub enum VecComError {
    #[error("Bad point encoding: {0}")]
    BadEncoding(String),

    #[error("Capacity mismatch: expected {expected} values, got {got}")]
    CapacityMismatch {
        expected: usize,
        got: usize,
    },

    #[error("Index {index} out of range for vector capacity {n}")]
    IndexOutOfRange {
        index: usize,
        n: usize,
    },

    #[error("Insufficient entropy: setup seed must not be empty")]
    InsufficientEntropy,

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VecComError>;

impl From<ark_serialize::SerializationError> for VecComError {
    fn from(err: ark_serialize::SerializationError) -> Self {
        match err {
            ark_serialize::SerializationError::IoError(e) => Self::Io(e),
            other => Self::Serialization(format!("{:?}", other)),
        }
    }
}

impl VecComError {
    /// Contract check shared by every operation that takes a position.
    pub(crate) fn check_index(index: usize, n: usize) -> Result<()> {
        if index >= n {
            return Err(Self::IndexOutOfRange { index, n });
        }
        Ok(())
    }
}
