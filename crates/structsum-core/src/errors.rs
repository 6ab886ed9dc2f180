use thiserror::Error;

/// Error returned when a value cannot be digested.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// The dispatcher met a value that carries no hashable data
    /// (a function, channel, handle, ...).
    #[error("unsupported value shape: {shape}")]
    UnsupportedShape {
        /// Description of the rejected shape.
        shape: String,
    },
}

impl DigestError {
    pub(crate) fn unsupported(shape: impl Into<String>) -> Self {
        DigestError::UnsupportedShape {
            shape: shape.into(),
        }
    }
}

/// Error returned when a hash algorithm name is not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown hash algorithm '{0}' (expected one of: crc32, crc64, md5, sha256)")]
pub struct UnknownAlgorithm(pub String);
