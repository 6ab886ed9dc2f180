use thiserror::Error;

/// Errors reported by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading the input failed.
    #[error("failed to read {source_name}: {source}")]
    Io {
        /// File path or `stdin`.
        source_name: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Input was not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A scalar argument did not parse as the requested kind.
    #[error("cannot parse '{value}' as {kind}: {reason}")]
    InvalidScalar {
        /// Requested scalar kind.
        kind: String,
        /// Raw argument.
        value: String,
        /// Parser message.
        reason: String,
    },
    /// The value could not be digested.
    #[error("digest failed: {0}")]
    Digest(#[from] structsum_core::DigestError),
}
