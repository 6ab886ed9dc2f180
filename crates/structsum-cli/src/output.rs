//! Output formatting utilities.

use clap::ValueEnum;
use serde_json::json;
use structsum_core::{Digest, HashAlgorithm};

/// Text encoding for printed digests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Lowercase hex.
    #[default]
    Hex,
    /// Base64URL without padding.
    Base64,
    /// JSON object with algorithm and hex digest.
    Json,
}

/// Formats a digest for printing.
pub fn format_digest(algorithm: HashAlgorithm, digest: &Digest, format: OutputFormat) -> String {
    match format {
        OutputFormat::Hex => digest.to_hex(),
        OutputFormat::Base64 => digest.to_base64(),
        OutputFormat::Json => json!({
            "algorithm": algorithm,
            "digest": digest,
        })
        .to_string(),
    }
}

/// Formats one labelled line of the demo table.
pub fn format_labelled(label: &str, digest: &Digest) -> String {
    format!("{:<8}: {}", label, digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_each_encoding() {
        let digest = Digest::new(vec![0xa5, 0x05, 0xdf, 0x1b]);
        assert_eq!(
            format_digest(HashAlgorithm::Crc32, &digest, OutputFormat::Hex),
            "a505df1b"
        );
        assert_eq!(
            format_digest(HashAlgorithm::Crc32, &digest, OutputFormat::Base64),
            "pQXfGw"
        );
        assert_eq!(
            format_digest(HashAlgorithm::Crc32, &digest, OutputFormat::Json),
            r#"{"algorithm":"crc32","digest":"a505df1b"}"#
        );
    }

    #[test]
    fn labels_are_padded() {
        let digest = Digest::new(vec![0x01]);
        assert_eq!(format_labelled("Bool", &digest), "Bool    : 01");
    }
}
