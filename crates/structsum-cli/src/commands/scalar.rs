//! Scalar command implementation.

use std::fmt::Display;
use std::str::FromStr;

use clap::ValueEnum;
use structsum_core::{Digest, HashAlgorithm, StructuralHasher};

use crate::errors::CliError;
use crate::output::{self, OutputFormat};

/// Scalar type the raw argument is parsed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScalarKind {
    /// true or false
    Bool,
    /// 8-bit signed integer
    Int8,
    /// 16-bit signed integer
    Int16,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 8-bit unsigned integer
    Uint8,
    /// 16-bit unsigned integer
    Uint16,
    /// 32-bit unsigned integer
    Uint32,
    /// 64-bit unsigned integer
    Uint64,
    /// 32-bit IEEE-754 float
    Float32,
    /// 64-bit IEEE-754 float
    Float64,
    /// UTF-8 text, hashed as given
    String,
}

pub fn run(
    kind: ScalarKind,
    raw: String,
    algorithm: HashAlgorithm,
    format: OutputFormat,
) -> Result<(), CliError> {
    let digest = digest_scalar(&StructuralHasher::new(algorithm), kind, &raw)?;
    println!("{}", output::format_digest(algorithm, &digest, format));
    Ok(())
}

/// Parses `raw` as `kind` and digests it with the matching scalar entry point.
pub fn digest_scalar(
    hasher: &StructuralHasher<HashAlgorithm>,
    kind: ScalarKind,
    raw: &str,
) -> Result<Digest, CliError> {
    let digest = match kind {
        ScalarKind::Bool => hasher.digest_bool(parse::<bool>(kind, raw)?),
        ScalarKind::Int8 => hasher.digest_int(parse::<i8>(kind, raw)?),
        ScalarKind::Int16 => hasher.digest_int(parse::<i16>(kind, raw)?),
        ScalarKind::Int32 => hasher.digest_int(parse::<i32>(kind, raw)?),
        ScalarKind::Int64 => hasher.digest_int(parse::<i64>(kind, raw)?),
        ScalarKind::Uint8 => hasher.digest_uint(parse::<u8>(kind, raw)?),
        ScalarKind::Uint16 => hasher.digest_uint(parse::<u16>(kind, raw)?),
        ScalarKind::Uint32 => hasher.digest_uint(parse::<u32>(kind, raw)?),
        ScalarKind::Uint64 => hasher.digest_uint(parse::<u64>(kind, raw)?),
        ScalarKind::Float32 => hasher.digest_float(parse::<f32>(kind, raw)?),
        ScalarKind::Float64 => hasher.digest_float(parse::<f64>(kind, raw)?),
        ScalarKind::String => hasher.digest_str(raw),
    };
    Ok(digest)
}

fn parse<T>(kind: ScalarKind, raw: &str) -> Result<T, CliError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>().map_err(|e| CliError::InvalidScalar {
        kind: format!("{:?}", kind).to_lowercase(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_digests_each_width() {
        let hasher = StructuralHasher::new(HashAlgorithm::Crc32);
        assert_eq!(
            digest_scalar(&hasher, ScalarKind::Int64, "1").unwrap().to_hex(),
            "1225efff"
        );
        assert_eq!(
            digest_scalar(&hasher, ScalarKind::Bool, "true").unwrap().to_hex(),
            "a505df1b"
        );
        assert_ne!(
            digest_scalar(&hasher, ScalarKind::Int16, "1").unwrap(),
            digest_scalar(&hasher, ScalarKind::Int32, "1").unwrap()
        );
    }

    #[test]
    fn rejects_out_of_range_values() {
        let hasher = StructuralHasher::new(HashAlgorithm::Md5);
        let err = digest_scalar(&hasher, ScalarKind::Uint8, "256").unwrap_err();
        assert!(err.to_string().starts_with("cannot parse '256' as uint8"));
    }
}
