//! Hash primitives injected into the structural hasher.
//!
//! A primitive is any deterministic function from bytes to a fixed-length
//! digest. The built-ins create fresh hashing state on every call, so a
//! single instance can be shared across threads.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crc_fast::{checksum, CrcAlgorithm};
use md5::{Digest as _, Md5 as Md5Hasher};
use serde::{Deserialize, Serialize};
use sha2::Sha256 as Sha256Hasher;

use crate::errors::UnknownAlgorithm;

/// Deterministic `bytes -> bytes` function with a fixed output length.
pub trait HashPrimitive {
    /// Hashes `input` into a digest.
    fn hash(&self, input: &[u8]) -> Vec<u8>;
}

impl<H: HashPrimitive + ?Sized> HashPrimitive for &H {
    fn hash(&self, input: &[u8]) -> Vec<u8> {
        (**self).hash(input)
    }
}

impl<H: HashPrimitive + ?Sized> HashPrimitive for Box<H> {
    fn hash(&self, input: &[u8]) -> Vec<u8> {
        (**self).hash(input)
    }
}

impl<H: HashPrimitive + ?Sized> HashPrimitive for Arc<H> {
    fn hash(&self, input: &[u8]) -> Vec<u8> {
        (**self).hash(input)
    }
}

/// CRC-32 (IEEE / ISO-HDLC), 4 bytes big-endian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Crc32;

impl HashPrimitive for Crc32 {
    fn hash(&self, input: &[u8]) -> Vec<u8> {
        let crc = checksum(CrcAlgorithm::Crc32IsoHdlc, input) as u32;
        crc.to_be_bytes().to_vec()
    }
}

/// CRC-64 with the ISO polynomial, 8 bytes big-endian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Crc64Iso;

impl HashPrimitive for Crc64Iso {
    fn hash(&self, input: &[u8]) -> Vec<u8> {
        checksum(CrcAlgorithm::Crc64GoIso, input).to_be_bytes().to_vec()
    }
}

/// MD5, 16 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Md5;

impl HashPrimitive for Md5 {
    fn hash(&self, input: &[u8]) -> Vec<u8> {
        Md5Hasher::digest(input).to_vec()
    }
}

/// SHA-256, 32 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256;

impl HashPrimitive for Sha256 {
    fn hash(&self, input: &[u8]) -> Vec<u8> {
        Sha256Hasher::digest(input).to_vec()
    }
}

/// Adapter turning a closure into a [`HashPrimitive`].
///
/// ```rust
/// use structsum_core::primitive::{from_fn, HashPrimitive};
///
/// let xor_fold = from_fn(|input: &[u8]| vec![input.iter().fold(0u8, |acc, b| acc ^ b)]);
/// assert_eq!(xor_fold.hash(&[0x0f, 0xf0]), vec![0xff]);
/// ```
#[derive(Clone, Copy)]
pub struct FnPrimitive<F>(F);

/// Wraps a closure as a hash primitive. The closure must be deterministic
/// and always return the same number of bytes.
pub fn from_fn<F>(f: F) -> FnPrimitive<F>
where
    F: Fn(&[u8]) -> Vec<u8>,
{
    FnPrimitive(f)
}

impl<F> HashPrimitive for FnPrimitive<F>
where
    F: Fn(&[u8]) -> Vec<u8>,
{
    fn hash(&self, input: &[u8]) -> Vec<u8> {
        (self.0)(input)
    }
}

impl<F> fmt::Debug for FnPrimitive<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnPrimitive")
    }
}

/// Built-in primitives selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// [`Crc32`].
    Crc32,
    /// [`Crc64Iso`].
    Crc64,
    /// [`Md5`].
    #[default]
    Md5,
    /// [`Sha256`].
    Sha256,
}

impl HashAlgorithm {
    /// Every built-in algorithm.
    pub const ALL: [HashAlgorithm; 4] = [
        HashAlgorithm::Crc32,
        HashAlgorithm::Crc64,
        HashAlgorithm::Md5,
        HashAlgorithm::Sha256,
    ];

    /// Digest length in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            HashAlgorithm::Crc32 => 4,
            HashAlgorithm::Crc64 => 8,
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha256 => 32,
        }
    }

    /// Stable lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Crc32 => "crc32",
            HashAlgorithm::Crc64 => "crc64",
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha256 => "sha256",
        }
    }
}

impl HashPrimitive for HashAlgorithm {
    fn hash(&self, input: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Crc32 => Crc32.hash(input),
            HashAlgorithm::Crc64 => Crc64Iso.hash(input),
            HashAlgorithm::Md5 => Md5.hash(input),
            HashAlgorithm::Sha256 => Sha256.hash(input),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "crc32" => Ok(HashAlgorithm::Crc32),
            "crc64" | "crc64-iso" => Ok(HashAlgorithm::Crc64),
            "md5" => Ok(HashAlgorithm::Md5),
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}
