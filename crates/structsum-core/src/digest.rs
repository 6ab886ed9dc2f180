use std::fmt;

use base64::Engine;
use serde::{Deserialize, Serialize};

/// Digest bytes produced by a hash primitive.
///
/// The length is whatever the primitive emits (4 bytes for CRC32, 16 for
/// MD5, ...). Serialized as a lowercase hex string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Digest(#[serde(with = "hex::serde")] Vec<u8>);

impl Digest {
    /// Wraps raw digest bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Parses a digest from hex text (either case).
    pub fn from_hex(text: impl AsRef<[u8]>) -> Result<Self, hex::FromHexError> {
        hex::decode(text).map(Self)
    }

    /// Borrows the digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the digest, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Number of bytes in the digest.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the primitive produced no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Base64URL encoding without padding.
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&self.0)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Digest {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for Vec<u8> {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
