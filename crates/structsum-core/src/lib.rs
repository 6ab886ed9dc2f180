//! Structural digests of nested, dynamically-typed values.
//!
//! A digest is computed by dispatching on the shape of a [`Value`]:
//! scalars are encoded to canonical bytes and hashed once, sequences fold
//! their element digests left to right, and mappings and records XOR the
//! digests of their `[key, value]` pairs so that pair order never matters.
//! The hash primitive is injected; CRC32, CRC64 (ISO), MD5 and SHA-256 are
//! built in.
//!
//! ```rust
//! use structsum_core::{digest, Mapping, Md5, Value};
//!
//! let forward = Mapping::new().with("x", 1i64).with("y", 2i64);
//! let reverse = Mapping::new().with("y", 2i64).with("x", 1i64);
//! assert_eq!(
//!     digest(&Md5, &Value::from(forward))?,
//!     digest(&Md5, &Value::from(reverse))?,
//! );
//! # Ok::<(), structsum_core::DigestError>(())
//! ```
//!
//! Cycles cannot be expressed with owned values, but recursion depth follows
//! input nesting; bounding it is up to the caller.
#![deny(missing_docs)]

/// Digest byte container and text encodings.
pub mod digest;
/// Scalar byte encodings.
pub mod encoding;
/// Error types.
pub mod errors;
/// Recursive structural hasher.
pub mod hasher;
/// JSON to value conversion.
pub mod json;
/// Hash primitives.
pub mod primitive;
/// Dynamic value model.
pub mod value;

pub use digest::Digest;
pub use errors::{DigestError, UnknownAlgorithm};
pub use hasher::{
    digest, digest_bool, digest_float, digest_int, digest_str, digest_uint, StructuralHasher,
};
pub use primitive::{Crc32, Crc64Iso, HashAlgorithm, HashPrimitive, Md5, Sha256};
pub use value::{Float, Int, Mapping, Record, Shape, Uint, Value};
