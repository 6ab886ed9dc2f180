//! Structural digest computation.
//!
//! Scalars are encoded (see [`crate::encoding`]) and hashed once. Sequences
//! fold left: `acc = H(acc || D(item))`, starting from an empty accumulator.
//! Mappings and records start from `H([])` and XOR in the sequence digest of
//! every `[key, value]` pair, which makes them independent of pair order.

use log::{debug, trace};

use crate::digest::Digest;
use crate::encoding::{encode_bool, encode_float, encode_int, encode_str, encode_uint};
use crate::errors::DigestError;
use crate::primitive::HashPrimitive;
use crate::value::{Float, Int, Mapping, Record, Uint, Value};

/// Computes structural digests with an injected hash primitive.
///
/// The hasher keeps no state besides the primitive, so it is `Send + Sync`
/// whenever the primitive is.
#[derive(Debug, Clone, Default)]
pub struct StructuralHasher<H> {
    primitive: H,
}

impl<H: HashPrimitive> StructuralHasher<H> {
    /// Creates a hasher around `primitive`.
    pub fn new(primitive: H) -> Self {
        Self { primitive }
    }

    /// Borrows the underlying primitive.
    pub fn primitive(&self) -> &H {
        &self.primitive
    }

    /// Digests any value.
    ///
    /// Recursion depth equals the nesting depth of `value`; callers hashing
    /// untrusted, arbitrarily deep input should bound it first.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::UnsupportedShape`] if `value` contains an
    /// [`Value::Opaque`] anywhere.
    ///
    /// # Example
    ///
    /// ```rust
    /// use structsum_core::{Mapping, Md5, Record, StructuralHasher, Value};
    ///
    /// let hasher = StructuralHasher::new(Md5);
    /// let record = Record::new("Pair").field("a", 1i32).field("b", true);
    /// let mapping = Mapping::new().with("b", true).with("a", 1i32);
    ///
    /// assert_eq!(
    ///     hasher.digest(&Value::from(record))?,
    ///     hasher.digest(&Value::from(mapping))?,
    /// );
    /// # Ok::<(), structsum_core::DigestError>(())
    /// ```
    pub fn digest(&self, value: &Value) -> Result<Digest, DigestError> {
        self.digest_value(value).map(Digest::new)
    }

    /// Digests a boolean.
    pub fn digest_bool(&self, value: bool) -> Digest {
        Digest::new(self.primitive.hash(&encode_bool(value)))
    }

    /// Digests a signed integer at its width.
    pub fn digest_int(&self, value: impl Into<Int>) -> Digest {
        Digest::new(self.primitive.hash(&encode_int(value.into())))
    }

    /// Digests an unsigned integer at its width.
    pub fn digest_uint(&self, value: impl Into<Uint>) -> Digest {
        Digest::new(self.primitive.hash(&encode_uint(value.into())))
    }

    /// Digests a float at its width.
    pub fn digest_float(&self, value: impl Into<Float>) -> Digest {
        Digest::new(self.primitive.hash(&encode_float(value.into())))
    }

    /// Digests a string.
    pub fn digest_str(&self, value: &str) -> Digest {
        Digest::new(self.primitive.hash(&encode_str(value)))
    }

    /// Digests an ordered sequence.
    pub fn digest_sequence(&self, items: &[Value]) -> Result<Digest, DigestError> {
        self.fold_sequence(items.iter()).map(Digest::new)
    }

    /// Digests a mapping.
    pub fn digest_mapping(&self, mapping: &Mapping) -> Result<Digest, DigestError> {
        self.fold_pairs(mapping.iter()).map(Digest::new)
    }

    /// Digests a record as a mapping from field names to values.
    pub fn digest_record(&self, record: &Record) -> Result<Digest, DigestError> {
        self.fold_record(record).map(Digest::new)
    }

    fn digest_value(&self, value: &Value) -> Result<Vec<u8>, DigestError> {
        trace!("digesting {} value", value.shape());
        match value {
            Value::Null | Value::Reference(None) => Ok(self.primitive.hash(&[])),
            Value::Bool(v) => Ok(self.primitive.hash(&encode_bool(*v))),
            Value::Int(v) => Ok(self.primitive.hash(&encode_int(*v))),
            Value::Uint(v) => Ok(self.primitive.hash(&encode_uint(*v))),
            Value::Float(v) => Ok(self.primitive.hash(&encode_float(*v))),
            Value::String(v) => Ok(self.primitive.hash(&encode_str(v))),
            Value::Sequence(items) => self.fold_sequence(items.iter()),
            Value::Mapping(mapping) => self.fold_pairs(mapping.iter()),
            Value::Record(record) => self.fold_record(record),
            Value::Reference(Some(target)) => self.digest_value(target),
            Value::Opaque(kind) => {
                debug!("rejecting opaque value of kind '{}'", kind);
                Err(DigestError::unsupported(kind.as_str()))
            }
        }
    }

    fn fold_sequence<'a>(
        &self,
        items: impl ExactSizeIterator<Item = &'a Value>,
    ) -> Result<Vec<u8>, DigestError> {
        if items.len() == 0 {
            return Ok(self.primitive.hash(&[]));
        }
        let mut acc = Vec::new();
        for item in items {
            acc.extend_from_slice(&self.digest_value(item)?);
            acc = self.primitive.hash(&acc);
        }
        Ok(acc)
    }

    /// Sequence digest of the two-element `[key, value]` pair.
    fn pair_digest(&self, key: &Value, value: &Value) -> Result<Vec<u8>, DigestError> {
        let mut acc = self.primitive.hash(&self.digest_value(key)?);
        acc.extend_from_slice(&self.digest_value(value)?);
        Ok(self.primitive.hash(&acc))
    }

    fn fold_pairs<'a>(
        &self,
        pairs: impl Iterator<Item = (&'a Value, &'a Value)>,
    ) -> Result<Vec<u8>, DigestError> {
        let mut acc = self.primitive.hash(&[]);
        let mut count = 0usize;
        for (key, value) in pairs {
            xor_into(&mut acc, &self.pair_digest(key, value)?);
            count += 1;
        }
        debug!("folded {} pairs", count);
        Ok(acc)
    }

    fn fold_record(&self, record: &Record) -> Result<Vec<u8>, DigestError> {
        let names: Vec<Value> = record.fields().map(|(name, _)| Value::from(name)).collect();
        self.fold_pairs(names.iter().zip(record.fields().map(|(_, value)| value)))
    }
}

/// XORs `other` into `acc` byte by byte. Primitives have a fixed output
/// length, so both sides are the same size.
fn xor_into(acc: &mut [u8], other: &[u8]) {
    debug_assert_eq!(acc.len(), other.len(), "hash primitive output length changed");
    for (a, b) in acc.iter_mut().zip(other) {
        *a ^= b;
    }
}

/// Digests a boolean with `hash`.
pub fn digest_bool<H: HashPrimitive + ?Sized>(hash: &H, value: bool) -> Digest {
    Digest::new(hash.hash(&encode_bool(value)))
}

/// Digests a signed integer with `hash`. The width comes from the Rust type.
///
/// ```rust
/// use structsum_core::{digest_int, Crc32};
///
/// assert_eq!(digest_int(&Crc32, 1i64).to_hex(), "1225efff");
/// assert_ne!(digest_int(&Crc32, 1i16), digest_int(&Crc32, 1i32));
/// ```
pub fn digest_int<H: HashPrimitive + ?Sized>(hash: &H, value: impl Into<Int>) -> Digest {
    Digest::new(hash.hash(&encode_int(value.into())))
}

/// Digests an unsigned integer with `hash`.
pub fn digest_uint<H: HashPrimitive + ?Sized>(hash: &H, value: impl Into<Uint>) -> Digest {
    Digest::new(hash.hash(&encode_uint(value.into())))
}

/// Digests a float with `hash`.
pub fn digest_float<H: HashPrimitive + ?Sized>(hash: &H, value: impl Into<Float>) -> Digest {
    Digest::new(hash.hash(&encode_float(value.into())))
}

/// Digests a string with `hash`.
pub fn digest_str<H: HashPrimitive + ?Sized>(hash: &H, value: &str) -> Digest {
    Digest::new(hash.hash(&encode_str(value)))
}

/// Digests any value with `hash`.
///
/// # Errors
///
/// Returns [`DigestError::UnsupportedShape`] for values containing
/// [`Value::Opaque`].
pub fn digest<H: HashPrimitive + ?Sized>(hash: &H, value: &Value) -> Result<Digest, DigestError> {
    StructuralHasher::new(hash).digest(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{from_fn, Crc32, Md5};

    fn md5(input: &[u8]) -> Vec<u8> {
        Md5.hash(input)
    }

    #[test]
    fn scalar_digest_is_hash_of_encoding() {
        let hasher = StructuralHasher::new(Md5);
        assert_eq!(hasher.digest_bool(true).into_bytes(), md5(&[0x01]));
        assert_eq!(hasher.digest_int(-1i8).into_bytes(), md5(&[0xff]));
        assert_eq!(hasher.digest_str("abc").into_bytes(), md5(b"abc"));
        assert_eq!(
            hasher.digest(&Value::from(2u16)).unwrap().into_bytes(),
            md5(&[0x00, 0x02])
        );
    }

    #[test]
    fn null_and_null_reference_hash_empty_input() {
        let hasher = StructuralHasher::new(Md5);
        assert_eq!(hasher.digest(&Value::Null).unwrap().into_bytes(), md5(&[]));
        assert_eq!(
            hasher.digest(&Value::null_reference()).unwrap().into_bytes(),
            md5(&[])
        );
    }

    #[test]
    fn sequence_folds_left() {
        let hasher = StructuralHasher::new(Md5);
        let a = md5(b"a");
        let b = md5(b"b");
        let step1 = md5(&a);
        let expected = md5(&[step1, b].concat());
        let seq = Value::from(vec!["a", "b"]);
        assert_eq!(hasher.digest(&seq).unwrap().into_bytes(), expected);
    }

    #[test]
    fn empty_sequence_hashes_empty_input() {
        let hasher = StructuralHasher::new(Md5);
        assert_eq!(
            hasher.digest_sequence(&[]).unwrap().into_bytes(),
            md5(&[])
        );
    }

    #[test]
    fn mapping_is_xor_of_pair_sequences() {
        let hasher = StructuralHasher::new(Md5);
        let mapping = Mapping::new().with("k1", 1i64).with("k2", 2i64);
        let pair = |k: &str, v: i64| {
            hasher
                .digest(&Value::Sequence(vec![Value::from(k), Value::from(v)]))
                .unwrap()
                .into_bytes()
        };
        let mut expected = md5(&[]);
        xor_into(&mut expected, &pair("k1", 1));
        xor_into(&mut expected, &pair("k2", 2));
        assert_eq!(hasher.digest_mapping(&mapping).unwrap().into_bytes(), expected);
    }

    #[test]
    fn opaque_value_fails_even_when_nested() {
        let hasher = StructuralHasher::new(Crc32);
        let nested = Value::from(vec![
            Value::from(1i32),
            Value::from(Mapping::new().with("callback", Value::opaque("function"))),
        ]);
        assert_eq!(
            hasher.digest(&nested),
            Err(DigestError::UnsupportedShape {
                shape: "function".into()
            })
        );
    }

    #[test]
    fn opaque_mapping_key_fails() {
        let mapping = Mapping::new().with(Value::opaque("channel"), 1i32);
        assert!(digest(&Md5, &Value::from(mapping)).is_err());
    }

    #[test]
    fn closures_can_be_injected() {
        let identity = from_fn(|input: &[u8]| input.iter().take(4).copied().collect());
        let hasher = StructuralHasher::new(identity);
        assert_eq!(hasher.digest_uint(0x0102_0304u32).into_bytes(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn free_functions_match_hasher_methods() {
        let hasher = StructuralHasher::new(Crc32);
        assert_eq!(digest_bool(&Crc32, false), hasher.digest_bool(false));
        assert_eq!(digest_uint(&Crc32, 9u64), hasher.digest_uint(9u64));
        assert_eq!(digest_float(&Crc32, 1.5f32), hasher.digest_float(1.5f32));
        assert_eq!(digest_str(&Crc32, "x"), hasher.digest_str("x"));
    }

    #[test]
    fn dyn_primitive_is_accepted() {
        let primitive: Box<dyn HashPrimitive> = Box::new(Md5);
        let value = Value::from(vec![1u8, 2, 3]);
        assert_eq!(
            digest(primitive.as_ref(), &value).unwrap(),
            digest(&Md5, &value).unwrap()
        );
    }

    #[test]
    fn hasher_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StructuralHasher<Md5>>();
    }
}
