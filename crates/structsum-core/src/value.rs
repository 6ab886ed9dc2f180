//! Dynamic value model accepted by the structural hasher.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use crate::digest::Digest;
use crate::hasher::StructuralHasher;
use crate::primitive::Sha256;

/// Signed integer carrying its bit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Int {
    /// 8-bit signed integer.
    I8(i8),
    /// 16-bit signed integer.
    I16(i16),
    /// 32-bit signed integer.
    I32(i32),
    /// 64-bit signed integer.
    I64(i64),
    /// 128-bit signed integer.
    I128(i128),
}

impl Int {
    /// Width in bits.
    pub fn bits(&self) -> u32 {
        match self {
            Int::I8(_) => 8,
            Int::I16(_) => 16,
            Int::I32(_) => 32,
            Int::I64(_) => 64,
            Int::I128(_) => 128,
        }
    }
}

/// Unsigned integer carrying its bit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Uint {
    /// 8-bit unsigned integer.
    U8(u8),
    /// 16-bit unsigned integer.
    U16(u16),
    /// 32-bit unsigned integer.
    U32(u32),
    /// 64-bit unsigned integer.
    U64(u64),
    /// 128-bit unsigned integer.
    U128(u128),
}

impl Uint {
    /// Width in bits.
    pub fn bits(&self) -> u32 {
        match self {
            Uint::U8(_) => 8,
            Uint::U16(_) => 16,
            Uint::U32(_) => 32,
            Uint::U64(_) => 64,
            Uint::U128(_) => 128,
        }
    }
}

/// IEEE-754 float carrying its bit width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Float {
    /// Single precision.
    F32(f32),
    /// Double precision.
    F64(f64),
}

impl Float {
    /// Width in bits.
    pub fn bits(&self) -> u32 {
        match self {
            Float::F32(_) => 32,
            Float::F64(_) => 64,
        }
    }
}

macro_rules! scalar_from {
    ($target:ident, $($prim:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$prim> for $target {
                fn from(value: $prim) -> Self {
                    $target::$variant(value)
                }
            }

            impl From<$prim> for Value {
                fn from(value: $prim) -> Self {
                    Value::$target($target::$variant(value))
                }
            }
        )+
    };
}

scalar_from!(Int, i8 => I8, i16 => I16, i32 => I32, i64 => I64, i128 => I128);
scalar_from!(Uint, u8 => U8, u16 => U16, u32 => U32, u64 => U64, u128 => U128);
scalar_from!(Float, f32 => F32, f64 => F64);

// Pointer-sized integers are pinned to 64 bits so digests do not depend on
// the target platform.
impl From<isize> for Int {
    fn from(value: isize) -> Self {
        Int::I64(value as i64)
    }
}

impl From<usize> for Uint {
    fn from(value: usize) -> Self {
        Uint::U64(value as u64)
    }
}

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        Value::Int(value.into())
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Uint(value.into())
    }
}

/// Key/value associations hashed without regard to order.
///
/// Keys are unique under the same equivalence the digest uses: two keys are
/// the same key when their structural SHA-256 digests match. References are
/// therefore looked through, floats compare by bit pattern (`0.0` and `-0.0`
/// are distinct keys), integers with the same width and bytes coincide
/// whatever their signedness, and nested mapping keys ignore pair order.
/// Inserting an existing key replaces its value. Pairs keep insertion order
/// for inspection only.
///
/// Keys containing an [`Value::Opaque`] have no digest; they are kept as-is
/// and make any digest of the mapping fail.
#[derive(Clone, Default)]
pub struct Mapping {
    entries: Vec<(Value, Value)>,
    index: HashMap<Digest, usize>,
}

/// Identity of a mapping key, `None` for keys that cannot be digested.
fn key_id(key: &Value) -> Option<Digest> {
    StructuralHasher::new(Sha256).digest(key).ok()
}

impl Mapping {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mapping from pairs whose keys the caller knows to be
    /// distinct, skipping the replacement check.
    pub(crate) fn from_unique_pairs(pairs: impl IntoIterator<Item = (Value, Value)>) -> Self {
        let pairs = pairs.into_iter();
        let mut mapping = Mapping {
            entries: Vec::with_capacity(pairs.size_hint().0),
            index: HashMap::with_capacity(pairs.size_hint().0),
        };
        for (key, value) in pairs {
            if let Some(id) = key_id(&key) {
                mapping.index.insert(id, mapping.entries.len());
            }
            mapping.entries.push((key, value));
        }
        mapping
    }

    /// Builder form of [`Mapping::insert`].
    pub fn with(mut self, key: impl Into<Value>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a pair, returning the previous value for an equivalent key.
    /// The first key inserted is the one kept.
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        let Some(id) = key_id(&key) else {
            self.entries.push((key, value));
            return None;
        };
        match self.index.get(&id) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, value)),
            None => {
                self.index.insert(id, self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Looks up the value stored under a key equivalent to `key`.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        match key_id(key) {
            Some(id) => self.index.get(&id).map(|&slot| &self.entries[slot].1),
            None => self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
        }
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the mapping holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// Order-independent: equal when every key of one side maps to an equal value
// on the other.
impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (k, v) in iter {
            mapping.insert(k, v);
        }
        mapping
    }
}

/// Composite with named fields in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    name: String,
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Starts a record of the given type name. The name is informational and
    /// never hashed.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field. A repeated name replaces the earlier value in place.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
        self
    }

    /// Type name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterates fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` for a record without fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Category of a [`Value`], used in logs and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Absent value.
    Null,
    /// Boolean.
    Bool,
    /// Signed integer.
    Int,
    /// Unsigned integer.
    Uint,
    /// Floating point.
    Float,
    /// UTF-8 text.
    String,
    /// Ordered sequence.
    Sequence,
    /// Unordered key/value mapping.
    Mapping,
    /// Named-field record.
    Record,
    /// Transparent reference.
    Reference,
    /// Non-data value.
    Opaque,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Null => "null",
            Shape::Bool => "bool",
            Shape::Int => "int",
            Shape::Uint => "uint",
            Shape::Float => "float",
            Shape::String => "string",
            Shape::Sequence => "sequence",
            Shape::Mapping => "mapping",
            Shape::Record => "record",
            Shape::Reference => "reference",
            Shape::Opaque => "opaque",
        };
        f.write_str(name)
    }
}

/// Dynamically-typed input to the structural hasher.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value; hashes as empty input.
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer of a fixed width.
    Int(Int),
    /// Unsigned integer of a fixed width.
    Uint(Uint),
    /// Float of a fixed width.
    Float(Float),
    /// UTF-8 string.
    String(String),
    /// Ordered sequence (lists, arrays, tuples).
    Sequence(Vec<Value>),
    /// Unordered key/value mapping.
    Mapping(Mapping),
    /// Named-field record.
    Record(Record),
    /// Indirection to another value; `None` is the null reference.
    Reference(Option<Arc<Value>>),
    /// Value with no hashable content (function, channel, handle). Digesting
    /// it fails with [`crate::DigestError::UnsupportedShape`].
    Opaque(String),
}

impl Value {
    /// Wraps `value` in a reference.
    pub fn reference(value: impl Into<Value>) -> Self {
        Value::Reference(Some(Arc::new(value.into())))
    }

    /// The null reference.
    pub fn null_reference() -> Self {
        Value::Reference(None)
    }

    /// Marks a non-data value of the given kind.
    pub fn opaque(kind: impl Into<String>) -> Self {
        Value::Opaque(kind.into())
    }

    /// Category of this value.
    pub fn shape(&self) -> Shape {
        match self {
            Value::Null => Shape::Null,
            Value::Bool(_) => Shape::Bool,
            Value::Int(_) => Shape::Int,
            Value::Uint(_) => Shape::Uint,
            Value::Float(_) => Shape::Float,
            Value::String(_) => Shape::String,
            Value::Sequence(_) => Shape::Sequence,
            Value::Mapping(_) => Shape::Mapping,
            Value::Record(_) => Shape::Record,
            Value::Reference(_) => Shape::Reference,
            Value::Opaque(_) => Shape::Opaque,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Int> for Value {
    fn from(value: Int) -> Self {
        Value::Int(value)
    }
}

impl From<Uint> for Value {
    fn from(value: Uint) -> Self {
        Value::Uint(value)
    }
}

impl From<Float> for Value {
    fn from(value: Float) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Value::Mapping(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl From<Arc<Value>> for Value {
    fn from(value: Arc<Value>) -> Self {
        Value::Reference(Some(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        Value::Reference(value.map(|v| Arc::new(v.into())))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::Sequence(items.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<Value>, B: Into<Value>> From<(A, B)> for Value {
    fn from((a, b): (A, B)) -> Self {
        Value::Sequence(vec![a.into(), b.into()])
    }
}

impl<A: Into<Value>, B: Into<Value>, C: Into<Value>> From<(A, B, C)> for Value {
    fn from((a, b, c): (A, B, C)) -> Self {
        Value::Sequence(vec![a.into(), b.into(), c.into()])
    }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(map: BTreeMap<K, V>) -> Self {
        Value::Mapping(map.into_iter().collect())
    }
}

impl<K: Into<Value>, V: Into<Value>, S> From<HashMap<K, V, S>> for Value {
    fn from(map: HashMap<K, V, S>) -> Self {
        Value::Mapping(map.into_iter().collect())
    }
}
