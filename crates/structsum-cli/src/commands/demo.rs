//! Demo command implementation.
//!
//! Prints digests of a fixed set of sample values so the structural rules
//! can be checked by eye: the record and both maps share a digest, the two
//! string arrays do not.

use structsum_core::{HashAlgorithm, Mapping, Record, StructuralHasher, Value};

use crate::errors::CliError;
use crate::output;

/// Labelled sample values in print order.
pub fn samples() -> Vec<(&'static str, Value)> {
    let my_struct = Record::new("MyStruct")
        .field("FieldString", "a string")
        .field("FieldInt", 1i32)
        .field("FieldUint", 2u64)
        .field("FieldFloat", 3.0f64)
        .field("FieldBool", true);
    let map1 = Mapping::new()
        .with("FieldString", "a string")
        .with("FieldInt", 1i32)
        .with("FieldUint", 2u64)
        .with("FieldFloat", 3.0f64)
        .with("FieldBool", true);
    let map2 = Mapping::new()
        .with("FieldBool", true)
        .with("FieldString", "a string")
        .with("FieldFloat", 3.0f64)
        .with("FieldUint", 2u64)
        .with("FieldInt", 1i32);
    let nested = Mapping::new()
        .with(
            "a",
            vec![
                Value::from("1"),
                Value::from(2i64),
                Value::from(true),
                Value::from(
                    Mapping::new()
                        .with("one", 1i64)
                        .with("two", 2i64)
                        .with("three", 3i64),
                ),
            ],
        )
        .with(
            "m",
            Mapping::new()
                .with("s", "a string")
                .with("i", 1i64)
                .with("b", true)
                .with("a2", vec![1i64, 2, 3]),
        );

    vec![
        ("Bool", Value::from(true)),
        ("Int16", Value::from(1i16)),
        ("Uint32", Value::from(1u32)),
        ("Float32", Value::from(1.0f32)),
        ("Float64", Value::from(1.0f64)),
        ("String", Value::from("1")),
        (
            "Slice",
            Value::from(vec![
                Value::from(1i64),
                Value::from(2i8),
                Value::from(3i16),
                Value::from(4i32),
                Value::from(5i64),
            ]),
        ),
        ("Strings", Value::from(["1", "2", "3", "4", "5"])),
        ("Reverse", Value::from(["5", "4", "3", "2", "1"])),
        ("Struct", Value::from(my_struct)),
        ("Map1", Value::from(map1)),
        ("Map2", Value::from(map2)),
        ("Nested", Value::from(nested)),
        ("Nil", Value::Null),
        ("Pointer", Value::reference(1i64)),
    ]
}

pub fn run(algorithm: HashAlgorithm) -> Result<(), CliError> {
    let hasher = StructuralHasher::new(algorithm);
    println!("algorithm: {}", algorithm);
    for (label, value) in samples() {
        let digest = hasher.digest(&value)?;
        println!("{}", output::format_labelled(label, &digest));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn struct_and_maps_share_a_digest() {
        let hasher = StructuralHasher::new(HashAlgorithm::Md5);
        let digests: Vec<_> = samples()
            .into_iter()
            .filter(|(label, _)| matches!(*label, "Struct" | "Map1" | "Map2"))
            .map(|(_, value)| hasher.digest(&value).unwrap())
            .collect();
        assert_eq!(digests.len(), 3);
        assert!(digests.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn reversed_strings_differ() {
        let hasher = StructuralHasher::new(HashAlgorithm::Crc32);
        let samples = samples();
        let find = |name: &str| {
            let (_, value) = samples.iter().find(|(label, _)| *label == name).unwrap();
            hasher.digest(value).unwrap()
        };
        assert_ne!(find("Strings"), find("Reverse"));
    }
}
