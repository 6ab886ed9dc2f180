use structsum_core::{HashAlgorithm, Mapping, Record, StructuralHasher, Value};

fn main() {
    let record = Record::new("MyStruct")
        .field("FieldString", "a string")
        .field("FieldInt", 1i32)
        .field("FieldUint", 2u64)
        .field("FieldFloat", 3.0f64)
        .field("FieldBool", true);
    let mapping = Mapping::new()
        .with("FieldBool", true)
        .with("FieldFloat", 3.0f64)
        .with("FieldUint", 2u64)
        .with("FieldInt", 1i32)
        .with("FieldString", "a string");

    for alg in HashAlgorithm::ALL {
        let hasher = StructuralHasher::new(alg);
        let digests = hasher
            .digest(&Value::from(record.clone()))
            .and_then(|r| hasher.digest(&Value::from(mapping.clone())).map(|m| (r, m)));
        match digests {
            Ok((r, m)) => println!("{:<7} record={} mapping={}", alg, r, m),
            Err(err) => {
                eprintln!("digest failed: {}", err);
                std::process::exit(1);
            }
        }
    }
}
