use proptest::prelude::*;
use structsum_core::{digest, HashAlgorithm, Mapping, Record, Value};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i8>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<u16>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        any::<f32>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::btree_map("[a-z]{1,4}", inner.clone(), 0..4).prop_map(Value::from),
            inner.prop_map(|v| Value::reference(v)),
        ]
    })
}

fn algorithm() -> impl Strategy<Value = HashAlgorithm> {
    prop::sample::select(HashAlgorithm::ALL.to_vec())
}

proptest! {
    #[test]
    fn digest_is_deterministic(alg in algorithm(), v in value()) {
        prop_assert_eq!(digest(&alg, &v).unwrap(), digest(&alg, &v).unwrap());
    }

    #[test]
    fn digest_length_matches_primitive(alg in algorithm(), v in value()) {
        prop_assert_eq!(digest(&alg, &v).unwrap().len(), alg.output_len());
    }

    #[test]
    fn mapping_ignores_pair_order(
        alg in algorithm(),
        pairs in prop::collection::btree_map("[a-z]{1,6}", value(), 0..6),
    ) {
        let forward: Mapping = pairs.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();
        let backward: Mapping = pairs.iter().rev().map(|(k, v)| (k.as_str(), v.clone())).collect();
        prop_assert_eq!(
            digest(&alg, &Value::from(forward)).unwrap(),
            digest(&alg, &Value::from(backward)).unwrap()
        );
    }

    #[test]
    fn record_matches_mapping_with_same_fields(
        alg in algorithm(),
        fields in prop::collection::btree_map("[A-Za-z]{1,6}", value(), 0..6),
    ) {
        let record = fields
            .iter()
            .rev()
            .fold(Record::new("Generated"), |r, (k, v)| r.field(k.as_str(), v.clone()));
        let mapping: Mapping = fields.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();
        prop_assert_eq!(
            digest(&alg, &Value::from(record)).unwrap(),
            digest(&alg, &Value::from(mapping)).unwrap()
        );
    }

    #[test]
    fn reference_is_transparent(alg in algorithm(), v in value()) {
        prop_assert_eq!(
            digest(&alg, &Value::reference(v.clone())).unwrap(),
            digest(&alg, &v).unwrap()
        );
    }

    #[test]
    fn swapping_distinct_strings_changes_sequence_digest(
        a in "[a-z]{1,8}",
        b in "[A-Z]{1,8}",
    ) {
        let forward = Value::from(vec![a.clone(), b.clone()]);
        let backward = Value::from(vec![b, a]);
        prop_assert_ne!(
            digest(&HashAlgorithm::Sha256, &forward).unwrap(),
            digest(&HashAlgorithm::Sha256, &backward).unwrap()
        );
    }
}
