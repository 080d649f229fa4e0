use crate::common::TestDataDir;
use borsh::{BorshDeserialize, BorshSerialize};
use datadir::DataDirError;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, BorshSerialize, BorshDeserialize)]
enum Status {
    Pending,
    Done { exit_code: i32 },
}

#[derive(Debug, Clone, PartialEq, BorshSerialize, BorshDeserialize)]
struct Experiment {
    name: String,
    seeds: Vec<u64>,
    params: HashMap<String, f64>,
    status: Status,
}

#[test]
fn test_object_round_trip() {
    let env = TestDataDir::new();
    let experiment = Experiment {
        name: "baseline".to_string(),
        seeds: vec![1, 2, 3],
        params: HashMap::from([("lr".to_string(), 0.01), ("momentum".to_string(), 0.9)]),
        status: Status::Done {
            exit_code: 0,
        },
    };

    env.dir.write_object("exp.bin", &experiment).unwrap();
    let loaded: Experiment = env.dir.read_object("exp.bin").unwrap();

    assert_eq!(loaded, experiment);
}

#[test]
fn test_primitive_and_collection_values() {
    let env = TestDataDir::new();

    env.dir.write_object("s.bin", "text").unwrap();
    assert_eq!(env.dir.read_object::<String>("s.bin").unwrap(), "text");

    env.dir.write_object("v.bin", &vec![Some(1_u8), None]).unwrap();
    assert_eq!(env.dir.read_object::<Vec<Option<u8>>>("v.bin").unwrap(), vec![Some(1), None]);
}

#[test]
fn test_overwrite_replaces_previous_object() {
    let env = TestDataDir::new();

    env.dir.write_object("x.bin", &Status::Pending).unwrap();
    env.dir.write_object("x.bin", &Status::Done { exit_code: 2 }).unwrap();

    assert_eq!(env.dir.read_object::<Status>("x.bin").unwrap(), Status::Done { exit_code: 2 });
}

#[test]
fn test_unserializable_value() {
    let env = TestDataDir::new();
    let params = HashMap::from([("bad".to_string(), f64::NAN)]);

    let err = env.dir.write_object("bad.bin", &params).unwrap_err();

    assert!(matches!(err, DataDirError::NotSerializable { .. }));
    assert!(!env.path("bad.bin").exists());
}

#[test]
fn test_truncated_object_is_corrupt() {
    let env = TestDataDir::new();
    env.dir.write_object("seeds.bin", &vec![10_u64, 20, 30]).unwrap();

    let bytes = std::fs::read(env.path("seeds.bin")).unwrap();
    env.write_raw("seeds.bin", &bytes[..bytes.len() - 3]);

    let err = env.dir.read_object::<Vec<u64>>("seeds.bin").unwrap_err();
    assert!(matches!(err, DataDirError::CorruptData { .. }));
}

#[test]
fn test_missing_object() {
    let env = TestDataDir::new();
    let err = env.dir.read_object::<Experiment>("absent.bin").unwrap_err();
    assert!(matches!(err, DataDirError::NotFound { .. }));
}
