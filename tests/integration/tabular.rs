use crate::common::TestDataDir;
use datadir::test_utils::{mixed_table, numeric_table};
use datadir::{Cell, DataDirError, Table, WriteOptions};

#[test]
fn test_round_trip_across_every_extension() {
    let env = TestDataDir::new();
    let table = mixed_table();

    for name in ["t.csv", "t.txt", "t.xlsx", "t.parquet", "T.CSV", "noext"] {
        let written = env.dir.write_table(name, &table).unwrap();
        assert!(written.is_file(), "{name} wrote {}", written.display());
        assert_eq!(datadir::tabular::read_table(&written).unwrap(), table, "round trip via {name}");
    }
}

#[test]
fn test_no_extension_asymmetry() {
    let env = TestDataDir::new();
    let table = numeric_table(3);

    let written = env.dir.write_table("data", &table).unwrap();
    assert_eq!(written, env.path("data.csv"));

    // an extension-less file is read as delimited text
    env.write_raw("raw", "n,half\n0,0.0\n1,0.5\n2,1.0\n");
    assert_eq!(env.dir.read_table("raw").unwrap(), table);
}

#[test]
fn test_unsupported_extension_never_writes() {
    let env = TestDataDir::new();

    let err = env.dir.write_table("t.invalid", &mixed_table()).unwrap_err();
    assert!(matches!(err, DataDirError::UnsupportedFormat { ref extension, .. } if extension == "invalid"));
    assert!(!env.path("t.invalid").exists());

    env.write_raw("present.invalid", "a,b\n1,2\n");
    let err = env.dir.read_table("present.invalid").unwrap_err();
    assert!(matches!(err, DataDirError::UnsupportedFormat { .. }));
}

#[test]
fn test_larger_tables_survive_binary_formats() {
    let env = TestDataDir::new();
    let table = numeric_table(500);

    for name in ["big.xlsx", "big.parquet"] {
        let written = env.dir.write_table(name, &table).unwrap();
        let loaded = env.dir.read_table(name).unwrap();
        assert_eq!(loaded.len(), 500, "{}", written.display());
        assert_eq!(loaded.column("n").unwrap()[499], &Cell::Int(499));
    }
}

#[test]
fn test_write_options_per_call() {
    let env = TestDataDir::new();
    let table = Table::new(["a", "b"]).with_rows([vec![Cell::Int(1), Cell::Int(2)]]).unwrap();
    let options = WriteOptions::default().with_index(true).with_delimiter('|');

    env.dir.write_table_with("piped.txt", &table, &options).unwrap();

    assert_eq!(env.dir.read_lines("piped.txt").unwrap(), vec!["|a|b", "0|1|2"]);
}

#[test]
fn test_missing_parent_directory() {
    let env = TestDataDir::new();
    for name in ["no/such/t.csv", "no/such/t.xlsx", "no/such/t.parquet"] {
        let err = env.dir.write_table(name, &mixed_table()).unwrap_err();
        assert!(matches!(err, DataDirError::NotFound { .. }), "{name}: {err:?}");
    }
}

#[test]
fn test_empty_table_keeps_columns() {
    let env = TestDataDir::new();
    let table = Table::new(["only", "headers"]);

    for name in ["e.csv", "e.parquet"] {
        env.dir.write_table(name, &table).unwrap();
        let loaded = env.dir.read_table(name).unwrap();
        assert_eq!(loaded.columns(), table.columns());
        assert!(loaded.is_empty());
    }
}

#[test]
fn test_table_without_columns_is_never_written() {
    let env = TestDataDir::new();

    for name in ["z.csv", "z.txt", "z.xlsx", "z.parquet", "z"] {
        let err = env.dir.write_table(name, &Table::default()).unwrap_err();
        assert!(matches!(err, DataDirError::InvalidArgument { .. }), "{name}: {err:?}");
    }
    assert!(env.dir.enumerate_tree().unwrap().is_empty());
}
