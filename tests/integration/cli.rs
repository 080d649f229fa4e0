use crate::common::TestDataDir;
use datadir::{Cell, Table};
use predicates::prelude::*;

#[test]
fn test_mkdir_exists_rmdir() {
    let env = TestDataDir::new();

    env.cli().args(["mkdir", "a/b"]).assert().success();
    env.cli().args(["exists", "a/b", "--dir"]).assert().success().stdout("true\n");
    env.cli().args(["exists", "a/b", "--file"]).assert().code(1).stdout("false\n");

    env.cli()
        .args(["rmdir", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not empty"));
    env.cli().args(["rmdir", "a", "--force"]).assert().success();
    assert!(!env.dir.subdir_exists("a"));
}

#[test]
fn test_mkdir_strict_on_existing() {
    let env = TestDataDir::new();
    env.dir.create_subdir("x", true).unwrap();

    env.cli().args(["mkdir", "x"]).assert().success();
    env.cli()
        .args(["mkdir", "x", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_write_and_cat() {
    let env = TestDataDir::new();

    env.cli().args(["write", "notes.txt", "one", "two"]).assert().success();
    env.cli().args(["write", "notes.txt", "three", "--mode", "a"]).assert().success();
    env.cli().args(["cat", "notes.txt"]).assert().success().stdout("one\ntwo\nthree\n");

    env.cli()
        .args(["write", "notes.txt", "x", "--mode", "z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown write mode"));
}

#[test]
fn test_rm_missing_file() {
    let env = TestDataDir::new();
    env.cli()
        .args(["rm", "ghost.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_tree_listing_and_json() {
    let env = TestDataDir::new();
    env.dir.create_subdir("a", true).unwrap();
    env.write_raw("a/f.txt", "x");

    env.cli()
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("a/\n").and(predicate::str::contains("a/f.txt")));

    let output = env.cli().args(["tree", "--json"]).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["files"].as_array().unwrap().len(), 1);
}

#[test]
fn test_convert_and_show() {
    let env = TestDataDir::new();
    let table = Table::new(["city", "temp"])
        .with_rows([vec![Cell::from("Oslo"), Cell::Float(-3.5)], vec![Cell::from("Rome"), Cell::Float(14.0)]])
        .unwrap();
    env.dir.write_table("weather.csv", &table).unwrap();

    env.cli()
        .args(["convert", "weather.csv", "weather.parquet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("weather.parquet"));
    assert_eq!(env.dir.read_table("weather.parquet").unwrap(), table);

    env.cli()
        .args(["show", "weather.parquet", "--limit", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Oslo")
                .and(predicate::str::contains("Rome").not())
                .and(predicate::str::contains("(2 rows x 2 columns)")),
        );
}

#[test]
fn test_convert_to_unsupported_format() {
    let env = TestDataDir::new();
    env.write_raw("t.csv", "a\n1\n");

    env.cli()
        .args(["convert", "t.csv", "t.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported tabular format"));
    assert!(!env.path("t.json").exists());
}

#[test]
fn test_config_file_sets_base() {
    let env = TestDataDir::new();
    let base = env.root().join("configured");
    std::fs::write(
        env.root().join("datadir.toml"),
        format!("base_path = {:?}\n", base.display().to_string()),
    )
    .unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("datadir").unwrap();
    cmd.env_remove("DATADIR_CONFIG")
        .current_dir(env.root())
        .args(["mkdir", "from-config"])
        .assert()
        .success();

    assert!(base.join("from-config").is_dir());
}
