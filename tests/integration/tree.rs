use crate::common::TestDataDir;
use datadir::WriteMode;
use tempfile::TempDir;

#[test]
fn test_empty_base_has_empty_tree() {
    let env = TestDataDir::new();
    let tree = env.dir.enumerate_tree().unwrap();
    assert!(tree.dirs.is_empty());
    assert!(tree.files.is_empty());
}

#[test]
fn test_one_subdir_two_files() {
    let env = TestDataDir::new();
    env.dir.create_subdir("sub", true).unwrap();
    env.dir.write_text("root.txt", "r", WriteMode::Overwrite).unwrap();
    env.dir.write_text("sub/inner.txt", "i", WriteMode::Overwrite).unwrap();

    let tree = env.dir.enumerate_tree().unwrap();

    assert_eq!(tree.dirs, vec![env.path("sub")]);
    assert_eq!(tree.files.len(), 2);
    let mut files = tree.relative_files();
    files.sort();
    assert_eq!(files, vec!["root.txt", "sub/inner.txt"]);
}

#[test]
fn test_directory_lifecycle_scenario() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("d");
    assert!(!base.exists());

    let dir = datadir::DataDirectory::new(&base).unwrap();
    assert!(base.is_dir());
    assert!(dir.enumerate_tree().unwrap().is_empty());

    dir.create_subdir("a", true).unwrap();
    dir.write_text("a/f.txt", "x\ny", WriteMode::Overwrite).unwrap();

    let tree = dir.enumerate_tree().unwrap();
    assert_eq!(tree.relative_dirs(), vec!["a"]);
    assert_eq!(tree.relative_files(), vec!["a/f.txt"]);
    assert_eq!(tree.files, vec![base.join("a").join("f.txt")]);

    assert_eq!(dir.read_lines("a/f.txt").unwrap(), vec!["x", "y"]);
}

#[test]
fn test_tree_serializes_to_json() {
    let env = TestDataDir::new();
    env.dir.create_subdir("a", true).unwrap();

    let json = serde_json::to_value(env.dir.enumerate_tree().unwrap()).unwrap();

    assert_eq!(json["dirs"].as_array().unwrap().len(), 1);
    assert!(json["files"].as_array().unwrap().is_empty());
    assert!(json["root"].is_string());
}
