use crate::common::TestDataDir;
use datadir::{DataDirError, DataDirOptions, DataDirectory};
use tempfile::TempDir;

#[test]
fn test_fresh_path_exists_after_construction() {
    for exist_ok in [true, false] {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("nested/base");

        let dir = DataDirectory::create(&base, exist_ok).unwrap();

        assert!(base.is_dir());
        assert!(dir.enumerate_tree().unwrap().is_empty());
    }
}

#[test]
fn test_existing_directory_respects_exist_ok() {
    let temp = TempDir::new().unwrap();

    for _ in 0..2 {
        DataDirectory::create(temp.path(), true).unwrap();
    }

    let err = DataDirectory::create(temp.path(), false).unwrap_err();
    assert!(matches!(err, DataDirError::AlreadyExists { .. }));
}

#[test]
fn test_predicates_track_the_filesystem() {
    let env = TestDataDir::new();
    let dir = &env.dir;

    assert!(!dir.subdir_exists("sub"));
    assert!(!dir.file_exists("sub/f.txt"));

    dir.create_subdir("sub", true).unwrap();
    assert!(dir.subdir_exists("sub"));

    env.write_raw("sub/f.txt", "x");
    assert!(dir.file_exists("sub/f.txt"));

    std::fs::remove_file(env.path("sub/f.txt")).unwrap();
    assert!(!dir.file_exists("sub/f.txt"));
}

#[test]
fn test_forced_removal_clears_everything() {
    let env = TestDataDir::new();
    let dir = &env.dir;
    dir.create_subdir("run/logs", true).unwrap();
    env.write_raw("run/logs/out.txt", "done");
    env.write_raw("run/summary.txt", "ok");

    let err = dir.remove_subdir("run", false).unwrap_err();
    assert!(matches!(err, DataDirError::NotEmpty { .. }));
    assert!(dir.file_exists("run/logs/out.txt"));
    assert!(dir.file_exists("run/summary.txt"));

    dir.remove_subdir("run", true).unwrap();
    assert!(!dir.subdir_exists("run"));
    assert!(!env.path("run").exists());
}

#[test]
fn test_remove_file_rejects_directories() {
    let env = TestDataDir::new();
    env.dir.create_subdir("d", true).unwrap();

    let err = env.dir.remove_file("d").unwrap_err();
    assert!(matches!(err, DataDirError::NotFound { .. }));
    assert!(env.dir.subdir_exists("d"));
}

#[test]
fn test_escaping_paths_are_rejected() {
    let env = TestDataDir::new();
    env.write_raw("../outside.txt", "secret");

    assert!(!env.dir.file_exists("../outside.txt"));
    assert!(matches!(env.dir.read_lines("../outside.txt"), Err(DataDirError::InvalidArgument { .. })));
    assert!(matches!(env.dir.remove_file("../outside.txt"), Err(DataDirError::InvalidArgument { .. })));
    assert!(env.root().join("outside.txt").exists());
}

#[test]
fn test_unconfined_directory_follows_parent_segments() {
    let env = TestDataDir::new();
    env.write_raw("../outside.txt", "line");

    let options = DataDirOptions {
        confine_paths: false,
        ..DataDirOptions::default()
    };
    let dir = DataDirectory::with_options(env.dir.base_path(), options).unwrap();

    assert!(dir.file_exists("../outside.txt"));
    assert_eq!(dir.read_lines("../outside.txt").unwrap(), vec!["line"]);
}

#[test]
fn test_directory_is_shareable_across_threads() {
    let env = TestDataDir::new();

    std::thread::scope(|scope| {
        for i in 0..4 {
            let dir = env.dir.clone();
            scope.spawn(move || dir.create_subdir(format!("worker-{i}"), true).unwrap());
        }
    });

    assert_eq!(env.dir.enumerate_tree().unwrap().dirs.len(), 4);
}
