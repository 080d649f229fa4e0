use crate::common::TestDataDir;
use datadir::{DataDirError, WriteMode};

#[test]
fn test_text_round_trip_splits_lines() {
    let env = TestDataDir::new();
    let cases: [(&str, Vec<&str>); 5] = [
        ("", vec![]),
        ("single", vec!["single"]),
        ("a\nb\nc", vec!["a", "b", "c"]),
        ("trailing\n", vec!["trailing"]),
        ("blank\n\nlines\n", vec!["blank", "", "lines"]),
    ];

    for (content, expected) in cases {
        env.dir.write_text("t.txt", content, WriteMode::Overwrite).unwrap();
        assert_eq!(env.dir.read_lines("t.txt").unwrap(), expected, "content {content:?}");
    }
}

#[test]
fn test_append_concatenates_in_order() {
    let env = TestDataDir::new();

    env.dir.write_text("log.txt", "first\n", WriteMode::Append).unwrap();
    env.dir.write_text("log.txt", "second\n", WriteMode::Append).unwrap();

    assert_eq!(std::fs::read_to_string(env.path("log.txt")).unwrap(), "first\nsecond\n");
}

#[test]
fn test_overwrite_replaces_content() {
    let env = TestDataDir::new();

    env.dir.write_text("f.txt", "long original content", WriteMode::Overwrite).unwrap();
    env.dir.write_text("f.txt", "short", WriteMode::Overwrite).unwrap();

    assert_eq!(std::fs::read_to_string(env.path("f.txt")).unwrap(), "short");
}

#[test]
fn test_sequence_of_strings_is_written_verbatim() {
    let env = TestDataDir::new();
    let lines = vec!["one\n".to_string(), "two\n".to_string()];

    env.dir.write_text("f.txt", lines, WriteMode::Overwrite).unwrap();

    assert_eq!(env.dir.read_lines("f.txt").unwrap(), vec!["one", "two"]);
}

#[test]
fn test_unknown_mode_string() {
    let err = "r+".parse::<WriteMode>().unwrap_err();
    assert!(matches!(err, DataDirError::InvalidArgument { .. }));
}

#[test]
fn test_missing_file() {
    let env = TestDataDir::new();
    let err = env.dir.read_lines("nope.txt").unwrap_err();
    match err {
        DataDirError::NotFound { path } => assert_eq!(path, env.path("nope.txt")),
        other => panic!("unexpected error: {other:?}"),
    }
}
