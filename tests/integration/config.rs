use datadir::{DataDirConfig, DataDirError, DataDirectory};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_directory_from_config_file() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("datadir.toml");
    let base = temp.path().join("data");
    fs::write(
        &config_path,
        format!(
            "base_path = {:?}\n\n[tabular]\ndelimiter = \";\"\ninclude_index = true\n",
            base.display().to_string()
        ),
    )
    .unwrap();

    let config = DataDirConfig::load_with_optional(Some(config_path)).unwrap();
    let dir = DataDirectory::from_config(&config).unwrap();

    assert_eq!(dir.base_path(), base);
    assert!(base.is_dir());
    assert_eq!(dir.write_options().delimiter, ';');
    assert!(dir.write_options().include_index);
}

#[test]
fn test_strict_config_rejects_existing_base() {
    let temp = TempDir::new().unwrap();
    let config = DataDirConfig {
        base_path: Some(temp.path().to_path_buf()),
        exist_ok: false,
        ..DataDirConfig::default()
    };

    let err = DataDirectory::from_config(&config).unwrap_err();
    assert!(matches!(err, DataDirError::AlreadyExists { .. }));
}

#[test]
fn test_config_errors_are_user_friendly() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("broken.toml");
    fs::write(&config_path, "base_path = [").unwrap();

    let err = DataDirConfig::load_from(&config_path).unwrap_err();
    let ctx = datadir::core::user_friendly_error(err);

    assert!(ctx.suggestion.unwrap_or_default().contains("TOML"));
}
