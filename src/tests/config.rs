use super::Config;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("mdindex.toml"));
    assert_eq!(config, Config::default());
    assert_eq!(config.settings().marker, "#");
    assert_eq!(config.settings().start_level, 1);
}

#[test]
fn test_values_loaded_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mdindex.toml");
    fs::write(
        &path,
        "index_base = \"=\"\nindex_start_level = \"2\"\nfile_extensions = [\"md\", \"txt\"]\n",
    )
    .unwrap();

    let config = Config::load_from(&path);

    assert_eq!(config.index_base, "=");
    assert_eq!(config.file_extensions, vec!["md", "txt"]);
    let settings = config.settings();
    assert_eq!(settings.marker, "=");
    assert_eq!(settings.start_level, 2);
}

#[test]
fn test_invalid_values_fall_back() {
    let config = Config {
        index_base: String::new(),
        index_start_level: "zero".to_string(),
        file_extensions: vec!["md".to_string()],
    };
    let settings = config.settings();
    assert_eq!(settings.marker, "#");
    assert_eq!(settings.start_level, 1);
}

#[test]
fn test_unparsable_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mdindex.toml");
    fs::write(&path, "index_base = [not toml").unwrap();

    assert_eq!(Config::load_from(&path), Config::default());
}
