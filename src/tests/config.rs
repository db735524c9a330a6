use super::Config;
use crate::prune::{IgnoreSet, DEFAULT_IGNORE_SECTIONS};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_missing_file_gives_defaults() {
    let config = Config::load_from(Path::new("/nonexistent/wikisect.toml"));

    assert_eq!(config, Config::default());
    assert_eq!(config.lang, "en");
    assert_eq!(config.timeout_secs, 10);
    assert_eq!(config.ignore_sections.len(), DEFAULT_IGNORE_SECTIONS.len());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "lang = \"de\"").unwrap();

    let config = Config::load_from(file.path());

    assert_eq!(config.lang, "de");
    assert_eq!(config.timeout_secs, 10);
    assert_eq!(config.ignore_sections, DEFAULT_IGNORE_SECTIONS.to_vec());
    assert_eq!(config.ignore_set(), IgnoreSet::default());
}

#[test]
fn test_per_locale_ignore_sections() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "ignore_sections = [\"Einzelnachweise\", \"Weblinks\", \"Literatur\"]\nlang = \"de\""
    )
    .unwrap();

    let config = Config::load_from(file.path());
    let ignore = config.ignore_set();

    assert_eq!(ignore.len(), 3);
    assert!(ignore.contains("Weblinks"));
    assert!(!ignore.contains("References"));
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "timeout_secs = \"soon\"").unwrap();

    let config = Config::load_from(file.path());

    assert_eq!(config, Config::default());
}
