use std::path::{Path, PathBuf};

use coursecat::CatalogError;
use coursecat::settings::{OutputFormat, Settings};

#[test]
fn explicit_file_overrides_defaults() {
    let path = "test_coursecat_settings.toml";
    let _ = std::fs::remove_file(path);
    std::fs::write(path, "log = \"coursecat=debug\"\ncatalog = \"spring.xml\"\noutput = \"json\"\n").expect("write settings");
    let settings = Settings::load(Some(Path::new(path)));
    // Clean up before asserting so a failure does not leave the file behind
    let _ = std::fs::remove_file(path);
    let settings = settings.expect("settings");
    assert_eq!(settings.log, "coursecat=debug");
    assert_eq!(settings.catalog, Some(PathBuf::from("spring.xml")));
    assert_eq!(settings.output, OutputFormat::Json);
    assert!(!settings.pretty);
}

#[test]
fn missing_explicit_file_is_a_config_error() {
    let err = Settings::load(Some(Path::new("does_not_exist_coursecat.toml"))).unwrap_err();
    assert!(matches!(err, CatalogError::Config(_)), "{err}");
}

#[test]
fn defaults_are_sensible() {
    let settings = Settings::default();
    assert_eq!(settings.log, "info");
    assert_eq!(settings.output, OutputFormat::Summary);
    assert!(settings.catalog.is_none());
}
