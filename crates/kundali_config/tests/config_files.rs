//! Loading configuration files from disk.

use std::fs;

use kundali_config::{
    ConfigError, ConfigSource, DEFAULT_CONFIG_FILE, KundaliConfig, OutputFormat, locate,
};

#[test]
fn working_dir_file_is_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_CONFIG_FILE);
    fs::write(&path, "output = \"json\"\n").unwrap();

    let source = locate(None, None, dir.path());
    assert_eq!(source, ConfigSource::WorkingDir(path.clone()));
    let config = KundaliConfig::load_from(source.path().unwrap()).unwrap();
    assert_eq!(config.output, OutputFormat::Json);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = KundaliConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }), "{err}");
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "log_level = [").unwrap();
    let err = KundaliConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "{err}");
}

#[test]
fn serialized_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("round.toml");
    let config = KundaliConfig::from_toml_str(
        "log_level = \"info\"\ndefault_place = \"Pune\"\n\n[[places]]\nname = \"Goa\"\nlatitude = 15.2993\nlongitude = 74.124\n",
        &path,
    )
    .unwrap();
    fs::write(&path, config.to_toml_string().unwrap()).unwrap();
    assert_eq!(KundaliConfig::load_from(&path).unwrap(), config);
}

#[test]
fn configured_places_extend_gazetteer() {
    let config = KundaliConfig::from_toml_str(
        "[[places]]\nname = \"Goa\"\nlatitude = 15.2993\nlongitude = 74.124\n",
        std::path::Path::new("inline.toml"),
    )
    .unwrap();
    let g = config.gazetteer();
    assert!(g.lookup("goa").is_some());
    assert!(g.lookup("Mumbai").is_some());
}
