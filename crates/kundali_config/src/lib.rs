//! Configuration for the `kundali` front end.
//!
//! Every field has a default, so an empty file (or no file at all) is a
//! valid configuration. Files are located in this order:
//!
//! 1. an explicit path (the `--config` flag),
//! 2. the `KUNDALI_CONFIG` environment variable,
//! 3. `kundali.toml` in the working directory.
//!
//! A file named by 1 or 2 must exist and parse.

pub mod error;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use kundali_chart::{DEFAULT_COORDINATE, Gazetteer, Place, PlaceResolver};
use kundali_vedic_base::GeoCoordinate;

pub use error::ConfigError;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "KUNDALI_CONFIG";

/// File looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "kundali.toml";

/// Output rendering for CLI results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Where a configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Environment(PathBuf),
    WorkingDir(PathBuf),
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Environment(p) | Self::WorkingDir(p) => Some(p),
            Self::Defaults => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KundaliConfig {
    /// `env_logger` level used when `RUST_LOG` is unset.
    pub log_level: String,
    pub output: OutputFormat,
    /// Place used when a command gives neither coordinates nor `--place`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_place: Option<String>,
    /// Extra gazetteer entries; they shadow built-in names.
    pub places: Vec<Place>,
}

impl Default for KundaliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            output: OutputFormat::Text,
            default_place: None,
            places: Vec::new(),
        }
    }
}

impl KundaliConfig {
    /// Parse TOML text. `path` is only used in error messages.
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.level_filter()?;
        Ok(config)
    }

    /// Read and parse one file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Locate and load the configuration using the process environment.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, ConfigSource), ConfigError> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let source = locate(explicit, std::env::var_os(CONFIG_ENV_VAR), &cwd);
        let config = match source.path() {
            Some(path) => Self::load_from(path)?,
            None => Self::default(),
        };
        Ok((config, source))
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Built-in places plus the configured entries.
    pub fn gazetteer(&self) -> Gazetteer {
        Gazetteer::builtin().with_places(self.places.iter().cloned())
    }

    /// Coordinate of `default_place`, or the gazetteer fallback.
    pub fn default_coordinate(&self) -> GeoCoordinate {
        match &self.default_place {
            Some(name) => self.gazetteer().resolve_coordinates(name),
            None => DEFAULT_COORDINATE,
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Pick the configuration file to load, if any.
pub fn locate(explicit: Option<&Path>, env_value: Option<OsString>, cwd: &Path) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return ConfigSource::Environment(PathBuf::from(value));
    }
    let local = cwd.join(DEFAULT_CONFIG_FILE);
    if local.is_file() {
        ConfigSource::WorkingDir(local)
    } else {
        ConfigSource::Defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let c = KundaliConfig::from_toml_str("", Path::new("x.toml")).unwrap();
        assert_eq!(c, KundaliConfig::default());
        assert_eq!(c.level_filter().unwrap(), LevelFilter::Warn);
    }

    #[test]
    fn full_file() {
        let text = r#"
log_level = "debug"
output = "json"
default_place = "Sydney"

[[places]]
name = "Sydney"
latitude = -33.8688
longitude = 151.2093
"#;
        let c = KundaliConfig::from_toml_str(text, Path::new("x.toml")).unwrap();
        assert_eq!(c.output, OutputFormat::Json);
        assert_eq!(c.level_filter().unwrap(), LevelFilter::Debug);
        let sydney = c.default_coordinate();
        assert!((sydney.latitude + 33.8688).abs() < 1e-9);
    }

    #[test]
    fn unknown_default_place_falls_back() {
        let c = KundaliConfig {
            default_place: Some("Nowhere".into()),
            ..KundaliConfig::default()
        };
        assert_eq!(c.default_coordinate(), DEFAULT_COORDINATE);
    }

    #[test]
    fn rejects_bad_values() {
        let p = Path::new("x.toml");
        assert!(matches!(
            KundaliConfig::from_toml_str("log_level = \"loud\"", p),
            Err(ConfigError::InvalidLogLevel(_))
        ));
        assert!(matches!(
            KundaliConfig::from_toml_str("output = \"xml\"", p),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            KundaliConfig::from_toml_str("colour = true", p),
            Err(ConfigError::Parse { .. })
        ));
        let bad_place = "[[places]]\nname = \"X\"\nlatitude = 95.0\nlongitude = 0.0\n";
        assert!(KundaliConfig::from_toml_str(bad_place, p).is_err());
    }

    #[test]
    fn locate_prefers_explicit_then_env() {
        let cwd = Path::new("/definitely/not/here");
        assert_eq!(
            locate(Some(Path::new("a.toml")), Some("b.toml".into()), cwd),
            ConfigSource::Explicit("a.toml".into())
        );
        assert_eq!(
            locate(None, Some("b.toml".into()), cwd),
            ConfigSource::Environment("b.toml".into())
        );
        assert_eq!(locate(None, Some("".into()), cwd), ConfigSource::Defaults);
        assert_eq!(locate(None, None, cwd), ConfigSource::Defaults);
    }
}
