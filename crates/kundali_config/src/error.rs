//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid log_level {0:?} (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
