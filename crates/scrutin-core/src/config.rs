use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::dataset::Dataset;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_WAREHOUSE_PATH: &str = "warehouse.duckdb";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Pipeline configuration, read from a TOML document.
#[derive(Debug, Clone, Deserialize)]
pub struct EtlConfig {
    /// Directory holding the four input files.
    pub data_path: PathBuf,
    pub files: InputFiles,
    /// Directory receiving the cleaned flat files; created when missing.
    pub output_path: PathBuf,
    #[serde(default = "default_warehouse_path")]
    pub warehouse_path: PathBuf,
}

/// Input file names keyed by logical dataset name.
#[derive(Debug, Clone, Deserialize)]
pub struct InputFiles {
    pub t1: String,
    pub t2: String,
    pub chomage: String,
    pub securite: String,
}

impl InputFiles {
    pub fn file_for(&self, dataset: Dataset) -> &str {
        match dataset {
            Dataset::ElectionRound1 => &self.t1,
            Dataset::ElectionRound2 => &self.t2,
            Dataset::Unemployment => &self.chomage,
            Dataset::Security => &self.securite,
        }
    }
}

fn default_warehouse_path() -> PathBuf {
    PathBuf::from(DEFAULT_WAREHOUSE_PATH)
}

impl EtlConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
