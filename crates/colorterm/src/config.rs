//! Settings file.
//!
//! ```yaml
//! template_dir: /etc/colorterm/templates
//! guide_dir: /etc/colorterm/install
//! archive_name: colorterm.zip
//! output_dir: .
//! log:
//!   level: info
//!   format: json
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use std::path::{Path, PathBuf};

use colorterm_dispatch::DEFAULT_ARCHIVE_NAME;
use serde::{Deserialize, Serialize};

use crate::logging::LogConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory of template overrides, keyed by template file name.
    pub template_dir: Option<PathBuf>,
    /// Directory of `<mode>.txt` install guide overrides.
    pub guide_dir: Option<PathBuf>,
    pub archive_name: String,
    /// Where `generate` writes the archive when no `--out` is given.
    pub output_dir: PathBuf,
    pub log: LogConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            template_dir: None,
            guide_dir: None,
            archive_name: DEFAULT_ARCHIVE_NAME.to_string(),
            output_dir: PathBuf::from("."),
            log: LogConfig::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("archive_name must be a plain file name, got {0:?}")]
    ArchiveName(String),
}

impl Settings {
    pub fn from_yaml(input: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty map.
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(input)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects archive names that would escape `output_dir` or break the
    /// `Content-Disposition` header.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let name = self.archive_name.as_str();
        let plain = !name.is_empty()
            && Path::new(name).file_name().and_then(|n| n.to_str()) == Some(name)
            && !name.chars().any(|c| c.is_control() || c == '"' || c == ';');
        if plain {
            Ok(())
        } else {
            Err(ConfigError::ArchiveName(name.to_string()))
        }
    }

    /// Default archive path for `generate`.
    pub fn archive_path(&self) -> PathBuf {
        self.output_dir.join(&self.archive_name)
    }
}
