//! `shapedoc.toml` parsing and merging with command-line flags

use std::path::{Path, PathBuf};

use serde::Deserialize;
use shapedoc_core::{OutputFormat, RenderOptions};
use thiserror::Error;

/// Default configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "shapedoc.toml";

/// Errors that can occur when loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Contents of `shapedoc.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Interface body format.
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Top-level document heading.
    #[serde(default)]
    pub title: Option<String>,

    /// Emit a table of contents.
    #[serde(default, rename = "table-of-contents")]
    pub table_of_contents: Option<bool>,

    /// Where to write the document instead of stdout.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// Values given on the command line, which take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub format: Option<OutputFormat>,
    pub title: Option<String>,
    pub table_of_contents: bool,
    pub output: Option<PathBuf>,
}

impl Config {
    /// Load a configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or contains unknown keys.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load the explicit config if given, else `./shapedoc.toml` when it
    /// exists, else the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected file cannot be read or parsed.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        let default = dir.join(CONFIG_FILE);
        if default.is_file() {
            log::debug!("using {}", default.display());
            Self::from_path(default)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply command-line overrides, producing render options and the output path.
    pub fn merge(self, overrides: Overrides) -> (RenderOptions, Option<PathBuf>) {
        let options = RenderOptions {
            format: overrides.format.or(self.format).unwrap_or_default(),
            title: overrides.title.or(self.title),
            table_of_contents: overrides.table_of_contents
                || self.table_of_contents.unwrap_or(false),
        };
        (options, overrides.output.or(self.output))
    }
}
