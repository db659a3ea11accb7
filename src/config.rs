//! Configuration management with TOML file support.
//!
//! Merges settings from three sources (highest precedence first):
//! 1. CLI flags
//! 2. Config file (`~/.config/tracetab/config.toml` or
//!    `$XDG_CONFIG_HOME/tracetab/config.toml`)
//! 3. Built-in defaults

use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::{Cli, ColorMode, OutputArg};
use crate::error::TraceTabError;
use crate::render::ColumnSpec;

/// Runtime configuration merged from defaults, config file, and CLI arguments.
///
/// Built once at session start and immutable afterwards — the column
/// specification in particular is read by every render call and never
/// written. Use [`Config::from_cli`] to build from parsed CLI arguments, or
/// [`Config::default`] for built-in defaults (useful in tests and benchmarks).
#[derive(Debug, Clone)]
pub struct Config {
    /// Color output mode for stderr diagnostics (auto/always/never).
    pub color_mode: ColorMode,
    /// Column layout for the whole session.
    pub spec: ColumnSpec,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Auto,
            spec: ColumnSpec::Fixed,
        }
    }
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if present.
    ///
    /// Merge precedence: CLI flags > config file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, TraceTabError> {
        let mut config = Self::default();

        let config_path = cli.config.clone().unwrap_or_else(Self::default_config_path);

        if config_path.exists() {
            let file_config = FileConfig::load(&config_path)?;
            config.apply_file_config(file_config);
        }

        if let Some(color) = cli.color {
            config.color_mode = color;
        }

        if let Some(ref output) = cli.output {
            config.spec = match output {
                OutputArg::Columns => ColumnSpec::Fixed,
                OutputArg::CustomColumns(tokens) => ColumnSpec::Custom(tokens.clone()),
            };
        }

        Ok(config)
    }

    /// Default config file path: `$XDG_CONFIG_HOME/tracetab/config.toml` or
    /// `~/.config/tracetab/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("tracetab").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("tracetab")
                .join("config.toml")
        } else {
            PathBuf::from(".config/tracetab/config.toml")
        }
    }

    /// Apply settings from a parsed config file.
    fn apply_file_config(&mut self, file: FileConfig) {
        if let Some(color) = file.color {
            self.color_mode = match color.as_str() {
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => ColorMode::Auto,
            };
        }

        // A non-empty column list in the file selects a custom layout.
        // Unknown names are kept verbatim; they are ignored at render time,
        // same as unknown names given on the command line.
        if let Some(columns) = file.columns
            && !columns.is_empty()
        {
            self.spec = ColumnSpec::Custom(columns);
        }
    }
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Deserialize)]
struct FileConfig {
    color: Option<String>,
    columns: Option<Vec<String>>,
}

impl FileConfig {
    fn load(path: &PathBuf) -> Result<Self, TraceTabError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TraceTabError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
