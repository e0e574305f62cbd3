use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub preamble: PreambleConfig,
    pub diagnostics: DiagnosticsConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PreambleConfig {
    /// When true, a repeated TITLE/AUTHOR/DATE replaces the earlier value;
    /// when false, the first value wins and later ones are warned about.
    pub overwrite: bool,
}

impl Default for PreambleConfig {
    fn default() -> Self {
        Self { overwrite: true }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Print collected warnings to stderr after the run. Setting this to
    /// false restores the fully silent permissive-degrade behavior.
    pub report: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self { report: true }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}
