//! TOML configuration deserialisation for synthesis jobs.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Top-level job configuration.
#[derive(Debug, Deserialize)]
pub struct JobConfig {
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the parcel records come from.
#[derive(Debug, Deserialize)]
pub struct InputConfig {
    /// JSON records file. Relative paths resolve against the job file.
    pub records: PathBuf,
    /// Key holding the record array when the file is an object.
    #[serde(default = "default_entity")]
    pub entity: String,
}

fn default_entity() -> String {
    "parcel".into()
}

/// Output configuration.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Output directory (default: "./output").
    #[serde(default = "default_output_dir")]
    pub directory: PathBuf,
    /// Pretty-print JSON output (default: true).
    #[serde(default = "default_true")]
    pub pretty: bool,
    /// Also write each element's faces as one flat point string (default: false).
    #[serde(default)]
    pub flatten_points: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            pretty: true,
            flatten_points: false,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./output")
}
fn default_true() -> bool {
    true
}

/// Parse a job configuration from TOML text.
pub fn parse_config(content: &str) -> anyhow::Result<JobConfig> {
    let config: JobConfig = toml::from_str(content)?;
    Ok(config)
}

/// Load and parse a TOML job configuration file.
pub fn load_config(path: &Path) -> anyhow::Result<JobConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read job file {}", path.display()))?;
    let mut config = parse_config(&content)
        .with_context(|| format!("Invalid job file {}", path.display()))?;

    if config.input.records.is_relative() {
        if let Some(dir) = path.parent() {
            config.input.records = dir.join(&config.input.records);
        }
    }
    Ok(config)
}
