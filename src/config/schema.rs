use serde::{Deserialize, Serialize};

use crate::roster::DEFAULT_SENTINEL;

/// Top-level configuration file.
///
/// Example YAML:
/// ```yaml
/// season:
///   sentinel: "None"
/// output:
///   format: table
///   color: false
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub season: SeasonConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Settings that change how a season roster is parsed.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SeasonConfig {
    /// Driver line marking an empty second seat (default: "None")
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            sentinel: default_sentinel(),
        }
    }
}

fn default_sentinel() -> String {
    DEFAULT_SENTINEL.to_string()
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Force colors on or off. Unset means color only when stdout is a TTY.
    #[serde(default)]
    pub color: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Tsv,
    Json,
}
