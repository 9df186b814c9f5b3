use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::acronyms::Acronyms;
use crate::case::{Case, Converter};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    /// Exact-match substitutions applied before camel/pascal conversion
    #[serde(default)]
    pub acronyms: Acronyms,
}

/// Output configuration - which case to produce and how
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Target case style
    #[serde(default = "default_case")]
    pub case: Case,
    /// Delimiter for the `delimited` and `screaming-delimited` styles
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Characters exempted from delimiter insertion
    #[serde(default)]
    pub ignore: String,
}

fn default_case() -> Case {
    Case::Snake
}

fn default_delimiter() -> char {
    '_'
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            case: default_case(),
            delimiter: default_delimiter(),
            ignore: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            case = %config.output.case,
            acronyms = config.acronyms.len(),
            "loaded configuration"
        );

        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        for key in self.acronyms.keys() {
            if key.is_empty() {
                anyhow::bail!("Acronym keys must not be empty");
            }

            // Lookups run on trimmed input, so such a key could never match
            if key.trim() != key {
                anyhow::bail!(
                    "Acronym key {:?} has leading or trailing whitespace",
                    key
                );
            }
        }

        check_delimiter(self.output.delimiter)
    }

    /// Generate a default configuration
    pub fn default_config() -> Self {
        let mut acronyms = Acronyms::new();
        acronyms.register("HTTPServer", "Http Server");

        Config {
            output: OutputConfig::default(),
            acronyms,
        }
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Build a converter from this configuration
    pub fn converter(&self) -> Converter {
        Converter::new(self.output.case)
            .with_delimiter(self.output.delimiter)
            .with_ignore(self.output.ignore.clone())
            .with_acronyms(self.acronyms.clone())
    }
}

/// Reject delimiters that would be indistinguishable from word characters
pub fn check_delimiter(delimiter: char) -> Result<()> {
    if delimiter.is_alphanumeric() {
        anyhow::bail!("Delimiter must not be a letter or digit: {:?}", delimiter);
    }
    Ok(())
}
