//! Configuration module
//!
//! Optional `lilak.toml` with the production file layout and dictionary
//! metadata; command-line flags override whatever is configured here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Name of the configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "lilak.toml";

/// CLI configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct CliConfig {
    /// Input and output file layout
    #[serde(default)]
    pub paths: PathsConfig,

    /// Dictionary metadata
    #[serde(default)]
    pub dictionary: DictionaryConfig,
}

/// File layout for a full production run
#[derive(Debug, Deserialize)]
pub struct PathsConfig {
    /// Tagged lexicon source
    pub lexicon: PathBuf,

    /// User word list merged into the dictionary
    pub user_words: PathBuf,

    /// User word list written to the standalone delta file
    pub delta_words: PathBuf,

    /// Affix template with the version/date/alphabet slots
    pub affix_template: PathBuf,

    /// Directory the artifacts are written into
    pub build_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            lexicon: PathBuf::from("lexicon"),
            user_words: PathBuf::from("dic_users"),
            delta_words: PathBuf::from("dic_delta"),
            affix_template: PathBuf::from("affixes"),
            build_dir: PathBuf::from("build"),
        }
    }
}

/// Dictionary naming and versioning
#[derive(Debug, Deserialize)]
pub struct DictionaryConfig {
    /// Locale stem of the output files (`<locale>.dic`, `<locale>.aff`)
    pub locale: String,

    /// Version string substituted into the affix template
    pub version: String,

    /// Rule generation: "standard", "legacy" or "strict"
    pub generation: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            locale: "fa_IR".to_string(),
            version: lilak_core::DICTIONARY_VERSION.to_string(),
            generation: "standard".to_string(),
        }
    }
}

impl CliConfig {
    /// Load an explicit config file, or `lilak.toml` from the working
    /// directory when present, or the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.is_file() {
                    return Ok(CliConfig::default());
                }
                default
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = CliConfig::default();
        assert_eq!(config.paths.lexicon, PathBuf::from("lexicon"));
        assert_eq!(config.paths.build_dir, PathBuf::from("build"));
        assert_eq!(config.dictionary.locale, "fa_IR");
        assert_eq!(config.dictionary.version, "3.0");
        assert_eq!(config.dictionary.generation, "standard");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: CliConfig = toml::from_str(
            "[dictionary]\nlocale = \"fa_AF\"\nversion = \"4.0\"\ngeneration = \"legacy\"\n",
        )
        .unwrap();
        assert_eq!(config.dictionary.locale, "fa_AF");
        assert_eq!(config.paths.lexicon, PathBuf::from("lexicon"));
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let result = CliConfig::load(Some(Path::new("/nonexistent/lilak.toml")));
        assert!(result.is_err());
    }
}
