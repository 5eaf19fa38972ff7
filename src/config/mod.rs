//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{files, grouping, output_formats, segment_rules};
use crate::core::error::{Result, UrlSiftError};
use crate::core::types::ExtensionSet;
use crate::sift::grouper::Grouper;
use crate::sift::pipeline::Pipeline;
use crate::sift::signature::{SignatureBuilder, rule_from_name};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Extra static resource extensions, each entry may hold several
    pub extensions: Option<Vec<String>>,

    /// Start from the built-in extension set
    pub use_default_extensions: Option<bool>,

    /// Skip the extension filter entirely
    pub keep_static: Option<bool>,

    /// URLs kept per similarity group
    pub group_cap: Option<usize>,

    /// Names of the rules deciding which path segments are variable
    pub segment_rules: Option<Vec<String>>,

    /// Minimum segment length for the long-token rule
    pub min_token_len: Option<usize>,

    /// Skip URLs repeating a query shape already kept in their group
    pub distinct_query: Option<bool>,

    /// Output format (text, minimal, json)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: None,
            use_default_extensions: Some(true),
            keep_static: Some(false),
            group_cap: Some(grouping::DEFAULT_GROUP_CAP),
            segment_rules: None, // Falls back to segment_rules::DEFAULT
            min_token_len: Some(grouping::DEFAULT_MIN_TOKEN_LEN),
            distinct_query: Some(false),
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UrlSiftError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| UrlSiftError::TomlParsing {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Candidate config paths, nearest first
    pub fn standard_locations() -> Vec<PathBuf> {
        (0..=files::CONFIG_SEARCH_DEPTH)
            .map(|depth| {
                PathBuf::from(format!(
                    "{}{}",
                    "../".repeat(depth),
                    files::CONFIG_FILE_NAME
                ))
            })
            .collect()
    }

    /// Try to find and load a config file in standard locations.
    ///
    /// Returns the config along with a message for every file that was
    /// found but skipped because it failed to load.
    pub fn load_from_standard_locations() -> (Self, Vec<String>) {
        Self::load_first_of(&Self::standard_locations())
    }

    /// Load the first of `paths` that exists and is valid, else defaults
    pub fn load_first_of(paths: &[PathBuf]) -> (Self, Vec<String>) {
        let mut skipped = Vec::new();
        for path in paths {
            if !path.is_file() {
                continue;
            }
            match Self::load_from_file(path) {
                Ok(config) => return (config, skipped),
                Err(e) => skipped.push(format!("Ignoring config file {}: {e}", path.display())),
            }
        }

        // Fall back to defaults
        (Self::default(), skipped)
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        // Extension filter
        if let Some(ref added) = cli_config.extensions {
            self.extensions
                .get_or_insert_with(Vec::new)
                .extend(added.iter().cloned());
        }
        if cli_config.no_default_extensions {
            self.use_default_extensions = Some(false);
        }
        if cli_config.keep_static {
            self.keep_static = Some(true);
        }

        // Grouping
        if let Some(cap) = cli_config.group_cap {
            self.group_cap = Some(cap);
        }
        if let Some(ref rules) = cli_config.segment_rules {
            self.segment_rules = Some(rules.clone());
        }
        if let Some(min_token_len) = cli_config.min_token_len {
            self.min_token_len = Some(min_token_len);
        }
        if cli_config.distinct_query {
            self.distinct_query = Some(true);
        }

        // Output & format
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
    }

    /// The configured extension set, defaults included unless disabled
    pub fn extension_set(&self) -> ExtensionSet {
        let mut set = if self.use_default_extensions.unwrap_or(true) {
            ExtensionSet::defaults()
        } else {
            ExtensionSet::empty()
        };
        for entry in self.extensions.iter().flatten() {
            set.insert_batch(entry);
        }
        set
    }

    pub fn group_cap(&self) -> usize {
        self.group_cap.unwrap_or(grouping::DEFAULT_GROUP_CAP)
    }

    pub fn min_token_len(&self) -> usize {
        self.min_token_len.unwrap_or(grouping::DEFAULT_MIN_TOKEN_LEN)
    }

    pub fn segment_rule_names(&self) -> Vec<String> {
        match self.segment_rules {
            Some(ref rules) => rules.clone(),
            None => segment_rules::DEFAULT.iter().map(|r| r.to_string()).collect(),
        }
    }

    pub fn output_format(&self) -> &str {
        self.output_format.as_deref().unwrap_or(output_formats::DEFAULT)
    }

    pub fn signature_builder(&self) -> Result<SignatureBuilder> {
        SignatureBuilder::from_rule_names(self.segment_rule_names().as_slice(), self.min_token_len())
    }

    pub fn grouper(&self) -> Result<Grouper> {
        Ok(Grouper::new(self.group_cap())
            .with_signatures(self.signature_builder()?)
            .with_distinct_query(self.distinct_query.unwrap_or(false)))
    }

    /// Build the pipeline described by this configuration
    pub fn pipeline(&self) -> Result<Pipeline> {
        let extensions = if self.keep_static.unwrap_or(false) {
            ExtensionSet::empty()
        } else {
            self.extension_set()
        };
        Ok(Pipeline::new(extensions, self.grouper()?))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.group_cap == Some(0) {
            return Err(UrlSiftError::Config(
                "Group cap cannot be 0. Expected a positive integer.".to_string(),
            ));
        }

        if self.min_token_len == Some(0) {
            return Err(UrlSiftError::Config(
                "Minimum token length cannot be 0. Expected a positive integer.".to_string(),
            ));
        }

        for name in self.segment_rule_names() {
            rule_from_name(&name, self.min_token_len())?;
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(UrlSiftError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Extension filter
    pub extensions: Option<Vec<String>>, // --ext
    pub no_default_extensions: bool,     // --no-default-extensions
    pub keep_static: bool,               // --keep-static

    // Grouping
    pub group_cap: Option<usize>,           // --cap
    pub segment_rules: Option<Vec<String>>, // --segment-rule
    pub min_token_len: Option<usize>,       // --min-token-len
    pub distinct_query: bool,               // --distinct-query

    // Output & format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format
    pub output_file: Option<String>,   // --output
    pub no_progress: bool,             // --no-progress

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.group_cap(), 3);
        assert_eq!(config.min_token_len(), 32);
        assert_eq!(config.output_format(), output_formats::DEFAULT);
        assert_eq!(config.extension_set(), ExtensionSet::defaults());
        assert_eq!(config.segment_rule_names(), vec!["numeric", "long-token"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_load_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(
            b"extensions = [\"pdf\", \"svg, woff2\"]\ngroup_cap = 5\nsegment_rules = [\"numeric\", \"hex\"]\ndistinct_query = true\n",
        )?;

        let config = Config::load_from_file(file.path())?;
        assert_eq!(config.group_cap(), 5);
        assert_eq!(config.distinct_query, Some(true));

        let set = config.extension_set();
        assert_eq!(set.len(), 9);
        assert!(set.contains(".woff2"));
        assert!(set.contains(".png"));

        Ok(())
    }

    #[test]
    fn test_config_missing_keys_are_none() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"verbose = true\n")?;

        let config = Config::load_from_file(file.path())?;
        assert_eq!(config.group_cap, None);
        assert_eq!(config.group_cap(), 3);
        assert_eq!(config.extension_set(), ExtensionSet::defaults());
        Ok(())
    }

    #[test]
    fn test_config_load_missing_file() {
        let err = Config::load_from_file("no-such-config.toml").unwrap_err();
        assert!(matches!(err, UrlSiftError::Config(_)));
        assert!(err.to_string().contains("no-such-config.toml"));
    }

    #[test]
    fn test_config_load_invalid_toml() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"group_cap = [")?;

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, UrlSiftError::TomlParsing { .. }));
        assert!(err.to_string().contains("Invalid TOML"));
        Ok(())
    }

    #[test]
    fn test_config_load_rejects_invalid_values() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"group_cap = 0\n")?;

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Group cap cannot be 0"));
        Ok(())
    }

    #[test]
    fn test_validate_rejects_zero_min_token_len() {
        let config = Config {
            min_token_len: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_rule() {
        let config = Config {
            segment_rules: Some(vec!["numeric".to_string(), "uuid".to_string()]),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("uuid"));
    }

    #[test]
    fn test_validate_rejects_unknown_format() {
        let config = Config {
            output_format: Some("xml".to_string()),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid output format 'xml'"));
    }

    #[test]
    fn test_validate_accepts_empty_rule_list() {
        let config = Config {
            segment_rules: Some(Vec::new()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_merge_with_cli() {
        let mut config = Config {
            extensions: Some(vec!["pdf".to_string()]),
            ..Default::default()
        };
        let cli_config = CliConfig {
            extensions: Some(vec!["svg".to_string()]),
            no_default_extensions: true,
            group_cap: Some(1),
            segment_rules: Some(vec!["hex".to_string()]),
            distinct_query: true,
            verbose: true,
            output_format: Some("json".to_string()),
            ..Default::default()
        };

        config.merge_with_cli(&cli_config);

        assert_eq!(
            config.extensions,
            Some(vec!["pdf".to_string(), "svg".to_string()])
        );
        assert_eq!(config.use_default_extensions, Some(false));
        assert_eq!(config.group_cap(), 1);
        assert_eq!(config.segment_rule_names(), vec!["hex"]);
        assert_eq!(config.distinct_query, Some(true));
        assert_eq!(config.verbose, Some(true));
        assert_eq!(config.output_format(), "json");

        let set = config.extension_set();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![".pdf", ".svg"]);
    }

    #[test]
    fn test_merge_with_empty_cli_keeps_file_values() {
        let mut config = Config {
            group_cap: Some(7),
            keep_static: Some(true),
            ..Default::default()
        };
        config.merge_with_cli(&CliConfig::default());
        assert_eq!(config.group_cap(), 7);
        assert_eq!(config.keep_static, Some(true));
    }

    #[test]
    fn test_pipeline_from_config() -> Result<()> {
        let config = Config {
            group_cap: Some(1),
            ..Default::default()
        };
        let output = config.pipeline()?.run(&[
            "http://x.com/a.css",
            "http://x.com/p/1",
            "http://x.com/p/2",
        ]);
        assert_eq!(output.urls, vec!["http://x.com/p/1"]);
        Ok(())
    }

    #[test]
    fn test_keep_static_skips_filter() -> Result<()> {
        let config = Config {
            keep_static: Some(true),
            ..Default::default()
        };
        let pipeline = config.pipeline()?;
        assert!(pipeline.extensions().is_empty());
        assert_eq!(pipeline.run(&["http://x.com/a.css"]).urls, vec!["http://x.com/a.css"]);
        Ok(())
    }

    #[test]
    fn test_standard_locations() {
        let locations = Config::standard_locations();
        assert_eq!(locations.len(), 4);
        assert_eq!(locations[0], PathBuf::from(".urlsift.toml"));
        assert_eq!(locations[3], PathBuf::from("../../../.urlsift.toml"));
    }

    #[test]
    fn test_load_first_of_reports_skipped_files() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let broken = dir.path().join("broken.toml");
        let valid = dir.path().join("valid.toml");
        fs::write(&broken, "group_cap = 0\n")?;
        fs::write(&valid, "group_cap = 7\n")?;

        let paths = vec![dir.path().join("missing.toml"), broken.clone(), valid];
        let (config, skipped) = Config::load_first_of(&paths);
        assert_eq!(config.group_cap(), 7);
        assert_eq!(skipped.len(), 1);
        assert!(skipped[0].contains("broken.toml"));
        assert!(skipped[0].contains("Group cap cannot be 0"));

        let (config, skipped) = Config::load_first_of(&[broken]);
        assert_eq!(config, Config::default());
        assert_eq!(skipped.len(), 1);
        Ok(())
    }
}
