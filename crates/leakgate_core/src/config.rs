//! User configuration loaded from `.leakgate.toml`.

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;

use leakgate_rules::{Category, Severity};

use crate::error::RuleError;
use crate::rule::{Rule, RuleSet};

/// Project-level configuration loaded from `.leakgate.toml`.
///
/// Controls history depth, file-size limits, exclusions, rule selection,
/// custom rules, and extra sensitive filename patterns. All fields are
/// optional and default to scanning everything with the builtin rules.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Maximum file size in bytes. Larger tracked files are skipped with
    /// an informational finding.
    #[serde(default)]
    pub max_file_size: Option<u64>,

    /// Maximum number of commits walked by the history probe.
    #[serde(default)]
    pub max_history_commits: Option<usize>,

    /// Glob patterns for file paths to exclude from content scanning.
    #[serde(default)]
    pub exclude_paths: Vec<String>,

    /// Builtin rule IDs to disable (e.g. `"content-pii/jp-phone"`).
    #[serde(default)]
    pub disabled_rules: Vec<String>,

    /// User-defined detection rules.
    #[serde(default)]
    pub rules: Vec<CustomRule>,

    /// Additional filename globs treated as sensitive by the history probe.
    #[serde(default)]
    pub extra_sensitive_files: Vec<String>,
}

/// A user-defined detection rule declared in `.leakgate.toml`.
///
/// Custom rules are compiled at startup and participate in content and
/// history scanning alongside the builtin rules.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomRule {
    /// Unique identifier, conventionally prefixed with `"custom/"`.
    pub id: String,
    /// Human-readable name shown in summaries.
    pub name: String,
    /// Regular expression used to match leaking text.
    pub regex: String,
    /// Severity assigned to findings from this rule.
    pub severity: Severity,
    /// Category assigned to findings. Defaults to `content-secret`.
    #[serde(default = "default_custom_category")]
    pub category: Category,
    /// Optional longer description. Falls back to `name` if absent.
    #[serde(default)]
    pub description: Option<String>,
    /// Aho-Corasick pre-filter keywords. If non-empty, the rule is only
    /// tested against content that contains at least one keyword.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Optional remediation text shown in verbose reports.
    #[serde(default)]
    pub remediation: Option<String>,
}

const fn default_custom_category() -> Category {
    Category::ContentSecret
}

impl CustomRule {
    /// Compiles this definition into a [`Rule`] ready for matching.
    ///
    /// Returns `RuleError::InvalidRegex` if the regex is malformed.
    pub fn compile(&self) -> Result<Rule, RuleError> {
        let regex = Regex::new(&self.regex).map_err(|source| RuleError::InvalidRegex {
            id: self.id.clone(),
            source,
        })?;

        Ok(Rule {
            id: self.id.as_str().into(),
            category: self.category,
            name: self.name.as_str().into(),
            description: self
                .description
                .as_deref()
                .unwrap_or(self.name.as_str())
                .into(),
            severity: self.severity,
            regex,
            keywords: self.keywords.iter().map(|s| s.as_str().into()).collect(),
            suppress: None,
            remediation: self
                .remediation
                .as_deref()
                .unwrap_or(self.category.remediation())
                .into(),
        })
    }
}

impl Config {
    /// Creates a default configuration with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a `.leakgate.toml` file.
    ///
    /// Returns the default configuration if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = read_file(path)?;
        parse_toml(path, &content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })
    }

    /// Builds the rule set this configuration selects: every builtin rule
    /// not listed in `disabled_rules`, plus all compiled custom rules.
    pub fn build_rules(&self) -> Result<RuleSet, RuleError> {
        let mut rules = leakgate_rules::builtin_rules()
            .filter(|def| !self.disabled_rules.iter().any(|id| id == def.id))
            .map(Rule::from_def)
            .collect::<Result<Vec<_>, _>>()?;

        for custom in &self.rules {
            rules.push(custom.compile()?);
        }

        Ok(RuleSet::new(rules))
    }
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_toml(path: &Path, content: &str) -> Result<Config, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Errors that can occur when reading or parsing a `.leakgate.toml`
/// configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read from disk.
    #[error("failed to read config '{}': {source}", path.display())]
    Read {
        /// Path to the config file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file contained invalid TOML or unexpected values.
    #[error("failed to parse config '{}': {source}", path.display())]
    Parse {
        /// Path to the config file that could not be parsed.
        path: PathBuf,
        /// The underlying TOML deserialization error.
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Returns the file path associated with this error.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}
