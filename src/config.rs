use crate::error::{BundleError, Result};
use crate::scanner::LanguageFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings loadable from an optional `codebundle.toml`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub filters: FilterConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilterConfig {
    /// Directory names skipped during traversal, compared per path
    /// segment (a file named `bindings.cs` is not excluded by `bin`).
    pub exclude_dirs: Vec<String>,
    /// Regex patterns matched against the full path string.
    pub exclude_patterns: Vec<String>,
    pub max_depth: usize,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Default author line, overridden by --author.
    pub author: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filters: FilterConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            exclude_dirs: vec!["bin".to_string(), "debug".to_string()],
            exclude_patterns: vec![],
            max_depth: 32,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(BundleError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| BundleError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| BundleError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_paths = ["codebundle.toml", ".codebundle.toml"];

                for default_path in &default_paths {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.filters.max_depth == 0 {
            return Err(BundleError::Config {
                message: "Maximum directory depth must be greater than 0".to_string(),
            });
        }

        for pattern in &self.filters.exclude_patterns {
            if regex::Regex::new(pattern).is_err() {
                return Err(BundleError::Config {
                    message: format!("Invalid exclude pattern: {}", pattern),
                });
            }
        }

        Ok(())
    }
}

/// Sort order applied to the file selection before writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Filename ascending.
    #[default]
    Name,
    /// Extension ascending, then filename.
    Type,
}

/// The validated inputs for one bundling run. Built once from the CLI
/// and config file, then consumed by the bundler.
#[derive(Debug, Clone)]
pub struct BundleRequest {
    pub output: PathBuf,
    pub language: LanguageFilter,
    pub include_note: bool,
    pub sort: SortMode,
    pub remove_empty_lines: bool,
    pub author: Option<String>,
    pub root: PathBuf,
}

impl BundleRequest {
    /// Author line content, if one should be written. Blank or
    /// whitespace-only values are treated as absent.
    pub fn effective_author(&self) -> Option<&str> {
        self.author
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.filters.exclude_dirs, vec!["bin", "debug"]);
        assert!(config.filters.exclude_patterns.is_empty());
        assert!(config.output.author.is_none());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.filters.max_depth = 0;
        assert!(config.validate().is_err());

        config.filters.max_depth = 10;
        config.filters.exclude_patterns = vec!["[unclosed".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_file_loading() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            "[filters]\nexclude_dirs = [\"bin\", \"obj\"]\nexclude_patterns = []\nmax_depth = 5\n\n[output]\nauthor = \"Jo\""
        )
        .unwrap();

        let config = Config::load_from_file(temp_file.path()).unwrap();
        assert_eq!(config.filters.exclude_dirs, vec!["bin", "obj"]);
        assert_eq!(config.filters.max_depth, 5);
        assert_eq!(config.output.author.as_deref(), Some("Jo"));
    }

    #[test]
    fn test_missing_config_file() {
        let result = Config::load_from_file("definitely-not-here.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[output]\nauthor = \"Sam\"").unwrap();

        let config = Config::load_from_file(temp_file.path()).unwrap();
        assert_eq!(config.filters.exclude_dirs, vec!["bin", "debug"]);
        assert_eq!(config.output.author.as_deref(), Some("Sam"));
    }

    #[test]
    fn test_effective_author_trims_blank_values() {
        let mut request = BundleRequest {
            output: PathBuf::from("out.txt"),
            language: LanguageFilter::All,
            include_note: false,
            sort: SortMode::Name,
            remove_empty_lines: false,
            author: Some("  ".to_string()),
            root: PathBuf::from("."),
        };
        assert!(request.effective_author().is_none());

        request.author = Some("  Jo  ".to_string());
        assert_eq!(request.effective_author(), Some("Jo"));

        request.author = None;
        assert!(request.effective_author().is_none());
    }
}
