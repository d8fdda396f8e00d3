use crate::config::FilterConfig;
use crate::scanner::LanguageFilter;
use regex::Regex;
use std::path::Path;

pub struct FileFilter {
    language: LanguageFilter,
    exclude_dirs: Vec<String>,
    exclude_patterns: Vec<Regex>,
}

impl FileFilter {
    pub fn new(language: LanguageFilter, config: &FilterConfig) -> Self {
        let exclude_patterns = config
            .exclude_patterns
            .iter()
            .filter_map(|pattern| Regex::new(pattern).ok())
            .collect();

        Self {
            language,
            exclude_dirs: config.exclude_dirs.clone(),
            exclude_patterns,
        }
    }

    pub fn is_selected(&self, path: &Path) -> bool {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        if !self.language.matches_extension(&extension) {
            return false;
        }

        !self.matches_any_pattern(&path.to_string_lossy())
    }

    /// Exclusion compares whole path segments, so a file named
    /// `bindings.cs` survives a `bin` exclusion.
    pub fn should_traverse_directory(&self, path: &Path) -> bool {
        if let Some(dir_name) = path.file_name().and_then(|s| s.to_str()) {
            if self.exclude_dirs.iter().any(|exclude| exclude == dir_name) {
                return false;
            }

            let path_str = path.to_string_lossy();
            for pattern in &self.exclude_patterns {
                if pattern.is_match(&path_str) {
                    return false;
                }
            }
        }

        true
    }

    pub fn matches_any_pattern(&self, text: &str) -> bool {
        self.exclude_patterns
            .iter()
            .any(|pattern| pattern.is_match(text))
    }

    pub fn language(&self) -> &LanguageFilter {
        &self.language
    }

    pub fn exclude_dirs(&self) -> &[String] {
        &self.exclude_dirs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> FilterConfig {
        FilterConfig {
            exclude_dirs: vec!["bin".to_string(), "debug".to_string()],
            exclude_patterns: vec![r".*\.min\..*".to_string()],
            max_depth: 10,
        }
    }

    #[test]
    fn test_extension_selection() {
        let config = create_test_config();
        let filter = FileFilter::new(LanguageFilter::parse("csharp"), &config);

        assert!(filter.is_selected(Path::new("src/Program.cs")));
        assert!(!filter.is_selected(Path::new("src/app.js")));
        assert!(!filter.is_selected(Path::new("README")));
    }

    #[test]
    fn test_all_selects_everything() {
        let config = create_test_config();
        let filter = FileFilter::new(LanguageFilter::All, &config);

        assert!(filter.is_selected(Path::new("src/Program.cs")));
        assert!(filter.is_selected(Path::new("src/app.js")));
        assert!(filter.is_selected(Path::new("README")));
    }

    #[test]
    fn test_excluded_directory_segments() {
        let config = create_test_config();
        let filter = FileFilter::new(LanguageFilter::All, &config);

        assert!(!filter.should_traverse_directory(Path::new("project/bin")));
        assert!(!filter.should_traverse_directory(Path::new("project/debug")));
        assert!(filter.should_traverse_directory(Path::new("project/src")));
    }

    #[test]
    fn test_segment_exclusion_does_not_match_substrings() {
        let config = create_test_config();
        let filter = FileFilter::new(LanguageFilter::All, &config);

        // "bindings" contains "bin" but is a different segment name.
        assert!(filter.should_traverse_directory(Path::new("project/bindings")));
        assert!(filter.should_traverse_directory(Path::new("project/debugger")));
        assert!(filter.is_selected(Path::new("src/bindings.cs")));
    }

    #[test]
    fn test_pattern_exclusion() {
        let config = create_test_config();
        let filter = FileFilter::new(LanguageFilter::All, &config);

        assert!(!filter.is_selected(Path::new("dist/app.min.js")));
        assert!(filter.is_selected(Path::new("dist/app.js")));
    }

    #[test]
    fn test_case_insensitive_extension_match() {
        let config = create_test_config();
        let filter = FileFilter::new(LanguageFilter::parse("csharp"), &config);

        assert!(filter.is_selected(Path::new("src/Program.CS")));
    }
}
