use crate::config::{FilterConfig, SortMode};
use crate::error::{BundleError, Result};
use crate::scanner::file_filter::FileFilter;
use crate::scanner::LanguageFilter;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// One file selected for bundling.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub source_path: PathBuf,
    pub relative_path: PathBuf,
    pub filename: String,
    pub extension: String,
    pub size: u64,
}

impl SourceFile {
    pub fn new(source_path: PathBuf, relative_path: PathBuf, size: u64) -> Self {
        let filename = source_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();

        let extension = source_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        Self {
            source_path,
            relative_path,
            filename,
            extension,
            size,
        }
    }

    pub fn display_path(&self) -> String {
        self.relative_path.display().to_string()
    }
}

pub struct SourceScanner {
    filter: FileFilter,
    max_depth: usize,
    skip_path: Option<PathBuf>,
}

impl SourceScanner {
    pub fn new(language: LanguageFilter, config: &FilterConfig) -> Self {
        Self {
            filter: FileFilter::new(language, config),
            max_depth: config.max_depth,
            skip_path: None,
        }
    }

    /// Excludes one absolute path from the selection. Used for the
    /// output file when it lies under the scan root.
    pub fn with_skip_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.skip_path = Some(path.into());
        self
    }

    pub fn scan_directory<P: AsRef<Path>>(&self, root: P) -> Result<Vec<SourceFile>> {
        let root_path = root.as_ref();

        if !root_path.is_dir() {
            return Err(BundleError::InvalidPath {
                path: root_path.display().to_string(),
            });
        }

        let mut files = Vec::new();

        let walker = WalkDir::new(root_path)
            .max_depth(self.max_depth)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| self.should_traverse(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // Unreadable entries are skipped; the selection is
                // best-effort and failures surface at read time.
                Err(_) => continue,
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if !self.filter.is_selected(path) {
                continue;
            }

            if let Some(ref skip) = self.skip_path {
                if path == skip {
                    continue;
                }
            }

            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            let relative_path = self.calculate_relative_path(path, root_path)?;

            files.push(SourceFile::new(path.to_path_buf(), relative_path, size));
        }

        if files.is_empty() {
            return Err(BundleError::NoFilesMatched {
                filter: self.filter.language().describe(),
            });
        }

        Ok(files)
    }

    fn should_traverse(&self, entry: &DirEntry) -> bool {
        if entry.file_type().is_file() {
            return true;
        }

        // The root itself is always entered.
        if entry.depth() == 0 {
            return true;
        }

        if entry.file_type().is_dir() {
            return self.filter.should_traverse_directory(entry.path());
        }

        true
    }

    fn calculate_relative_path(&self, file_path: &Path, root_path: &Path) -> Result<PathBuf> {
        let relative = file_path
            .strip_prefix(root_path)
            .map_err(|_| BundleError::InvalidPath {
                path: file_path.display().to_string(),
            })?;

        Ok(relative.to_path_buf())
    }
}

/// Orders the selection before the write loop runs.
pub fn sort_files(files: &mut [SourceFile], mode: SortMode) {
    match mode {
        SortMode::Name => files.sort_by(|a, b| a.filename.cmp(&b.filename)),
        SortMode::Type => files.sort_by(|a, b| {
            a.extension
                .cmp(&b.extension)
                .then_with(|| a.filename.cmp(&b.filename))
        }),
    }
}
