pub mod bundler;
pub mod cli;
pub mod config;
pub mod error;
pub mod response;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use bundler::{remove_empty_lines, BundleReport, BundleWriter};
pub use cli::{BundleArgs, Cli, Command, OutputFormat, SortArg};
pub use config::{BundleRequest, Config, FilterConfig, OutputConfig, SortMode};
pub use error::{BundleError, Result, UserFriendlyError};
pub use scanner::{sort_files, LanguageFilter, SourceFile, SourceScanner};
pub use ui::{OutputFormatter, OutputMode, ProgressManager};

use std::time::Instant;

/// Main library interface: one instance drives one bundling run.
pub struct CodeBundle {
    config: Config,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
}

impl CodeBundle {
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let show_progress = !quiet && output_mode == OutputMode::Human;
        Self {
            config,
            output_formatter: OutputFormatter::new(output_mode, verbose, quiet),
            progress_manager: ProgressManager::new(show_progress),
        }
    }

    /// Runs one bundle: select, sort, write, report.
    ///
    /// The output existence check runs before any source file is read,
    /// so a pre-existing target causes no side effects.
    pub fn bundle(&self, request: &BundleRequest) -> Result<BundleReport> {
        let start_time = Instant::now();

        let writer = BundleWriter::from_request(request);

        // One resolved path for the existence check, the scanner's
        // self-exclusion, and the write, so they cannot disagree when
        // the root is not the working directory.
        let output_path = if request.output.is_absolute() {
            request.output.clone()
        } else {
            request.root.join(&request.output)
        };

        writer.check_output_path(&output_path)?;

        if request.author.is_some() && request.effective_author().is_none() {
            self.output_formatter.warning("Blank author value ignored");
        }

        self.output_formatter.start_operation("Scanning source files");

        let scanner = SourceScanner::new(request.language.clone(), &self.config.filters)
            .with_skip_path(output_path.clone());
        let mut files = scanner.scan_directory(&request.root)?;

        self.output_formatter
            .info(&format!("Found {} files to bundle", files.len()));
        let selection: Vec<String> = files.iter().map(|f| f.display_path()).collect();
        self.output_formatter
            .debug(&format!("Selection: {}", selection.join(", ")));

        sort_files(&mut files, request.sort);

        let progress = self
            .progress_manager
            .create_file_progress(files.len() as u64);
        let progress_callback = |file: &SourceFile| {
            progress.set_message(file.display_path());
            progress.inc(1);
        };

        let bytes_written =
            writer.write_bundle(&files, &output_path, Some(&progress_callback))?;

        ui::progress::finish_progress_with_summary(
            &progress,
            &format!("Bundled {} files", files.len()),
            start_time.elapsed(),
        );

        if request.include_note {
            self.output_formatter
                .info("Source code reference added to the bundle");
        }

        Ok(BundleReport::new(
            output_path,
            files.len(),
            bytes_written,
            request.language.describe(),
            start_time.elapsed(),
        ))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    pub fn handle_error(&self, error: &BundleError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn request_for(root: &TempDir, output: &str, language: &str) -> BundleRequest {
        BundleRequest {
            output: root.path().join(output),
            language: LanguageFilter::parse(language),
            include_note: false,
            sort: SortMode::Name,
            remove_empty_lines: false,
            author: None,
            root: root.path().to_path_buf(),
        }
    }

    fn app() -> CodeBundle {
        CodeBundle::new(Config::default(), OutputMode::Plain, 0, true)
    }

    #[test]
    fn test_bundle_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.cs"), "int x=1;\n").unwrap();
        fs::write(temp_dir.path().join("b.cs"), "// hi\n").unwrap();

        let request = request_for(&temp_dir, "out.bundle", "csharp");
        let report = app().bundle(&request).unwrap();

        assert_eq!(report.files_bundled, 2);
        assert!(request.output.exists());

        let bundled = fs::read_to_string(&request.output).unwrap();
        assert!(bundled.contains("// File: a.cs"));
        assert!(bundled.contains("// File: b.cs"));
        assert!(bundled.contains("int x=1;"));
    }

    #[test]
    fn test_bundle_sorted_before_writing() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("zz.cs"), "z\n").unwrap();
        fs::write(temp_dir.path().join("aa.js"), "a\n").unwrap();

        let mut request = request_for(&temp_dir, "out.bundle", "all");
        request.sort = SortMode::Type;
        app().bundle(&request).unwrap();

        let bundled = fs::read_to_string(&request.output).unwrap();
        let cs_pos = bundled.find("// File: zz.cs").unwrap();
        let js_pos = bundled.find("// File: aa.js").unwrap();
        assert!(cs_pos < js_pos, "cs extension sorts before js");
    }

    #[test]
    fn test_existing_output_performs_zero_writes() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.cs"), "x\n").unwrap();
        let output = temp_dir.path().join("out.bundle");
        fs::write(&output, "keep me").unwrap();

        let request = request_for(&temp_dir, "out.bundle", "csharp");
        let result = app().bundle(&request);

        assert!(matches!(result, Err(BundleError::OutputExists { .. })));
        assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");
    }

    #[test]
    fn test_empty_selection_performs_zero_writes() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.js"), "x\n").unwrap();

        let request = request_for(&temp_dir, "out.bundle", "csharp");
        let result = app().bundle(&request);

        assert!(matches!(result, Err(BundleError::NoFilesMatched { .. })));
        assert!(!request.output.exists());
    }

    #[test]
    fn test_output_file_not_bundled_into_itself() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.cs"), "x\n").unwrap();

        // Output carries the filtered extension but must not appear
        // in the selection.
        let request = request_for(&temp_dir, "out.cs", "csharp");
        let report = app().bundle(&request).unwrap();
        assert_eq!(report.files_bundled, 1);
    }

    #[test]
    fn test_relative_output_resolves_against_root() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.cs"), "x\n").unwrap();

        // Library callers may pass a root that is not the process cwd.
        let mut request = request_for(&temp_dir, "out.bundle", "csharp");
        request.output = PathBuf::from("out.bundle");
        let report = app().bundle(&request).unwrap();

        assert!(temp_dir.path().join("out.bundle").exists());
        assert_eq!(report.output_path, temp_dir.path().join("out.bundle"));
    }

    #[test]
    fn test_relative_output_existence_checked_against_root() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.cs"), "x\n").unwrap();
        fs::write(temp_dir.path().join("out.bundle"), "keep me").unwrap();

        let mut request = request_for(&temp_dir, "out.bundle", "csharp");
        request.output = PathBuf::from("out.bundle");
        let result = app().bundle(&request);

        assert!(matches!(result, Err(BundleError::OutputExists { .. })));
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("out.bundle")).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn test_report_fields() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.rb"), "puts 1\n").unwrap();

        let request = request_for(&temp_dir, "out.bundle", "ruby");
        let report = app().bundle(&request).unwrap();

        assert_eq!(report.files_bundled, 1);
        assert_eq!(report.language_filter, "*.ruby");
        assert_eq!(report.output_path, request.output);
        assert!(report.bytes_written > 0);
    }
}
