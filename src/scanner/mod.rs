pub mod file_filter;
pub mod language;
pub mod source_scanner;

pub use file_filter::FileFilter;
pub use language::LanguageFilter;
pub use source_scanner::{sort_files, SourceFile, SourceScanner};
