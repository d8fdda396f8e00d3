/// Resolved language filter: either every file, or a single file
/// extension derived from a human-friendly language name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageFilter {
    All,
    Extension(String),
}

impl LanguageFilter {
    /// Maps a language name to its extension token. `all` is
    /// case-insensitive and bypasses extension filtering; unrecognized
    /// tokens are used as the extension, lowercased to match how
    /// scanned extensions are stored.
    pub fn parse(language: &str) -> Self {
        if language.eq_ignore_ascii_case("all") {
            return LanguageFilter::All;
        }

        let extension = match language {
            "csharp" => "cs",
            "cpp" => "cpp",
            "html" => "html",
            // Alias kept as shipped, misspelling included.
            "asembler" => "asn",
            "sql" => "sql",
            "css" => "css",
            "javascript" => "js",
            other => return LanguageFilter::Extension(other.to_lowercase()),
        };

        LanguageFilter::Extension(extension.to_string())
    }

    pub fn matches_extension(&self, extension: &str) -> bool {
        match self {
            LanguageFilter::All => true,
            LanguageFilter::Extension(wanted) => wanted == extension,
        }
    }

    /// Label used in notices and reports.
    pub fn describe(&self) -> String {
        match self {
            LanguageFilter::All => "all".to_string(),
            LanguageFilter::Extension(ext) => format!("*.{}", ext),
        }
    }
}
