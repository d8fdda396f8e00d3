pub mod report;
pub mod writer;

pub use report::BundleReport;
pub use writer::BundleWriter;

/// Drops every line without at least one non-whitespace character.
/// Whitespace-only lines count as empty. Idempotent.
pub fn remove_empty_lines(content: &str) -> String {
    content
        .split('\n')
        .filter(|line| line.chars().any(|c| !c.is_whitespace()))
        .collect::<Vec<_>>()
        .join("\n")
}
