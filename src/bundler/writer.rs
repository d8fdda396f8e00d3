use crate::bundler::remove_empty_lines;
use crate::config::BundleRequest;
use crate::error::{BundleError, Result};
use crate::scanner::SourceFile;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes one bundle file from an ordered selection.
pub struct BundleWriter {
    include_note: bool,
    remove_empty_lines: bool,
    author: Option<String>,
}

impl BundleWriter {
    pub fn from_request(request: &BundleRequest) -> Self {
        Self {
            include_note: request.include_note,
            remove_empty_lines: request.remove_empty_lines,
            author: request.effective_author().map(str::to_string),
        }
    }

    /// The existence check runs before any source file is read, so a
    /// pre-existing target aborts with no side effects at all.
    pub fn check_output_path(&self, output: &Path) -> Result<()> {
        if output.exists() {
            return Err(BundleError::OutputExists {
                path: output.display().to_string(),
            });
        }
        Ok(())
    }

    pub fn write_bundle(
        &self,
        files: &[SourceFile],
        output: &Path,
        progress_callback: Option<&dyn Fn(&SourceFile)>,
    ) -> Result<u64> {
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(output)
            .map_err(|e| Self::map_create_error(e, output))?;
        let mut writer = BufWriter::new(file);
        let mut bytes_written: u64 = 0;

        if self.include_note {
            bytes_written += write_counted(&mut writer, &self.provenance_note())?;
        }

        if let Some(ref author) = self.author {
            bytes_written += write_counted(&mut writer, &format!("// Author: {}\n\n", author))?;
        }

        for source in files {
            if let Some(callback) = progress_callback {
                callback(source);
            }

            // Failures here propagate; a partial bundle is accepted
            // behavior rather than cleaned up.
            let mut content = fs::read_to_string(&source.source_path)?;
            if self.remove_empty_lines {
                content = remove_empty_lines(&content);
            }

            bytes_written +=
                write_counted(&mut writer, &format!("// File: {}\n", source.display_path()))?;
            bytes_written += write_counted(&mut writer, &content)?;
            if !content.ends_with('\n') {
                bytes_written += write_counted(&mut writer, "\n")?;
            }
            bytes_written += write_counted(&mut writer, "\n")?;
        }

        writer.flush()?;
        Ok(bytes_written)
    }

    /// Two comment lines locating the running executable, then a
    /// blank separator.
    fn provenance_note(&self) -> String {
        let exe = std::env::current_exe()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        format!("// Source code reference: \n// File: {}\n\n", exe)
    }

    fn map_create_error(error: std::io::Error, output: &Path) -> BundleError {
        match error.kind() {
            std::io::ErrorKind::NotFound => BundleError::InvalidOutputDirectory {
                path: output.display().to_string(),
            },
            std::io::ErrorKind::AlreadyExists => BundleError::OutputExists {
                path: output.display().to_string(),
            },
            _ => BundleError::Io(error),
        }
    }
}

fn write_counted<W: Write>(writer: &mut W, text: &str) -> Result<u64> {
    writer.write_all(text.as_bytes())?;
    Ok(text.len() as u64)
}
