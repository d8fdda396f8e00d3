use crate::error::{BundleError, Result};
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

/// Fixed response file name, overwritten unconditionally.
pub const RESPONSE_FILE_NAME: &str = "response.rsp";

/// Prompts for each bundle option on the given streams and writes the
/// collected flag string to `response.rsp` in the working directory.
pub fn create_response_file<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    create_response_file_at(input, output, Path::new(RESPONSE_FILE_NAME))
}

pub fn create_response_file_at<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    path: &Path,
) -> Result<()> {
    let language = prompt(input, output, "Enter value for language: ")?;
    let output_value = prompt(input, output, "Enter value for output: ")?;
    let note = prompt_bool(input, output, "note")?;
    let sort = prompt(input, output, "Enter value for sort: ")?;
    let remove_empty_lines = prompt_bool(input, output, "remove-empty-lines")?;
    let author = prompt(input, output, "Enter value for author: ")?;

    let content = format!(
        "--language {} --output {} --note {} --sort {} --remove-empty-lines {} --author {}",
        language, output_value, note, sort, remove_empty_lines, author
    );

    fs::write(path, content)?;
    writeln!(
        output,
        "Response file '{}' created successfully.",
        path.display()
    )?;

    Ok(())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    // EOF must abort instead of feeding "" to a validation loop.
    if input.read_line(&mut line)? == 0 {
        return Err(BundleError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "input ended before all values were provided",
        )));
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

/// Re-prompts until the answer is exactly "true" or "false",
/// case-sensitive. Each field validates its own value.
fn prompt_bool<R: BufRead, W: Write>(input: &mut R, output: &mut W, field: &str) -> Result<bool> {
    let mut value = prompt(input, output, &format!("Enter value for {} (true/false): ", field))?;
    while value != "true" && value != "false" {
        value = prompt(
            input,
            output,
            &format!("Enter again value for {} (true/false): ", field),
        )?;
    }
    Ok(value == "true")
}
