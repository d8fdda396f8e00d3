use crate::config::{BundleRequest, Config, SortMode};
use crate::error::{BundleError, Result};
use crate::scanner::LanguageFilter;
use crate::ui::OutputMode;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "codebundle")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Bundle source files from a directory tree into a single file")]
#[command(
    long_about = "CodeBundle walks the working directory, selects source files by \
                  language, and concatenates them into one annotated output file."
)]
#[command(after_help = "EXAMPLES:\n  \
    codebundle bundle -o bundle.cs -l csharp\n  \
    codebundle bundle -o all.txt -l all --note --author \"Jo\"\n  \
    codebundle bundle -o sorted.js -l javascript -s type -r\n  \
    codebundle create-rsp")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format for messages and the final report
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bundle code files to a single file
    Bundle(BundleArgs),
    /// Generate a response file with the bundle options
    CreateRsp,
}

#[derive(Args, Debug)]
pub struct BundleArgs {
    /// File path and name of the bundle to create
    #[arg(short, long)]
    pub output: PathBuf,

    /// Programming language to include; use "all" for every file
    #[arg(short, long, default_value = "all")]
    pub language: String,

    /// Include a source code reference comment in the bundle
    #[arg(short, long)]
    pub note: bool,

    /// Sort code files by 'name' or 'type' before bundling
    #[arg(short, long, value_enum, default_value_t = SortArg::Name)]
    pub sort: SortArg,

    /// Remove empty lines from code files before bundling
    #[arg(short, long)]
    pub remove_empty_lines: bool,

    /// Author name to include in the bundle file header
    #[arg(short, long)]
    pub author: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    /// Filename ascending
    Name,
    /// Extension first, then filename
    Type,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => SortMode::Name,
            SortArg::Type => SortMode::Type,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl From<OutputFormat> for OutputMode {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        }
    }
}

impl BundleArgs {
    pub fn load_config(&self) -> Result<Config> {
        let config = Config::load_with_defaults(self.config.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    /// Builds the immutable request for this run. The CLI author wins
    /// over the config-file default; the scan root is the working
    /// directory.
    pub fn to_request(&self, config: &Config) -> Result<BundleRequest> {
        let root = std::env::current_dir().map_err(|e| BundleError::Config {
            message: format!("Cannot determine working directory: {}", e),
        })?;

        let author = self
            .author
            .clone()
            .or_else(|| config.output.author.clone());

        Ok(BundleRequest {
            output: self.output.clone(),
            language: LanguageFilter::parse(&self.language),
            include_note: self.note,
            sort: self.sort.into(),
            remove_empty_lines: self.remove_empty_lines,
            author,
            root,
        })
    }
}
