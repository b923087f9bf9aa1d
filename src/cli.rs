use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::analysis::ToneId;
use crate::clipboard::CopySection;
use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "text-analyzer")]
#[command(about = "Extract morals, keywords, and tone from text", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to <config dir>/text-analyzer/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze text and optionally transform its tone
    Analyze(AnalyzeArgs),

    /// List the available target tones
    Tones,
}

#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Text to analyze (read from --file or stdin when omitted)
    pub text: Option<String>,

    /// Target tone for the transformed text
    #[arg(short, long, value_enum)]
    pub tone: Option<ToneId>,

    /// Read the text from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long)]
    pub api_base: Option<String>,

    /// Override the maximum text length
    #[arg(long)]
    pub max_length: Option<usize>,

    /// Give up after this many seconds (0 waits forever)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the raw result as JSON
    #[arg(long)]
    pub json: bool,

    /// Copy a section of the result to the clipboard
    #[arg(long, value_enum)]
    pub copy: Option<CopySection>,
}

impl AnalyzeArgs {
    /// Apply command-line overrides on top of file configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(base) = &self.api_base {
            config.api.base_url = base.clone();
        }
        if let Some(max) = self.max_length {
            config.input.max_text_length = max;
        }
        if let Some(secs) = self.timeout {
            config.api.timeout_seconds = secs;
        }
    }
}
