pub mod map;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "dirmap")]
#[command(about = "Packages a directory tree into a single LLM-ready document.")]
pub struct CommandLine {
    /// Directory to map
    pub root: PathBuf,

    /// Write the combined Markdown report to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Extra ignore pattern, exact basename or '*' glob (repeatable)
    #[arg(short, long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Start from an empty ignore list instead of the built-in one
    #[arg(long)]
    pub no_default_ignores: bool,

    /// Skip the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Less console output (-q for status only, -qq for errors only)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
