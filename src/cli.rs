use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// Treeline - print a directory as an indented, color-cycled tree
#[derive(Parser, Debug)]
#[command(name = "treeline")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to print
    #[arg(default_value = ".", value_name = "PATH")]
    pub path: PathBuf,

    /// Show hidden files and directories
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
