use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "confguard",
    about = "ConfigGuard — compare YAML/INI configuration files for consistency",
    version,
)]
pub struct Cli {
    /// First config file (.ini/.yaml), the base of the comparison
    pub file1: PathBuf,

    /// Second config file (.ini/.yaml) to compare against
    pub file2: PathBuf,

    /// Report format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Also write the report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
