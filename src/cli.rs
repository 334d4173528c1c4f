use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::github::API_BASE_URL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartFormat {
    /// SVG files written to the output directory
    Svg,
    /// Text bar charts printed to the console
    Terminal,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "repo-stats")]
#[command(about = "Reports star and language statistics for a GitHub user's public repositories")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub username (prompted for when omitted)
    pub username: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = API_BASE_URL)]
    pub api_url: String,

    /// Directory for the CSV export and chart files
    #[arg(long, env = "REPO_STATS_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Save the CSV export without asking
    #[arg(long)]
    pub export: bool,

    /// Render the charts without asking
    #[arg(long)]
    pub charts: bool,

    /// Answer "no" to every prompt not already answered by a flag
    #[arg(long)]
    pub non_interactive: bool,

    /// How charts are rendered
    #[arg(long, value_enum, default_value_t = ChartFormat::Svg)]
    pub chart_format: ChartFormat,
}
