use std::path::PathBuf;

use clap::Parser;

use crate::config::FeedMode;

#[derive(Debug, Parser)]
#[command(
    name = "newsreel",
    version,
    about = "Search and page through news headlines in the terminal"
)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/newsreel/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Where filtering and pagination happen (overrides feed.mode)
    #[arg(long, value_enum)]
    pub mode: Option<FeedMode>,

    /// Initial search query
    #[arg(long, short)]
    pub query: Option<String>,

    /// Initial page, starting at 1
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Fetch once, print the page to stdout and exit
    #[arg(long)]
    pub print: bool,
}
