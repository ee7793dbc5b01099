use std::path::PathBuf;

use clap::Parser;

/// Palaver — a terminal chat client for a single backend chat endpoint.
#[derive(Parser, Debug)]
#[command(name = "palaver", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Backend base URL; wins over the config file and PALAVER_API_URL.
    #[arg(long)]
    pub api_url: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
