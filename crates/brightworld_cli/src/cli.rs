use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "bw", version, about = "Browse the Bright World news API", long_about = None)]
pub struct Cli {
    /// API base URL; overrides the config file and BRIGHTWORLD_API_BASE.
    #[arg(long, global = true)]
    pub base_url: Option<String>,
    /// Path to a RON config file (defaults to ./brightworld.ron when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// One of off, error, warn, info, debug, trace.
    #[arg(long, global = true, default_value = "warn", value_parser = parse_level)]
    pub log_level: LevelFilter,
    /// Also write logs to ./brightworld.log.
    #[arg(long, global = true)]
    pub log_file: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List articles, newest first.
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        region: Option<String>,
        /// Minimum hopefulness score between 0 and 1.
        #[arg(long)]
        min_score: Option<f64>,
        /// Number of pages to load.
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Show a single article.
    Show { id: i64 },
    /// List categories with article counts.
    Categories,
    /// List regions with article counts.
    Regions,
    /// Show today's and overall article counts.
    Stats,
    /// Ask the server to ingest new articles from its sources.
    Ingest,
    /// Check that the API is reachable.
    Health,
}

fn parse_level(value: &str) -> Result<LevelFilter, String> {
    value
        .parse()
        .map_err(|_| format!("unknown log level {value:?}"))
}
