//! Command-line interface.
//!
//! Without a subcommand the interactive search screen starts; `search`
//! performs a single request and prints the page.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "moviesearch",
    version,
    about = "Search The Movie Database from your terminal"
)]
pub struct Cli {
    /// Path to config file (default: ~/.config/moviesearch/config.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Search immediately on startup
    #[arg(short, long, value_name = "TEXT")]
    pub query: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one search and print the results
    Search {
        /// Text to search for
        query: String,

        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Print the raw page as JSON
        #[arg(long)]
        json: bool,
    },
}
