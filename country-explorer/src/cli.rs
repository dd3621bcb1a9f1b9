//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

/// Browse and search countries through the country service.
#[derive(Parser, Debug)]
#[command(name = "countries")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the country service
    #[arg(long, env = "COUNTRY_API_URL", default_value = "http://localhost:3001", global = true)]
    pub base_url: String,

    /// Print JSON instead of formatted output
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every country
    List,

    /// Show one country by alpha code
    Show(ShowArgs),

    /// List the countries of a region (exact, case-sensitive)
    Region(RegionArgs),

    /// Search with explicit filters
    Search(SearchArgs),

    /// Interactive search: each stdin line replaces the search input
    Browse,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Alpha-2 or alpha-3 country code
    pub code: String,

    /// Keep the local time ticking until interrupted
    #[arg(long)]
    pub live: bool,
}

#[derive(Args, Debug)]
pub struct RegionArgs {
    /// Region name, e.g. Europe
    pub region: String,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Substring of the common name (case-insensitive)
    #[arg(long)]
    pub name: Option<String>,

    /// Substring of the first capital (case-insensitive)
    #[arg(long)]
    pub capital: Option<String>,

    /// Exact region
    #[arg(long)]
    pub region: Option<String>,

    /// Exact timezone, e.g. UTC+05:30
    #[arg(long)]
    pub timezone: Option<String>,
}
