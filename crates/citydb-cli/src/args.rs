use citydb_core::paginate::{DEFAULT_LIMIT, PAGE_SIZES};
use citydb_core::{CityField, SortCriterion};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for citydb-cli
#[derive(Debug, Parser)]
#[command(
    name = "citydb",
    version,
    about = "CLI for searching, sorting and paging the citydb-core world cities store"
)]
pub struct CliArgs {
    /// Dataset to load: .json, .json.gz, or a .bin/.bin.gz snapshot
    /// (default: the bundled worldcities.json)
    #[arg(short = 'i', long = "input", env = "CITYDB_DATA", global = true)]
    pub input: Option<PathBuf>,

    /// Do not read or write the snapshot cache next to a JSON dataset
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// Look up a city by id
    City {
        /// Numeric city id (e.g. 1392685764)
        id: u64,
    },

    /// Filter, sort and paginate by raw offset/limit
    Query {
        #[command(flatten)]
        filter: FilterArgs,

        /// Index of the first record to return (negative values count as 0)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,

        /// Maximum number of records to return (negative values count as 0)
        #[arg(long, default_value_t = DEFAULT_LIMIT as i64, allow_negative_numbers = true)]
        limit: i64,
    },

    /// Show one page of results together with the pager state
    Page {
        #[command(flatten)]
        filter: FilterArgs,

        /// 1-based page number
        #[arg(short = 'p', long, default_value_t = 1)]
        page: usize,

        /// Items per page: 10, 25, 50 or 100
        #[arg(long = "per-page", default_value_t = 10, value_parser = parse_page_size)]
        per_page: usize,
    },

    /// Parse a JSON dataset and write its bincode snapshot
    #[cfg(feature = "json")]
    Build {
        /// Output path (default: next to the input, as the loader cache)
        #[arg(short = 'o', long = "out")]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Exact city or country name (case- and accent-insensitive)
    #[arg(short = 's', long = "search")]
    pub search: Option<String>,

    /// Sort key with optional direction, repeatable: --sort name --sort population:desc
    #[arg(long = "sort", value_name = "KEY[:asc|desc]")]
    pub sort: Vec<SortCriterion<CityField>>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

fn parse_page_size(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("{e}"))?;
    if PAGE_SIZES.contains(&n) {
        Ok(n)
    } else {
        Err(format!("must be one of {PAGE_SIZES:?}"))
    }
}
