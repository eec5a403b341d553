//! citydb-cli — Command-line interface for citydb-core
//!
//! This binary runs the citydb query engine from your terminal: filter by
//! an exact city or country name, sort by any number of columns, and page
//! through the result.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ citydb stats
//!
//! - All Canadian cities, largest first
//!   $ citydb query --search canada --sort population:desc
//!
//! - Second page of 25, sorted by name then population
//!   $ citydb page --sort name --sort population:desc --page 2 --per-page 25
//!
//! - Look up one city
//!   $ citydb city 1392685764
//!
//! - Pre-build the snapshot cache for a dataset
//!   $ citydb --input worldcities.json.gz build
//!
//! Data source
//! -----------
//!
//! By default the CLI loads the dataset bundled with `citydb-core` and
//! caches a binary snapshot next to it for fast subsequent runs. Use
//! `--input <path>` (or `CITYDB_DATA`) to point at another dataset.
mod args;
mod render;

use crate::args::{CliArgs, Commands, FilterArgs};
use anyhow::Context;
#[cfg(feature = "json")]
use citydb_core::loader::builder::build_snapshot;
use citydb_core::prelude::*;
use clap::Parser;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let input = args.input.unwrap_or_else(CityStore::default_dataset_path);
    let cache = if args.no_cache {
        CacheMode::Disabled
    } else {
        CacheMode::ReadWrite
    };

    match args.command {
        #[cfg(feature = "json")]
        Commands::Build { out } => {
            let (written, stats) = build_snapshot(&input, out.as_deref())
                .with_context(|| format!("building snapshot from {}", input.display()))?;
            println!("Wrote {} ({} cities)", written.display(), stats.cities);
        }

        Commands::Stats => {
            let store = load_store(&input, cache)?;
            println!("{}", render::stats(&store.stats()));
        }

        Commands::City { id } => {
            let store = load_store(&input, cache)?;
            match store.find_city_by_id(id) {
                Some(c) => println!("{}", render::city(c)),
                None => {
                    eprintln!("No city found for id: {id}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }

        Commands::Query {
            filter,
            offset,
            limit,
        } => {
            let store = load_store(&input, cache)?;
            let window = Window::clamped(offset, limit);
            let (mut out, mut err) = (std::io::stdout(), std::io::stderr());
            return run_query(&store, &filter, window, false, &mut out, &mut err);
        }

        Commands::Page {
            filter,
            page,
            per_page,
        } => {
            let store = load_store(&input, cache)?;
            let window = Window::for_page(page, per_page);
            let (mut out, mut err) = (std::io::stdout(), std::io::stderr());
            return run_query(&store, &filter, window, true, &mut out, &mut err);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn load_store(input: &Path, cache: CacheMode) -> anyhow::Result<CityStore> {
    debug!(path = %input.display(), ?cache, "loading dataset");
    let store = CityStore::load_from_path_with(input, cache)
        .with_context(|| format!("loading dataset {}", input.display()))?;
    debug!(cities = store.len(), "dataset ready");
    Ok(store)
}

/// Run one query and print it to `out`. A search failure is reported on
/// `err` and maps to a failing exit code; other errors propagate.
fn run_query(
    store: &CityStore,
    filter: &FilterArgs,
    window: Window,
    show_pager: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<ExitCode> {
    let mut request = QueryRequest::new()
        .sort_method(filter.sort.clone())
        .with_window(window);
    request.search_term = filter.search.clone();
    debug!(?request, "running query");

    let result = match store.query(&request) {
        Ok(result) => result,
        Err(e) if e.is_search_failure() => {
            writeln!(err, "Search failed: {e}")?;
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };
    let info = result.page_info(window);

    if filter.json {
        let body = if show_pager {
            serde_json::json!({ "result": result, "page": info })
        } else {
            serde_json::to_value(&result)?
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
    } else {
        write!(out, "{}", render::table(&result))?;
        if show_pager {
            writeln!(out, "{}", render::pager(&info))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
