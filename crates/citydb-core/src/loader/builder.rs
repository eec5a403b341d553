// crates/citydb-core/src/loader/builder.rs
#![cfg(feature = "json")]

use super::common_io;
use crate::common::StoreStats;
use crate::error::Result;
use crate::model::CACHE_SUFFIX;
use crate::store::CityStore;
use crate::traits::CitySearch;
use std::path::{Path, PathBuf};
use tracing::info;

/// Parse a JSON source dataset and write its bincode snapshot.
///
/// `out` defaults to the cache path the loader looks for
/// (`<source>.bin.gz` with `compact`, `<source>.bin` without).
pub fn build_snapshot(source: &Path, out: Option<&Path>) -> Result<(PathBuf, StoreStats)> {
    let out = out
        .map(Path::to_path_buf)
        .unwrap_or_else(|| common_io::get_cache_path(source, CACHE_SUFFIX));

    info!(source = %source.display(), out = %out.display(), "building snapshot");
    let store = CityStore::load_json(source)?;
    store.write_snapshot(&out)?;

    Ok((out, store.stats()))
}
