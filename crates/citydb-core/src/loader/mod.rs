// crates/citydb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression, snapshot caching) and
//! delegates to the payload parsers (bincode snapshot vs JSON source).
//!
//! Loading a JSON source writes a bincode snapshot next to it
//! (`<file>.bin.gz` with `compact`, `<file>.bin` without). Later loads use
//! the snapshot while it is at least as new as the source.

use crate::error::Result;
use crate::store::CityStore;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use tracing::info;

pub mod builder;
pub mod common_io;
mod json;
mod standard;

/// Environment variable overriding the default dataset path.
pub const DATA_PATH_ENV: &str = "CITYDB_DATA";

static CITY_STORE: OnceCell<CityStore> = OnceCell::new();

/// Whether JSON loads may read and write the snapshot cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CacheMode {
    #[default]
    ReadWrite,
    Disabled,
}

impl CityStore {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "worldcities.json"
    }

    /// `$CITYDB_DATA` if set, otherwise the bundled dataset.
    pub fn default_dataset_path() -> PathBuf {
        std::env::var_os(DATA_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| Self::default_data_dir().join(Self::default_dataset_filename()))
    }

    /// The process-wide store, loaded on first use from
    /// [`CityStore::default_dataset_path`].
    ///
    /// The store is never mutated, so the reference can be shared freely.
    pub fn load() -> Result<&'static CityStore> {
        CITY_STORE.get_or_try_init(|| Self::load_from_path(Self::default_dataset_path()))
    }

    /// Load from a JSON source (`.json`, `.json.gz`) or a snapshot
    /// (`.bin`, `.bin.gz`), using the snapshot cache for JSON sources.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_from_path_with(path, CacheMode::ReadWrite)
    }

    pub fn load_from_path_with(path: impl AsRef<Path>, cache: CacheMode) -> Result<Self> {
        let path = path.as_ref();
        let store = if is_snapshot(path) {
            Self::load_snapshot(path)?
        } else {
            Self::load_source(path, cache)?
        };
        info!(path = %path.display(), cities = store.len(), "city store loaded");
        Ok(store)
    }

    #[cfg(feature = "json")]
    fn load_source(path: &Path, cache: CacheMode) -> Result<Self> {
        use crate::model::CACHE_SUFFIX;
        use tracing::{debug, warn};

        if cache == CacheMode::Disabled {
            return Self::load_json(path);
        }

        let cache_path = common_io::get_cache_path(path, CACHE_SUFFIX);
        if common_io::is_fresh(&cache_path, path) {
            match Self::load_snapshot(&cache_path) {
                Ok(store) => {
                    debug!(cache = %cache_path.display(), "using snapshot cache");
                    return Ok(store);
                }
                Err(e) => warn!(cache = %cache_path.display(), error = %e, "ignoring unreadable snapshot cache"),
            }
        }

        let store = Self::load_json(path)?;

        // Best-effort: a read-only data dir must not fail the load.
        if let Err(e) = store.write_snapshot(&cache_path) {
            warn!(cache = %cache_path.display(), error = %e, "could not write snapshot cache");
        }
        Ok(store)
    }

    #[cfg(not(feature = "json"))]
    fn load_source(path: &Path, _cache: CacheMode) -> Result<Self> {
        Err(crate::error::CityDbError::InvalidArgument(format!(
            "{} is not a snapshot; enable the `json` feature to read source datasets",
            path.display()
        )))
    }
}

/// `.bin` and `.bin.gz` files are snapshots; everything else is a source.
fn is_snapshot(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|f| f.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    name.ends_with(".bin") || name.ends_with(".bin.gz")
}
