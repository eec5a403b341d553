// crates/citydb-core/src/loader/json.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if 'json' feature is missing.
// ---------------------------------------------------------------------------
#![cfg(feature = "json")]

use super::common_io;
use crate::error::Result;
use crate::raw::CitiesRaw;
use crate::store::CityStore;
use std::io::Read;
use std::path::Path;
use tracing::debug;

impl CityStore {
    /// Parse the source dataset (a JSON array of 7-column rows).
    pub fn from_reader_json<R: Read>(reader: R) -> Result<Self> {
        let raw: CitiesRaw = serde_json::from_reader(reader)?;
        debug!(rows = raw.len(), "parsed JSON dataset");
        Self::from_rows(raw)
    }

    /// Load directly from a `.json` or `.json.gz` file, bypassing snapshots.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let reader = common_io::open_stream(path.as_ref())?;
        Self::from_reader_json(reader)
    }
}
