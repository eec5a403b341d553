// crates/citydb-core/src/loader/standard.rs
use super::common_io;
use crate::error::Result;
use crate::store::CityStore;
use bincode::Options;
use std::io::{Read, Write};
use std::path::Path;

/// Upper bound on snapshot size, to refuse data bombs.
const SNAPSHOT_LIMIT: u64 = 256 * 1024 * 1024;

fn options() -> impl Options {
    bincode::DefaultOptions::new()
}

impl CityStore {
    /// Reconstruct a store from snapshot bytes written by [`CityStore::write_snapshot`].
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let store: CityStore = options()
            .with_limit(SNAPSHOT_LIMIT)
            .allow_trailing_bytes()
            .deserialize(data)?;
        store.reindex()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(options().serialize(self)?)
    }

    /// Load a `.bin` or `.bin.gz` snapshot.
    pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Self> {
        let mut stream = common_io::open_stream(path.as_ref())?;
        let mut data = Vec::new();
        stream.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Write a snapshot, gzip-compressed when `path` ends in `.gz`.
    pub fn write_snapshot(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut stream = common_io::create_stream(path.as_ref())?;
        stream.write_all(&self.to_bytes()?)?;
        stream.finish()
    }
}
