// crates/citydb-core/src/loader/common_io.rs
use crate::error::{CityDbError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

pub fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the
/// path ends in `.gz`.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        CityDbError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(CityDbError::InvalidArgument(format!(
            "{} is gzip-compressed; enable the `compact` feature",
            path.display()
        )))
    }
}

/// Output file, optionally gzip-encoded.
///
/// Call [`OutStream::finish`] when done: dropping a gzip stream writes the
/// trailer but discards any error doing so.
pub enum OutStream {
    Plain(BufWriter<File>),
    #[cfg(feature = "compact")]
    Gzip(GzEncoder<BufWriter<File>>),
}

impl OutStream {
    /// Write the gzip trailer (if any) and flush to disk.
    pub fn finish(self) -> Result<()> {
        match self {
            OutStream::Plain(mut w) => w.flush()?,
            #[cfg(feature = "compact")]
            OutStream::Gzip(enc) => enc.finish()?.flush()?,
        }
        Ok(())
    }
}

impl Write for OutStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            OutStream::Plain(w) => w.write(buf),
            #[cfg(feature = "compact")]
            OutStream::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            OutStream::Plain(w) => w.flush(),
            #[cfg(feature = "compact")]
            OutStream::Gzip(w) => w.flush(),
        }
    }
}

/// Creates a file for writing, gzip-encoding it when the path ends in `.gz`.
pub fn create_stream(path: &Path) -> Result<OutStream> {
    if !is_gzip(path) {
        return Ok(OutStream::Plain(BufWriter::new(File::create(path)?)));
    }

    #[cfg(feature = "compact")]
    {
        let writer = BufWriter::new(File::create(path)?);
        Ok(OutStream::Gzip(GzEncoder::new(writer, Compression::default())))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(CityDbError::InvalidArgument(format!(
            "cannot write {}; enable the `compact` feature",
            path.display()
        )))
    }
}

/// `worldcities.json` -> `worldcities.json.<suffix>`
pub fn get_cache_path(source: &Path, suffix: &str) -> PathBuf {
    let filename = source
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{filename}.{suffix}"))
}

/// `true` if `cache` exists and is not older than `source`.
pub fn is_fresh(cache: &Path, source: &Path) -> bool {
    let modified = |p: &Path| std::fs::metadata(p).and_then(|m| m.modified()).ok();
    match (modified(cache), modified(source)) {
        (Some(c), Some(s)) => c >= s,
        (Some(_), None) => true,
        _ => false,
    }
}
