// crates/ballot-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to
//! specific parsers (CSV vs JSON vs the compiled binary store).
//!
//! The lookup table is always read before the ballot table; see
//! [`load_dataset`].

use crate::error::{BallotError, Result};
use crate::model::{ballots_from_raw, lookup_from_raw, BallotRecord, LookupRow, RecordStore};
use crate::raw::{BallotRowsRaw, LookupRowsRaw};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "csv")]
mod csv_source;
#[cfg(feature = "json")]
mod json_source;
mod store;

pub use store::STORE_SIZE_LIMIT;

// Single in-process cache so the default dataset is parsed once per process.
static STORE_CACHE: OnceCell<RecordStore> = OnceCell::new();

pub const DEFAULT_LOOKUP_FILENAME: &str = "zip_lookup.csv";
pub const DEFAULT_BALLOTS_FILENAME: &str = "data.csv";

/// Tabular source formats understood by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Json,
}

impl SourceFormat {
    /// Picks the format from the file extension, looking through a trailing `.gz`.
    ///
    /// ```rust
    /// use ballot_core::loader::SourceFormat;
    ///
    /// assert_eq!(SourceFormat::from_path("data.csv").unwrap(), SourceFormat::Csv);
    /// assert_eq!(SourceFormat::from_path("zip_lookup.json.gz").unwrap(), SourceFormat::Json);
    /// assert!(SourceFormat::from_path("data.xlsx").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        let name = name.strip_suffix(".gz").unwrap_or(&name);
        if name.ends_with(".csv") {
            Ok(SourceFormat::Csv)
        } else if name.ends_with(".json") {
            Ok(SourceFormat::Json)
        } else {
            Err(BallotError::InvalidData(format!(
                "unsupported table format: {}",
                path.display()
            )))
        }
    }
}

/// Parses lookup rows (`county, state, zip`) from any reader.
pub fn lookup_from_reader<R: Read>(reader: R, format: SourceFormat) -> Result<Vec<LookupRow>> {
    let raw: LookupRowsRaw = read_rows(reader, format)?;
    Ok(lookup_from_raw(raw))
}

/// Parses ballot rows (`county, state, zip, district, ballot_markdown`) from any reader.
pub fn ballots_from_reader<R: Read>(reader: R, format: SourceFormat) -> Result<Vec<BallotRecord>> {
    let raw: BallotRowsRaw = read_rows(reader, format)?;
    Ok(ballots_from_raw(raw))
}

pub fn load_lookup(path: impl AsRef<Path>) -> Result<Vec<LookupRow>> {
    let path = path.as_ref();
    let rows = lookup_from_reader(open_stream(path)?, SourceFormat::from_path(path)?)?;
    log::info!("loaded {} lookup rows from {}", rows.len(), path.display());
    Ok(rows)
}

pub fn load_ballots(path: impl AsRef<Path>) -> Result<Vec<BallotRecord>> {
    let path = path.as_ref();
    let records = ballots_from_reader(open_stream(path)?, SourceFormat::from_path(path)?)?;
    log::info!("loaded {} ballot records from {}", records.len(), path.display());
    Ok(records)
}

/// Loads the lookup table, then the ballot table, into one store.
///
/// The ballot table is only opened once the lookup table parsed successfully.
pub fn load_dataset(lookup_path: impl AsRef<Path>, ballots_path: impl AsRef<Path>) -> Result<RecordStore> {
    let lookup = load_lookup(lookup_path)?;
    let ballots = load_ballots(ballots_path)?;
    Ok(RecordStore::new(lookup, ballots))
}

fn read_rows<T: DeserializeOwned, R: Read>(reader: R, format: SourceFormat) -> Result<Vec<T>> {
    match format {
        #[cfg(feature = "csv")]
        SourceFormat::Csv => csv_source::read_rows(reader),
        #[cfg(feature = "json")]
        SourceFormat::Json => json_source::read_rows(reader),
        #[allow(unreachable_patterns)]
        other => {
            let _ = reader;
            Err(BallotError::InvalidData(format!(
                "{other:?} support is not compiled in"
            )))
        }
    }
}

/// Opens a file, buffers it, and unwraps gzip when the name ends in `.gz`.
/// Returns a generic Reader so the caller doesn't care about the compression.
pub(crate) fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        BallotError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    let gzipped = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));

    if !gzipped {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(BallotError::InvalidData(format!(
            "{} is gzipped but 'compact' is disabled",
            path.display()
        )))
    }
}

impl RecordStore {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_lookup_path() -> PathBuf {
        Self::default_data_dir().join(DEFAULT_LOOKUP_FILENAME)
    }

    pub fn default_ballots_path() -> PathBuf {
        Self::default_data_dir().join(DEFAULT_BALLOTS_FILENAME)
    }

    /// Loads the bundled dataset from [`RecordStore::default_data_dir`].
    ///
    /// Parsed once per process; later calls return the cached store.
    pub fn load() -> Result<&'static RecordStore> {
        STORE_CACHE.get_or_try_init(|| {
            load_dataset(Self::default_lookup_path(), Self::default_ballots_path())
        })
    }

    /// Loads a store from explicit table paths (no caching).
    pub fn load_from_paths(
        lookup_path: impl AsRef<Path>,
        ballots_path: impl AsRef<Path>,
    ) -> Result<Self> {
        load_dataset(lookup_path, ballots_path)
    }
}
