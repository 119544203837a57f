// crates/ballot-core/src/loader/store.rs

//! Compiled store: the whole [`RecordStore`] as bincode, gzipped when the
//! `compact` feature is on. Building it once from the CSV tables makes later
//! start-ups a single read.

use crate::error::{BallotError, Result};
use crate::model::RecordStore;
use bincode::Options;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// Upper bound on an encoded store, in bytes of bincode (after gunzip).
/// Decoding stops at this many bytes, however large the input claims to be.
pub const STORE_SIZE_LIMIT: u64 = 256 * 1024 * 1024;

fn options(limit: u64) -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(limit)
        .allow_trailing_bytes()
}

impl RecordStore {
    /// Serializes the store to uncompressed bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(options(STORE_SIZE_LIMIT).serialize(self)?)
    }

    /// Reconstructs a store from uncompressed bincode.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(options(STORE_SIZE_LIMIT).deserialize(data)?)
    }

    /// Writes the compiled store to `path`.
    ///
    /// The store is encoded before `path` is opened, so a failed encode leaves
    /// an existing file untouched.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_with_limit(path.as_ref(), STORE_SIZE_LIMIT)
    }

    fn save_with_limit(&self, path: &Path, limit: u64) -> Result<()> {
        let bytes = options(limit).serialize(self)?;
        let file = File::create(path)?;

        #[cfg(feature = "compact")]
        {
            let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
            encoder.write_all(&bytes)?;
            encoder.finish()?.flush()?;
        }
        #[cfg(not(feature = "compact"))]
        {
            let mut writer = BufWriter::new(file);
            writer.write_all(&bytes)?;
            writer.flush()?;
        }

        log::info!(
            "compiled store written to {} ({} lookup rows, {} ballots)",
            path.display(),
            self.lookup.len(),
            self.ballots.len()
        );
        Ok(())
    }

    /// Reads a store written by [`RecordStore::save_as`].
    pub fn load_binary_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            BallotError::NotFound(format!("Store not found at {}: {}", path.display(), e))
        })?;
        let reader = BufReader::new(file);

        #[cfg(feature = "compact")]
        let stream = GzDecoder::new(reader);
        #[cfg(not(feature = "compact"))]
        let stream = reader;

        // Streamed so the size limit bounds what gets inflated.
        Ok(options(STORE_SIZE_LIMIT).deserialize_from(stream)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{BallotRecord, LookupRow, RecordStore};

    fn store() -> RecordStore {
        RecordStore::new(
            vec![LookupRow::new("Suffolk", "Massachusetts", "02108")],
            vec![BallotRecord::new(
                "Suffolk",
                "Massachusetts",
                "02108",
                Some("Ward 3"),
                "| Race | Candidates |\n|---|---|\n| Mayor | A, B |",
            )],
        )
    }

    #[test]
    fn compiled_store_survives_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ballots.bin");
        let original = store();
        original.save_as(&path).unwrap();
        assert_eq!(RecordStore::load_binary_file(&path).unwrap(), original);
    }

    #[test]
    fn failed_encode_keeps_the_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ballots.bin");
        let original = store();
        original.save_as(&path).unwrap();
        let before = std::fs::read(&path).unwrap();

        assert!(original.save_with_limit(&path, 8).is_err());
        assert_eq!(std::fs::read(&path).unwrap(), before);
        assert_eq!(RecordStore::load_binary_file(&path).unwrap(), original);
    }

    #[cfg(feature = "compact")]
    #[test]
    fn oversized_length_prefix_is_rejected_without_inflating() {
        use flate2::{write::GzEncoder, Compression};
        use std::io::Write;

        // varint tag 253 = u64 length; claims far more rows than the limit allows
        let mut payload = vec![253u8];
        payload.extend_from_slice(&u64::MAX.to_le_bytes());
        payload.extend(std::iter::repeat(0u8).take(1 << 20));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hostile.bin");
        let mut enc = GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::best());
        enc.write_all(&payload).unwrap();
        enc.finish().unwrap();

        assert!(RecordStore::load_binary_file(&path).is_err());
    }

    #[cfg(feature = "compact")]
    #[test]
    fn trailing_bytes_are_not_read() {
        use flate2::{write::GzEncoder, Compression};
        use std::io::Write;

        // an empty store followed by a long run of zeros
        let mut payload = RecordStore::default().to_bytes().unwrap();
        payload.extend(std::iter::repeat(0u8).take(4 << 20));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("padded.bin");
        let mut enc = GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::best());
        enc.write_all(&payload).unwrap();
        enc.finish().unwrap();

        assert!(RecordStore::load_binary_file(&path).unwrap().is_empty());
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        assert!(RecordStore::from_bytes(&[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]).is_err());
    }
}
