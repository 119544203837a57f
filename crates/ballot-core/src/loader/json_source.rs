// crates/ballot-core/src/loader/json_source.rs
#![cfg(feature = "json")]

use crate::error::Result;
use serde::de::DeserializeOwned;
use std::io::Read;

/// Reads a JSON array of row objects keyed like the CSV headers.
pub(super) fn read_rows<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    Ok(serde_json::from_reader(reader)?)
}
