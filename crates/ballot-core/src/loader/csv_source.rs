// crates/ballot-core/src/loader/csv_source.rs
#![cfg(feature = "csv")]

use crate::error::Result;
use serde::de::DeserializeOwned;
use std::io::Read;

/// Reads header-keyed CSV rows. Columns the row type does not know are
/// ignored; missing optional columns fall back to their defaults.
pub(super) fn read_rows<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut rows = Vec::new();
    for row in rdr.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use crate::loader::{ballots_from_reader, lookup_from_reader, SourceFormat};

    #[test]
    fn lookup_keeps_leading_zeros() {
        let text = "county,state,zip\nSuffolk,Massachusetts,02108\n";
        let rows = lookup_from_reader(text.as_bytes(), SourceFormat::Csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].zip, "02108");
    }

    #[test]
    fn district_column_is_optional() {
        let text = "county,state,zip,ballot_markdown\nKings,New York,11226,\"# Ballot\n\n- Item\"\n";
        let records = ballots_from_reader(text.as_bytes(), SourceFormat::Csv).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].district, None);
        assert_eq!(records[0].ballot_markdown, "# Ballot\n\n- Item");
    }

    #[test]
    fn extra_columns_and_blank_lines_are_ignored() {
        let text = "county, state ,zip,fips\nCook,Illinois,60629,17031\n\n";
        let rows = lookup_from_reader(text.as_bytes(), SourceFormat::Csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].state, "Illinois");
    }
}
