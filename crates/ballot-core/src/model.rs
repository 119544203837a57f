// crates/ballot-core/src/model.rs
use crate::raw::{BallotRowRaw, BallotRowsRaw, LookupRowRaw, LookupRowsRaw};
use serde::{Deserialize, Serialize};

/// One valid location from the zip lookup table.
///
/// The lookup table is the source of truth for what the suggestion list can
/// offer. Rows are immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRow {
    pub county: String,
    pub state: String,
    pub zip: String,
}

/// One ballot for a location / district combination.
///
/// Several records may share a zip code when the zip spans districts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotRecord {
    pub county: String,
    pub state: String,
    pub zip: String,
    pub district: Option<String>,
    pub ballot_markdown: String,
}

/// Aggregate counts for a loaded [`RecordStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub lookup_rows: usize,
    pub ballots: usize,
}

/// The master dataset: lookup table plus ballot records.
///
/// Built once at startup (by the [`crate::loader`] or by hand) and read-only
/// afterwards. Both the match engine and the suggestion index borrow from it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordStore {
    pub lookup: Vec<LookupRow>,
    pub ballots: Vec<BallotRecord>,
}

impl LookupRow {
    pub fn new(county: impl Into<String>, state: impl Into<String>, zip: impl Into<String>) -> Self {
        Self {
            county: county.into(),
            state: state.into(),
            zip: zip.into(),
        }
    }

    pub fn county(&self) -> &str {
        &self.county
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    /// Display form used by the suggestion list: `"County, State (Zip)"`.
    pub fn suggestion(&self) -> String {
        format!("{}, {} ({})", self.county, self.state, self.zip)
    }
}

impl BallotRecord {
    pub fn new(
        county: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
        district: Option<&str>,
        ballot_markdown: impl Into<String>,
    ) -> Self {
        Self {
            county: county.into(),
            state: state.into(),
            zip: zip.into(),
            district: district.map(str::to_owned),
            ballot_markdown: ballot_markdown.into(),
        }
    }

    pub fn county(&self) -> &str {
        &self.county
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    /// District label, or an empty string when the record has none.
    pub fn district(&self) -> &str {
        self.district.as_deref().unwrap_or("")
    }

    pub fn ballot_markdown(&self) -> &str {
        &self.ballot_markdown
    }

    /// Heading shown above the ballot.
    ///
    /// `"Cook, Illinois － District 3"` with a district, `"Cook, Illinois"`
    /// without one.
    pub fn title(&self) -> String {
        match self.district.as_deref() {
            Some(district) => format!("{}, {} － {}", self.county, self.state, district),
            None => format!("{}, {}", self.county, self.state),
        }
    }

    /// The fields the fallback search looks at, in order.
    #[inline]
    pub fn search_fields(&self) -> [&str; 4] {
        [&self.county, &self.state, &self.zip, self.district()]
    }
}

impl RecordStore {
    pub fn new(lookup: Vec<LookupRow>, ballots: Vec<BallotRecord>) -> Self {
        Self { lookup, ballots }
    }

    pub fn lookup(&self) -> &[LookupRow] {
        &self.lookup
    }

    pub fn ballots(&self) -> &[BallotRecord] {
        &self.ballots
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty() && self.ballots.is_empty()
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            lookup_rows: self.lookup.len(),
            ballots: self.ballots.len(),
        }
    }
}

fn clean(s: Option<String>) -> String {
    s.map(|v| v.trim().to_owned()).unwrap_or_default()
}

/// Converts raw lookup rows into [`LookupRow`]s.
///
/// Rows with every column blank (trailing lines in a CSV export) are dropped.
pub fn lookup_from_raw(raw: LookupRowsRaw) -> Vec<LookupRow> {
    raw.into_iter()
        .filter_map(|LookupRowRaw { county, state, zip }| {
            let row = LookupRow {
                county: clean(county),
                state: clean(state),
                zip: clean(zip),
            };
            if row.county.is_empty() && row.state.is_empty() && row.zip.is_empty() {
                None
            } else {
                Some(row)
            }
        })
        .collect()
}

/// Converts raw ballot rows into [`BallotRecord`]s.
///
/// A blank district becomes `None`; the markdown body is kept verbatim.
pub fn ballots_from_raw(raw: BallotRowsRaw) -> Vec<BallotRecord> {
    raw.into_iter()
        .filter_map(|r: BallotRowRaw| {
            let district = r
                .district
                .map(|d| d.trim().to_owned())
                .filter(|d| !d.is_empty());
            let record = BallotRecord {
                county: clean(r.county),
                state: clean(r.state),
                zip: clean(r.zip),
                district,
                ballot_markdown: r.ballot_markdown.unwrap_or_default(),
            };
            let blank = record.county.is_empty()
                && record.state.is_empty()
                && record.zip.is_empty()
                && record.district.is_none()
                && record.ballot_markdown.trim().is_empty();
            (!blank).then_some(record)
        })
        .collect()
}
