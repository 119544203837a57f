// crates/ballot-core/src/raw.rs
use serde::Deserialize;

/// Raw lookup row as it comes from `zip_lookup.csv` (or its JSON twin).
///
/// Every column is optional here; the converter decides what a usable row is.
/// Zip codes are kept as strings so leading zeros survive ("02108").
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupRowRaw {
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
}

/// Raw ballot row as it comes from `data.csv`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BallotRowRaw {
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub ballot_markdown: Option<String>,
}

pub type LookupRowsRaw = Vec<LookupRowRaw>;
pub type BallotRowsRaw = Vec<BallotRowRaw>;
