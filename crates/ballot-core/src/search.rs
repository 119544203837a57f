// crates/ballot-core/src/search.rs

//! # Match Engine
//!
//! Two phases, tried in order:
//!
//! 1. **Structured**: if the query parses as `"County, State (Zip)"`, keep the
//!    records whose zip contains the parsed zip. Only the zip drives this
//!    phase; the parsed county and state are not consulted.
//! 2. **Fallback**: if phase 1 was skipped or found nothing, keep the records
//!    where any of county, state, zip or district contains the raw query,
//!    ignoring case.
//!
//! Results keep the store order. There is no ranking.

use crate::model::{BallotRecord, RecordStore};
use crate::query::parse_query;
use crate::text::fold_key;

/// Which phase produced a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Structured,
    Fallback,
}

/// Records returned by [`search_with_phase`] together with their phase.
#[derive(Debug, Clone)]
pub struct SearchHits<'a> {
    pub phase: MatchPhase,
    pub records: Vec<&'a BallotRecord>,
}

impl<'a> SearchHits<'a> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Records whose (non-empty) zip contains `zip` as a substring.
///
/// `"606"` matches `"60629"`. A record without a zip never matches.
pub fn find_by_zip<'a>(records: &'a [BallotRecord], zip: &str) -> Vec<&'a BallotRecord> {
    records
        .iter()
        .filter(|r| !r.zip.is_empty() && r.zip.contains(zip))
        .collect()
}

/// Records where any searchable field contains `substr`, ignoring case.
///
/// An empty `substr` matches every record.
pub fn find_by_substring<'a>(records: &'a [BallotRecord], substr: &str) -> Vec<&'a BallotRecord> {
    let q = fold_key(substr);
    records
        .iter()
        .filter(|r| r.search_fields().iter().any(|f| fold_key(f).contains(&q)))
        .collect()
}

/// Runs the two-phase search and reports which phase answered.
pub fn search_with_phase<'a>(records: &'a [BallotRecord], raw_query: &str) -> SearchHits<'a> {
    if let Some(parsed) = parse_query(raw_query) {
        let hits = find_by_zip(records, &parsed.zip);
        log::debug!(
            "structured search on zip {:?}: {} hit(s)",
            parsed.zip,
            hits.len()
        );
        if !hits.is_empty() {
            return SearchHits {
                phase: MatchPhase::Structured,
                records: hits,
            };
        }
    }

    let hits = find_by_substring(records, raw_query);
    log::debug!("fallback search on {:?}: {} hit(s)", raw_query, hits.len());
    SearchHits {
        phase: MatchPhase::Fallback,
        records: hits,
    }
}

/// Runs the two-phase search over `records`.
///
/// ```rust
/// use ballot_core::{search, BallotRecord};
///
/// let records = vec![
///     BallotRecord::new("Cook", "Illinois", "60629", None, ""),
///     BallotRecord::new("Kings", "New York", "11226", None, ""),
/// ];
///
/// assert_eq!(search(&records, "Cook, Illinois (606)").len(), 1);
/// assert_eq!(search(&records, "new york")[0].county(), "Kings");
/// assert_eq!(search(&records, "").len(), 2);
/// ```
pub fn search<'a>(records: &'a [BallotRecord], raw_query: &str) -> Vec<&'a BallotRecord> {
    search_with_phase(records, raw_query).records
}

/// Search operations available on a loaded dataset.
pub trait BallotSearch {
    fn find_ballots(&self, raw_query: &str) -> Vec<&BallotRecord>;
    fn find_ballots_by_zip(&self, zip: &str) -> Vec<&BallotRecord>;
    fn find_ballots_by_substring(&self, substr: &str) -> Vec<&BallotRecord>;
}

impl BallotSearch for RecordStore {
    fn find_ballots(&self, raw_query: &str) -> Vec<&BallotRecord> {
        search(self.ballots(), raw_query)
    }

    fn find_ballots_by_zip(&self, zip: &str) -> Vec<&BallotRecord> {
        find_by_zip(self.ballots(), zip)
    }

    fn find_ballots_by_substring(&self, substr: &str) -> Vec<&BallotRecord> {
        find_by_substring(self.ballots(), substr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<BallotRecord> {
        vec![
            BallotRecord::new("Los Angeles", "California", "90011", None, "# LA"),
            BallotRecord::new("Cook", "Illinois", "60629", Some("District 3"), "# Cook 3"),
            BallotRecord::new("Cook", "Illinois", "60629", Some("District 4"), "# Cook 4"),
            BallotRecord::new("Kings", "New York", "11226", None, "# Kings"),
            BallotRecord::new("Orphan", "Nowhere", "", None, ""),
        ]
    }

    #[test]
    fn bare_zip_falls_back_and_matches() {
        let records = records();
        let hits = search_with_phase(&records, "90011");
        assert_eq!(hits.phase, MatchPhase::Fallback);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.records[0].county(), "Los Angeles");
    }

    #[test]
    fn structured_zip_is_substring_not_equality() {
        let records = records();
        let hits = search_with_phase(&records, "Los Angeles, California (900)");
        assert_eq!(hits.phase, MatchPhase::Structured);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.records[0].zip(), "90011");
    }

    #[test]
    fn structured_phase_ignores_county_and_state() {
        let records = records();
        let hits = search_with_phase(&records, "Somewhere, Else (60629)");
        assert_eq!(hits.phase, MatchPhase::Structured);
        assert!(hits.records.iter().all(|r| r.county() == "Cook"));
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn structured_miss_falls_back_to_substring() {
        let records = records();
        // parses, but no zip contains "99999"; fallback on the raw text finds nothing either
        let hits = search_with_phase(&records, "Cook, Illinois (99999)");
        assert_eq!(hits.phase, MatchPhase::Fallback);
        assert!(hits.is_empty());
    }

    #[test]
    fn empty_parsed_zip_skips_records_without_zip() {
        let records = records();
        let hits = search(&records, "a, b ()");
        assert_eq!(hits.len(), 4);
        assert!(hits.iter().all(|r| !r.zip().is_empty()));
    }

    #[test]
    fn fallback_is_case_insensitive_across_fields() {
        let records = records();
        assert_eq!(search(&records, "ILLINOIS").len(), 2);
        assert_eq!(search(&records, "district 4").len(), 1);
        assert_eq!(search(&records, "york").len(), 1);
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let records = records();
        let hits = search(&records, "");
        assert_eq!(hits.len(), records.len());
        for (hit, original) in hits.iter().zip(records.iter()) {
            assert!(std::ptr::eq(*hit, original));
        }
    }

    #[test]
    fn results_are_a_subset_without_duplicates() {
        let records = records();
        for q in ["cook", "60629", "Cook, Illinois (6)", "x", "", "Kings, New York (11226)"] {
            let hits = search(&records, q);
            assert!(hits.len() <= records.len());
            for (i, a) in hits.iter().enumerate() {
                assert!(records.iter().any(|r| std::ptr::eq(r, *a)));
                assert!(hits[i + 1..].iter().all(|b| !std::ptr::eq(*a, *b)));
            }
        }
    }

    #[test]
    fn empty_store_returns_nothing() {
        assert!(search(&[], "Cook").is_empty());
        assert!(search(&[], "").is_empty());
    }

    #[test]
    fn store_trait_delegates() {
        let store = RecordStore::new(Vec::new(), records());
        assert_eq!(store.find_ballots("kings").len(), 1);
        assert_eq!(store.find_ballots_by_zip("606").len(), 2);
        assert_eq!(store.find_ballots_by_substring("angeles").len(), 1);
    }
}
