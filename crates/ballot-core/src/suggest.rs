// crates/ballot-core/src/suggest.rs
use crate::config::{SearchConfig, DEFAULT_MIN_QUERY_CHARS};
use crate::model::LookupRow;
use crate::text::fold_key;
use std::collections::HashSet;

/// Deduplicated `"County, State (Zip)"` strings derived from the lookup table.
///
/// Order follows the first occurrence of each string in the lookup rows.
/// The index is built once the lookup table is available and never changes
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct SuggestionIndex {
    entries: Vec<String>,
    /// Case-folded twin of `entries`, same positions.
    folded: Vec<String>,
}

impl SuggestionIndex {
    /// Builds the index from lookup rows, one string per row, duplicates removed.
    ///
    /// ```rust
    /// use ballot_core::{LookupRow, SuggestionIndex};
    ///
    /// let rows = vec![
    ///     LookupRow::new("Cook", "Illinois", "60629"),
    ///     LookupRow::new("Cook", "Illinois", "60629"),
    /// ];
    /// let index = SuggestionIndex::build(&rows);
    /// assert_eq!(index.entries(), ["Cook, Illinois (60629)"]);
    /// ```
    pub fn build(lookup: &[LookupRow]) -> Self {
        let mut seen: HashSet<String> = HashSet::with_capacity(lookup.len());
        let mut entries = Vec::new();
        for row in lookup {
            let s = row.suggestion();
            if seen.insert(s.clone()) {
                entries.push(s);
            }
        }
        let folded = entries.iter().map(|e| fold_key(e)).collect();
        log::debug!(
            "suggestion index built: {} entries from {} lookup rows",
            entries.len(),
            lookup.len()
        );
        Self { entries, folded }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First `limit` entries containing `query` anywhere, ignoring case.
    ///
    /// Queries whose trimmed length is below two characters return nothing.
    /// The substring test itself uses `query` as given.
    pub fn filter(&self, query: &str, limit: usize) -> Vec<&str> {
        self.filter_gated(query, limit, DEFAULT_MIN_QUERY_CHARS)
    }

    /// [`filter`](Self::filter) driven by a [`SearchConfig`].
    pub fn suggest(&self, query: &str, config: &SearchConfig) -> Vec<&str> {
        self.filter_gated(query, config.suggestion_limit, config.min_query_chars)
    }

    fn filter_gated(&self, query: &str, limit: usize, min_chars: usize) -> Vec<&str> {
        if query.trim().chars().count() < min_chars {
            return Vec::new();
        }
        let q = fold_key(query);
        self.folded
            .iter()
            .zip(&self.entries)
            .filter(|(folded, _)| folded.contains(&q))
            .map(|(_, entry)| entry.as_str())
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> SuggestionIndex {
        SuggestionIndex::build(&[
            LookupRow::new("Cook", "Illinois", "60629"),
            LookupRow::new("Los Angeles", "California", "90011"),
            LookupRow::new("Cook", "Illinois", "60629"),
            LookupRow::new("Cook", "Illinois", "60630"),
            LookupRow::new("Kings", "New York", "11226"),
            LookupRow::new("Cook", "Minnesota", "55604"),
            LookupRow::new("Cooke", "Texas", "76240"),
            LookupRow::new("Coos", "Oregon", "97420"),
            LookupRow::new("Cook", "Georgia", "31620"),
        ])
    }

    #[test]
    fn dedup_keeps_first_seen_order() {
        let index = index();
        assert_eq!(index.len(), 8);
        assert_eq!(index.entries()[0], "Cook, Illinois (60629)");
        assert_eq!(index.entries()[1], "Los Angeles, California (90011)");
        assert_eq!(index.entries()[2], "Cook, Illinois (60630)");
    }

    #[test]
    fn matches_anywhere_ignoring_case() {
        let index = index();
        assert_eq!(index.filter("NEW YORK", 5), vec!["Kings, New York (11226)"]);
        assert_eq!(index.filter("9001", 5), vec!["Los Angeles, California (90011)"]);
        assert_eq!(index.filter("ois (6063", 5), vec!["Cook, Illinois (60630)"]);
    }

    #[test]
    fn truncates_to_limit_in_index_order() {
        let index = index();
        let hits = index.filter("coo", 5);
        assert_eq!(
            hits,
            vec![
                "Cook, Illinois (60629)",
                "Cook, Illinois (60630)",
                "Cook, Minnesota (55604)",
                "Cooke, Texas (76240)",
                "Coos, Oregon (97420)",
            ]
        );
        assert_eq!(index.filter("coo", 2).len(), 2);
    }

    #[test]
    fn short_queries_return_nothing() {
        let index = index();
        assert!(index.filter("c", 5).is_empty());
        assert!(index.filter(" c  ", 5).is_empty());
        assert!(index.filter("", 5).is_empty());
    }

    #[test]
    fn filter_is_idempotent() {
        let index = index();
        assert_eq!(index.filter("il", 5), index.filter("il", 5));
    }

    #[test]
    fn suggest_honours_config() {
        let index = index();
        let config = SearchConfig {
            suggestion_limit: 1,
            min_query_chars: 4,
        };
        assert!(index.suggest("coo", &config).is_empty());
        assert_eq!(index.suggest("cook", &config), vec!["Cook, Illinois (60629)"]);
    }
}
