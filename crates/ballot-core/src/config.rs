// crates/ballot-core/src/config.rs

/// Number of suggestions shown under the search box.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;
/// Trimmed input shorter than this does not touch the suggestion list.
pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;

/// Tunables for suggestion filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub suggestion_limit: usize,
    pub min_query_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
        }
    }
}

impl SearchConfig {
    /// Same defaults with a different suggestion limit.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            suggestion_limit: limit,
            ..Self::default()
        }
    }

    /// True if `input` is long enough to drive the suggestion list.
    #[inline]
    pub fn qualifies(&self, input: &str) -> bool {
        input.trim().chars().count() >= self.min_query_chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_limit_keeps_the_length_gate() {
        let config = SearchConfig::with_limit(1);
        assert_eq!(config.suggestion_limit, 1);
        assert_eq!(config.min_query_chars, DEFAULT_MIN_QUERY_CHARS);
    }

    #[test]
    fn qualifies_counts_trimmed_chars() {
        let config = SearchConfig::default();
        assert!(config.qualifies("co"));
        assert!(!config.qualifies(" c "));
        assert!(!config.qualifies(""));
    }
}
