// crates/ballot-core/src/text.rs

/// Convert a string into a folded key suitable for case-insensitive comparison.
///
/// Only case is folded. Accents and punctuation are kept as they are, so
/// `"Doña Ana"` does not match `"dona"`.
///
/// # Examples
///
/// ```rust
/// use ballot_core::text::fold_key;
///
/// assert_eq!(fold_key("Los Angeles"), "los angeles");
/// ```
#[inline]
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}
