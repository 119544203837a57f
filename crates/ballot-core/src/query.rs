// crates/ballot-core/src/query.rs
use serde::{Deserialize, Serialize};

/// Structured decomposition of a `"County, State (Zip)"` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    pub county: String,
    pub state: String,
    pub zip: String,
}

/// Parses free text in the shape the suggestion list produces.
///
/// The text must contain exactly one `,` and, after it, exactly one `(`.
/// Anything else yields `None`. A county name that itself contains a comma
/// therefore never parses and falls through to the substring search.
///
/// # Examples
///
/// ```rust
/// use ballot_core::parse_query;
///
/// let q = parse_query("Los Angeles, California (90011)").unwrap();
/// assert_eq!(q.county, "Los Angeles");
/// assert_eq!(q.state, "California");
/// assert_eq!(q.zip, "90011");
///
/// assert!(parse_query("not a valid format").is_none());
/// ```
pub fn parse_query(text: &str) -> Option<ParsedQuery> {
    let mut parts = text.split(',');
    let (county, rest) = match (parts.next(), parts.next(), parts.next()) {
        (Some(county), Some(rest), None) => (county, rest),
        _ => return None,
    };

    let mut state_zip = rest.trim().split('(');
    let (state, zip) = match (state_zip.next(), state_zip.next(), state_zip.next()) {
        (Some(state), Some(zip), None) => (state, zip),
        _ => return None,
    };

    Some(ParsedQuery {
        county: county.trim().to_owned(),
        state: state.trim().to_owned(),
        zip: zip.replacen(')', "", 1).trim().to_owned(),
    })
}
