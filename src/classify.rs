//! Affiliation classification heuristics
//!
//! PubMed affiliation strings are comma-delimited free text, conventionally
//! "Org, City, Region, Country[, contact]". These functions decide whether an
//! affiliation is non-academic, pull out a best-guess company name, and find
//! an embedded email address. All three are pure functions of the input
//! string and never fail; a miss is a `false`/`None`, not an error.
//!
//! The marker lists and the first-surviving-segment tie-break were tuned
//! against the test fixtures. Changing them changes classification results,
//! so they stay as-is unless new fixtures say otherwise.

use regex::Regex;
use std::sync::OnceLock;

/// Substrings that mark an affiliation as academic (case-insensitive)
const ACADEMIC_MARKERS: &[&str] = &[
    "university",
    "college",
    "institute",
    "school",
    "hospital",
    "center",
    "centre",
    "faculty",
    "department",
    "academy",
    "clinic",
    "laboratory",
    "lab",
];

/// Country, city, and region tokens that mark a segment as a location
/// rather than an organization (case-insensitive)
const LOCATION_MARKERS: &[&str] = &[
    "usa", "uk", "germany", "france", "canada", "india", "china", "japan", "australia", "boston",
    "new york", "london", "paris", "berlin", "delhi", "tokyo", "sydney", "ma", "ny", "ca", "tx",
    "il", "wa", "on", "qc",
];

/// Check whether an affiliation denotes a non-academic institution
///
/// Returns `true` iff no academic marker substring occurs anywhere in the
/// lower-cased text. This is a whole-string test: one academic marker
/// anywhere marks the entire affiliation academic.
///
/// An empty string contains no markers and is therefore classified
/// non-academic; callers that mean "no affiliation" rather than
/// "non-academic affiliation" must check for emptiness themselves.
///
/// # Example
///
/// ```
/// use paperscout::classify::is_non_academic;
///
/// assert!(is_non_academic("Pfizer Inc., New York, NY, USA"));
/// assert!(!is_non_academic("Harvard University, Boston, MA, USA"));
/// ```
pub fn is_non_academic(affiliation: &str) -> bool {
    let lower = affiliation.to_lowercase();
    !ACADEMIC_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Extract a best-guess company name from an affiliation
///
/// Splits on commas and returns the first trimmed segment that is not
/// academic, not a location, and not a short all-uppercase abbreviation.
/// The surviving segment is returned verbatim, original casing and trailing
/// punctuation included.
///
/// # Example
///
/// ```
/// use paperscout::classify::extract_company;
///
/// assert_eq!(
///     extract_company("Pfizer Inc., New York, NY, USA"),
///     Some("Pfizer Inc.".to_string())
/// );
/// assert_eq!(extract_company("Harvard University, Boston, MA, USA"), None);
/// ```
pub fn extract_company(affiliation: &str) -> Option<String> {
    for segment in affiliation.split(',').map(str::trim) {
        if segment.is_empty() {
            continue;
        }
        let lower = segment.to_lowercase();
        if ACADEMIC_MARKERS.iter().any(|marker| lower.contains(marker)) {
            continue;
        }
        if LOCATION_MARKERS.iter().any(|marker| lower.contains(marker)) {
            continue;
        }
        // State/country abbreviations not in the fixed list, e.g. "NJ"
        if segment.len() <= 3 && is_all_uppercase(segment) {
            continue;
        }
        return Some(segment.to_string());
    }
    None
}

/// Extract the first email address found in an affiliation
///
/// # Example
///
/// ```
/// use paperscout::classify::extract_email;
///
/// let affiliation = "Pfizer Inc., New York, NY, USA. john.doe@pfizer.com";
/// assert_eq!(
///     extract_email(affiliation),
///     Some("john.doe@pfizer.com".to_string())
/// );
/// ```
pub fn extract_email(affiliation: &str) -> Option<String> {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
            .expect("Failed to compile email regex")
    });

    re.find(affiliation).map(|m| m.as_str().to_string())
}

/// True when every cased character is uppercase and at least one is cased
fn is_all_uppercase(segment: &str) -> bool {
    let mut has_cased = false;
    for c in segment.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}
