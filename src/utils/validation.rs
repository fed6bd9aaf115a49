//! Centralized helpers for turning raw text fields into numbers.
//!
//! Unparsable values become `None` rather than zero so they stay distinguishable
//! from real measurements until the classifier applies its defaults.

use tracing::debug;

/// Parse a base-pair length.
///
/// # Examples
///
/// ```
/// use contig_census::utils::validation::parse_length;
///
/// assert_eq!(parse_length("812345"), Some(812_345));
/// assert_eq!(parse_length(" 42 "), Some(42));
/// assert_eq!(parse_length("12kb"), None);
/// ```
#[must_use]
pub fn parse_length(s: &str) -> Option<u64> {
    let parsed = s.trim().parse().ok();
    if parsed.is_none() {
        debug!("Unparsable length value '{s}'");
    }
    parsed
}

/// Parse a real-valued measurement (depth, completeness, contamination).
///
/// NaN and infinite values are treated as missing.
///
/// # Examples
///
/// ```
/// use contig_census::utils::validation::parse_measure;
///
/// assert_eq!(parse_measure("35.2"), Some(35.2));
/// assert_eq!(parse_measure("1.2.3"), None);
/// assert_eq!(parse_measure("NaN"), None);
/// ```
#[must_use]
pub fn parse_measure(s: &str) -> Option<f64> {
    let parsed = s.trim().parse::<f64>().ok().filter(|v| v.is_finite());
    if parsed.is_none() {
        debug!("Unparsable numeric value '{s}'");
    }
    parsed
}
