//! Common regex patterns for notification extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// Capturing decimal amount as written in notifications: `1,500.00`, `1500.00`, `12`.
///
/// Comma grouping must be well-formed, otherwise the plain-digit branch is
/// used, so an ungrouped `1500.00` is captured whole rather than as `150`.
pub const DEC_AMOUNT: &str = r"((?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?)";

lazy_static! {
    // First signed decimal token in a comma-stripped string
    pub static ref DECIMAL_TOKEN: Regex = Regex::new(r"-?\d+(?:\.\d+)?").unwrap();

    // Direction keywords, checked against lowercased text
    pub static ref CREDIT_HINT: Regex = Regex::new(r"credit|received|deposit").unwrap();

    pub static ref DEBIT_HINT: Regex = Regex::new(r"debit|withdraw|transfer").unwrap();
}

/// Build an amount pattern: `prefix`, then the captured amount.
pub fn amount_after(prefix: &str) -> String {
    format!(r"{}\s*{}", prefix, DEC_AMOUNT)
}

/// Build an amount pattern: the captured amount, then `suffix`.
pub fn amount_before(prefix: &str, suffix: &str) -> String {
    format!(r"{}\s*{}\s*{}", prefix, DEC_AMOUNT, suffix)
}
