use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::listing::ListingRecord;

/// Unit count used for a multi-family listing whose remarks give no hint.
pub const DEFAULT_MULTI_FAMILY_UNITS: u32 = 2;

static NUMERIC_UNITS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d+)\s*-?\s*(?:units?|plex)\b").expect("numeric unit pattern")
});
static TRIPLEX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\btriplex(?:es)?\b").expect("triplex pattern"));
static QUADPLEX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:quad|(?:quad|four|quadru)plex(?:es)?)\b").expect("quadplex pattern")
});
static DUPLEX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bduplex(?:es)?\b").expect("duplex pattern"));

/// A remarks rule yielding a unit count when it fires.
pub type UnitRule = fn(&str) -> Option<u32>;

/// Remarks rules, highest confidence first.
pub const UNIT_RULES: &[(&str, UnitRule)] = &[
    ("numeric_phrase", numeric_phrase),
    ("triplex", triplex),
    ("quadplex", quadplex),
    ("duplex", duplex),
];

/// "4 unit", "3-plex", "6 units". Zero or oversized numbers don't count.
pub fn numeric_phrase(remarks: &str) -> Option<u32> {
    NUMERIC_UNITS_RE
        .captures(remarks)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .filter(|n| *n >= 1)
}

pub fn triplex(remarks: &str) -> Option<u32> {
    TRIPLEX_RE.is_match(remarks).then_some(3)
}

pub fn quadplex(remarks: &str) -> Option<u32> {
    QUADPLEX_RE.is_match(remarks).then_some(4)
}

pub fn duplex(remarks: &str) -> Option<u32> {
    DUPLEX_RE.is_match(remarks).then_some(2)
}

/// Unit count for a multi-family listing's remarks.
pub fn units_from_remarks(remarks: &str) -> u32 {
    for (name, rule) in UNIT_RULES {
        if let Some(n) = rule(remarks) {
            debug!(rule = *name, units = n, "unit count inferred");
            return n;
        }
    }
    DEFAULT_MULTI_FAMILY_UNITS
}

/// Always at least 1; only listings coded multi-family can exceed it.
pub fn infer_num_units(listing: &ListingRecord, multi_family_codes: &[i64]) -> u32 {
    match listing.property_code() {
        Some(code) if multi_family_codes.contains(&code) => units_from_remarks(listing.remarks()),
        _ => 1,
    }
}
