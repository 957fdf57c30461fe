use clap::ValueEnum;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::constants::UNIT_BED_SLOTS;
use crate::table::Cell;

/// Bedroom cells for units 1 through 4.
pub type UnitBeds = [Cell; UNIT_BED_SLOTS];

/// What to emit when neither an explicit phrase nor an even split applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
pub enum BedroomFallback {
    /// All bedrooms go to unit 1.
    #[default]
    #[serde(rename = "unit1")]
    #[value(name = "unit1")]
    Unit1,
    /// Every unit is left blank.
    #[serde(rename = "none")]
    #[value(name = "none")]
    Blank,
}

static PER_UNIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(\d+)\s*(?:bed|bedroom)s?\b(?:\s*(?:and|&|,)?\s*\d+(?:\.\d+)?\s*(?:bath|bathroom)s?\b)?\s*(?:in\s+)?each\s+unit\b",
    )
    .expect("per-unit bedroom pattern")
});

/// Which rule produced a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BedroomRule {
    ExplicitPerUnit,
    EvenSplit,
    Fallback,
    SingleUnit,
}

/// Total beds as a whole, non-negative count; numeric strings are accepted.
pub fn whole_count(beds: &Cell) -> Option<u32> {
    let n = match beds {
        Cell::Integer(i) => return u32::try_from(*i).ok(),
        Cell::Decimal(d) => *d,
        Cell::Text(s) => s.trim().parse::<f64>().ok()?,
        Cell::Null => return None,
    };
    if n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= u32::MAX as f64 {
        Some(n as u32)
    } else {
        None
    }
}

/// "2 bedrooms and 1 bathroom in each unit" gives 2.
pub fn explicit_per_unit(remarks: &str) -> Option<u32> {
    PER_UNIT_RE
        .captures(remarks)
        .and_then(|caps| caps[1].parse().ok())
}

pub fn even_split(total_beds: Option<u32>, num_units: u32) -> Option<u32> {
    let beds = total_beds?;
    (num_units > 1 && beds % num_units == 0).then(|| beds / num_units)
}

fn blank() -> UnitBeds {
    std::array::from_fn(|_| Cell::Null)
}

fn fill(per_unit: u32, num_units: u32) -> UnitBeds {
    let used = (num_units as usize).min(UNIT_BED_SLOTS);
    std::array::from_fn(|i| {
        if i < used {
            Cell::Integer(per_unit.into())
        } else {
            Cell::Null
        }
    })
}

fn first_unit(beds: &Cell) -> UnitBeds {
    let mut slots = blank();
    slots[0] = beds.clone();
    slots
}

/// Spread a listing's bedrooms over up to four unit columns.
///
/// Rules run in order: an explicit "<N> bedrooms in each unit" phrase, an
/// even split of the total, the configured fallback for multi-unit listings,
/// and finally the whole `beds` cell into unit 1 for single-unit listings.
pub fn distribute(
    beds: &Cell,
    num_units: u32,
    remarks: &str,
    fallback: BedroomFallback,
) -> (UnitBeds, BedroomRule) {
    if let Some(n) = explicit_per_unit(remarks) {
        return (fill(n, num_units), BedroomRule::ExplicitPerUnit);
    }
    if let Some(n) = even_split(whole_count(beds), num_units) {
        return (fill(n, num_units), BedroomRule::EvenSplit);
    }
    if num_units > 1 {
        let slots = match fallback {
            BedroomFallback::Unit1 => first_unit(beds),
            BedroomFallback::Blank => blank(),
        };
        return (slots, BedroomRule::Fallback);
    }
    (first_unit(beds), BedroomRule::SingleUnit)
}
