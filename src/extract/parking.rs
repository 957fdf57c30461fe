use tracing::debug;

use crate::listing::ListingRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parking {
    Garage,
    Carport,
    OnStreet,
    /// Only the free-text remarks mention a garage.
    GarageFromRemarks,
    Unknown,
}

impl Parking {
    pub fn label(self) -> &'static str {
        match self {
            Parking::Garage => "Garage",
            Parking::Carport => "Carport",
            Parking::OnStreet => "On Street",
            Parking::GarageFromRemarks => "Garage (from remarks)",
            Parking::Unknown => "",
        }
    }
}

/// A keyword rule: matches when any needle occurs in the lower-cased text.
#[derive(Debug)]
pub struct ParkingRule {
    pub parking: Parking,
    pub needles: &'static [&'static str],
}

impl ParkingRule {
    pub fn matches(&self, lowered: &str) -> bool {
        self.needles.iter().any(|n| lowered.contains(n))
    }
}

/// Rules over `keyFacts` descriptions, highest priority first.
pub const KEY_FACT_RULES: &[ParkingRule] = &[
    ParkingRule { parking: Parking::Garage, needles: &["garage"] },
    ParkingRule { parking: Parking::Carport, needles: &["carport"] },
    ParkingRule { parking: Parking::OnStreet, needles: &["on street", "street"] },
];

/// Consulted only when no key fact matched.
pub const REMARKS_RULE: ParkingRule = ParkingRule {
    parking: Parking::GarageFromRemarks,
    needles: &["garage"],
};

pub fn infer_parking(listing: &ListingRecord) -> Parking {
    let descriptions = listing.key_fact_descriptions();

    for rule in KEY_FACT_RULES {
        if descriptions.iter().any(|d| rule.matches(d)) {
            return rule.parking;
        }
    }

    if REMARKS_RULE.matches(&listing.remarks().to_lowercase()) {
        debug!("parking inferred from remarks only");
        return REMARKS_RULE.parking;
    }

    Parking::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listing_with(facts: &[&str], remarks: &str) -> ListingRecord {
        let key_facts: Vec<_> = facts.iter().map(|d| json!({"description": d})).collect();
        ListingRecord::new(json!({"keyFacts": key_facts, "listingRemarks": remarks}))
    }

    #[test]
    fn test_structured_garage_beats_remarks() {
        let listing = listing_with(&["2-car garage"], "Huge GARAGE out back");
        assert_eq!(infer_parking(&listing), Parking::Garage);
        assert_eq!(infer_parking(&listing).label(), "Garage");
    }

    #[test]
    fn test_garage_wins_over_earlier_carport_fact() {
        let listing = listing_with(&["Carport", "Detached Garage"], "");
        assert_eq!(infer_parking(&listing), Parking::Garage);
    }

    #[test]
    fn test_carport_beats_street() {
        let listing = listing_with(&["Street parking", "carport"], "");
        assert_eq!(infer_parking(&listing), Parking::Carport);
    }

    #[test]
    fn test_on_street() {
        assert_eq!(infer_parking(&listing_with(&["On Street"], "")), Parking::OnStreet);
        assert_eq!(infer_parking(&listing_with(&["Streetside"], "")), Parking::OnStreet);
    }

    #[test]
    fn test_remarks_fallback_is_distinct() {
        let listing = listing_with(&["Central air"], "Oversized garage with workshop");
        let parking = infer_parking(&listing);
        assert_eq!(parking, Parking::GarageFromRemarks);
        assert_eq!(parking.label(), "Garage (from remarks)");
    }

    #[test]
    fn test_nothing_matches() {
        assert_eq!(infer_parking(&listing_with(&[], "Sunny lot")), Parking::Unknown);
        assert_eq!(infer_parking(&ListingRecord::new(json!({}))).label(), "");
    }

    #[test]
    fn test_remarks_rule_is_not_consulted_for_carport() {
        let listing = listing_with(&[], "carport in back");
        assert_eq!(infer_parking(&listing), Parking::Unknown);
    }
}
