use serde_json::Value;
use tracing::debug;

use crate::listing::{FieldValue, ListingRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxField {
    Taxes,
    LandAssessment,
    AdditionsAssessment,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TaxFigures {
    pub taxes: Option<f64>,
    pub land_assessment: Option<f64>,
    pub additions_assessment: Option<f64>,
}

impl TaxFigures {
    fn slot(&mut self, field: TaxField) -> &mut Option<f64> {
        match field {
            TaxField::Taxes => &mut self.taxes,
            TaxField::LandAssessment => &mut self.land_assessment,
            TaxField::AdditionsAssessment => &mut self.additions_assessment,
        }
    }

    /// Overwrite `field` with a parsed value; `None` leaves it as it was.
    fn set(&mut self, field: TaxField, value: Option<f64>) -> bool {
        match value {
            Some(v) => {
                *self.slot(field) = Some(v);
                true
            }
            None => false,
        }
    }

    /// Set `field` unless it already holds a value.
    fn fill(&mut self, field: TaxField, value: Option<f64>) -> bool {
        let slot = self.slot(field);
        if slot.is_none() && value.is_some() {
            *slot = value;
            true
        } else {
            false
        }
    }

    pub fn is_complete(&self) -> bool {
        self.taxes.is_some() && self.land_assessment.is_some() && self.additions_assessment.is_some()
    }
}

/// A label rule over lower-cased fact names.
#[derive(Debug)]
pub struct LabelRule {
    pub field: TaxField,
    pub any_of: &'static [&'static str],
    pub none_of: &'static [&'static str],
}

impl LabelRule {
    pub fn matches(&self, lowered: &str) -> bool {
        self.any_of.iter().any(|n| lowered.contains(n))
            && !self.none_of.iter().any(|n| lowered.contains(n))
    }
}

/// Checked in order; the first matching rule decides, so any "tax" label that
/// is not a tax year counts as taxes.
pub const LABEL_RULES: &[LabelRule] = &[
    LabelRule {
        field: TaxField::Taxes,
        any_of: &["tax"],
        none_of: &["year"],
    },
    LabelRule {
        field: TaxField::LandAssessment,
        any_of: &["assessed value", "land value"],
        none_of: &[],
    },
    LabelRule {
        field: TaxField::AdditionsAssessment,
        any_of: &["improvement value", "building value"],
        none_of: &[],
    },
];

/// `taxInfo` keys used to fill gaps left by the fact scan.
pub const TAX_INFO_KEYS: &[(TaxField, &str)] = &[
    (TaxField::Taxes, "taxesDue"),
    (TaxField::LandAssessment, "landAssessedValue"),
    (TaxField::AdditionsAssessment, "additionsAssessedValue"),
];

pub fn classify_label(label: &str) -> Option<TaxField> {
    let lowered = label.to_lowercase();
    LABEL_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.field)
}

/// Parse "$4,521" style amounts. Anything non-numeric yields `None`.
pub fn parse_dollars(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Dollar amount from a JSON value: numbers as-is, strings via [`parse_dollars`].
pub fn dollar_value(value: &Value) -> Option<f64> {
    match FieldValue::classify(Some(value)).into_inner()? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_dollars(s),
        _ => None,
    }
}

fn fact_label(fact: &Value) -> Option<&str> {
    fact.get("factName")
        .or_else(|| fact.get("name"))
        .and_then(|v| v.as_str())
}

fn fact_value(fact: &Value) -> Option<&Value> {
    fact.get("factValue").or_else(|| fact.get("value"))
}

/// Facts first, then `taxInfo` for whatever is still missing. Within the fact
/// scan a later parseable fact replaces an earlier one.
pub fn extract_tax_figures(listing: &ListingRecord) -> TaxFigures {
    let mut figures = TaxFigures::default();

    for group in listing.fact_groups() {
        for fact in group {
            let Some(label) = fact_label(fact) else {
                continue;
            };
            let Some(field) = classify_label(label) else {
                continue;
            };
            let value = fact_value(fact).and_then(dollar_value);
            if figures.set(field, value) {
                debug!(label, ?field, "tax figure from facts");
            }
        }
    }

    if !figures.is_complete() {
        if let Some(info) = listing.tax_info() {
            for (field, key) in TAX_INFO_KEYS {
                let value = info.get(*key).and_then(dollar_value);
                if figures.fill(*field, value) {
                    debug!(key = *key, ?field, "tax figure from taxInfo");
                }
            }
        }
    }

    figures
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn with_facts(pairs: Value) -> ListingRecord {
        ListingRecord::new(json!({"facts": [pairs]}))
    }

    #[test]
    fn test_parse_dollars() {
        assert_eq!(parse_dollars("$4,521"), Some(4521.0));
        assert_eq!(parse_dollars(" $1,234.50 "), Some(1234.5));
        assert_eq!(parse_dollars("N/A"), None);
        assert_eq!(parse_dollars(""), None);
        assert_eq!(parse_dollars("$"), None);
        assert_eq!(parse_dollars("inf"), None);
    }

    #[test]
    fn test_annual_tax_amount() {
        let listing = with_facts(json!([{"factName": "Annual Tax Amount", "factValue": "$4,521"}]));
        assert_eq!(extract_tax_figures(&listing).taxes, Some(4521.0));
    }

    #[test]
    fn test_unparseable_tax_is_null() {
        let listing = with_facts(json!([{"factName": "Annual Tax Amount", "factValue": "N/A"}]));
        assert_eq!(extract_tax_figures(&listing).taxes, None);
    }

    #[test]
    fn test_tax_year_is_ignored() {
        let listing = with_facts(json!([
            {"factName": "Tax Year", "factValue": "2023"},
            {"factName": "Taxes", "factValue": "$3,000"}
        ]));
        assert_eq!(extract_tax_figures(&listing).taxes, Some(3000.0));
    }

    #[test]
    fn test_assessment_labels() {
        assert_eq!(classify_label("Land Value"), Some(TaxField::LandAssessment));
        assert_eq!(classify_label("Assessed Value"), Some(TaxField::LandAssessment));
        assert_eq!(classify_label("Tax Assessed Value"), Some(TaxField::Taxes));
        assert_eq!(classify_label("Improvement Value"), Some(TaxField::AdditionsAssessment));
        assert_eq!(classify_label("Building Value"), Some(TaxField::AdditionsAssessment));
        assert_eq!(classify_label("Tax Year"), None);
        assert_eq!(classify_label("Lot Size"), None);
    }

    #[test]
    fn test_tax_assessed_value_counts_as_taxes() {
        let listing = with_facts(json!([
            {"factName": "Tax Assessed Value", "factValue": "$250,000"}
        ]));
        let figures = extract_tax_figures(&listing);
        assert_eq!(figures.taxes, Some(250000.0));
        assert_eq!(figures.land_assessment, None);
    }

    #[test]
    fn test_later_fact_wins() {
        let listing = with_facts(json!([
            {"factName": "Taxes", "factValue": "$1,000"},
            {"factName": "County Tax", "factValue": "$2,000"}
        ]));
        assert_eq!(extract_tax_figures(&listing).taxes, Some(2000.0));
    }

    #[test]
    fn test_unparseable_later_fact_keeps_earlier_value() {
        let listing = with_facts(json!([
            {"factName": "Taxes", "factValue": "$1,000"},
            {"factName": "Tax Notes", "factValue": "see county site"}
        ]));
        assert_eq!(extract_tax_figures(&listing).taxes, Some(1000.0));
    }

    #[test]
    fn test_tax_info_only_fills_gaps() {
        let listing = ListingRecord::new(json!({
            "facts": [[
                {"factName": "Taxes", "factValue": "$1,500"},
                {"factName": "Land Value", "factValue": "$40,000"}
            ]],
            "taxInfo": {
                "taxesDue": 9999,
                "landAssessedValue": 1,
                "additionsAssessedValue": "$120,000"
            }
        }));
        let figures = extract_tax_figures(&listing);
        assert_eq!(figures.taxes, Some(1500.0));
        assert_eq!(figures.land_assessment, Some(40000.0));
        assert_eq!(figures.additions_assessment, Some(120000.0));
    }

    #[test]
    fn test_tax_info_alone() {
        let listing = ListingRecord::new(json!({
            "taxInfo": {"taxesDue": 2100.5, "landAssessedValue": {"value": 50000}}
        }));
        let figures = extract_tax_figures(&listing);
        assert_eq!(figures.taxes, Some(2100.5));
        assert_eq!(figures.land_assessment, Some(50000.0));
        assert_eq!(figures.additions_assessment, None);
    }

    #[test]
    fn test_grouped_object_shape() {
        let listing = ListingRecord::new(json!({
            "facts": [{"facts": [{"name": "Building Value", "value": "$75,000"}]}]
        }));
        assert_eq!(extract_tax_figures(&listing).additions_assessment, Some(75000.0));
    }
}
