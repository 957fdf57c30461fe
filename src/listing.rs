use serde_json::{Map, Value};

/// One scraped listing object, kept as untyped JSON.
///
/// Field shapes vary between scraper versions, so nothing here fails: every
/// accessor answers `None` (or an empty iterator) when the field is absent or
/// has a shape it does not understand.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRecord {
    data: Value,
}

/// A field that is either a raw scalar or a `{ "value": ... }` wrapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Missing,
    Scalar(&'a Value),
    Wrapped(&'a Value),
}

impl<'a> FieldValue<'a> {
    pub fn classify(raw: Option<&'a Value>) -> Self {
        match raw {
            None | Some(Value::Null) => FieldValue::Missing,
            Some(v) => match v.as_object().and_then(|map| map.get("value")) {
                Some(inner) => FieldValue::Wrapped(inner),
                None => FieldValue::Scalar(v),
            },
        }
    }

    /// The real value: the wrapped one if wrapped, the input otherwise.
    pub fn into_inner(self) -> Option<&'a Value> {
        match self {
            FieldValue::Missing => None,
            FieldValue::Scalar(v) | FieldValue::Wrapped(v) => {
                if v.is_null() {
                    None
                } else {
                    Some(v)
                }
            }
        }
    }
}

impl ListingRecord {
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.data.get(key).filter(|v| !v.is_null())
    }

    pub fn wrapped(&self, key: &str) -> FieldValue<'_> {
        FieldValue::classify(self.data.get(key))
    }

    /// Unwrapped value of a wrapped-or-scalar field.
    pub fn unwrapped(&self, key: &str) -> Option<&Value> {
        self.wrapped(key).into_inner()
    }

    /// Text of a scalar field; numbers are rendered (zip codes arrive both ways).
    pub fn text(&self, key: &str) -> Option<String> {
        self.field(key).and_then(value_as_text)
    }

    pub fn remarks(&self) -> &str {
        self.field("listingRemarks")
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }

    /// `uiPropertyType`, accepting integers and numeric strings.
    pub fn property_code(&self) -> Option<i64> {
        match self.field("uiPropertyType")? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Lower-cased `keyFacts[].description` strings.
    pub fn key_fact_descriptions(&self) -> Vec<String> {
        self.field("keyFacts")
            .and_then(|v| v.as_array())
            .map(|facts| {
                facts
                    .iter()
                    .filter_map(|f| f.get("description").and_then(|d| d.as_str()))
                    .map(|d| d.to_lowercase())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// `facts` groups as slices of name/value pairs.
    ///
    /// A group is either an array of pairs or an object holding them under `facts`.
    pub fn fact_groups(&self) -> Vec<&[Value]> {
        let Some(groups) = self.field("facts").and_then(|v| v.as_array()) else {
            return Vec::new();
        };
        groups
            .iter()
            .filter_map(|group| match group {
                Value::Array(pairs) => Some(pairs.as_slice()),
                Value::Object(obj) => obj
                    .get("facts")
                    .and_then(|f| f.as_array())
                    .map(|pairs| pairs.as_slice()),
                _ => None,
            })
            .collect()
    }

    pub fn tax_info(&self) -> Option<&Map<String, Value>> {
        self.field("taxInfo").and_then(|v| v.as_object())
    }
}

impl From<Value> for ListingRecord {
    fn from(data: Value) -> Self {
        Self::new(data)
    }
}

/// Render a scalar JSON value as text; empty strings and non-scalars yield `None`.
pub fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_wrapped_value() {
        let v = json!({"value": 350000});
        assert_eq!(FieldValue::classify(Some(&v)).into_inner(), Some(&json!(350000)));
    }

    #[test]
    fn test_unwrap_scalar_passes_through() {
        let v = json!(12);
        assert_eq!(FieldValue::classify(Some(&v)), FieldValue::Scalar(&v));
        assert_eq!(FieldValue::classify(Some(&v)).into_inner(), Some(&v));
    }

    #[test]
    fn test_unwrap_mapping_without_value_is_returned_unchanged() {
        let v = json!({"amount": 5});
        assert_eq!(FieldValue::classify(Some(&v)).into_inner(), Some(&v));
    }

    #[test]
    fn test_unwrap_null_and_missing() {
        assert_eq!(FieldValue::classify(None), FieldValue::Missing);
        assert_eq!(FieldValue::classify(Some(&Value::Null)).into_inner(), None);
        let wrapped_null = json!({"value": null});
        assert_eq!(FieldValue::classify(Some(&wrapped_null)).into_inner(), None);
    }

    #[test]
    fn test_property_code_accepts_numeric_string() {
        let listing = ListingRecord::new(json!({"uiPropertyType": "4"}));
        assert_eq!(listing.property_code(), Some(4));
        let listing = ListingRecord::new(json!({"uiPropertyType": "condo"}));
        assert_eq!(listing.property_code(), None);
    }

    #[test]
    fn test_fact_groups_accepts_both_shapes() {
        let listing = ListingRecord::new(json!({
            "facts": [
                [{"factName": "Taxes", "factValue": "$100"}],
                {"facts": [{"factName": "Land Value", "factValue": "$5"}]},
                "garbage"
            ]
        }));
        let groups = listing.fact_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1][0]["factName"], "Land Value");
    }

    #[test]
    fn test_wrong_shapes_degrade_quietly() {
        let listing = ListingRecord::new(json!({
            "keyFacts": "not a list",
            "facts": {"oops": true},
            "taxInfo": [1, 2],
            "listingRemarks": 42
        }));
        assert!(listing.key_fact_descriptions().is_empty());
        assert!(listing.fact_groups().is_empty());
        assert!(listing.tax_info().is_none());
        assert_eq!(listing.remarks(), "");
    }
}
