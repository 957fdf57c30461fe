use std::borrow::Cow;

use crate::constants::PROPERTY_TYPE_LABELS;
use crate::listing::ListingRecord;

/// Label for a `uiPropertyType` code; unknown codes come back as their number.
pub fn label_for(code: i64) -> Cow<'static, str> {
    PROPERTY_TYPE_LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| Cow::Borrowed(*label))
        .unwrap_or_else(|| Cow::Owned(code.to_string()))
}

/// Property type column value. A present but non-numeric code is passed through as text.
pub fn map_property_type(listing: &ListingRecord) -> Option<String> {
    match listing.property_code() {
        Some(code) => Some(label_for(code).into_owned()),
        None => listing.text("uiPropertyType"),
    }
}
