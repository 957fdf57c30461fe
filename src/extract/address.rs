use crate::listing::{value_as_text, ListingRecord};

/// Join street line, city, state and zip with ", ", skipping absent parts.
pub fn compose_address(listing: &ListingRecord) -> String {
    let street = listing.unwrapped("streetLine").and_then(value_as_text);

    [street, listing.text("city"), listing.text("state"), listing.text("zip")]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ")
}
