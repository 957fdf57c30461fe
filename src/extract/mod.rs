//! Field extraction: one listing in, one flat deal record out.
//!
//! Every rule here is pure and total. Missing or oddly shaped input degrades to
//! an empty cell; nothing in this module returns an error.

pub mod address;
pub mod bedrooms;
pub mod parking;
pub mod property_type;
pub mod tax;
pub mod units;

pub use bedrooms::BedroomFallback;
pub use parking::Parking;
pub use tax::TaxFigures;

use tracing::debug;

use crate::constants::DEFAULT_MULTI_FAMILY_CODES;
use crate::listing::ListingRecord;
use crate::table::{Cell, DealRecord};

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// `uiPropertyType` codes that get unit inference.
    pub multi_family_codes: Vec<i64>,
    pub bedroom_fallback: BedroomFallback,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            multi_family_codes: DEFAULT_MULTI_FAMILY_CODES.to_vec(),
            bedroom_fallback: BedroomFallback::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FieldExtractor {
    options: ExtractOptions,
}

impl FieldExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn extract(&self, listing: &ListingRecord) -> DealRecord {
        let beds = Cell::from_json(listing.unwrapped("beds"));
        let num_units = units::infer_num_units(listing, &self.options.multi_family_codes);
        let (unit_beds, bed_rule) = bedrooms::distribute(
            &beds,
            num_units,
            listing.remarks(),
            self.options.bedroom_fallback,
        );
        debug!(num_units, ?bed_rule, "bedrooms distributed");

        DealRecord {
            address: address::compose_address(listing),
            zip_code: Cell::from_json(listing.field("zip")),
            days_on_market: Cell::from_json(listing.unwrapped("dom")),
            listing_summary: Cell::from_json(listing.field("listingRemarks")),
            url: Cell::from_json(listing.field("url")),
            asking_price: Cell::from_json(listing.unwrapped("price")),
            beds,
            baths: Cell::from_json(listing.unwrapped("baths")),
            square_feet: Cell::from_json(listing.unwrapped("sqFt")),
            year_built: Cell::from_json(listing.unwrapped("yearBuilt")),
            parking: parking::infer_parking(listing),
            property_type: property_type::map_property_type(listing),
            num_units,
            unit_beds,
            tax: tax::extract_tax_figures(listing),
        }
    }
}
