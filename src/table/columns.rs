//! Output column catalog and the two spreadsheet layouts.
//!
//! Derived columns are computed from the listing. Placeholder columns are
//! always written blank; the spreadsheet fills them in by hand or by formula.

use clap::ValueEnum;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnClass {
    Derived,
    Placeholder,
}

impl ColumnClass {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnClass::Derived => "derived",
            ColumnClass::Placeholder => "placeholder",
        }
    }
}

macro_rules! columns {
    ($($variant:ident => $name:literal, $class:ident;)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Column {
            $($variant),*
        }

        impl Column {
            pub const ALL: &'static [Column] = &[$(Column::$variant),*];

            pub fn name(self) -> &'static str {
                match self {
                    $(Column::$variant => $name),*
                }
            }

            pub fn class(self) -> ColumnClass {
                match self {
                    $(Column::$variant => ColumnClass::$class),*
                }
            }
        }
    };
}

columns! {
    Address => "address", Derived;
    ZipCode => "zip_code", Derived;
    Area => "area", Placeholder;
    DaysOnMarket => "days_on_market", Derived;
    ListingSummary => "listing_summary", Derived;
    Url => "url", Derived;
    AskingPrice => "asking_price", Derived;
    Beds => "beds", Derived;
    Baths => "baths", Derived;
    SquareFeet => "square_feet", Derived;
    YearBuilt => "year_built", Derived;
    Parking => "parking", Derived;
    PropertyType => "property_type", Derived;
    Stories => "stories", Placeholder;
    NumUnits => "num_units", Derived;
    RentToOwn => "rent_to_own", Placeholder;
    Unit1Beds => "unit_1_beds", Derived;
    Unit2Beds => "unit_2_beds", Derived;
    Unit3Beds => "unit_3_beds", Derived;
    Unit4Beds => "unit_4_beds", Derived;
    RatioSfPerBed => "ratio_sf_per_bed", Placeholder;
    RentUnit1 => "rent_unit_1", Placeholder;
    RentUnit2 => "rent_unit_2", Placeholder;
    RentUnit3 => "rent_unit_3", Placeholder;
    RentUnit4 => "rent_unit_4", Placeholder;
    OtherRevenue => "other_revenue", Placeholder;
    TotalMonthlyRevenue => "total_monthly_revenue", Placeholder;
    Taxes => "taxes", Derived;
    LandAssessment => "land_assessment", Derived;
    AdditionsAssessment => "additions_assessment", Derived;
    Insurance => "insurance", Placeholder;
    Maintenance => "maintenance", Placeholder;
    Vacancy => "vacancy", Placeholder;
    Management => "management", Placeholder;
    MiscExp => "misc_exp", Placeholder;
    UtilCost => "util_cost", Placeholder;
    Electric => "electric", Placeholder;
    Lawn => "lawn", Placeholder;
    TotalExpenses => "total_expenses", Placeholder;
    Ratio => "ratio", Placeholder;
    Financing => "financing", Placeholder;
    AskingPrice1 => "asking_price_1", Placeholder;
    Condition => "condition", Placeholder;
    WeightMarket1 => "weight_market_1", Placeholder;
    AskingPrice2 => "asking_price_2", Placeholder;
    Condition2 => "condition_2", Placeholder;
    WeightMarket2 => "weight_market_2", Placeholder;
    AskingPrice3 => "asking_price_3", Placeholder;
    Condition3 => "condition_3", Placeholder;
}

/// Quick-import sheet, 21 columns.
const MINIMAL: &[Column] = &[
    Column::Address,
    Column::ZipCode,
    Column::DaysOnMarket,
    Column::ListingSummary,
    Column::Url,
    Column::AskingPrice,
    Column::Beds,
    Column::Baths,
    Column::SquareFeet,
    Column::YearBuilt,
    Column::Parking,
    Column::PropertyType,
    Column::NumUnits,
    Column::Unit1Beds,
    Column::Unit2Beds,
    Column::Unit3Beds,
    Column::Unit4Beds,
    Column::TotalMonthlyRevenue,
    Column::Taxes,
    Column::LandAssessment,
    Column::AdditionsAssessment,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Minimal,
    /// Full deal-analysis sheet.
    #[default]
    Extended,
}

impl Layout {
    pub fn columns(self) -> &'static [Column] {
        match self {
            Layout::Minimal => MINIMAL,
            Layout::Extended => Column::ALL,
        }
    }

    pub fn headers(self) -> Vec<&'static str> {
        self.columns().iter().map(|c| c.name()).collect()
    }
}
