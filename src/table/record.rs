use serde_json::Value;

use super::columns::{Column, ColumnClass, Layout};
use crate::extract::bedrooms::UnitBeds;
use crate::extract::parking::Parking;
use crate::extract::tax::TaxFigures;

/// One output cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Text(String),
    Integer(i64),
    Decimal(f64),
}

impl Cell {
    /// Scalar JSON becomes a cell; null, objects and arrays become `Null`.
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(s)) if !s.is_empty() => Cell::Text(s.clone()),
            Some(Value::Number(n)) => match n.as_i64() {
                Some(i) => Cell::Integer(i),
                None => n.as_f64().map(Cell::Decimal).unwrap_or(Cell::Null),
            },
            Some(Value::Bool(b)) => Cell::Text(b.to_string()),
            _ => Cell::Null,
        }
    }

    pub fn text(value: Option<String>) -> Self {
        value.filter(|s| !s.is_empty()).map(Cell::Text).unwrap_or(Cell::Null)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// CSV field text; `Null` is an empty field.
    pub fn render(&self) -> String {
        match self {
            Cell::Null => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Integer(i) => i.to_string(),
            Cell::Decimal(d) => d.to_string(),
        }
    }
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        value.map(Cell::Decimal).unwrap_or(Cell::Null)
    }
}

/// The derived fields for one listing. Placeholder columns carry no data.
#[derive(Debug, Clone, PartialEq)]
pub struct DealRecord {
    pub address: String,
    pub zip_code: Cell,
    pub days_on_market: Cell,
    pub listing_summary: Cell,
    pub url: Cell,
    pub asking_price: Cell,
    pub beds: Cell,
    pub baths: Cell,
    pub square_feet: Cell,
    pub year_built: Cell,
    pub parking: Parking,
    pub property_type: Option<String>,
    pub num_units: u32,
    pub unit_beds: UnitBeds,
    pub tax: TaxFigures,
}

impl DealRecord {
    pub fn cell(&self, column: Column) -> Cell {
        if column.class() == ColumnClass::Placeholder {
            return Cell::Null;
        }
        match column {
            Column::Address => Cell::text(Some(self.address.clone())),
            Column::ZipCode => self.zip_code.clone(),
            Column::DaysOnMarket => self.days_on_market.clone(),
            Column::ListingSummary => self.listing_summary.clone(),
            Column::Url => self.url.clone(),
            Column::AskingPrice => self.asking_price.clone(),
            Column::Beds => self.beds.clone(),
            Column::Baths => self.baths.clone(),
            Column::SquareFeet => self.square_feet.clone(),
            Column::YearBuilt => self.year_built.clone(),
            Column::Parking => Cell::text(Some(self.parking.label().to_string())),
            Column::PropertyType => Cell::text(self.property_type.clone()),
            Column::NumUnits => Cell::Integer(self.num_units.into()),
            Column::Unit1Beds => self.unit_beds[0].clone(),
            Column::Unit2Beds => self.unit_beds[1].clone(),
            Column::Unit3Beds => self.unit_beds[2].clone(),
            Column::Unit4Beds => self.unit_beds[3].clone(),
            Column::Taxes => self.tax.taxes.into(),
            Column::LandAssessment => self.tax.land_assessment.into(),
            Column::AdditionsAssessment => self.tax.additions_assessment.into(),
            _ => Cell::Null,
        }
    }

    /// Cells in layout order; always exactly `layout.columns().len()` long.
    pub fn cells(&self, layout: Layout) -> Vec<Cell> {
        layout.columns().iter().map(|c| self.cell(*c)).collect()
    }

    pub fn to_row(&self, layout: Layout) -> Vec<String> {
        self.cells(layout).iter().map(Cell::render).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_from_json() {
        assert_eq!(Cell::from_json(Some(&json!(3))), Cell::Integer(3));
        assert_eq!(Cell::from_json(Some(&json!(2.5))), Cell::Decimal(2.5));
        assert_eq!(Cell::from_json(Some(&json!("78701"))), Cell::Text("78701".into()));
        assert_eq!(Cell::from_json(Some(&json!({"a": 1}))), Cell::Null);
        assert_eq!(Cell::from_json(Some(&json!([]))), Cell::Null);
        assert_eq!(Cell::from_json(None), Cell::Null);
    }

    #[test]
    fn test_render() {
        assert_eq!(Cell::Null.render(), "");
        assert_eq!(Cell::Decimal(4521.0).render(), "4521");
        assert_eq!(Cell::Decimal(1.5).render(), "1.5");
        assert_eq!(Cell::Integer(-3).render(), "-3");
    }
}
