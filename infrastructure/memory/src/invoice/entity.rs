use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use business::domain::invoice::model::{Invoice, SaleLine};
use business::domain::product::value_objects::{Price, ProductId};

#[derive(Debug, Serialize, Deserialize)]
pub struct SaleLineRecord {
    pub product_id: u32,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub category: String,
}

impl SaleLineRecord {
    pub fn into_domain(self) -> SaleLine {
        SaleLine {
            product_id: ProductId::new(self.product_id),
            name: self.name,
            quantity: self.quantity,
            unit_price: Price::new(self.unit_price).unwrap_or_default(),
            category: self.category,
        }
    }
}

/// Fixture representation of a historical sale.
#[derive(Debug, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub id: String,
    pub date: NaiveDate,
    pub lines: Vec<SaleLineRecord>,
    pub total: f64,
}

impl InvoiceRecord {
    pub fn into_domain(self) -> Invoice {
        Invoice::from_repository(
            self.id,
            self.date,
            self.lines
                .into_iter()
                .map(|line| line.into_domain())
                .collect(),
            self.total,
        )
    }
}
