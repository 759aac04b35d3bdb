use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use business::domain::product::value_objects::{Price, ProductId};

/// Fixture representation of a catalog entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub supplier: String,
    pub price: f64,
    pub quantity: u32,
    pub added_date: NaiveDate,
    pub image: Option<String>,
}

impl ProductRecord {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            ProductId::new(self.id),
            self.name,
            self.description,
            self.category,
            self.supplier,
            Price::new(self.price).unwrap_or_default(),
            self.quantity,
            self.added_date,
            self.image,
        )
    }
}
