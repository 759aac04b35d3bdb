use std::collections::HashSet;

use chrono::NaiveDate;

use crate::domain::product::value_objects::{Price, ProductId};

/// One product line on a past sale.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Price,
    pub category: String,
}

/// Immutable historical sale record. The only mutation the history supports
/// is deleting a whole record.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: String,
    pub date: NaiveDate,
    pub lines: Vec<SaleLine>,
    pub total: f64,
}

impl Invoice {
    pub fn from_repository(id: String, date: NaiveDate, lines: Vec<SaleLine>, total: f64) -> Self {
        Self {
            id,
            date,
            lines,
            total,
        }
    }

    /// Sum of the quantities sold across all lines.
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Number of distinct product categories on the invoice.
    pub fn category_count(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.category.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}
