use tracing::debug;

use business::domain::invoice::model::Invoice;
use business::domain::product::model::Product;

use crate::invoice::entity::InvoiceRecord;
use crate::product::entity::ProductRecord;

const CATALOG_FIXTURE: &str = include_str!("../fixtures/catalog.json");
const INVOICES_FIXTURE: &str = include_str!("../fixtures/invoices.json");

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("seed.malformed_fixture")]
    MalformedFixture(#[from] serde_json::Error),
}

/// Demo catalog bundled with the application.
pub fn demo_catalog() -> Result<Vec<Product>, SeedError> {
    let records: Vec<ProductRecord> = serde_json::from_str(CATALOG_FIXTURE)?;
    let products: Vec<Product> = records.into_iter().map(|r| r.into_domain()).collect();
    debug!(target: "Catalog -- ", "Loaded {} seed products", products.len());
    Ok(products)
}

/// Demo sales history bundled with the application.
pub fn demo_invoices() -> Result<Vec<Invoice>, SeedError> {
    let records: Vec<InvoiceRecord> = serde_json::from_str(INVOICES_FIXTURE)?;
    let invoices: Vec<Invoice> = records.into_iter().map(|r| r.into_domain()).collect();
    debug!(target: "Catalog -- ", "Loaded {} seed invoices", invoices.len());
    Ok(invoices)
}
