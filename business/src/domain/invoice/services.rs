use super::model::Invoice;

/// Aggregate figures for a set of invoices, shown on the history dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSummary {
    pub invoice_count: usize,
    pub total_amount: f64,
    pub total_items: u32,
}

pub fn summarize(invoices: &[Invoice]) -> SalesSummary {
    SalesSummary {
        invoice_count: invoices.len(),
        total_amount: invoices.iter().map(|invoice| invoice.total).sum(),
        total_items: invoices.iter().map(|invoice| invoice.total_items()).sum(),
    }
}
