use chrono::NaiveDate;

use super::model::Invoice;

/// Criteria for browsing the sales history. Active predicates are AND'd.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceFilter {
    /// Case-insensitive substring match on the invoice code.
    pub search_text: Option<String>,
    /// Inclusive lower bound on the sale date.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the sale date.
    pub date_to: Option<NaiveDate>,
}

impl InvoiceFilter {
    pub fn matches(&self, invoice: &Invoice) -> bool {
        if let Some(text) = &self.search_text
            && !text.is_empty()
            && !invoice.id.to_lowercase().contains(&text.to_lowercase())
        {
            return false;
        }

        if let Some(from) = self.date_from
            && invoice.date < from
        {
            return false;
        }

        if let Some(to) = self.date_to
            && invoice.date > to
        {
            return false;
        }

        true
    }
}

/// Pure, order-preserving filter over the sales history.
pub fn filter_invoices(invoices: &[Invoice], filter: &InvoiceFilter) -> Vec<Invoice> {
    invoices
        .iter()
        .filter(|invoice| filter.matches(invoice))
        .cloned()
        .collect()
}
