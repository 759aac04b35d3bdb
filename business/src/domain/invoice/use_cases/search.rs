use crate::domain::invoice::errors::InvoiceError;
use crate::domain::invoice::model::Invoice;
use crate::domain::invoice::query::InvoiceFilter;

/// Browses the sales history; an empty filter returns every invoice.
pub trait SearchInvoicesUseCase: Send + Sync {
    fn execute(&self, filter: InvoiceFilter) -> Result<Vec<Invoice>, InvoiceError>;
}
