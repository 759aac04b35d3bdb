use std::sync::Arc;

use crate::domain::invoice::errors::InvoiceError;
use crate::domain::invoice::model::Invoice;
use crate::domain::invoice::query::{InvoiceFilter, filter_invoices};
use crate::domain::invoice::repository::InvoiceRepository;
use crate::domain::invoice::use_cases::search::SearchInvoicesUseCase;
use crate::domain::logger::Logger;

pub struct SearchInvoicesUseCaseImpl {
    pub repository: Arc<dyn InvoiceRepository>,
    pub logger: Arc<dyn Logger>,
}

impl SearchInvoicesUseCase for SearchInvoicesUseCaseImpl {
    fn execute(&self, filter: InvoiceFilter) -> Result<Vec<Invoice>, InvoiceError> {
        let invoices = self.repository.get_all()?;
        let results = filter_invoices(&invoices, &filter);
        self.logger.debug(&format!(
            "History search matched {} of {} invoices",
            results.len(),
            invoices.len()
        ));
        Ok(results)
    }
}
