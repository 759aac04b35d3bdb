use std::sync::Mutex;

use business::domain::errors::RepositoryError;
use business::domain::invoice::model::Invoice;
use business::domain::invoice::repository::InvoiceRepository;

/// Process-lifetime sales history. Records are immutable; the only supported
/// mutation is deleting a whole invoice.
pub struct InvoiceRepositoryInMemory {
    invoices: Mutex<Vec<Invoice>>,
}

impl InvoiceRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            invoices: Mutex::new(Vec::new()),
        }
    }

    pub fn with_invoices(invoices: Vec<Invoice>) -> Self {
        Self {
            invoices: Mutex::new(invoices),
        }
    }
}

impl Default for InvoiceRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceRepository for InvoiceRepositoryInMemory {
    fn get_all(&self) -> Result<Vec<Invoice>, RepositoryError> {
        let invoices = self
            .invoices
            .lock()
            .map_err(|_| RepositoryError::persistence())?;
        Ok(invoices.clone())
    }

    fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let mut invoices = self
            .invoices
            .lock()
            .map_err(|_| RepositoryError::persistence())?;
        let index = invoices
            .iter()
            .position(|invoice| invoice.id == id)
            .ok_or(RepositoryError::NotFound)?;
        invoices.remove(index);
        Ok(())
    }
}
