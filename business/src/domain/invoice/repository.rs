use crate::domain::errors::RepositoryError;

use super::model::Invoice;

pub trait InvoiceRepository: Send + Sync {
    /// Sales history, oldest first.
    fn get_all(&self) -> Result<Vec<Invoice>, RepositoryError>;
    fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}
