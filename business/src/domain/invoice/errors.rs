#[derive(Debug, thiserror::Error)]
pub enum InvoiceError {
    #[error("invoice.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
