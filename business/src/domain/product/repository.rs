use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductDraft};
use super::value_objects::ProductId;

pub trait ProductRepository: Send + Sync {
    /// Snapshot of the catalog in insertion order.
    fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    /// Stores a validated draft, assigning the next free id
    /// (max existing id + 1) and defaulting the added date to today.
    fn add(&self, draft: ProductDraft) -> Result<Product, RepositoryError>;
    fn update(&self, product: &Product) -> Result<(), RepositoryError>;
    fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
}
