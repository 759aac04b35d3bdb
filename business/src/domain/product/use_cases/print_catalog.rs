use crate::domain::product::errors::ProductError;
use crate::domain::product::query::ProductFilter;

/// Produces the printable catalog document handed to the print target.
pub trait PrintCatalogUseCase: Send + Sync {
    fn execute(&self, filter: ProductFilter) -> Result<String, ProductError>;
}
