use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::query::ProductFilter;

pub trait SearchProductsUseCase: Send + Sync {
    fn execute(&self, filter: ProductFilter) -> Result<Vec<Product>, ProductError>;
}
