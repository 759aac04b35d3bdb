use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub trait GetAllProductsUseCase: Send + Sync {
    fn execute(&self) -> Result<Vec<Product>, ProductError>;
}
