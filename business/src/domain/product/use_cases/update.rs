use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

/// Full replacement of the mutable fields; the caller supplies the complete
/// current record merged with its edits. Numeric fields arrive as raw input.
pub struct UpdateProductParams {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub supplier: String,
    pub price: String,
    pub quantity: String,
    pub image: Option<String>,
}

pub trait UpdateProductUseCase: Send + Sync {
    fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
