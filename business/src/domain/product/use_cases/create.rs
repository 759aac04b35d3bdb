use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct CreateProductParams {
    pub name: String,
    pub description: String,
    pub category: String,
    pub supplier: String,
    pub price: String,
    pub quantity: String,
    pub image: Option<String>,
}

pub trait CreateProductUseCase: Send + Sync {
    fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
