use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product, ProductDraft};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl CreateProductUseCase for CreateProductUseCaseImpl {
    fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let draft = ProductDraft::new(NewProductProps {
            name: params.name,
            description: params.description,
            category: params.category,
            supplier: params.supplier,
            price: params.price,
            quantity: params.quantity,
            added_date: None,
            image: params.image,
        })?;

        let product = self.repository.add(draft)?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
