use std::sync::Arc;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product, ProductDraft};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

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

        // Verify product exists; id and added date stay as created.
        let existing = self.repository.get_by_id(params.id).map_err(|e| match e {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        })?;

        let updated_product = draft.into_product(existing.id, existing.added_date);
        self.repository.update(&updated_product)?;

        self.logger
            .info(&format!("Product updated: {}", updated_product.id));
        Ok(updated_product)
    }
}
