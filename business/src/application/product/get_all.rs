use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching catalog");
        let products = self.repository.get_all()?;
        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}
