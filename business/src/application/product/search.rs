use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::query::{ProductFilter, filter_products};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::search::SearchProductsUseCase;

pub struct SearchProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    fn execute(&self, filter: ProductFilter) -> Result<Vec<Product>, ProductError> {
        let products = self.repository.get_all()?;
        let results = filter_products(&products, &filter);
        self.logger.debug(&format!(
            "Search matched {} of {} products",
            results.len(),
            products.len()
        ));
        Ok(results)
    }
}
