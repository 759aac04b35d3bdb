use std::sync::Arc;

use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::export::printable_catalog;
use crate::domain::product::query::{ProductFilter, filter_products};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::print_catalog::PrintCatalogUseCase;

pub struct PrintCatalogUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl PrintCatalogUseCase for PrintCatalogUseCaseImpl {
    fn execute(&self, filter: ProductFilter) -> Result<String, ProductError> {
        let products = self.repository.get_all()?;
        let filtered = filter_products(&products, &filter);

        self.logger.info(&format!(
            "Rendering printable catalog of {} products",
            filtered.len()
        ));

        Ok(printable_catalog(&filtered, Utc::now().date_naive()))
    }
}
