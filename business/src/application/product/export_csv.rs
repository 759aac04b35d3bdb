use std::sync::Arc;

use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::export::{catalog_csv, csv_filename};
use crate::domain::product::query::{ProductFilter, filter_products};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::export_csv::{CsvExport, ExportCatalogCsvUseCase};

pub struct ExportCatalogCsvUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl ExportCatalogCsvUseCase for ExportCatalogCsvUseCaseImpl {
    fn execute(&self, filter: ProductFilter) -> Result<CsvExport, ProductError> {
        let products = self.repository.get_all()?;
        let filtered = filter_products(&products, &filter);

        self.logger
            .info(&format!("Exporting {} products to CSV", filtered.len()));

        Ok(CsvExport {
            filename: csv_filename(Utc::now().date_naive()),
            content: catalog_csv(&filtered),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{Product, ProductDraft};
    use crate::domain::product::value_objects::{Price, ProductId};
    use chrono::NaiveDate;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        impl ProductRepository for ProductRepo {
            fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
            fn add(&self, draft: ProductDraft) -> Result<Product, RepositoryError>;
            fn update(&self, product: &Product) -> Result<(), RepositoryError>;
            fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product(id: u32, name: &str, category: &str) -> Product {
        Product::from_repository(
            ProductId::new(id),
            name.to_string(),
            "Description".to_string(),
            category.to_string(),
            "TechDistrib".to_string(),
            Price::new(25.99).unwrap(),
            50,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            None,
        )
    }

    #[test]
    fn should_export_filtered_catalog_with_dated_filename() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                product(1, "Produit A", "Électronique"),
                product(2, "Produit B", "Vêtements"),
            ])
        });

        let use_case = ExportCatalogCsvUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let export = use_case
            .execute(ProductFilter {
                category: Some("Électronique".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert!(export.filename.starts_with("produits_"));
        assert!(export.filename.ends_with(".csv"));
        assert_eq!(export.content.lines().count(), 2);
        assert!(export.content.contains("\"Produit A\""));
        assert!(!export.content.contains("\"Produit B\""));
    }
}
