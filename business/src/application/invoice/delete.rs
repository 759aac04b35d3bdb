use std::sync::Arc;

use crate::domain::errors::RepositoryError;
use crate::domain::invoice::errors::InvoiceError;
use crate::domain::invoice::repository::InvoiceRepository;
use crate::domain::invoice::use_cases::delete::{DeleteInvoiceParams, DeleteInvoiceUseCase};
use crate::domain::logger::Logger;

pub struct DeleteInvoiceUseCaseImpl {
    pub repository: Arc<dyn InvoiceRepository>,
    pub logger: Arc<dyn Logger>,
}

impl DeleteInvoiceUseCase for DeleteInvoiceUseCaseImpl {
    fn execute(&self, params: DeleteInvoiceParams) -> Result<(), InvoiceError> {
        self.logger
            .info(&format!("Deleting invoice: {}", params.id));

        self.repository.delete(&params.id).map_err(|e| match e {
            RepositoryError::NotFound => InvoiceError::NotFound,
            other => InvoiceError::Repository(other),
        })?;

        self.logger
            .info(&format!("Invoice deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::invoice::model::Invoice;
    use mockall::mock;

    mock! {
        pub InvoiceRepo {}

        impl InvoiceRepository for InvoiceRepo {
            fn get_all(&self) -> Result<Vec<Invoice>, RepositoryError>;
            fn delete(&self, id: &str) -> Result<(), RepositoryError>;
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

    #[test]
    fn should_delete_invoice_when_it_exists() {
        let mut mock_repo = MockInvoiceRepo::new();
        mock_repo.expect_delete().returning(|_| Ok(()));

        let use_case = DeleteInvoiceUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteInvoiceParams {
            id: "FACT-001".to_string(),
        });
        assert!(result.is_ok());
    }

    #[test]
    fn should_return_not_found_for_unknown_invoice() {
        let mut mock_repo = MockInvoiceRepo::new();
        mock_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteInvoiceUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteInvoiceParams {
            id: "FACT-999".to_string(),
        });
        assert!(matches!(result.unwrap_err(), InvoiceError::NotFound));
    }
}
