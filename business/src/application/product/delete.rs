use std::sync::Arc;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        self.repository.delete(params.id).map_err(|e| match e {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        })?;

        self.logger
            .info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}
