use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::ProductId;

pub struct DeleteProductParams {
    pub id: ProductId,
}

/// Unconditional removal. Asking the user for confirmation is the
/// presentation layer's responsibility.
pub trait DeleteProductUseCase: Send + Sync {
    fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
}
