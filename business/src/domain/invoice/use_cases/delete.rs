use crate::domain::invoice::errors::InvoiceError;

pub struct DeleteInvoiceParams {
    pub id: String,
}

pub trait DeleteInvoiceUseCase: Send + Sync {
    fn execute(&self, params: DeleteInvoiceParams) -> Result<(), InvoiceError>;
}
