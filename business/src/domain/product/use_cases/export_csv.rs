use crate::domain::product::errors::ProductError;
use crate::domain::product::query::ProductFilter;

/// CSV text plus the download name the export collaborator should use.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

pub trait ExportCatalogCsvUseCase: Send + Sync {
    fn execute(&self, filter: ProductFilter) -> Result<CsvExport, ProductError>;
}
