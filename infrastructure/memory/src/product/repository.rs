use std::sync::Mutex;

use chrono::Utc;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductDraft};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

/// Process-lifetime catalog store. One instance is owned per UI session;
/// everything is lost when the session ends.
pub struct ProductRepositoryInMemory {
    products: Mutex<Vec<Product>>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            products: Mutex::new(Vec::new()),
        }
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
        }
    }
}

impl Default for ProductRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductRepository for ProductRepositoryInMemory {
    fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self
            .products
            .lock()
            .map_err(|_| RepositoryError::persistence())?;
        Ok(products.clone())
    }

    fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let products = self
            .products
            .lock()
            .map_err(|_| RepositoryError::persistence())?;
        products
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    fn add(&self, draft: ProductDraft) -> Result<Product, RepositoryError> {
        let mut products = self
            .products
            .lock()
            .map_err(|_| RepositoryError::persistence())?;

        // Ids are never reused: the next id tops the highest one still
        // present, ignoring gaps left by deletes.
        let next_id = products
            .iter()
            .map(|product| product.id.value())
            .max()
            .unwrap_or(0)
            + 1;
        let added_date = draft
            .added_date
            .unwrap_or_else(|| Utc::now().date_naive());

        let product = draft.into_product(ProductId::new(next_id), added_date);
        products.push(product.clone());
        Ok(product)
    }

    fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut products = self
            .products
            .lock()
            .map_err(|_| RepositoryError::persistence())?;
        let slot = products
            .iter_mut()
            .find(|stored| stored.id == product.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = product.clone();
        Ok(())
    }

    fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let mut products = self
            .products
            .lock()
            .map_err(|_| RepositoryError::persistence())?;
        let index = products
            .iter()
            .position(|product| product.id == id)
            .ok_or(RepositoryError::NotFound)?;
        products.remove(index);
        Ok(())
    }
}
