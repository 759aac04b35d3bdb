use std::sync::Arc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::add_to_cart::{AddToCartParams, AddToCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddToCartUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl AddToCartUseCase for AddToCartUseCaseImpl {
    fn execute(&self, cart: &mut Cart, params: AddToCartParams) -> Result<(), CartError> {
        let product = self
            .repository
            .get_by_id(params.product_id)
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        cart.add_item(&product);

        self.logger.info(&format!(
            "Added product {} to cart ({} items)",
            product.id,
            cart.total_items()
        ));
        Ok(())
    }
}
