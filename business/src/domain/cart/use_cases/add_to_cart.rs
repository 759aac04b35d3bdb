use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::product::value_objects::ProductId;

pub struct AddToCartParams {
    pub product_id: ProductId,
}

/// Looks the product up in the catalog and snapshots it into the cart.
pub trait AddToCartUseCase: Send + Sync {
    fn execute(&self, cart: &mut Cart, params: AddToCartParams) -> Result<(), CartError>;
}
