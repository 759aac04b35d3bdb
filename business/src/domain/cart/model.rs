use crate::domain::product::model::Product;
use crate::domain::product::value_objects::{Price, ProductId};

/// One selected product in the cart. The fields are copied from the catalog
/// when the line is created, so later catalog edits never change an existing
/// line or its subtotal.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub supplier: String,
    pub price: Price,
    pub image: Option<String>,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.price.amount() * f64::from(self.quantity)
    }
}

/// Per-session shopping cart, keyed by product id.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Increments the line for this product, or snapshots a new line with
    /// quantity 1 on first add.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            line.quantity += 1;
            return;
        }

        self.lines.push(CartLine {
            product_id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            supplier: product.supplier.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        });
    }

    /// Drops the line entirely, whatever its quantity.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// Replaces a line's quantity. Values below 1 are ignored; removal only
    /// happens through `remove_item`.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity < 1 {
            return;
        }
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            line.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(|line| line.subtotal()).sum()
    }
}
