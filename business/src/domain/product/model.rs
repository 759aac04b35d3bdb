use chrono::NaiveDate;

use super::errors::ProductError;
use super::value_objects::{Price, ProductId, StockStatus};

/// A catalog entry owned by the product repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub supplier: String,
    pub price: Price,
    pub quantity: u32,
    pub added_date: NaiveDate,
    pub image: Option<String>,
}

/// Raw form input for a product, numeric fields still as entered.
#[derive(Debug, Clone, Default)]
pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub category: String,
    pub supplier: String,
    pub price: String,
    pub quantity: String,
    pub added_date: Option<NaiveDate>,
    pub image: Option<String>,
}

/// A validated product awaiting an identifier from the repository.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub supplier: String,
    pub price: Price,
    pub quantity: u32,
    pub added_date: Option<NaiveDate>,
    pub image: Option<String>,
}

impl ProductDraft {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        let price = props
            .price
            .trim()
            .parse::<Price>()
            .map_err(|_| ProductError::PriceInvalid)?;

        let quantity = props
            .quantity
            .trim()
            .parse::<u32>()
            .map_err(|_| ProductError::QuantityInvalid)?;

        Ok(Self {
            name: props.name,
            description: props.description,
            category: props.category,
            supplier: props.supplier,
            price,
            quantity,
            added_date: props.added_date,
            image: props.image,
        })
    }

    /// Promotes the draft once the repository has assigned an id and date.
    pub fn into_product(self, id: ProductId, added_date: NaiveDate) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            category: self.category,
            supplier: self.supplier,
            price: self.price,
            quantity: self.quantity,
            added_date,
            image: self.image,
        }
    }
}

impl Product {
    /// Constructor for data already held by the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: ProductId,
        name: String,
        description: String,
        category: String,
        supplier: String,
        price: Price,
        quantity: u32,
        added_date: NaiveDate,
        image: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            category,
            supplier,
            price,
            quantity,
            added_date,
            image,
        }
    }

    pub fn stock_status(&self) -> StockStatus {
        StockStatus::from_quantity(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> NewProductProps {
        NewProductProps {
            name: "Laptop Pro".to_string(),
            description: "Ordinateur portable haute performance".to_string(),
            category: "Électronique".to_string(),
            supplier: "TechDistrib".to_string(),
            price: "1299.00".to_string(),
            quantity: "5".to_string(),
            added_date: None,
            image: None,
        }
    }

    #[test]
    fn should_build_draft_from_valid_form_input() {
        let draft = ProductDraft::new(props()).unwrap();
        assert_eq!(draft.name, "Laptop Pro");
        assert_eq!(draft.price.amount(), 1299.0);
        assert_eq!(draft.quantity, 5);
    }

    #[test]
    fn should_reject_blank_name() {
        let mut input = props();
        input.name = "   ".to_string();
        assert!(matches!(
            ProductDraft::new(input).unwrap_err(),
            ProductError::NameEmpty
        ));
    }

    #[test]
    fn should_reject_unparseable_price() {
        let mut input = props();
        input.price = "cher".to_string();
        assert!(matches!(
            ProductDraft::new(input).unwrap_err(),
            ProductError::PriceInvalid
        ));
    }

    #[test]
    fn should_reject_negative_price() {
        let mut input = props();
        input.price = "-10".to_string();
        assert!(matches!(
            ProductDraft::new(input).unwrap_err(),
            ProductError::PriceInvalid
        ));
    }

    #[test]
    fn should_reject_fractional_quantity() {
        let mut input = props();
        input.quantity = "1.5".to_string();
        assert!(matches!(
            ProductDraft::new(input).unwrap_err(),
            ProductError::QuantityInvalid
        ));
    }

    #[test]
    fn should_reject_negative_quantity() {
        let mut input = props();
        input.quantity = "-3".to_string();
        assert!(matches!(
            ProductDraft::new(input).unwrap_err(),
            ProductError::QuantityInvalid
        ));
    }

    #[test]
    fn should_promote_draft_with_assigned_id_and_date() {
        let draft = ProductDraft::new(props()).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let product = draft.into_product(ProductId::new(7), date);
        assert_eq!(product.id, ProductId::new(7));
        assert_eq!(product.added_date, date);
        assert_eq!(product.stock_status(), StockStatus::Faible);
    }
}
