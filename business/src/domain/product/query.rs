use chrono::NaiveDate;

use super::model::Product;

/// Sentinel category value the presentation layer sends for "no filter".
const CATEGORY_ALL: &str = "all";

/// Search and filter criteria for the catalog. Every predicate is optional;
/// active predicates are combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive substring match on name or description.
    pub search_text: Option<String>,
    /// Exact category match. `"all"`, empty or absent matches everything.
    pub category: Option<String>,
    /// Case-insensitive substring match on supplier.
    pub supplier: Option<String>,
    /// Exact calendar-date match on the added date.
    pub date_exact: Option<NaiveDate>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(text) = &self.search_text
            && !text.is_empty()
        {
            let needle = text.to_lowercase();
            let in_name = product.name.to_lowercase().contains(&needle);
            let in_description = product.description.to_lowercase().contains(&needle);
            if !in_name && !in_description {
                return false;
            }
        }

        if let Some(category) = &self.category
            && !category.is_empty()
            && category != CATEGORY_ALL
            && product.category != *category
        {
            return false;
        }

        if let Some(supplier) = &self.supplier
            && !supplier.is_empty()
            && !product
                .supplier
                .to_lowercase()
                .contains(&supplier.to_lowercase())
        {
            return false;
        }

        if let Some(date) = self.date_exact
            && product.added_date != date
        {
            return false;
        }

        true
    }
}

/// Pure, order-preserving filter over a catalog snapshot.
pub fn filter_products(products: &[Product], filter: &ProductFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|product| filter.matches(product))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::value_objects::{Price, ProductId};
    use proptest::prelude::*;

    fn product(id: u32, name: &str, description: &str, category: &str, supplier: &str) -> Product {
        Product::from_repository(
            ProductId::new(id),
            name.to_string(),
            description.to_string(),
            category.to_string(),
            supplier.to_string(),
            Price::new(10.0).unwrap(),
            5,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            None,
        )
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Laptop Pro", "Ordinateur portable", "Électronique", "TechDistrib"),
            product(2, "Casque Audio", "Casque sans fil", "Électronique", "SonPlus"),
            product(3, "Chaise Ergonomique", "Chaise de bureau", "Mobilier", "BuroMeubles"),
        ]
    }

    #[test]
    fn should_return_catalog_unchanged_for_empty_filter() {
        let products = catalog();
        let result = filter_products(&products, &ProductFilter::default());
        assert_eq!(result, products);
    }

    #[test]
    fn should_match_search_text_in_name_or_description() {
        let products = catalog();
        let filter = ProductFilter {
            search_text: Some("casque".to_string()),
            ..Default::default()
        };
        let result = filter_products(&products, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Casque Audio");

        let filter = ProductFilter {
            search_text: Some("BUREAU".to_string()),
            ..Default::default()
        };
        let result = filter_products(&products, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Chaise Ergonomique");
    }

    #[test]
    fn should_match_category_exactly_with_all_sentinel() {
        let products = catalog();
        let filter = ProductFilter {
            category: Some("Électronique".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_products(&products, &filter).len(), 2);

        let filter = ProductFilter {
            category: Some("all".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_products(&products, &filter).len(), 3);
    }

    #[test]
    fn should_match_supplier_substring_case_insensitively() {
        let products = catalog();
        let filter = ProductFilter {
            supplier: Some("tech".to_string()),
            ..Default::default()
        };
        let result = filter_products(&products, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].supplier, "TechDistrib");
    }

    #[test]
    fn should_match_added_date_exactly() {
        let mut products = catalog();
        products[2].added_date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let filter = ProductFilter {
            date_exact: NaiveDate::from_ymd_opt(2024, 2, 1),
            ..Default::default()
        };
        let result = filter_products(&products, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, ProductId::new(3));
    }

    #[test]
    fn should_combine_predicates_with_and() {
        let products = catalog();
        let filter = ProductFilter {
            search_text: Some("casque".to_string()),
            category: Some("Mobilier".to_string()),
            ..Default::default()
        };
        assert!(filter_products(&products, &filter).is_empty());
    }

    #[test]
    fn should_not_mutate_input() {
        let products = catalog();
        let before = products.clone();
        let filter = ProductFilter {
            search_text: Some("laptop".to_string()),
            ..Default::default()
        };
        let _ = filter_products(&products, &filter);
        assert_eq!(products, before);
    }

    fn arb_product() -> impl Strategy<Value = Product> {
        (
            1u32..100,
            "[a-dA-D]{0,6}",
            "[a-dA-D]{0,6}",
            prop_oneof![Just("Électronique"), Just("Mobilier"), Just("Livres")],
            "[m-p]{0,4}",
            0u32..50,
        )
            .prop_map(|(id, name, description, category, supplier, quantity)| {
                Product::from_repository(
                    ProductId::new(id),
                    name,
                    description,
                    category.to_string(),
                    supplier,
                    Price::new(9.99).unwrap(),
                    quantity,
                    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                    None,
                )
            })
    }

    fn arb_filter() -> impl Strategy<Value = ProductFilter> {
        (
            proptest::option::of("[a-dA-D]{0,3}"),
            proptest::option::of(prop_oneof![
                Just("all".to_string()),
                Just("Électronique".to_string()),
                Just("Mobilier".to_string()),
            ]),
            proptest::option::of("[m-p]{0,2}"),
        )
            .prop_map(|(search_text, category, supplier)| ProductFilter {
                search_text,
                category,
                supplier,
                date_exact: None,
            })
    }

    proptest! {
        #[test]
        fn filtering_is_idempotent(
            products in proptest::collection::vec(arb_product(), 0..12),
            filter in arb_filter(),
        ) {
            let once = filter_products(&products, &filter);
            let twice = filter_products(&once, &filter);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn filtering_preserves_relative_order(
            products in proptest::collection::vec(arb_product(), 0..12),
            filter in arb_filter(),
        ) {
            let filtered = filter_products(&products, &filter);
            let mut cursor = 0;
            for product in &products {
                if cursor < filtered.len() && filtered[cursor] == *product {
                    cursor += 1;
                }
            }
            prop_assert_eq!(cursor, filtered.len());
        }
    }
}
