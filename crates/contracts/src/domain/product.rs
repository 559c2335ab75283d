//! Product line items plus the client-side search and sort helpers
//! that back the product table.

use crate::domain::common::{contains_ci, SortDirection};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Unique product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A line item belonging to an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub currency: String,
    pub quantity: u32,

    #[serde(rename = "totalPrice")]
    pub total_price: f64,

    #[serde(rename = "orderId")]
    pub order_id: i64,
}

/// POST body for a new product; the backend assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub currency: String,
    pub quantity: u32,

    #[serde(rename = "totalPrice")]
    pub total_price: f64,

    #[serde(rename = "orderId")]
    pub order_id: i64,
}

/// Input of the product creation form, in rendered order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub currency: String,
}

impl ProductForm {
    pub fn values(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.price.clone(),
            self.quantity.clone(),
            self.currency.clone(),
        ]
    }

    /// Build the creation payload; the total is always price × quantity.
    pub fn into_new_product(self, order_id: i64) -> Result<NewProduct, String> {
        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| format!("Invalid price: {}", self.price))?;
        let quantity: u32 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| format!("Invalid quantity: {}", self.quantity))?;

        Ok(NewProduct {
            name: self.name,
            price,
            currency: self.currency,
            quantity,
            total_price: price * f64::from(quantity),
            order_id,
        })
    }
}

// ============================================================================
// Search and sort
// ============================================================================

/// Columns of the product table that can be sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductSortField {
    Name,
    Price,
    Quantity,
    TotalPrice,
}

impl ProductSortField {
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Name)
    }
}

/// Filter products by a free-text query over every displayed field.
pub fn search_products(products: &[Product], query: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|product| product_matches(product, query))
        .cloned()
        .collect()
}

fn product_matches(product: &Product, query: &str) -> bool {
    contains_ci(&product.name, query)
        || contains_ci(&product.id.to_string(), query)
        || contains_ci(&product.price.to_string(), query)
        || contains_ci(&product.currency, query)
        || contains_ci(&product.quantity.to_string(), query)
        || contains_ci(&product.total_price.to_string(), query)
}

/// Sort products in place by one column.
pub fn sort_products(products: &mut [Product], field: ProductSortField, direction: SortDirection) {
    products.sort_by(|a, b| {
        let ordering = compare_by_field(a, b, field);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn compare_by_field(a: &Product, b: &Product, field: ProductSortField) -> Ordering {
    match field {
        ProductSortField::Name => a.name.cmp(&b.name),
        ProductSortField::Price => compare_f64(a.price, b.price),
        ProductSortField::Quantity => a.quantity.cmp(&b.quantity),
        ProductSortField::TotalPrice => compare_f64(a.total_price, b.total_price),
    }
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, price: f64, quantity: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price,
            currency: "EUR".to_string(),
            quantity,
            total_price: price * f64::from(quantity),
            order_id: 1,
        }
    }

    #[test]
    fn test_total_price_is_price_times_quantity() {
        let form = ProductForm {
            name: "Widget".to_string(),
            price: "10".to_string(),
            quantity: "3".to_string(),
            currency: "EUR".to_string(),
        };
        let new = form.into_new_product(42).unwrap();
        assert_eq!(new.total_price, 30.0);
        assert_eq!(new.order_id, 42);

        let json = serde_json::to_value(&new).unwrap();
        assert_eq!(json["totalPrice"], 30.0);
        assert_eq!(json["orderId"], 42);
    }

    #[test]
    fn test_form_rejects_non_numeric_input() {
        let form = ProductForm {
            name: "Widget".to_string(),
            price: "ten".to_string(),
            quantity: "3".to_string(),
            currency: "EUR".to_string(),
        };
        assert!(form.into_new_product(1).is_err());

        let form = ProductForm {
            name: "Widget".to_string(),
            price: "10".to_string(),
            quantity: "-3".to_string(),
            currency: "EUR".to_string(),
        };
        assert!(form.into_new_product(1).is_err());
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(product(5, "Widget", 2.5, 4)).unwrap();
        assert_eq!(json["totalPrice"], 10.0);
        assert_eq!(json["orderId"], 1);
        assert_eq!(json["quantity"], 4);
    }

    #[test]
    fn test_search_matches_any_column() {
        let products = vec![
            product(1, "Blue widget", 10.0, 3),
            product(2, "Red gadget", 7.5, 2),
        ];
        assert_eq!(search_products(&products, "WIDGET").len(), 1);
        assert_eq!(search_products(&products, "7.5").len(), 1);
        assert_eq!(search_products(&products, "30").len(), 1); // total price
        assert_eq!(search_products(&products, "EUR").len(), 2);
        assert_eq!(search_products(&products, "none").len(), 0);
    }

    #[test]
    fn test_search_is_idempotent() {
        let products = vec![
            product(1, "Blue widget", 10.0, 3),
            product(2, "Red widget", 7.5, 2),
            product(3, "Gadget", 1.0, 1),
        ];
        let once = search_products(&products, "widget");
        let twice = search_products(&once, "widget");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_numeric_sort_descending_reverses_ascending() {
        let mut asc = vec![
            product(1, "A", 10.0, 3),
            product(2, "B", 7.5, 2),
            product(3, "C", 12.0, 1),
        ];
        let mut desc = asc.clone();

        sort_products(&mut asc, ProductSortField::Price, SortDirection::Ascending);
        sort_products(&mut desc, ProductSortField::Price, SortDirection::Descending);

        let asc_prices: Vec<f64> = asc.iter().map(|p| p.price).collect();
        let mut desc_prices: Vec<f64> = desc.iter().map(|p| p.price).collect();
        desc_prices.reverse();
        assert_eq!(asc_prices, desc_prices);
        assert_eq!(asc_prices, vec![7.5, 10.0, 12.0]);
    }

    #[test]
    fn test_sort_by_name() {
        let mut products = vec![
            product(1, "Cable", 1.0, 1),
            product(2, "Adapter", 1.0, 1),
            product(3, "Battery", 1.0, 1),
        ];
        sort_products(&mut products, ProductSortField::Name, SortDirection::Ascending);
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Adapter", "Battery", "Cable"]);
    }

    #[test]
    fn test_sort_keeps_tied_values_together() {
        let mut products = vec![
            product(1, "A", 5.0, 1),
            product(2, "B", 5.0, 1),
            product(3, "C", 2.0, 1),
        ];
        sort_products(&mut products, ProductSortField::Price, SortDirection::Ascending);
        assert_eq!(products[0].price, 2.0);
        assert_eq!(products[1].price, 5.0);
        assert_eq!(products[2].price, 5.0);
    }
}
