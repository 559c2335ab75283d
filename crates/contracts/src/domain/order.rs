//! Order aggregate and its wire contracts.
//!
//! Field names follow the backend JSON schema (camelCase, literal `ZIP`),
//! mapped onto snake_case Rust fields via serde renames.

use crate::domain::common::contains_ci;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Unique order identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub i64);

impl OrderId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Fulfilment status as stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Accepted,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub customer: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "shippedAt")]
    pub shipped_at: DateTime<Utc>,

    pub status: OrderStatus,

    #[serde(rename = "totalPrice")]
    pub total_price: f64,

    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipTo {
    pub name: String,
    pub address: String,

    // The backend schema spells this one in caps
    #[serde(rename = "ZIP")]
    pub zip: String,

    pub region: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerInfo {
    #[serde(rename = "firstName")]
    pub first_name: String,

    #[serde(rename = "lastName")]
    pub last_name: String,

    pub address: String,
    pub phone: String,
    pub email: String,
}

/// A customer purchase record: summary, shipping and customer sub-records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,

    pub summary: OrderSummary,

    #[serde(rename = "shipTo")]
    pub ship_to: ShipTo,

    #[serde(rename = "customerInfo")]
    pub customer_info: CustomerInfo,
}

// ============================================================================
// Creation / edit payloads
// ============================================================================

/// POST body for a new order; the backend assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub summary: OrderSummary,

    #[serde(rename = "shipTo")]
    pub ship_to: ShipTo,

    #[serde(rename = "customerInfo")]
    pub customer_info: CustomerInfo,
}

/// Input of the order creation form.
///
/// `values()` exposes the fields in form order so validation can report
/// flaw indices that match the rendered inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    pub customer: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub zip: String,
    pub region: String,
    pub country: String,
    pub currency: String,
}

impl OrderForm {
    pub fn values(&self) -> Vec<String> {
        vec![
            self.customer.clone(),
            self.contact_name.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.address.clone(),
            self.zip.clone(),
            self.region.clone(),
            self.country.clone(),
            self.currency.clone(),
        ]
    }

    /// Build the creation payload.
    ///
    /// New orders start pending with a zero total; first/last name are
    /// split off the contact name at the first space.
    pub fn into_new_order(self, now: DateTime<Utc>) -> NewOrder {
        let (first_name, last_name) = split_name(&self.contact_name);
        NewOrder {
            summary: OrderSummary {
                customer: self.customer,
                created_at: now,
                shipped_at: now,
                status: OrderStatus::Pending,
                total_price: 0.0,
                currency: self.currency,
            },
            ship_to: ShipTo {
                name: self.contact_name.clone(),
                address: self.address.clone(),
                zip: self.zip,
                region: self.region,
                country: self.country,
            },
            customer_info: CustomerInfo {
                first_name,
                last_name,
                address: self.address,
                phone: self.phone,
                email: self.email,
            },
        }
    }
}

fn split_name(full: &str) -> (String, String) {
    match full.split_once(' ') {
        Some((first, last)) => (first.to_string(), last.to_string()),
        None => (full.to_string(), String::new()),
    }
}

/// PUT body replacing the shipping address only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressPatch {
    #[serde(rename = "shipTo")]
    pub ship_to: ShipTo,
}

/// PUT body replacing the customer info only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientPatch {
    #[serde(rename = "customerInfo")]
    pub customer_info: CustomerInfo,
}

/// Input of the address edit form, in rendered order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressForm {
    pub name: String,
    pub address: String,
    pub zip: String,
    pub region: String,
    pub country: String,
}

impl AddressForm {
    pub fn from_ship_to(ship_to: &ShipTo) -> Self {
        Self {
            name: ship_to.name.clone(),
            address: ship_to.address.clone(),
            zip: ship_to.zip.clone(),
            region: ship_to.region.clone(),
            country: ship_to.country.clone(),
        }
    }

    pub fn values(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.address.clone(),
            self.zip.clone(),
            self.region.clone(),
            self.country.clone(),
        ]
    }

    pub fn into_patch(self) -> AddressPatch {
        AddressPatch {
            ship_to: ShipTo {
                name: self.name,
                address: self.address,
                zip: self.zip,
                region: self.region,
                country: self.country,
            },
        }
    }
}

/// Input of the client edit form, in rendered order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientForm {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl ClientForm {
    pub fn from_customer_info(info: &CustomerInfo) -> Self {
        Self {
            first_name: info.first_name.clone(),
            last_name: info.last_name.clone(),
            address: info.address.clone(),
            phone: info.phone.clone(),
            email: info.email.clone(),
        }
    }

    pub fn values(&self) -> Vec<String> {
        vec![
            self.first_name.clone(),
            self.last_name.clone(),
            self.address.clone(),
            self.phone.clone(),
            self.email.clone(),
        ]
    }

    pub fn into_patch(self) -> ClientPatch {
        ClientPatch {
            customer_info: CustomerInfo {
                first_name: self.first_name,
                last_name: self.last_name,
                address: self.address,
                phone: self.phone,
                email: self.email,
            },
        }
    }
}

// ============================================================================
// Search
// ============================================================================

/// Filter orders by a free-text query over the summary.
///
/// Matches customer and status case-insensitively; the timestamps are
/// compared on their date portion only. Total price and currency are
/// not searchable.
pub fn search_orders(orders: &[Order], query: &str) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| summary_matches(&order.summary, query))
        .cloned()
        .collect()
}

fn summary_matches(summary: &OrderSummary, query: &str) -> bool {
    contains_ci(&summary.customer, query)
        || contains_ci(summary.status.as_str(), query)
        || contains_ci(&summary.created_at.format("%Y-%m-%d").to_string(), query)
        || contains_ci(&summary.shipped_at.format("%Y-%m-%d").to_string(), query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_order(id: i64, customer: &str, status: OrderStatus) -> Order {
        let created = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        Order {
            id: OrderId::new(id),
            summary: OrderSummary {
                customer: customer.to_string(),
                created_at: created,
                shipped_at: created,
                status,
                total_price: 100.0,
                currency: "EUR".to_string(),
            },
            ship_to: ShipTo::default(),
            customer_info: CustomerInfo::default(),
        }
    }

    #[test]
    fn test_wire_field_names() {
        let order = sample_order(7, "John Doe", OrderStatus::Pending);
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["summary"]["createdAt"].as_str().unwrap()[..10], *"2024-03-15");
        assert_eq!(json["summary"]["totalPrice"], 100.0);
        assert_eq!(json["summary"]["status"], "pending");
        assert!(json["shipTo"].get("ZIP").is_some());
        assert!(json["customerInfo"].get("firstName").is_some());
    }

    #[test]
    fn test_order_round_trip() {
        let order = sample_order(3, "Jane Roe", OrderStatus::Accepted);
        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn test_form_builds_pending_order() {
        let form = OrderForm {
            customer: "ACME".to_string(),
            contact_name: "John Doe".to_string(),
            phone: "+123".to_string(),
            email: "john@acme.test".to_string(),
            address: "Main St 1".to_string(),
            zip: "10115".to_string(),
            region: "Berlin".to_string(),
            country: "Germany".to_string(),
            currency: "EUR".to_string(),
        };
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let order = form.into_new_order(now);

        assert_eq!(order.summary.status, OrderStatus::Pending);
        assert_eq!(order.summary.total_price, 0.0);
        assert_eq!(order.summary.created_at, now);
        assert_eq!(order.customer_info.first_name, "John");
        assert_eq!(order.customer_info.last_name, "Doe");
        assert_eq!(order.ship_to.name, "John Doe");
        assert_eq!(order.ship_to.address, order.customer_info.address);
    }

    #[test]
    fn test_single_word_contact_name() {
        let (first, last) = split_name("Cher");
        assert_eq!(first, "Cher");
        assert_eq!(last, "");
    }

    #[test]
    fn test_address_patch_shape() {
        let form = AddressForm {
            name: "John Doe".to_string(),
            address: "Main St 1".to_string(),
            zip: "10115".to_string(),
            region: "Berlin".to_string(),
            country: "Germany".to_string(),
        };
        let json = serde_json::to_value(form.into_patch()).unwrap();
        assert_eq!(json["shipTo"]["ZIP"], "10115");
        assert!(json.get("customerInfo").is_none());
    }

    #[test]
    fn test_client_patch_shape() {
        let form = ClientForm {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            address: "Main St 1".to_string(),
            phone: "+123".to_string(),
            email: "john@acme.test".to_string(),
        };
        let json = serde_json::to_value(form.into_patch()).unwrap();
        assert_eq!(json["customerInfo"]["firstName"], "John");
        assert!(json.get("shipTo").is_none());
    }

    #[test]
    fn test_search_by_customer_case_insensitive() {
        let orders = vec![
            sample_order(1, "John Doe", OrderStatus::Pending),
            sample_order(2, "Jane Roe", OrderStatus::Accepted),
        ];
        let hits = search_orders(&orders, "JOHN");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, OrderId::new(1));
    }

    #[test]
    fn test_search_by_date_portion() {
        let orders = vec![sample_order(1, "John Doe", OrderStatus::Pending)];
        assert_eq!(search_orders(&orders, "2024-03").len(), 1);
        // Time of day is not searchable
        assert_eq!(search_orders(&orders, "14:02").len(), 0);
    }

    #[test]
    fn test_search_excludes_price_and_currency() {
        let orders = vec![sample_order(1, "John Doe", OrderStatus::Pending)];
        assert_eq!(search_orders(&orders, "100").len(), 0);
        assert_eq!(search_orders(&orders, "EUR").len(), 0);
    }

    #[test]
    fn test_search_is_idempotent() {
        let orders = vec![
            sample_order(1, "John Doe", OrderStatus::Pending),
            sample_order(2, "Jane Roe", OrderStatus::Accepted),
            sample_order(3, "Max Mustermann", OrderStatus::Pending),
        ];
        let once = search_orders(&orders, "pending");
        let twice = search_orders(&once, "pending");
        assert_eq!(once, twice);
    }
}
