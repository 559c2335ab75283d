//! REST client for the order backend.
//!
//! Thin wrappers over the `/api/Orders` resource family. Transport
//! failures and HTTP status >= 400 both surface as the error string.

use crate::shared::api_utils::api_url;
use contracts::domain::order::{NewOrder, Order, OrderId};
use contracts::domain::product::{NewProduct, Product, ProductId};
use gloo_net::http::{Request, Response};
use serde::Serialize;

fn status_checked(resp: Response) -> Result<Response, String> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(format!("HTTP {}", resp.status()))
    }
}

/// Fetch all orders
pub async fn fetch_orders() -> Result<Vec<Order>, String> {
    let resp = Request::get(&api_url("/api/Orders"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    status_checked(resp)?
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch one order
pub async fn fetch_order(id: OrderId) -> Result<Order, String> {
    let resp = Request::get(&api_url(&format!("/api/Orders/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    status_checked(resp)?
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch the products of one order
pub async fn fetch_products(order_id: OrderId) -> Result<Vec<Product>, String> {
    let resp = Request::get(&api_url(&format!("/api/Orders/{}/products", order_id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    status_checked(resp)?
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a new order
pub async fn create_order(order: &NewOrder) -> Result<(), String> {
    let resp = Request::post(&api_url("/api/Orders"))
        .json(order)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    status_checked(resp).map(|_| ())
}

/// Replace part of an order (shipping address or customer info)
pub async fn update_order<T: Serialize>(id: OrderId, patch: &T) -> Result<(), String> {
    let resp = Request::put(&api_url(&format!("/api/Orders/{}", id)))
        .json(patch)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    status_checked(resp).map(|_| ())
}

/// Delete an order
pub async fn delete_order(id: OrderId) -> Result<(), String> {
    let resp = Request::delete(&api_url(&format!("/api/Orders/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    status_checked(resp).map(|_| ())
}

/// Create a product under an order
pub async fn create_product(order_id: OrderId, product: &NewProduct) -> Result<(), String> {
    let resp = Request::post(&api_url(&format!("/api/Orders/{}/products", order_id)))
        .json(product)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    status_checked(resp).map(|_| ())
}

/// Delete a product of an order
pub async fn delete_product(order_id: OrderId, product_id: ProductId) -> Result<(), String> {
    let resp = Request::delete(&api_url(&format!(
        "/api/Orders/{}/products/{}",
        order_id, product_id
    )))
    .send()
    .await
    .map_err(|e| format!("Request failed: {}", e))?;
    status_checked(resp).map(|_| ())
}
