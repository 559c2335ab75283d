//! Reactive view-state and commands for the order console.
//!
//! All transient UI state lives in this store and is passed to the
//! render functions through signals; async commands re-fetch from the
//! backend and overwrite the affected signals wholesale. Responses that
//! arrive after the selection has moved on are dropped via a load
//! generation counter.

use super::api;
use contracts::domain::common::SortDirection;
use contracts::domain::order::{search_orders, AddressPatch, ClientPatch, NewOrder, Order, OrderId};
use contracts::domain::product::{
    search_products, sort_products, NewProduct, Product, ProductId, ProductSortField,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Which info tab of the detail panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InfoTab {
    #[default]
    Address,
    Client,
    Map,
}

/// Active product-table sort: column plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductSort {
    pub field: ProductSortField,
    pub direction: SortDirection,
}

impl ProductSort {
    pub fn ascending(&self) -> bool {
        self.direction == SortDirection::Ascending
    }
}

/// Clicking the active column reverses it; a new column starts ascending.
pub fn toggle_sort(current: Option<ProductSort>, field: ProductSortField) -> ProductSort {
    match current {
        Some(sort) if sort.field == field => ProductSort {
            field,
            direction: sort.direction.reversed(),
        },
        _ => ProductSort {
            field,
            direction: SortDirection::Ascending,
        },
    }
}

#[derive(Clone, Copy)]
pub struct OrdersStore {
    /// Sidebar content: most recent order fetch or search result
    pub orders: RwSignal<Vec<Order>>,
    /// False until the first order fetch resolves
    pub loaded: RwSignal<bool>,
    pub selected: RwSignal<Option<OrderId>>,
    pub current_order: RwSignal<Option<Order>>,
    /// Product table content: most recent fetch, search or sort result
    pub products: RwSignal<Vec<Product>>,
    pub tab: RwSignal<InfoTab>,
    pub edit_mode: RwSignal<bool>,
    /// Sort indicator; survives order selection changes
    pub sort: RwSignal<Option<ProductSort>>,
    pub error: RwSignal<Option<String>>,
    pub show_order_form: RwSignal<bool>,
    pub show_product_form: RwSignal<bool>,
    load_seq: RwSignal<u64>,
}

impl OrdersStore {
    pub fn new() -> Self {
        Self {
            orders: RwSignal::new(Vec::new()),
            loaded: RwSignal::new(false),
            selected: RwSignal::new(None),
            current_order: RwSignal::new(None),
            products: RwSignal::new(Vec::new()),
            tab: RwSignal::new(InfoTab::Address),
            edit_mode: RwSignal::new(false),
            sort: RwSignal::new(None),
            error: RwSignal::new(None),
            show_order_form: RwSignal::new(false),
            show_product_form: RwSignal::new(false),
            load_seq: RwSignal::new(0),
        }
    }

    fn fail(self, context: &str, e: String) {
        log::warn!("{}: {}", context, e);
        self.error.set(Some(format!("{}: {}", context, e)));
    }

    /// Start a detail load; the returned generation invalidates every
    /// earlier in-flight load.
    fn begin_load(self) -> u64 {
        self.load_seq.update(|seq| *seq += 1);
        self.load_seq.get_untracked()
    }

    fn is_current(self, seq: u64) -> bool {
        self.load_seq.get_untracked() == seq
    }

    fn go_idle(self) {
        self.selected.set(None);
        self.current_order.set(None);
        self.products.set(Vec::new());
        self.edit_mode.set(false);
    }

    /// Load the order list; auto-select the first order, or go idle
    /// when the backend has none.
    pub fn refresh(self) {
        spawn_local(async move {
            match api::fetch_orders().await {
                Ok(orders) => {
                    self.loaded.set(true);
                    if let Some(first) = orders.first() {
                        let id = first.id;
                        self.orders.set(orders);
                        self.select_order(id);
                    } else {
                        self.orders.set(Vec::new());
                        self.go_idle();
                    }
                }
                Err(e) => self.fail("Failed to load orders", e),
            }
        });
    }

    /// Select an order: fetch it, then its products, then render.
    pub fn select_order(self, id: OrderId) {
        let seq = self.begin_load();
        spawn_local(async move {
            let order = match api::fetch_order(id).await {
                Ok(order) => order,
                Err(e) => return self.fail("Failed to load order", e),
            };
            let products = match api::fetch_products(id).await {
                Ok(products) => products,
                Err(e) => return self.fail("Failed to load products", e),
            };
            if !self.is_current(seq) {
                log::warn!("Dropping stale response for order {}", id);
                return;
            }
            self.selected.set(Some(id));
            self.current_order.set(Some(order));
            self.products.set(products);
            self.tab.set(InfoTab::Address);
            self.edit_mode.set(false);
            self.error.set(None);
        });
    }

    /// Switch the info tab, re-fetching the order first.
    pub fn activate_tab(self, tab: InfoTab) {
        let Some(id) = self.selected.get_untracked() else {
            return;
        };
        let seq = self.begin_load();
        spawn_local(async move {
            match api::fetch_order(id).await {
                Ok(order) => {
                    if !self.is_current(seq) {
                        return;
                    }
                    self.current_order.set(Some(order));
                    self.tab.set(tab);
                    self.edit_mode.set(false);
                }
                Err(e) => self.fail("Failed to load order", e),
            }
        });
    }

    /// Sidebar search: always works on a fresh fetch of all orders.
    pub fn search_orders_cmd(self, query: String) {
        spawn_local(async move {
            match api::fetch_orders().await {
                Ok(orders) => {
                    if query.trim().is_empty() {
                        self.orders.set(orders);
                    } else {
                        self.orders.set(search_orders(&orders, &query));
                    }
                }
                Err(e) => self.fail("Failed to search orders", e),
            }
        });
    }

    /// Product search: fresh fetch, filter, then re-apply the active sort.
    pub fn search_products_cmd(self, query: String) {
        let Some(id) = self.selected.get_untracked() else {
            return;
        };
        let seq = self.begin_load();
        spawn_local(async move {
            match api::fetch_products(id).await {
                Ok(products) => {
                    if !self.is_current(seq) {
                        return;
                    }
                    let mut hits = if query.trim().is_empty() {
                        products
                    } else {
                        search_products(&products, &query)
                    };
                    if let Some(sort) = self.sort.get_untracked() {
                        sort_products(&mut hits, sort.field, sort.direction);
                    }
                    self.products.set(hits);
                }
                Err(e) => self.fail("Failed to search products", e),
            }
        });
    }

    /// Column-header sort: reorders the rows already on screen, no re-fetch.
    pub fn sort_products_cmd(self, field: ProductSortField) {
        let sort = toggle_sort(self.sort.get_untracked(), field);
        self.sort.set(Some(sort));
        self.products
            .update(|products| sort_products(products, sort.field, sort.direction));
    }

    /// Create an order and reload the list. A list that just became
    /// non-empty gets its only order selected; otherwise the current
    /// selection stays.
    pub fn create_order_cmd(self, order: NewOrder) {
        spawn_local(async move {
            if let Err(e) = api::create_order(&order).await {
                return self.fail("Failed to create order", e);
            }
            match api::fetch_orders().await {
                Ok(orders) => {
                    let only = (orders.len() == 1).then(|| orders[0].id);
                    self.loaded.set(true);
                    self.orders.set(orders);
                    if let Some(id) = only {
                        self.select_order(id);
                    }
                    self.show_order_form.set(false);
                }
                Err(e) => self.fail("Failed to load orders", e),
            }
        });
    }

    /// Delete the selected order and fall back to the first remaining one.
    pub fn delete_order_cmd(self) {
        let Some(id) = self.selected.get_untracked() else {
            return;
        };
        spawn_local(async move {
            if let Err(e) = api::delete_order(id).await {
                return self.fail("Failed to delete order", e);
            }
            self.refresh();
        });
    }

    /// Create a product for the selected order and reload its table.
    pub fn create_product_cmd(self, product: NewProduct) {
        let Some(id) = self.selected.get_untracked() else {
            return;
        };
        spawn_local(async move {
            if let Err(e) = api::create_product(id, &product).await {
                return self.fail("Failed to create product", e);
            }
            match api::fetch_products(id).await {
                Ok(products) => {
                    self.products.set(products);
                    self.show_product_form.set(false);
                }
                Err(e) => self.fail("Failed to load products", e),
            }
        });
    }

    /// Delete a product, then re-fetch the order (its total may have
    /// changed) and the product table.
    pub fn delete_product_cmd(self, product_id: ProductId) {
        let Some(id) = self.selected.get_untracked() else {
            return;
        };
        let seq = self.begin_load();
        spawn_local(async move {
            if let Err(e) = api::delete_product(id, product_id).await {
                return self.fail("Failed to delete product", e);
            }
            let order = match api::fetch_order(id).await {
                Ok(order) => order,
                Err(e) => return self.fail("Failed to load order", e),
            };
            let products = match api::fetch_products(id).await {
                Ok(products) => products,
                Err(e) => return self.fail("Failed to load products", e),
            };
            if !self.is_current(seq) {
                return;
            }
            self.current_order.set(Some(order));
            self.products.set(products);
        });
    }

    /// PUT the edited shipping address, then re-fetch and leave edit mode.
    pub fn save_address_cmd(self, patch: AddressPatch) {
        self.save_patch(patch)
    }

    /// PUT the edited customer info, then re-fetch and leave edit mode.
    pub fn save_client_cmd(self, patch: ClientPatch) {
        self.save_patch(patch)
    }

    fn save_patch<T: serde::Serialize + 'static>(self, patch: T) {
        let Some(id) = self.selected.get_untracked() else {
            return;
        };
        let seq = self.begin_load();
        spawn_local(async move {
            if let Err(e) = api::update_order(id, &patch).await {
                return self.fail("Failed to save order", e);
            }
            match api::fetch_order(id).await {
                Ok(order) => {
                    if !self.is_current(seq) {
                        return;
                    }
                    self.current_order.set(Some(order));
                    self.edit_mode.set(false);
                    self.error.set(None);
                }
                Err(e) => self.fail("Failed to load order", e),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_sort_new_column_starts_ascending() {
        let sort = toggle_sort(None, ProductSortField::Price);
        assert_eq!(sort.field, ProductSortField::Price);
        assert!(sort.ascending());
    }

    #[test]
    fn test_toggle_sort_same_column_reverses() {
        let first = toggle_sort(None, ProductSortField::Price);
        let second = toggle_sort(Some(first), ProductSortField::Price);
        assert_eq!(second.field, ProductSortField::Price);
        assert!(!second.ascending());
        let third = toggle_sort(Some(second), ProductSortField::Price);
        assert!(third.ascending());
    }

    #[test]
    fn test_toggle_sort_other_column_resets_direction() {
        let price_desc = ProductSort {
            field: ProductSortField::Price,
            direction: SortDirection::Descending,
        };
        let sort = toggle_sort(Some(price_desc), ProductSortField::Name);
        assert_eq!(sort.field, ProductSortField::Name);
        assert!(sort.ascending());
    }
}
