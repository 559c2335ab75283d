use crate::domain::orders::state::OrdersStore;
use crate::shared::date_utils::format_date;
use crate::shared::list_utils::SearchBox;
use leptos::prelude::*;

/// Order list panel: search, refresh, create, and one item per order.
#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_context::<OrdersStore>().expect("OrdersStore not found in context");

    view! {
        <div class="sidebar">
            <div class="sidebar__toolbar">
                <SearchBox
                    on_search=Callback::new(move |query| store.search_orders_cmd(query))
                    placeholder="Search orders..."
                />
                <button
                    class="button button--secondary"
                    title="Reload order list"
                    on:click=move |_| store.refresh()
                >
                    {"⟳"}
                </button>
                <button
                    class="button button--primary"
                    on:click=move |_| store.show_order_form.set(true)
                >
                    {"+ New order"}
                </button>
            </div>

            <div class="sidebar__orders">
                {move || store.orders.get().into_iter().map(|order| {
                    let id = order.id;
                    let status = order.summary.status;
                    view! {
                        <div
                            class="order-item"
                            class:selected-order=move || store.selected.get() == Some(id)
                            on:click=move |_| store.select_order(id)
                        >
                            <div class="order-item__main">
                                <h3>
                                    {"Order "}
                                    <span class="order-number">{id.value()}</span>
                                </h3>
                                <span class="customer">{order.summary.customer.clone()}</span>
                                <span>
                                    {"Shipped: "}
                                    {format_date(&order.summary.shipped_at)}
                                </span>
                            </div>
                            <div class="order-item__meta">
                                <time>{format_date(&order.summary.created_at)}</time>
                                <span class=format!("status {}", status.as_str())>
                                    {status.as_str()}
                                </span>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
