use super::details::OrderDetails;
use super::order_form::OrderFormModal;
use super::product_form::ProductFormModal;
use super::products::ProductTable;
use super::sidebar::Sidebar;
use crate::domain::orders::state::OrdersStore;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let store = use_context::<OrdersStore>().expect("OrdersStore not found in context");

    // Initial load; auto-selects the first order when there is one.
    store.refresh();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <OrderContent /> }.into_any()
        />
    }
}

#[component]
fn OrderContent() -> impl IntoView {
    let store = use_context::<OrdersStore>().expect("OrdersStore not found in context");

    view! {
        <div class="page">
            {move || store.error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                    <button
                        class="warning-box__dismiss"
                        on:click=move |_| store.error.set(None)
                    >
                        {"×"}
                    </button>
                </div>
            })}

            <Show
                when=move || store.selected.get().is_some()
                fallback=move || {
                    if store.loaded.get() {
                        view! {
                            <div class="no-orders">
                                <h2>{"There are no orders"}</h2>
                                <p>{"Create one to get started."}</p>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! { <div class="loading">{"Loading..."}</div> }.into_any()
                    }
                }
            >
                <OrderDetails />
                <ProductTable />
            </Show>

            <Show when=move || store.show_order_form.get()>
                <OrderFormModal />
            </Show>
            <Show when=move || store.show_product_form.get()>
                <ProductFormModal />
            </Show>
        </div>
    }
}
