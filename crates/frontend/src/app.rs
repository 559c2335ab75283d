use crate::domain::orders::state::OrdersStore;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the order console store to the whole app via context.
    provide_context(OrdersStore::new());

    view! {
        <AppRoutes />
    }
}
