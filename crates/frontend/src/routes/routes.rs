use crate::domain::orders::ui::OrdersPage;
use leptos::prelude::*;

// Single-screen console; no Router components needed.

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <OrdersPage />
    }
}
