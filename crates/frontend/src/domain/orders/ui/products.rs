use crate::domain::orders::state::OrdersStore;
use crate::shared::date_utils::format_amount;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, SearchBox};
use contracts::domain::product::ProductSortField;
use leptos::prelude::*;

/// Line-item table of the selected order: search, sortable columns,
/// per-row delete and a row count badge.
#[component]
pub fn ProductTable() -> impl IntoView {
    let store = use_context::<OrdersStore>().expect("OrdersStore not found in context");

    view! {
        <section class="products">
            <div class="products__toolbar">
                <h3>
                    {"Line items "}
                    <span class="products__count">{move || store.products.get().len()}</span>
                </h3>
                <SearchBox
                    on_search=Callback::new(move |query| store.search_products_cmd(query))
                    placeholder="Search products..."
                />
                <button
                    class="button button--primary"
                    on:click=move |_| store.show_product_form.set(true)
                >
                    {"+ New product"}
                </button>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SortableHeader label="Product" field=ProductSortField::Name />
                            <SortableHeader label="Unit price" field=ProductSortField::Price />
                            <SortableHeader label="Quantity" field=ProductSortField::Quantity />
                            <SortableHeader label="Total" field=ProductSortField::TotalPrice />
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || store.products.get().into_iter().map(|product| {
                            let product_id = product.id;
                            let delete = move |_| {
                                let confirmed = web_sys::window()
                                    .map(|win| {
                                        win.confirm_with_message("Delete this product?")
                                            .unwrap_or(false)
                                    })
                                    .unwrap_or(false);
                                if confirmed {
                                    store.delete_product_cmd(product_id);
                                }
                            };
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">
                                        <p>{product.name.clone()}</p>
                                        <span class="product-id">{product_id.value()}</span>
                                    </td>
                                    <td class="table__cell">
                                        <span class="price">{format_amount(product.price)}</span>
                                        {" "}
                                        <span>{product.currency.clone()}</span>
                                    </td>
                                    <td class="table__cell">{product.quantity}</td>
                                    <td class="table__cell">
                                        <span class="price">{format_amount(product.total_price)}</span>
                                        {" "}
                                        <span>{product.currency.clone()}</span>
                                    </td>
                                    <td class="table__cell">
                                        <button
                                            class="button button--icon"
                                            title="Delete product"
                                            on:click=delete
                                        >
                                            {"🗑"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

/// Header cell with a click-to-sort indicator.
#[component]
fn SortableHeader(#[prop(into)] label: String, field: ProductSortField) -> impl IntoView {
    let store = use_context::<OrdersStore>().expect("OrdersStore not found in context");

    view! {
        <th class="table__header-cell" on:click=move |_| store.sort_products_cmd(field)>
            <div class="table__sortable-header" style="cursor: pointer;">
                {label}
                <span class=move || get_sort_class(store.sort.get().map(|s| s.field), field)>
                    {move || {
                        let sort = store.sort.get();
                        get_sort_indicator(
                            sort.map(|s| s.field),
                            field,
                            sort.map(|s| s.ascending()).unwrap_or(true),
                        )
                    }}
                </span>
            </div>
        </th>
    }
}
