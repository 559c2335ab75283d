use super::form_controls::FlawInput;
use crate::domain::orders::state::OrdersStore;
use contracts::domain::product::ProductForm;
use contracts::shared::validation::find_flaws;
use leptos::prelude::*;

// Form field positions, shared between inputs and parse checks.
const PRICE_INDEX: usize = 1;
const QUANTITY_INDEX: usize = 2;

/// Modal window for creating a product under the selected order.
#[component]
pub fn ProductFormModal() -> impl IntoView {
    let store = use_context::<OrdersStore>().expect("OrdersStore not found in context");
    let form = RwSignal::new(ProductForm::default());
    let flaws = RwSignal::new(Vec::<usize>::new());

    let submit = move |_| {
        let current = form.get_untracked();
        let mut found = find_flaws(&current.values());

        // Numeric fields must also parse
        if !found.contains(&PRICE_INDEX) && current.price.trim().parse::<f64>().is_err() {
            found.push(PRICE_INDEX);
        }
        if !found.contains(&QUANTITY_INDEX) && current.quantity.trim().parse::<u32>().is_err() {
            found.push(QUANTITY_INDEX);
        }
        found.sort_unstable();

        if !found.is_empty() {
            flaws.set(found);
            return;
        }

        let Some(order_id) = store.selected.get_untracked() else {
            return;
        };
        match current.into_new_product(order_id.value()) {
            Ok(product) => store.create_product_cmd(product),
            Err(e) => store.error.set(Some(e)),
        }
    };

    view! {
        <div class="modal-overlay">
            <div class="modal" id="productWindow">
                <div class="modal__header">
                    <h3>{"New product"}</h3>
                    <button
                        class="modal__close"
                        on:click=move |_| store.show_product_form.set(false)
                    >
                        {"×"}
                    </button>
                </div>

                <div class="modal__body edit-form">
                    <FlawInput
                        label="Name: "
                        index=0
                        flaws=flaws
                        value=Signal::derive(move || form.get().name)
                        on_input=Callback::new(move |v| form.update(|f| f.name = v))
                    />
                    <FlawInput
                        label="Price: "
                        index=PRICE_INDEX
                        flaws=flaws
                        value=Signal::derive(move || form.get().price)
                        on_input=Callback::new(move |v| form.update(|f| f.price = v))
                    />
                    <FlawInput
                        label="Quantity: "
                        index=QUANTITY_INDEX
                        flaws=flaws
                        value=Signal::derive(move || form.get().quantity)
                        on_input=Callback::new(move |v| form.update(|f| f.quantity = v))
                    />
                    <FlawInput
                        label="Currency: "
                        index=3
                        flaws=flaws
                        value=Signal::derive(move || form.get().currency)
                        on_input=Callback::new(move |v| form.update(|f| f.currency = v))
                    />
                </div>

                <div class="modal__actions">
                    <button class="button button--primary" on:click=submit>
                        {"Create"}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| store.show_product_form.set(false)
                    >
                        {"Cancel"}
                    </button>
                </div>
            </div>
        </div>
    }
}
