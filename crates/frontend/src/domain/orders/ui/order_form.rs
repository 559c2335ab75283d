use super::form_controls::FlawInput;
use crate::domain::orders::state::OrdersStore;
use contracts::domain::order::OrderForm;
use contracts::shared::validation::find_flaws;
use leptos::prelude::*;

/// Modal window for creating an order.
///
/// The form state is local to the modal; closing it unmounts the
/// component and discards whatever was typed.
#[component]
pub fn OrderFormModal() -> impl IntoView {
    let store = use_context::<OrdersStore>().expect("OrdersStore not found in context");
    let form = RwSignal::new(OrderForm::default());
    let flaws = RwSignal::new(Vec::<usize>::new());

    let submit = move |_| {
        let current = form.get_untracked();
        let found = find_flaws(&current.values());
        if found.is_empty() {
            store.create_order_cmd(current.into_new_order(chrono::Utc::now()));
        } else {
            flaws.set(found);
        }
    };

    view! {
        <div class="modal-overlay">
            <div class="modal" id="orderWindow">
                <div class="modal__header">
                    <h3>{"New order"}</h3>
                    <button
                        class="modal__close"
                        on:click=move |_| store.show_order_form.set(false)
                    >
                        {"×"}
                    </button>
                </div>

                <div class="modal__body edit-form">
                    <FlawInput
                        label="Customer: "
                        index=0
                        flaws=flaws
                        value=Signal::derive(move || form.get().customer)
                        on_input=Callback::new(move |v| form.update(|f| f.customer = v))
                    />
                    <FlawInput
                        label="Contact name: "
                        index=1
                        flaws=flaws
                        value=Signal::derive(move || form.get().contact_name)
                        on_input=Callback::new(move |v| form.update(|f| f.contact_name = v))
                    />
                    <FlawInput
                        label="Phone: "
                        index=2
                        flaws=flaws
                        value=Signal::derive(move || form.get().phone)
                        on_input=Callback::new(move |v| form.update(|f| f.phone = v))
                    />
                    <FlawInput
                        label="Email: "
                        index=3
                        flaws=flaws
                        value=Signal::derive(move || form.get().email)
                        on_input=Callback::new(move |v| form.update(|f| f.email = v))
                    />
                    <FlawInput
                        label="Street: "
                        index=4
                        flaws=flaws
                        value=Signal::derive(move || form.get().address)
                        on_input=Callback::new(move |v| form.update(|f| f.address = v))
                    />
                    <FlawInput
                        label="ZIP Code/City: "
                        index=5
                        flaws=flaws
                        value=Signal::derive(move || form.get().zip)
                        on_input=Callback::new(move |v| form.update(|f| f.zip = v))
                    />
                    <FlawInput
                        label="Region: "
                        index=6
                        flaws=flaws
                        value=Signal::derive(move || form.get().region)
                        on_input=Callback::new(move |v| form.update(|f| f.region = v))
                    />
                    <FlawInput
                        label="Country: "
                        index=7
                        flaws=flaws
                        value=Signal::derive(move || form.get().country)
                        on_input=Callback::new(move |v| form.update(|f| f.country = v))
                    />
                    <FlawInput
                        label="Currency: "
                        index=8
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
                        on:click=move |_| store.show_order_form.set(false)
                    >
                        {"Cancel"}
                    </button>
                </div>
            </div>
        </div>
    }
}
