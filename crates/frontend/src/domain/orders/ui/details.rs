use super::form_controls::{FlawInput, InfoRow};
use crate::domain::orders::state::{InfoTab, OrdersStore};
use crate::shared::date_utils::{format_amount, format_date};
use contracts::domain::order::{AddressForm, ClientForm};
use contracts::shared::validation::find_flaws;
use leptos::prelude::*;

/// Detail panel for the selected order: summary header, info tabs
/// (address / client / map) and the edit workflow.
#[component]
pub fn OrderDetails() -> impl IntoView {
    let store = use_context::<OrdersStore>().expect("OrdersStore not found in context");

    let delete_order = move |_| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("Delete the selected order?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if confirmed {
            store.delete_order_cmd();
        }
    };

    view! {
        <section class="order-details">
            {move || store.current_order.get().map(|order| view! {
                <div class="order-details__header">
                    <div>
                        <h2>
                            {"Order "}
                            <span class="order-number">{order.id.value()}</span>
                        </h2>
                        <span class="customer">{"Customer: "}{order.summary.customer.clone()}</span>
                        <span>{"Ordered: "}{format_date(&order.summary.created_at)}</span>
                        <span>{"Shipped: "}{format_date(&order.summary.shipped_at)}</span>
                    </div>
                    <div class="order-details__total">
                        <span class="total-price">{format_amount(order.summary.total_price)}</span>
                        <span>{order.summary.currency.clone()}</span>
                    </div>
                    <button class="button button--secondary" on:click=delete_order>
                        {"Delete order"}
                    </button>
                </div>
            })}

            <div class="order-details__tabs">
                <TabButton label="Address" tab=InfoTab::Address />
                <TabButton label="Client" tab=InfoTab::Client />
                <TabButton label="Map" tab=InfoTab::Map />
            </div>

            <div class="order-details__body">
                {move || match store.tab.get() {
                    InfoTab::Address => view! { <AddressTab /> }.into_any(),
                    InfoTab::Client => view! { <ClientTab /> }.into_any(),
                    InfoTab::Map => view! { <MapTab /> }.into_any(),
                }}
            </div>
        </section>
    }
}

#[component]
fn TabButton(#[prop(into)] label: String, tab: InfoTab) -> impl IntoView {
    let store = use_context::<OrdersStore>().expect("OrdersStore not found in context");

    view! {
        <button
            class="tab-button"
            class:tab-button--active=move || store.tab.get() == tab
            on:click=move |_| store.activate_tab(tab)
        >
            {label}
        </button>
    }
}

#[component]
fn AddressTab() -> impl IntoView {
    let store = use_context::<OrdersStore>().expect("OrdersStore not found in context");
    let form = RwSignal::new(AddressForm::default());
    let flaws = RwSignal::new(Vec::<usize>::new());

    let enter_edit = move |_| {
        if let Some(order) = store.current_order.get_untracked() {
            form.set(AddressForm::from_ship_to(&order.ship_to));
            flaws.set(Vec::new());
            store.edit_mode.set(true);
        }
    };

    let save = move |_| {
        let current = form.get_untracked();
        let found = find_flaws(&current.values());
        if found.is_empty() {
            store.save_address_cmd(current.into_patch());
        } else {
            flaws.set(found);
        }
    };

    view! {
        <div class="info-panel" id="address">
            <h3>{"Shipping address"}</h3>
            <Show
                when=move || store.edit_mode.get()
                fallback=move || view! {
                    {move || store.current_order.get().map(|order| view! {
                        <div class="edit-form">
                            <InfoRow label="Name: " value=order.ship_to.name.clone() />
                            <InfoRow label="Street: " value=order.ship_to.address.clone() />
                            <InfoRow label="ZIP Code/City: " value=order.ship_to.zip.clone() />
                            <InfoRow label="Region: " value=order.ship_to.region.clone() />
                            <InfoRow label="Country: " value=order.ship_to.country.clone() />
                        </div>
                    })}
                    <button class="button button--secondary" on:click=enter_edit>
                        {"Edit"}
                    </button>
                }
            >
                <div class="edit-form">
                    <FlawInput
                        label="Name: "
                        index=0
                        flaws=flaws
                        value=Signal::derive(move || form.get().name)
                        on_input=Callback::new(move |v| form.update(|f| f.name = v))
                    />
                    <FlawInput
                        label="Street: "
                        index=1
                        flaws=flaws
                        value=Signal::derive(move || form.get().address)
                        on_input=Callback::new(move |v| form.update(|f| f.address = v))
                    />
                    <FlawInput
                        label="ZIP Code/City: "
                        index=2
                        flaws=flaws
                        value=Signal::derive(move || form.get().zip)
                        on_input=Callback::new(move |v| form.update(|f| f.zip = v))
                    />
                    <FlawInput
                        label="Region: "
                        index=3
                        flaws=flaws
                        value=Signal::derive(move || form.get().region)
                        on_input=Callback::new(move |v| form.update(|f| f.region = v))
                    />
                    <FlawInput
                        label="Country: "
                        index=4
                        flaws=flaws
                        value=Signal::derive(move || form.get().country)
                        on_input=Callback::new(move |v| form.update(|f| f.country = v))
                    />
                </div>
                <button class="button button--primary" on:click=save>
                    {"Save"}
                </button>
            </Show>
        </div>
    }
}

#[component]
fn ClientTab() -> impl IntoView {
    let store = use_context::<OrdersStore>().expect("OrdersStore not found in context");
    let form = RwSignal::new(ClientForm::default());
    let flaws = RwSignal::new(Vec::<usize>::new());

    let enter_edit = move |_| {
        if let Some(order) = store.current_order.get_untracked() {
            form.set(ClientForm::from_customer_info(&order.customer_info));
            flaws.set(Vec::new());
            store.edit_mode.set(true);
        }
    };

    let save = move |_| {
        let current = form.get_untracked();
        let found = find_flaws(&current.values());
        if found.is_empty() {
            store.save_client_cmd(current.into_patch());
        } else {
            flaws.set(found);
        }
    };

    view! {
        <div class="info-panel" id="client">
            <h3>{"Client info"}</h3>
            <Show
                when=move || store.edit_mode.get()
                fallback=move || view! {
                    {move || store.current_order.get().map(|order| view! {
                        <div class="edit-form">
                            <InfoRow label="Name: " value=order.customer_info.first_name.clone() />
                            <InfoRow label="Surname: " value=order.customer_info.last_name.clone() />
                            <InfoRow label="Street: " value=order.customer_info.address.clone() />
                            <InfoRow label="Phone: " value=order.customer_info.phone.clone() />
                            <InfoRow label="Email: " value=order.customer_info.email.clone() />
                        </div>
                    })}
                    <button class="button button--secondary" on:click=enter_edit>
                        {"Edit"}
                    </button>
                }
            >
                <div class="edit-form">
                    <FlawInput
                        label="Name: "
                        index=0
                        flaws=flaws
                        value=Signal::derive(move || form.get().first_name)
                        on_input=Callback::new(move |v| form.update(|f| f.first_name = v))
                    />
                    <FlawInput
                        label="Surname: "
                        index=1
                        flaws=flaws
                        value=Signal::derive(move || form.get().last_name)
                        on_input=Callback::new(move |v| form.update(|f| f.last_name = v))
                    />
                    <FlawInput
                        label="Street: "
                        index=2
                        flaws=flaws
                        value=Signal::derive(move || form.get().address)
                        on_input=Callback::new(move |v| form.update(|f| f.address = v))
                    />
                    <FlawInput
                        label="Phone: "
                        index=3
                        flaws=flaws
                        value=Signal::derive(move || form.get().phone)
                        on_input=Callback::new(move |v| form.update(|f| f.phone = v))
                    />
                    <FlawInput
                        label="Email: "
                        index=4
                        flaws=flaws
                        value=Signal::derive(move || form.get().email)
                        on_input=Callback::new(move |v| form.update(|f| f.email = v))
                    />
                </div>
                <button class="button button--primary" on:click=save>
                    {"Save"}
                </button>
            </Show>
        </div>
    }
}

/// No map widget is wired up yet; the tab shows the shipping address
/// a widget would center on.
#[component]
fn MapTab() -> impl IntoView {
    let store = use_context::<OrdersStore>().expect("OrdersStore not found in context");

    view! {
        <div class="info-panel" id="map">
            <h3>{"Map"}</h3>
            <div class="map">
                {move || store.current_order.get().map(|order| format!(
                    "{}, {}, {}",
                    order.ship_to.address, order.ship_to.region, order.ship_to.country
                ))}
            </div>
        </div>
    }
}

