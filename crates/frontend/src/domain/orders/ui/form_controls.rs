use leptos::prelude::*;

/// Read-only label/value row of an info panel.
#[component]
pub fn InfoRow(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <p class="edit-form__row">
            <label>{label}</label>
            <span>{value}</span>
        </p>
    }
}

/// Text input that reflects validation flaws: offending fields get the
/// `flaw` class and a "Fill me" placeholder.
#[component]
pub fn FlawInput(
    #[prop(into)] label: String,
    index: usize,
    flaws: RwSignal<Vec<usize>>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <p class="edit-form__row">
            <label>{label}</label>
            <input
                type="text"
                class:flaw=move || flaws.get().contains(&index)
                placeholder=move || {
                    if flaws.get().contains(&index) { "Fill me" } else { "" }
                }
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </p>
    }
}
