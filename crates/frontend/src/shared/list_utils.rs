//! List helpers shared by the sidebar and the product table:
//! a debounced search box and sort-indicator helpers.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Sort indicator for a header cell: the active column shows the
/// direction, inactive columns show the neutral glyph.
pub fn get_sort_indicator<F: PartialEq>(current: Option<F>, field: F, ascending: bool) -> &'static str {
    if current == Some(field) {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class for a header cell indicator.
pub fn get_sort_class<F: PartialEq>(current: Option<F>, field: F) -> &'static str {
    if current == Some(field) {
        "sorted-by"
    } else {
        "sort-indicator"
    }
}

/// Search box with debounce and a clear button.
#[component]
pub fn SearchBox(
    /// Callback fired (debounced) with the query text
    on_search: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local input state, before debounce
    let (input_value, set_input_value) = signal(String::new());

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        // Cancel the previous timer if one is pending
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_search.run(new_value.clone());
        }) as Box<dyn Fn()>);

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            300,
        ) {
            Ok(timeout_id) => debounce_timeout.set_value(Some(timeout_id)),
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
        closure.forget();
    };

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_search.run(String::new());
    };

    view! {
        <div class="search-box">
            <input
                type="text"
                class="search-box__input"
                placeholder={placeholder}
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button class="search-box__clear" title="Clear" on:click=clear_filter>
                        {"×"}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator_states() {
        assert_eq!(get_sort_indicator(Some("price"), "price", true), " ▲");
        assert_eq!(get_sort_indicator(Some("price"), "price", false), " ▼");
        assert_eq!(get_sort_indicator(Some("price"), "name", true), " ⇅");
        assert_eq!(get_sort_indicator(None::<&str>, "name", true), " ⇅");
    }

    #[test]
    fn test_sort_class() {
        assert_eq!(get_sort_class(Some("price"), "price"), "sorted-by");
        assert_eq!(get_sort_class(None::<&str>, "price"), "sort-indicator");
    }
}
