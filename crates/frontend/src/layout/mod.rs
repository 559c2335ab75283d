use leptos::prelude::*;

/// Application shell: order list on the left, order detail in the center.
///
/// ```text
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// |   (Left)  |           (Center)           |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <div class="app-body">
                <aside class="app-sidebar">
                    {left()}
                </aside>

                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}
