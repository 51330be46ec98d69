pub mod global_context;
pub mod sidebar;

use leptos::prelude::*;

/// Application shell: fixed sidebar on the left, page content on the right.
#[component]
pub fn Shell<S, C>(sidebar: S, content: C) -> impl IntoView
where
    S: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <aside class="app-sidebar">
                {sidebar()}
            </aside>
            <main class="app-main">
                {content()}
            </main>
        </div>
    }
}
