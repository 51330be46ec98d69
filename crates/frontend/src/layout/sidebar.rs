use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::Page;
use crate::shared::icons::icon;
use crate::system::auth::context::{use_auth, AuthState};
use crate::system::auth::storage;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (auth_state, set_auth_state) = use_auth();

    let sign_out = move |_| {
        storage::clear_token();
        set_auth_state.set(AuthState::default());
    };

    let user_label = move || {
        auth_state
            .get()
            .user
            .map(|u| u.display_name.unwrap_or(u.username))
            .unwrap_or_default()
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">
                {icon("chef-hat")}
                <span class="sidebar__brand-name">"Backhouse"</span>
            </div>
            <ul class="sidebar__nav">
                {Page::ALL.into_iter().map(|page| {
                    let is_active = move || ctx.active.get() == page;
                    view! {
                        <li>
                            <button
                                class="sidebar__item"
                                class=("sidebar__item--active", is_active)
                                on:click=move |_| ctx.activate(page)
                            >
                                {icon(page.icon_name())}
                                <span class="sidebar__item-label">{page.title()}</span>
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
            <div class="sidebar__footer">
                <span class="sidebar__user">{user_label}</span>
                <button class="button button--secondary" on:click=sign_out>
                    "Sign out"
                </button>
            </div>
        </nav>
    }
}
