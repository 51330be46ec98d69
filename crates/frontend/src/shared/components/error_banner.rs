use leptos::prelude::*;

/// Inline warning banner shown above a list that still has stale data.
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    /// Re-runs the failed load
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        {move || message.get().map(|msg| view! {
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{msg}</span>
                <button class="button button--secondary" on:click=move |_| on_retry.run(())>
                    "Retry"
                </button>
            </div>
        })}
    }
}

/// Full-page error shown when the first load failed and there is nothing
/// to render yet.
#[component]
pub fn ErrorScreen(
    #[prop(into)] message: String,
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-screen">
            <div class="error-screen__icon">"⚠"</div>
            <div class="error-screen__message">{message}</div>
            <button class="button button--primary" on:click=move |_| on_retry.run(())>
                "Retry"
            </button>
        </div>
    }
}

/// Full-page spinner for the very first load.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner"></div>
            <div class="loading-screen__text">"Loading..."</div>
        </div>
    }
}
