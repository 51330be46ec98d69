use crate::routes::routes::Page;
use leptos::prelude::*;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::Catering),
            sidebar_open: RwSignal::new(true),
        }
    }

    /// Sync the active page with the browser URL: pick up the page from
    /// `location.pathname` on startup, then mirror page changes back via
    /// `history.replaceState`.
    pub fn init_router_integration(&self) {
        let path = window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        if let Some(page) = Page::from_path(&path) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_path = this.active.get().path();

            let current = window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default();
            if current != new_path {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(new_path),
                        );
                    }
                }
            }
        });
    }

    pub fn activate(&self, page: Page) {
        self.active.set(page);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
