use contracts::domain::a106_payment_terminal::{
    PaymentTerminal, TerminalSettingsPatch, TerminalStatus,
};
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a106_payment_terminal::api;
use crate::domain::a106_payment_terminal::view_model::{
    parse_tip_suggestions, patch_enabled, replace_terminal,
};
use crate::shared::components::error_banner::{ErrorBanner, ErrorScreen, LoadingScreen};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_and_summarize, ListCriteria, SearchInput};
use crate::shared::remote::RemoteState;

#[component]
#[allow(non_snake_case)]
pub fn TerminalSettings() -> impl IntoView {
    let terminals = RwSignal::new(RemoteState::<Vec<PaymentTerminal>>::Idle);
    let criteria = RwSignal::new(ListCriteria::default());
    let (toggle_error, set_toggle_error) = signal(Option::<String>::None);

    let fetch = move || {
        terminals.update(|s| *s = std::mem::take(s).begin());
        spawn_local(async move {
            let result = api::fetch_terminals().await;
            terminals.update(|s| *s = std::mem::take(s).resolve(result));
        });
    };

    fetch();

    let visible = move || {
        let all = terminals.get().data().cloned().unwrap_or_default();
        filter_and_summarize(&all, &criteria.get()).visible
    };

    // Flip the switch locally first; undo it if the server says no.
    let toggle_enabled = move |id: Uuid, enabled: bool| {
        terminals.update(|s| {
            if let RemoteState::Loaded(list) = s {
                patch_enabled(list, id, enabled);
            }
        });
        spawn_local(async move {
            let patch = TerminalSettingsPatch {
                enabled: Some(enabled),
                ..Default::default()
            };
            match api::update_settings(id, &patch).await {
                Ok(updated) => {
                    set_toggle_error.set(None);
                    terminals.update(|s| {
                        if let RemoteState::Loaded(list) = s {
                            replace_terminal(list, updated);
                        }
                    });
                }
                Err(e) => {
                    terminals.update(|s| {
                        if let RemoteState::Loaded(list) = s {
                            patch_enabled(list, id, !enabled);
                        }
                    });
                    set_toggle_error.set(Some(e));
                }
            }
        });
    };

    let on_saved = Callback::new(move |updated: PaymentTerminal| {
        terminals.update(|s| {
            if let RemoteState::Loaded(list) = s {
                replace_terminal(list, updated.clone());
            }
        });
    });

    view! {
        <div class="page">
            <PageHeader title="Payment Terminals" subtitle="Tips, surcharges and receipt settings per device">
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            {move || {
                let state = terminals.get();
                if state.is_blank() {
                    if let Some(message) = state.error() {
                        return view! {
                            <ErrorScreen
                                message=message.to_string()
                                on_retry=Callback::new(move |_| fetch())
                            />
                        }.into_any();
                    }
                    return view! { <LoadingScreen /> }.into_any();
                }

                view! {
                    <ErrorBanner
                        message=Signal::derive(move || {
                            terminals.get().error().map(str::to_string).or_else(|| toggle_error.get())
                        })
                        on_retry=Callback::new(move |_| fetch())
                    />

                    <div class="filter-bar">
                        <SearchInput
                            value=Signal::derive(move || criteria.get().search)
                            on_change=Callback::new(move |s| criteria.update(|c| c.search = s))
                            placeholder="Search terminal or location..."
                        />
                        <select
                            class="filter-bar__select"
                            on:change=move |ev| criteria.update(|c| {
                                let v = event_target_value(&ev);
                                c.status = if v.is_empty() { None } else { Some(v) };
                            })
                        >
                            <option value="">"All statuses"</option>
                            <option value="online">"Online"</option>
                            <option value="offline">"Offline"</option>
                            <option value="maintenance">"Maintenance"</option>
                        </select>
                    </div>

                    <div class="card-grid">
                        {visible().into_iter().map(|terminal| view! {
                            <TerminalCard
                                terminal=terminal
                                on_toggle=Callback::new(move |(id, enabled)| toggle_enabled(id, enabled))
                                on_saved=on_saved
                            />
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}

/// One device card with the enable switch and an inline settings form.
#[component]
#[allow(non_snake_case)]
fn TerminalCard(
    terminal: PaymentTerminal,
    on_toggle: Callback<(Uuid, bool)>,
    on_saved: Callback<PaymentTerminal>,
) -> impl IntoView {
    let id = terminal.id;
    let enabled = terminal.enabled;
    let status = terminal.status;
    let offline = status == TerminalStatus::Offline;

    let tips_input = RwSignal::new(
        terminal
            .tip_suggestions
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    );
    let surcharge_input = RwSignal::new(format!("{:.1}", terminal.surcharge_percent));
    let footer_input = RwSignal::new(terminal.receipt_footer.clone().unwrap_or_default());
    let (form_error, set_form_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let save = move || {
        let tips = match parse_tip_suggestions(&tips_input.get()) {
            Ok(tips) => tips,
            Err(e) => {
                set_form_error.set(Some(e));
                return;
            }
        };
        let surcharge = match surcharge_input.get().trim().parse::<f64>() {
            Ok(pct) => pct,
            Err(_) => {
                set_form_error.set(Some("Surcharge must be a number".into()));
                return;
            }
        };
        let footer = footer_input.get();
        let patch = TerminalSettingsPatch {
            enabled: None,
            tip_suggestions: Some(tips),
            surcharge_percent: Some(surcharge),
            receipt_footer: if footer.trim().is_empty() {
                None
            } else {
                Some(footer.trim().to_string())
            },
        };
        if let Err(e) = patch.validate() {
            set_form_error.set(Some(e));
            return;
        }

        set_saving.set(true);
        set_form_error.set(None);
        spawn_local(async move {
            let result = api::update_settings(id, &patch).await;
            set_saving.set(false);
            match result {
                Ok(updated) => on_saved.run(updated),
                Err(e) => set_form_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="card terminal-card">
            <div class="card__header">
                <div class="card__title">{terminal.label.clone()}</div>
                <span class=status.css_class()>{status.label()}</span>
            </div>
            <div class="card__subtitle">{terminal.location.clone()}</div>

            <label class="toggle">
                <input
                    type="checkbox"
                    prop:checked=enabled
                    disabled=offline
                    on:change=move |ev| on_toggle.run((id, event_target_checked(&ev)))
                />
                <span class="toggle__label">
                    {if enabled { "Accepting payments" } else { "Disabled" }}
                </span>
            </label>

            <div class="form">
                <label class="form__field">
                    <span class="form__label">"Tip suggestions (%)"</span>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || tips_input.get()
                        on:input=move |ev| tips_input.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span class="form__label">"Surcharge (%)"</span>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || surcharge_input.get()
                        on:input=move |ev| surcharge_input.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span class="form__label">"Receipt footer"</span>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || footer_input.get()
                        on:input=move |ev| footer_input.set(event_target_value(&ev))
                    />
                </label>

                {move || form_error.get().map(|e| view! {
                    <div class="form__error">{e}</div>
                })}

                <button
                    class="button button--primary"
                    disabled=move || saving.get()
                    on:click=move |_| save()
                >
                    {move || if saving.get() { "Saving..." } else { "Save settings" }}
                </button>
            </div>
        </div>
    }
}
