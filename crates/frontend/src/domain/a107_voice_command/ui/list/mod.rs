use contracts::domain::a107_voice_command::VoiceCommand;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a107_voice_command::api;
use crate::domain::a107_voice_command::view_model::{push_result, sort_history, success_rate};
use crate::shared::components::error_banner::{ErrorBanner, ErrorScreen, LoadingScreen};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::remote::RemoteState;

#[component]
#[allow(non_snake_case)]
pub fn VoiceCommandPage() -> impl IntoView {
    let history = RwSignal::new(RemoteState::<Vec<VoiceCommand>>::Idle);
    let phrase = RwSignal::new(String::new());
    let (sending, set_sending) = signal(false);
    let (send_error, set_send_error) = signal(Option::<String>::None);

    let fetch = move || {
        history.update(|s| *s = std::mem::take(s).begin());
        spawn_local(async move {
            let result = api::fetch_history().await.map(|mut commands| {
                sort_history(&mut commands);
                commands
            });
            history.update(|s| *s = std::mem::take(s).resolve(result));
        });
    };

    fetch();

    let submit = move || {
        let text = phrase.get().trim().to_string();
        if text.is_empty() || sending.get() {
            return;
        }
        set_sending.set(true);
        set_send_error.set(None);
        spawn_local(async move {
            let result = api::submit_phrase(text).await;
            set_sending.set(false);
            match result {
                Ok(command) => {
                    phrase.set(String::new());
                    history.update(|s| {
                        if let RemoteState::Loaded(list) = s {
                            push_result(list, command);
                        }
                    });
                }
                Err(e) => set_send_error.set(Some(e)),
            }
        });
    };

    let commands = move || history.get().data().cloned().unwrap_or_default();

    view! {
        <div class="page">
            <PageHeader title="Voice Assistant" subtitle="Ask about bookings, stock and orders">
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            {move || {
                let state = history.get();
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
                            history.get().error().map(str::to_string)
                        })
                        on_retry=Callback::new(move |_| fetch())
                    />

                    <div class="stat-cards">
                        <StatCard
                            label="Commands today".to_string()
                            icon_name="mic".to_string()
                            value=Signal::derive(move || Some(commands().len() as f64))
                            format=ValueFormat::Integer
                            status=Signal::derive(|| IndicatorStatus::Neutral)
                        />
                        <StatCard
                            label="Success rate".to_string()
                            icon_name="check".to_string()
                            value=Signal::derive(move || Some(success_rate(&commands())))
                            format=ValueFormat::Percent { decimals: 0 }
                            status=Signal::derive(move || {
                                if success_rate(&commands()) >= 80.0 {
                                    IndicatorStatus::Good
                                } else {
                                    IndicatorStatus::Warning
                                }
                            })
                        />
                    </div>

                    <div class="voice-entry">
                        <input
                            type="text"
                            class="voice-entry__input"
                            placeholder="Type a command, e.g. 'how many covers tonight'"
                            prop:value=move || phrase.get()
                            on:input=move |ev| phrase.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    submit();
                                }
                            }
                        />
                        <button
                            class="button button--primary"
                            disabled=move || sending.get()
                            on:click=move |_| submit()
                        >
                            {icon("mic")}
                            {move || if sending.get() { "Parsing..." } else { "Send" }}
                        </button>
                    </div>

                    {move || send_error.get().map(|e| view! {
                        <div class="form__error">{e}</div>
                    })}

                    <div class="voice-feed">
                        {commands().into_iter().map(|command| view! {
                            <div class="voice-feed__item">
                                <div class="voice-feed__head">
                                    <span class="voice-feed__phrase">{format!("\u{201c}{}\u{201d}", command.phrase)}</span>
                                    <span class=command.outcome.css_class()>{command.outcome.label()}</span>
                                    <span class="voice-feed__time">
                                        {format_datetime(&command.executed_at.to_rfc3339())}
                                    </span>
                                </div>
                                {command.intent.clone().map(|intent| view! {
                                    <div class="voice-feed__intent">{"Intent: "}{intent}</div>
                                })}
                                {command.response_text.clone().map(|text| view! {
                                    <div class="voice-feed__response">{text}</div>
                                })}
                            </div>
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}
