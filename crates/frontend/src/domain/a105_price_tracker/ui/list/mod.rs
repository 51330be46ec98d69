use contracts::domain::a105_price_tracker::{AlertSeverity, PriceAlert, PriceHistory};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a105_price_tracker::api;
use crate::domain::a105_price_tracker::view_model::{patch_acknowledged, sort_alerts};
use crate::shared::components::error_banner::{ErrorBanner, ErrorScreen, LoadingScreen};
use crate::shared::components::number_format::format_money;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_and_summarize, ListCriteria, SearchInput};
use crate::shared::remote::RemoteState;

#[component]
#[allow(non_snake_case)]
pub fn PriceAlertList() -> impl IntoView {
    let alerts = RwSignal::new(RemoteState::<Vec<PriceAlert>>::Idle);
    let criteria = RwSignal::new(ListCriteria::default());
    let (ack_error, set_ack_error) = signal(Option::<String>::None);
    let history = RwSignal::new(RemoteState::<PriceHistory>::Idle);

    let fetch = move || {
        alerts.update(|s| *s = std::mem::take(s).begin());
        spawn_local(async move {
            let result = api::fetch_alerts().await;
            alerts.update(|s| *s = std::mem::take(s).resolve(result));
        });
    };

    fetch();

    let visible = move || {
        let all = alerts.get().data().cloned().unwrap_or_default();
        let mut visible = filter_and_summarize(&all, &criteria.get()).visible;
        sort_alerts(&mut visible);
        visible
    };

    let open_count = move || visible().iter().filter(|a| !a.acknowledged).count();
    let critical_count = move || {
        visible()
            .iter()
            .filter(|a| a.severity == AlertSeverity::Critical && !a.acknowledged)
            .count()
    };

    let show_history = move |ingredient_id: uuid::Uuid| {
        history.update(|s| *s = std::mem::take(s).begin());
        spawn_local(async move {
            let result = api::fetch_history(ingredient_id).await;
            history.update(|s| *s = std::mem::take(s).resolve(result));
        });
    };

    // Optimistic patch, rolled back if the request fails.
    let acknowledge = move |id: u64| {
        alerts.update(|s| {
            if let RemoteState::Loaded(list) = s {
                patch_acknowledged(list, id, true);
            }
        });
        spawn_local(async move {
            match api::acknowledge_alert(id).await {
                Ok(_) => set_ack_error.set(None),
                Err(e) => {
                    alerts.update(|s| {
                        if let RemoteState::Loaded(list) = s {
                            patch_acknowledged(list, id, false);
                        }
                    });
                    set_ack_error.set(Some(e));
                }
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Price Tracker" subtitle="Ingredient price movements by supplier">
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            {move || {
                let state = alerts.get();
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
                            alerts.get().error().map(str::to_string).or_else(|| ack_error.get())
                        })
                        on_retry=Callback::new(move |_| fetch())
                    />

                    <div class="stat-cards">
                        <StatCard
                            label="Open alerts".to_string()
                            icon_name="trend".to_string()
                            value=Signal::derive(move || Some(open_count() as f64))
                            format=ValueFormat::Integer
                            status=Signal::derive(move || {
                                if open_count() > 0 { IndicatorStatus::Warning } else { IndicatorStatus::Good }
                            })
                        />
                        <StatCard
                            label="Critical".to_string()
                            icon_name="alert".to_string()
                            value=Signal::derive(move || Some(critical_count() as f64))
                            format=ValueFormat::Integer
                            status=Signal::derive(move || {
                                if critical_count() > 0 { IndicatorStatus::Bad } else { IndicatorStatus::Good }
                            })
                        />
                    </div>

                    <div class="filter-bar">
                        <SearchInput
                            value=Signal::derive(move || criteria.get().search)
                            on_change=Callback::new(move |s| criteria.update(|c| c.search = s))
                            placeholder="Search ingredient or supplier..."
                        />
                        <select
                            class="filter-bar__select"
                            on:change=move |ev| criteria.update(|c| {
                                let v = event_target_value(&ev);
                                c.status = if v.is_empty() { None } else { Some(v) };
                            })
                        >
                            <option value="">"All severities"</option>
                            {AlertSeverity::ALL.into_iter().map(|s| view! {
                                <option
                                    value=s.key()
                                    selected=move || criteria.get().status.as_deref() == Some(s.key())
                                >
                                    {s.label()}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Ingredient"</th>
                                    <th class="table__header-cell">"Supplier"</th>
                                    <th class="table__header-cell">"Old price"</th>
                                    <th class="table__header-cell">"New price"</th>
                                    <th class="table__header-cell">"Change"</th>
                                    <th class="table__header-cell">"Severity"</th>
                                    <th class="table__header-cell">"Raised"</th>
                                    <th class="table__header-cell"></th>
                                </tr>
                            </thead>
                            <tbody>
                                {visible().into_iter().map(|alert| {
                                    let id = alert.id;
                                    let ingredient_id = alert.ingredient_id;
                                    let acked = alert.acknowledged;
                                    let change_class = if alert.change_percent >= 0.0 {
                                        "price-change price-change--up"
                                    } else {
                                        "price-change price-change--down"
                                    };
                                    view! {
                                        <tr
                                            class="table__row"
                                            class=("table__row--muted", acked)
                                            on:click=move |_| show_history(ingredient_id)
                                        >
                                            <td class="table__cell">{alert.ingredient.clone()}</td>
                                            <td class="table__cell">{alert.supplier_name.clone()}</td>
                                            <td class="table__cell">{format_money(alert.old_price)}</td>
                                            <td class="table__cell">{format_money(alert.new_price)}</td>
                                            <td class="table__cell">
                                                <span class=change_class>
                                                    {format!("{:+.1}%", alert.change_percent)}
                                                </span>
                                            </td>
                                            <td class="table__cell">
                                                <span class=alert.severity.css_class()>{alert.severity.label()}</span>
                                            </td>
                                            <td class="table__cell">
                                                {format_datetime(&alert.created_at.to_rfc3339())}
                                            </td>
                                            <td class="table__cell table__cell--actions">
                                                <Show when=move || !acked>
                                                    <button
                                                        class="button button--small"
                                                        on:click=move |ev| {
                                                            ev.stop_propagation();
                                                            acknowledge(id);
                                                        }
                                                    >
                                                        {icon("check")}
                                                        "Acknowledge"
                                                    </button>
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>

                    {move || history.get().data().cloned().map(|h| view! {
                        <h2 class="section-title">{format!("Price history: {}", h.ingredient)}</h2>
                        <div class="table">
                            <table class="table__data">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Date"</th>
                                        <th class="table__header-cell">"Price"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {h.points.iter().map(|p| view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{format_date(&p.date.to_string())}</td>
                                            <td class="table__cell">{format_money(p.price)}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    })}
                }.into_any()
            }}
        </div>
    }
}
