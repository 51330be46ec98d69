use contracts::domain::a108_sensor::{SensorKind, SensorReading, SensorStatus};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

use crate::domain::a108_sensor::api;
use crate::domain::a108_sensor::view_model::{
    kind_count, low_battery, sort_readings, unhealthy_count,
};
use crate::shared::components::error_banner::{ErrorBanner, ErrorScreen, LoadingScreen};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::polling::use_polling;
use crate::shared::remote::RemoteState;

const POLL_INTERVAL_MS: u32 = 30_000;
const LOW_BATTERY_THRESHOLD: u8 = 20;

#[component]
#[allow(non_snake_case)]
pub fn SensorDashboard() -> impl IntoView {
    let readings = RwSignal::new(RemoteState::<Vec<SensorReading>>::Idle);

    // Refreshes every 30s; a response landing after a newer tick has
    // started is dropped instead of applied.
    use_polling(POLL_INTERVAL_MS, move |tick| async move {
        readings.update(|s| *s = std::mem::take(s).begin());
        let result = api::fetch_readings().await.map(|mut readings| {
            sort_readings(&mut readings);
            readings
        });
        if tick.is_current() {
            readings.update(|s| *s = std::mem::take(s).resolve(result));
        }
    });

    let all = move || readings.get().data().cloned().unwrap_or_default();

    let kind_card = move |kind: SensorKind, icon_name: &str| {
        let icon_name = icon_name.to_string();
        view! {
            <StatCard
                label=kind.label().to_string()
                icon_name=icon_name
                value=Signal::derive(move || Some(kind_count(&all(), kind) as f64))
                format=ValueFormat::Integer
                status=Signal::derive(move || {
                    if unhealthy_count(&all(), kind) > 0 {
                        IndicatorStatus::Bad
                    } else {
                        IndicatorStatus::Good
                    }
                })
                subtitle=Signal::derive(move || {
                    let bad = unhealthy_count(&all(), kind);
                    Some(if bad == 0 {
                        "all healthy".to_string()
                    } else {
                        format!("{} need attention", bad)
                    })
                })
            />
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Sensors" subtitle="Cold storage and door monitoring, refreshed every 30 seconds" />

            {move || {
                let state = readings.get();
                if state.is_blank() {
                    if let Some(message) = state.error() {
                        // Retry without waiting for the next poll
                        return view! {
                            <ErrorScreen
                                message=message.to_string()
                                on_retry=Callback::new(move |_| {
                                    readings.update(|s| *s = std::mem::take(s).begin());
                                    wasm_bindgen_futures::spawn_local(async move {
                                        let result = api::fetch_readings().await.map(|mut r| {
                                            sort_readings(&mut r);
                                            r
                                        });
                                        readings.update(|s| *s = std::mem::take(s).resolve(result));
                                    });
                                })
                            />
                        }.into_any();
                    }
                    return view! { <LoadingScreen /> }.into_any();
                }

                view! {
                    <ErrorBanner
                        message=Signal::derive(move || {
                            readings.get().error().map(|e| format!("Last refresh failed: {}", e))
                        })
                        on_retry=Callback::new(move |_| {
                            readings.update(|s| *s = std::mem::take(s).begin());
                            wasm_bindgen_futures::spawn_local(async move {
                                let result = api::fetch_readings().await.map(|mut r| {
                                    sort_readings(&mut r);
                                    r
                                });
                                readings.update(|s| *s = std::mem::take(s).resolve(result));
                            });
                        })
                    />

                    <div class="stat-cards">
                        {kind_card(SensorKind::Temperature, "thermometer")}
                        {kind_card(SensorKind::Humidity, "trend")}
                        {kind_card(SensorKind::DoorContact, "alert")}
                    </div>

                    {
                        let low = low_battery(&all(), LOW_BATTERY_THRESHOLD)
                            .iter()
                            .map(|r| r.name.clone())
                            .collect::<Vec<_>>();
                        (!low.is_empty()).then(|| view! {
                            <div class="warning-box">
                                <span class="warning-box__icon">{icon("alert")}</span>
                                <span class="warning-box__text">
                                    {format!("Low battery: {}", low.join(", "))}
                                </span>
                            </div>
                        })
                    }

                    <div class="sensor-grid">
                        {all().into_iter().map(|reading| {
                            let status = reading.status;
                            view! {
                                <div class="sensor-card" class=("sensor-card--alert", status == SensorStatus::Alert)>
                                    <div class="sensor-card__head">
                                        <span class="sensor-card__name">{reading.name.clone()}</span>
                                        <span class=status.css_class()>{status.label()}</span>
                                    </div>
                                    <div class="sensor-card__value">
                                        {format!("{:.1} {}", reading.value, reading.unit)}
                                    </div>
                                    <div class="sensor-card__meta">
                                        <span>{reading.kind.label()}</span>
                                        {reading.battery_percent.map(|pct| view! {
                                            <span class=("sensor-card__battery--low", pct < LOW_BATTERY_THRESHOLD)>
                                                {format!("battery {}%", pct)}
                                            </span>
                                        })}
                                        <span class="sensor-card__time">
                                            {format_datetime(&reading.recorded_at.to_rfc3339())}
                                        </span>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}
