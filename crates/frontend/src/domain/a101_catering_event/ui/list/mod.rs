use chrono::{Datelike, Utc};
use contracts::domain::a101_catering_event::{
    CateringEvent, CateringPackage, EventStatus, StaffAssignment,
};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a101_catering_event::api;
use crate::domain::a101_catering_event::ui::details::CateringEventDetails;
use crate::domain::a101_catering_event::view_model::{event_stats, events_by_date};
use crate::shared::calendar::{month_grid, month_label, next_month, prev_month, WEEKDAY_LABELS};
use crate::shared::components::error_banner::{ErrorBanner, ErrorScreen, LoadingScreen};
use crate::shared::components::modal::Modal;
use crate::shared::components::number_format::format_money;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_and_summarize, ListCriteria, SearchInput};
use crate::shared::remote::RemoteState;

#[component]
#[allow(non_snake_case)]
pub fn CateringEventList() -> impl IntoView {
    let events = RwSignal::new(RemoteState::<Vec<CateringEvent>>::Idle);
    // Optional endpoints: a failure here degrades to an empty section.
    let packages = RwSignal::new(Vec::<CateringPackage>::new());
    let staff = RwSignal::new(Vec::<StaffAssignment>::new());

    let criteria = RwSignal::new(ListCriteria::default());
    let (show_calendar, set_show_calendar) = signal(false);
    let today = Utc::now().date_naive();
    let calendar_month = RwSignal::new((today.year(), today.month()));

    let (show_modal, set_show_modal) = signal(false);
    let (editing, set_editing) = signal(Option::<CateringEvent>::None);

    let fetch = move || {
        events.update(|s| *s = std::mem::take(s).begin());
        spawn_local(async move {
            let (ev, pk, st) = futures::join!(
                api::fetch_events(),
                api::fetch_packages(),
                api::fetch_staff()
            );
            events.update(|s| *s = std::mem::take(s).resolve(ev));
            match pk {
                Ok(list) => packages.set(list),
                Err(e) => log::warn!("packages fetch failed: {}", e),
            }
            match st {
                Ok(list) => staff.set(list),
                Err(e) => log::warn!("staff fetch failed: {}", e),
            }
        });
    };

    fetch();

    let view_model = move || {
        let items = events.get().data().cloned().unwrap_or_default();
        filter_and_summarize(&items, &criteria.get())
    };

    let stats = move || event_stats(&view_model().visible);

    let handle_create = move |_| {
        set_editing.set(None);
        set_show_modal.set(true);
    };

    let handle_edit = move |event: CateringEvent| {
        set_editing.set(Some(event));
        set_show_modal.set(true);
    };

    let staff_for = move |event_id: uuid::Uuid| {
        staff
            .get()
            .iter()
            .filter(|s| s.event_id == event_id)
            .map(|s| s.staff_name.clone())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let calendar_view = move || {
        let (year, month) = calendar_month.get();
        let by_date = events_by_date(&view_model().visible);
        let grid = month_grid(year, month);
        view! {
            <div class="calendar">
                <div class="calendar__nav">
                    <button class="button button--secondary" on:click=move |_| {
                        calendar_month.update(|m| *m = prev_month(m.0, m.1));
                    }>"‹"</button>
                    <span class="calendar__label">{month_label(year, month)}</span>
                    <button class="button button--secondary" on:click=move |_| {
                        calendar_month.update(|m| *m = next_month(m.0, m.1));
                    }>"›"</button>
                </div>
                <div class="calendar__weekdays">
                    {WEEKDAY_LABELS.iter().map(|d| view! {
                        <div class="calendar__weekday">{*d}</div>
                    }).collect_view()}
                </div>
                {grid.map(|g| g.weeks.into_iter().map(|week| view! {
                    <div class="calendar__week">
                        {week.into_iter().map(|day| match day {
                            Some(date) => {
                                let day_events = by_date.get(&date).cloned().unwrap_or_default();
                                view! {
                                    <div class="calendar__day">
                                        <div class="calendar__day-number">{date.day()}</div>
                                        {day_events.into_iter().map(|e| view! {
                                            <div class=format!("calendar__event {}", e.status.css_class())>
                                                {e.client_name.clone()}
                                            </div>
                                        }).collect_view()}
                                    </div>
                                }.into_any()
                            }
                            None => view! { <div class="calendar__day calendar__day--empty"></div> }.into_any(),
                        }).collect_view()}
                    </div>
                }).collect_view())}
            </div>
        }
    };

    let table_view = move || {
        view! {
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Client"</th>
                            <th class="table__header-cell">"Venue"</th>
                            <th class="table__header-cell">"Date"</th>
                            <th class="table__header-cell">"Guests"</th>
                            <th class="table__header-cell">"Total"</th>
                            <th class="table__header-cell">"Balance due"</th>
                            <th class="table__header-cell">"Staff"</th>
                            <th class="table__header-cell">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {view_model().visible.into_iter().map(|event| {
                            let row = event.clone();
                            view! {
                                <tr class="table__row" on:click=move |_| handle_edit(row.clone())>
                                    <td class="table__cell">{event.client_name.clone()}</td>
                                    <td class="table__cell">{event.venue.clone()}</td>
                                    <td class="table__cell">{format_date(&event.event_date.to_string())}</td>
                                    <td class="table__cell">{event.guest_count}</td>
                                    <td class="table__cell">{format_money(event.total)}</td>
                                    <td class="table__cell">{format_money(event.balance)}</td>
                                    <td class="table__cell">{staff_for(event.id)}</td>
                                    <td class="table__cell">
                                        <span class=event.status.css_class()>{event.status.label()}</span>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Catering & Events" subtitle="Private events, quotes and bookings">
                <button class="button button--primary" on:click=handle_create>
                    {icon("plus")}
                    "New event"
                </button>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
                <button class="button button--secondary" on:click=move |_| {
                    set_show_calendar.update(|v| *v = !*v);
                }>
                    {icon("calendar")}
                    {move || if show_calendar.get() { "List view" } else { "Calendar" }}
                </button>
            </PageHeader>

            {move || {
                let state = events.get();
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
                        message=Signal::derive(move || events.get().error().map(str::to_string))
                        on_retry=Callback::new(move |_| fetch())
                    />

                    <div class="stat-cards">
                        <StatCard
                            label="Events".to_string()
                            icon_name="calendar".to_string()
                            value=Signal::derive(move || Some(stats().total as f64))
                            format=ValueFormat::Integer
                            status=Signal::derive(|| IndicatorStatus::Neutral)
                        />
                        <StatCard
                            label="Confirmed".to_string()
                            icon_name="check".to_string()
                            value=Signal::derive(move || Some(stats().confirmed as f64))
                            format=ValueFormat::Integer
                            status=Signal::derive(|| IndicatorStatus::Good)
                        />
                        <StatCard
                            label="Revenue".to_string()
                            icon_name="trend".to_string()
                            value=Signal::derive(move || Some(stats().revenue))
                            format=ValueFormat::Money { currency: "USD".to_string() }
                            status=Signal::derive(|| IndicatorStatus::Neutral)
                        />
                        <StatCard
                            label="Avg guests".to_string()
                            icon_name="calendar".to_string()
                            value=Signal::derive(move || Some(stats().avg_guest_count))
                            format=ValueFormat::Number { decimals: 1 }
                            status=Signal::derive(|| IndicatorStatus::Neutral)
                        />
                    </div>

                    <div class="filter-bar">
                        <SearchInput
                            value=Signal::derive(move || criteria.get().search)
                            on_change=Callback::new(move |s| criteria.update(|c| c.search = s))
                            placeholder="Search client or venue..."
                        />
                        <select
                            class="filter-bar__select"
                            on:change=move |ev| criteria.update(|c| {
                                let v = event_target_value(&ev);
                                c.status = if v.is_empty() { None } else { Some(v) };
                            })
                        >
                            <option value="">"All statuses"</option>
                            {EventStatus::ALL.into_iter().map(|s| view! {
                                <option
                                    value=s.key()
                                    selected=move || criteria.get().status.as_deref() == Some(s.key())
                                >
                                    {s.label()}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>

                    <Show
                        when=move || show_calendar.get()
                        fallback=table_view
                    >
                        {calendar_view}
                    </Show>
                }.into_any()
            }}

            <Show when=move || show_modal.get()>
                {move || {
                    let title = if editing.get().is_some() { "Edit event" } else { "New event" };
                    let on_saved: Arc<dyn Fn() + Send + Sync> = Arc::new(move || {
                        set_show_modal.set(false);
                        fetch();
                    });
                    let on_cancel: Arc<dyn Fn() + Send + Sync> =
                        Arc::new(move || set_show_modal.set(false));
                    view! {
                        <Modal
                            title=title.to_string()
                            on_close=Callback::new(move |_| set_show_modal.set(false))
                        >
                            <CateringEventDetails
                                event=editing.get()
                                packages=packages.get()
                                on_saved=on_saved.clone()
                                on_cancel=on_cancel.clone()
                            />
                        </Modal>
                    }
                }}
            </Show>
        </div>
    }
}
