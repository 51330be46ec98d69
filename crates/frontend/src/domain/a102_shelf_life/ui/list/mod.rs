use chrono::Utc;
use contracts::domain::a102_shelf_life::{AbcClass, ForecastPoint, ShelfLifeItem};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a102_shelf_life::api;
use crate::domain::a102_shelf_life::view_model::{categories, shelf_stats};
use crate::shared::components::error_banner::{ErrorBanner, ErrorScreen, LoadingScreen};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::{days_left_label, format_date};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_and_summarize, sort_list, ListCriteria, SearchInput};
use crate::shared::remote::RemoteState;

#[component]
#[allow(non_snake_case)]
pub fn ShelfLifeList() -> impl IntoView {
    let items = RwSignal::new(RemoteState::<Vec<ShelfLifeItem>>::Idle);
    // Forecast is an optional endpoint; the section hides if it fails.
    let forecast = RwSignal::new(Vec::<ForecastPoint>::new());
    let criteria = RwSignal::new(ListCriteria::default());

    let fetch = move || {
        items.update(|s| *s = std::mem::take(s).begin());
        spawn_local(async move {
            let (list, fc) = futures::join!(api::fetch_items(), api::fetch_forecast());
            items.update(|s| *s = std::mem::take(s).resolve(list));
            match fc {
                Ok(points) => forecast.set(points),
                Err(e) => log::warn!("forecast fetch failed: {}", e),
            }
        });
    };

    fetch();

    let visible = move || {
        let all = items.get().data().cloned().unwrap_or_default();
        let mut visible = filter_and_summarize(&all, &criteria.get()).visible;
        // Most urgent items first
        sort_list(&mut visible, "expires_at", true);
        visible
    };

    let stats = move || shelf_stats(&visible());
    let category_options = move || categories(&items.get().data().cloned().unwrap_or_default());

    let abc_label = |class: Option<AbcClass>| match class {
        Some(AbcClass::A) => "A",
        Some(AbcClass::B) => "B",
        Some(AbcClass::C) => "C",
        None => "—",
    };

    view! {
        <div class="page">
            <PageHeader title="Shelf Life" subtitle="Expiry tracking and demand forecast">
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            {move || {
                let state = items.get();
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
                        message=Signal::derive(move || items.get().error().map(str::to_string))
                        on_retry=Callback::new(move |_| fetch())
                    />

                    <div class="stat-cards">
                        <StatCard
                            label="Items tracked".to_string()
                            icon_name="inventory".to_string()
                            value=Signal::derive(move || Some(stats().total as f64))
                            format=ValueFormat::Integer
                            status=Signal::derive(|| IndicatorStatus::Neutral)
                        />
                        <StatCard
                            label="Expiring".to_string()
                            icon_name="alert".to_string()
                            value=Signal::derive(move || Some(stats().expiring as f64))
                            format=ValueFormat::Integer
                            status=Signal::derive(move || {
                                if stats().expiring > 0 { IndicatorStatus::Warning } else { IndicatorStatus::Good }
                            })
                        />
                        <StatCard
                            label="Expired".to_string()
                            icon_name="alert".to_string()
                            value=Signal::derive(move || Some(stats().expired as f64))
                            format=ValueFormat::Integer
                            status=Signal::derive(move || {
                                if stats().expired > 0 { IndicatorStatus::Bad } else { IndicatorStatus::Good }
                            })
                        />
                    </div>

                    <div class="filter-bar">
                        <SearchInput
                            value=Signal::derive(move || criteria.get().search)
                            on_change=Callback::new(move |s| criteria.update(|c| c.search = s))
                            placeholder="Search items..."
                        />
                        <select
                            class="filter-bar__select"
                            on:change=move |ev| criteria.update(|c| {
                                let v = event_target_value(&ev);
                                c.category = if v.is_empty() { None } else { Some(v) };
                            })
                        >
                            <option value="">"All categories"</option>
                            {category_options().into_iter().map(|cat| {
                                let value = cat.clone();
                                let selected = cat.clone();
                                view! {
                                    <option
                                        value=value
                                        selected=move || criteria.get().category.as_deref() == Some(selected.as_str())
                                    >
                                        {cat}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Item"</th>
                                    <th class="table__header-cell">"Category"</th>
                                    <th class="table__header-cell">"Qty"</th>
                                    <th class="table__header-cell">"Expires"</th>
                                    <th class="table__header-cell">"Remaining"</th>
                                    <th class="table__header-cell">"ABC"</th>
                                    <th class="table__header-cell">"EOQ"</th>
                                    <th class="table__header-cell">"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {visible().into_iter().map(|item| {
                                    let today = Utc::now().date_naive();
                                    let pct = (item.remaining_fraction(today) * 100.0).round();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{item.name.clone()}</td>
                                            <td class="table__cell">{item.category.clone()}</td>
                                            <td class="table__cell">{format!("{} {}", item.quantity, item.unit)}</td>
                                            <td class="table__cell">
                                                {format_date(&item.expires_at.to_string())}
                                                <span class="table__cell-hint">
                                                    {format!(" ({})", days_left_label(item.days_left(today)))}
                                                </span>
                                            </td>
                                            <td class="table__cell">
                                                <div class="percent-bar">
                                                    <div
                                                        class="percent-bar__fill"
                                                        style=format!("width: {}%", pct)
                                                    ></div>
                                                </div>
                                            </td>
                                            <td class="table__cell">{abc_label(item.abc_class)}</td>
                                            <td class="table__cell">
                                                {item.eoq.map(|v| format!("{:.0}", v)).unwrap_or_else(|| "—".into())}
                                            </td>
                                            <td class="table__cell">
                                                <span class=item.status.css_class()>{item.status.label()}</span>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>

                    <Show when=move || !forecast.get().is_empty()>
                        <h2 class="section-title">"Demand forecast (7 days)"</h2>
                        <div class="table">
                            <table class="table__data">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Date"</th>
                                        <th class="table__header-cell">"Item"</th>
                                        <th class="table__header-cell">"Predicted"</th>
                                        <th class="table__header-cell">"Confidence band"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || forecast.get().into_iter().map(|p| view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{format_date(&p.date.to_string())}</td>
                                            <td class="table__cell">{p.item_name.clone()}</td>
                                            <td class="table__cell">{format!("{:.1}", p.predicted)}</td>
                                            <td class="table__cell">{format!("{:.1} – {:.1}", p.lower, p.upper)}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    </Show>
                }.into_any()
            }}
        </div>
    }
}
