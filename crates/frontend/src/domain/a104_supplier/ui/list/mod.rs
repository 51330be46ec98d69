use contracts::domain::a104_supplier::{SupplierScorecard, METRIC_LABELS};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a104_supplier::api;
use crate::shared::components::error_banner::{ErrorBanner, ErrorScreen, LoadingScreen};
use crate::shared::components::page_header::PageHeader;
use crate::shared::geometry::{axis_endpoints, radar_points};
use crate::shared::icons::icon;
use crate::shared::list_utils::{ListCriteria, ListRecord, SearchInput};
use crate::shared::remote::RemoteState;

impl ListRecord for SupplierScorecard {
    fn search_text(&self) -> String {
        self.name.clone()
    }
}

const RADAR_SIZE: f64 = 160.0;
const RADAR_RADIUS: f64 = 64.0;

#[component]
fn ScorecardRadar(card: SupplierScorecard) -> impl IntoView {
    let center = RADAR_SIZE / 2.0;
    let points = radar_points(&card.metrics(), 100.0, center, center, RADAR_RADIUS);
    let spokes = axis_endpoints(6, center, center, RADAR_RADIUS);

    view! {
        <svg
            class="radar"
            width=RADAR_SIZE
            height=RADAR_SIZE
            viewBox=format!("0 0 {} {}", RADAR_SIZE, RADAR_SIZE)
        >
            // Grid rings at 50% and 100%
            <polygon
                class="radar__ring"
                points=radar_points(&[100.0; 6], 100.0, center, center, RADAR_RADIUS)
            />
            <polygon
                class="radar__ring"
                points=radar_points(&[50.0; 6], 100.0, center, center, RADAR_RADIUS)
            />
            {spokes.into_iter().map(|(x, y)| view! {
                <line class="radar__spoke" x1=center y1=center x2=x y2=y />
            }).collect_view()}
            <polygon class="radar__area" points=points />
        </svg>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SupplierScorecards() -> impl IntoView {
    let cards = RwSignal::new(RemoteState::<Vec<SupplierScorecard>>::Idle);
    let criteria = RwSignal::new(ListCriteria::default());
    let (min_overall, set_min_overall) = signal(0.0f64);

    let fetch = move || {
        cards.update(|s| *s = std::mem::take(s).begin());
        spawn_local(async move {
            let result = api::fetch_scorecards().await;
            cards.update(|s| *s = std::mem::take(s).resolve(result));
        });
    };

    fetch();

    let visible = move || {
        let all = cards.get().data().cloned().unwrap_or_default();
        let c = criteria.get();
        let min = min_overall.get();
        all.into_iter()
            .filter(|card| c.matches(card) && card.overall() >= min)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <PageHeader title="Supplier Scorecards" subtitle="Performance across six metrics">
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            {move || {
                let state = cards.get();
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
                        message=Signal::derive(move || cards.get().error().map(str::to_string))
                        on_retry=Callback::new(move |_| fetch())
                    />

                    <div class="filter-bar">
                        <SearchInput
                            value=Signal::derive(move || criteria.get().search)
                            on_change=Callback::new(move |s| criteria.update(|c| c.search = s))
                            placeholder="Search suppliers..."
                        />
                        <label class="filter-bar__label">
                            "Min overall: "
                            {move || format!("{:.0}", min_overall.get())}
                        </label>
                        <input
                            type="range"
                            min="0"
                            max="100"
                            step="5"
                            prop:value=move || min_overall.get().to_string()
                            on:input=move |ev| {
                                set_min_overall.set(event_target_value(&ev).parse().unwrap_or(0.0));
                            }
                        />
                    </div>

                    <div class="card-grid">
                        {visible().into_iter().map(|card| {
                            let overall = card.overall();
                            view! {
                                <div class="supplier-card">
                                    <div class="supplier-card__header">
                                        <span class="supplier-card__name">{card.name.clone()}</span>
                                        <span class=card.grade_css_class()>{card.grade.clone()}</span>
                                    </div>
                                    <ScorecardRadar card=card.clone() />
                                    <div class="supplier-card__metrics">
                                        {METRIC_LABELS.iter().zip(card.metrics()).map(|(label, value)| view! {
                                            <div class="supplier-card__metric">
                                                <span>{*label}</span>
                                                <span>{format!("{:.0}", value)}</span>
                                            </div>
                                        }).collect_view()}
                                    </div>
                                    <div class="supplier-card__footer">
                                        <span>{format!("Overall {:.1}", overall)}</span>
                                        <span>{format!("{} active orders", card.active_orders)}</span>
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
