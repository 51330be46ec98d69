use contracts::domain::a103_purchase_order::{PoStatus, PurchaseOrder};
use contracts::domain::a104_supplier::SupplierScorecard;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use std::sync::Arc;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a103_purchase_order::api;
use crate::domain::a103_purchase_order::ui::details::PurchaseOrderDetails;
use crate::domain::a103_purchase_order::view_model::available_actions;
use crate::domain::a104_supplier::api as supplier_api;
use crate::shared::components::error_banner::{ErrorBanner, ErrorScreen, LoadingScreen};
use crate::shared::components::modal::Modal;
use crate::shared::components::number_format::format_money;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_and_summarize, ListCriteria, SearchInput};
use crate::shared::remote::RemoteState;

#[component]
#[allow(non_snake_case)]
pub fn PurchaseOrderList() -> impl IntoView {
    let orders = RwSignal::new(RemoteState::<Vec<PurchaseOrder>>::Idle);
    // Suppliers feed the create form's select; optional endpoint.
    let suppliers = RwSignal::new(Vec::<SupplierScorecard>::new());
    let criteria = RwSignal::new(ListCriteria::default());
    let (show_modal, set_show_modal) = signal(false);
    let (action_error, set_action_error) = signal(Option::<String>::None);

    let fetch = move || {
        orders.update(|s| *s = std::mem::take(s).begin());
        spawn_local(async move {
            let (po, sup) = futures::join!(api::fetch_orders(), supplier_api::fetch_scorecards());
            orders.update(|s| *s = std::mem::take(s).resolve(po));
            match sup {
                Ok(list) => suppliers.set(list),
                Err(e) => log::warn!("suppliers fetch failed: {}", e),
            }
        });
    };

    fetch();

    let view_model = move || {
        let items = orders.get().data().cloned().unwrap_or_default();
        filter_and_summarize(&items, &criteria.get())
    };

    // Status change: mutate, then refetch the whole list.
    let apply_status = move |id: Uuid, status: PoStatus| {
        spawn_local(async move {
            match api::change_status(id, status).await {
                Ok(_) => {
                    set_action_error.set(None);
                    fetch();
                }
                Err(e) => set_action_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Purchase Orders" subtitle="Supplier orders and approvals">
                <button class="button button--primary" on:click=move |_| set_show_modal.set(true)>
                    {icon("plus")}
                    "New order"
                </button>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            {move || {
                let state = orders.get();
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
                            orders.get().error().map(str::to_string).or_else(|| action_error.get())
                        })
                        on_retry=Callback::new(move |_| fetch())
                    />

                    <div class="stat-cards">
                        <StatCard
                            label="Orders".to_string()
                            icon_name="orders".to_string()
                            value=Signal::derive(move || Some(view_model().summary.visible as f64))
                            format=ValueFormat::Integer
                            status=Signal::derive(|| IndicatorStatus::Neutral)
                        />
                        <StatCard
                            label="Open value".to_string()
                            icon_name="trend".to_string()
                            value=Signal::derive(move || Some(view_model().summary.money_total))
                            format=ValueFormat::Money { currency: "USD".to_string() }
                            status=Signal::derive(|| IndicatorStatus::Neutral)
                        />
                        <StatCard
                            label="Awaiting approval".to_string()
                            icon_name="alert".to_string()
                            value=Signal::derive(move || {
                                Some(*view_model().summary.by_status.get("submitted").unwrap_or(&0) as f64)
                            })
                            format=ValueFormat::Integer
                            status=Signal::derive(|| IndicatorStatus::Warning)
                        />
                    </div>

                    <div class="filter-bar">
                        <SearchInput
                            value=Signal::derive(move || criteria.get().search)
                            on_change=Callback::new(move |s| criteria.update(|c| c.search = s))
                            placeholder="Search order number or supplier..."
                        />
                        <select
                            class="filter-bar__select"
                            on:change=move |ev| criteria.update(|c| {
                                let v = event_target_value(&ev);
                                c.status = if v.is_empty() { None } else { Some(v) };
                            })
                        >
                            <option value="">"All statuses"</option>
                            {PoStatus::ALL.into_iter().map(|s| view! {
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
                                    <th class="table__header-cell">"Number"</th>
                                    <th class="table__header-cell">"Supplier"</th>
                                    <th class="table__header-cell">"Lines"</th>
                                    <th class="table__header-cell">"Total"</th>
                                    <th class="table__header-cell">"Expected"</th>
                                    <th class="table__header-cell">"Created"</th>
                                    <th class="table__header-cell">"Status"</th>
                                    <th class="table__header-cell">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {view_model().visible.into_iter().map(|order| {
                                    let id = order.id;
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{order.number.clone()}</td>
                                            <td class="table__cell">{order.supplier_name.clone()}</td>
                                            <td class="table__cell">{order.lines.len()}</td>
                                            <td class="table__cell">{format_money(order.total())}</td>
                                            <td class="table__cell">
                                                {order.expected_at
                                                    .map(|d| format_date(&d.to_string()))
                                                    .unwrap_or_else(|| "—".into())}
                                            </td>
                                            <td class="table__cell">
                                                {format_datetime(&order.created_at.to_rfc3339())}
                                            </td>
                                            <td class="table__cell">
                                                <span class=order.status.css_class()>{order.status.label()}</span>
                                            </td>
                                            <td class="table__cell table__cell--actions">
                                                {available_actions(order.status).into_iter().map(|(next, label)| view! {
                                                    <button
                                                        class="button button--small"
                                                        on:click=move |_| apply_status(id, next)
                                                    >
                                                        {label}
                                                    </button>
                                                }).collect_view()}
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_any()
            }}

            <Show when=move || show_modal.get()>
                {move || {
                    let on_saved: Arc<dyn Fn() + Send + Sync> = Arc::new(move || {
                        set_show_modal.set(false);
                        fetch();
                    });
                    let on_cancel: Arc<dyn Fn() + Send + Sync> =
                        Arc::new(move || set_show_modal.set(false));
                    view! {
                        <Modal
                            title="New purchase order".to_string()
                            on_close=Callback::new(move |_| set_show_modal.set(false))
                        >
                            <PurchaseOrderDetails
                                suppliers=suppliers.get()
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
