use contracts::domain::a103_purchase_order::{PoLine, PurchaseOrderDraft};
use contracts::domain::a104_supplier::SupplierScorecard;
use leptos::prelude::*;
use std::sync::Arc;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a103_purchase_order::api;

fn empty_line() -> PoLine {
    PoLine {
        sku: String::new(),
        name: String::new(),
        quantity: 1.0,
        unit: "kg".to_string(),
        unit_cost: 0.0,
    }
}

/// New-order form: supplier select plus an editable line-item grid.
#[component]
#[allow(non_snake_case)]
pub fn PurchaseOrderDetails(
    suppliers: Vec<SupplierScorecard>,
    on_saved: Arc<dyn Fn() + Send + Sync>,
    on_cancel: Arc<dyn Fn() + Send + Sync>,
) -> impl IntoView {
    let draft = RwSignal::new(PurchaseOrderDraft {
        lines: vec![empty_line()],
        ..Default::default()
    });
    let (error, set_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let on_saved_submit = on_saved.clone();
    let save = move |_| {
        let current = draft.get();
        if let Err(msg) = current.validate() {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        set_saving.set(true);

        let on_saved = on_saved_submit.clone();
        spawn_local(async move {
            let result = api::create_order(&current).await;
            set_saving.set(false);
            match result {
                Ok(_) => on_saved(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let add_line = move |_| {
        draft.update(|d| d.lines.push(empty_line()));
    };

    let remove_line = move |idx: usize| {
        draft.update(|d| {
            if d.lines.len() > 1 {
                d.lines.remove(idx);
            }
        });
    };

    let order_total = move || {
        draft
            .get()
            .lines
            .iter()
            .map(PoLine::subtotal)
            .sum::<f64>()
    };

    let supplier_options = suppliers
        .iter()
        .map(|s| (s.id, s.name.clone()))
        .collect::<Vec<_>>();

    let cancel = move |_| on_cancel();

    view! {
        <div class="form">
            {move || error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}

            <div class="form-row">
                <div class="form-group">
                    <label>"Supplier"</label>
                    <select on:change=move |ev| draft.update(|d| {
                        d.supplier_id = Uuid::parse_str(&event_target_value(&ev)).ok();
                    })>
                        <option value="" selected=move || draft.get().supplier_id.is_none()>
                            "Select a supplier"
                        </option>
                        {supplier_options.into_iter().map(|(id, name)| view! {
                            <option
                                value=id.to_string()
                                selected=move || draft.get().supplier_id == Some(id)
                            >
                                {name}
                            </option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"Expected delivery"</label>
                    <input
                        type="date"
                        prop:value=move || draft.get().expected_at.unwrap_or_default()
                        on:input=move |ev| draft.update(|d| {
                            let v = event_target_value(&ev);
                            d.expected_at = if v.is_empty() { None } else { Some(v) };
                        })
                    />
                </div>
            </div>

            <h3 class="form-section-title">"Lines"</h3>
            {move || draft.get().lines.into_iter().enumerate().map(|(idx, line)| {
                view! {
                    <div class="form-row form-row--line">
                        <input
                            type="text"
                            placeholder="SKU"
                            prop:value=line.sku.clone()
                            on:input=move |ev| draft.update(|d| {
                                if let Some(l) = d.lines.get_mut(idx) {
                                    l.sku = event_target_value(&ev);
                                }
                            })
                        />
                        <input
                            type="text"
                            placeholder="Name"
                            prop:value=line.name.clone()
                            on:input=move |ev| draft.update(|d| {
                                if let Some(l) = d.lines.get_mut(idx) {
                                    l.name = event_target_value(&ev);
                                }
                            })
                        />
                        <input
                            type="number"
                            step="0.1"
                            min="0"
                            prop:value=line.quantity.to_string()
                            on:input=move |ev| draft.update(|d| {
                                if let Some(l) = d.lines.get_mut(idx) {
                                    l.quantity = event_target_value(&ev).parse().unwrap_or(0.0);
                                }
                            })
                        />
                        <input
                            type="text"
                            placeholder="Unit"
                            prop:value=line.unit.clone()
                            on:input=move |ev| draft.update(|d| {
                                if let Some(l) = d.lines.get_mut(idx) {
                                    l.unit = event_target_value(&ev);
                                }
                            })
                        />
                        <input
                            type="number"
                            step="0.01"
                            min="0"
                            prop:value=format!("{:.2}", line.unit_cost)
                            on:input=move |ev| draft.update(|d| {
                                if let Some(l) = d.lines.get_mut(idx) {
                                    l.unit_cost = event_target_value(&ev).parse().unwrap_or(0.0);
                                }
                            })
                        />
                        <span class="form-row__subtotal">{format!("{:.2}", line.subtotal())}</span>
                        <button class="button button--icon" on:click=move |_| remove_line(idx)>
                            "×"
                        </button>
                    </div>
                }
            }).collect_view()}

            <div class="form-actions form-actions--split">
                <button class="button button--secondary" on:click=add_line>
                    "Add line"
                </button>
                <span class="form-total">{move || format!("Total: {:.2}", order_total())}</span>
            </div>

            <div class="form-actions">
                <button class="button button--primary" disabled=move || saving.get() on:click=save>
                    {move || if saving.get() { "Creating..." } else { "Create order" }}
                </button>
                <button class="button button--secondary" on:click=cancel>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
