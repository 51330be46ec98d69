use contracts::domain::a101_catering_event::{
    CateringEvent, CateringEventDraft, CateringPackage, EventStatus,
};
use leptos::prelude::*;
use std::sync::Arc;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a101_catering_event::api;

/// Create/edit form shown inside the list page's modal.
#[component]
#[allow(non_snake_case)]
pub fn CateringEventDetails(
    /// None = create a new event
    event: Option<CateringEvent>,
    packages: Vec<CateringPackage>,
    on_saved: Arc<dyn Fn() + Send + Sync>,
    on_cancel: Arc<dyn Fn() + Send + Sync>,
) -> impl IntoView {
    let editing_id = event.as_ref().map(|e| e.id);

    let initial = match &event {
        Some(e) => CateringEventDraft {
            client_name: e.client_name.clone(),
            client_phone: e.client_phone.clone(),
            venue: e.venue.clone(),
            event_date: e.event_date.format("%Y-%m-%d").to_string(),
            guest_count: e.guest_count,
            package_id: e.package_id,
            total: e.total,
            deposit: e.deposit,
            status: Some(e.status),
            notes: e.notes.clone(),
        },
        None => CateringEventDraft {
            guest_count: 1,
            ..Default::default()
        },
    };

    let draft = RwSignal::new(initial);
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
            let result = match editing_id {
                Some(id) => api::update_event(id, &current).await,
                None => api::create_event(&current).await,
            };
            set_saving.set(false);
            match result {
                Ok(_) => on_saved(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let cancel = move |_| on_cancel();

    let deletable_id = event
        .as_ref()
        .filter(|e| e.status == EventStatus::Inquiry)
        .map(|e| e.id);
    let on_saved_delete = on_saved.clone();
    let delete = move |_| {
        let Some(id) = deletable_id else { return };
        set_saving.set(true);
        let on_saved = on_saved_delete.clone();
        spawn_local(async move {
            let result = api::delete_event(id).await;
            set_saving.set(false);
            match result {
                Ok(()) => on_saved(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let package_options = packages
        .iter()
        .map(|p| (p.id, format!("{} ({:.2}/guest)", p.name, p.price_per_guest)))
        .collect::<Vec<_>>();

    view! {
        <div class="form">
            {move || error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}

            <div class="form-row">
                <div class="form-group">
                    <label>"Client"</label>
                    <input
                        type="text"
                        prop:value=move || draft.get().client_name
                        on:input=move |ev| draft.update(|d| d.client_name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Phone"</label>
                    <input
                        type="text"
                        prop:value=move || draft.get().client_phone.unwrap_or_default()
                        on:input=move |ev| draft.update(|d| {
                            let v = event_target_value(&ev);
                            d.client_phone = if v.is_empty() { None } else { Some(v) };
                        })
                    />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label>"Venue"</label>
                    <input
                        type="text"
                        prop:value=move || draft.get().venue
                        on:input=move |ev| draft.update(|d| d.venue = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Date"</label>
                    <input
                        type="date"
                        prop:value=move || draft.get().event_date
                        on:input=move |ev| draft.update(|d| d.event_date = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Guests"</label>
                    <input
                        type="number"
                        min="1"
                        prop:value=move || draft.get().guest_count.to_string()
                        on:input=move |ev| draft.update(|d| {
                            d.guest_count = event_target_value(&ev).parse().unwrap_or(0);
                        })
                    />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label>"Package"</label>
                    <select on:change=move |ev| draft.update(|d| {
                        d.package_id = Uuid::parse_str(&event_target_value(&ev)).ok();
                    })>
                        <option value="" selected=move || draft.get().package_id.is_none()>
                            "No package"
                        </option>
                        {package_options.into_iter().map(|(id, label)| view! {
                            <option
                                value=id.to_string()
                                selected=move || draft.get().package_id == Some(id)
                            >
                                {label}
                            </option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"Total"</label>
                    <input
                        type="number"
                        step="0.01"
                        prop:value=move || format!("{:.2}", draft.get().total)
                        on:input=move |ev| draft.update(|d| {
                            d.total = event_target_value(&ev).parse().unwrap_or(0.0);
                        })
                    />
                </div>
                <div class="form-group">
                    <label>"Deposit"</label>
                    <input
                        type="number"
                        step="0.01"
                        prop:value=move || format!("{:.2}", draft.get().deposit)
                        on:input=move |ev| draft.update(|d| {
                            d.deposit = event_target_value(&ev).parse().unwrap_or(0.0);
                        })
                    />
                </div>
            </div>

            {editing_id.map(|_| view! {
                <div class="form-group">
                    <label>"Status"</label>
                    <select on:change=move |ev| draft.update(|d| {
                        d.status = EventStatus::ALL
                            .into_iter()
                            .find(|s| s.key() == event_target_value(&ev));
                    })>
                        {EventStatus::ALL.into_iter().map(|s| view! {
                            <option
                                value=s.key()
                                selected=move || draft.get().status == Some(s)
                            >
                                {s.label()}
                            </option>
                        }).collect_view()}
                    </select>
                </div>
            })}

            <div class="form-group">
                <label>"Notes"</label>
                <textarea
                    prop:value=move || draft.get().notes.unwrap_or_default()
                    on:input=move |ev| draft.update(|d| {
                        let v = event_target_value(&ev);
                        d.notes = if v.is_empty() { None } else { Some(v) };
                    })
                ></textarea>
            </div>

            <div class="form-actions">
                <button class="button button--primary" disabled=move || saving.get() on:click=save>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
                <button class="button button--secondary" on:click=cancel>
                    "Cancel"
                </button>
                {deletable_id.map(|_| view! {
                    <button
                        class="button button--danger"
                        disabled=move || saving.get()
                        on:click=delete
                    >
                        "Delete inquiry"
                    </button>
                })}
            </div>
        </div>
    }
}
