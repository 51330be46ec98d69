//! Generic list view-model: filtering, sorting and summary statistics shared
//! by every list-style page, plus the search input component.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// A record that can participate in the generic filter/summary pipeline.
pub trait ListRecord {
    /// Bucket key for status-equality filtering and the by-status counters.
    fn status_key(&self) -> Option<String> {
        None
    }

    /// Bucket key for category-equality filtering.
    fn category_key(&self) -> Option<String> {
        None
    }

    /// Text the free-text search matches against (case-insensitive substring).
    fn search_text(&self) -> String;

    /// Money amount aggregated into the summary. Zero when not applicable.
    fn money_amount(&self) -> f64 {
        0.0
    }
}

/// Trait for types supporting column sorting.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Serializable filter criteria; the empty value matches everything.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListCriteria {
    pub status: Option<String>,
    pub category: Option<String>,
    pub search: String,
}

impl ListCriteria {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.category.is_none() && self.search.trim().is_empty()
    }

    pub fn matches<T: ListRecord>(&self, item: &T) -> bool {
        if let Some(status) = &self.status {
            if item.status_key().as_deref() != Some(status.as_str()) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if item.category_key().as_deref() != Some(category.as_str()) {
                return false;
            }
        }
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() && !item.search_text().to_lowercase().contains(&needle) {
            return false;
        }
        true
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListSummary {
    pub total: usize,
    pub visible: usize,
    pub by_status: HashMap<String, usize>,
    pub money_total: f64,
    pub money_avg: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ListView<T> {
    pub visible: Vec<T>,
    pub summary: ListSummary,
}

/// Filter `items` by `criteria` and compute summary statistics over the
/// visible subset. Pure and total: empty input yields zeroed stats, and the
/// average is guarded against division by zero.
pub fn filter_and_summarize<T: ListRecord + Clone>(
    items: &[T],
    criteria: &ListCriteria,
) -> ListView<T> {
    let visible: Vec<T> = items
        .iter()
        .filter(|item| criteria.matches(*item))
        .cloned()
        .collect();

    let mut by_status: HashMap<String, usize> = HashMap::new();
    let mut money_total = 0.0;
    for item in &visible {
        if let Some(key) = item.status_key() {
            *by_status.entry(key).or_insert(0) += 1;
        }
        money_total += item.money_amount();
    }

    let summary = ListSummary {
        total: items.len(),
        visible: visible.len(),
        by_status,
        money_total,
        money_avg: money_total / (visible.len().max(1) as f64),
    };

    ListView { visible, summary }
}

/// Sorts a list by the given field. Stable: equal elements keep their
/// original relative order.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Search box with a clear button, wired to a `ListCriteria`-backed signal.
#[component]
pub fn SearchInput(
    /// Current filter value (for display)
    #[prop(into)]
    value: Signal<String>,
    /// Callback to update the filter value
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    on:click=move |_| on_change.run(String::new())
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: String,
        status: &'static str,
        amount: f64,
    }

    impl ListRecord for Row {
        fn status_key(&self) -> Option<String> {
            Some(self.status.to_string())
        }

        fn search_text(&self) -> String {
            self.name.clone()
        }

        fn money_amount(&self) -> f64 {
            self.amount
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Garden wedding".into(), status: "confirmed", amount: 1200.0 },
            Row { name: "Office lunch".into(), status: "inquiry", amount: 300.0 },
            Row { name: "Wine tasting".into(), status: "confirmed", amount: 800.0 },
            Row { name: "Birthday".into(), status: "cancelled", amount: 0.0 },
            Row { name: "Rooftop GALA".into(), status: "confirmed", amount: 2000.0 },
        ]
    }

    #[test]
    fn test_visible_is_subset_in_original_order() {
        let items = rows();
        let criteria = ListCriteria {
            status: Some("confirmed".into()),
            ..Default::default()
        };
        let view = filter_and_summarize(&items, &criteria);
        assert_eq!(view.visible.len(), 3);
        assert_eq!(view.visible[0].name, "Garden wedding");
        assert_eq!(view.visible[1].name, "Wine tasting");
        assert_eq!(view.visible[2].name, "Rooftop GALA");
        assert!(view.visible.iter().all(|v| items.contains(v)));
    }

    #[test]
    fn test_empty_input_yields_zeroed_stats() {
        let view = filter_and_summarize::<Row>(&[], &ListCriteria::default());
        assert!(view.visible.is_empty());
        assert_eq!(view.summary.total, 0);
        assert_eq!(view.summary.money_total, 0.0);
        // No NaN/Infinity from an empty average
        assert_eq!(view.summary.money_avg, 0.0);
        assert!(view.summary.money_avg.is_finite());
    }

    #[test]
    fn test_removing_filter_is_idempotent() {
        let items = rows();
        let status_only = ListCriteria {
            status: Some("confirmed".into()),
            ..Default::default()
        };
        let once = filter_and_summarize(&items, &status_only);
        let twice = filter_and_summarize(&once.visible, &ListCriteria::default());
        assert_eq!(once.visible, twice.visible);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let items = rows();
        let criteria = ListCriteria {
            search: "gala".into(),
            ..Default::default()
        };
        let view = filter_and_summarize(&items, &criteria);
        assert_eq!(view.visible.len(), 1);
        assert_eq!(view.visible[0].name, "Rooftop GALA");
        assert!(view
            .visible
            .iter()
            .all(|v| v.search_text().to_lowercase().contains("gala")));
    }

    #[test]
    fn test_money_sum_is_order_independent() {
        let mut items = rows();
        let forward = filter_and_summarize(&items, &ListCriteria::default());
        items.reverse();
        let backward = filter_and_summarize(&items, &ListCriteria::default());
        assert_eq!(forward.summary.money_total, backward.summary.money_total);
        assert_eq!(forward.summary.money_avg, backward.summary.money_avg);
    }

    #[test]
    fn test_by_status_counts_visible_subset() {
        let items = rows();
        let view = filter_and_summarize(&items, &ListCriteria::default());
        assert_eq!(view.summary.by_status.get("confirmed"), Some(&3));
        assert_eq!(view.summary.by_status.get("inquiry"), Some(&1));
        assert_eq!(view.summary.by_status.get("cancelled"), Some(&1));
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "amount" => self.amount.partial_cmp(&other.amount).unwrap_or(Ordering::Equal),
                _ => self.name.cmp(&other.name),
            }
        }
    }

    #[test]
    fn test_sort_list_descending() {
        let mut items = rows();
        sort_list(&mut items, "amount", false);
        assert_eq!(items[0].name, "Rooftop GALA");
        assert_eq!(items.last().unwrap().name, "Birthday");
    }
}
