//! Pure helpers for the shelf-life page.

use contracts::domain::a102_shelf_life::{FreshnessStatus, ShelfLifeItem};
use std::cmp::Ordering;

use crate::shared::list_utils::{ListRecord, Sortable};

impl ListRecord for ShelfLifeItem {
    fn status_key(&self) -> Option<String> {
        Some(self.status.key().to_string())
    }

    fn category_key(&self) -> Option<String> {
        Some(self.category.clone())
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.name, self.category)
    }
}

impl Sortable for ShelfLifeItem {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "expires_at" => self.expires_at.cmp(&other.expires_at),
            "quantity" => self
                .quantity
                .partial_cmp(&other.quantity)
                .unwrap_or(Ordering::Equal),
            _ => self.name.cmp(&other.name),
        }
    }
}

/// Distinct categories present in the data, sorted, for the filter select.
pub fn categories(items: &[ShelfLifeItem]) -> Vec<String> {
    let mut cats: Vec<String> = items.iter().map(|i| i.category.clone()).collect();
    cats.sort();
    cats.dedup();
    cats
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShelfStats {
    pub total: usize,
    pub expiring: usize,
    pub expired: usize,
}

pub fn shelf_stats(items: &[ShelfLifeItem]) -> ShelfStats {
    ShelfStats {
        total: items.len(),
        expiring: items
            .iter()
            .filter(|i| i.status == FreshnessStatus::Expiring)
            .count(),
        expired: items
            .iter()
            .filter(|i| i.status == FreshnessStatus::Expired)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::sort_list;
    use contracts::domain::a102_shelf_life::AbcClass;
    use uuid::Uuid;

    fn item(name: &str, category: &str, status: FreshnessStatus, expires: &str) -> ShelfLifeItem {
        ShelfLifeItem {
            id: Uuid::new_v4(),
            name: name.into(),
            category: category.into(),
            quantity: 1.0,
            unit: "kg".into(),
            received_at: "2026-08-01".parse().unwrap(),
            expires_at: expires.parse().unwrap(),
            status,
            abc_class: Some(AbcClass::B),
            eoq: None,
            storage_location: None,
        }
    }

    #[test]
    fn test_categories_are_sorted_and_distinct() {
        let items = vec![
            item("Cream", "dairy", FreshnessStatus::Fresh, "2026-08-30"),
            item("Basil", "produce", FreshnessStatus::Expiring, "2026-08-25"),
            item("Milk", "dairy", FreshnessStatus::Fresh, "2026-08-28"),
        ];
        assert_eq!(categories(&items), vec!["dairy", "produce"]);
    }

    #[test]
    fn test_expiring_first_sort() {
        let mut items = vec![
            item("Cream", "dairy", FreshnessStatus::Fresh, "2026-08-30"),
            item("Basil", "produce", FreshnessStatus::Expiring, "2026-08-25"),
            item("Milk", "dairy", FreshnessStatus::Fresh, "2026-08-28"),
        ];
        sort_list(&mut items, "expires_at", true);
        assert_eq!(items[0].name, "Basil");
        assert_eq!(items[2].name, "Cream");
    }

    #[test]
    fn test_shelf_stats() {
        let items = vec![
            item("Cream", "dairy", FreshnessStatus::Fresh, "2026-08-30"),
            item("Basil", "produce", FreshnessStatus::Expiring, "2026-08-25"),
            item("Old stock", "dry", FreshnessStatus::Expired, "2026-08-01"),
        ];
        let stats = shelf_stats(&items);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.expiring, 1);
        assert_eq!(stats.expired, 1);
    }
}
