//! Category types for product organization.

use crate::ids::CategoryId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A product category. The service lists categories by `sort_order`, then
/// by creation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// Position in storefront listings (ascending).
    #[serde(default)]
    pub sort_order: Option<i32>,
    #[serde(default, with = "crate::time::optional_datetime")]
    pub create_time: Option<NaiveDateTime>,
    #[serde(default, with = "crate::time::optional_datetime")]
    pub update_time: Option<NaiveDateTime>,
}

impl Category {
    /// Order categories the way the service does: by sort order (unset
    /// last), then creation time.
    pub fn sort_for_display(categories: &mut [Category]) {
        categories.sort_by(|a, b| {
            let key = |c: &Category| (c.sort_order.unwrap_or(i32::MAX), c.create_time);
            key(a).cmp(&key(b))
        });
    }
}

/// Payload for creating or updating a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn category(id: i64, sort_order: Option<i32>) -> Category {
        Category {
            id: CategoryId::new(id),
            name: format!("c{}", id),
            sort_order,
            create_time: None,
            update_time: None,
        }
    }

    #[test]
    fn test_sort_for_display() {
        let mut list = vec![category(1, None), category(2, Some(5)), category(3, Some(1))];
        Category::sort_for_display(&mut list);
        let ids: Vec<i64> = list.iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_deserialize_minimal() {
        let c: Category = serde_json::from_value(json!({"id": 4, "name": "Snacks"})).unwrap();
        assert_eq!(c.name, "Snacks");
        assert_eq!(c.sort_order, None);
    }
}
