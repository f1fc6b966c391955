//! Order types.

use crate::cart::LineItem;
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId, SpecificationId};
use crate::money::{lenient, Price};
use crate::time::format_datetime;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-entry field holding the specification id.
pub const SPEC_ID_FIELD: &str = "规格id";
/// Per-entry field holding the purchased quantity.
pub const QUANTITY_FIELD: &str = "购买数量";
/// Reserved key in the `items` map that never names a product.
pub const NOTES_KEY: &str = "notes";

/// An order as stored by the service.
///
/// `items` is the service's free-form map: product id (as a string) to a
/// list of entry objects. Use [`Order::entries`] for a typed view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order number (`yyyyMMddHHmmss` + 6 random digits).
    pub order_number: String,
    #[serde(default)]
    pub items: Map<String, Value>,
    #[serde(default)]
    pub total_amount: Option<Price>,
    #[serde(default)]
    pub paid_amount: Option<Price>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, with = "crate::time::optional_datetime")]
    pub order_date: Option<NaiveDateTime>,
    #[serde(default, with = "crate::time::optional_datetime")]
    pub create_time: Option<NaiveDateTime>,
    #[serde(default, with = "crate::time::optional_datetime")]
    pub update_time: Option<NaiveDateTime>,
}

/// One product/specification/quantity triple read from an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderEntry {
    pub product_id: ProductId,
    pub spec_id: Option<SpecificationId>,
    pub quantity: i64,
}

impl Order {
    /// Typed view over `items`, skipping keys and entries that don't parse.
    pub fn entries(&self) -> Vec<OrderEntry> {
        let mut entries = Vec::new();
        for (key, value) in &self.items {
            if key == NOTES_KEY {
                continue;
            }
            let Ok(product_id) = key.parse::<ProductId>() else {
                continue;
            };
            let Some(list) = value.as_array() else {
                continue;
            };
            for entry in list.iter().filter_map(Value::as_object) {
                let spec_id = entry
                    .get(SPEC_ID_FIELD)
                    .map(lenient::count_from_json)
                    .filter(|id| *id > 0)
                    .map(SpecificationId::new);
                let quantity = entry
                    .get(QUANTITY_FIELD)
                    .map(lenient::count_from_json)
                    .unwrap_or(0);
                entries.push(OrderEntry {
                    product_id,
                    spec_id,
                    quantity,
                });
            }
        }
        entries
    }

    /// Get total item count.
    pub fn item_count(&self) -> i64 {
        self.entries()
            .iter()
            .map(|e| e.quantity)
            .fold(0, i64::saturating_add)
    }

    /// Order date formatted for display, or "-".
    pub fn order_date_display(&self) -> String {
        self.order_date
            .as_ref()
            .map(format_datetime)
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Request body for placing an order.
///
/// The service fills in the order number and date when they are absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    pub items: Map<String, Value>,
    pub total_amount: Price,
    pub paid_amount: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::time::optional_datetime"
    )]
    pub order_date: Option<NaiveDateTime>,
}

impl OrderDraft {
    /// Build an order from cart items. Both amounts start at the cart total.
    pub fn from_items(items: &[LineItem]) -> Result<Self, CommerceError> {
        if items.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let mut map = Map::new();
        for item in items {
            let mut entry = Map::new();
            if let Some(spec_id) = item.spec_id {
                entry.insert(SPEC_ID_FIELD.to_string(), Value::from(spec_id.get()));
            }
            entry.insert(QUANTITY_FIELD.to_string(), Value::from(item.quantity));

            let list = map
                .entry(item.product_id.to_string())
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(list) = list {
                list.push(Value::Object(entry));
            }
        }

        let total: Price = items.iter().map(LineItem::line_total).sum();
        Ok(Self {
            order_number: None,
            items: map,
            total_amount: total,
            paid_amount: total,
            notes: None,
            order_date: None,
        })
    }

    /// Attach a customer note. Blank notes are dropped.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = if notes.trim().is_empty() {
            None
        } else {
            Some(notes)
        };
        self
    }

    /// Record an amount actually paid that differs from the total.
    pub fn with_paid_amount(mut self, paid: Price) -> Self {
        self.paid_amount = paid;
        self
    }
}

/// Filters for listing orders, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderQuery {
    pub page_num: u32,
    pub page_size: u32,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

impl Default for OrderQuery {
    fn default() -> Self {
        Self {
            page_num: 1,
            page_size: 10,
            start_date: None,
            end_date: None,
        }
    }
}

impl OrderQuery {
    /// Query string pairs in the service's expected format.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("pageNum", self.page_num.to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        if let Some(start) = &self.start_date {
            query.push(("startDate", format_datetime(start)));
        }
        if let Some(end) = &self.end_date {
            query.push(("endDate", format_datetime(end)));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Product, Specification};
    use crate::time::parse_datetime;
    use serde_json::json;

    fn line(product: i64, spec: Option<i64>, price: i64, quantity: i64) -> LineItem {
        let p = Product::new(ProductId::new(product), format!("p{}", product), Price::from(price));
        let s = spec.map(|id| Specification::new(SpecificationId::new(id), p.id, "s"));
        LineItem::new(&p, s.as_ref(), quantity, "")
    }

    #[test]
    fn test_draft_from_items() {
        let items = vec![
            line(1, Some(9), 10, 2),
            line(1, Some(10), 10, 1),
            line(2, None, 5, 4),
        ];

        let draft = OrderDraft::from_items(&items).unwrap();
        let body = serde_json::to_value(&draft).unwrap();

        assert_eq!(
            body,
            json!({
                "items": {
                    "1": [
                        {"规格id": 9, "购买数量": 2},
                        {"规格id": 10, "购买数量": 1}
                    ],
                    "2": [{"购买数量": 4}]
                },
                "totalAmount": 50,
                "paidAmount": 50
            })
        );
    }

    #[test]
    fn test_draft_from_empty_cart() {
        assert!(matches!(
            OrderDraft::from_items(&[]),
            Err(CommerceError::EmptyCart)
        ));
    }

    #[test]
    fn test_draft_notes_and_paid_amount() {
        let draft = OrderDraft::from_items(&[line(1, None, 10, 1)])
            .unwrap()
            .with_notes("  ")
            .with_paid_amount(Price::from(8));
        assert_eq!(draft.notes, None);
        assert_eq!(draft.paid_amount, Price::from(8));

        let draft = draft.with_notes("no ice");
        assert_eq!(draft.notes.as_deref(), Some("no ice"));
    }

    #[test]
    fn test_order_entries() {
        let order: Order = serde_json::from_value(json!({
            "id": 3,
            "orderNumber": "20240501083000123456",
            "items": {
                "1": [{"规格id": "9", "购买数量": "2"}, {"购买数量": 1}],
                "notes": "leave at door",
                "abc": [{"购买数量": 5}],
                "2": "not a list"
            },
            "totalAmount": 30.5,
            "paidAmount": 30,
            "orderDate": "2024-05-01 08:30:00"
        }))
        .unwrap();

        let entries = order.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].spec_id, Some(SpecificationId::new(9)));
        assert_eq!(entries[0].quantity, 2);
        assert_eq!(entries[1].spec_id, None);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.order_date_display(), "2024-05-01 08:30:00");
    }

    #[test]
    fn test_order_query_defaults() {
        let query = OrderQuery::default().to_query();
        assert_eq!(
            query,
            vec![("pageNum", "1".to_string()), ("pageSize", "10".to_string())]
        );
    }

    #[test]
    fn test_order_query_dates() {
        let query = OrderQuery {
            start_date: parse_datetime("2024-05-01 00:00:00"),
            end_date: parse_datetime("2024-05-31 23:59:59"),
            ..Default::default()
        }
        .to_query();
        assert!(query.contains(&("startDate", "2024-05-01 00:00:00".to_string())));
        assert!(query.contains(&("endDate", "2024-05-31 23:59:59".to_string())));
    }
}
