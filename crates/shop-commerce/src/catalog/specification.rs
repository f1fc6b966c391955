//! Product specifications (variants such as size or flavor).

use crate::ids::{ProductId, SpecificationId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A purchasable variant of a product with its own stock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Specification {
    /// Unique specification identifier.
    pub id: SpecificationId,
    /// Product this specification belongs to.
    pub product_id: ProductId,
    /// Display name (e.g., "500g / Spicy").
    pub name: String,
    /// Attribute pairs describing the variant.
    #[serde(default)]
    pub specs: BTreeMap<String, String>,
    /// Units in stock; ordering deducts from this.
    #[serde(default)]
    pub stock: Option<i32>,
    #[serde(default, with = "crate::time::optional_datetime")]
    pub create_time: Option<NaiveDateTime>,
    #[serde(default, with = "crate::time::optional_datetime")]
    pub update_time: Option<NaiveDateTime>,
}

impl Specification {
    /// Create a specification with just an id, owner and name.
    pub fn new(id: SpecificationId, product_id: ProductId, name: impl Into<String>) -> Self {
        Self {
            id,
            product_id,
            name: name.into(),
            specs: BTreeMap::new(),
            stock: None,
            create_time: None,
            update_time: None,
        }
    }

    /// Whether at least `quantity` units can be ordered. Unknown stock is
    /// treated as available; the service has the final say.
    pub fn has_stock_for(&self, quantity: i64) -> bool {
        self.stock.map_or(true, |stock| i64::from(stock) >= quantity)
    }
}

/// Payload for creating or updating a specification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpecificationInput {
    pub product_id: ProductId,
    pub name: String,
    #[serde(default)]
    pub specs: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_with_specs() {
        let spec: Specification = serde_json::from_value(json!({
            "id": 9,
            "productId": 1,
            "name": "Large",
            "specs": {"size": "L", "color": "red"},
            "stock": 3
        }))
        .unwrap();

        assert_eq!(spec.id, SpecificationId::new(9));
        assert_eq!(spec.specs.get("size").map(String::as_str), Some("L"));
        assert!(spec.has_stock_for(3));
        assert!(!spec.has_stock_for(4));
    }

    #[test]
    fn test_unknown_stock_is_available() {
        let spec = Specification::new(SpecificationId::new(1), ProductId::new(1), "Default");
        assert!(spec.has_stock_for(1000));
    }

    #[test]
    fn test_input_serializes_camel_case() {
        let input = SpecificationInput {
            product_id: ProductId::new(2),
            name: "Small".into(),
            specs: BTreeMap::new(),
            stock: Some(10),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["productId"], json!(2));
        assert_eq!(json["stock"], json!(10));
    }
}
