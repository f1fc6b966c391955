//! Line item types.

use crate::catalog::{Product, Specification};
use crate::ids::{ProductId, SpecificationId};
use crate::money::{lenient, Price};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One purchasable selection in the cart.
///
/// Field names match the persisted JSON exactly (`productId`, `specId`, ...).
/// Numeric fields are read leniently: a malformed price or quantity is
/// zero rather than a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    #[serde(default)]
    pub product_name: String,
    /// Cover image path.
    #[serde(default)]
    pub image: Option<String>,
    /// Chosen specification, `None` when the product has none selected.
    #[serde(default)]
    pub spec_id: Option<SpecificationId>,
    /// Specification name (denormalized for display).
    #[serde(default)]
    pub spec_name: Option<String>,
    /// Unit price at the time the item was added.
    #[serde(default)]
    pub price: Price,
    /// Quantity.
    #[serde(default, deserialize_with = "lenient::count")]
    pub quantity: i64,
    /// Category label used to group items for display.
    #[serde(default)]
    pub category_name: Option<String>,
}

impl LineItem {
    /// Build a new line item from a product and optional specification.
    pub fn new(
        product: &Product,
        spec: Option<&Specification>,
        quantity: i64,
        category_name: &str,
    ) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            image: product.cover_image().map(str::to_string),
            spec_id: spec.map(|s| s.id),
            spec_name: spec.map(|s| s.name.clone()),
            price: product.sell_price,
            quantity,
            category_name: non_empty(category_name),
        }
    }

    /// The identity of this item within a cart.
    pub fn key(&self) -> LineItemKey {
        LineItemKey::new(self.product_id, self.spec_id)
    }

    /// Price times quantity.
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }

    /// Display label, e.g. "Green Tea (500g)".
    pub fn label(&self) -> String {
        match self.spec_name.as_deref() {
            Some(spec) if !spec.is_empty() => format!("{} ({})", self.product_name, spec),
            _ => self.product_name.clone(),
        }
    }
}

pub(crate) fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Stable handle to a line item: its `(productId, specId)` pair.
///
/// A cart holds at most one item per key, so the key identifies an item
/// for as long as it stays in the cart, including across reloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineItemKey {
    pub product_id: ProductId,
    pub spec_id: Option<SpecificationId>,
}

impl LineItemKey {
    /// Create a key.
    pub fn new(product_id: ProductId, spec_id: Option<SpecificationId>) -> Self {
        Self {
            product_id,
            spec_id,
        }
    }
}

impl fmt::Display for LineItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.spec_id {
            Some(spec) => write!(f, "{}/{}", self.product_id, spec),
            None => write!(f, "{}", self.product_id),
        }
    }
}

impl FromStr for LineItemKey {
    type Err = std::num::ParseIntError;

    /// Parse `"<productId>"` or `"<productId>/<specId>"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((product, spec)) => Ok(Self::new(product.parse()?, Some(spec.parse()?))),
            None => Ok(Self::new(s.parse()?, None)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product() -> Product {
        Product::new(ProductId::new(1), "Green Tea", Price::from(10))
            .with_images(["/api/image/tea.jpg"])
    }

    #[test]
    fn test_new_from_product_and_spec() {
        let spec = Specification::new(SpecificationId::new(9), ProductId::new(1), "500g");
        let item = LineItem::new(&product(), Some(&spec), 2, "Drinks");

        assert_eq!(item.key(), LineItemKey::new(ProductId::new(1), Some(SpecificationId::new(9))));
        assert_eq!(item.image.as_deref(), Some("/api/image/tea.jpg"));
        assert_eq!(item.spec_name.as_deref(), Some("500g"));
        assert_eq!(item.category_name.as_deref(), Some("Drinks"));
        assert_eq!(item.line_total(), Price::from(20));
        assert_eq!(item.label(), "Green Tea (500g)");
    }

    #[test]
    fn test_new_without_spec_or_category() {
        let item = LineItem::new(&product(), None, 1, "");
        assert_eq!(item.spec_id, None);
        assert_eq!(item.spec_name, None);
        assert_eq!(item.category_name, None);
        assert_eq!(item.label(), "Green Tea");
    }

    #[test]
    fn test_persisted_field_names() {
        let item = LineItem::new(&product(), None, 3, "Drinks");
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({
                "productId": 1,
                "productName": "Green Tea",
                "image": "/api/image/tea.jpg",
                "specId": null,
                "specName": null,
                "price": 10,
                "quantity": 3,
                "categoryName": "Drinks"
            })
        );
    }

    #[test]
    fn test_lenient_numeric_fields() {
        let item: LineItem = serde_json::from_value(json!({
            "productId": 1,
            "productName": "A",
            "price": "not a number",
            "quantity": "2"
        }))
        .unwrap();
        assert_eq!(item.price, Price::ZERO);
        assert_eq!(item.quantity, 2);
        assert_eq!(item.line_total(), Price::ZERO);
    }

    #[test]
    fn test_reads_storefront_empty_category() {
        let item: LineItem = serde_json::from_value(json!({
            "productId": 1,
            "productName": "A",
            "image": null,
            "specId": null,
            "specName": null,
            "price": 10,
            "quantity": 1,
            "categoryName": ""
        }))
        .unwrap();
        assert_eq!(item.category_name.as_deref(), Some(""));
    }

    #[test]
    fn test_key_display_and_parse() {
        let key = LineItemKey::new(ProductId::new(1), Some(SpecificationId::new(9)));
        assert_eq!(key.to_string(), "1/9");
        assert_eq!("1/9".parse::<LineItemKey>().unwrap(), key);

        let bare = LineItemKey::new(ProductId::new(4), None);
        assert_eq!(bare.to_string(), "4");
        assert_eq!("4".parse::<LineItemKey>().unwrap(), bare);

        assert!("x/1".parse::<LineItemKey>().is_err());
    }
}
