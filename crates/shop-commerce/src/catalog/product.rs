//! Product types.

use crate::ids::{CategoryId, ProductId};
use crate::money::Price;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Image paths, first one is the cover.
    #[serde(default)]
    pub images: Vec<String>,
    /// Single image path some storefront views attach directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Selling price.
    #[serde(default)]
    pub sell_price: Price,
    /// Owning category.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Purchase (cost) price, admin only.
    #[serde(default)]
    pub purchase_price: Option<Price>,
    #[serde(default, with = "crate::time::optional_datetime")]
    pub create_time: Option<NaiveDateTime>,
    #[serde(default, with = "crate::time::optional_datetime")]
    pub update_time: Option<NaiveDateTime>,
}

impl Product {
    /// Create a product with just the fields the cart needs.
    pub fn new(id: ProductId, name: impl Into<String>, sell_price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            images: Vec::new(),
            image: None,
            sell_price,
            category_id: None,
            purchase_price: None,
            create_time: None,
            update_time: None,
        }
    }

    /// Builder-style image list setter.
    pub fn with_images(mut self, images: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    /// The image to show for this product: the explicit `image` if set and
    /// non-empty, otherwise the first entry of `images`.
    pub fn cover_image(&self) -> Option<&str> {
        self.image
            .as_deref()
            .filter(|image| !image.is_empty())
            .or_else(|| self.images.first().map(String::as_str))
    }

    /// Gross margin per unit, when the purchase price is known.
    pub fn unit_margin(&self) -> Option<Price> {
        self.purchase_price
            .map(|cost| Price::new(self.sell_price.amount() - cost.amount()))
    }
}

/// Payload for creating or updating a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub sell_price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<Price>,
}

impl From<&Product> for ProductInput {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            images: product.images.clone(),
            sell_price: product.sell_price,
            category_id: product.category_id,
            purchase_price: product.purchase_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_service_product() {
        let product: Product = serde_json::from_value(json!({
            "id": 7,
            "name": "Green Tea",
            "images": ["/api/image/a.jpg", "/api/image/b.jpg"],
            "sellPrice": 12.5,
            "categoryId": 2,
            "purchasePrice": 8,
            "isDelete": 0,
            "createTime": "2024-03-01T10:00:00",
            "updateTime": null
        }))
        .unwrap();

        assert_eq!(product.id, ProductId::new(7));
        assert_eq!(product.sell_price, Price::from_parts(125, 1));
        assert_eq!(product.category_id, Some(CategoryId::new(2)));
        assert!(product.create_time.is_some());
        assert!(product.update_time.is_none());
    }

    #[test]
    fn test_cover_image_prefers_explicit_image() {
        let product = Product::new(ProductId::new(1), "A", Price::from(10))
            .with_images(["first.jpg", "second.jpg"]);
        assert_eq!(product.cover_image(), Some("first.jpg"));

        let mut product = product;
        product.image = Some("explicit.jpg".to_string());
        assert_eq!(product.cover_image(), Some("explicit.jpg"));
    }

    #[test]
    fn test_cover_image_ignores_empty_image() {
        let mut product = Product::new(ProductId::new(1), "A", Price::from(10))
            .with_images(["first.jpg"]);
        product.image = Some(String::new());
        assert_eq!(product.cover_image(), Some("first.jpg"));
    }

    #[test]
    fn test_cover_image_absent() {
        let product = Product::new(ProductId::new(1), "A", Price::from(10));
        assert_eq!(product.cover_image(), None);
    }

    #[test]
    fn test_unit_margin() {
        let mut product = Product::new(ProductId::new(1), "A", Price::from(10));
        assert_eq!(product.unit_margin(), None);
        product.purchase_price = Some(Price::from_parts(65, 1));
        assert_eq!(product.unit_margin(), Some(Price::from_parts(35, 1)));
    }

    #[test]
    fn test_input_skips_absent_optionals() {
        let input = ProductInput {
            name: "A".into(),
            sell_price: Price::from(3),
            ..Default::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, json!({"name": "A", "images": [], "sellPrice": 3}));
    }
}
