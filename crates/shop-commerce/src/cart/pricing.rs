//! Cart totals.

use crate::cart::LineItem;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// Derived totals for a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Number of distinct line items.
    pub line_count: usize,
    /// Sum of quantities.
    pub total_count: i64,
    /// Sum of price times quantity.
    pub total_price: Price,
}

impl CartTotals {
    /// Compute totals over a slice of line items.
    pub fn of(items: &[LineItem]) -> Self {
        Self {
            line_count: items.len(),
            total_count: items
                .iter()
                .map(|i| i.quantity)
                .fold(0, i64::saturating_add),
            total_price: items.iter().map(LineItem::line_total).sum(),
        }
    }

    /// Check if there is nothing to pay for.
    pub fn is_empty(&self) -> bool {
        self.line_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    fn item(id: i64, price: Price, quantity: i64) -> LineItem {
        LineItem {
            product_id: ProductId::new(id),
            product_name: format!("p{}", id),
            image: None,
            spec_id: None,
            spec_name: None,
            price,
            quantity,
            category_name: None,
        }
    }

    #[test]
    fn test_totals_empty() {
        let totals = CartTotals::of(&[]);
        assert!(totals.is_empty());
        assert_eq!(totals.total_count, 0);
        assert_eq!(totals.total_price, Price::ZERO);
    }

    #[test]
    fn test_totals_sum() {
        let items = vec![
            item(1, Price::from(10), 2),
            item(2, Price::from_parts(35, 1), 3),
        ];
        let totals = CartTotals::of(&items);
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.total_count, 5);
        assert_eq!(totals.total_price, Price::from_parts(305, 1));
    }

    #[test]
    fn test_totals_count_saturates() {
        let items = vec![item(1, Price::from(1), i64::MAX), item(2, Price::from(1), 5)];
        assert_eq!(CartTotals::of(&items).total_count, i64::MAX);
    }
}
