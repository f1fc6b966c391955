//! Revenue and sales statistics returned by the admin endpoints.

use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::money::{lenient, Price};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Granularity of a revenue series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevenueMode {
    /// Hourly buckets within one day.
    #[default]
    Hour,
    /// Daily buckets within one month.
    Day,
    /// Monthly buckets within one year.
    Month,
}

impl RevenueMode {
    /// Query string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            RevenueMode::Hour => "hour",
            RevenueMode::Day => "day",
            RevenueMode::Month => "month",
        }
    }
}

impl fmt::Display for RevenueMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RevenueMode {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hour" => Ok(RevenueMode::Hour),
            "day" => Ok(RevenueMode::Day),
            "month" => Ok(RevenueMode::Month),
            other => Err(CommerceError::UnknownRevenueMode(other.to_string())),
        }
    }
}

/// One bucket of a revenue series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenuePoint {
    /// Bucket label as the service renders it (e.g. "08:00", "2024-05-01").
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub revenue: Price,
}

/// A revenue series.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RevenueStatistics {
    #[serde(default)]
    pub data: Vec<RevenuePoint>,
}

impl RevenueStatistics {
    /// Sum over all buckets.
    pub fn total(&self) -> Price {
        self.data.iter().map(|p| p.revenue).sum()
    }

    /// The bucket with the highest revenue, first one wins ties.
    pub fn peak(&self) -> Option<&RevenuePoint> {
        self.data
            .iter()
            .fold(None, |best: Option<&RevenuePoint>, point| match best {
                Some(b) if b.revenue >= point.revenue => Some(b),
                _ => Some(point),
            })
    }
}

/// A best-selling product over a date range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotProduct {
    pub product_id: ProductId,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub sell_price: Price,
    /// Units sold.
    #[serde(default, deserialize_with = "lenient::count")]
    pub sales: i64,
}

impl HotProduct {
    /// Revenue attributable to this product at its current price.
    pub fn estimated_revenue(&self) -> Price {
        self.sell_price * self.sales
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mode_parse() {
        assert_eq!("hour".parse::<RevenueMode>().unwrap(), RevenueMode::Hour);
        assert_eq!(" Month ".parse::<RevenueMode>().unwrap(), RevenueMode::Month);
        assert!(matches!(
            "week".parse::<RevenueMode>(),
            Err(CommerceError::UnknownRevenueMode(m)) if m == "week"
        ));
        assert_eq!(RevenueMode::default().as_str(), "hour");
    }

    #[test]
    fn test_revenue_series() {
        let stats: RevenueStatistics = serde_json::from_value(json!({
            "data": [
                {"time": "08:00", "revenue": 12.5},
                {"time": "09:00", "revenue": 40},
                {"time": "10:00", "revenue": 40},
                {"time": "11:00", "revenue": null}
            ]
        }))
        .unwrap();

        assert_eq!(stats.total(), Price::from_parts(925, 1));
        assert_eq!(stats.peak().map(|p| p.time.as_str()), Some("09:00"));
        assert!(RevenueStatistics::default().peak().is_none());
    }

    #[test]
    fn test_hot_product() {
        let hot: HotProduct = serde_json::from_value(json!({
            "productId": 3,
            "productName": "Oolong",
            "categoryId": 1,
            "images": ["/api/image/o.jpg"],
            "sellPrice": 15,
            "sales": "7"
        }))
        .unwrap();

        assert_eq!(hot.product_id, ProductId::new(3));
        assert_eq!(hot.sales, 7);
        assert_eq!(hot.estimated_revenue(), Price::from(105));
    }
}
