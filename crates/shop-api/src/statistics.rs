//! Statistics endpoints.

use crate::ShopApi;
use chrono::NaiveDate;
use shop_commerce::money::Price;
use shop_commerce::statistics::{HotProduct, RevenueMode, RevenueStatistics};
use shop_commerce::time::format_date;
use shop_data::FetchError;

impl ShopApi {
    /// `GET /statistics/revenue`: revenue series for the day, month or year
    /// containing `date`, depending on `mode`.
    pub async fn revenue(
        &self,
        date: NaiveDate,
        mode: RevenueMode,
    ) -> Result<RevenueStatistics, FetchError> {
        let query = [
            ("date", format_date(&date)),
            ("mode", mode.as_str().to_string()),
        ];
        self.client
            .get_with_query("/statistics/revenue", query)
            .await
    }

    /// `GET /statistics/revenue/day`. The service defaults to today.
    pub async fn day_total_revenue(&self, date: Option<NaiveDate>) -> Result<Price, FetchError> {
        let query: Vec<(&str, String)> = date
            .iter()
            .map(|d| ("date", format_date(d)))
            .collect();
        let revenue: Option<Price> = self
            .client
            .get_with_query("/statistics/revenue/day", query)
            .await?;
        Ok(revenue.unwrap_or(Price::ZERO))
    }

    /// `GET /statistics/hot-products`. Missing dates default to today on the
    /// service side.
    pub async fn hot_products(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        limit: u32,
    ) -> Result<Vec<HotProduct>, FetchError> {
        let mut query = Vec::with_capacity(3);
        if let Some(start) = &start_date {
            query.push(("startDate", format_date(start)));
        }
        if let Some(end) = &end_date {
            query.push(("endDate", format_date(end)));
        }
        query.push(("limit", limit.to_string()));
        self.client
            .get_with_query("/statistics/hot-products", query)
            .await
    }
}
