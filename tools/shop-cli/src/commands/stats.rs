//! Sales statistics commands.

use anyhow::{Context as _, Result};
use chrono::{Local, NaiveDate};

use super::{StatsArgs, StatsCommand};
use crate::context::Context;
use crate::output::money;

/// Run the stats command.
pub async fn run(args: StatsArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api();

    match args.command {
        StatsCommand::Revenue { date, mode } => {
            let date = date.unwrap_or_else(today);
            let stats = api
                .revenue(date, mode)
                .await
                .context("Failed to load revenue")?;

            if ctx.output.is_json() {
                ctx.output.json(&stats);
                return Ok(());
            }

            ctx.output
                .header(&format!("Revenue by {} around {}", mode, date));
            for point in &stats.data {
                ctx.output
                    .table_row(&[&point.time, &money(&point.revenue)], &[20, 10]);
            }
            ctx.output.kv("Total", &stats.total().to_string());
            if let Some(peak) = stats.peak() {
                ctx.output
                    .kv("Peak", &format!("{} ({})", peak.time, peak.revenue));
            }
        }

        StatsCommand::Day { date } => {
            let revenue = api
                .day_total_revenue(date)
                .await
                .context("Failed to load daily revenue")?;
            let date = date.unwrap_or_else(today);

            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "date": date,
                    "revenue": revenue,
                }));
                return Ok(());
            }
            ctx.output.kv(&format!("Revenue on {}", date), &revenue.to_string());
        }

        StatsCommand::Hot { from, to, limit } => {
            let products = api
                .hot_products(from, to, limit)
                .await
                .context("Failed to load best sellers")?;

            if ctx.output.is_json() {
                ctx.output.json(&products);
                return Ok(());
            }

            ctx.output.header("Best sellers");
            if products.is_empty() {
                ctx.output.info("No sales in this period.");
            }
            for (rank, product) in products.iter().enumerate() {
                ctx.output.table_row(
                    &[
                        &format!("#{}", rank + 1),
                        &product.product_name,
                        &format!("{} sold", product.sales),
                        &money(&product.estimated_revenue()),
                    ],
                    &[4, 28, 10, 10],
                );
            }
        }
    }

    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
