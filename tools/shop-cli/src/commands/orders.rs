//! Order commands.

use std::collections::HashMap;

use anyhow::{Context as _, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use shop_commerce::checkout::{Order, OrderQuery};
use shop_commerce::{OrderId, ProductId};

use super::{confirm, OrdersArgs, OrdersCommand};
use crate::context::Context;

/// Run the orders command.
pub async fn run(args: OrdersArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api();

    match args.command {
        OrdersCommand::List {
            page,
            size,
            from,
            to,
        } => {
            let query = order_query(page, size, from, to);
            let page = api
                .list_orders(&query)
                .await
                .context("Failed to list orders")?;

            if ctx.output.is_json() {
                ctx.output.json(&page);
                return Ok(());
            }

            ctx.output.header(&format!(
                "Orders (page {} of {})",
                page.current,
                page.total_pages().max(1)
            ));
            if page.records.is_empty() {
                ctx.output.info("No orders found.");
            }
            for order in &page.records {
                ctx.output.table_row(
                    &[
                        &order.id.to_string(),
                        &order.order_number,
                        &order.order_date_display(),
                        &format!("{} items", order.item_count()),
                        &order
                            .total_amount
                            .map_or_else(|| "-".to_string(), |p| p.to_string()),
                    ],
                    &[6, 22, 19, 10, 10],
                );
            }
            if page.total > 0 {
                ctx.output.info(&format!(
                    "Showing {}-{} of {}",
                    page.start_item(),
                    page.end_item(),
                    page.total
                ));
            }
        }

        OrdersCommand::Show { id } => {
            let id = OrderId::new(id);
            let order = api
                .get_order(id)
                .await
                .with_context(|| format!("Failed to load order {}", id))?;
            show_order(&order, ctx).await;
        }

        OrdersCommand::Find { number } => {
            let order = api
                .get_order_by_number(&number)
                .await
                .with_context(|| format!("Failed to find order {}", number))?;
            show_order(&order, ctx).await;
        }

        OrdersCommand::Delete { id, yes } => {
            let id = OrderId::new(id);
            if !confirm(ctx, &format!("Delete order {}?", id), yes)? {
                return Ok(());
            }
            api.delete_order(id)
                .await
                .with_context(|| format!("Failed to delete order {}", id))?;
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "deleted": id }));
            } else {
                ctx.output.success(&format!("Deleted order {}", id));
            }
        }
    }

    Ok(())
}

/// Build a list query covering whole days from `from` through `to`.
fn order_query(
    page: u32,
    size: u32,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> OrderQuery {
    OrderQuery {
        page_num: page.max(1),
        page_size: size.max(1),
        start_date: from.map(|d| d.and_time(NaiveTime::MIN)),
        end_date: to.map(end_of_day),
    }
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(23, 59, 59)
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN))
}

async fn show_order(order: &Order, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(order);
        return;
    }

    // Product names are a nicety; fall back to ids if the catalog is unavailable.
    let names: HashMap<ProductId, String> = ctx
        .api()
        .all_products()
        .await
        .map(|products| products.into_iter().map(|p| (p.id, p.name)).collect())
        .unwrap_or_default();

    ctx.output.header(&format!("Order {}", order.order_number));
    ctx.output.kv("ID", &order.id.to_string());
    ctx.output.kv("Date", &order.order_date_display());
    if let Some(total) = order.total_amount {
        ctx.output.kv("Total", &total.to_string());
    }
    if let Some(paid) = order.paid_amount {
        ctx.output.kv("Paid", &paid.to_string());
    }
    if let Some(notes) = order.notes.as_deref().filter(|n| !n.is_empty()) {
        ctx.output.kv("Notes", notes);
    }

    ctx.output.header("Items");
    for entry in order.entries() {
        let name = names
            .get(&entry.product_id)
            .cloned()
            .unwrap_or_else(|| format!("Product {}", entry.product_id));
        let spec = entry
            .spec_id
            .map_or_else(String::new, |s| format!(" (spec {})", s));
        ctx.output
            .list_item(&format!("{}{} x{}", name, spec, entry.quantity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_query_spans_whole_days() {
        let from = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let query = order_query(0, 20, Some(from), Some(to));

        assert_eq!(query.page_num, 1);
        assert_eq!(
            query.to_query(),
            vec![
                ("pageNum", "1".to_string()),
                ("pageSize", "20".to_string()),
                ("startDate", "2024-03-01 00:00:00".to_string()),
                ("endDate", "2024-03-31 23:59:59".to_string()),
            ]
        );
    }

    #[test]
    fn test_order_query_without_dates() {
        let query = order_query(2, 10, None, None);
        assert_eq!(query.start_date, None);
        assert_eq!(query.end_date, None);
        assert_eq!(query.page_num, 2);
    }
}
