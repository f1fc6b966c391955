//! Shopping cart commands.

use anyhow::{bail, Context as _, Result};
use serde::Serialize;
use shop_commerce::cart::{CartTotals, LineItem};
use shop_commerce::catalog::Category;
use shop_commerce::checkout::OrderDraft;
use shop_commerce::{CategoryId, LineItemKey, Price, ProductId, SpecificationId};
use shop_data::FetchError;

use super::{confirm, CartArgs, CartCommand};
use crate::context::Context;
use crate::output::money;

/// Label used for items without a category.
const UNCATEGORIZED: &str = "Other";

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command.unwrap_or(CartCommand::List) {
        CartCommand::List => list_cart(ctx),
        CartCommand::Add {
            product_id,
            spec,
            quantity,
            category,
        } => add_item(product_id, spec, quantity, category, ctx).await,
        CartCommand::Update { key, quantity } => update_item(&key, quantity, ctx),
        CartCommand::Remove { key } => update_item(&key, 0, ctx),
        CartCommand::Clear { yes } => clear_cart(yes, ctx),
        CartCommand::Checkout { notes, paid, yes } => checkout(notes, paid, yes, ctx).await,
    }
}

#[derive(Serialize)]
struct CartView<'a> {
    items: &'a [LineItem],
    #[serde(flatten)]
    totals: CartTotals,
}

fn list_cart(ctx: &Context) -> Result<()> {
    let cart = ctx.open_cart()?;

    if ctx.output.is_json() {
        ctx.output.json(&CartView {
            items: cart.items(),
            totals: cart.totals(),
        });
        return Ok(());
    }

    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        ctx.output
            .info("Add something with `shop cart add <product-id>`.");
        return Ok(());
    }

    ctx.output.header("Cart");
    let widths = [8, 30, 10, 5, 10];
    for (category, items) in group_by_category(cart.items()) {
        ctx.output.info("");
        ctx.output.info(category);
        for item in items {
            ctx.output.table_row(
                &[
                    &item.key().to_string(),
                    &item.label(),
                    &money(&item.price),
                    &format!("x{}", item.quantity),
                    &money(&item.line_total()),
                ],
                &widths,
            );
        }
    }

    ctx.output.info("");
    ctx.output.kv("Items", &cart.total_count().to_string());
    ctx.output.kv("Total", &cart.total_price().to_string());
    Ok(())
}

/// Group items by category label, keeping first-seen category order and
/// item order within each group.
fn group_by_category(items: &[LineItem]) -> Vec<(&str, Vec<&LineItem>)> {
    let mut groups: Vec<(&str, Vec<&LineItem>)> = Vec::new();
    for item in items {
        let category = item
            .category_name
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCATEGORIZED);
        match groups.iter_mut().find(|(name, _)| *name == category) {
            Some((_, group)) => group.push(item),
            None => groups.push((category, vec![item])),
        }
    }
    groups
}

async fn add_item(
    product_id: i64,
    spec_id: Option<i64>,
    quantity: i64,
    category: Option<String>,
    ctx: &Context,
) -> Result<()> {
    if quantity <= 0 {
        bail!("Quantity must be at least 1");
    }

    let api = ctx.api();
    let spinner = ctx.output.spinner("Fetching product...");
    let product = api.get_product(ProductId::new(product_id)).await;
    let spec = match spec_id {
        Some(id) => Some(api.get_specification(SpecificationId::new(id)).await),
        None => None,
    };
    spinner.finish_and_clear();

    let product = product.with_context(|| format!("Failed to load product {}", product_id))?;
    let spec = spec
        .transpose()
        .with_context(|| format!("Failed to load specification {}", spec_id.unwrap_or_default()))?;

    if let Some(spec) = &spec {
        if spec.product_id != product.id {
            bail!(
                "Specification {} belongs to product {}, not {}",
                spec.id,
                spec.product_id,
                product.id
            );
        }
        if !spec.has_stock_for(quantity) {
            ctx.output
                .warn(&format!("Only {} left of {}", spec.stock.unwrap_or(0), spec.name));
        }
    }

    let mut category_notice = None;
    let category = match category {
        Some(name) => name,
        None => match product.category_id {
            Some(id) => match category_from_lookup(api.get_category(id).await, id) {
                Ok(name) => name,
                Err(notice) => {
                    category_notice = Some(notice);
                    String::new()
                }
            },
            None => String::new(),
        },
    };

    let mut cart = ctx.open_cart()?;
    let key = cart.add_to_cart(&product, spec.as_ref(), quantity, &category);

    if let Some(notice) = &category_notice {
        ctx.output.warn(notice);
    }

    if ctx.output.is_json() {
        ctx.output.json(&cart.get(&key));
        return Ok(());
    }

    let quantity_now = cart.get(&key).map_or(quantity, |item| item.quantity);
    ctx.output.success(&format!(
        "Added {} x{} (now {} in cart, key {})",
        product.name, quantity, quantity_now, key
    ));
    ctx.output.kv("Cart total", &cart.total_price().to_string());
    Ok(())
}

/// Category name from a lookup, or the notice to show when the lookup failed.
fn category_from_lookup(
    lookup: Result<Category, FetchError>,
    id: CategoryId,
) -> Result<String, String> {
    lookup.map(|c| c.name).map_err(|_| {
        format!(
            "Could not load category {}; the item was added without a category",
            id
        )
    })
}

fn update_item(key: &LineItemKey, quantity: i64, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;
    let label = match cart.get(key) {
        Some(item) => item.label(),
        None => bail!("No cart item with key {}. Run `shop cart list` to see keys.", key),
    };

    if quantity <= 0 {
        cart.remove(key);
    } else {
        cart.update_quantity(key, quantity);
    }

    if ctx.output.is_json() {
        ctx.output.json(&CartView {
            items: cart.items(),
            totals: cart.totals(),
        });
    } else if quantity <= 0 {
        ctx.output.success(&format!("Removed {}", label));
    } else {
        ctx.output
            .success(&format!("Set {} to {}", label, quantity));
    }
    Ok(())
}

fn clear_cart(yes: bool, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;
    if cart.is_empty() {
        ctx.output.info("Cart is already empty.");
        return Ok(());
    }
    if !confirm(ctx, &format!("Remove all {} items from the cart?", cart.len()), yes)? {
        return Ok(());
    }
    cart.clear_cart();
    ctx.output.success("Cart cleared");
    Ok(())
}

async fn checkout(
    notes: Option<String>,
    paid: Option<Price>,
    yes: bool,
    ctx: &Context,
) -> Result<()> {
    let mut cart = ctx.open_cart()?;
    if cart.is_empty() {
        bail!("Cart is empty, nothing to order");
    }

    let mut draft = OrderDraft::from_items(cart.items())?;
    if let Some(notes) = notes {
        draft = draft.with_notes(notes);
    }
    if let Some(paid) = paid {
        draft = draft.with_paid_amount(paid);
    }

    if !ctx.output.is_json() {
        ctx.output.header("Order summary");
        for item in cart.items() {
            ctx.output
                .list_item(&format!("{} x{}  {}", item.label(), item.quantity, item.line_total()));
        }
        ctx.output.kv("Total", &draft.total_amount.to_string());
        if draft.paid_amount != draft.total_amount {
            ctx.output.kv("Paid", &draft.paid_amount.to_string());
        }
        if let Some(notes) = &draft.notes {
            ctx.output.kv("Notes", notes);
        }
    }

    if !confirm(ctx, "Place this order?", yes)? {
        return Ok(());
    }

    let spinner = ctx.output.spinner("Placing order...");
    let result = ctx.api().create_order(&draft).await;
    spinner.finish_and_clear();
    let order_number = result.context("Failed to place order")?;

    cart.clear_cart();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "orderNumber": order_number,
            "totalAmount": draft.total_amount,
        }));
    } else {
        ctx.output
            .success(&format!("Order {} placed", order_number));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, category: Option<&str>) -> LineItem {
        LineItem {
            product_id: ProductId::new(id),
            product_name: format!("p{}", id),
            image: None,
            spec_id: None,
            spec_name: None,
            price: Price::from(1),
            quantity: 1,
            category_name: category.map(str::to_string),
        }
    }

    #[test]
    fn test_category_lookup_failure_gives_notice() {
        let id = CategoryId::new(4);
        let failed = category_from_lookup(Err(FetchError::Timeout), id);
        assert_eq!(
            failed,
            Err("Could not load category 4; the item was added without a category".to_string())
        );

        let found = Category {
            id,
            name: "Tea".to_string(),
            sort_order: None,
            create_time: None,
            update_time: None,
        };
        assert_eq!(category_from_lookup(Ok(found), id), Ok("Tea".to_string()));
    }

    #[test]
    fn test_group_by_category_keeps_order() {
        let items = vec![
            item(1, Some("Tea")),
            item(2, None),
            item(3, Some("Snacks")),
            item(4, Some("Tea")),
            item(5, Some("")),
        ];
        let groups = group_by_category(&items);
        let summary: Vec<(&str, Vec<i64>)> = groups
            .iter()
            .map(|(name, items)| (*name, items.iter().map(|i| i.product_id.get()).collect()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Tea", vec![1, 4]),
                (UNCATEGORIZED, vec![2, 5]),
                ("Snacks", vec![3]),
            ]
        );
    }
}
