//! Product catalog commands.

use anyhow::{Context as _, Result};
use shop_api::ProductQuery;
use shop_commerce::catalog::{Product, ProductInput};
use shop_commerce::{CategoryId, ProductId};

use super::{confirm, ProductsArgs, ProductsCommand};
use crate::context::Context;
use crate::output::money;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api();

    match args.command {
        ProductsCommand::List {
            category,
            page,
            size,
        } => {
            let query = ProductQuery {
                category_id: category.map(CategoryId::new),
                page_num: page.max(1),
                page_size: size.max(1),
            };
            let page = api
                .list_products(&query)
                .await
                .context("Failed to list products")?;

            if ctx.output.is_json() {
                ctx.output.json(&page);
                return Ok(());
            }

            ctx.output.header(&format!(
                "Products (page {} of {})",
                page.current,
                page.total_pages().max(1)
            ));
            print_products(&page.records, ctx);
            if page.total > 0 {
                ctx.output.info(&format!(
                    "Showing {}-{} of {}",
                    page.start_item(),
                    page.end_item(),
                    page.total
                ));
            }
            if page.has_next() {
                ctx.output
                    .info(&format!("Next page: --page {}", page.current + 1));
            }
        }

        ProductsCommand::All => {
            let products = api.all_products().await.context("Failed to list products")?;
            if ctx.output.is_json() {
                ctx.output.json(&products);
                return Ok(());
            }
            ctx.output.header(&format!("Products ({})", products.len()));
            print_products(&products, ctx);
        }

        ProductsCommand::Show { id } => {
            let id = ProductId::new(id);
            let product = api
                .get_product(id)
                .await
                .with_context(|| format!("Failed to load product {}", id))?;
            let specs = api
                .specifications_for_product(id)
                .await
                .unwrap_or_default();

            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "product": product,
                    "specifications": specs,
                }));
                return Ok(());
            }

            ctx.output.header(&product.name);
            ctx.output.kv("ID", &product.id.to_string());
            ctx.output.kv("Price", &product.sell_price.to_string());
            if let Some(cost) = product.purchase_price {
                ctx.output.kv("Purchase price", &cost.to_string());
            }
            if let Some(margin) = product.unit_margin() {
                ctx.output.kv("Margin", &margin.to_string());
            }
            if let Some(category) = product.category_id {
                ctx.output.kv("Category", &category.to_string());
            }
            for image in &product.images {
                ctx.output.kv("Image", &ctx.config.api.image_url(image));
            }

            if !specs.is_empty() {
                ctx.output.header("Specifications");
                for spec in &specs {
                    let stock = spec
                        .stock
                        .map_or_else(|| "-".to_string(), |s| s.to_string());
                    ctx.output.table_row(
                        &[&spec.id.to_string(), &spec.name, &format!("stock {}", stock)],
                        &[8, 24, 12],
                    );
                }
            }
        }

        ProductsCommand::Add {
            name,
            price,
            category,
            purchase_price,
            image,
        } => {
            let input = ProductInput {
                name,
                images: image,
                sell_price: price,
                category_id: category.map(CategoryId::new),
                purchase_price,
            };
            let product = api
                .add_product(&input)
                .await
                .context("Failed to create product")?;

            if ctx.output.is_json() {
                ctx.output.json(&product);
            } else {
                ctx.output.success(&format!(
                    "Created product {} ({})",
                    product.name, product.id
                ));
            }
        }

        ProductsCommand::Delete { id, yes } => {
            let id = ProductId::new(id);
            if !confirm(ctx, &format!("Delete product {}?", id), yes)? {
                return Ok(());
            }
            api.delete_product(id)
                .await
                .with_context(|| format!("Failed to delete product {}", id))?;
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "deleted": id }));
            } else {
                ctx.output.success(&format!("Deleted product {}", id));
            }
        }
    }

    Ok(())
}

fn print_products(products: &[Product], ctx: &Context) {
    if products.is_empty() {
        ctx.output.info("No products found.");
        return;
    }
    for product in products {
        ctx.output.table_row(
            &[
                &product.id.to_string(),
                &product.name,
                &money(&product.sell_price),
            ],
            &[8, 30, 10],
        );
    }
}
