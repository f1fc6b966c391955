//! Product specification commands.

use anyhow::{Context as _, Result};
use shop_commerce::catalog::{Specification, SpecificationInput};
use shop_commerce::{ProductId, SpecificationId};

use super::{confirm, SpecsArgs, SpecsCommand};
use crate::context::Context;

/// Run the specs command.
pub async fn run(args: SpecsArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api();

    match args.command {
        SpecsCommand::List { product_id } => {
            let product_id = ProductId::new(product_id);
            let specs = api
                .specifications_for_product(product_id)
                .await
                .with_context(|| format!("Failed to list specifications of product {}", product_id))?;

            if ctx.output.is_json() {
                ctx.output.json(&specs);
                return Ok(());
            }
            ctx.output
                .header(&format!("Specifications of product {}", product_id));
            if specs.is_empty() {
                ctx.output.info("No specifications.");
            }
            for spec in &specs {
                print_spec(spec, ctx);
            }
        }

        SpecsCommand::Show { id } => {
            let id = SpecificationId::new(id);
            let spec = api
                .get_specification(id)
                .await
                .with_context(|| format!("Failed to load specification {}", id))?;
            if ctx.output.is_json() {
                ctx.output.json(&spec);
                return Ok(());
            }
            ctx.output.header(&spec.name);
            ctx.output.kv("ID", &spec.id.to_string());
            ctx.output.kv("Product", &spec.product_id.to_string());
            if let Some(stock) = spec.stock {
                ctx.output.kv("Stock", &stock.to_string());
            }
            for (key, value) in &spec.specs {
                ctx.output.kv(key, value);
            }
        }

        SpecsCommand::Add {
            product_id,
            name,
            attr,
            stock,
        } => {
            let input = SpecificationInput {
                product_id: ProductId::new(product_id),
                name,
                specs: attr.into_iter().collect(),
                stock,
            };
            api.add_specification(&input)
                .await
                .context("Failed to create specification")?;
            if ctx.output.is_json() {
                ctx.output.json(&input);
            } else {
                ctx.output.success(&format!(
                    "Added specification {} to product {}",
                    input.name, input.product_id
                ));
            }
        }

        SpecsCommand::Delete { id, yes } => {
            let id = SpecificationId::new(id);
            if !confirm(ctx, &format!("Delete specification {}?", id), yes)? {
                return Ok(());
            }
            api.delete_specification(id)
                .await
                .with_context(|| format!("Failed to delete specification {}", id))?;
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "deleted": id }));
            } else {
                ctx.output.success(&format!("Deleted specification {}", id));
            }
        }
    }

    Ok(())
}

fn print_spec(spec: &Specification, ctx: &Context) {
    let attrs: Vec<String> = spec
        .specs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect();
    let stock = spec
        .stock
        .map_or_else(|| "-".to_string(), |s| s.to_string());
    ctx.output.table_row(
        &[&spec.id.to_string(), &spec.name, &stock, &attrs.join(", ")],
        &[8, 20, 6, 30],
    );
}
