//! Category commands.

use anyhow::{Context as _, Result};
use shop_commerce::catalog::{Category, CategoryInput};
use shop_commerce::CategoryId;

use super::{confirm, CategoriesArgs, CategoriesCommand};
use crate::context::Context;

/// Run the categories command.
pub async fn run(args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api();

    match args.command.unwrap_or(CategoriesCommand::List) {
        CategoriesCommand::List => {
            let mut categories = api
                .all_categories()
                .await
                .context("Failed to list categories")?;
            Category::sort_for_display(&mut categories);

            if ctx.output.is_json() {
                ctx.output.json(&categories);
                return Ok(());
            }

            ctx.output.header("Categories");
            if categories.is_empty() {
                ctx.output.info("No categories yet.");
            }
            for category in &categories {
                let order = category
                    .sort_order
                    .map_or_else(|| "-".to_string(), |o| o.to_string());
                ctx.output
                    .table_row(&[&category.id.to_string(), &category.name, &order], &[8, 24, 6]);
            }
        }

        CategoriesCommand::Show { id } => {
            let id = CategoryId::new(id);
            let category = api
                .get_category(id)
                .await
                .with_context(|| format!("Failed to load category {}", id))?;

            if ctx.output.is_json() {
                ctx.output.json(&category);
                return Ok(());
            }
            ctx.output.header(&category.name);
            ctx.output.kv("ID", &category.id.to_string());
            if let Some(order) = category.sort_order {
                ctx.output.kv("Sort order", &order.to_string());
            }
        }

        CategoriesCommand::Add { name, sort_order } => {
            let input = CategoryInput { name, sort_order };
            api.add_category(&input)
                .await
                .context("Failed to create category")?;
            if ctx.output.is_json() {
                ctx.output.json(&input);
            } else {
                ctx.output
                    .success(&format!("Created category {}", input.name));
            }
        }

        CategoriesCommand::Delete { id, yes } => {
            let id = CategoryId::new(id);
            if !confirm(ctx, &format!("Delete category {}?", id), yes)? {
                return Ok(());
            }
            api.delete_category(id)
                .await
                .with_context(|| format!("Failed to delete category {}", id))?;
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "deleted": id }));
            } else {
                ctx.output.success(&format!("Deleted category {}", id));
            }
        }

        CategoriesCommand::Sort { ids } => {
            let ids: Vec<CategoryId> = ids.into_iter().map(CategoryId::new).collect();
            api.sort_categories(&ids)
                .await
                .context("Failed to reorder categories")?;
            if ctx.output.is_json() {
                ctx.output.json(&ids);
            } else {
                ctx.output
                    .success(&format!("Reordered {} categories", ids.len()));
            }
        }
    }

    Ok(())
}
