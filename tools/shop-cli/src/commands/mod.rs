//! CLI command implementations.

pub mod cart;
pub mod categories;
pub mod config;
pub mod orders;
pub mod products;
pub mod route;
pub mod specs;
pub mod stats;
pub mod upload;

use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use dialoguer::Confirm;
use shop_commerce::statistics::RevenueMode;
use shop_commerce::{LineItemKey, Price};

use crate::context::Context;

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show cart contents grouped by category.
    List,
    /// Add a product to the cart.
    Add {
        /// Product ID.
        product_id: i64,
        /// Specification ID.
        #[arg(short, long)]
        spec: Option<i64>,
        /// Quantity to add.
        #[arg(short, long, default_value = "1")]
        quantity: i64,
        /// Category label (looked up from the product when omitted).
        #[arg(long)]
        category: Option<String>,
    },
    /// Set the quantity of a cart item. Zero or less removes it.
    Update {
        /// Item key: `<productId>` or `<productId>/<specId>`.
        key: LineItemKey,
        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove an item from the cart.
    Remove {
        /// Item key: `<productId>` or `<productId>/<specId>`.
        key: LineItemKey,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Place an order for everything in the cart.
    Checkout {
        /// Note for the shop.
        #[arg(short, long)]
        notes: Option<String>,
        /// Amount actually paid, if different from the total.
        #[arg(long)]
        paid: Option<Price>,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

#[derive(Subcommand)]
pub enum ProductsCommand {
    /// List products page by page.
    List {
        /// Only products in this category.
        #[arg(long)]
        category: Option<i64>,
        /// Page number (1-indexed).
        #[arg(short, long, default_value = "1")]
        page: u32,
        /// Page size.
        #[arg(short, long, default_value = "10")]
        size: u32,
    },
    /// List every product.
    All,
    /// Show a product and its specifications.
    Show {
        /// Product ID.
        id: i64,
    },
    /// Create a product.
    Add {
        /// Product name.
        #[arg(short, long)]
        name: String,
        /// Selling price.
        #[arg(short, long)]
        price: Price,
        /// Category ID.
        #[arg(long)]
        category: Option<i64>,
        /// Purchase (cost) price.
        #[arg(long)]
        purchase_price: Option<Price>,
        /// Image path, repeatable. Upload files with `shop upload` first.
        #[arg(short, long)]
        image: Vec<String>,
    },
    /// Delete a product.
    Delete {
        /// Product ID.
        id: i64,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    #[command(subcommand)]
    pub command: Option<CategoriesCommand>,
}

#[derive(Subcommand)]
pub enum CategoriesCommand {
    /// List categories in display order.
    List,
    /// Show one category.
    Show {
        /// Category ID.
        id: i64,
    },
    /// Create a category.
    Add {
        /// Category name.
        name: String,
        /// Position in listings.
        #[arg(short, long)]
        sort_order: Option<i32>,
    },
    /// Delete a category.
    Delete {
        /// Category ID.
        id: i64,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Reorder categories. The first ID is shown first.
    Sort {
        /// Category IDs in the new order.
        #[arg(required = true)]
        ids: Vec<i64>,
    },
}

/// Arguments for the specs command.
#[derive(Args)]
pub struct SpecsArgs {
    #[command(subcommand)]
    pub command: SpecsCommand,
}

#[derive(Subcommand)]
pub enum SpecsCommand {
    /// List the specifications of a product.
    List {
        /// Product ID.
        product_id: i64,
    },
    /// Show one specification.
    Show {
        /// Specification ID.
        id: i64,
    },
    /// Create a specification.
    Add {
        /// Product ID.
        product_id: i64,
        /// Specification name.
        name: String,
        /// Attribute as `key=value`, repeatable.
        #[arg(short, long, value_parser = parse_key_value)]
        attr: Vec<(String, String)>,
        /// Units in stock.
        #[arg(short, long)]
        stock: Option<i32>,
    },
    /// Delete a specification.
    Delete {
        /// Specification ID.
        id: i64,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the orders command.
#[derive(Args)]
pub struct OrdersArgs {
    #[command(subcommand)]
    pub command: OrdersCommand,
}

#[derive(Subcommand)]
pub enum OrdersCommand {
    /// List orders, newest first.
    List {
        /// Page number (1-indexed).
        #[arg(short, long, default_value = "1")]
        page: u32,
        /// Page size.
        #[arg(short, long, default_value = "10")]
        size: u32,
        /// First day to include (yyyy-mm-dd).
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last day to include (yyyy-mm-dd).
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Show an order by ID.
    Show {
        /// Order ID.
        id: i64,
    },
    /// Find an order by its order number.
    Find {
        /// Order number.
        number: String,
    },
    /// Delete an order.
    Delete {
        /// Order ID.
        id: i64,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the stats command.
#[derive(Args)]
pub struct StatsArgs {
    #[command(subcommand)]
    pub command: StatsCommand,
}

#[derive(Subcommand)]
pub enum StatsCommand {
    /// Revenue series around a date.
    Revenue {
        /// Reference date (default: today).
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Bucket size: hour, day or month.
        #[arg(short, long, default_value = "hour")]
        mode: RevenueMode,
    },
    /// Total revenue for one day.
    Day {
        /// Day (default: today).
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Best-selling products.
    Hot {
        /// First day to include (default: today).
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last day to include (default: today).
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Number of products.
        #[arg(short, long, default_value = "10")]
        limit: u32,
    },
}

/// Arguments for the upload command.
#[derive(Args)]
pub struct UploadArgs {
    /// Image file to upload.
    pub file: PathBuf,
}

/// Arguments for the route command.
#[derive(Args)]
pub struct RouteArgs {
    /// URL path, e.g. `/goods/42`. Lists the route table when omitted.
    pub path: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_key_value(s: &str) -> Result<(String, String)> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => bail!("expected key=value, got '{}'", s),
    }
}

/// Ask before a destructive action. Skipped with `--yes` or in JSON mode.
fn confirm(ctx: &Context, prompt: &str, yes: bool) -> Result<bool> {
    if yes || ctx.output.is_json() {
        return Ok(true);
    }
    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    if !confirmed {
        ctx.output.warn("Cancelled");
    }
    Ok(confirmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("weight = 500g").unwrap(),
            ("weight".to_string(), "500g".to_string())
        );
        assert_eq!(
            parse_key_value("note=a=b").unwrap(),
            ("note".to_string(), "a=b".to_string())
        );
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=x").is_err());
    }
}
