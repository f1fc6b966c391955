//! ShopFront CLI - browse the catalog, manage the cart and run the shop.
//!
//! Commands:
//! - `shop cart` - Show and edit the persisted cart, place orders
//! - `shop products` - Browse and manage products
//! - `shop categories` - Browse and manage categories
//! - `shop specs` - Manage product specifications
//! - `shop orders` - Look up and delete orders
//! - `shop stats` - Revenue and best sellers
//! - `shop upload` - Upload a product image
//! - `shop route` - Resolve a storefront path to its view
//! - `shop config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    CartArgs, CategoriesArgs, ConfigArgs, OrdersArgs, ProductsArgs, RouteArgs, SpecsArgs,
    StatsArgs, UploadArgs,
};

/// ShopFront CLI - storefront and admin console in the terminal
#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show and edit the cart, or check out
    Cart(CartArgs),

    /// Browse and manage products
    Products(ProductsArgs),

    /// Browse and manage categories
    Categories(CategoriesArgs),

    /// Manage product specifications
    Specs(SpecsArgs),

    /// Look up and manage orders
    Orders(OrdersArgs),

    /// Revenue and best-seller statistics
    Stats(StatsArgs),

    /// Upload a product image
    Upload(UploadArgs),

    /// Resolve a storefront path
    Route(RouteArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Categories(args) => commands::categories::run(args, &ctx).await,
        Commands::Specs(args) => commands::specs::run(args, &ctx).await,
        Commands::Orders(args) => commands::orders::run(args, &ctx).await,
        Commands::Stats(args) => commands::stats::run(args, &ctx).await,
        Commands::Upload(args) => commands::upload::run(args, &ctx).await,
        Commands::Route(args) => commands::route::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
