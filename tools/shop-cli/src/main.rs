//! Shop CLI - Command line storefront.
//!
//! Commands:
//! - `shop products` - List the product catalog
//! - `shop cart` - Show and edit the cart
//! - `shop checkout` - Review the order and payment summary
//! - `shop order place` - Submit the cart as an order
//! - `shop orders` - List placed orders

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, CheckoutArgs, OrderArgs, OrdersArgs, ProductsArgs};

/// Shop CLI - Browse the catalog, fill the cart and place orders
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
    /// List the product catalog
    Products(ProductsArgs),

    /// Show or edit the cart
    Cart(CartArgs),

    /// Review the order and payment summary
    Checkout(CheckoutArgs),

    /// Place orders
    Order(OrderArgs),

    /// List placed orders
    Orders(OrdersArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let mut log_config = ctx.config.logging.clone();
    if cli.verbose {
        log_config = log_config.verbose();
    }
    if let Err(e) = shopfront_observability::init(&log_config) {
        ctx.output.warn(&e.to_string());
    }
    tracing::debug!(
        cwd = %ctx.cwd.display(),
        base_url = %ctx.config.backend.base_url,
        "context loaded"
    );

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Order(args) => commands::order::run(args, &ctx).await,
        Commands::Orders(args) => commands::orders::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
