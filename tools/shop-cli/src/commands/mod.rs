//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod order;
pub mod orders;
pub mod products;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Use the bundled catalog instead of the backend.
    #[arg(long)]
    pub offline: bool,

    /// Only list products whose name or keywords match.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Write the catalog page to this file.
    #[arg(long)]
    pub html: Option<String>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart lines.
    Show,
    /// Add a product to the cart.
    Add {
        /// Product ID.
        product_id: String,

        /// Quantity to add.
        #[arg(short, long, default_value = "1")]
        quantity: String,
    },
    /// Remove a product from the cart.
    Remove {
        /// Product ID.
        product_id: String,
    },
    /// Choose a line's delivery option.
    Delivery {
        /// Product ID.
        product_id: String,

        /// Delivery option ID.
        delivery_option_id: String,
    },
    /// Replace the cart with the default cart.
    Reset {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Use the bundled catalog instead of the backend.
    #[arg(long)]
    pub offline: bool,

    /// Write the checkout page to this file.
    #[arg(long)]
    pub html: Option<String>,
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    #[command(subcommand)]
    pub command: OrderCommand,
}

#[derive(Subcommand)]
pub enum OrderCommand {
    /// Submit the cart as an order.
    Place {
        /// Use the bundled catalog instead of the backend.
        #[arg(long)]
        offline: bool,

        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the orders command.
#[derive(Args)]
pub struct OrdersArgs {
    /// Show only the last N orders.
    #[arg(short, long)]
    pub limit: Option<usize>,
}
