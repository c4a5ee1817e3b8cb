//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// foodtrace - read-side explorer for the on-chain food registries
#[derive(Parser, Debug)]
#[command(name = "foodtrace")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Registry snapshot served by the fixture reader
    #[arg(short, long, global = true, env = "SNAPSHOT_PATH")]
    pub snapshot: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query the user registry
    Users(UsersArgs),

    /// List available ingredients
    Ingredients(IngredientsArgs),

    /// Query the product registry
    Products(ProductsArgs),

    /// Manage the wallet session
    Session(SessionArgs),
}

/// Arguments for the users command
#[derive(Parser, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub action: UsersAction,
}

/// User registry queries
#[derive(Subcommand, Debug)]
pub enum UsersAction {
    /// List all registered users with details
    List,
    /// Show per-role registration counts
    Stats,
    /// Resolve the role of a single address
    Role {
        /// Address to look up
        address: String,
    },
}

/// Arguments for the ingredients command
#[derive(Parser, Debug)]
pub struct IngredientsArgs {
    /// Resolve supplier display names (one extra lookup per ingredient)
    #[arg(long)]
    pub with_suppliers: bool,
}

/// Arguments for the products command
#[derive(Parser, Debug)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub action: ProductsAction,
}

/// Product registry queries
#[derive(Subcommand, Debug)]
pub enum ProductsAction {
    /// List all products
    List,
    /// List only approved products
    Approved,
    /// List products still awaiting this supplier's approval set
    Pending {
        /// Supplier address
        supplier: String,
    },
    /// Show the full trace for a product
    Trace {
        /// Product id
        id: u64,
    },
    /// Check whether a supplier has responded to a product
    Responded {
        /// Product id
        id: u64,
        /// Supplier address
        supplier: String,
    },
}

/// Arguments for the session command
#[derive(Parser, Debug)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub action: SessionAction,
}

/// Session lifecycle actions
#[derive(Subcommand, Debug)]
pub enum SessionAction {
    /// Connect a wallet address and persist the session
    Connect {
        /// Wallet address
        address: String,
    },
    /// Show the current session
    Status,
    /// Destroy the current session
    Disconnect,
}
