//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `users` - User registry queries
//! - `ingredients` - Ingredient listings
//! - `products` - Product listings, approvals, and traces
//! - `session` - Wallet session lifecycle

pub mod args;

pub use args::{Cli, Commands};
