//! foodtrace - read-side aggregation for an on-chain food-traceability
//! system.
//!
//! The crate turns raw, positionally-typed read results from two smart
//! contracts (a user registry and a supply-chain registry) into named,
//! validated view-model records, and composes multiple reads into
//! dashboard-ready aggregates.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: View-model records projected from on-chain state
//! - **chain**: The contract-read primitive, decode boundary, and typed
//!   registry surfaces (strict errors)
//! - **services**: The aggregator - lenient composition into view models
//! - **session**: Wallet session with an explicit lifecycle
//! - **errors**: Centralized error handling
//!
//! The split matters: the chain layer distinguishes "not found" from
//! transient failures and decode violations, while the services layer
//! deliberately collapses all of them into safe defaults so dashboards
//! degrade instead of erroring.

pub mod chain;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod session;

// Re-export commonly used types at crate root
pub use chain::{ContractReader, FixtureReader};
pub use config::Config;
pub use domain::{Address, IngredientRecord, ProductRecord, ProductTrace, Role, UserRecord};
pub use errors::{AppError, AppResult};
pub use services::{ServiceContainer, Services};
pub use session::{Session, SessionManager};
