//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::constants::{
    DEFAULT_MAX_CONCURRENT_READS, DEFAULT_SESSION_PATH, DEFAULT_SNAPSHOT_PATH,
};
use crate::domain::Address;
use crate::errors::{AppError, AppResult};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Deployed address of the user registry contract
    pub user_registry_address: Address,
    /// Deployed address of the supply-chain registry contract
    pub supply_chain_address: Address,
    /// Registry snapshot consumed by the fixture reader
    pub snapshot_path: PathBuf,
    /// Location of the persisted wallet session
    pub session_path: PathBuf,
    /// Cap on concurrent per-product detail reads
    pub max_concurrent_reads: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Both contract addresses are required; everything else has a default.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let user_registry_address = required_address("USER_REGISTRY_ADDRESS")?;
        let supply_chain_address = required_address("SUPPLY_CHAIN_ADDRESS")?;

        Ok(Self {
            user_registry_address,
            supply_chain_address,
            snapshot_path: env::var("SNAPSHOT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SNAPSHOT_PATH)),
            session_path: env::var("SESSION_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_PATH)),
            max_concurrent_reads: env::var("MAX_CONCURRENT_READS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONCURRENT_READS),
        })
    }
}

/// Read a mandatory contract address from the environment.
fn required_address(key: &str) -> AppResult<Address> {
    let raw = env::var(key).map_err(|_| {
        AppError::config(format!("{} environment variable must be set", key))
    })?;
    raw.parse()
        .map_err(|_| AppError::config(format!("{} is not a valid contract address: {}", key, raw)))
}
