//! Chain layer - the contract-read primitive and typed registry surfaces.
//!
//! This is the strict half of the crate: reads return `AppResult` and
//! every tuple is validated at the decode boundary. The services layer
//! above decides what degrades to a default.

pub mod fixture;
pub mod reader;
pub mod supply_chain;
pub mod user_registry;
pub mod value;

pub use fixture::{FixtureReader, Snapshot};
pub use reader::ContractReader;
pub use supply_chain::SupplyChainRegistry;
pub use user_registry::UserRegistry;
pub use value::{check_parallel, Tuple, Value};

#[cfg(any(test, feature = "test-utils"))]
pub use reader::MockContractReader;
