//! Application services layer - the contract data aggregator.
//!
//! Services compose strict chain-layer reads into UI-ready view models.
//! They hold no state between calls and never cache: every invocation
//! re-reads the external source. All failures degrade to empty/default
//! view models here; nothing a service returns is an error.

mod catalog;
pub mod container;
mod directory;
pub mod parallel;
mod traceability;

// Service container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use catalog::{Catalog, CatalogService};
pub use directory::{Directory, DirectoryService};
pub use traceability::{Traceability, TraceabilityService};

#[cfg(any(test, feature = "test-utils"))]
pub use catalog::MockCatalogService;
#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
#[cfg(any(test, feature = "test-utils"))]
pub use directory::MockDirectoryService;
#[cfg(any(test, feature = "test-utils"))]
pub use traceability::MockTraceabilityService;
