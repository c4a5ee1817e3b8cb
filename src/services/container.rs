//! Service container - centralized aggregator wiring.

use std::sync::Arc;

use crate::chain::{ContractReader, SupplyChainRegistry, UserRegistry};
use crate::config::Config;
use crate::services::{
    Catalog, CatalogService, Directory, DirectoryService, Traceability, TraceabilityService,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to the aggregator services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get the user directory service
    fn directory(&self) -> Arc<dyn DirectoryService>;

    /// Get the supply-chain catalog service
    fn catalog(&self) -> Arc<dyn CatalogService>;

    /// Get the traceability service
    fn traceability(&self) -> Arc<dyn TraceabilityService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    directory: Arc<dyn DirectoryService>,
    catalog: Arc<dyn CatalogService>,
    traceability: Arc<dyn TraceabilityService>,
}

impl Services {
    /// Create a new service container from already-built services
    pub fn new(
        directory: Arc<dyn DirectoryService>,
        catalog: Arc<dyn CatalogService>,
        traceability: Arc<dyn TraceabilityService>,
    ) -> Self {
        Self {
            directory,
            catalog,
            traceability,
        }
    }

    /// Wire the full aggregator from a contract reader and configuration.
    ///
    /// Both registries share the one reader; the catalog and the
    /// traceability composer share the directory for name resolution.
    pub fn from_reader(reader: Arc<dyn ContractReader>, config: &Config) -> Self {
        let users = UserRegistry::new(reader.clone(), config.user_registry_address.clone());
        let supply = SupplyChainRegistry::new(reader, config.supply_chain_address.clone());

        let directory: Arc<dyn DirectoryService> = Arc::new(Directory::new(users));
        let catalog = Arc::new(Catalog::new(
            supply.clone(),
            directory.clone(),
            config.max_concurrent_reads,
        ));
        let traceability = Arc::new(Traceability::new(supply, directory.clone()));

        Self {
            directory,
            catalog,
            traceability,
        }
    }
}

impl ServiceContainer for Services {
    fn directory(&self) -> Arc<dyn DirectoryService> {
        self.directory.clone()
    }

    fn catalog(&self) -> Arc<dyn CatalogService> {
        self.catalog.clone()
    }

    fn traceability(&self) -> Arc<dyn TraceabilityService> {
        self.traceability.clone()
    }
}
