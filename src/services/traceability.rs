//! Traceability service - the consumer-facing product trace.

use std::sync::Arc;

use async_trait::async_trait;

use crate::chain::SupplyChainRegistry;
use crate::domain::ProductTrace;
use crate::services::DirectoryService;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product trace composition for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TraceabilityService: Send + Sync {
    /// The full trace for a product: the contract's traceability view
    /// plus supplier display names resolved concurrently through the
    /// directory. `None` when the underlying read fails for any reason.
    async fn product_trace(&self, product_id: u64) -> Option<ProductTrace>;
}

/// Concrete traceability composer.
pub struct Traceability {
    registry: SupplyChainRegistry,
    directory: Arc<dyn DirectoryService>,
}

impl Traceability {
    pub fn new(registry: SupplyChainRegistry, directory: Arc<dyn DirectoryService>) -> Self {
        Self {
            registry,
            directory,
        }
    }
}

#[async_trait]
impl TraceabilityService for Traceability {
    async fn product_trace(&self, product_id: u64) -> Option<ProductTrace> {
        let trace = match self.registry.traceability(product_id).await {
            Ok(trace) => trace,
            Err(e) if e.is_not_found() => {
                tracing::debug!(product_id, "no product with this id");
                return None;
            }
            Err(e) => {
                tracing::warn!(product_id, error = %e, "traceability read failed");
                return None;
            }
        };

        // Name resolution is per-record infallible: a failed lookup
        // falls back to the truncated address inside display_name.
        let lookups = trace
            .suppliers
            .iter()
            .map(|supplier| self.directory.display_name(supplier));
        let supplier_names = futures::future::join_all(lookups).await;

        Some(ProductTrace {
            supplier_names,
            ..trace
        })
    }
}
