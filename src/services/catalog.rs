//! Catalog service - ingredient and product aggregations.
//!
//! Lenient like the directory: chain failures degrade to empty lists or
//! `false`, logged but never propagated. Per-product detail fetches fan
//! out concurrently with a configurable cap; supplier-name enrichment
//! resolves each name concurrently with a per-record fallback, so one
//! failed lookup never sinks the batch.

use std::sync::Arc;

use async_trait::async_trait;

use crate::chain::SupplyChainRegistry;
use crate::domain::{Address, IngredientRecord, ProductRecord, ProductStatus};
use crate::services::{parallel, DirectoryService};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Supply-chain catalog operations for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// All available ingredients, supplier names unresolved. Empty on
    /// failure.
    async fn list_ingredients(&self) -> Vec<IngredientRecord>;

    /// All available ingredients with supplier display names attached,
    /// one concurrent directory lookup per ingredient.
    async fn list_ingredients_with_suppliers(&self) -> Vec<IngredientRecord>;

    /// All products: id listing first, then per-id details fetched
    /// concurrently, input order preserved. Empty on failure.
    async fn list_products(&self) -> Vec<ProductRecord>;

    /// Products with status Approved, for consumer dashboards.
    async fn approved_products(&self) -> Vec<ProductRecord>;

    /// Products still open (Created or Pending) that name the given
    /// supplier in their approval set. Whether this supplier has already
    /// responded is a separate check, see [`supplier_responded`].
    ///
    /// [`supplier_responded`]: CatalogService::supplier_responded
    async fn pending_approval_for(&self, supplier: &Address) -> Vec<ProductRecord>;

    /// Whether the supplier has recorded any response (approve or
    /// reject) for the product. False on failure.
    async fn supplier_responded(&self, product_id: u64, supplier: &Address) -> bool;
}

/// Concrete catalog over the supply-chain registry, with the directory
/// injected for supplier-name resolution.
pub struct Catalog {
    registry: SupplyChainRegistry,
    directory: Arc<dyn DirectoryService>,
    fetch_limit: usize,
}

impl Catalog {
    pub fn new(
        registry: SupplyChainRegistry,
        directory: Arc<dyn DirectoryService>,
        fetch_limit: usize,
    ) -> Self {
        Self {
            registry,
            directory,
            fetch_limit,
        }
    }
}

#[async_trait]
impl CatalogService for Catalog {
    async fn list_ingredients(&self) -> Vec<IngredientRecord> {
        match self.registry.available_ingredients().await {
            Ok(ingredients) => ingredients,
            Err(e) => {
                tracing::warn!(error = %e, "ingredient listing failed, returning empty");
                Vec::new()
            }
        }
    }

    async fn list_ingredients_with_suppliers(&self) -> Vec<IngredientRecord> {
        let ingredients = self.list_ingredients().await;

        let enriched = ingredients.into_iter().map(|ingredient| async move {
            let supplier_name = self.directory.display_name(&ingredient.supplier).await;
            IngredientRecord {
                supplier_name: Some(supplier_name),
                ..ingredient
            }
        });
        futures::future::join_all(enriched).await
    }

    async fn list_products(&self) -> Vec<ProductRecord> {
        let ids = match self.registry.product_ids().await {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!(error = %e, "product id listing failed, returning empty");
                return Vec::new();
            }
        };
        if ids.is_empty() {
            return Vec::new();
        }

        let details = ids.into_iter().map(|id| self.registry.product(id));
        match parallel::join_all_limited(details, self.fetch_limit).await {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!(error = %e, "product detail fetch failed, returning empty");
                Vec::new()
            }
        }
    }

    async fn approved_products(&self) -> Vec<ProductRecord> {
        self.list_products()
            .await
            .into_iter()
            .filter(|p| p.status == ProductStatus::Approved)
            .collect()
    }

    async fn pending_approval_for(&self, supplier: &Address) -> Vec<ProductRecord> {
        self.list_products()
            .await
            .into_iter()
            .filter(|p| p.involves_supplier(supplier) && p.awaiting_approval())
            .collect()
    }

    async fn supplier_responded(&self, product_id: u64, supplier: &Address) -> bool {
        match self.registry.approval(product_id, supplier).await {
            Ok(response) => response.has_responded(),
            Err(e) => {
                tracing::warn!(
                    product_id,
                    supplier = %supplier,
                    error = %e,
                    "approval read failed, treating as no response"
                );
                false
            }
        }
    }
}
