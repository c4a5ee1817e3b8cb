//! Typed wrapper over the supply-chain registry contract surface.

use std::sync::Arc;

use crate::chain::value::{check_parallel, Tuple, Value};
use crate::chain::ContractReader;
use crate::domain::{
    Address, ApprovalResponse, IngredientRecord, ProductRecord, ProductStatus, ProductTrace,
};
use crate::errors::{AppError, AppResult};

/// Read functions exposed by the supply-chain registry contract.
mod functions {
    pub const GET_ALL_AVAILABLE_INGREDIENTS: &str = "getAllAvailableIngredients";
    pub const GET_ALL_PRODUCTS: &str = "getAllProducts";
    pub const GET_PRODUCT: &str = "getProduct";
    pub const GET_PRODUCT_TRACEABILITY: &str = "getProductTraceability";
    pub const APPROVALS: &str = "approvals";
}

/// Strictly-typed reads against the supply-chain registry. Errors
/// propagate; degradation to defaults happens one layer up.
#[derive(Clone)]
pub struct SupplyChainRegistry {
    reader: Arc<dyn ContractReader>,
    address: Address,
}

impl SupplyChainRegistry {
    pub fn new(reader: Arc<dyn ContractReader>, address: Address) -> Self {
        Self { reader, address }
    }

    /// `getAllAvailableIngredients() -> (ids[], names[], categories[],
    /// supplierAddresses[])`, zipped with length verification.
    /// Supplier names are left unresolved here.
    pub async fn available_ingredients(&self) -> AppResult<Vec<IngredientRecord>> {
        let result = self
            .reader
            .read(
                &self.address,
                functions::GET_ALL_AVAILABLE_INGREDIENTS,
                vec![],
            )
            .await?;

        let mut tuple = Tuple::new(functions::GET_ALL_AVAILABLE_INGREDIENTS, result);
        let ids = tuple.uints()?;
        let names = tuple.strings()?;
        let categories = tuple.strings()?;
        let suppliers = tuple.addresses()?;
        tuple.finish()?;

        check_parallel(
            functions::GET_ALL_AVAILABLE_INGREDIENTS,
            &[
                ("ids", ids.len()),
                ("names", names.len()),
                ("categories", categories.len()),
                ("supplierAddresses", suppliers.len()),
            ],
        )?;

        let ingredients = ids
            .into_iter()
            .zip(names)
            .zip(categories)
            .zip(suppliers)
            .map(|(((id, name), category), supplier)| IngredientRecord {
                id,
                name,
                category,
                supplier,
                supplier_name: None,
            })
            .collect();

        Ok(ingredients)
    }

    /// `getAllProducts() -> ids[]`
    pub async fn product_ids(&self) -> AppResult<Vec<u64>> {
        let result = self
            .reader
            .read(&self.address, functions::GET_ALL_PRODUCTS, vec![])
            .await?;

        let mut tuple = Tuple::new(functions::GET_ALL_PRODUCTS, result);
        let ids = tuple.uints()?;
        tuple.finish()?;
        Ok(ids)
    }

    /// `getProduct(id) -> (name, batchId, ingredientIds[], suppliers[],
    /// approved, total, status, createdAt, approvedAt)`
    ///
    /// The `approved <= total` contract invariant is re-checked at the
    /// decode boundary.
    pub async fn product(&self, id: u64) -> AppResult<ProductRecord> {
        let result = self
            .reader
            .read(&self.address, functions::GET_PRODUCT, vec![Value::Uint(id)])
            .await?;

        let mut tuple = Tuple::new(functions::GET_PRODUCT, result);
        let name = tuple.string()?;
        let batch_id = tuple.string()?;
        let ingredient_ids = tuple.uints()?;
        let suppliers = tuple.addresses()?;
        let approved = tuple.uint()?;
        let total = tuple.uint()?;
        let status = ProductStatus::from_code(tuple.uint()?);
        let created_at = tuple.uint()?;
        let approved_at = tuple.uint()?;
        tuple.finish()?;

        if approved > total {
            return Err(AppError::decode(
                functions::GET_PRODUCT,
                format!("approved count {} exceeds total {}", approved, total),
            ));
        }

        Ok(ProductRecord {
            id,
            name,
            batch_id,
            ingredient_ids,
            suppliers,
            approved,
            total,
            status,
            created_at,
            approved_at,
        })
    }

    /// `getProductTraceability(id) -> (productName, batchId,
    /// ingredientNames[], ingredientCategories[], supplierAddresses[],
    /// createdAt, approvedAt, status)`
    ///
    /// Supplier display names are not part of the contract result; the
    /// traceability service resolves them and fills `supplier_names`.
    pub async fn traceability(&self, id: u64) -> AppResult<ProductTrace> {
        let result = self
            .reader
            .read(
                &self.address,
                functions::GET_PRODUCT_TRACEABILITY,
                vec![Value::Uint(id)],
            )
            .await?;

        let mut tuple = Tuple::new(functions::GET_PRODUCT_TRACEABILITY, result);
        let product_name = tuple.string()?;
        let batch_id = tuple.string()?;
        let ingredient_names = tuple.strings()?;
        let ingredient_categories = tuple.strings()?;
        let suppliers = tuple.addresses()?;
        let created_at = tuple.uint()?;
        let approved_at = tuple.uint()?;
        let status = ProductStatus::from_code(tuple.uint()?);
        tuple.finish()?;

        check_parallel(
            functions::GET_PRODUCT_TRACEABILITY,
            &[
                ("ingredientNames", ingredient_names.len()),
                ("ingredientCategories", ingredient_categories.len()),
            ],
        )?;

        Ok(ProductTrace {
            product_name,
            batch_id,
            ingredient_names,
            ingredient_categories,
            suppliers,
            supplier_names: Vec::new(),
            created_at,
            approved_at,
            status,
        })
    }

    /// `approvals(productId, supplierAddress) -> uint8`
    pub async fn approval(
        &self,
        product_id: u64,
        supplier: &Address,
    ) -> AppResult<ApprovalResponse> {
        let result = self
            .reader
            .read(
                &self.address,
                functions::APPROVALS,
                vec![Value::Uint(product_id), Value::Address(supplier.clone())],
            )
            .await?;

        let mut tuple = Tuple::new(functions::APPROVALS, result);
        let code = tuple.uint()?;
        tuple.finish()?;
        Ok(ApprovalResponse::from_code(code))
    }
}
