//! Ingredient registry view model.

use serde::Serialize;

use crate::domain::Address;

/// An available ingredient as registered in the supply-chain contract.
///
/// The id is assigned by the registry and immutable once created.
/// `supplier_name` is only populated by the enriched listing, which
/// resolves the supplier address through the user registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientRecord {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub supplier: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
}
