//! Snapshot-backed contract reader.
//!
//! Serves the eight contract read functions from a JSON snapshot of
//! registry state, with the same result shapes and mapping-default
//! semantics as the deployed contracts: an unknown address decodes to
//! the zero role tuple, an unknown approval key to 0, while an unknown
//! product id fails the read. Backs the CLI and scenario tests; the
//! wallet/provider-backed reader lives outside this crate.

use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

use crate::chain::value::{Tuple, Value};
use crate::chain::ContractReader;
use crate::domain::Address;
use crate::errors::{AppError, AppResult, OptionExt};

/// One user registry entry.
#[derive(Debug, Clone, Deserialize)]
pub struct UserFixture {
    pub address: Address,
    pub role: u64,
    pub display_name: String,
    pub registered_at: u64,
    pub registered_by: Address,
}

/// One available ingredient.
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientFixture {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub supplier: Address,
}

/// One registered product.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductFixture {
    pub id: u64,
    pub name: String,
    pub batch_id: String,
    pub ingredient_ids: Vec<u64>,
    pub suppliers: Vec<Address>,
    pub approved: u64,
    pub total: u64,
    pub status: u64,
    pub created_at: u64,
    #[serde(default)]
    pub approved_at: u64,
}

/// One recorded supplier response (absent pairs read as 0).
#[derive(Debug, Clone, Deserialize)]
pub struct ApprovalFixture {
    pub product_id: u64,
    pub supplier: Address,
    pub response: u64,
}

/// Deserialized registry state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub users: Vec<UserFixture>,
    #[serde(default)]
    pub ingredients: Vec<IngredientFixture>,
    #[serde(default)]
    pub products: Vec<ProductFixture>,
    #[serde(default)]
    pub approvals: Vec<ApprovalFixture>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// A `ContractReader` answering from an in-memory snapshot.
pub struct FixtureReader {
    user_registry: Address,
    supply_chain: Address,
    snapshot: Snapshot,
}

impl FixtureReader {
    pub fn new(user_registry: Address, supply_chain: Address, snapshot: Snapshot) -> Self {
        Self {
            user_registry,
            supply_chain,
            snapshot,
        }
    }

    pub fn from_path(
        path: &Path,
        user_registry: Address,
        supply_chain: Address,
    ) -> AppResult<Self> {
        let snapshot = Snapshot::from_path(path)?;
        Ok(Self::new(user_registry, supply_chain, snapshot))
    }

    fn user_registry_call(&self, function: &str, args: Vec<Value>) -> AppResult<Vec<Value>> {
        match function {
            "getUserRole" => {
                let mut args = Tuple::new(function, args);
                let user = args.address()?;
                args.finish()?;

                // Mapping semantics: unknown addresses yield the zero tuple.
                let result = match self.snapshot.users.iter().find(|u| u.address == user) {
                    Some(u) => vec![
                        Value::Uint(u.role),
                        Value::Str(u.display_name.clone()),
                        Value::Uint(u.registered_at),
                    ],
                    None => vec![Value::Uint(0), Value::Str(String::new()), Value::Uint(0)],
                };
                Ok(result)
            }
            "getAllUsersWithDetails" => {
                let users = &self.snapshot.users;
                Ok(vec![
                    Value::AddressArray(users.iter().map(|u| u.address.clone()).collect()),
                    Value::UintArray(users.iter().map(|u| u.role).collect()),
                    Value::StrArray(users.iter().map(|u| u.display_name.clone()).collect()),
                    Value::UintArray(users.iter().map(|u| u.registered_at).collect()),
                    Value::AddressArray(users.iter().map(|u| u.registered_by.clone()).collect()),
                ])
            }
            "getUserStats" => {
                let count = |code: u64| {
                    self.snapshot.users.iter().filter(|u| u.role == code).count() as u64
                };
                Ok(vec![
                    Value::Uint(count(1)),
                    Value::Uint(count(2)),
                    Value::Uint(count(3)),
                ])
            }
            other => Err(AppError::read(format!(
                "user registry has no function {}",
                other
            ))),
        }
    }

    fn supply_chain_call(&self, function: &str, args: Vec<Value>) -> AppResult<Vec<Value>> {
        match function {
            "getAllAvailableIngredients" => {
                let ingredients = &self.snapshot.ingredients;
                Ok(vec![
                    Value::UintArray(ingredients.iter().map(|i| i.id).collect()),
                    Value::StrArray(ingredients.iter().map(|i| i.name.clone()).collect()),
                    Value::StrArray(ingredients.iter().map(|i| i.category.clone()).collect()),
                    Value::AddressArray(ingredients.iter().map(|i| i.supplier.clone()).collect()),
                ])
            }
            "getAllProducts" => Ok(vec![Value::UintArray(
                self.snapshot.products.iter().map(|p| p.id).collect(),
            )]),
            "getProduct" => {
                let mut args = Tuple::new(function, args);
                let id = args.uint()?;
                args.finish()?;

                let p = self.product(id)?;
                Ok(vec![
                    Value::Str(p.name.clone()),
                    Value::Str(p.batch_id.clone()),
                    Value::UintArray(p.ingredient_ids.clone()),
                    Value::AddressArray(p.suppliers.clone()),
                    Value::Uint(p.approved),
                    Value::Uint(p.total),
                    Value::Uint(p.status),
                    Value::Uint(p.created_at),
                    Value::Uint(p.approved_at),
                ])
            }
            "getProductTraceability" => {
                let mut args = Tuple::new(function, args);
                let id = args.uint()?;
                args.finish()?;

                let p = self.product(id)?;
                let mut names = Vec::with_capacity(p.ingredient_ids.len());
                let mut categories = Vec::with_capacity(p.ingredient_ids.len());
                for ingredient_id in &p.ingredient_ids {
                    let ingredient = self
                        .snapshot
                        .ingredients
                        .iter()
                        .find(|i| i.id == *ingredient_id)
                        .ok_or_else(|| {
                            AppError::internal(format!(
                                "snapshot product {} references unknown ingredient {}",
                                id, ingredient_id
                            ))
                        })?;
                    names.push(ingredient.name.clone());
                    categories.push(ingredient.category.clone());
                }

                Ok(vec![
                    Value::Str(p.name.clone()),
                    Value::Str(p.batch_id.clone()),
                    Value::StrArray(names),
                    Value::StrArray(categories),
                    Value::AddressArray(p.suppliers.clone()),
                    Value::Uint(p.created_at),
                    Value::Uint(p.approved_at),
                    Value::Uint(p.status),
                ])
            }
            "approvals" => {
                let mut args = Tuple::new(function, args);
                let product_id = args.uint()?;
                let supplier = args.address()?;
                args.finish()?;

                // Mapping semantics: absent pairs read as 0.
                let response = self
                    .snapshot
                    .approvals
                    .iter()
                    .find(|a| a.product_id == product_id && a.supplier == supplier)
                    .map(|a| a.response)
                    .unwrap_or(0);
                Ok(vec![Value::Uint(response)])
            }
            other => Err(AppError::read(format!(
                "supply-chain registry has no function {}",
                other
            ))),
        }
    }

    fn product(&self, id: u64) -> AppResult<&ProductFixture> {
        self.snapshot.products.iter().find(|p| p.id == id).ok_or_not_found()
    }
}

#[async_trait]
impl ContractReader for FixtureReader {
    async fn read(
        &self,
        contract: &Address,
        function: &str,
        args: Vec<Value>,
    ) -> AppResult<Vec<Value>> {
        if *contract == self.user_registry {
            self.user_registry_call(function, args)
        } else if *contract == self.supply_chain {
            self.supply_chain_call(function, args)
        } else {
            Err(AppError::read(format!(
                "no contract deployed at {}",
                contract
            )))
        }
    }
}
