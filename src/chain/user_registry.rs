//! Typed wrapper over the user registry contract surface.

use std::sync::Arc;

use crate::chain::value::{check_parallel, Tuple, Value};
use crate::chain::ContractReader;
use crate::domain::{Address, Role, RoleProfile, RoleStats, UserRecord};
use crate::errors::AppResult;

/// Read functions exposed by the user registry contract.
mod functions {
    pub const GET_USER_ROLE: &str = "getUserRole";
    pub const GET_ALL_USERS_WITH_DETAILS: &str = "getAllUsersWithDetails";
    pub const GET_USER_STATS: &str = "getUserStats";
}

/// Strictly-typed reads against the user registry. Errors propagate;
/// degradation to defaults happens one layer up in the services.
#[derive(Clone)]
pub struct UserRegistry {
    reader: Arc<dyn ContractReader>,
    address: Address,
}

impl UserRegistry {
    pub fn new(reader: Arc<dyn ContractReader>, address: Address) -> Self {
        Self { reader, address }
    }

    /// `getUserRole(address) -> (role, displayName, registeredAt)`
    ///
    /// An address without a registry entry decodes as the contract's zero
    /// tuple (role 0, empty name), not as an error.
    pub async fn user_role(&self, user: &Address) -> AppResult<RoleProfile> {
        let result = self
            .reader
            .read(
                &self.address,
                functions::GET_USER_ROLE,
                vec![Value::Address(user.clone())],
            )
            .await?;

        let mut tuple = Tuple::new(functions::GET_USER_ROLE, result);
        let role = Role::from_code(tuple.uint()?);
        let display_name = tuple.string()?;
        let registered_at = tuple.uint()?;
        tuple.finish()?;

        Ok(RoleProfile {
            role,
            display_name,
            registered_at,
        })
    }

    /// `getAllUsersWithDetails() -> (addresses[], roles[], displayNames[],
    /// registeredAts[], registeredBys[])`
    ///
    /// The five parallel arrays are zipped positionally into records;
    /// their lengths are verified before zipping.
    pub async fn all_users(&self) -> AppResult<Vec<UserRecord>> {
        let result = self
            .reader
            .read(&self.address, functions::GET_ALL_USERS_WITH_DETAILS, vec![])
            .await?;

        let mut tuple = Tuple::new(functions::GET_ALL_USERS_WITH_DETAILS, result);
        let addresses = tuple.addresses()?;
        let roles = tuple.uints()?;
        let display_names = tuple.strings()?;
        let registered_ats = tuple.uints()?;
        let registered_bys = tuple.addresses()?;
        tuple.finish()?;

        check_parallel(
            functions::GET_ALL_USERS_WITH_DETAILS,
            &[
                ("addresses", addresses.len()),
                ("roles", roles.len()),
                ("displayNames", display_names.len()),
                ("registeredAts", registered_ats.len()),
                ("registeredBys", registered_bys.len()),
            ],
        )?;

        let users = addresses
            .into_iter()
            .zip(roles)
            .zip(display_names)
            .zip(registered_ats)
            .zip(registered_bys)
            .map(
                |((((address, role), display_name), registered_at), registered_by)| UserRecord {
                    address,
                    role: Role::from_code(role),
                    display_name,
                    registered_at,
                    registered_by,
                },
            )
            .collect();

        Ok(users)
    }

    /// `getUserStats() -> (managers, sellers, suppliers)`
    pub async fn stats(&self) -> AppResult<RoleStats> {
        let result = self
            .reader
            .read(&self.address, functions::GET_USER_STATS, vec![])
            .await?;

        let mut tuple = Tuple::new(functions::GET_USER_STATS, result);
        let managers = tuple.uint()?;
        let sellers = tuple.uint()?;
        let suppliers = tuple.uint()?;
        tuple.finish()?;

        Ok(RoleStats {
            managers,
            sellers,
            suppliers,
        })
    }
}
