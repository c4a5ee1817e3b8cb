//! User registry view models and role enumeration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{
    LABEL_MANAGER, LABEL_SELLER, LABEL_SUPPLIER, LABEL_UNREGISTERED, UNREGISTERED_DISPLAY_NAME,
};
use crate::domain::Address;

/// Registry role of an address.
///
/// Codes mirror the user-registry contract enumeration. Any code outside
/// the known range maps to `Unregistered` — a fixed lookup, so these four
/// are the only values a decoded role can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Unregistered,
    Manager,
    Seller,
    Supplier,
}

impl Role {
    /// Map a raw contract role code to a role.
    pub fn from_code(code: u64) -> Self {
        match code {
            1 => Role::Manager,
            2 => Role::Seller,
            3 => Role::Supplier,
            _ => Role::Unregistered,
        }
    }

    /// The contract-side code for this role.
    pub fn code(&self) -> u64 {
        match self {
            Role::Unregistered => 0,
            Role::Manager => 1,
            Role::Seller => 2,
            Role::Supplier => 3,
        }
    }

    /// Human-readable label used in dashboards.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Unregistered => LABEL_UNREGISTERED,
            Role::Manager => LABEL_MANAGER,
            Role::Seller => LABEL_SELLER,
            Role::Supplier => LABEL_SUPPLIER,
        }
    }

    pub fn is_registered(&self) -> bool {
        !matches!(self, Role::Unregistered)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a single role lookup for an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleProfile {
    pub role: Role,
    pub display_name: String,
    /// Registration time in epoch seconds; 0 when unregistered.
    pub registered_at: u64,
}

impl RoleProfile {
    /// Sentinel returned when an address has no registry entry or the
    /// lookup fails.
    pub fn unregistered() -> Self {
        Self {
            role: Role::Unregistered,
            display_name: UNREGISTERED_DISPLAY_NAME.to_string(),
            registered_at: 0,
        }
    }
}

/// A fully-detailed user registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub address: Address,
    pub role: Role,
    pub display_name: String,
    /// Registration time in epoch seconds.
    pub registered_at: u64,
    /// Address of the manager that performed the registration.
    pub registered_by: Address,
}

impl UserRecord {
    /// Registration time as a UTC timestamp, when representable.
    pub fn registered_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(i64::try_from(self.registered_at).ok()?, 0)
    }
}

/// Per-role registration counts.
///
/// The total is derived, never stored, so it always equals the sum of
/// the three named roles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RoleStats {
    pub managers: u64,
    pub sellers: u64,
    pub suppliers: u64,
}

impl RoleStats {
    pub fn total(&self) -> u64 {
        self.managers + self.sellers + self.suppliers
    }
}
