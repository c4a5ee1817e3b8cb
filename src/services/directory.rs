//! Directory service - user registry aggregations.
//!
//! The lenient face of the user registry: every operation catches chain
//! failures, logs them, and returns a safe default, so dashboards render
//! empty or sentinel state instead of an error. A caller here cannot
//! distinguish "genuinely unregistered" from "lookup failed"; the strict
//! distinction exists one layer down in [`UserRegistry`].

use async_trait::async_trait;

use crate::chain::UserRegistry;
use crate::config::UNKNOWN_USER_DISPLAY_NAME;
use crate::domain::{Address, RoleProfile, RoleStats, UserRecord};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User directory operations for dependency injection.
///
/// Stateless: every call re-reads the registry, so repeated calls over
/// an unchanged source yield identical results.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Resolve the role profile for an address. Returns the Unregistered
    /// sentinel on any failure, never an error.
    async fn resolve_role(&self, address: &Address) -> RoleProfile;

    /// All registered users with details. Empty on failure.
    async fn list_users(&self) -> Vec<UserRecord>;

    /// Per-role registration counts. Zeroed on failure.
    async fn stats(&self) -> RoleStats;

    /// Human-readable name for an address: the registered display name,
    /// or the truncated address form when unregistered or unreadable.
    async fn display_name(&self, address: &Address) -> String;
}

/// Concrete directory over the user registry contract.
pub struct Directory {
    registry: UserRegistry,
}

impl Directory {
    pub fn new(registry: UserRegistry) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl DirectoryService for Directory {
    async fn resolve_role(&self, address: &Address) -> RoleProfile {
        match self.registry.user_role(address).await {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(address = %address, error = %e, "role lookup failed, returning unregistered sentinel");
                RoleProfile::unregistered()
            }
        }
    }

    async fn list_users(&self) -> Vec<UserRecord> {
        match self.registry.all_users().await {
            Ok(users) => users,
            Err(e) => {
                tracing::warn!(error = %e, "user listing failed, returning empty");
                Vec::new()
            }
        }
    }

    async fn stats(&self) -> RoleStats {
        match self.registry.stats().await {
            Ok(stats) => stats,
            Err(e) => {
                tracing::warn!(error = %e, "user stats read failed, returning zeroes");
                RoleStats::default()
            }
        }
    }

    async fn display_name(&self, address: &Address) -> String {
        match self.registry.user_role(address).await {
            Ok(profile) if profile.role.is_registered() => {
                if profile.display_name.is_empty() {
                    UNKNOWN_USER_DISPLAY_NAME.to_string()
                } else {
                    profile.display_name
                }
            }
            Ok(_) => address.short(),
            Err(e) => {
                tracing::warn!(address = %address, error = %e, "name resolution failed, falling back to short address");
                address.short()
            }
        }
    }
}
