//! Wallet session with an explicit lifecycle.
//!
//! A session is created on connect (resolving the address's role through
//! the directory) and destroyed on disconnect. It is injected wherever
//! needed rather than read from ambient global state, and it is only a
//! cache of what the registry said at connect time: the registry remains
//! the source of truth.

mod store;

pub use store::{FileStore, MemoryStore, SessionStore};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Address, Role};
use crate::errors::AppResult;
use crate::services::DirectoryService;

/// The connected wallet's identity as resolved at connect time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub address: Address,
    pub role: Role,
    pub display_name: String,
    /// Registration time in epoch seconds; 0 when unregistered.
    pub registered_at: u64,
    pub connected_at: DateTime<Utc>,
}

impl Session {
    /// An unregistered wallet can connect; it just has no dashboard
    /// beyond registration.
    pub fn is_registered(&self) -> bool {
        self.role.is_registered()
    }
}

/// Creates, exposes, and destroys the current session.
pub struct SessionManager {
    directory: Arc<dyn DirectoryService>,
    store: Arc<dyn SessionStore>,
}

impl SessionManager {
    pub fn new(directory: Arc<dyn DirectoryService>, store: Arc<dyn SessionStore>) -> Self {
        Self { directory, store }
    }

    /// Connect a wallet: resolve its role and persist the session.
    ///
    /// Role resolution is lenient, so a connect succeeds even when the
    /// registry is unreachable; the session then carries the
    /// Unregistered sentinel.
    pub async fn connect(&self, address: Address) -> AppResult<Session> {
        let profile = self.directory.resolve_role(&address).await;
        let session = Session {
            address,
            role: profile.role,
            display_name: profile.display_name,
            registered_at: profile.registered_at,
            connected_at: Utc::now(),
        };
        self.store.save(&session)?;
        tracing::info!(address = %session.address, role = %session.role, "session connected");
        Ok(session)
    }

    /// The persisted session, if any.
    pub fn current(&self) -> AppResult<Option<Session>> {
        self.store.load()
    }

    /// Destroy the current session.
    pub fn disconnect(&self) -> AppResult<()> {
        self.store.clear()?;
        tracing::info!("session disconnected");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RoleProfile;
    use crate::services::MockDirectoryService;

    fn addr(tag: char) -> Address {
        let hex: String = std::iter::repeat(tag).take(40).collect();
        Address::parse(&format!("0x{}", hex)).unwrap()
    }

    #[tokio::test]
    async fn connect_resolves_and_persists() {
        let mut directory = MockDirectoryService::new();
        directory.expect_resolve_role().returning(|_| RoleProfile {
            role: Role::Seller,
            display_name: "Corner Shop".into(),
            registered_at: 1_700_000_000,
        });

        let store = Arc::new(MemoryStore::new());
        let manager = SessionManager::new(Arc::new(directory), store.clone());

        let session = manager.connect(addr('a')).await.unwrap();
        assert_eq!(session.role, Role::Seller);
        assert!(session.is_registered());

        let current = manager.current().unwrap().unwrap();
        assert_eq!(current, session);
    }

    #[tokio::test]
    async fn disconnect_destroys_the_session() {
        let mut directory = MockDirectoryService::new();
        directory
            .expect_resolve_role()
            .returning(|_| RoleProfile::unregistered());

        let manager = SessionManager::new(Arc::new(directory), Arc::new(MemoryStore::new()));

        let session = manager.connect(addr('b')).await.unwrap();
        assert!(!session.is_registered());
        assert_eq!(session.display_name, "Unregistered User");

        manager.disconnect().unwrap();
        assert!(manager.current().unwrap().is_none());
    }
}
