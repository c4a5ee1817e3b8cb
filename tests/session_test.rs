//! Session lifecycle tests against the file store.

use std::sync::Arc;

use foodtrace::domain::{Address, Role, RoleProfile};
use foodtrace::services::MockDirectoryService;
use foodtrace::session::{FileStore, SessionManager, SessionStore};

fn addr(tag: char) -> Address {
    let hex: String = std::iter::repeat(tag).take(40).collect();
    format!("0x{}", hex).parse().unwrap()
}

fn manager_with_profile(profile: RoleProfile, store: Arc<FileStore>) -> SessionManager {
    let mut directory = MockDirectoryService::new();
    directory
        .expect_resolve_role()
        .returning(move |_| profile.clone());
    SessionManager::new(Arc::new(directory), store)
}

#[tokio::test]
async fn session_survives_a_new_store_instance() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let store = Arc::new(FileStore::new(path.clone()));
    let manager = manager_with_profile(
        RoleProfile {
            role: Role::Manager,
            display_name: "Site Manager".into(),
            registered_at: 1_700_000_000,
        },
        store,
    );
    let session = manager.connect(addr('a')).await.unwrap();

    // A fresh store over the same path sees the persisted session
    let reopened = FileStore::new(path);
    let loaded = reopened.load().unwrap().unwrap();
    assert_eq!(loaded, session);
    assert_eq!(loaded.role, Role::Manager);
}

#[tokio::test]
async fn disconnect_removes_the_file_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let store = Arc::new(FileStore::new(path.clone()));
    let manager = manager_with_profile(RoleProfile::unregistered(), store);

    manager.connect(addr('b')).await.unwrap();
    assert!(path.exists());

    manager.disconnect().unwrap();
    assert!(!path.exists());
    assert!(manager.current().unwrap().is_none());

    // Clearing an already-cleared session is not an error
    manager.disconnect().unwrap();
}

#[tokio::test]
async fn reconnect_replaces_the_previous_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let store = Arc::new(FileStore::new(path));
    let manager = manager_with_profile(
        RoleProfile {
            role: Role::Seller,
            display_name: "Corner Shop".into(),
            registered_at: 1_700_000_000,
        },
        store,
    );

    manager.connect(addr('a')).await.unwrap();
    let second = manager.connect(addr('c')).await.unwrap();

    let current = manager.current().unwrap().unwrap();
    assert_eq!(current.address, second.address);
    assert_eq!(current.address, addr('c'));
}
