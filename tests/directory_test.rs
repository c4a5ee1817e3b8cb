//! Directory service unit tests.

use std::sync::Arc;

use foodtrace::chain::{MockContractReader, UserRegistry, Value};
use foodtrace::domain::{Address, Role};
use foodtrace::errors::AppError;
use foodtrace::services::{Directory, DirectoryService};

fn addr(tag: char) -> Address {
    let hex: String = std::iter::repeat(tag).take(40).collect();
    format!("0x{}", hex).parse().unwrap()
}

fn registry_addr() -> Address {
    addr('1')
}

fn directory(reader: MockContractReader) -> Directory {
    Directory::new(UserRegistry::new(Arc::new(reader), registry_addr()))
}

#[tokio::test]
async fn resolve_role_maps_the_contract_tuple() {
    let mut reader = MockContractReader::new();
    reader
        .expect_read()
        .withf(|_, function, _| function == "getUserRole")
        .returning(|_, _, _| {
            Ok(vec![
                Value::Uint(2),
                Value::Str("Corner Shop".into()),
                Value::Uint(1_700_000_000),
            ])
        });

    let profile = directory(reader).resolve_role(&addr('a')).await;
    assert_eq!(profile.role, Role::Seller);
    assert_eq!(profile.display_name, "Corner Shop");
    assert_eq!(profile.registered_at, 1_700_000_000);
}

#[tokio::test]
async fn resolve_role_returns_sentinel_when_the_read_fails() {
    let mut reader = MockContractReader::new();
    reader
        .expect_read()
        .returning(|_, _, _| Err(AppError::read("provider unreachable")));

    let profile = directory(reader).resolve_role(&addr('a')).await;
    assert_eq!(profile.role, Role::Unregistered);
    assert_eq!(profile.display_name, "Unregistered User");
    assert_eq!(profile.registered_at, 0);
}

#[tokio::test]
async fn list_users_zips_five_parallel_arrays() {
    let mut reader = MockContractReader::new();
    reader
        .expect_read()
        .withf(|_, function, _| function == "getAllUsersWithDetails")
        .returning(|_, _, _| {
            Ok(vec![
                Value::AddressArray(vec![addr('a'), addr('b'), addr('c')]),
                Value::UintArray(vec![1, 2, 3]),
                Value::StrArray(vec!["Mia".into(), "Corner Shop".into(), "Acme Farms".into()]),
                Value::UintArray(vec![100, 200, 300]),
                Value::AddressArray(vec![addr('a'), addr('a'), addr('a')]),
            ])
        });

    let users = directory(reader).list_users().await;
    assert_eq!(users.len(), 3);

    // Each record's fields come from the same index across all arrays
    assert_eq!(users[1].address, addr('b'));
    assert_eq!(users[1].role, Role::Seller);
    assert_eq!(users[1].display_name, "Corner Shop");
    assert_eq!(users[1].registered_at, 200);
    assert_eq!(users[1].registered_by, addr('a'));
    assert_eq!(users[2].role, Role::Supplier);
}

#[tokio::test]
async fn list_users_rejects_mismatched_array_lengths() {
    let mut reader = MockContractReader::new();
    reader
        .expect_read()
        .withf(|_, function, _| function == "getAllUsersWithDetails")
        .returning(|_, _, _| {
            Ok(vec![
                Value::AddressArray(vec![addr('a'), addr('b')]),
                Value::UintArray(vec![1]),
                Value::StrArray(vec!["Mia".into(), "Bo".into()]),
                Value::UintArray(vec![100, 200]),
                Value::AddressArray(vec![addr('a'), addr('a')]),
            ])
        });

    // A misaligned result degrades to an empty listing, never a
    // short-zipped one.
    let users = directory(reader).list_users().await;
    assert!(users.is_empty());
}

#[tokio::test]
async fn stats_total_is_the_sum_of_roles() {
    let mut reader = MockContractReader::new();
    reader
        .expect_read()
        .withf(|_, function, _| function == "getUserStats")
        .returning(|_, _, _| Ok(vec![Value::Uint(2), Value::Uint(5), Value::Uint(3)]));

    let stats = directory(reader).stats().await;
    assert_eq!(stats.managers, 2);
    assert_eq!(stats.sellers, 5);
    assert_eq!(stats.suppliers, 3);
    assert_eq!(stats.total(), 10);
}

#[tokio::test]
async fn stats_zeroes_on_failure() {
    let mut reader = MockContractReader::new();
    reader
        .expect_read()
        .returning(|_, _, _| Err(AppError::read("provider unreachable")));

    let stats = directory(reader).stats().await;
    assert_eq!(stats.total(), 0);
}

#[tokio::test]
async fn display_name_prefers_the_registered_name() {
    let mut reader = MockContractReader::new();
    reader.expect_read().returning(|_, _, _| {
        Ok(vec![
            Value::Uint(3),
            Value::Str("Acme Farms".into()),
            Value::Uint(100),
        ])
    });

    let name = directory(reader).display_name(&addr('a')).await;
    assert_eq!(name, "Acme Farms");
}

#[tokio::test]
async fn display_name_truncates_unregistered_addresses() {
    let mut reader = MockContractReader::new();
    reader
        .expect_read()
        .returning(|_, _, _| Ok(vec![Value::Uint(0), Value::Str(String::new()), Value::Uint(0)]));

    let address: Address = "0x123400000000000000000000000000000000abcd".parse().unwrap();
    let name = directory(reader).display_name(&address).await;
    assert_eq!(name, "0x1234...abcd");
}

#[tokio::test]
async fn display_name_covers_blank_registered_names() {
    let mut reader = MockContractReader::new();
    reader
        .expect_read()
        .returning(|_, _, _| Ok(vec![Value::Uint(2), Value::Str(String::new()), Value::Uint(50)]));

    let name = directory(reader).display_name(&addr('b')).await;
    assert_eq!(name, "Unknown User");
}

#[tokio::test]
async fn display_name_falls_back_to_short_address_on_failure() {
    let mut reader = MockContractReader::new();
    reader
        .expect_read()
        .returning(|_, _, _| Err(AppError::read("provider unreachable")));

    let address: Address = "0x123400000000000000000000000000000000abcd".parse().unwrap();
    let name = directory(reader).display_name(&address).await;
    assert_eq!(name, "0x1234...abcd");
}

#[tokio::test]
async fn repeated_calls_over_an_unchanged_source_agree() {
    let mut reader = MockContractReader::new();
    reader
        .expect_read()
        .withf(|_, function, _| function == "getAllUsersWithDetails")
        .times(2)
        .returning(|_, _, _| {
            Ok(vec![
                Value::AddressArray(vec![addr('a')]),
                Value::UintArray(vec![1]),
                Value::StrArray(vec!["Mia".into()]),
                Value::UintArray(vec![100]),
                Value::AddressArray(vec![addr('a')]),
            ])
        });

    let directory = directory(reader);
    let first = directory.list_users().await;
    let second = directory.list_users().await;
    assert_eq!(first, second);
}
