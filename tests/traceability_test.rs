//! Traceability service unit tests.

use std::sync::Arc;

use foodtrace::chain::{MockContractReader, SupplyChainRegistry, Value};
use foodtrace::domain::{Address, ProductStatus};
use foodtrace::errors::AppError;
use foodtrace::services::{MockDirectoryService, Traceability, TraceabilityService};

fn addr(tag: char) -> Address {
    let hex: String = std::iter::repeat(tag).take(40).collect();
    format!("0x{}", hex).parse().unwrap()
}

fn traceability(reader: MockContractReader, directory: MockDirectoryService) -> Traceability {
    Traceability::new(
        SupplyChainRegistry::new(Arc::new(reader), addr('2')),
        Arc::new(directory),
    )
}

fn trace_tuple() -> Vec<Value> {
    vec![
        Value::Str("Tomato Sauce".into()),
        Value::Str("B-2024-001".into()),
        Value::StrArray(vec!["Tomato".into(), "Basil".into()]),
        Value::StrArray(vec!["Vegetable".into(), "Herb".into()]),
        Value::AddressArray(vec![addr('a'), addr('b')]),
        Value::Uint(1_700_000_100),
        Value::Uint(1_700_000_500),
        Value::Uint(2),
    ]
}

#[tokio::test]
async fn trace_composes_the_contract_view_with_resolved_names() {
    let mut reader = MockContractReader::new();
    reader
        .expect_read()
        .withf(|_, function, args| {
            function == "getProductTraceability" && args == &[Value::Uint(7)]
        })
        .returning(|_, _, _| Ok(trace_tuple()));

    let mut directory = MockDirectoryService::new();
    directory
        .expect_display_name()
        .withf(|address| *address == addr('a'))
        .returning(|_| "Acme Farms".to_string());
    directory
        .expect_display_name()
        .withf(|address| *address == addr('b'))
        .returning(|address| address.short());

    let trace = traceability(reader, directory).product_trace(7).await.unwrap();
    assert_eq!(trace.product_name, "Tomato Sauce");
    assert_eq!(trace.batch_id, "B-2024-001");
    assert_eq!(trace.ingredient_names, vec!["Tomato", "Basil"]);
    assert_eq!(trace.ingredient_categories, vec!["Vegetable", "Herb"]);
    assert_eq!(trace.status, ProductStatus::Approved);

    // Names stay index-aligned with the supplier addresses
    assert_eq!(trace.suppliers, vec![addr('a'), addr('b')]);
    assert_eq!(trace.supplier_names, vec!["Acme Farms".to_string(), addr('b').short()]);
}

#[tokio::test]
async fn trace_is_none_for_a_missing_product() {
    let mut reader = MockContractReader::new();
    reader
        .expect_read()
        .returning(|_, _, _| Err(AppError::NotFound));

    let trace = traceability(reader, MockDirectoryService::new()).product_trace(99).await;
    assert!(trace.is_none());
}

#[tokio::test]
async fn trace_is_none_on_a_transient_failure() {
    let mut reader = MockContractReader::new();
    reader
        .expect_read()
        .returning(|_, _, _| Err(AppError::read("provider unreachable")));

    let trace = traceability(reader, MockDirectoryService::new()).product_trace(7).await;
    assert!(trace.is_none());
}

#[tokio::test]
async fn trace_rejects_mismatched_ingredient_arrays() {
    let mut reader = MockContractReader::new();
    reader.expect_read().returning(|_, _, _| {
        Ok(vec![
            Value::Str("Tomato Sauce".into()),
            Value::Str("B-2024-001".into()),
            Value::StrArray(vec!["Tomato".into(), "Basil".into()]),
            Value::StrArray(vec!["Vegetable".into()]),
            Value::AddressArray(vec![]),
            Value::Uint(0),
            Value::Uint(0),
            Value::Uint(0),
        ])
    });

    let trace = traceability(reader, MockDirectoryService::new()).product_trace(7).await;
    assert!(trace.is_none());
}
