//! Products command - product listings, approvals, and traces.

use crate::cli::args::{ProductsAction, ProductsArgs};
use crate::domain::Address;
use crate::errors::AppResult;
use crate::services::ServiceContainer;

/// Execute the products command
pub async fn execute(args: ProductsArgs, services: &dyn ServiceContainer) -> AppResult<()> {
    let catalog = services.catalog();
    match args.action {
        ProductsAction::List => {
            let products = catalog.list_products().await;
            println!("{}", serde_json::to_string_pretty(&products)?);
        }
        ProductsAction::Approved => {
            let products = catalog.approved_products().await;
            println!("{}", serde_json::to_string_pretty(&products)?);
        }
        ProductsAction::Pending { supplier } => {
            let supplier = Address::parse(&supplier)?;
            let products = catalog.pending_approval_for(&supplier).await;
            println!("{}", serde_json::to_string_pretty(&products)?);
        }
        ProductsAction::Trace { id } => match services.traceability().product_trace(id).await {
            Some(trace) => println!("{}", serde_json::to_string_pretty(&trace)?),
            None => println!("no trace available for product {}", id),
        },
        ProductsAction::Responded { id, supplier } => {
            let supplier = Address::parse(&supplier)?;
            let responded = catalog.supplier_responded(id, &supplier).await;
            println!("{}", responded);
        }
    }
    Ok(())
}
