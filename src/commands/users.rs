//! Users command - user registry queries.

use crate::cli::args::{UsersAction, UsersArgs};
use crate::domain::Address;
use crate::errors::AppResult;
use crate::services::ServiceContainer;

/// Execute the users command
pub async fn execute(args: UsersArgs, services: &dyn ServiceContainer) -> AppResult<()> {
    let directory = services.directory();
    match args.action {
        UsersAction::List => {
            let users = directory.list_users().await;
            println!("{}", serde_json::to_string_pretty(&users)?);
        }
        UsersAction::Stats => {
            let stats = directory.stats().await;
            println!("{}", serde_json::to_string_pretty(&stats)?);
            println!("total: {}", stats.total());
        }
        UsersAction::Role { address } => {
            let address = Address::parse(&address)?;
            let profile = directory.resolve_role(&address).await;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
    }
    Ok(())
}
