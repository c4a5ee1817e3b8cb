//! Session command - wallet session lifecycle.

use std::sync::Arc;

use crate::cli::args::{SessionAction, SessionArgs};
use crate::config::Config;
use crate::domain::Address;
use crate::errors::AppResult;
use crate::services::ServiceContainer;
use crate::session::{FileStore, SessionManager};

/// Execute the session command
pub async fn execute(
    args: SessionArgs,
    services: &dyn ServiceContainer,
    config: &Config,
) -> AppResult<()> {
    let store = Arc::new(FileStore::new(config.session_path.clone()));
    let manager = SessionManager::new(services.directory(), store);

    match args.action {
        SessionAction::Connect { address } => {
            let address = Address::parse(&address)?;
            let session = manager.connect(address).await?;
            println!("{}", serde_json::to_string_pretty(&session)?);
        }
        SessionAction::Status => match manager.current()? {
            Some(session) => println!("{}", serde_json::to_string_pretty(&session)?),
            None => println!("no active session"),
        },
        SessionAction::Disconnect => {
            manager.disconnect()?;
            println!("session cleared");
        }
    }
    Ok(())
}
