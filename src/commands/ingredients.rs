//! Ingredients command - ingredient listings.

use crate::cli::args::IngredientsArgs;
use crate::errors::AppResult;
use crate::services::ServiceContainer;

/// Execute the ingredients command
pub async fn execute(args: IngredientsArgs, services: &dyn ServiceContainer) -> AppResult<()> {
    let catalog = services.catalog();
    let ingredients = if args.with_suppliers {
        catalog.list_ingredients_with_suppliers().await
    } else {
        catalog.list_ingredients().await
    };
    println!("{}", serde_json::to_string_pretty(&ingredients)?);
    Ok(())
}
