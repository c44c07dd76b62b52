//! Startup data seeding

use domain_products::{PgProductRepository, ProductInput, ProductService};
use tracing::info;

use crate::state::AppState;

/// Insert the bootstrap product.
///
/// Runs on every startup before the server accepts traffic; the store
/// assigns a fresh id each time.
pub async fn run(state: &AppState) -> eyre::Result<()> {
    let repository = PgProductRepository::new(state.db.clone());
    let service = ProductService::new(repository);

    let product = service
        .create(ProductInput {
            id: None,
            name: "test1".to_string(),
            description: "description".to_string(),
            price: 2.0,
        })
        .await?;

    info!(product_id = product.id, "Seeded bootstrap product");
    Ok(())
}
