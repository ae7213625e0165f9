//! Products API routes

use axum::Router;
use axum_helpers::JwtAuth;
use domain_products::{handlers, MongoProductRepository, ProductService};

use crate::state::AppState;

/// Create the products router (all routes require authentication)
pub fn router(state: &AppState) -> Router {
    let repository = MongoProductRepository::new(&state.db);
    let service = ProductService::new(repository);
    let jwt_auth = JwtAuth::new(&state.config.jwt);
    handlers::router(service, jwt_auth)
}

/// Initialize products indexes
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    let repository = MongoProductRepository::new(&state.db);
    repository.init_indexes().await?;
    Ok(())
}
