//! Users API routes

use axum::Router;
use domain_users::{handlers, MongoUserRepository, UserService};

use crate::state::AppState;

/// Create the users router
pub fn router(state: &AppState) -> Router {
    let repository = MongoUserRepository::new(&state.db);
    let service = UserService::new(repository);
    handlers::router(service)
}

/// Initialize users indexes
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    let repository = MongoUserRepository::new(&state.db);
    repository.init_indexes().await?;
    Ok(())
}
