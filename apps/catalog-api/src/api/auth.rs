//! Auth API routes

use axum::Router;
use axum_helpers::JwtAuth;
use domain_users::{auth_handlers, AuthState, MongoUserRepository, UserService};

use crate::state::AppState;

/// Create the auth router
pub fn router(state: &AppState) -> Router {
    let repository = MongoUserRepository::new(&state.db);
    let service = UserService::new(repository);
    let jwt_auth = JwtAuth::new(&state.config.jwt);

    auth_handlers::router(AuthState { service, jwt_auth })
}
