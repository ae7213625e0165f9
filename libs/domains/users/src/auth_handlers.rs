//! HTTP handlers for authentication: login and current-user lookup.

use axum::{
    extract::State,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use axum_helpers::{
    errors::responses::{
        InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
        ValidationFailedResponse,
    },
    jwt_auth_middleware, ApiResponse, JwtAuth, JwtClaims, ValidatedJson,
};

use utoipa::OpenApi;

use crate::error::{UserError, UserResult};
use crate::models::{CurrentUserResponse, LoginRequest, LoginResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for the Auth API
#[derive(OpenApi)]
#[openapi(
    paths(login, me),
    components(
        schemas(LoginRequest, LoginResponse, CurrentUserResponse),
        responses(
            UnauthorizedResponse,
            NotFoundResponse,
            ValidationFailedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Auth", description = "Authentication endpoints")
    )
)]
pub struct AuthApiDoc;

/// Application state for auth handlers
pub struct AuthState<R: UserRepository> {
    pub service: UserService<R>,
    pub jwt_auth: JwtAuth,
}

impl<R: UserRepository> Clone for AuthState<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            jwt_auth: self.jwt_auth.clone(),
        }
    }
}

/// Create the auth router
pub fn router<R>(state: AuthState<R>) -> Router
where
    R: UserRepository + 'static,
{
    let protected = Router::new()
        .route("/me", get(me::<R>))
        .route_layer(middleware::from_fn_with_state(
            state.jwt_auth.clone(),
            jwt_auth_middleware,
        ));

    Router::new()
        .route("/login", post(login::<R>))
        .merge(protected)
        .with_state(state)
}

/// Login with email/password.
///
/// Issues a signed session token (1 hour) embedding the user id. Unknown
/// emails and wrong passwords fail with the same message.
#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 422, response = ValidationFailedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn login<R: UserRepository>(
    State(state): State<AuthState<R>>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> UserResult<impl IntoResponse> {
    let user = state
        .service
        .verify_credentials(&input.email, &input.password)
        .await?;

    let token = state.jwt_auth.create_token(user.id).map_err(|e| {
        tracing::error!("Failed to create session token: {:?}", e);
        UserError::Internal("Failed to create token".to_string())
    })?;

    Ok(Json(ApiResponse::new(
        "Login successful",
        LoginResponse { token },
    )))
}

/// Get the currently authenticated user
#[utoipa::path(
    get,
    path = "/me",
    tag = "Auth",
    responses(
        (status = 200, description = "User found", body = CurrentUserResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn me<R: UserRepository>(
    State(state): State<AuthState<R>>,
    Extension(claims): Extension<JwtClaims>,
) -> UserResult<impl IntoResponse> {
    let user_id = claims.user_id().ok_or(UserError::Unauthorized)?;

    let user = state.service.get_user(user_id).await?;

    Ok(Json(ApiResponse::new(
        "User found",
        CurrentUserResponse { user },
    )))
}
