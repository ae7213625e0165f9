use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error("User with this email already exists")]
    DuplicateEmail,

    /// Same message for unknown email and wrong password, so callers
    /// cannot enumerate accounts.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not authenticated")]
    Unauthorized,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound => AppError::NotFound("User not found".to_string()),
            UserError::DuplicateEmail => {
                AppError::Conflict("User with this email already exists".to_string())
            }
            UserError::InvalidCredentials => {
                AppError::Unauthorized("Invalid credentials".to_string())
            }
            UserError::Unauthorized => AppError::Unauthorized("Not authenticated".to_string()),
            UserError::PasswordHash(msg) => AppError::InternalServerError(msg),
            UserError::Validation(errors) => AppError::Validation(errors),
            UserError::Database(msg) => AppError::InternalServerError(msg),
            UserError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for UserError {
    fn from(err: mongodb::error::Error) -> Self {
        UserError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_error_to_status_mapping() {
        let cases = [
            (UserError::NotFound, StatusCode::NOT_FOUND),
            (UserError::DuplicateEmail, StatusCode::CONFLICT),
            (UserError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (UserError::Unauthorized, StatusCode::UNAUTHORIZED),
            (
                UserError::Database("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let app_error: AppError = err.into();
            assert_eq!(app_error.status_code(), expected);
        }
    }

    #[test]
    fn test_invalid_credentials_message_is_uniform() {
        assert_eq!(
            UserError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
    }
}
