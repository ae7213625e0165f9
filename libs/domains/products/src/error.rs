use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found")]
    NotFound,

    #[error("Product ID not provided")]
    MissingId,

    #[error("Product with this name already exists")]
    DuplicateName,

    #[error("Product is already deleted")]
    AlreadyDeleted,

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound => AppError::NotFound("Product not found".to_string()),
            ProductError::MissingId => AppError::NotFound("Product ID not provided".to_string()),
            ProductError::DuplicateName => {
                AppError::Conflict("Product with this name already exists".to_string())
            }
            ProductError::AlreadyDeleted => {
                AppError::BadRequest("Product is already deleted".to_string())
            }
            ProductError::Validation(errors) => AppError::Validation(errors),
            ProductError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_error_to_status_mapping() {
        let cases = [
            (ProductError::NotFound, StatusCode::NOT_FOUND),
            (ProductError::MissingId, StatusCode::NOT_FOUND),
            (ProductError::DuplicateName, StatusCode::CONFLICT),
            (ProductError::AlreadyDeleted, StatusCode::BAD_REQUEST),
            (
                ProductError::Database("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let app_error: AppError = err.into();
            assert_eq!(app_error.status_code(), expected);
        }
    }
}
