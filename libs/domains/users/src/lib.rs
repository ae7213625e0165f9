//! Users Domain
//!
//! User registration, lookup, and credential verification backed by MongoDB.
//! Login issues a stateless 1-hour JWT; the password hash never leaves the
//! service layer.

pub mod auth_handlers;
pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use auth_handlers::{AuthApiDoc, AuthState};
pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{LoginRequest, LoginResponse, RegisterRequest, User, UserResponse};
pub use mongodb::MongoUserRepository;
pub use repository::UserRepository;
pub use service::UserService;
