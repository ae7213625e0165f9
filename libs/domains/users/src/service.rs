use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{RegisterRequest, User, UserResponse};
use crate::repository::UserRepository;

/// Service layer for User business logic
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a new user.
    ///
    /// The plaintext password is hashed before anything is persisted and
    /// the returned projection never contains it.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterRequest) -> UserResult<UserResponse> {
        input.validate()?;

        if self.repository.email_exists(&input.email).await? {
            return Err(UserError::DuplicateEmail);
        }

        let password_hash = self.hash_password(&input.password)?;
        let user = User::new(input.first_name, input.last_name, input.email, password_hash);

        let created = self.repository.insert(user).await?;
        Ok(created.into())
    }

    /// Get a user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: Uuid) -> UserResult<UserResponse> {
        let user = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound)?;

        Ok(user.into())
    }

    /// List all users, newest first
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<UserResponse>> {
        let users = self.repository.list().await?;
        Ok(users.into_iter().map(|u| u.into()).collect())
    }

    /// Verify user credentials (for login).
    ///
    /// Fails identically for an unknown email and a wrong password.
    #[instrument(skip(self, email, password))]
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> UserResult<UserResponse> {
        let user = self
            .repository
            .get_by_email(email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !self.verify_password(password, &user.password_hash)? {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user.into())
    }

    // Password helpers

    fn hash_password(&self, password: &str) -> UserResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::PasswordHash(e.to_string()))
    }

    fn verify_password(&self, password: &str, hash: &str) -> UserResult<bool> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;

    fn register_input() -> RegisterRequest {
        RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret-password".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_email_exists().returning(|_| Ok(false));
        repo.expect_insert()
            .withf(|user| {
                user.password_hash != "secret-password"
                    && user.password_hash.starts_with("$argon2")
            })
            .returning(Ok);

        let service = UserService::new(repo);
        let response = service.register(register_input()).await.unwrap();

        assert_eq!(response.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let mut repo = MockUserRepository::new();
        repo.expect_email_exists().returning(|_| Ok(true));

        let service = UserService::new(repo);
        let result = service.register(register_input()).await;

        assert!(matches!(result, Err(UserError::DuplicateEmail)));
    }

    #[tokio::test]
    async fn test_register_invalid_input_rejected() {
        let repo = MockUserRepository::new();
        let service = UserService::new(repo);

        let mut input = register_input();
        input.password = "short".to_string();
        let result = service.register(input).await;

        assert!(matches!(result, Err(UserError::Validation(_))));
    }

    #[tokio::test]
    async fn test_verify_credentials_success() {
        let repo = MockUserRepository::new();
        let service = UserService::new(repo);
        let hash = service.hash_password("correct-password").unwrap();

        let user = User::new(
            "Ada".to_string(),
            "Lovelace".to_string(),
            "ada@example.com".to_string(),
            hash,
        );

        let mut repo = MockUserRepository::new();
        repo.expect_get_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(repo);
        let response = service
            .verify_credentials("ada@example.com", "correct-password")
            .await
            .unwrap();

        assert_eq!(response.email, "ada@example.com");
    }

    // Unknown email and wrong password must be indistinguishable to callers.
    #[tokio::test]
    async fn test_verify_credentials_uniform_failure() {
        let helper = UserService::new(MockUserRepository::new());
        let hash = helper.hash_password("correct-password").unwrap();
        let user = User::new(
            "Ada".to_string(),
            "Lovelace".to_string(),
            "ada@example.com".to_string(),
            hash,
        );

        let mut repo = MockUserRepository::new();
        repo.expect_get_by_email().returning(move |email| {
            if email == "ada@example.com" {
                Ok(Some(user.clone()))
            } else {
                Ok(None)
            }
        });

        let service = UserService::new(repo);

        let unknown_email = service
            .verify_credentials("nobody@example.com", "whatever")
            .await
            .unwrap_err();
        let wrong_password = service
            .verify_credentials("ada@example.com", "wrong-password")
            .await
            .unwrap_err();

        assert_eq!(unknown_email.to_string(), "Invalid credentials");
        assert_eq!(wrong_password.to_string(), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = UserService::new(repo);
        let result = service.get_user(Uuid::now_v7()).await;

        assert!(matches!(result, Err(UserError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_users_projects_responses() {
        let helper = UserService::new(MockUserRepository::new());
        let hash = helper.hash_password("pw-123456").unwrap();
        let user = User::new(
            "Ada".to_string(),
            "Lovelace".to_string(),
            "ada@example.com".to_string(),
            hash,
        );

        let mut repo = MockUserRepository::new();
        repo.expect_list().returning(move || Ok(vec![user.clone()]));

        let service = UserService::new(repo);
        let users = service.list_users().await.unwrap();

        assert_eq!(users.len(), 1);
        let json = serde_json::to_value(&users[0]).unwrap();
        assert!(json.get("password_hash").is_none());
    }
}
