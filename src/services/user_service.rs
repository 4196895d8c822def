use crate::{
    errors::ServiceError,
    models::user_model::User,
    repositories::user_repository::UserRepository,
    types::{
        models::user::{defaults::default_status, role::Role},
        requests::auth::register_request::RegisterRequest,
    },
    utils::auth_utils::{generate_jwt, hash_password, verify_password},
};
use anyhow::anyhow;
use bson::oid::ObjectId;
use chrono::Utc;
use std::sync::Arc;

pub struct UserService {
    pub user_repository: Arc<UserRepository>,
}

impl UserService {
    pub fn new(user_repository: Arc<UserRepository>) -> Self {
        Self { user_repository }
    }

    pub async fn register_user(&self, new_user: RegisterRequest) -> Result<User, ServiceError> {
        if !matches!(new_user.role, Role::Owner | Role::Guest) {
            return Err(ServiceError::validation(
                "Only owner and guest accounts can self-register",
            ));
        }

        if self
            .user_repository
            .find_by_email(&new_user.email)
            .await?
            .is_some()
        {
            return Err(ServiceError::conflict(format!(
                "An account with email '{}' already exists",
                new_user.email
            )));
        }

        let hashed_password = hash_password(&new_user.password)
            .map_err(|e| ServiceError::Internal(anyhow!("Password hashing failed: {}", e)))?;

        let now = Utc::now();
        let user = User {
            id: Some(ObjectId::new()),
            name: new_user.name,
            email: new_user.email,
            password: hashed_password,
            phone: new_user.phone,
            role: new_user.role,
            status: default_status(),
            worker_id: None,
            created_at: now,
            updated_at: now,
        };

        Ok(self.user_repository.create(&user).await?)
    }

    pub async fn authenticate_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(User, String), ServiceError> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::Unauthorized("Invalid credentials".to_string()))?;

        let password_matches = verify_password(password, &user.password)
            .map_err(|e| ServiceError::Internal(anyhow!("Password verification failed: {}", e)))?;

        if !password_matches {
            return Err(ServiceError::Unauthorized("Invalid credentials".to_string()));
        }

        let token = generate_jwt(&user)
            .map_err(|e| ServiceError::Internal(anyhow!("JWT generation failed: {}", e)))?;

        Ok((user, token))
    }
}
