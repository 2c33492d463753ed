use std::sync::Arc;

use crate::application::dto::CreateUserRequest;
use crate::domain::entities::User;
use crate::domain::repositories::{user_repository::NewUser, UserRepository};
use crate::domain::value_objects::UserRole;
use crate::log_info;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<User> {
        Validator::validate_user_name(&request.name)?;
        Validator::validate_email(&request.email)?;

        // Emails are unique; the store's unique index backs this check up
        // against races.
        if self.user_repo.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "A user with email '{}' already exists",
                request.email
            )));
        }

        let user = self
            .user_repo
            .save(NewUser {
                name: request.name,
                email: request.email,
                phone: request.phone,
                role: request.role,
            })
            .await?;

        log_info!("Registered user {} ({})", user.id, user.role);

        Ok(user)
    }

    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.user_repo.get_all().await
    }

    pub async fn list_users_by_role(&self, role: UserRole) -> AppResult<Vec<User>> {
        self.user_repo.find_by_role(role).await
    }

    /// The participants ("shohibul qurban") whose animals are being processed.
    pub async fn list_participants(&self) -> AppResult<Vec<User>> {
        self.list_users_by_role(UserRole::Participant).await
    }
}
