use async_trait::async_trait;

use crate::domain::entities::User;
use crate::domain::value_objects::UserRole;
use crate::shared::errors::AppResult;

/// Creation payload; id and created_at are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn save(&self, new_user: NewUser) -> AppResult<User>;
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    async fn get_all(&self) -> AppResult<Vec<User>>;
    async fn find_by_role(&self, role: UserRole) -> AppResult<Vec<User>>;
}
