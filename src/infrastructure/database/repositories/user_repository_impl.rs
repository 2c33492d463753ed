use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::domain::entities::User;
use crate::domain::repositories::{user_repository::NewUser, UserRepository};
use crate::domain::value_objects::UserRole;
use crate::infrastructure::database::{
    connection::Database,
    models::{NewUserModel, UserModel},
};
use crate::schema::users;
use crate::shared::errors::AppResult;

pub struct UserRepositoryImpl {
    db: Arc<Database>,
}

impl UserRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn save(&self, new_user: NewUser) -> AppResult<User> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<UserModel> {
            let mut conn = db.get_connection()?;
            let row = NewUserModel {
                name: new_user.name,
                email: new_user.email,
                phone: new_user.phone,
                role: new_user.role,
            };
            let inserted = diesel::insert_into(users::table)
                .values(&row)
                .get_result::<UserModel>(&mut conn)?;
            Ok(inserted)
        })
        .await??;

        Ok(model.into_entity())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<UserModel>> {
            let mut conn = db.get_connection()?;
            let m = users::table
                .filter(users::id.eq(id))
                .first::<UserModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(UserModel::into_entity))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let db = Arc::clone(&self.db);
        let email = email.to_string();

        let model = task::spawn_blocking(move || -> AppResult<Option<UserModel>> {
            let mut conn = db.get_connection()?;
            let m = users::table
                .filter(users::email.eq(email))
                .first::<UserModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(UserModel::into_entity))
    }

    async fn get_all(&self) -> AppResult<Vec<User>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<UserModel>> {
            let mut conn = db.get_connection()?;
            let ms = users::table
                .order(users::id.asc())
                .load::<UserModel>(&mut conn)?;
            Ok(ms)
        })
        .await??;

        Ok(models.into_iter().map(UserModel::into_entity).collect())
    }

    async fn find_by_role(&self, role: UserRole) -> AppResult<Vec<User>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<UserModel>> {
            let mut conn = db.get_connection()?;
            let ms = users::table
                .filter(users::role.eq(role))
                .order(users::id.asc())
                .load::<UserModel>(&mut conn)?;
            Ok(ms)
        })
        .await??;

        Ok(models.into_iter().map(UserModel::into_entity).collect())
    }
}
