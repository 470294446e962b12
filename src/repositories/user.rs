//! # User Repository
//!
//! This module contains the repository implementation for User entities.

use crate::error::RepositoryError;
use crate::models::user::{
    ActiveModel as UserActiveModel, Entity as User, Model as UserModel, UserRole,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
};
use uuid::Uuid;

/// Request data for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// Repository for User database operations
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a new user
    pub async fn create_user(
        &self,
        request: CreateUserRequest,
    ) -> Result<UserModel, RepositoryError> {
        if request.email.trim().is_empty() {
            return Err(RepositoryError::validation_error("Email cannot be empty"));
        }

        let user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(request.email),
            password: Set(request.password),
            role: Set(request.role),
            created_at: Set(Utc::now().into()),
        };

        user.insert(self.db).await.map_err(|source| {
            if crate::error::is_unique_violation(&source) {
                RepositoryError::Conflict("A user with this email already exists".to_string())
            } else {
                RepositoryError::database_error(source)
            }
        })
    }

    /// Get user by ID
    pub async fn get_user_by_id(&self, user_id: Uuid) -> Result<Option<UserModel>, RepositoryError> {
        let user = User::find_by_id(user_id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(user)
    }

    /// Find a user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, RepositoryError> {
        let user = User::find()
            .filter(crate::models::user::Column::Email.eq(email))
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(user)
    }

    /// List all users
    pub async fn list_users(&self) -> Result<Vec<UserModel>, RepositoryError> {
        let users = User::find()
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(users)
    }

    /// Delete a user by primary key, returning the deleted row
    pub async fn delete_user(&self, user_id: Uuid) -> Result<UserModel, RepositoryError> {
        let user = User::find_by_id(user_id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?
            .ok_or_else(|| RepositoryError::NotFound("User not found".to_string()))?;

        user.clone()
            .delete(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(user)
    }
}
