//! # Realtor Repository
//!
//! This module contains the repository implementation for Realtor entities.
//! Sign-up creates the realtor profile and its login user as one atomic
//! unit; a failure in either write rolls the whole operation back.

use crate::error::RepositoryError;
use crate::models::realtor::{
    ActiveModel as RealtorActiveModel, Entity as Realtor, Model as RealtorModel,
};
use crate::models::user::{ActiveModel as UserActiveModel, UserRole};
use chrono::Utc;
use rand::Rng;
use rand::distributions::Alphanumeric;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, IntoActiveModel,
    ModelTrait, Set, TransactionTrait,
};
use uuid::Uuid;

/// Request data for creating a new realtor profile
#[derive(Debug, Clone)]
pub struct CreateRealtorRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub brokerage: String,
    pub state: String,
    pub central_zip_code: String,
    pub radius: i32,
    pub sign_up_category: String,
    pub total_team_members: i32,
}

/// Repository for Realtor database operations
pub struct RealtorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RealtorRepository<'a> {
    /// Create a new RealtorRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a realtor profile and its linked REALTOR user in one transaction
    pub async fn create_with_user(
        &self,
        request: CreateRealtorRequest,
    ) -> Result<RealtorModel, RepositoryError> {
        // Initials feed the agent code, so the names cannot be empty.
        if request.first_name.trim().is_empty() || request.last_name.trim().is_empty() {
            return Err(RepositoryError::validation_error(
                "First and last name are required",
            ));
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(RepositoryError::database_error)?;

        match Self::insert_profile_and_user(&txn, request).await {
            Ok(realtor) => {
                txn.commit()
                    .await
                    .map_err(|source| RepositoryError::Aborted { source })?;
                Ok(realtor)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    log::warn!(
                        "Failed to roll back realtor sign-up transaction: {}",
                        rollback_err
                    );
                }
                Err(err)
            }
        }
    }

    async fn insert_profile_and_user(
        txn: &DatabaseTransaction,
        request: CreateRealtorRequest,
    ) -> Result<RealtorModel, RepositoryError> {
        let now = Utc::now();

        let user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(request.email.clone()),
            password: Set(generate_temporary_password()),
            role: Set(UserRole::Realtor),
            created_at: Set(now.into()),
        };

        let user = user.insert(txn).await.map_err(Self::map_signup_error)?;

        let agent_code = generate_agent_code(&request.first_name, &request.last_name);

        let realtor = RealtorActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(request.first_name),
            last_name: Set(request.last_name),
            phone_number: Set(request.phone_number),
            email: Set(request.email),
            brokerage: Set(request.brokerage),
            state: Set(request.state),
            central_zip_code: Set(request.central_zip_code),
            radius: Set(request.radius),
            sign_up_category: Set(request.sign_up_category),
            total_team_members: Set(request.total_team_members),
            agent_code: Set(agent_code),
            is_active: Set(true),
            user_id: Set(user.id),
            created_at: Set(now.into()),
        };

        realtor.insert(txn).await.map_err(Self::map_signup_error)
    }

    fn map_signup_error(source: sea_orm::DbErr) -> RepositoryError {
        if crate::error::is_unique_violation(&source) {
            RepositoryError::Conflict("A realtor with this email already exists".to_string())
        } else {
            RepositoryError::Aborted { source }
        }
    }

    /// Get realtor by ID
    pub async fn get_realtor_by_id(
        &self,
        realtor_id: Uuid,
    ) -> Result<Option<RealtorModel>, RepositoryError> {
        let realtor = Realtor::find_by_id(realtor_id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(realtor)
    }

    /// List all realtors
    pub async fn list_realtors(&self) -> Result<Vec<RealtorModel>, RepositoryError> {
        let realtors = Realtor::find()
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(realtors)
    }

    /// Toggle whether a realtor may receive assignments
    pub async fn set_active(
        &self,
        realtor_id: Uuid,
        is_active: bool,
    ) -> Result<RealtorModel, RepositoryError> {
        let realtor = Realtor::find_by_id(realtor_id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?
            .ok_or_else(|| RepositoryError::NotFound("Realtor not found".to_string()))?;

        let mut active_realtor = realtor.into_active_model();
        active_realtor.is_active = Set(is_active);

        active_realtor
            .update(self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// Delete a realtor by primary key, returning the deleted row
    pub async fn delete_realtor(&self, realtor_id: Uuid) -> Result<RealtorModel, RepositoryError> {
        let realtor = Realtor::find_by_id(realtor_id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?
            .ok_or_else(|| RepositoryError::NotFound("Realtor not found".to_string()))?;

        realtor
            .clone()
            .delete(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(realtor)
    }
}

/// Agent code: uppercased initials plus a random 4-digit suffix.
fn generate_agent_code(first_name: &str, last_name: &str) -> String {
    let initial = |name: &str| {
        name.trim()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('X')
    };

    format!(
        "{}{}{}",
        initial(first_name),
        initial(last_name),
        rand::thread_rng().gen_range(1000..10000)
    )
}

/// Temporary password handed to a freshly signed-up realtor.
fn generate_temporary_password() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::Entity as User;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ColumnTrait, Database, QueryFilter};

    async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    fn sample_request(email: &str) -> CreateRealtorRequest {
        CreateRealtorRequest {
            first_name: "Alice".to_string(),
            last_name: "Brown".to_string(),
            phone_number: "5559876543".to_string(),
            email: email.to_string(),
            brokerage: "Brown Realty".to_string(),
            state: "NY".to_string(),
            central_zip_code: "12180".to_string(),
            radius: 25,
            sign_up_category: "individual".to_string(),
            total_team_members: 1,
        }
    }

    #[tokio::test]
    async fn test_signup_creates_linked_user() {
        let db = setup_test_db().await;
        let repo = RealtorRepository::new(&db);

        let realtor = repo
            .create_with_user(sample_request("alice@brownrealty.com"))
            .await
            .unwrap();

        assert!(realtor.is_active);

        let user = User::find_by_id(realtor.user_id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.role, UserRole::Realtor);
        assert_eq!(user.email, "alice@brownrealty.com");
        assert_eq!(user.password.len(), 8);
    }

    #[tokio::test]
    async fn test_agent_code_pattern() {
        let db = setup_test_db().await;
        let repo = RealtorRepository::new(&db);

        let realtor = repo
            .create_with_user(sample_request("code@brownrealty.com"))
            .await
            .unwrap();

        let code = realtor.agent_code.as_bytes();
        assert_eq!(code.len(), 6);
        assert_eq!(code[0], b'A');
        assert_eq!(code[1], b'B');
        assert!(code[2..].iter().all(|b| b.is_ascii_digit()));
        // The 4-digit suffix never has a leading zero.
        assert_ne!(code[2], b'0');
    }

    #[tokio::test]
    async fn test_duplicate_email_rolls_back_user_write() {
        let db = setup_test_db().await;
        let repo = RealtorRepository::new(&db);

        repo.create_with_user(sample_request("dup@brownrealty.com"))
            .await
            .unwrap();

        let result = repo.create_with_user(sample_request("dup@brownrealty.com")).await;
        assert!(matches!(result, Err(RepositoryError::Conflict(_))));

        // Whatever the failed attempt wrote inside its transaction must be
        // gone; only the first sign-up's user remains.
        let users = User::find()
            .filter(crate::models::user::Column::Email.eq("dup@brownrealty.com"))
            .all(&db)
            .await
            .unwrap();
        assert_eq!(users.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_name_is_validation_error() {
        let db = setup_test_db().await;
        let repo = RealtorRepository::new(&db);

        let mut request = sample_request("noname@brownrealty.com");
        request.first_name = " ".to_string();

        let result = repo.create_with_user(request).await;
        assert!(matches!(result, Err(RepositoryError::Validation(_))));
    }

    #[tokio::test]
    async fn test_set_active_toggles_flag() {
        let db = setup_test_db().await;
        let repo = RealtorRepository::new(&db);

        let realtor = repo
            .create_with_user(sample_request("toggle@brownrealty.com"))
            .await
            .unwrap();

        let deactivated = repo.set_active(realtor.id, false).await.unwrap();
        assert!(!deactivated.is_active);

        let reactivated = repo.set_active(realtor.id, true).await.unwrap();
        assert!(reactivated.is_active);

        let missing = repo.set_active(Uuid::new_v4(), false).await;
        assert!(matches!(missing, Err(RepositoryError::NotFound(_))));
    }
}
