//! User seeding functionality
//!
//! This module provides functionality to seed the users table with one
//! bootstrap user per back-office role, so the intake, QA and support
//! flows are exercisable on a fresh local database.

use anyhow::Result;
use sea_orm::DatabaseConnection;

use crate::models::user::UserRole;
use crate::repositories::{CreateUserRequest, UserRepository};

/// Seeds the users table with one bootstrap user per role.
///
/// Existing users are left untouched, so running this repeatedly is safe.
pub async fn seed_users(db: &DatabaseConnection) -> Result<()> {
    let repo = UserRepository::new(db);

    let bootstrap = vec![
        ("admin@leadgen.local", UserRole::Admin),
        ("superadmin@leadgen.local", UserRole::SuperAdmin),
        ("qa@leadgen.local", UserRole::Qa),
        ("support@leadgen.local", UserRole::Support),
        ("sales@leadgen.local", UserRole::Sales),
    ];

    for (email, role) in bootstrap {
        match repo.find_by_email(email).await {
            Ok(Some(_)) => {
                log::info!("Bootstrap user '{}' already exists, skipping", email);
                continue;
            }
            Ok(None) => {
                log::info!("Creating bootstrap user: {}", email);

                match repo
                    .create_user(CreateUserRequest {
                        email: email.to_string(),
                        password: "changeme".to_string(),
                        role,
                    })
                    .await
                {
                    Ok(_) => {
                        log::info!("Successfully created bootstrap user: {}", email);
                    }
                    Err(err) => {
                        log::error!("Failed to create bootstrap user {}: {}", email, err);
                        return Err(err.into());
                    }
                }
            }
            Err(err) => {
                log::error!("Failed to look up bootstrap user {}: {}", email, err);
                return Err(err.into());
            }
        }
    }

    Ok(())
}
