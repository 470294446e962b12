//! User entity model
//!
//! This module contains the SeaORM entity model for the users table, which
//! stores identity and the role scoping each API surface.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role a user acts under.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    #[sea_orm(string_value = "SUPER_ADMIN")]
    SuperAdmin,
    #[sea_orm(string_value = "QA")]
    Qa,
    #[sea_orm(string_value = "SUPPORT")]
    Support,
    #[sea_orm(string_value = "SALES")]
    Sales,
    #[sea_orm(string_value = "REALTOR")]
    Realtor,
}

/// User entity representing an identity with a role
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Login email (unique)
    pub email: String,

    /// Password as provisioned (temporary for realtor sign-ups)
    pub password: String,

    /// Role scoping which API surface this user acts on
    pub role: UserRole,

    /// Timestamp when the user was created
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
