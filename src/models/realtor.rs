//! Realtor entity model
//!
//! This module contains the SeaORM entity model for the realtors table,
//! which stores realtor profiles created by the sales sign-up flow.

use super::user::Entity as User;
use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use uuid::Uuid;

/// Realtor entity representing a sales professional who may claim leads
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "realtors")]
pub struct Model {
    /// Unique identifier for the realtor (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub first_name: String,

    pub last_name: String,

    pub phone_number: String,

    /// Contact email (unique, shared with the linked user)
    pub email: String,

    pub brokerage: String,

    pub state: String,

    /// Center of the realtor's service area
    pub central_zip_code: String,

    /// Service radius in miles around the central zipcode
    pub radius: i32,

    pub sign_up_category: String,

    pub total_team_members: i32,

    /// Generated short identifier, initials plus a 4-digit suffix
    pub agent_code: String,

    /// Whether the realtor may currently receive assignments
    pub is_active: bool,

    /// Linked login user (one-to-one)
    pub user_id: Uuid,

    /// Timestamp when the realtor signed up
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "User",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<User> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
