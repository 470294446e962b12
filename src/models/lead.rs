//! Lead entity model
//!
//! This module contains the SeaORM entity model for the leads table, the
//! central record moved through the qualification and routing lifecycle.

use super::realtor::Entity as Realtor;
use super::user::Entity as User;
use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use uuid::Uuid;

use crate::lifecycle::LeadStatus;

/// Lead entity representing a submitted customer prospect
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "leads")]
pub struct Model {
    /// Unique identifier for the lead (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub customer_first_name: String,

    pub customer_last_name: String,

    pub phone_number: String,

    pub email_address: String,

    pub property_address: String,

    pub city: String,

    pub state: String,

    pub zipcode: String,

    /// Form answer, "Yes"/"No" as submitted
    pub home_owner: String,

    /// Estimated property value as submitted by the form
    pub property_value: String,

    /// Form answer, "Yes"/"No" as submitted
    pub contract_with_realtor: String,

    /// Lifecycle status; every change goes through the transition table
    pub status: LeadStatus,

    /// QA call recording reference, attached during review
    pub recording: Option<String>,

    /// Realtor the lead is currently assigned to, if any
    pub assigned_to_id: Option<Uuid>,

    /// User who submitted the lead
    pub submitted_by_id: Uuid,

    /// Timestamp when the lead was submitted
    pub submission_date: DateTimeWithTimeZone,

    /// Timestamp of the last status or assignment change
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "User",
        from = "Column::SubmittedById",
        to = "super::user::Column::Id"
    )]
    SubmittedBy,
    #[sea_orm(
        belongs_to = "Realtor",
        from = "Column::AssignedToId",
        to = "super::realtor::Column::Id"
    )]
    AssignedTo,
}

impl Related<User> for Entity {
    fn to() -> RelationDef {
        Relation::SubmittedBy.def()
    }
}

impl Related<Realtor> for Entity {
    fn to() -> RelationDef {
        Relation::AssignedTo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
