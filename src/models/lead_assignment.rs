//! Lead assignment entity model
//!
//! Join entity recording that a lead was routed to a realtor. The unique
//! index on lead_id keeps a lead from carrying more than one assignment.

use super::lead::Entity as Lead;
use super::realtor::Entity as Realtor;
use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lead_assignments")]
pub struct Model {
    /// Unique identifier for the assignment (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub lead_id: Uuid,

    pub realtor_id: Uuid,

    /// Timestamp when the assignment was made
    pub assigned_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Lead",
        from = "Column::LeadId",
        to = "super::lead::Column::Id"
    )]
    Lead,
    #[sea_orm(
        belongs_to = "Realtor",
        from = "Column::RealtorId",
        to = "super::realtor::Column::Id"
    )]
    Realtor,
}

impl Related<Lead> for Entity {
    fn to() -> RelationDef {
        Relation::Lead.def()
    }
}

impl Related<Realtor> for Entity {
    fn to() -> RelationDef {
        Relation::Realtor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
