//! Migration to create the lead_assignments table.
//!
//! The unique index on lead_id enforces the at-most-one-active-assignment
//! invariant at the storage layer; concurrent assignment attempts for the
//! same lead fail here even if both passed the in-transaction status check.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeadAssignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LeadAssignments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LeadAssignments::LeadId).uuid().not_null())
                    .col(
                        ColumnDef::new(LeadAssignments::RealtorId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LeadAssignments::AssignedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lead_assignments_lead_id")
                            .from(LeadAssignments::Table, LeadAssignments::LeadId)
                            .to(Leads::Table, Leads::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lead_assignments_realtor_id")
                            .from(LeadAssignments::Table, LeadAssignments::RealtorId)
                            .to(Realtors::Table, Realtors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lead_assignments_lead_id")
                    .table(LeadAssignments::Table)
                    .col(LeadAssignments::LeadId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lead_assignments_realtor_id")
                    .table(LeadAssignments::Table)
                    .col(LeadAssignments::RealtorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_lead_assignments_lead_id").to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_lead_assignments_realtor_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LeadAssignments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LeadAssignments {
    Table,
    Id,
    LeadId,
    RealtorId,
    AssignedAt,
}

#[derive(DeriveIden)]
enum Leads {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Realtors {
    Table,
    Id,
}
