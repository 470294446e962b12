//! Migration to create the leads table.
//!
//! Leads hold customer contact and property fields, the lifecycle status,
//! and references to the submitting user and (once routed) the assigned
//! realtor.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Leads::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Leads::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Leads::CustomerFirstName)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Leads::CustomerLastName).text().not_null())
                    .col(ColumnDef::new(Leads::PhoneNumber).text().not_null())
                    .col(ColumnDef::new(Leads::EmailAddress).text().not_null())
                    .col(ColumnDef::new(Leads::PropertyAddress).text().not_null())
                    .col(ColumnDef::new(Leads::City).text().not_null())
                    .col(ColumnDef::new(Leads::State).text().not_null())
                    .col(ColumnDef::new(Leads::Zipcode).text().not_null())
                    .col(ColumnDef::new(Leads::HomeOwner).text().not_null())
                    .col(ColumnDef::new(Leads::PropertyValue).text().not_null())
                    .col(
                        ColumnDef::new(Leads::ContractWithRealtor)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Leads::Status)
                            .text()
                            .not_null()
                            .default("SUBMITTED"),
                    )
                    .col(ColumnDef::new(Leads::Recording).text().null())
                    .col(ColumnDef::new(Leads::AssignedToId).uuid().null())
                    .col(ColumnDef::new(Leads::SubmittedById).uuid().not_null())
                    .col(
                        ColumnDef::new(Leads::SubmissionDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Leads::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leads_submitted_by_id")
                            .from(Leads::Table, Leads::SubmittedById)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leads_assigned_to_id")
                            .from(Leads::Table, Leads::AssignedToId)
                            .to(Realtors::Table, Realtors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_leads_submitted_by_id")
                    .table(Leads::Table)
                    .col(Leads::SubmittedById)
                    .to_owned(),
            )
            .await?;

        // Serves the available-pool query (status = ACCEPTED, unassigned).
        manager
            .create_index(
                Index::create()
                    .name("idx_leads_status_assigned_to_id")
                    .table(Leads::Table)
                    .col(Leads::Status)
                    .col(Leads::AssignedToId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_leads_submitted_by_id").to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_leads_status_assigned_to_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Leads::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Leads {
    Table,
    Id,
    CustomerFirstName,
    CustomerLastName,
    PhoneNumber,
    EmailAddress,
    PropertyAddress,
    City,
    State,
    Zipcode,
    HomeOwner,
    PropertyValue,
    ContractWithRealtor,
    Status,
    Recording,
    AssignedToId,
    SubmittedById,
    SubmissionDate,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Realtors {
    Table,
    Id,
}
