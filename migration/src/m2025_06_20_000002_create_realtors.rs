//! Migration to create the realtors table.
//!
//! Realtor profiles are created by the sales sign-up flow together with a
//! linked user row; the one-to-one link is enforced with a unique index on
//! user_id.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Realtors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Realtors::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Realtors::FirstName).text().not_null())
                    .col(ColumnDef::new(Realtors::LastName).text().not_null())
                    .col(ColumnDef::new(Realtors::PhoneNumber).text().not_null())
                    .col(ColumnDef::new(Realtors::Email).text().not_null())
                    .col(ColumnDef::new(Realtors::Brokerage).text().not_null())
                    .col(ColumnDef::new(Realtors::State).text().not_null())
                    .col(ColumnDef::new(Realtors::CentralZipCode).text().not_null())
                    .col(ColumnDef::new(Realtors::Radius).integer().not_null())
                    .col(ColumnDef::new(Realtors::SignUpCategory).text().not_null())
                    .col(
                        ColumnDef::new(Realtors::TotalTeamMembers)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Realtors::AgentCode).text().not_null())
                    .col(
                        ColumnDef::new(Realtors::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Realtors::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Realtors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_realtors_user_id")
                            .from(Realtors::Table, Realtors::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_realtors_email")
                    .table(Realtors::Table)
                    .col(Realtors::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_realtors_user_id")
                    .table(Realtors::Table)
                    .col(Realtors::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_realtors_email").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_realtors_user_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Realtors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Realtors {
    Table,
    Id,
    FirstName,
    LastName,
    PhoneNumber,
    Email,
    Brokerage,
    State,
    CentralZipCode,
    Radius,
    SignUpCategory,
    TotalTeamMembers,
    AgentCode,
    IsActive,
    UserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
