//! Add status log table for machine status tracking

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create the table first
        manager
            .create_table(
                Table::create()
                    .table(StatusLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StatusLogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StatusLogs::MachineId).integer().not_null())
                    .col(ColumnDef::new(StatusLogs::Status).string().not_null())
                    .col(
                        ColumnDef::new(StatusLogs::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StatusLogs::Table, StatusLogs::MachineId)
                            .to(Machines::Table, Machines::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes separately
        manager
            .create_index(
                Index::create()
                    .name("idx_status_logs_machine_id")
                    .table(StatusLogs::Table)
                    .col(StatusLogs::MachineId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_status_logs_timestamp")
                    .table(StatusLogs::Table)
                    .col(StatusLogs::Timestamp)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StatusLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum StatusLogs {
    Table,
    Id,
    MachineId,
    Status,
    Timestamp,
}

#[derive(DeriveIden)]
enum Machines {
    Table,
    Id,
}
