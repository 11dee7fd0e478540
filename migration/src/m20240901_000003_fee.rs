use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240901_000002_dancer::Dancer;

static FK_FEE_DANCER_ID: &str = "fk-fees-dancer_id";
static IDX_FEE_DANCER_ID: &str = "idx-fees-dancer_id";

/// Legacy fee records. Later replaced by the `transactions` ledger but kept as the
/// source the ledger is backfilled from.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Fee::Table)
                    .if_not_exists()
                    .col(pk_auto(Fee::Id))
                    .col(integer(Fee::DancerId))
                    .col(string(Fee::Type))
                    .col(double_null(Fee::Amount))
                    .col(string_null(Fee::DueDate))
                    .col(boolean(Fee::Paid).default(false))
                    .col(timestamp(Fee::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FEE_DANCER_ID)
                            .from(Fee::Table, Fee::DancerId)
                            .to(Dancer::Table, Dancer::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FEE_DANCER_ID)
                    .table(Fee::Table)
                    .col(Fee::DancerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FEE_DANCER_ID)
                    .table(Fee::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Fee::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Fee {
    #[sea_orm(iden = "fees")]
    Table,
    Id,
    DancerId,
    Type,
    Amount,
    DueDate,
    Paid,
    CreatedAt,
}
