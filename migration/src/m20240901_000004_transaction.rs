use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240901_000002_dancer::Dancer;

static FK_TRANSACTION_DANCER_ID: &str = "fk-transactions-dancer_id";
static IDX_TRANSACTION_DANCER_ID: &str = "idx-transactions-dancer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transaction::Table)
                    .if_not_exists()
                    .col(pk_auto(Transaction::Id))
                    .col(integer(Transaction::DancerId))
                    .col(date(Transaction::Date))
                    .col(string(Transaction::Type))
                    .col(double(Transaction::Amount))
                    .col(text_null(Transaction::Description))
                    .col(timestamp(Transaction::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRANSACTION_DANCER_ID)
                            .from(Transaction::Table, Transaction::DancerId)
                            .to(Dancer::Table, Dancer::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TRANSACTION_DANCER_ID)
                    .table(Transaction::Table)
                    .col(Transaction::DancerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TRANSACTION_DANCER_ID)
                    .table(Transaction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Transaction::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Transaction {
    #[sea_orm(iden = "transactions")]
    Table,
    Id,
    DancerId,
    Date,
    Type,
    Amount,
    Description,
    CreatedAt,
}
