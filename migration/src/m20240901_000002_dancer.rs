use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240901_000001_family::Family;

static FK_DANCER_FAMILY_ID: &str = "fk-dancers-family_id";
static IDX_DANCER_FAMILY_ID: &str = "idx-dancers-family_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dancer::Table)
                    .if_not_exists()
                    .col(pk_auto(Dancer::Id))
                    .col(integer_null(Dancer::FamilyId))
                    .col(string(Dancer::FirstName))
                    .col(string(Dancer::LastName))
                    .col(integer(Dancer::Age).default(0))
                    .col(timestamp(Dancer::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DANCER_FAMILY_ID)
                            .from(Dancer::Table, Dancer::FamilyId)
                            .to(Family::Table, Family::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DANCER_FAMILY_ID)
                    .table(Dancer::Table)
                    .col(Dancer::FamilyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DANCER_FAMILY_ID)
                    .table(Dancer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Dancer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Dancer {
    #[sea_orm(iden = "dancers")]
    Table,
    Id,
    FamilyId,
    FirstName,
    LastName,
    Age,
    CreatedAt,
}
