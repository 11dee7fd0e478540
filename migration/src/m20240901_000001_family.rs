use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Family::Table)
                    .if_not_exists()
                    .col(pk_auto(Family::Id))
                    .col(string(Family::Name))
                    .col(string_null(Family::Email))
                    .col(string_null(Family::Phone))
                    .col(timestamp(Family::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Family::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Family {
    #[sea_orm(iden = "families")]
    Table,
    Id,
    Name,
    Email,
    Phone,
    CreatedAt,
}
