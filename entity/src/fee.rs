use sea_orm::entity::prelude::*;

/// Legacy charge/payment record, read only as the source of the transaction ledger.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub dancer_id: i32,
    pub r#type: String,
    #[sea_orm(column_type = "Double", nullable)]
    pub amount: Option<f64>,
    pub due_date: Option<String>,
    pub paid: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dancer::Entity",
        from = "Column::DancerId",
        to = "super::dancer::Column::Id"
    )]
    Dancer,
}

impl Related<super::dancer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dancer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
