use sea_orm::entity::prelude::*;

/// A student or performer.
///
/// `level` holds free text in databases that predate the level enumeration; startup
/// normalization rewrites it to one of `mini`, `junior`, `teen`, `senior`, `elite` and
/// fills `birthdate`, so both are non-null once the database has been bootstrapped.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "dancers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub family_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub level: Option<String>,
    pub birthdate: Option<Date>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::family::Entity",
        from = "Column::FamilyId",
        to = "super::family::Column::Id"
    )]
    Family,
    #[sea_orm(has_many = "super::fee::Entity")]
    Fee,
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transaction,
}

impl Related<super::family::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Family.def()
    }
}

impl Related<super::fee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fee.def()
    }
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
