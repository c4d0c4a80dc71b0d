//! Contact database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Contact;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contact")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// varchar(1000) in the schema
    pub message: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Contact {
    fn from(model: Model) -> Self {
        Contact {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            message: model.message,
        }
    }
}
