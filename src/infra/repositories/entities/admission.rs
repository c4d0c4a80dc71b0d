//! Admission database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Admission;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "admission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub full_name: Option<String>,
    pub class_applying: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub message: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Admission {
    fn from(model: Model) -> Self {
        Admission {
            id: model.id,
            full_name: model.full_name,
            class_applying: model.class_applying,
            email: model.email,
            phone: model.phone,
            address: model.address,
            message: model.message,
        }
    }
}
