//! User entity for database

use sea_orm::entity::prelude::*;

use crate::domain::User;

/// Row of the `users` table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    pub name: String,
    pub surname: String,
    #[sea_orm(unique)]
    pub email: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            user_id: model.user_id,
            name: model.name,
            surname: model.surname,
            email: model.email,
            is_active: model.is_active,
        }
    }
}
