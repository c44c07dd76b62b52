use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// `SERIAL` key, assigned by the store on insert
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Product
impl From<Model> for crate::models::Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
        }
    }
}

// Conversion from the request DTO to an ActiveModel. An unset id stays
// NotSet so the store assigns one on insert.
impl From<crate::models::ProductInput> for ActiveModel {
    fn from(input: crate::models::ProductInput) -> Self {
        ActiveModel {
            id: match input.id {
                Some(id) => Set(id),
                None => NotSet,
            },
            name: Set(input.name),
            description: Set(input.description),
            price: Set(input.price),
        }
    }
}
