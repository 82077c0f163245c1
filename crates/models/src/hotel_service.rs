//! Billable extras (breakfast, spa, parking). Table `service`.
use rust_decimal::Decimal;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, validate};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub service_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewService {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
}

impl NewService {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validate::required_len("name", &self.name, 255)?;
        validate::non_negative_money("price", &self.price)
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewService) -> Result<Model, errors::ModelError> {
    new.validate()?;
    let am = ActiveModel {
        name: Set(new.name),
        description: Set(new.description),
        price: Set(new.price),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Returns the first service with exactly these fields, creating it when absent.
pub async fn get_or_create<C: ConnectionTrait>(db: &C, new: NewService) -> Result<Model, errors::ModelError> {
    new.validate()?;
    let existing = Entity::find()
        .filter(Column::Name.eq(new.name.clone()))
        .filter(Column::Description.eq(new.description.clone()))
        .filter(Column::Price.eq(new.price))
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    match existing {
        Some(found) => Ok(found),
        None => create(db, new).await,
    }
}
