use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{discount_service, errors, hotel_service, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "discount")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub discount_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Double")]
    pub percentage: f64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { DiscountService }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::DiscountService => Entity::has_many(discount_service::Entity).into(),
        }
    }
}

// Many-to-many through `discount_service`.
impl Related<hotel_service::Entity> for Entity {
    fn to() -> RelationDef { discount_service::Relation::Service.def() }
    fn via() -> Option<RelationDef> { Some(discount_service::Relation::Discount.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone)]
pub struct NewDiscount {
    pub name: String,
    pub description: String,
    pub percentage: f64,
}

impl NewDiscount {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validate::required_len("name", &self.name, 255)?;
        validate::within("percentage", self.percentage, 0.0, 100.0)
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewDiscount) -> Result<Model, errors::ModelError> {
    new.validate()?;
    let am = ActiveModel {
        name: Set(new.name),
        description: Set(new.description),
        percentage: Set(new.percentage),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
