//! Join rows linking discounts to the services they apply to.
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{discount, errors, hotel_service};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "discount_service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub discount_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub service_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Discount,
    Service,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Discount => Entity::belongs_to(discount::Entity)
                .from(Column::DiscountId)
                .to(discount::Column::DiscountId)
                .into(),
            Relation::Service => Entity::belongs_to(hotel_service::Entity)
                .from(Column::ServiceId)
                .to(hotel_service::Column::ServiceId)
                .into(),
        }
    }
}

impl Related<discount::Entity> for Entity {
    fn to() -> RelationDef { Relation::Discount.def() }
}

impl Related<hotel_service::Entity> for Entity {
    fn to() -> RelationDef { Relation::Service.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Links a service to a discount; linking the same pair twice is a no-op.
pub async fn link<C: ConnectionTrait>(db: &C, discount_id: i32, service_id: i32) -> Result<(), errors::ModelError> {
    let exists = Entity::find_by_id((discount_id, service_id))
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    if exists.is_some() {
        return Ok(());
    }
    let am = ActiveModel { discount_id: Set(discount_id), service_id: Set(service_id) };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}
