use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{booking, errors, user, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "review")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub review_id: i32,
    #[sea_orm(column_type = "Double")]
    pub rating: f64,
    pub user_id: i32,
    pub booking_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Booking,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::UserId).into(),
            Relation::Booking => Entity::belongs_to(booking::Entity)
                .from(Column::BookingId)
                .to(booking::Column::BookingId)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub rating: f64,
    pub user_id: i32,
    pub booking_id: i32,
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewReview) -> Result<Model, errors::ModelError> {
    validate::within("rating", new.rating, 0.0, 5.0)?;
    let am = ActiveModel {
        rating: Set(new.rating),
        user_id: Set(new.user_id),
        booking_id: Set(new.booking_id),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
