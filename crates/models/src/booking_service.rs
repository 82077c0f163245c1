use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{booking, errors, hotel_service};

/// A service line item attached to a booking.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booking_service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub booking_service_id: i32,
    pub booking_id: i32,
    pub service_id: i32,
    pub quantity: i32,
    pub date_time: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Booking,
    Service,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Booking => Entity::belongs_to(booking::Entity)
                .from(Column::BookingId)
                .to(booking::Column::BookingId)
                .into(),
            Relation::Service => Entity::belongs_to(hotel_service::Entity)
                .from(Column::ServiceId)
                .to(hotel_service::Column::ServiceId)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone)]
pub struct NewBookingService {
    pub booking_id: i32,
    pub service_id: i32,
    pub quantity: i32,
    pub date_time: Option<DateTimeWithTimeZone>,
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewBookingService) -> Result<Model, errors::ModelError> {
    if new.quantity < 1 {
        return Err(errors::ModelError::Validation("quantity must be at least 1".into()));
    }
    let am = ActiveModel {
        booking_id: Set(new.booking_id),
        service_id: Set(new.service_id),
        quantity: Set(new.quantity),
        date_time: Set(new.date_time.unwrap_or_else(|| Utc::now().into())),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
