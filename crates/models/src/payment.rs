use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{booking, errors, validate};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub payment_id: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub amount: Decimal,
    pub date: DateTimeWithTimeZone,
    pub payment_method: String,
    pub booking_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Booking }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Booking => Entity::belongs_to(booking::Entity)
                .from(Column::BookingId)
                .to(booking::Column::BookingId)
                .into(),
        }
    }
}

impl Related<booking::Entity> for Entity {
    fn to() -> RelationDef { Relation::Booking.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone)]
pub struct NewPayment {
    pub booking_id: i32,
    pub amount: Decimal,
    pub payment_method: String,
}

impl NewPayment {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validate::money("amount", &self.amount)?;
        validate::required_len("payment_method", &self.payment_method, 255)
    }
}

/// Records a payment dated now. Validation runs here, so callers inside a
/// transaction see the failure after any earlier inserts.
pub async fn create<C: ConnectionTrait>(db: &C, new: NewPayment) -> Result<Model, errors::ModelError> {
    new.validate()?;
    let am = ActiveModel {
        amount: Set(new.amount),
        date: Set(Utc::now().into()),
        payment_method: Set(new.payment_method),
        booking_id: Set(new.booking_id),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
