use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, room, user};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub booking_id: i32,
    pub booking_date: DateTimeWithTimeZone,
    pub check_in_date: DateTimeWithTimeZone,
    pub check_out_date: DateTimeWithTimeZone,
    pub user_id: i32,
    pub room_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Room,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity).from(Column::UserId).to(user::Column::UserId).into(),
            Relation::Room => Entity::belongs_to(room::Entity).from(Column::RoomId).to(room::Column::RoomId).into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<room::Entity> for Entity {
    fn to() -> RelationDef { Relation::Room.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone)]
pub struct NewBooking {
    pub user_id: i32,
    pub room_id: i32,
    pub check_in_date: DateTimeWithTimeZone,
    pub check_out_date: DateTimeWithTimeZone,
}

/// Inserts a booking stamped with the current time. Stay dates are stored as
/// given; their ordering is not checked.
pub async fn create<C: ConnectionTrait>(db: &C, new: NewBooking) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        booking_date: Set(Utc::now().into()),
        check_in_date: Set(new.check_in_date),
        check_out_date: Set(new.check_out_date),
        user_id: Set(new.user_id),
        room_id: Set(new.room_id),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
