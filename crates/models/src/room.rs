use rust_decimal::Decimal;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, validate};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "room")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub room_id: i32,
    #[sea_orm(unique)]
    pub room_number: String,
    pub room_type: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    /// Signed counter; bulk adjustments may take it below zero.
    pub availability: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Deserialize)]
pub struct NewRoom {
    pub room_number: String,
    pub room_type: String,
    pub price: Decimal,
    pub availability: i32,
}

impl NewRoom {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validate::required_len("room_number", &self.room_number, 50)?;
        validate::required_len("room_type", &self.room_type, 50)?;
        validate::non_negative_money("price", &self.price)
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewRoom) -> Result<Model, errors::ModelError> {
    new.validate()?;
    let am = ActiveModel {
        room_number: Set(new.room_number),
        room_type: Set(new.room_type),
        price: Set(new.price),
        availability: Set(new.availability),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn room_number_length_is_bounded() {
        let r = NewRoom {
            room_number: "x".repeat(51),
            room_type: "suite".into(),
            price: Decimal::from_str("120.00").unwrap(),
            availability: 1,
        };
        assert!(r.validate().is_err());
    }

    #[test]
    fn price_serializes_as_string() {
        let m = Model {
            room_id: 2,
            room_number: "101".into(),
            room_type: "double".into(),
            price: Decimal::from_str("150.00").unwrap(),
            availability: -1,
        };
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["price"], "150.00");
        assert_eq!(v["availability"], -1);
    }
}
