use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, validate};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,
    pub surname: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    /// argon2 PHC string; never leaves the process.
    #[serde(skip_serializing)]
    pub password: String,
    pub phone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub surname: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
}

impl NewUser {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validate::required_len("surname", &self.surname, 255)?;
        validate::required_len("name", &self.name, 255)?;
        validate::required_len("email", &self.email, 254)?;
        if !self.email.contains('@') {
            return Err(errors::ModelError::Validation("invalid email".into()));
        }
        validate::required_len("password", &self.password_hash, 128)?;
        if let Some(phone) = &self.phone {
            validate::max_len("phone", phone, 20)?;
        }
        Ok(())
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewUser) -> Result<Model, errors::ModelError> {
    new.validate()?;
    let am = ActiveModel {
        surname: Set(new.surname),
        name: Set(new.name),
        email: Set(new.email),
        password: Set(new.password_hash),
        phone: Set(new.phone),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewUser {
        NewUser {
            surname: "Shevchenko".into(),
            name: "Taras".into(),
            email: "taras@example.com".into(),
            password_hash: "$argon2id$v=19$placeholder".into(),
            phone: Some("+380501234567".into()),
        }
    }

    #[test]
    fn accepts_well_formed_user() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn rejects_email_without_at() {
        let u = NewUser { email: "nobody".into(), ..sample() };
        assert!(matches!(u.validate(), Err(errors::ModelError::Validation(_))));
    }

    #[test]
    fn rejects_long_phone() {
        let u = NewUser { phone: Some("1".repeat(21)), ..sample() };
        assert!(u.validate().is_err());
    }

    #[test]
    fn password_is_not_serialized() {
        let m = Model {
            user_id: 1,
            surname: "A".into(),
            name: "B".into(),
            email: "a@b.c".into(),
            password: "secret-hash".into(),
            phone: None,
        };
        let v = serde_json::to_value(&m).unwrap();
        assert!(v.get("password").is_none());
        assert_eq!(v["user_id"], 1);
    }
}
