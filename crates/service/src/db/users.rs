use argon2::{password_hash::{PasswordHasher, SaltString}, Argon2};
use common::pagination::Pagination;
use models::user;
use rand::rngs::OsRng;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use tracing::info;

use super::{db_err, fetch, icontains};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub surname: String,
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// `GET /users` filters: id and email match exactly, names by substring.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserFilter {
    pub user_id: Option<i32>,
    pub email: Option<String>,
    pub surname: Option<String>,
    pub name: Option<String>,
}

fn hash_password(password: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ServiceError::Validation(format!("password could not be hashed: {}", e)))?
        .to_string())
}

pub async fn create_user(db: &DatabaseConnection, input: CreateUser) -> Result<user::Model, ServiceError> {
    if input.password.is_empty() {
        return Err(ServiceError::Validation("password is required".into()));
    }
    let password_hash = hash_password(&input.password)?;
    let created = user::create(
        db,
        user::NewUser {
            surname: input.surname,
            name: input.name,
            email: input.email,
            password_hash,
            phone: input.phone,
        },
    )
    .await?;
    info!(user_id = created.user_id, "user_created");
    Ok(created)
}

pub async fn get_user(db: &DatabaseConnection, id: i32) -> Result<user::Model, ServiceError> {
    user::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("User"))
}

pub async fn delete_user(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = user::Entity::delete_by_id(id).exec(db).await.map_err(db_err)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("User"));
    }
    Ok(())
}

pub async fn list_users(
    db: &DatabaseConnection,
    filter: &UserFilter,
    page: Option<Pagination>,
) -> Result<Vec<user::Model>, ServiceError> {
    let mut q = user::Entity::find().order_by_asc(user::Column::UserId);
    if let Some(id) = filter.user_id {
        q = q.filter(user::Column::UserId.eq(id));
    }
    if let Some(email) = &filter.email {
        q = q.filter(user::Column::Email.eq(email.clone()));
    }
    if let Some(surname) = &filter.surname {
        q = q.filter(icontains(user::Column::Surname, surname));
    }
    if let Some(name) = &filter.name {
        q = q.filter(icontains(user::Column::Name, name));
    }
    fetch(db, q, page).await
}
