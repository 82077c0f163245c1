use std::str::FromStr;

use anyhow::Result;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter};

use super::{setup_test_db, unique};
use crate::{booking, booking_service, discount, discount_service, hotel_service, payment, review, room, user};

async fn seed_user(db: &DatabaseConnection) -> Result<user::Model> {
    Ok(user::create(
        db,
        user::NewUser {
            surname: "Kovalenko".into(),
            name: "Olena".into(),
            email: format!("{}@example.com", unique("guest")),
            password_hash: "$argon2id$v=19$test".into(),
            phone: None,
        },
    )
    .await?)
}

async fn seed_room(db: &DatabaseConnection, availability: i32) -> Result<room::Model> {
    Ok(room::create(
        db,
        room::NewRoom {
            room_number: unique("r"),
            room_type: "double".into(),
            price: Decimal::from_str("150.00")?,
            availability,
        },
    )
    .await?)
}

#[tokio::test]
async fn test_user_room_booking_crud() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let u = seed_user(&db).await?;
    let r = seed_room(&db, 3).await?;
    let b = booking::create(
        &db,
        booking::NewBooking {
            user_id: u.user_id,
            room_id: r.room_id,
            check_in_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap().into(),
            check_out_date: Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap().into(),
        },
    )
    .await?;

    let found = booking::Entity::find_by_id(b.booking_id).one(&db).await?.expect("booking");
    assert_eq!(found.user_id, u.user_id);
    assert_eq!(found.room_id, r.room_id);

    let by_email = user::Entity::find().filter(user::Column::Email.eq(u.email.clone())).one(&db).await?;
    assert_eq!(by_email.map(|x| x.user_id), Some(u.user_id));

    // Deleting the user cascades to the booking
    u.delete(&db).await?;
    assert!(booking::Entity::find_by_id(b.booking_id).one(&db).await?.is_none());
    room::Entity::delete_by_id(r.room_id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_duplicate_email_is_db_error() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let u = seed_user(&db).await?;
    let dup = user::create(
        &db,
        user::NewUser {
            surname: "X".into(),
            name: "Y".into(),
            email: u.email.clone(),
            password_hash: "hash".into(),
            phone: None,
        },
    )
    .await;
    assert!(matches!(dup, Err(crate::errors::ModelError::Db(_))));
    user::Entity::delete_by_id(u.user_id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_payment_line_items_and_review() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let u = seed_user(&db).await?;
    let r = seed_room(&db, 1).await?;
    let now = Utc::now();
    let b = booking::create(
        &db,
        booking::NewBooking { user_id: u.user_id, room_id: r.room_id, check_in_date: now.into(), check_out_date: now.into() },
    )
    .await?;
    let p = payment::create(
        &db,
        payment::NewPayment { booking_id: b.booking_id, amount: Decimal::from_str("99.99")?, payment_method: "cash".into() },
    )
    .await?;
    assert_eq!(p.amount, Decimal::from_str("99.99")?);

    let s = hotel_service::create(
        &db,
        hotel_service::NewService { name: unique("spa"), description: "Spa access".into(), price: Decimal::from_str("20.00")? },
    )
    .await?;
    let li = booking_service::create(
        &db,
        booking_service::NewBookingService { booking_id: b.booking_id, service_id: s.service_id, quantity: 2, date_time: None },
    )
    .await?;
    assert_eq!(li.quantity, 2);

    let rv = review::create(&db, review::NewReview { rating: 4.5, user_id: u.user_id, booking_id: b.booking_id }).await?;
    assert_eq!(rv.rating, 4.5);

    user::Entity::delete_by_id(u.user_id).exec(&db).await?;
    assert!(payment::Entity::find_by_id(p.payment_id).one(&db).await?.is_none());
    assert!(booking_service::Entity::find_by_id(li.booking_service_id).one(&db).await?.is_none());
    hotel_service::Entity::delete_by_id(s.service_id).exec(&db).await?;
    room::Entity::delete_by_id(r.room_id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_discount_links_services_once() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let d = discount::create(
        &db,
        discount::NewDiscount { name: unique("winter"), description: "Winter deal".into(), percentage: 15.0 },
    )
    .await?;
    let new_service = hotel_service::NewService {
        name: unique("breakfast"),
        description: "Buffet".into(),
        price: Decimal::from_str("12.50")?,
    };
    let s1 = hotel_service::get_or_create(&db, new_service.clone()).await?;
    let s2 = hotel_service::get_or_create(&db, new_service).await?;
    assert_eq!(s1.service_id, s2.service_id);

    discount_service::link(&db, d.discount_id, s1.service_id).await?;
    discount_service::link(&db, d.discount_id, s2.service_id).await?;
    let linked = d.find_related(hotel_service::Entity).all(&db).await?;
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].service_id, s1.service_id);

    discount::Entity::delete_by_id(d.discount_id).exec(&db).await?;
    hotel_service::Entity::delete_by_id(s1.service_id).exec(&db).await?;
    Ok(())
}
