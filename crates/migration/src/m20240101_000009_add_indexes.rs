use sea_orm_migration::prelude::*;

const INDEXES: &[(&str, Tbl, Col)] = &[
    ("idx_user_surname", Tbl::User, Col::Surname),
    ("idx_user_name", Tbl::User, Col::Name),
    ("idx_room_type", Tbl::Room, Col::RoomType),
    ("idx_booking_date", Tbl::Booking, Col::BookingDate),
    ("idx_booking_check_in", Tbl::Booking, Col::CheckInDate),
    ("idx_booking_check_out", Tbl::Booking, Col::CheckOutDate),
    ("idx_booking_user", Tbl::Booking, Col::UserId),
    ("idx_booking_room", Tbl::Booking, Col::RoomId),
    ("idx_payment_booking", Tbl::Payment, Col::BookingId),
    ("idx_booking_service_booking", Tbl::BookingService, Col::BookingId),
    ("idx_booking_service_service", Tbl::BookingService, Col::ServiceId),
    ("idx_discount_name", Tbl::Discount, Col::Name),
    ("idx_review_user", Tbl::Review, Col::UserId),
    ("idx_review_booking", Tbl::Review, Col::BookingId),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Single-column lookups used by list filters and FK joins
        for (name, table, col) in INDEXES {
            manager
                .create_index(
                    Index::create()
                        .name(*name)
                        .table(*table)
                        .col(*col)
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, _) in INDEXES.iter().rev() {
            manager
                .drop_index(Index::drop().name(*name).table(*table).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum Tbl {
    #[sea_orm(iden = "user")]
    User,
    #[sea_orm(iden = "room")]
    Room,
    #[sea_orm(iden = "booking")]
    Booking,
    #[sea_orm(iden = "payment")]
    Payment,
    #[sea_orm(iden = "booking_service")]
    BookingService,
    #[sea_orm(iden = "discount")]
    Discount,
    #[sea_orm(iden = "review")]
    Review,
}

#[derive(DeriveIden, Clone, Copy)]
enum Col {
    Surname,
    Name,
    RoomType,
    BookingDate,
    CheckInDate,
    CheckOutDate,
    UserId,
    RoomId,
    BookingId,
    ServiceId,
}
