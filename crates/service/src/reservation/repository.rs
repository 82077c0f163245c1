use async_trait::async_trait;

use super::domain::{BookingDraft, BookingReceipt, PaymentDraft};
use crate::errors::ServiceError;

/// Persistence needed by the reservation workflows.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Inserts the booking, then its payment, as one all-or-nothing unit.
    async fn create_booking_with_payment(&self, booking: BookingDraft, payment: PaymentDraft) -> Result<BookingReceipt, ServiceError>;

    async fn count_booking_services(&self, booking_id: i32) -> Result<i64, ServiceError>;

    /// `availability = availability - by` on every room; returns rows touched.
    async fn decrement_all_rooms(&self, by: i64) -> Result<u64, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::{BTreeMap, BTreeSet, HashMap};
    use std::sync::{Mutex, MutexGuard};

    use chrono::Utc;
    use models::payment::NewPayment;
    use rust_decimal::Decimal;

    #[derive(Default)]
    struct Tables {
        users: BTreeSet<i32>,
        rooms: BTreeMap<i32, i32>,              // room_id -> availability
        bookings: BTreeMap<i32, (i32, i32)>,    // booking_id -> (user_id, room_id)
        payments: BTreeMap<i32, (i32, Decimal)>, // payment_id -> (booking_id, amount)
        line_items: HashMap<i32, i64>,          // booking_id -> booking_service rows
        next_booking: i32,
        next_payment: i32,
    }

    #[derive(Default)]
    pub struct MockReservationRepository {
        tables: Mutex<Tables>,
    }

    impl MockReservationRepository {
        pub fn with_user(self, user_id: i32) -> Self {
            self.lock().users.insert(user_id);
            self
        }

        pub fn with_room(self, room_id: i32, availability: i32) -> Self {
            self.lock().rooms.insert(room_id, availability);
            self
        }

        /// Pretends `count` booking-service rows exist for `booking_id`.
        pub fn with_line_items(self, booking_id: i32, count: i64) -> Self {
            self.lock().line_items.insert(booking_id, count);
            self
        }

        pub fn availability(&self, room_id: i32) -> Option<i32> {
            self.lock().rooms.get(&room_id).copied()
        }

        pub fn booking_count(&self) -> usize {
            self.lock().bookings.len()
        }

        pub fn payment_count(&self) -> usize {
            self.lock().payments.len()
        }

        /// Booking id the given payment references.
        pub fn payment_booking(&self, payment_id: i32) -> Option<i32> {
            self.lock().payments.get(&payment_id).map(|(b, _)| *b)
        }

        fn lock(&self) -> MutexGuard<'_, Tables> {
            self.tables.lock().unwrap_or_else(|e| e.into_inner())
        }
    }

    #[async_trait]
    impl ReservationRepository for MockReservationRepository {
        async fn create_booking_with_payment(&self, booking: BookingDraft, payment: PaymentDraft) -> Result<BookingReceipt, ServiceError> {
            let mut t = self.lock();
            if !t.users.contains(&booking.user_id) || !t.rooms.contains_key(&booking.room_id) {
                return Err(ServiceError::Db("insert on table \"booking\" violates foreign key constraint".into()));
            }
            t.next_booking += 1;
            let booking_id = t.next_booking;
            t.bookings.insert(booking_id, (booking.user_id, booking.room_id));

            let new_payment = NewPayment { booking_id, amount: payment.amount, payment_method: payment.payment_method };
            if let Err(e) = new_payment.validate() {
                // rollback
                t.bookings.remove(&booking_id);
                t.next_booking -= 1;
                return Err(e.into());
            }
            t.next_payment += 1;
            let payment_id = t.next_payment;
            t.payments.insert(payment_id, (booking_id, new_payment.amount));
            Ok(BookingReceipt { booking_id, payment_id, booking_date: Utc::now().into(), amount: new_payment.amount })
        }

        async fn count_booking_services(&self, booking_id: i32) -> Result<i64, ServiceError> {
            Ok(self.lock().line_items.get(&booking_id).copied().unwrap_or(0))
        }

        async fn decrement_all_rooms(&self, by: i64) -> Result<u64, ServiceError> {
            let mut t = self.lock();
            let by = i32::try_from(by).map_err(|_| ServiceError::Db("integer out of range".into()))?;
            // All or nothing, like the single UPDATE it stands in for.
            let updated = t
                .rooms
                .iter()
                .map(|(id, a)| a.checked_sub(by).map(|a| (*id, a)))
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| ServiceError::Db("integer out of range".into()))?;
            let rows = updated.len() as u64;
            t.rooms.extend(updated);
            Ok(rows)
        }
    }
}
