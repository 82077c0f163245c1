use std::sync::Arc;

use common::time::parse_timestamp;
use tracing::{info, instrument, warn};

use super::domain::{AvailabilityAdjustment, BookingDraft, BookingReceipt, CreateBookingInput, PaymentDraft};
use super::repository::ReservationRepository;
use crate::errors::ServiceError;

/// Reservation workflows independent of web framework
pub struct ReservationService<R: ReservationRepository> {
    repo: Arc<R>,
}

impl<R: ReservationRepository> ReservationService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create a booking and its payment atomically.
    ///
    /// # Examples
    /// ```
    /// use service::reservation::{ReservationService, repository::mock::MockReservationRepository};
    /// use service::reservation::domain::CreateBookingInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockReservationRepository::default().with_user(1).with_room(2, 3));
    /// let svc = ReservationService::new(repo.clone());
    /// let input = CreateBookingInput {
    ///     user_id: 1,
    ///     room_id: 2,
    ///     check_in_date: "2024-01-01".into(),
    ///     check_out_date: "2024-01-05".into(),
    ///     amount: "150.00".parse().unwrap(),
    ///     payment_method: "visa".into(),
    /// };
    /// let receipt = tokio_test::block_on(svc.create_booking(input)).unwrap();
    /// assert_eq!(repo.payment_booking(receipt.payment_id), Some(receipt.booking_id));
    /// ```
    #[instrument(skip(self, input), fields(user_id = input.user_id, room_id = input.room_id))]
    pub async fn create_booking(&self, input: CreateBookingInput) -> Result<BookingReceipt, ServiceError> {
        let draft = BookingDraft {
            user_id: input.user_id,
            room_id: input.room_id,
            check_in_date: parse_timestamp(&input.check_in_date)?,
            check_out_date: parse_timestamp(&input.check_out_date)?,
        };
        let pay = PaymentDraft { amount: input.amount, payment_method: input.payment_method };
        match self.repo.create_booking_with_payment(draft, pay).await {
            Ok(receipt) => {
                info!(booking_id = receipt.booking_id, payment_id = receipt.payment_id, amount = %receipt.amount, "booking_and_payment_created");
                Ok(receipt)
            }
            Err(e) => {
                warn!(error = %e, "booking_transaction_rolled_back");
                Err(e)
            }
        }
    }

    /// Decrement every room's availability by the number of booking-service
    /// rows attached to `booking_id`. Not idempotent. With no booking id the
    /// count is 0 and the update still runs.
    ///
    /// # Examples
    /// ```
    /// use service::reservation::{ReservationService, repository::mock::MockReservationRepository};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockReservationRepository::default().with_room(1, 5).with_line_items(7, 2));
    /// let svc = ReservationService::new(repo.clone());
    /// let adj = tokio_test::block_on(svc.adjust_availability(Some(7))).unwrap();
    /// assert_eq!(adj.decremented_by, 2);
    /// assert_eq!(repo.availability(1), Some(3));
    /// ```
    #[instrument(skip(self))]
    pub async fn adjust_availability(&self, booking_id: Option<i32>) -> Result<AvailabilityAdjustment, ServiceError> {
        let n = match booking_id {
            Some(id) => self.repo.count_booking_services(id).await?,
            None => {
                warn!("availability adjustment without booking_id");
                0
            }
        };
        let rooms_affected = self.repo.decrement_all_rooms(n).await?;
        info!(decremented_by = n, rooms_affected, "room_availability_adjusted");
        Ok(AvailabilityAdjustment { booking_id, decremented_by: n, rooms_affected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::repository::mock::MockReservationRepository;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn input(amount: &str, method: &str) -> CreateBookingInput {
        CreateBookingInput {
            user_id: 1,
            room_id: 2,
            check_in_date: "2024-01-01".into(),
            check_out_date: "2024-01-05".into(),
            amount: Decimal::from_str(amount).unwrap(),
            payment_method: method.into(),
        }
    }

    fn service(repo: &Arc<MockReservationRepository>) -> ReservationService<MockReservationRepository> {
        ReservationService::new(Arc::clone(repo))
    }

    #[tokio::test]
    async fn valid_input_creates_linked_pair() {
        let repo = Arc::new(MockReservationRepository::default().with_user(1).with_room(2, 1));
        let receipt = service(&repo).create_booking(input("150.00", "visa")).await.unwrap();
        assert_eq!(repo.booking_count(), 1);
        assert_eq!(repo.payment_count(), 1);
        assert_eq!(repo.payment_booking(receipt.payment_id), Some(receipt.booking_id));
        assert_eq!(receipt.amount, Decimal::from_str("150.00").unwrap());
    }

    #[tokio::test]
    async fn payment_failure_leaves_no_rows() {
        let repo = Arc::new(MockReservationRepository::default().with_user(1).with_room(2, 1));
        let err = service(&repo).create_booking(input("1.001", "visa")).await.unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(repo.booking_count(), 0);
        assert_eq!(repo.payment_count(), 0);

        let err = service(&repo).create_booking(input("10.00", "")).await.unwrap_err();
        assert!(err.to_string().contains("payment_method"));
        assert_eq!(repo.booking_count(), 0);
    }

    #[tokio::test]
    async fn unknown_room_fails_before_any_row() {
        let repo = Arc::new(MockReservationRepository::default().with_user(1));
        assert!(service(&repo).create_booking(input("10.00", "cash")).await.is_err());
        assert_eq!(repo.booking_count(), 0);
    }

    #[tokio::test]
    async fn bad_date_is_validation_error() {
        let repo = Arc::new(MockReservationRepository::default().with_user(1).with_room(2, 1));
        let mut i = input("10.00", "cash");
        i.check_in_date = "01/02/2024".into();
        let err = service(&repo).create_booking(i).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(repo.booking_count(), 0);
    }

    #[tokio::test]
    async fn adjustment_decrements_every_room() {
        let repo = Arc::new(
            MockReservationRepository::default()
                .with_room(1, 5)
                .with_room(2, 2)
                .with_room(3, 10)
                .with_line_items(11, 3),
        );
        let adj = service(&repo).adjust_availability(Some(11)).await.unwrap();
        assert_eq!(adj, AvailabilityAdjustment { booking_id: Some(11), decremented_by: 3, rooms_affected: 3 });
        assert_eq!(repo.availability(1), Some(2));
        assert_eq!(repo.availability(2), Some(-1));
        assert_eq!(repo.availability(3), Some(7));
    }

    #[tokio::test]
    async fn adjustment_is_not_idempotent() {
        let repo = Arc::new(MockReservationRepository::default().with_room(1, 10).with_line_items(4, 2));
        let svc = service(&repo);
        svc.adjust_availability(Some(4)).await.unwrap();
        svc.adjust_availability(Some(4)).await.unwrap();
        assert_eq!(repo.availability(1), Some(6));
    }

    #[tokio::test]
    async fn unknown_booking_decrements_by_zero() {
        let repo = Arc::new(MockReservationRepository::default().with_room(1, 4));
        let adj = service(&repo).adjust_availability(Some(999)).await.unwrap();
        assert_eq!(adj.decremented_by, 0);
        assert_eq!(adj.rooms_affected, 1);
        assert_eq!(repo.availability(1), Some(4));
    }

    #[tokio::test]
    async fn missing_booking_id_decrements_by_zero() {
        let repo = Arc::new(MockReservationRepository::default().with_room(1, 4).with_line_items(5, 2));
        let adj = service(&repo).adjust_availability(None).await.unwrap();
        assert_eq!(adj, AvailabilityAdjustment { booking_id: None, decremented_by: 0, rooms_affected: 1 });
        assert_eq!(repo.availability(1), Some(4));
    }

    #[tokio::test]
    async fn counter_underflow_is_db_error_and_leaves_rooms_untouched() {
        let repo = Arc::new(
            MockReservationRepository::default()
                .with_room(1, 10)
                .with_room(2, i32::MIN)
                .with_line_items(8, 1),
        );
        let err = service(&repo).adjust_availability(Some(8)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(ref m) if m == "integer out of range"));
        assert_eq!(repo.availability(1), Some(10));
        assert_eq!(repo.availability(2), Some(i32::MIN));
    }
}
