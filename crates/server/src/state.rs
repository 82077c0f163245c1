use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::reservation::{repo::seaorm::SeaOrmReservationRepository, ReservationService};

/// Shared handler state: the pool plus the reservation service built on it.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub reservations: Arc<ReservationService<SeaOrmReservationRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmReservationRepository::new(db.clone()));
        Self { db, reservations: Arc::new(ReservationService::new(repo)) }
    }
}
