//! Reservation core: the atomic booking+payment creation and the bulk room
//! availability adjustment.
//!
//! Layered like the rest of the crate's business logic: plain domain types,
//! a repository trait with a SeaORM implementation (plus an in-memory mock for
//! tests), and a service that owns input parsing and logging.

pub mod domain;
pub mod repo;
pub mod repository;
pub mod service;

pub use service::ReservationService;
