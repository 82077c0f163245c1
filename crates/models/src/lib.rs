//! SeaORM entities for the hotel schema plus thin `create` helpers that
//! validate input before inserting. Helpers take any `ConnectionTrait` so
//! they compose inside transactions.
pub mod errors;
pub mod db;
pub mod validate;
pub mod user;
pub mod room;
pub mod booking;
pub mod payment;
pub mod hotel_service;
pub mod booking_service;
pub mod discount;
pub mod discount_service;
pub mod review;

#[cfg(test)]
mod tests;
