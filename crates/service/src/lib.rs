//! Service layer providing business-oriented operations on top of models.
//! - `db`: per-entity CRUD, list filters, room search and statistics.
//! - `reservation`: the booking+payment transaction and availability adjustment.
//! - Reuses validation and entity definitions in `models` crate.

pub mod errors;
pub mod db;
pub mod reservation;
#[cfg(test)]
pub mod test_support;
