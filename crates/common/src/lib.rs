//! Shared building blocks for the hotel booking workspace: health type,
//! pagination, lenient ids, timestamp parsing and tracing setup.

pub mod types;
pub mod utils;
pub mod pagination;
pub mod time;
pub mod ids;
