//! Use cases composed from repos, ownership checks and transactions.
//!
//! Services return `AppError` and domain structs; routes shape the JSON.

pub mod auth;
pub mod exercises;
pub mod professors;
pub mod registrations;
pub mod trainings;
pub mod users;
