//! Repository functions: domain structs in, domain structs out, `DomainError` on failure.

pub mod exercises;
pub mod professors;
pub mod registrations;
pub mod trainings;
pub mod users;
