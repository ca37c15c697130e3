//! SeaORM adapters. Functions here speak `DbErr`; repos map to `DomainError`.

pub mod exercises_sea;
pub mod professors_sea;
pub mod registrations_sea;
pub mod trainings_sea;
pub mod users_sea;
