//! Backend test support utilities
//!
//! Shared between unit and integration tests: logging initialization,
//! unique test data and error-body assertions.

pub mod error_body;
pub mod logging;
pub mod unique_helpers;
