pub mod claims;
pub mod jwt;
pub mod ownership;
pub mod password;
