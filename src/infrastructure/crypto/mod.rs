//! Token and password primitives

pub mod jwt;
pub mod password;
pub mod refresh_token;
