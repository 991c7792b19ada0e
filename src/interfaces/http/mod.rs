//! HTTP REST API
//!
//! - `common`: response envelopes, error mapping and extractors
//! - `modules`: DTOs and handlers per resource
//! - `router`: route table, shared state and Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, AppState};
