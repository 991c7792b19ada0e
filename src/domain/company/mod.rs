//! Company aggregate: merchants owning parking lots

pub mod model;
pub mod repository;

pub use model::{Company, CompanyPatch, NewCompany};
pub use repository::CompanyRepository;
