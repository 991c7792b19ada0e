//! Company repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Company;
use crate::domain::DomainResult;

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Save a new company
    async fn create(&self, company: &Company) -> DomainResult<()>;

    /// Find a live company by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Company>>;

    /// Find a live company by login email
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Company>>;

    /// Update profile fields and password hash
    async fn update(&self, company: &Company) -> DomainResult<()>;
}
