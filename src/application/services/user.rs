//! User account management

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::user::{NewUser, User, UserPatch};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

use super::auth::AuthSettings;

pub struct UserService {
    repos: Arc<dyn RepositoryProvider>,
    settings: AuthSettings,
}

impl UserService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, settings: AuthSettings) -> Self {
        Self { repos, settings }
    }

    /// Register a user. The phone number is the login name and must not be
    /// taken by another live account.
    pub async fn create(&self, req: NewUser) -> DomainResult<User> {
        if self.phone_taken(&req.phone_number).await? {
            return Err(DomainError::Validation(format!(
                "phone number {} is already registered",
                req.phone_number
            )));
        }

        let hash = self.settings.hash(&req.password)?;
        let user = User::new(req, hash);
        self.repos.users().create(&user).await?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<User> {
        self.repos
            .users()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id))
    }

    /// Whether a live account already uses `phone_number`
    pub async fn phone_taken(&self, phone_number: &str) -> DomainResult<bool> {
        Ok(self.repos.users().find_by_phone(phone_number).await?.is_some())
    }

    pub async fn update(&self, id: Uuid, patch: UserPatch) -> DomainResult<User> {
        let mut user = self.get(id).await?;

        if let Some(ref phone) = patch.phone_number {
            if let Some(owner) = self.repos.users().find_by_phone(phone).await? {
                if owner.id != id {
                    return Err(DomainError::Validation(format!(
                        "phone number {} is already registered",
                        phone
                    )));
                }
            }
        }

        user.apply_patch(patch);
        self.repos.users().update(&user).await?;
        Ok(user)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.repos.users().delete(id).await?;
        info!(user_id = %id, "User deleted");
        Ok(())
    }
}
