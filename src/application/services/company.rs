//! Merchant (company) accounts

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::company::{Company, CompanyPatch, NewCompany};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::infrastructure::crypto::jwt::TokenRole;

use super::auth::{password_matches, AccessToken, AuthSettings};

/// Result of a successful merchant login
#[derive(Debug, Clone)]
pub struct CompanyLogin {
    pub company: Company,
    pub access: AccessToken,
}

pub struct CompanyService {
    repos: Arc<dyn RepositoryProvider>,
    settings: AuthSettings,
}

impl CompanyService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, settings: AuthSettings) -> Self {
        Self { repos, settings }
    }

    async fn ensure_email_free(&self, email: &str, owner: Option<Uuid>) -> DomainResult<()> {
        match self.repos.companies().find_by_email(email).await? {
            Some(existing) if Some(existing.id) != owner => Err(DomainError::Validation(format!(
                "email {} is already registered",
                email
            ))),
            _ => Ok(()),
        }
    }

    pub async fn create(&self, req: NewCompany) -> DomainResult<Company> {
        self.ensure_email_free(&req.email, None).await?;
        let hash = self.settings.hash(&req.password)?;
        let company = Company::new(req, hash);
        self.repos.companies().create(&company).await?;
        info!(company_id = %company.id, "Company registered");
        Ok(company)
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Company> {
        self.repos
            .companies()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Company", id))
    }

    pub async fn update(&self, id: Uuid, patch: CompanyPatch) -> DomainResult<Company> {
        let mut company = self.get(id).await?;
        if let Some(ref email) = patch.email {
            self.ensure_email_free(email, Some(id)).await?;
        }
        company.apply_patch(patch);
        self.repos.companies().update(&company).await?;
        Ok(company)
    }

    pub async fn login(&self, email: &str, password: &str) -> DomainResult<CompanyLogin> {
        let Some(company) = self.repos.companies().find_by_email(email).await? else {
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        };
        if !password_matches(password, &company.password_hash) {
            warn!(company_id = %company.id, "Rejected merchant login");
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        }

        let access = self.settings.access_token(company.id, TokenRole::Company)?;
        Ok(CompanyLogin { company, access })
    }

    /// Change the password after checking the current one
    pub async fn update_password(
        &self,
        id: Uuid,
        old_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        let mut company = self.get(id).await?;
        if !password_matches(old_password, &company.password_hash) {
            return Err(DomainError::Validation("current password is incorrect".into()));
        }

        company.password_hash = self.settings.hash(new_password)?;
        company.updated_at = Utc::now();
        self.repos.companies().update(&company).await?;
        info!(company_id = %id, "Company password changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::{test_repos, test_settings};

    fn request(email: &str) -> NewCompany {
        NewCompany {
            name: "Acme".into(),
            phone_number: "0281234567".into(),
            email: email.into(),
            password: "hunter22".into(),
        }
    }

    #[tokio::test]
    async fn login_and_password_change() {
        let repos = test_repos().await;
        let service = CompanyService::new(repos, test_settings());

        let c = service.create(request("ops@acme.test")).await.unwrap();
        let login = service.login("ops@acme.test", "hunter22").await.unwrap();
        assert_eq!(login.company.id, c.id);
        assert!(!login.access.token.is_empty());

        assert!(matches!(
            service.update_password(c.id, "wrong", "next-pass").await,
            Err(DomainError::Validation(_))
        ));
        service
            .update_password(c.id, "hunter22", "next-pass")
            .await
            .unwrap();

        assert!(service.login("ops@acme.test", "hunter22").await.is_err());
        assert!(service.login("ops@acme.test", "next-pass").await.is_ok());
    }

    #[tokio::test]
    async fn email_must_be_unique() {
        let repos = test_repos().await;
        let service = CompanyService::new(repos, test_settings());

        service.create(request("a@acme.test")).await.unwrap();
        let b = service.create(request("b@acme.test")).await.unwrap();

        assert!(service.create(request("a@acme.test")).await.is_err());
        let err = service
            .update(
                b.id,
                CompanyPatch {
                    email: Some("a@acme.test".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
