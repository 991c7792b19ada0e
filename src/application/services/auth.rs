//! User authentication: login, refresh and password reset
//!
//! Login hands out a short-lived JWT access token plus an opaque refresh
//! token. The refresh token is stored only as a SHA-256 digest and can be
//! exchanged for new access tokens until it expires.

use std::sync::Arc;

use chrono::Duration;
use tracing::{info, warn};

use crate::domain::user::{RefreshToken, User};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig, TokenRole};
use crate::infrastructure::crypto::password::{hash_password, verify_password};
use crate::infrastructure::crypto::refresh_token::{generate_refresh_token, hash_refresh_token};

/// Credential settings shared by the user and company services
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub jwt: JwtConfig,
    pub refresh_ttl: Duration,
    pub bcrypt_cost: u32,
}

impl AuthSettings {
    pub(crate) fn hash(&self, password: &str) -> DomainResult<String> {
        hash_password(password, self.bcrypt_cost)
            .map_err(|e| DomainError::Internal(format!("Failed to hash password: {}", e)))
    }

    pub(crate) fn access_token(
        &self,
        subject: uuid::Uuid,
        role: TokenRole,
    ) -> DomainResult<AccessToken> {
        let token = create_token(subject, role, &self.jwt)
            .map_err(|e| DomainError::Internal(format!("Failed to create token: {}", e)))?;
        Ok(AccessToken {
            token,
            token_type: "Bearer".into(),
            expires_in: self.jwt.expiration_hours * 3600,
        })
    }
}

/// `true` only for a well-formed hash that matches
pub(crate) fn password_matches(password: &str, hash: &str) -> bool {
    verify_password(password, hash).unwrap_or(false)
}

#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub token_type: String,
    /// Seconds
    pub expires_in: i64,
}

/// Result of a successful user login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub access: AccessToken,
    pub refresh_token: String,
    pub user: User,
}

pub struct AuthService {
    repos: Arc<dyn RepositoryProvider>,
    settings: AuthSettings,
}

impl AuthService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, settings: AuthSettings) -> Self {
        Self { repos, settings }
    }

    /// Authenticate by phone number and password
    pub async fn login(&self, phone_number: &str, password: &str) -> DomainResult<LoginResult> {
        let Some(user) = self.repos.users().find_by_phone(phone_number).await? else {
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        };
        if !password_matches(password, &user.password_hash) {
            warn!(user_id = %user.id, "Rejected login");
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        }

        let access = self.settings.access_token(user.id, TokenRole::User)?;
        let refresh = generate_refresh_token();
        self.repos
            .refresh_tokens()
            .save(&RefreshToken::new(
                user.id,
                refresh.token_hash,
                self.settings.refresh_ttl,
            ))
            .await?;

        info!(user_id = %user.id, "User logged in");
        Ok(LoginResult {
            access,
            refresh_token: refresh.token,
            user,
        })
    }

    /// Exchange a live refresh token for a new access token
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<AccessToken> {
        let digest = hash_refresh_token(refresh_token);
        let Some(record) = self.repos.refresh_tokens().find_by_hash(&digest).await? else {
            return Err(DomainError::Unauthorized("Invalid refresh token".into()));
        };
        if record.is_expired() {
            return Err(DomainError::Unauthorized("Refresh token expired".into()));
        }
        if self.repos.users().find_by_id(record.user_id).await?.is_none() {
            return Err(DomainError::Unauthorized("Invalid refresh token".into()));
        }

        self.settings.access_token(record.user_id, TokenRole::User)
    }

    /// Set a new password for the account registered with `phone_number`
    pub async fn reset_password(&self, phone_number: &str, new_password: &str) -> DomainResult<()> {
        let Some(mut user) = self.repos.users().find_by_phone(phone_number).await? else {
            return Err(DomainError::NotFound {
                entity: "User",
                field: "phone_number",
                value: phone_number.to_string(),
            });
        };

        user.password_hash = self.settings.hash(new_password)?;
        user.updated_at = chrono::Utc::now();
        self.repos.users().update(&user).await?;

        info!(user_id = %user.id, "Password reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::{test_repos, test_settings};
    use crate::application::services::UserService;
    use crate::domain::user::NewUser;
    use crate::infrastructure::crypto::jwt::verify_token;

    async fn register(users: &UserService, phone: &str, password: &str) -> User {
        users
            .create(NewUser {
                display_name: "Rider".into(),
                phone_number: phone.into(),
                email: String::new(),
                image_url: String::new(),
                social_id: String::new(),
                password: password.into(),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn login_then_refresh() {
        let repos = test_repos().await;
        let settings = test_settings();
        let users = UserService::new(repos.clone(), settings.clone());
        let auth = AuthService::new(repos, settings.clone());

        let user = register(&users, "0901000001", "hunter22").await;
        let login = auth.login("0901000001", "hunter22").await.unwrap();
        assert_eq!(login.user.id, user.id);
        let claims = verify_token(&login.access.token, &settings.jwt).unwrap();
        assert_eq!(claims.subject(), Some(user.id));

        let renewed = auth.refresh(&login.refresh_token).await.unwrap();
        assert_eq!(renewed.token_type, "Bearer");
        assert!(matches!(
            auth.refresh("prk_bogus").await,
            Err(DomainError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let repos = test_repos().await;
        let settings = test_settings();
        let users = UserService::new(repos.clone(), settings.clone());
        let auth = AuthService::new(repos, settings);

        register(&users, "0901000002", "hunter22").await;
        assert!(matches!(
            auth.login("0901000002", "wrong").await,
            Err(DomainError::Unauthorized(_))
        ));
        assert!(matches!(
            auth.login("0000000000", "hunter22").await,
            Err(DomainError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn reset_password_replaces_credentials() {
        let repos = test_repos().await;
        let settings = test_settings();
        let users = UserService::new(repos.clone(), settings.clone());
        let auth = AuthService::new(repos, settings);

        register(&users, "0901000003", "old-pass").await;
        auth.reset_password("0901000003", "new-pass").await.unwrap();

        assert!(auth.login("0901000003", "old-pass").await.is_err());
        assert!(auth.login("0901000003", "new-pass").await.is_ok());
    }

    #[tokio::test]
    async fn expired_refresh_token_is_rejected() {
        let repos = test_repos().await;
        let settings = AuthSettings {
            refresh_ttl: Duration::seconds(-1),
            ..test_settings()
        };
        let users = UserService::new(repos.clone(), settings.clone());
        let auth = AuthService::new(repos, settings);

        register(&users, "0901000004", "hunter22").await;
        let login = auth.login("0901000004", "hunter22").await.unwrap();
        assert!(matches!(
            auth.refresh(&login.refresh_token).await,
            Err(DomainError::Unauthorized(_))
        ));
    }
}
