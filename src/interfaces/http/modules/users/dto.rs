//! User DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::{AccessToken, LoginResult};
use crate::domain::user::{NewUser, User, UserPatch};

/// User API representation. The password hash never leaves the service.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserDto {
    pub id: Uuid,
    pub display_name: String,
    pub phone_number: String,
    pub email: String,
    pub image_url: String,
    pub social_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            display_name: u.display_name,
            phone_number: u.phone_number,
            email: u.email,
            image_url: u.image_url,
            social_id: u.social_id,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub display_name: String,
    #[validate(length(min = 6, max = 20, message = "phone_number must be 6-20 characters"))]
    pub phone_number: String,
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub social_id: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(r: CreateUserRequest) -> Self {
        Self {
            display_name: r.display_name,
            phone_number: r.phone_number,
            email: r.email.unwrap_or_default(),
            image_url: r.image_url,
            social_id: r.social_id,
            password: r.password,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    pub display_name: Option<String>,
    #[validate(length(min = 6, max = 20))]
    pub phone_number: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub image_url: Option<String>,
    pub social_id: Option<String>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(r: UpdateUserRequest) -> Self {
        Self {
            display_name: r.display_name,
            phone_number: r.phone_number,
            email: r.email,
            image_url: r.image_url,
            social_id: r.social_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "phone_number is required"))]
    pub phone_number: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
    pub refresh_token: String,
    pub user: UserDto,
}

impl From<LoginResult> for LoginResponse {
    fn from(r: LoginResult) -> Self {
        Self {
            access_token: r.access.token,
            token_type: r.access.token_type,
            expires_in: r.access.expires_in,
            refresh_token: r.refresh_token,
            user: r.user.into(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RefreshRequest {
    #[validate(length(min = 1, message = "refresh_token is required"))]
    pub refresh_token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl From<AccessToken> for TokenResponse {
    fn from(t: AccessToken) -> Self {
        Self {
            access_token: t.token,
            token_type: t.token_type,
            expires_in: t.expires_in,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1, message = "phone_number is required"))]
    pub phone_number: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CheckPhoneRequest {
    #[validate(length(min = 1, message = "phone_number is required"))]
    pub phone_number: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckPhoneResponse {
    pub exists: bool,
}
