//! Company DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::CompanyLogin;
use crate::domain::company::{Company, CompanyPatch, NewCompany};

#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyDto {
    pub id: Uuid,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Company> for CompanyDto {
    fn from(c: Company) -> Self {
        Self {
            id: c.id,
            name: c.name,
            phone_number: c.phone_number,
            email: c.email,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCompanyRequest {
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub phone_number: String,
    #[validate(email(message = "invalid email"))]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}

impl From<CreateCompanyRequest> for NewCompany {
    fn from(r: CreateCompanyRequest) -> Self {
        Self {
            name: r.name,
            phone_number: r.phone_number,
            email: r.email,
            password: r.password,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCompanyRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub phone_number: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

impl From<UpdateCompanyRequest> for CompanyPatch {
    fn from(r: UpdateCompanyRequest) -> Self {
        Self {
            name: r.name,
            phone_number: r.phone_number,
            email: r.email,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CompanyLoginRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyLoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub company: CompanyDto,
}

impl From<CompanyLogin> for CompanyLoginResponse {
    fn from(l: CompanyLogin) -> Self {
        Self {
            access_token: l.access.token,
            token_type: l.access.token_type,
            expires_in: l.access.expires_in,
            company: l.company.into(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 1, message = "old_password is required"))]
    pub old_password: String,
    #[validate(length(min = 6, message = "new_password must be at least 6 characters"))]
    pub new_password: String,
}
